// src/internal/logger/logger.rs

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::internal::config::LoggingConfig;

/// Initialize the global tracing subscriber from the logging configuration.
///
/// `RUST_LOG` wins over the configured level when set. Diagnostics go to
/// the console, to a file, or to both, depending on `output_path` and
/// `disable_console`.
pub fn init_logger(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.level.clone()));

    match (&cfg.output_path, cfg.disable_console) {
        // Both console and file
        (Some(output_path), false) => {
            let log_file = open_log_file(output_path, cfg.append_to_file)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(cfg.color).with_target(true))
                .with(
                    fmt::layer()
                        .with_writer(FileWriter::new(log_file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .init();
        }
        // Only file
        (Some(output_path), true) => {
            let log_file = open_log_file(output_path, cfg.append_to_file)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(FileWriter::new(log_file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .init();
        }
        // Only console
        (None, false) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(cfg.color).with_target(true))
                .init();
        }
        // Neither sink configured
        (None, true) => {
            tracing_subscriber::registry().with(filter).init();
        }
    }

    Ok(())
}

/// Create or open the log file, creating parent directories as needed.
fn open_log_file(path: &str, append: bool) -> anyhow::Result<fs::File> {
    let path = Path::new(path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(append)
        .truncate(!append)
        .write(true)
        .open(path)?;

    Ok(file)
}

/// Mutex-guarded file writer usable as a tracing `MakeWriter`.
#[derive(Clone)]
struct FileWriter {
    file: Arc<Mutex<fs::File>>,
}

impl FileWriter {
    fn new(file: fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

impl io::Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.file.lock() {
            Ok(mut file) => file.write(buf),
            Err(_) => Err(io::Error::other("log file lock poisoned")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Err(io::Error::other("log file lock poisoned")),
        }
    }
}

impl<'a> fmt::MakeWriter<'a> for FileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
