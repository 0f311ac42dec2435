// src/internal/config/config.rs

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version banner shown at startup and by `--version`.
pub fn get_version_info() -> String {
    format!("reqtour version {VERSION}")
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the demonstration sequence points and writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_download_path")]
    pub download_path: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            download_path: default_download_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Client-wide request timeout; individual helpers may override it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub append_to_file: bool,
    #[serde(default)]
    pub disable_console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            color: default_true(),
            output_path: None,
            append_to_file: false,
            disable_console: false,
        }
    }
}

fn default_base_url() -> String {
    "https://httpbin.org".to_string()
}

fn default_download_path() -> String {
    std::env::temp_dir()
        .join("reqtour-download.bin")
        .to_string_lossy()
        .into_owned()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Layered load: serde defaults, then optional config files, then
    /// `REQTOUR_*` environment variables (double underscore separates
    /// nesting levels, e.g. `REQTOUR_DEMO__BASE_URL`).
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("reqtour").required(false))
            .add_source(File::with_name("/etc/reqtour/config").required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("REQTOUR")
                    .try_parsing(true)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let app_config: AppConfig = settings.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.demo.base_url.trim().is_empty() {
            return Err(ConfigError::Message(
                "demo.base_url must not be empty".to_string(),
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "http.timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
