use crate::internal::config::AppConfig;
use anyhow::Context;
use clap::{Arg, Command};

pub fn build_cli() -> Command {
    // Leak the version string to get a 'static lifetime
    let version: &'static str =
        Box::leak(crate::internal::config::get_version_info().into_boxed_str());

    Command::new("reqtour")
        .version(version)
        .about("A guided tour of HTTP requests against an echo service")
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("Base URL of the echo service (default: https://httpbin.org)"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_parser(clap::value_parser!(u64))
                .help("Request timeout in seconds"),
        )
        .arg(
            Arg::new("download-path")
                .long("download-path")
                .help("Where the download example writes its file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log level (trace|debug|info|warn|error)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to config file (default: ./reqtour.toml, /etc/reqtour/config.toml)"),
        )
}

pub fn parse_config(matches: &clap::ArgMatches) -> anyhow::Result<AppConfig> {
    let config_file = matches.get_one::<String>("config").map(|s| s.as_str());

    let mut config = AppConfig::load(config_file).context("failed to load configuration")?;

    // Override with CLI values
    if let Some(url) = matches.get_one::<String>("base-url") {
        config.demo.base_url = url.to_string();
    }

    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        config.http.timeout_secs = *timeout;
    }

    if let Some(path) = matches.get_one::<String>("download-path") {
        config.demo.download_path = path.to_string();
    }

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.to_string();
    }

    config.validate().context("invalid configuration")?;

    Ok(config)
}
