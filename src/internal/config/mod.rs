pub mod config;

// Re-export main types
pub use config::{get_version_info, AppConfig, DemoConfig, HttpConfig, LoggingConfig, VERSION};
