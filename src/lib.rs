pub mod cli;
pub mod internal;

// Re-export commonly used types
pub use internal::config::{AppConfig, HttpConfig};
pub use internal::http::{Client, Download, HttpResponse, Outcome, RequestError};
pub use internal::render::{format_response, handle_outcome};
