pub mod client;
pub mod error;
pub mod response;

// Re-export main types
pub use client::{Client, Download};
pub use error::RequestError;
pub use response::{HttpResponse, Outcome};
