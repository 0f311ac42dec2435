pub mod render;

pub use render::{format_response, handle_outcome};
