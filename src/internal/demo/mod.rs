// src/internal/demo/mod.rs

pub mod demo;

// Re-export main types
pub use demo::run;
