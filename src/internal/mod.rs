// src/internal/mod.rs

pub mod config;
pub mod demo;
pub mod http;
pub mod logger;
pub mod render;
