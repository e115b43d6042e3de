//! Shared utilities

pub mod config;

pub use config::{Config, CONFIG_FILE_NAME};
