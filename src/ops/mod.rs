//! High-level operations.
//!
//! This module contains the implementation of stacknix commands.

pub mod generate;

pub use generate::{generate, render_document, GenerateError, GenerateOptions};
