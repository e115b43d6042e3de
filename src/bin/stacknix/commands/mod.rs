//! Command implementations for the stacknix CLI.

pub mod completions;
pub mod generate;
