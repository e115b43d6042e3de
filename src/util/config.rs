//! Configuration file support for stacknix.
//!
//! An optional `stacknix.toml` in the working directory supplies defaults
//! for the generate command. Command-line flags take precedence over the
//! file; a missing file means built-in defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "stacknix.toml";

/// stacknix configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GHC version the generated set targets (e.g. "8.6.5").
    pub ghc_version: Option<String>,

    /// Indent width in spaces.
    pub indent: Option<usize>,

    /// Run test suites for local packages.
    pub enable_tests: Option<bool>,

    /// Run benchmarks for local packages.
    pub enable_benchmarks: Option<bool>,

    /// Build haddock documentation for local packages.
    pub enable_haddock: Option<bool>,

    /// Packages considered local (directly requested).
    pub locals: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }
}
