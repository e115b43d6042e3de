//! Resolver plan loading.
//!
//! The resolver serializes its outcome as a JSON array of tagged entries,
//! one per package: `status: resolved` with the build description inline,
//! or `status: failed` with the diagnostic text. This module only reads
//! that file; producing it is the resolver's business.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::ResolutionResult;

/// Load a resolver plan from a path.
pub fn load_plan(path: &Path) -> Result<Vec<ResolutionResult>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read plan: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse plan: {}", path.display()))
}
