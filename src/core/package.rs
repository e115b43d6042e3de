//! Package descriptions and resolver outcomes.
//!
//! A PackageDescription is the resolver's final word on how one package is
//! built. A ResolutionResult wraps either a description or the diagnostic
//! text explaining why the resolver could not produce one.

use serde::{Deserialize, Serialize};

use crate::core::dependency::DependencySets;
use crate::core::package_id::PackageId;

fn default_true() -> bool {
    true
}

/// A resolved, buildable description of one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescription {
    /// Name and version; the name is the rendered attribute key.
    #[serde(flatten)]
    pub id: PackageId,

    /// Dependency declaration across all kinds and build modes.
    #[serde(default)]
    pub dependencies: DependencySets,

    /// Whether the rendered entry requests test execution.
    #[serde(default = "default_true")]
    pub check_enabled: bool,

    /// Whether the rendered entry requests documentation generation.
    #[serde(default = "default_true")]
    pub docs_enabled: bool,
}

impl PackageDescription {
    /// Create a description with no dependencies.
    pub fn new(id: PackageId) -> Self {
        PackageDescription {
            id,
            dependencies: DependencySets::default(),
            check_enabled: true,
            docs_enabled: true,
        }
    }

    /// The derived attribute name.
    pub fn name(&self) -> &str {
        self.id.name()
    }
}

/// The outcome of resolving one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionResult {
    /// The package resolved to a buildable description.
    Resolved(PackageDescription),

    /// The resolver failed; the diagnostic is opaque upstream text.
    Failed { error: String },
}
