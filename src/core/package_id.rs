//! Package identification - WHAT package (name + version).
//!
//! The name is the derived attribute name under which the package is keyed
//! in the generated package set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::version::PkgVersion;

/// A unique identifier for a package.
///
/// Ordered by name, then version, so collections of ids iterate in a
/// stable, human-predictable order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId {
    name: String,
    version: PkgVersion,
}

impl PackageId {
    /// Create a new package ID.
    pub fn new(name: impl Into<String>, version: PkgVersion) -> Self {
        PackageId {
            name: name.into(),
            version,
        }
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the package version.
    pub fn version(&self) -> &PkgVersion {
        &self.version
    }
}

impl PartialOrd for PackageId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.version.cmp(&other.version))
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str, version: &str) -> PackageId {
        PackageId::new(name, version.parse().unwrap())
    }

    #[test]
    fn test_display() {
        assert_eq!(id("conduit", "1.3.1").to_string(), "conduit-1.3.1");
    }

    #[test]
    fn test_ordering() {
        assert!(id("aaa", "1.0") < id("bbb", "1.0"));
        assert!(id("aaa", "1.0") < id("aaa", "2.0"));
    }

    #[test]
    fn test_serde() {
        let parsed: PackageId =
            serde_json::from_str(r#"{"name":"text","version":"1.2.3.1"}"#).unwrap();
        assert_eq!(parsed, id("text", "1.2.3.1"));
    }
}
