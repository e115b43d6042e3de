//! Haskell package version numbers.
//!
//! Cabal versions are dotted sequences of numeric components with no fixed
//! arity (`0.5`, `4.12.0.0`), so semver does not apply. Ordering is
//! lexicographic over the components, matching `Data.Version`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cabal-style package version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PkgVersion(Vec<u64>);

/// Error parsing a version string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid package version `{0}`")]
pub struct VersionParseError(String);

impl PkgVersion {
    /// Create a version from its numeric components.
    pub fn new(components: Vec<u64>) -> Self {
        PkgVersion(components)
    }

    /// The numeric components, most significant first.
    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

impl FromStr for PkgVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(VersionParseError(s.to_string()));
        }

        let components = s
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| VersionParseError(s.to_string()))?;

        Ok(PkgVersion(components))
    }
}

impl fmt::Display for PkgVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for PkgVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PkgVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_roundtrip() {
        let version: PkgVersion = "4.12.0.0".parse().unwrap();
        assert_eq!(version.components(), &[4, 12, 0, 0]);
        assert_eq!(version.to_string(), "4.12.0.0");
    }

    #[test]
    fn test_parse_short_version() {
        let version: PkgVersion = "0.5".parse().unwrap();
        assert_eq!(version.components(), &[0, 5]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<PkgVersion>().is_err());
        assert!("1..2".parse::<PkgVersion>().is_err());
        assert!("1.2-alpha".parse::<PkgVersion>().is_err());
        assert!("abc".parse::<PkgVersion>().is_err());
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let v1: PkgVersion = "1.0".parse().unwrap();
        let v2: PkgVersion = "1.0.0".parse().unwrap();
        let v3: PkgVersion = "1.2".parse().unwrap();

        assert!(v1 < v2);
        assert!(v2 < v3);
    }

    #[test]
    fn test_serde_as_string() {
        let version: PkgVersion = serde_json::from_str("\"2.4.1\"").unwrap();
        assert_eq!(version.to_string(), "2.4.1");
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"2.4.1\"");
    }
}
