//! Bindings - references to external attributes by path.
//!
//! A Binding names a resource outside the generated package set, such as a
//! native library exposed under a nested nixpkgs attribute
//! (`xorg.libXrandr`). Identity, ordering, and hashing are all by the full
//! segment path, never by a pretty-printed form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A reference to an external named, path-structured attribute.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Binding {
    segments: Vec<String>,
}

/// Error parsing a binding path.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid binding path `{0}`")]
pub struct BindingParseError(String);

impl Binding {
    /// The path segments, outermost attribute first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The innermost segment, used as the formal argument name when the
    /// binding is passed into a package expression.
    pub fn attr_name(&self) -> &str {
        // Parsing guarantees at least one segment.
        self.segments.last().expect("binding has no segments")
    }
}

impl FromStr for Binding {
    type Err = BindingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(BindingParseError(s.to_string()));
        }

        let segments: Vec<String> = s.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(BindingParseError(s.to_string()));
        }

        Ok(Binding { segments })
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl Serialize for Binding {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Binding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
