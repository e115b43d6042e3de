//! Per-run rendering configuration.

use std::collections::BTreeSet;

/// GHC version targeted when the caller gives no override.
pub const DEFAULT_GHC_VERSION: &str = "8.6.5";

/// Indentation style for the generated expression.
///
/// The document skeleton is expressed in indent levels; with the default
/// width, package entries land at column six.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// Create an indent style with the given width in spaces.
    pub fn new(width: usize) -> Self {
        Indent { width }
    }

    /// The whitespace prefix for the given nesting depth.
    pub fn level(&self, depth: usize) -> String {
        " ".repeat(self.width * depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent { width: 2 }
    }
}

/// Everything one generation run needs to know besides the packages
/// themselves.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Run test suites for local packages.
    pub enable_tests: bool,

    /// Run benchmarks for local packages.
    pub enable_benchmarks: bool,

    /// Build haddock documentation for local packages.
    pub enable_docs: bool,

    /// Indentation style for the document.
    pub indent: Indent,

    /// Names of the directly-requested packages. Only these ever have
    /// tests, benchmarks, or docs activated.
    pub locals: BTreeSet<String>,

    /// GHC version the generated set targets, e.g. "8.6.5".
    pub ghc_version: String,

    /// Tool name for the banner comment.
    pub tool_name: String,

    /// Tool version for the banner comment.
    pub tool_version: String,
}

impl RenderContext {
    /// Create a context targeting the given GHC version, with all build
    /// modes disabled and no local packages.
    pub fn new(ghc_version: impl Into<String>) -> Self {
        RenderContext {
            enable_tests: false,
            enable_benchmarks: false,
            enable_docs: false,
            indent: Indent::default(),
            locals: BTreeSet::new(),
            ghc_version: ghc_version.into(),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Whether a package was directly requested by the caller.
    pub fn is_local(&self, name: &str) -> bool {
        self.locals.contains(name)
    }

    /// The nixpkgs attribute naming the compiler, e.g. `ghc865`.
    pub fn ghc_attr(&self) -> String {
        format!("ghc{}", self.ghc_version.replace('.', ""))
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        RenderContext::new(DEFAULT_GHC_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_levels() {
        let indent = Indent::default();
        assert_eq!(indent.level(0), "");
        assert_eq!(indent.level(1), "  ");
        assert_eq!(indent.level(3), "      ");

        let wide = Indent::new(4);
        assert_eq!(wide.level(2), "        ");
    }

    #[test]
    fn test_ghc_attr_strips_dots() {
        let context = RenderContext::new("8.6.5");
        assert_eq!(context.ghc_attr(), "ghc865");

        // Already-stripped input passes through unchanged.
        let context = RenderContext::new("865");
        assert_eq!(context.ghc_attr(), "ghc865");
    }

    #[test]
    fn test_locality_is_membership_in_locals() {
        let mut context = RenderContext::default();
        context.locals.insert("my-app".to_string());

        assert!(context.is_local("my-app"));
        assert!(!context.is_local("conduit"));
    }
}
