//! Boot package reconciliation.
//!
//! GHC ships a set of packages that the generated set must never rebuild.
//! Dependencies may still mention those names, so every baseline name the
//! batch did not render is pinned to `null`, marking it as provided by the
//! toolchain.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::render::context::Indent;

/// Packages provided by the GHC distribution itself.
static BOOT_PACKAGES: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    [
        "array",
        "base",
        "binary",
        "bytestring",
        "Cabal",
        "containers",
        "deepseq",
        "directory",
        "filepath",
        "ghc",
        "ghc-boot",
        "ghc-boot-th",
        "ghc-compact",
        "ghc-heap",
        "ghc-prim",
        "ghci",
        "haskeline",
        "hpc",
        "integer-gmp",
        "libiserv",
        "mtl",
        "parsec",
        "pretty",
        "process",
        "rts",
        "stm",
        "template-haskell",
        "terminfo",
        "text",
        "time",
        "transformers",
        "unix",
        "xhtml",
    ]
    .into_iter()
    .collect()
});

/// The baseline names absent from the rendered set, in lexicographic order.
pub fn missing_boot_packages(rendered: &BTreeSet<&str>) -> Vec<&'static str> {
    BOOT_PACKAGES
        .iter()
        .filter(|name| !rendered.contains(*name))
        .copied()
        .collect()
}

/// The stub line pinning one baseline name to `null`, indented to match the
/// surrounding package entries.
pub fn stub_line(name: &str, indent: &Indent) -> String {
    format!("{}{} = null;", indent.level(3), name)
}
