//! Rendering one package into its override entry.
//!
//! An entry binds the package's attribute name to a `callPackage`
//! application: the underlying package expression, then the native-binding
//! clause supplying pkg-config and system references from `pkgs`. The
//! underlying expression comes through the [`ExpressionRenderer`] seam so
//! the pipeline never depends on its exact shape.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::core::{BuildMode, DependencyKind, PackageDescription};
use crate::render::binding_filter;
use crate::render::context::{Indent, RenderContext};
use crate::render::mode_filter;

/// Produces the Nix sub-expression describing how one package is built.
pub trait ExpressionRenderer {
    /// Render the parenthesizable expression for an already mode-filtered
    /// description. Must be pure text generation; malformed descriptions
    /// are an upstream contract violation, not handled here.
    fn render(&self, package: &PackageDescription, indent: &Indent) -> String;
}

/// cabal2nix-style `mkDerivation` expression printer.
///
/// Emits a lambda whose parameter set names every attribute the body
/// references, then the `mkDerivation` call with the per-kind, per-mode
/// dependency lists. Source location and hashing are out of scope, so no
/// `src` or `sha256` fields appear.
#[derive(Debug, Clone, Copy, Default)]
pub struct MkDerivation;

fn depends_field(mode: BuildMode, kind: DependencyKind) -> &'static str {
    match (mode, kind) {
        (BuildMode::Normal, DependencyKind::Haskell) => "libraryHaskellDepends",
        (BuildMode::Normal, DependencyKind::PkgConfig) => "libraryPkgconfigDepends",
        (BuildMode::Normal, DependencyKind::System) => "librarySystemDepends",
        (BuildMode::Normal, DependencyKind::Tool) => "libraryToolDepends",
        (BuildMode::Test, DependencyKind::Haskell) => "testHaskellDepends",
        (BuildMode::Test, DependencyKind::PkgConfig) => "testPkgconfigDepends",
        (BuildMode::Test, DependencyKind::System) => "testSystemDepends",
        (BuildMode::Test, DependencyKind::Tool) => "testToolDepends",
        (BuildMode::Benchmark, DependencyKind::Haskell) => "benchmarkHaskellDepends",
        (BuildMode::Benchmark, DependencyKind::PkgConfig) => "benchmarkPkgconfigDepends",
        (BuildMode::Benchmark, DependencyKind::System) => "benchmarkSystemDepends",
        (BuildMode::Benchmark, DependencyKind::Tool) => "benchmarkToolDepends",
    }
}

impl ExpressionRenderer for MkDerivation {
    fn render(&self, package: &PackageDescription, indent: &Indent) -> String {
        let mut params: BTreeSet<&str> = BTreeSet::new();
        for kind in DependencyKind::ALL {
            let buckets = package.dependencies.kind(kind);
            for mode in BuildMode::ALL {
                for binding in buckets.bucket(mode) {
                    params.insert(binding.attr_name());
                }
            }
        }

        let mut out = String::new();
        out.push_str("{ mkDerivation");
        for param in &params {
            let _ = write!(out, ", {param}");
        }
        out.push_str(" }:\n");

        let _ = writeln!(out, "{}mkDerivation {{", indent.level(4));
        let _ = writeln!(out, "{}pname = \"{}\";", indent.level(5), package.name());
        let _ = writeln!(
            out,
            "{}version = \"{}\";",
            indent.level(5),
            package.id.version()
        );

        for mode in BuildMode::ALL {
            for kind in DependencyKind::ALL {
                let bucket = package.dependencies.kind(kind).bucket(mode);
                if bucket.is_empty() {
                    continue;
                }
                let names: Vec<&str> = bucket.iter().map(|b| b.attr_name()).collect();
                let _ = writeln!(
                    out,
                    "{}{} = [ {} ];",
                    indent.level(5),
                    depends_field(mode, kind),
                    names.join(" ")
                );
            }
        }

        // Absent means the package-set default (enabled).
        if !package.check_enabled {
            let _ = writeln!(out, "{}doCheck = false;", indent.level(5));
        }
        if !package.docs_enabled {
            let _ = writeln!(out, "{}doHaddock = false;", indent.level(5));
        }

        let _ = write!(out, "{}}}", indent.level(4));
        out
    }
}

/// Render one package's override entry.
///
/// Applies the build-mode policy, resolves the entry's test/docs flags from
/// locality, and attaches the filtered native-binding clause.
pub fn render_entry(
    package: &PackageDescription,
    context: &RenderContext,
    expression: &dyn ExpressionRenderer,
) -> String {
    let is_local = context.is_local(package.name());

    let mut package = mode_filter::apply(
        package.clone(),
        is_local,
        context.enable_tests,
        context.enable_benchmarks,
    );
    package.check_enabled = context.enable_tests && is_local;
    package.docs_enabled = context.enable_docs && is_local;

    let clause: Vec<String> = binding_filter::native_bindings(&package.dependencies)
        .iter()
        .map(|binding| format!("{} = pkgs.{};", binding.attr_name(), binding))
        .collect();

    format!(
        "{}\"{}\" = callPackage ({}) {{{}}};",
        context.indent.level(3),
        package.name(),
        expression.render(&package, &context.indent),
        clause.join(" "),
    )
}
