//! Final document assembly.
//!
//! Pure string concatenation with a fixed skeleton: banner, parameterized
//! header, the `let … in` wrapper holding boot stubs and package entries,
//! then the compiler override footer. Given identical inputs the output is
//! byte-for-byte identical; every collection feeding this module iterates
//! in a defined order.

use std::fmt::Write as _;

use crate::render::context::RenderContext;

/// Assemble the complete override expression.
///
/// `stubs` are the boot-package lines in lexicographic order; `entries` are
/// the rendered package entries in the order their resolutions arrived.
pub fn assemble(stubs: &[String], entries: &[String], context: &RenderContext) -> String {
    let indent = &context.indent;
    let mut doc = String::new();

    let _ = writeln!(
        doc,
        "# Generated using {} {}.",
        context.tool_name, context.tool_version
    );
    let _ = writeln!(doc);
    let _ = writeln!(doc, "{{ pkgs ? (import <nixpkgs> {{}})");
    let _ = writeln!(doc, ", compiler ? pkgs.haskell.packages.{}", context.ghc_attr());
    let _ = writeln!(doc, "}}:");
    let _ = writeln!(doc);
    let _ = writeln!(doc, "with pkgs.haskell.lib;");
    let _ = writeln!(doc);
    let _ = writeln!(doc, "let");
    let _ = writeln!(
        doc,
        "{}stackPackages = {{ pkgs, stdenv, callPackage }}:",
        indent.level(1)
    );
    let _ = writeln!(doc, "{}self: {{", indent.level(2));

    for line in stubs.iter().chain(entries.iter()) {
        let _ = writeln!(doc, "{line}");
    }

    let _ = writeln!(doc, "{}}};", indent.level(2));
    let _ = writeln!(doc, "in compiler.override {{");
    let _ = writeln!(doc, "{}initialPackages = stackPackages;", indent.level(1));
    let _ = writeln!(
        doc,
        "{}configurationCommon = {{ ... }}: self: super: {{}};",
        indent.level(1)
    );
    let _ = writeln!(doc, "{}compilerConfig = self: super: {{}};", indent.level(1));
    let _ = writeln!(doc, "}}");

    doc
}
