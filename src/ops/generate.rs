//! Implementation of `stacknix generate`.
//!
//! Orchestrates the pipeline end to end: partition the batch, fail fast on
//! resolution failures, reconcile the boot baseline, render every entry,
//! assemble the document, and write it out in one shot. Nothing is written
//! until the whole document exists, so the output boundary is all-or-nothing.

use std::collections::BTreeSet;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;

use crate::core::ResolutionResult;
use crate::render::{boot, document, partition, render_entry, MkDerivation, RenderContext};

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Write the document here instead of standard output.
    pub output: Option<PathBuf>,
}

/// Fatal outcomes of a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// One or more packages could not be resolved upstream. The individual
    /// diagnostics have already been reported to the error channel.
    #[error("{count} package(s) failed to resolve; no output written")]
    ResolutionFailed { count: usize },

    /// The output sink could not be written.
    #[error("failed to write output to {path}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Render the full document for a batch of resolution results.
///
/// Fails without producing any text if the batch contains failures; every
/// diagnostic is printed to stderr first.
pub fn render_document(results: Vec<ResolutionResult>, context: &RenderContext) -> Result<String> {
    let (failures, packages) = partition(results);

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("error: {failure}");
        }
        return Err(GenerateError::ResolutionFailed {
            count: failures.len(),
        }
        .into());
    }

    tracing::debug!("rendering {} package entries", packages.len());

    let expression = MkDerivation;
    let entries: Vec<String> = packages
        .iter()
        .map(|package| render_entry(package, context, &expression))
        .collect();

    let rendered_names: BTreeSet<&str> = packages.iter().map(|p| p.name()).collect();
    let stubs: Vec<String> = boot::missing_boot_packages(&rendered_names)
        .iter()
        .map(|name| boot::stub_line(name, &context.indent))
        .collect();

    tracing::debug!("stubbed {} boot packages", stubs.len());

    Ok(document::assemble(&stubs, &entries, context))
}

/// Run the whole pipeline and write the document to the configured sink.
pub fn generate(
    results: Vec<ResolutionResult>,
    context: &RenderContext,
    options: &GenerateOptions,
) -> Result<()> {
    let doc = render_document(results, context)?;

    match &options.output {
        Some(path) => {
            std::fs::write(path, &doc).map_err(|source| GenerateError::OutputWrite {
                path: path.display().to_string(),
                source,
            })?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            stdout
                .lock()
                .write_all(doc.as_bytes())
                .map_err(|source| GenerateError::OutputWrite {
                    path: "<stdout>".to_string(),
                    source,
                })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PackageDescription, PackageId};

    fn resolved(name: &str) -> ResolutionResult {
        let mut description =
            PackageDescription::new(PackageId::new(name, "1.0".parse().unwrap()));
        description
            .dependencies
            .haskell
            .normal
            .insert("base".parse().unwrap());
        ResolutionResult::Resolved(description)
    }

    /// Count the lines in the package-set body that define `name`.
    fn definitions_of(doc: &str, name: &str) -> usize {
        doc.lines()
            .filter(|line| {
                let line = line.trim_start();
                line.starts_with(&format!("{name} = null;"))
                    || line.starts_with(&format!("\"{name}\" = callPackage"))
            })
            .count()
    }

    #[test]
    fn test_every_boot_package_is_defined_exactly_once() {
        let context = RenderContext::default();
        let doc = render_document(vec![resolved("text"), resolved("pkg-a")], &context).unwrap();

        // Rendered baseline name: one entry, no stub.
        assert_eq!(definitions_of(&doc, "text"), 1);
        assert!(doc.contains("\"text\" = callPackage"));
        assert!(!doc.contains("text = null;"));

        // Unrendered baseline names: one stub each.
        assert_eq!(definitions_of(&doc, "array"), 1);
        assert_eq!(definitions_of(&doc, "Cabal"), 1);
        assert!(doc.contains("      array = null;"));
    }

    #[test]
    fn test_failures_abort_before_rendering() {
        let context = RenderContext::default();
        let err = render_document(
            vec![
                resolved("pkg-a"),
                ResolutionResult::Failed {
                    error: "boom".to_string(),
                },
            ],
            &context,
        )
        .unwrap_err();

        let generate_err = err.downcast::<GenerateError>().unwrap();
        assert!(matches!(
            generate_err,
            GenerateError::ResolutionFailed { count: 1 }
        ));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let context = RenderContext::default();
        let batch = || vec![resolved("pkg-b"), resolved("pkg-a")];

        let first = render_document(batch(), &context).unwrap();
        let second = render_document(batch(), &context).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_entries_keep_input_order() {
        let context = RenderContext::default();
        let doc = render_document(vec![resolved("zeta"), resolved("alpha")], &context).unwrap();

        let zeta_at = doc.find("\"zeta\"").unwrap();
        let alpha_at = doc.find("\"alpha\"").unwrap();
        assert!(zeta_at < alpha_at);
    }

    #[test]
    fn test_duplicate_names_render_without_panicking() {
        let context = RenderContext::default();
        let doc = render_document(vec![resolved("dup"), resolved("dup")], &context).unwrap();
        assert_eq!(doc.matches("\"dup\" = callPackage").count(), 2);
    }

    #[test]
    fn test_generate_writes_output_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("packages.nix");
        let context = RenderContext::default();

        generate(
            vec![resolved("pkg-a")],
            &context,
            &GenerateOptions {
                output: Some(path.clone()),
            },
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"pkg-a\" = callPackage"));
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("packages.nix");
        let context = RenderContext::default();

        let result = generate(
            vec![ResolutionResult::Failed {
                error: "boom".to_string(),
            }],
            &context,
            &GenerateOptions {
                output: Some(path.clone()),
            },
        );

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
