//! The assembly and rendering pipeline.
//!
//! Turns a batch of resolution results into the final override expression:
//! partition the batch, reconcile the boot package baseline, render each
//! package entry under the run's build-mode policy, and assemble the
//! document. Every stage is a total function over well-formed input; the
//! only failure the pipeline itself knows is a non-empty failure partition.

pub mod binding_filter;
pub mod boot;
pub mod context;
pub mod derivation;
pub mod document;
pub mod mode_filter;
pub mod partition;

pub use context::{Indent, RenderContext, DEFAULT_GHC_VERSION};
pub use derivation::{render_entry, ExpressionRenderer, MkDerivation};
pub use partition::partition;
