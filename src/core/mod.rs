//! Core data structures for stacknix.
//!
//! This module contains the foundational types used throughout stacknix:
//! - Package identity (PackageId, PkgVersion)
//! - External attribute references (Binding)
//! - Dependency declarations (DependencySets)
//! - Resolver outcomes (PackageDescription, ResolutionResult)

pub mod binding;
pub mod dependency;
pub mod package;
pub mod package_id;
pub mod version;

pub use binding::Binding;
pub use dependency::{BuildMode, DependencyKind, DependencySets, ModeBuckets};
pub use package::{PackageDescription, ResolutionResult};
pub use package_id::PackageId;
pub use version::PkgVersion;
