//! Stacknix - Nix package-set generation from resolved Haskell stack builds
//!
//! This crate provides the core library functionality for stacknix: taking
//! the resolver's per-package build descriptions and rendering them into a
//! single Nix override expression, with boot-package reconciliation and
//! per-package build-mode policy applied along the way.

pub mod core;
pub mod ops;
pub mod plan;
pub mod render;
pub mod util;

pub use crate::core::{
    Binding, DependencySets, PackageDescription, PackageId, PkgVersion, ResolutionResult,
};
pub use render::RenderContext;
pub use util::Config;
