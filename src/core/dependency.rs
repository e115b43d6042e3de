//! Dependency specification.
//!
//! A package declares dependencies of four kinds, each split into buckets
//! by the build mode that activates them. Buckets are sorted sets, so
//! uniqueness is by path identity and iteration order is reproducible.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::binding::Binding;

/// The build mode a dependency bucket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Normal,
    Test,
    Benchmark,
}

impl BuildMode {
    /// All build modes, in rendering order.
    pub const ALL: [BuildMode; 3] = [BuildMode::Normal, BuildMode::Test, BuildMode::Benchmark];
}

/// The four kinds of dependency a package can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    /// Library-level Haskell package references, resolved from the set itself.
    Haskell,
    /// External native libraries located through pkg-config.
    PkgConfig,
    /// Arbitrary system-level references.
    System,
    /// Build-time tools.
    Tool,
}

impl DependencyKind {
    /// All dependency kinds, in rendering order.
    pub const ALL: [DependencyKind; 4] = [
        DependencyKind::Haskell,
        DependencyKind::PkgConfig,
        DependencyKind::System,
        DependencyKind::Tool,
    ];
}

/// One dependency kind's buckets, keyed by build mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeBuckets {
    /// Always-active dependencies.
    pub normal: BTreeSet<Binding>,

    /// Dependencies only needed when the test suite runs.
    pub test: BTreeSet<Binding>,

    /// Dependencies only needed when benchmarks run.
    pub benchmark: BTreeSet<Binding>,
}

impl ModeBuckets {
    /// Get the bucket for a build mode.
    pub fn bucket(&self, mode: BuildMode) -> &BTreeSet<Binding> {
        match mode {
            BuildMode::Normal => &self.normal,
            BuildMode::Test => &self.test,
            BuildMode::Benchmark => &self.benchmark,
        }
    }

    /// Get the bucket for a build mode, mutably.
    pub fn bucket_mut(&mut self, mode: BuildMode) -> &mut BTreeSet<Binding> {
        match mode {
            BuildMode::Normal => &mut self.normal,
            BuildMode::Test => &mut self.test,
            BuildMode::Benchmark => &mut self.benchmark,
        }
    }
}

/// The full dependency declaration of one package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencySets {
    pub haskell: ModeBuckets,
    pub pkgconfig: ModeBuckets,
    pub system: ModeBuckets,
    pub tool: ModeBuckets,
}

impl DependencySets {
    /// Get the buckets for a dependency kind.
    pub fn kind(&self, kind: DependencyKind) -> &ModeBuckets {
        match kind {
            DependencyKind::Haskell => &self.haskell,
            DependencyKind::PkgConfig => &self.pkgconfig,
            DependencyKind::System => &self.system,
            DependencyKind::Tool => &self.tool,
        }
    }

    /// Get the buckets for a dependency kind, mutably.
    pub fn kind_mut(&mut self, kind: DependencyKind) -> &mut ModeBuckets {
        match kind {
            DependencyKind::Haskell => &mut self.haskell,
            DependencyKind::PkgConfig => &mut self.pkgconfig,
            DependencyKind::System => &mut self.system,
            DependencyKind::Tool => &mut self.tool,
        }
    }
}
