//! Build-mode dependency policy.
//!
//! Test and benchmark dependencies only matter when the corresponding build
//! mode actually runs, and that mode only ever runs for packages the caller
//! directly requested. Everything pulled in transitively gets those buckets
//! emptied, so the closure never drags in test-only tooling.

use crate::core::{BuildMode, DependencyKind, PackageDescription};

/// Empty the test and benchmark buckets that the run's flags and the
/// package's locality do not justify keeping. Normal buckets are never
/// touched. Pure and total.
pub fn apply(
    mut description: PackageDescription,
    is_local: bool,
    enable_tests: bool,
    enable_benchmarks: bool,
) -> PackageDescription {
    let policy = [
        (BuildMode::Test, enable_tests && is_local),
        (BuildMode::Benchmark, enable_benchmarks && is_local),
    ];

    for kind in DependencyKind::ALL {
        let buckets = description.dependencies.kind_mut(kind);
        for (mode, keep) in policy {
            if !keep {
                buckets.bucket_mut(mode).clear();
            }
        }
    }

    description
}
