//! Splitting a resolution batch into failures and successes.
//!
//! The caller decides what to do with a non-empty failure list; rendering a
//! partial document is never an option, since downstream consumers assume
//! the generated set is complete.

use crate::core::{PackageDescription, ResolutionResult};

/// Separate failure diagnostics from resolved descriptions, preserving the
/// relative order within each group.
pub fn partition(results: Vec<ResolutionResult>) -> (Vec<String>, Vec<PackageDescription>) {
    let mut failures = Vec::new();
    let mut successes = Vec::new();

    for result in results {
        match result {
            ResolutionResult::Resolved(description) => successes.push(description),
            ResolutionResult::Failed { error } => failures.push(error),
        }
    }

    (failures, successes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PackageId;

    fn resolved(name: &str) -> ResolutionResult {
        ResolutionResult::Resolved(PackageDescription::new(PackageId::new(
            name,
            "1.0".parse().unwrap(),
        )))
    }

    fn failed(error: &str) -> ResolutionResult {
        ResolutionResult::Failed {
            error: error.to_string(),
        }
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let (failures, successes) = partition(vec![
            resolved("zeta"),
            failed("first failure"),
            resolved("alpha"),
            failed("second failure"),
        ]);

        assert_eq!(failures, vec!["first failure", "second failure"]);
        let names: Vec<&str> = successes.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_partition_all_successes() {
        let (failures, successes) = partition(vec![resolved("a"), resolved("b")]);
        assert!(failures.is_empty());
        assert_eq!(successes.len(), 2);
    }

    #[test]
    fn test_partition_empty_batch() {
        let (failures, successes) = partition(Vec::new());
        assert!(failures.is_empty());
        assert!(successes.is_empty());
    }
}
