//! Native binding selection.
//!
//! The native-binding clause of an entry passes pkg-config and system
//! references through from the surrounding `pkgs` scope. X11 client
//! libraries under a nested attribute (second path segment `libX*`) do not
//! resolve in the generated set's own scope and break the output, so they
//! are dropped. This is a narrow denylist, not dependency resolution.

use crate::core::{Binding, DependencySets};

const X_LIB_PREFIX: &str = "libX";

/// Whether a binding falls in the excluded X11 corner of the attribute tree.
fn is_excluded(binding: &Binding) -> bool {
    binding
        .segments()
        .get(1)
        .is_some_and(|segment| segment.starts_with(X_LIB_PREFIX))
}

/// The bindings to pass into a package expression: the union of the normal
/// pkg-config and system buckets, minus exclusions, in lexicographic path
/// order.
pub fn native_bindings(dependencies: &DependencySets) -> Vec<Binding> {
    dependencies
        .pkgconfig
        .normal
        .union(&dependencies.system.normal)
        .filter(|binding| !is_excluded(binding))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Binding;

    fn bind(path: &str) -> Binding {
        path.parse().unwrap()
    }

    fn sets_with(pkgconfig: &[&str], system: &[&str]) -> DependencySets {
        let mut sets = DependencySets::default();
        sets.pkgconfig.normal = pkgconfig.iter().map(|p| bind(p)).collect();
        sets.system.normal = system.iter().map(|p| bind(p)).collect();
        sets
    }

    #[test]
    fn test_unions_pkgconfig_and_system() {
        let sets = sets_with(&["zlib"], &["openssl", "zlib"]);
        let bindings = native_bindings(&sets);

        // Duplicates collapse by path identity.
        assert_eq!(bindings, vec![bind("openssl"), bind("zlib")]);
    }

    #[test]
    fn test_excludes_nested_x_libraries() {
        let sets = sets_with(&["xorg.libXrandr"], &["xorg.libXi", "xorg.libxcb", "zlib"]);
        let bindings = native_bindings(&sets);

        // Case-sensitive prefix match on the second segment only.
        assert_eq!(bindings, vec![bind("xorg.libxcb"), bind("zlib")]);
    }

    #[test]
    fn test_first_segment_is_not_consulted() {
        let sets = sets_with(&[], &["libX11"]);
        let bindings = native_bindings(&sets);
        assert_eq!(bindings, vec![bind("libX11")]);
    }

    #[test]
    fn test_output_is_lexicographic_by_path() {
        let sets = sets_with(&["zlib", "alsa-lib"], &["xorg.libxcb"]);
        let bindings = native_bindings(&sets);
        assert_eq!(
            bindings,
            vec![bind("alsa-lib"), bind("xorg.libxcb"), bind("zlib")]
        );
    }

    #[test]
    fn test_test_buckets_do_not_contribute() {
        let mut sets = sets_with(&["zlib"], &[]);
        sets.pkgconfig.test.insert(bind("sqlite"));
        sets.system.benchmark.insert(bind("libpq"));

        assert_eq!(native_bindings(&sets), vec![bind("zlib")]);
    }
}
