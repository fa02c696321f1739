//! Materialized path matching.
//!
//! Hierarchy relationships are derived from path strings alone. Matching
//! is exact byte comparison; no normalization, case-folding, or trimming
//! is performed.

use folderhub_entity::folder::PATH_SEPARATOR;

/// Returns true iff `candidate` denotes a strict descendant of `ancestor`.
///
/// The separator must follow the ancestor path: `ancestor.x` matches, a
/// path never matches itself, and a name that merely shares a prefix
/// (`abcd` against ancestor `ab`) does not match.
pub fn is_descendant(candidate: &str, ancestor: &str) -> bool {
    candidate
        .strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with(PATH_SEPARATOR))
}

/// Rewrites `path` by replacing the first occurrence of `old_prefix` with
/// `new_prefix`, preserving all segments after the prefix.
pub fn rebase(path: &str, old_prefix: &str, new_prefix: &str) -> String {
    path.replacen(old_prefix, new_prefix, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_child_is_descendant() {
        assert!(is_descendant("a.b", "a"));
    }

    #[test]
    fn test_deep_descendant() {
        assert!(is_descendant("a.b.c.d", "a.b"));
    }

    #[test]
    fn test_path_is_not_its_own_descendant() {
        assert!(!is_descendant("a.b", "a.b"));
    }

    #[test]
    fn test_shared_name_prefix_is_not_descendant() {
        assert!(!is_descendant("abcd", "ab"));
        assert!(!is_descendant("a.bc", "a.b"));
    }

    #[test]
    fn test_ancestor_is_not_descendant_of_child() {
        assert!(!is_descendant("a", "a.b"));
    }

    #[test]
    fn test_rebase_replaces_first_occurrence_only() {
        assert_eq!(rebase("a.b.a.b", "a.b", "x.y"), "x.y.a.b");
    }

    #[test]
    fn test_rebase_preserves_suffix_segments() {
        assert_eq!(
            rebase("old.src.child.leaf", "old.src", "dst.src"),
            "dst.src.child.leaf"
        );
    }
}
