//! Property-based tests for trail resolution.
//!
//! The normalize and label modules carry their own property tests. This
//! module checks the invariants of whole trails.

use super::normalize::{normalize_path, segments};
use super::{resolve, RootPolicy, TrailEntry, TrailResolver};
use proptest::prelude::*;
use std::collections::HashSet;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,20}"
}

// Paths with arbitrary doubled, leading and trailing separators
fn messy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => segment_strategy(),
            1 => Just(String::new()),
            1 => Just("  ".to_string()),
        ],
        0..10,
    )
    .prop_map(|parts| parts.join("/"))
}

fn non_root_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Non-root trails always start at Home
    #[test]
    fn first_entry_is_home(path in non_root_path_strategy()) {
        let trail = resolve(&path);
        prop_assert_eq!(trail.first(), Some(&TrailEntry::home()));
    }

    // The last target is the normalized current path
    #[test]
    fn last_target_is_normalized_path(path in messy_path_strategy()) {
        let trail = resolve(&path);
        match trail.last() {
            Some(last) => prop_assert_eq!(last.target(), normalize_path(&path)),
            None => prop_assert!(segments(&path).is_empty()),
        }
    }

    // One entry per segment plus Home
    #[test]
    fn length_matches_segments(path in messy_path_strategy()) {
        let trail = resolve(&path);
        let count = segments(&path).len();
        let expected = if count == 0 { 0 } else { count + 1 };
        prop_assert_eq!(trail.len(), expected);
    }

    // Targets never repeat within a trail
    #[test]
    fn targets_are_unique(path in messy_path_strategy()) {
        let trail = resolve(&path);
        let targets: HashSet<&str> = trail.iter().map(TrailEntry::target).collect();
        prop_assert_eq!(targets.len(), trail.len());
    }

    // Every target extends the previous one by exactly one segment
    #[test]
    fn targets_are_nested(path in non_root_path_strategy()) {
        let trail = resolve(&path);
        for pair in trail.entries().windows(2).skip(1) {
            let parent = pair[0].target();
            let child = pair[1].target();
            prop_assert!(child.starts_with(&format!("{parent}/")));
            prop_assert!(!child[parent.len() + 1..].contains('/'));
        }
    }

    // Resolving the normalized path gives the same trail
    #[test]
    fn resolution_ignores_separator_noise(path in messy_path_strategy()) {
        prop_assert_eq!(resolve(&path), resolve(&normalize_path(&path)));
    }

    // Both policies agree on every path with at least one segment
    #[test]
    fn policies_agree_off_root(path in non_root_path_strategy()) {
        let strict = TrailResolver::new().with_root_policy(RootPolicy::Strict);
        prop_assert_eq!(strict.resolve(&path), resolve(&path));
    }
}
