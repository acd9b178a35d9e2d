//! Property-based tests for the column-lattice core.
//!
//! Verifies the algebraic laws of `ColumnCombination` and checks the trie's
//! pruned containment queries against a brute-force scan over the recorded
//! combinations.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use column_lattice::core::{ColumnCombination, SetTrie};
use proptest::prelude::*;

const WIDTH: usize = 96;

/// Strategy for a combination over a universe wide enough to span multiple
/// bit words.
fn combination() -> impl Strategy<Value = ColumnCombination> {
    prop::collection::btree_set(0..WIDTH, 0..8).prop_map(|indices| {
        ColumnCombination::from_indices(indices, WIDTH).expect("indices are in range")
    })
}

fn combinations(max: usize) -> impl Strategy<Value = Vec<ColumnCombination>> {
    prop::collection::vec(combination(), 0..max)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sorted(mut values: Vec<ColumnCombination>) -> Vec<ColumnCombination> {
    values.sort();
    values
}

proptest! {
    #[test]
    fn set_bits_are_sorted_and_count_matches_len(c in combination()) {
        let bits = c.set_bits();
        prop_assert!(bits.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(bits.len(), c.len());
        prop_assert_eq!(bits.last().copied(), c.max_bit());
    }

    #[test]
    fn subset_and_superset_are_duals(a in combination(), b in combination()) {
        prop_assert_eq!(a.is_subset_of(&b), b.is_superset_of(&a));
        prop_assert!(a.is_subset_of(&a));
        prop_assert!(a.is_superset_of(&a));
        prop_assert_eq!(
            a.is_proper_subset_of(&b),
            a.is_subset_of(&b) && a != b
        );
    }

    #[test]
    fn subset_means_every_bit_is_shared(a in combination(), b in combination()) {
        let expected = a.iter_set_bits().all(|index| b.contains(index));
        prop_assert_eq!(a.is_subset_of(&b), expected);
    }

    #[test]
    fn algebra_laws(a in combination(), b in combination()) {
        let union = a.union(&b);
        let intersection = a.intersect(&b);
        let difference = a.without(&b);

        prop_assert!(a.is_subset_of(&union));
        prop_assert!(b.is_subset_of(&union));
        prop_assert!(intersection.is_subset_of(&a));
        prop_assert!(intersection.is_subset_of(&b));
        prop_assert!(difference.intersect(&b).is_empty());
        prop_assert_eq!(difference.union(&intersection), a.clone());
        prop_assert_eq!(
            union.len() + intersection.len(),
            a.len() + b.len()
        );
    }

    #[test]
    fn invert_partitions_the_universe(a in combination()) {
        let complement = a.invert(WIDTH).expect("combination fits the universe");
        prop_assert!(a.intersect(&complement).is_empty());
        prop_assert_eq!(a.len() + complement.len(), WIDTH);
    }

    #[test]
    fn trie_subset_query_agrees_with_brute_force(
        recorded in combinations(12),
        query in combination(),
    ) {
        let mut trie = SetTrie::new();
        trie.add_all(&recorded);

        let expected: BTreeSet<ColumnCombination> = recorded
            .iter()
            .filter(|c| c.is_subset_of(&query))
            .cloned()
            .collect();

        let actual = trie.existing_subsets(&query);
        prop_assert_eq!(sorted(actual), expected.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(
            trie.contains_subset(&query),
            recorded.iter().any(|c| c.is_subset_of(&query))
        );
    }

    #[test]
    fn trie_superset_query_agrees_with_brute_force(
        recorded in combinations(12),
        query in combination(),
    ) {
        let mut trie = SetTrie::new();
        trie.add_all(&recorded);

        let expected: BTreeSet<ColumnCombination> = recorded
            .iter()
            .filter(|c| c.is_superset_of(&query))
            .cloned()
            .collect();

        let actual = trie.existing_supersets(&query);
        prop_assert_eq!(sorted(actual), expected.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(
            trie.contains_superset(&query),
            recorded.iter().any(|c| c.is_superset_of(&query))
        );
    }

    #[test]
    fn trie_is_insertion_order_independent(recorded in combinations(10)) {
        let mut forward = SetTrie::new();
        forward.add_all(&recorded);

        let mut backward = SetTrie::new();
        backward.add_all(recorded.iter().rev());

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(hash_of(&forward), hash_of(&backward));

        let distinct: BTreeSet<&ColumnCombination> = recorded.iter().collect();
        prop_assert_eq!(forward.len(), distinct.len());
    }

    #[test]
    fn double_insertion_changes_nothing(recorded in combinations(10)) {
        let mut once = SetTrie::new();
        once.add_all(&recorded);

        let mut twice = SetTrie::new();
        twice.add_all(&recorded).add_all(&recorded);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(hash_of(&once), hash_of(&twice));
    }
}
