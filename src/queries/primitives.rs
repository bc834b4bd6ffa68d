//! Generic building blocks shared by the queries
//!
//! All functions here are pure and never reorder records beyond what they
//! promise: sorts are stable, dedupe keeps first-seen order and grouping
//! keeps source order within each group.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Sort direction for [`sorted_by_key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Pure: Stable sorted copy of `records`
///
/// Records with equal keys keep their relative input order in both
/// directions.
pub fn sorted_by_key<T, K, F>(records: &[T], key: F, direction: Direction) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut sorted = records.to_vec();
    match direction {
        Direction::Ascending => sorted.sort_by(|a, b| key(a).cmp(&key(b))),
        Direction::Descending => sorted.sort_by(|a, b| key(b).cmp(&key(a))),
    }
    sorted
}

/// Pure: Distinct values in first-seen order
pub fn unique_values<I, T>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Pure: Number of times each distinct value occurs
pub fn count_occurrences<I, T>(values: I) -> BTreeMap<T, usize>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Pure: Group values by key, preserving source order inside each group
pub fn group_by<I, T, K, F>(values: I, key: F) -> BTreeMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for value in values {
        groups.entry(key(&value)).or_default().push(value);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sorted_by_key_ascending_is_stable() {
        let records = vec![("c", 2), ("a", 1), ("d", 2), ("b", 1)];

        let sorted = sorted_by_key(&records, |r| r.1, Direction::Ascending);

        assert_eq!(sorted, vec![("a", 1), ("b", 1), ("c", 2), ("d", 2)]);
    }

    #[test]
    fn test_sorted_by_key_descending_is_stable() {
        let records = vec![("c", 2), ("a", 1), ("d", 2), ("b", 1)];

        let sorted = sorted_by_key(&records, |r| r.1, Direction::Descending);

        assert_eq!(sorted, vec![("c", 2), ("d", 2), ("a", 1), ("b", 1)]);
    }

    #[test]
    fn test_sorted_by_key_leaves_input_untouched() {
        let records = vec![3, 1, 2];
        let _ = sorted_by_key(&records, |r| *r, Direction::Ascending);
        assert_eq!(records, vec![3, 1, 2]);
    }

    #[test]
    fn test_unique_values_first_seen() {
        let values = vec!["b", "a", "b", "c", "a"];
        assert_eq!(unique_values(values), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_inputs_yield_identity() {
        assert!(unique_values(Vec::<u8>::new()).is_empty());
        assert!(count_occurrences(Vec::<u8>::new()).is_empty());
        assert!(group_by(Vec::<u8>::new(), |v| *v).is_empty());
        assert!(sorted_by_key(&Vec::<u8>::new(), |v| *v, Direction::Descending).is_empty());
    }

    #[test]
    fn test_count_occurrences() {
        let counts = count_occurrences(vec!["x", "y", "x", "x"]);
        assert_eq!(counts.get("x"), Some(&3));
        assert_eq!(counts.get("y"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_group_by_keeps_order_within_group() {
        let groups = group_by(vec![1, 2, 3, 4, 5, 6], |v| v % 3);
        assert_eq!(groups[&0], vec![3, 6]);
        assert_eq!(groups[&1], vec![1, 4]);
        assert_eq!(groups[&2], vec![2, 5]);
    }

    proptest! {
        #[test]
        fn prop_sort_is_stable_permutation(
            keys in prop::collection::vec(0u8..5, 0..40),
        ) {
            // Pair every key with its input position to observe tie order
            let records: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();

            for direction in [Direction::Ascending, Direction::Descending] {
                let sorted = sorted_by_key(&records, |r| r.0, direction);
                prop_assert_eq!(sorted.len(), records.len());

                for pair in sorted.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    let ordered = match direction {
                        Direction::Ascending => a.0 <= b.0,
                        Direction::Descending => a.0 >= b.0,
                    };
                    prop_assert!(ordered);
                    if a.0 == b.0 {
                        prop_assert!(a.1 < b.1);
                    }
                }
            }
        }

        #[test]
        fn prop_unique_values_has_no_repeats(
            values in prop::collection::vec(0u8..10, 0..60),
        ) {
            let unique = unique_values(values.clone());
            let set: HashSet<u8> = unique.iter().copied().collect();
            prop_assert_eq!(set.len(), unique.len());

            // First-seen order: positions of first occurrence are increasing
            let firsts: Vec<usize> = unique
                .iter()
                .map(|u| values.iter().position(|v| v == u).unwrap())
                .collect();
            prop_assert!(firsts.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_counts_sum_to_len(values in prop::collection::vec(0u8..10, 0..60)) {
            let total: usize = count_occurrences(values.clone()).values().sum();
            prop_assert_eq!(total, values.len());
        }
    }
}
