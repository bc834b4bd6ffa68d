//! Custom test assertions for query results

use crate::error::Error;

/// Assert that `error` is a dangling reference into `dataset` with `key`
pub fn assert_reference_not_found(error: &Error, dataset: &str, key: &str) {
    match error {
        Error::ReferenceNotFound {
            dataset: actual_dataset,
            key: actual_key,
        } => {
            assert_eq!(*actual_dataset, dataset, "wrong dataset in {error}");
            assert_eq!(actual_key, key, "wrong key in {error}");
        }
        other => panic!("Expected ReferenceNotFound, got {other:?}"),
    }
}

/// Assert that `values` is ordered by `key` in the given direction, ties allowed
pub fn assert_sorted_by<T, K, F>(values: &[T], key: F, descending: bool)
where
    T: std::fmt::Debug,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    for pair in values.windows(2) {
        let (a, b) = (key(&pair[0]), key(&pair[1]));
        let ordered = if descending { a >= b } else { a <= b };
        assert!(ordered, "{:?} is out of order before {:?}", pair[0], pair[1]);
    }
}

/// Assert that a computed ratio is within `epsilon` of `expected`
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() <= epsilon,
        "ratio {actual} is not within {epsilon} of {expected}"
    );
}
