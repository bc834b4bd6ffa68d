//! Keyed lookup over a borrowed dataset

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Borrowed records keyed by their id, built once per query call.
///
/// If two records share a key the later one is kept.
pub struct Index<'a, T> {
    dataset: &'static str,
    by_key: HashMap<&'a str, &'a T>,
}

impl<'a, T> Index<'a, T> {
    pub fn build<F>(dataset: &'static str, records: &'a [T], key: F) -> Self
    where
        F: Fn(&'a T) -> &'a str,
    {
        let by_key = records.iter().map(|record| (key(record), record)).collect();
        Self { dataset, by_key }
    }

    pub fn get(&self, key: &str) -> Option<&'a T> {
        self.by_key.get(key).copied()
    }

    /// Look up `key`, failing with [`Error::ReferenceNotFound`] if absent
    pub fn resolve(&self, key: &str) -> Result<&'a T> {
        self.get(key)
            .ok_or_else(|| Error::reference_not_found(self.dataset, key))
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
