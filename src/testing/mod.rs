//! Testing utilities and fixtures
//!
//! Record builders for hand-made datasets and assertion helpers shared by the
//! unit tests, the integration tests and the benchmarks.

pub mod fixtures;
pub mod helpers;

pub use fixtures::builders::{DatasetsBuilder, MovieBuilder};
pub use fixtures::*;
pub use helpers::assertions::*;

use crate::datasets::Datasets;

/// The fixtures shipped with the crate.
///
/// Panics if a builtin fixture fails to parse, which is a packaging bug.
pub fn builtin() -> Datasets {
    Datasets::builtin().expect("builtin fixtures parse")
}
