//! # dataset-queries
//!
//! Pure query functions over small fixed datasets: filters, sorts, counts
//! and grouped aggregates over single datasets, and joins that follow
//! references between related datasets.
//!
//! ## Usage
//!
//! ```bash
//! dsq list [group]
//! dsq run <group> <query> [--format json|yaml] [--fixtures DIR]
//! dsq run-all
//! ```
//!
//! ## Modules
//!
//! - `app` - Binary-side configuration, logging and error reporting
//! - `config` - `dsq.toml` and environment configuration
//! - `datasets` - Record types and fixture loading
//! - `error` - Error types shared by every module
//! - `output` - Rendering results as JSON or YAML
//! - `queries` - The pure query functions
//! - `registry` - Queries by group and name, evaluated to JSON values
//! - `testing` - Record builders and assertions for tests and benchmarks
pub mod app;
pub mod config;
pub mod datasets;
pub mod error;
pub mod output;
pub mod queries;
pub mod registry;

pub mod testing;

pub use datasets::{Datasets, Family};
pub use error::{Error, Result};
pub use registry::QueryRegistry;
