//! Application module
//!
//! Binary-side glue: configuration resolution, logging setup, dataset
//! loading and fatal error reporting.

pub mod config;
pub mod error_handling;
pub mod logging;
pub mod runtime;

pub use config::AppConfig;
pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
pub use runtime::load_datasets;
