//! File configuration
//!
//! Optional settings read from a `dsq.toml` file and from `DSQ_*`
//! environment variables. Command-line flags take precedence over both and
//! are applied by the binary.

use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::{discover_config, load_config, load_file_config, CONFIG_FILE_NAME};

/// Environment variable naming a fixtures directory
pub const FIXTURES_ENV: &str = "DSQ_FIXTURES";
pub const FORMAT_ENV: &str = "DSQ_FORMAT";
pub const LOG_LEVEL_ENV: &str = "DSQ_LOG_LEVEL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Directory of fixture overrides; relative paths resolve against the
    /// directory holding the config file
    pub fixtures_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    /// `tracing` filter directive used when no `-v` flag is given
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn merge_env_vars(&mut self) {
        self.merge_env(|key| std::env::var(key).ok());
    }

    /// Override fields from `lookup`, typically the process environment.
    ///
    /// An unrecognised format value is ignored.
    pub fn merge_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(FIXTURES_ENV) {
            self.fixtures_dir = Some(PathBuf::from(dir));
        }

        if let Some(format) = lookup(FORMAT_ENV) {
            match format.to_ascii_lowercase().as_str() {
                "json" => self.format = Some(OutputFormat::Json),
                "yaml" | "yml" => self.format = Some(OutputFormat::Yaml),
                _ => {}
            }
        }

        if let Some(log_level) = lookup(LOG_LEVEL_ENV) {
            self.log_level = Some(log_level);
        }
    }
}
