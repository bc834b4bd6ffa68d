//! Application configuration
//!
//! Settings resolved from the command line and the optional config file.

use crate::config::FileConfig;
use crate::output::OutputFormat;
use anyhow::Result;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Working directory
    pub working_dir: PathBuf,
    /// Fixture overrides; builtin fixtures only when unset
    pub fixtures_dir: Option<PathBuf>,
    pub format: OutputFormat,
    /// Filter directive from the config file, used at verbosity 0
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Result<Self> {
        let working_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get current directory: {}", e))?;

        Ok(Self {
            verbose,
            working_dir,
            ..Self::default()
        })
    }

    /// Set the working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn with_fixtures_dir(mut self, dir: PathBuf) -> Self {
        self.fixtures_dir = Some(dir);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Apply the settings a config file provides
    pub fn with_file_config(mut self, file: FileConfig) -> Self {
        if let Some(dir) = file.fixtures_dir {
            self.fixtures_dir = Some(dir);
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        self.log_filter = file.log_level;
        self
    }

    /// Get the log filter based on verbosity.
    ///
    /// Any `-v` flag wins over the configured filter.
    pub fn log_level(&self) -> String {
        match (self.verbose, &self.log_filter) {
            (0, Some(filter)) => filter.clone(),
            (0, None) => "info".to_string(),
            (1, _) => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
            fixtures_dir: None,
            format: OutputFormat::default(),
            log_filter: None,
        }
    }
}
