//! Dataset loading for the binary

use crate::app::config::AppConfig;
use crate::datasets::Datasets;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Load the builtin fixtures, overlaid with the configured fixtures directory.
///
/// A relative fixtures directory resolves against the working directory.
pub fn load_datasets(config: &AppConfig) -> Result<Datasets> {
    match &config.fixtures_dir {
        Some(dir) => {
            let dir = config.working_dir.join(dir);
            info!("Loading fixtures from {}", dir.display());
            Datasets::load_dir(&dir)
                .with_context(|| format!("Failed to load fixtures from {}", dir.display()))
        }
        None => {
            debug!("Using builtin fixtures");
            Datasets::builtin().context("Failed to parse builtin fixtures")
        }
    }
}
