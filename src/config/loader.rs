use super::FileConfig;
use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "dsq.toml";

/// Parse the config file at `path`.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)?;
    let mut config: FileConfig = toml::from_str(&content)?;

    if let (Some(dir), Some(base)) = (&config.fixtures_dir, path.parent()) {
        if dir.is_relative() {
            config.fixtures_dir = Some(base.join(dir));
        }
    }

    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load `dsq.toml` from `working_dir` if there is one
pub fn discover_config(working_dir: &Path) -> Result<Option<FileConfig>> {
    let path = working_dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        debug!("No {} in {}", CONFIG_FILE_NAME, working_dir.display());
        return Ok(None);
    }
    load_config(&path).map(Some)
}

/// Resolve the effective file configuration.
///
/// An explicit path must exist; otherwise the working directory is searched.
/// Environment variables are merged last.
pub fn load_file_config(explicit: Option<&Path>, working_dir: &Path) -> Result<FileConfig> {
    let mut config = match explicit {
        Some(path) if !path.is_file() => {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )))
        }
        Some(path) => load_config(path)?,
        None => discover_config(working_dir)?.unwrap_or_default(),
    };
    config.merge_env_vars();
    Ok(config)
}
