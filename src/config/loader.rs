//! Configuration file discovery and loading.

use crate::config::schema::ShellConfig;
use crate::error::{AresError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config location: `~/.ares/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".ares").join("config.yml"))
}

/// Parse config YAML. `path` is only used for error messages.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, path: &Path) -> Result<ShellConfig> {
    if content.trim().is_empty() {
        return Ok(ShellConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| AresError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ShellConfig> {
    if !path.exists() {
        return Err(AresError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `~/.ares/config.yml` is used if
/// present and the defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<ShellConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!("loading config from {}", path.display());
            load_config_file(&path)
        }
        _ => Ok(ShellConfig::default()),
    }
}
