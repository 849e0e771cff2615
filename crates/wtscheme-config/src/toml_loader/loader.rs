//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use tracing::debug;
use wtscheme_common::ConfigError;

use super::paths::default_config_path;
use crate::schema::AppConfig;

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. The result is not validated
/// here; see [`crate::validation::validate`].
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path.
///
/// A missing file is not an error: defaults are returned and nothing is
/// written to disk.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let path = match default_config_path() {
        Ok(path) => path,
        Err(e) => {
            debug!("{e}, using default config");
            return Ok(AppConfig::default());
        }
    };

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config found at {}, using defaults", path.display());
            Ok(AppConfig::default())
        }
        Err(e) => Err(e),
    }
}
