//! Config path resolution.

use std::path::PathBuf;

use wtscheme_common::ConfigError;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the platform-specific default config file path.
///
/// On macOS: `~/Library/Application Support/xrdb2wt/config.toml`
/// On Linux: `~/.config/xrdb2wt/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("xrdb2wt").join(CONFIG_FILE_NAME))
}
