//! xrdb2wt configuration.
//!
//! TOML-based configuration with full validation. All sections use
//! defaults so partial configs (or no config at all) work.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{AppConfig, LogLevel, DEFAULT_INDENT};
pub use toml_loader::{default_config_path, load_default, load_from_path};

use std::path::Path;

use wtscheme_common::ConfigError;

/// Load and validate config.
///
/// An explicit `path` must exist. Without one, the platform default
/// location is tried and defaults are used if it is absent.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}
