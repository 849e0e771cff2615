//! TOML config file loading.

mod loader;
mod paths;


pub use loader::{load_default, load_from_path};
pub use paths::{default_config_path, CONFIG_FILE_NAME};
