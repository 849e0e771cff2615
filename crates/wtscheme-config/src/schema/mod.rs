//! Configuration schema types for xrdb2wt.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod output;
mod source;
mod system;

pub use output::*;
pub use source::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Every option has a default; a config file only needs the values it
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}
