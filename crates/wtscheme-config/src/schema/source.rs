//! Input discovery configuration.

use serde::{Deserialize, Serialize};

/// Controls which files are read when the input path is a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// File extensions (without the dot) treated as xrdb schemes.
    pub extensions: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["xrdb".into()],
        }
    }
}
