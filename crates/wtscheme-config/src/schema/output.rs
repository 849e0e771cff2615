//! JSON output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
pub use wtscheme_common::DEFAULT_INDENT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per indent level in emitted JSON.
    pub indent: usize,
    /// Directory for generated files when `--destiny` is not given.
    /// `None` prints to stdout.
    pub destination: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            destination: None,
        }
    }
}
