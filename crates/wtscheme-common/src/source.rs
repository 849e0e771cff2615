use std::path::Path;

use crate::errors::SourceReadError;
use crate::types::ColorSchemeRecord;

/// Anything that can turn a path into color-scheme records.
pub trait SchemeSource {
    /// Parse every scheme found at `path` (a single file or a directory).
    fn parse_all(&self, path: &Path) -> Result<Vec<ColorSchemeRecord>, SourceReadError>;
}
