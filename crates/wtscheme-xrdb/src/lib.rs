//! xrdb color-scheme reader.
//!
//! Turns a scheme file, or a directory of them, into
//! [`ColorSchemeRecord`]s. Color values are passed through untouched.

mod parse;

#[cfg(test)]
mod tests;

pub use parse::parse_scheme;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use wtscheme_common::{ColorSchemeRecord, SchemeSource, SourceReadError};

/// Reads xrdb scheme files from disk.
#[derive(Debug, Clone)]
pub struct XrdbReader {
    extensions: Vec<String>,
}

impl Default for XrdbReader {
    fn default() -> Self {
        Self {
            extensions: vec!["xrdb".into()],
        }
    }
}

impl XrdbReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extensions (without the dot) accepted when scanning a directory.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Parse a single scheme file. The record is named after the file stem.
    pub fn parse_file(&self, path: &Path) -> Result<ColorSchemeRecord, SourceReadError> {
        let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
        let content = String::from_utf8(bytes).map_err(|_| SourceReadError::Parse {
            path: path.to_path_buf(),
            reason: "file is not valid UTF-8".into(),
        })?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let record = parse_scheme(&name, &content);
        if record.is_empty() {
            return Err(SourceReadError::Parse {
                path: path.to_path_buf(),
                reason: "no color definitions found".into(),
            });
        }

        debug!(scheme = %record.name, path = %path.display(), "parsed scheme");
        Ok(record)
    }

    /// Scheme files directly inside `dir`, sorted by file name.
    fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, SourceReadError> {
        let entries = std::fs::read_dir(dir).map_err(|e| io_error(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(dir, e))?;
            let path = entry.path();
            if path.is_file() && self.accepts(&path) {
                files.push(path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

impl SchemeSource for XrdbReader {
    fn parse_all(&self, path: &Path) -> Result<Vec<ColorSchemeRecord>, SourceReadError> {
        let meta = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

        if !meta.is_dir() {
            return Ok(vec![self.parse_file(path)?]);
        }

        let files = self.discover(path)?;
        if files.is_empty() {
            warn!(
                "no files with extensions {:?} in {}",
                self.extensions,
                path.display()
            );
        }
        files.iter().map(|file| self.parse_file(file)).collect()
    }
}

fn io_error(path: &Path, err: std::io::Error) -> SourceReadError {
    if err.kind() == std::io::ErrorKind::NotFound {
        SourceReadError::NotFound(path.to_path_buf())
    } else {
        SourceReadError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
