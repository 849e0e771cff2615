//! Write converted schemes into a destination directory.
//!
//! Files are written to a temporary sibling first and renamed into place,
//! so an interrupted run never leaves a truncated `.json` behind.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use wtscheme_common::WriteError;

/// Write `json` to `<dir>/<name>.json`, replacing any existing file.
///
/// `dir` must already exist; it is never created.
pub fn write_scheme(dir: &Path, name: &str, json: &str) -> Result<PathBuf, WriteError> {
    if !dir.exists() {
        return Err(WriteError::MissingDirectory(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(WriteError::NotADirectory(dir.to_path_buf()));
    }

    let path = dir.join(format!("{name}.json"));
    let tmp_path = dir.join(format!(".{name}.json.tmp"));

    std::fs::write(&tmp_path, json).map_err(|e| WriteError::Io {
        path: tmp_path.clone(),
        source: e,
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, &path) {
        // Rename failed, e.g. the target is held open on Windows
        warn!("atomic rename failed ({e}), falling back to direct write");
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(&path, json).map_err(|e| WriteError::Io {
            path: path.clone(),
            source: e,
        })?;
    }

    info!(path = %path.display(), "wrote scheme");
    Ok(path)
}
