//! Conversion driver: source path in, JSON out.


use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wtscheme_common::{ColorSchemeRecord, Result, SchemeSource, WriteError, DEFAULT_INDENT};

use crate::emit::to_json;
use crate::scheme::map;
use crate::writer::write_scheme;

/// Knobs that shape the emitted JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub indent: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    /// Files written, in processing order. Empty in stdout mode.
    pub written: Vec<PathBuf>,
}

/// Map and serialize one record.
pub fn convert_record(record: &ColorSchemeRecord, options: &RunOptions) -> Result<String> {
    Ok(to_json(&map(record), options.indent)?)
}

/// Convert every scheme at `xrdb_path`.
///
/// With no `destination`, each document is written to `out` followed by a
/// newline. Otherwise each goes to `<destination>/<name>.json` with no
/// trailing newline. Records are processed in order and the first error
/// stops the run; files written before it stay on disk.
pub fn run<S, W>(
    source: &S,
    xrdb_path: &Path,
    destination: Option<&Path>,
    out: &mut W,
    options: &RunOptions,
) -> Result<RunSummary>
where
    S: SchemeSource + ?Sized,
    W: Write,
{
    let records = source.parse_all(xrdb_path)?;
    debug!(count = records.len(), path = %xrdb_path.display(), "loaded schemes");

    let mut summary = RunSummary::default();
    for record in &records {
        let json = convert_record(record, options)?;
        match destination {
            None => {
                writeln!(out, "{json}").map_err(WriteError::Stdout)?;
            }
            Some(dir) => {
                let path = write_scheme(dir, &record.name, &json)?;
                summary.written.push(path);
            }
        }
        summary.converted += 1;
    }

    if destination.is_none() {
        out.flush().map_err(WriteError::Stdout)?;
    }

    info!(converted = summary.converted, "conversion finished");
    Ok(summary)
}
