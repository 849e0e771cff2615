//! Line-level xrdb parsing.
//!
//! Understands two dialects that are commonly mixed in scheme files:
//! iTerm2-style `#define Ansi_0_Color #000000` definitions and X resource
//! lines such as `*.color0: #000000` or `URxvt*cursorColor: #ffffff`.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use wtscheme_common::{ColorSchemeRecord, SpecialColor, ANSI_SLOT_COUNT};

/// `#define NAME VALUE`
pub(crate) static DEFINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s*define\s+(\S+)\s+(.+)$").unwrap());

/// `pattern: value` resource assignment.
pub(crate) static RESOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:\s][^:]*?)\s*:\s*(.*)$").unwrap());

/// iTerm2 ANSI slot key, e.g. `Ansi_12_Color`.
pub(crate) static ANSI_DEFINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Ansi_(\d{1,2})_Color$").unwrap());

/// X resource ANSI slot name, e.g. `color12`.
pub(crate) static ANSI_RESOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^color(\d{1,2})$").unwrap());

/// Single-line `/* ... */` comment.
static BLOCK_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*.*?\*/").unwrap());

/// Where a parsed value lands in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Ansi(usize),
    Special(SpecialColor),
}

impl Slot {
    /// Slot named by an iTerm2-style `#define` key.
    pub(crate) fn from_define(key: &str) -> Option<Self> {
        if let Some(caps) = ANSI_DEFINE_RE.captures(key) {
            return ansi_index(&caps[1]).map(Slot::Ansi);
        }
        let special = match key {
            "Foreground_Color" => SpecialColor::Foreground,
            "Background_Color" => SpecialColor::Background,
            "Cursor_Color" => SpecialColor::CursorColor,
            "Selection_Color" => SpecialColor::SelectionBackground,
            _ => return None,
        };
        Some(Slot::Special(special))
    }

    /// Slot named by the final component of an X resource pattern.
    pub(crate) fn from_resource(pattern: &str) -> Option<Self> {
        let name = pattern
            .rsplit(['.', '*'])
            .next()
            .unwrap_or(pattern)
            .trim();
        if let Some(caps) = ANSI_RESOURCE_RE.captures(name) {
            return ansi_index(&caps[1]).map(Slot::Ansi);
        }
        SpecialColor::from_source_name(name).map(Slot::Special)
    }
}

fn ansi_index(digits: &str) -> Option<usize> {
    digits
        .parse::<usize>()
        .ok()
        .filter(|i| *i < ANSI_SLOT_COUNT)
}

/// Parse the text of one scheme file into a record named `name`.
///
/// Unknown resources and directives are skipped. The returned record
/// always has [`ANSI_SLOT_COUNT`] color positions.
pub fn parse_scheme(name: &str, content: &str) -> ColorSchemeRecord {
    let mut record = ColorSchemeRecord::new(name);
    record.colors = vec![None; ANSI_SLOT_COUNT];
    let mut macros: HashMap<String, String> = HashMap::new();

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let stripped = BLOCK_COMMENT_RE.replace_all(raw, "");
        let line = stripped.trim();
        if line.is_empty() || line.starts_with('!') {
            continue;
        }

        if let Some(caps) = DEFINE_RE.captures(line) {
            let key = &caps[1];
            let value = expand(&macros, caps[2].trim());
            if let Some(slot) = Slot::from_define(key) {
                assign(&mut record, slot, &value);
            }
            macros.insert(key.to_string(), value);
            continue;
        }

        if line.starts_with('#') {
            debug!(scheme = name, line = line_no, "skipping preprocessor directive");
            continue;
        }

        if let Some(caps) = RESOURCE_RE.captures(line) {
            match Slot::from_resource(&caps[1]) {
                Some(slot) => {
                    let value = expand(&macros, caps[2].trim());
                    assign(&mut record, slot, &value);
                }
                None => {
                    debug!(scheme = name, line = line_no, resource = &caps[1], "ignoring resource");
                }
            }
            continue;
        }

        debug!(scheme = name, line = line_no, "unrecognized line");
    }

    record
}

/// Replace a value that names a defined macro with the macro's value.
fn expand(macros: &HashMap<String, String>, value: &str) -> String {
    macros
        .get(value)
        .cloned()
        .unwrap_or_else(|| value.to_string())
}

fn assign(record: &mut ColorSchemeRecord, slot: Slot, value: &str) {
    match slot {
        Slot::Ansi(index) => record.set_ansi(index, value),
        Slot::Special(color) => record.set_special(color, value),
    }
}
