//! Record-to-scheme mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};
use wtscheme_common::ColorSchemeRecord;

use crate::tables::{ANSI_SLOTS, SPECIAL_PAIRS};

/// Destination color keys and their values, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputScheme {
    entries: Vec<(&'static str, String)>,
}

impl OutputScheme {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Insert `value` under `key` unless it is empty. Re-inserting a key
    /// replaces its value in place.
    fn insert(&mut self, key: &'static str, value: &str) {
        if value.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key, value.to_string())),
        }
    }
}

impl Serialize for OutputScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The emitted document: a single `workbench.colorCustomizations` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ColorCustomizations {
    #[serde(rename = "workbench.colorCustomizations")]
    pub colors: OutputScheme,
}

/// Translate a parsed record into the output document.
///
/// ANSI slots come first in table order, then the special colors. Absent
/// and empty values are both omitted; nothing here can fail.
pub fn map(record: &ColorSchemeRecord) -> ColorCustomizations {
    let mut scheme = OutputScheme::default();

    for (index, key) in ANSI_SLOTS.iter().enumerate() {
        if let Some(color) = record.ansi(index) {
            scheme.insert(*key, color);
        }
    }

    for (attr, key) in SPECIAL_PAIRS {
        if let Some(color) = record.special(attr) {
            scheme.insert(key, color);
        }
    }

    ColorCustomizations { colors: scheme }
}
