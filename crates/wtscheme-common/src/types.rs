//! Parsed color-scheme records shared by readers and converters.

/// Number of positional ANSI color slots in a scheme.
pub const ANSI_SLOT_COUNT: usize = 16;

/// JSON indent width used when nothing else is configured.
pub const DEFAULT_INDENT: usize = 4;

/// The non-ANSI colors a scheme may define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialColor {
    Foreground,
    Background,
    CursorColor,
    SelectionBackground,
}

impl SpecialColor {
    pub const ALL: [SpecialColor; 4] = [
        SpecialColor::Foreground,
        SpecialColor::Background,
        SpecialColor::CursorColor,
        SpecialColor::SelectionBackground,
    ];

    /// Attribute name as it appears in xrdb resources.
    pub fn source_name(self) -> &'static str {
        match self {
            SpecialColor::Foreground => "foreground",
            SpecialColor::Background => "background",
            SpecialColor::CursorColor => "cursorColor",
            SpecialColor::SelectionBackground => "selectionBackground",
        }
    }

    pub fn from_source_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.source_name() == name)
    }
}

/// One parsed color scheme.
///
/// `colors` is positional: index `i` is ANSI slot `i`. Missing slots are
/// `None`, and the vector may be shorter than [`ANSI_SLOT_COUNT`]. Color
/// values are opaque strings and are never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSchemeRecord {
    pub name: String,
    pub colors: Vec<Option<String>>,
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub cursor_color: Option<String>,
    pub selection_background: Option<String>,
}

impl ColorSchemeRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Value of a special color, if one was given.
    pub fn special(&self, color: SpecialColor) -> Option<&str> {
        match color {
            SpecialColor::Foreground => self.foreground.as_deref(),
            SpecialColor::Background => self.background.as_deref(),
            SpecialColor::CursorColor => self.cursor_color.as_deref(),
            SpecialColor::SelectionBackground => self.selection_background.as_deref(),
        }
    }

    pub fn set_special(&mut self, color: SpecialColor, value: impl Into<String>) {
        let slot = match color {
            SpecialColor::Foreground => &mut self.foreground,
            SpecialColor::Background => &mut self.background,
            SpecialColor::CursorColor => &mut self.cursor_color,
            SpecialColor::SelectionBackground => &mut self.selection_background,
        };
        *slot = Some(value.into());
    }

    /// ANSI color at `index`, if present.
    pub fn ansi(&self, index: usize) -> Option<&str> {
        self.colors.get(index).and_then(|c| c.as_deref())
    }

    /// Set ANSI slot `index`, growing `colors` with empty slots as needed.
    pub fn set_ansi(&mut self, index: usize, value: impl Into<String>) {
        if self.colors.len() <= index {
            self.colors.resize(index + 1, None);
        }
        self.colors[index] = Some(value.into());
    }

    /// True when neither an ANSI slot nor a special color is set.
    pub fn is_empty(&self) -> bool {
        self.colors.iter().all(Option::is_none)
            && SpecialColor::ALL.iter().all(|c| self.special(*c).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_color_names_round_trip() {
        for color in SpecialColor::ALL {
            assert_eq!(SpecialColor::from_source_name(color.source_name()), Some(color));
        }
        assert_eq!(SpecialColor::from_source_name("cursorcolor"), None);
        assert_eq!(SpecialColor::from_source_name("boldColor"), None);
    }

    #[test]
    fn set_ansi_grows_with_holes() {
        let mut record = ColorSchemeRecord::new("holes");
        record.set_ansi(3, "#123456");
        assert_eq!(record.colors.len(), 4);
        assert_eq!(record.ansi(0), None);
        assert_eq!(record.ansi(3), Some("#123456"));
        assert_eq!(record.ansi(15), None);
    }

    #[test]
    fn set_special_overrides() {
        let mut record = ColorSchemeRecord::new("s");
        record.set_special(SpecialColor::CursorColor, "#aaaaaa");
        record.set_special(SpecialColor::CursorColor, "#bbbbbb");
        assert_eq!(record.special(SpecialColor::CursorColor), Some("#bbbbbb"));
        assert_eq!(record.cursor_color.as_deref(), Some("#bbbbbb"));
    }

    #[test]
    fn empty_record() {
        let mut record = ColorSchemeRecord::new("e");
        assert!(record.is_empty());
        record.colors = vec![None; ANSI_SLOT_COUNT];
        assert!(record.is_empty());
        record.set_special(SpecialColor::Background, "#000000");
        assert!(!record.is_empty());
    }
}
