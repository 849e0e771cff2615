//! Fixed name-translation tables.

use wtscheme_common::{SpecialColor, ANSI_SLOT_COUNT};

/// Destination key for each positional ANSI slot.
///
/// This order is not the conventional ANSI 0-15 numbering (black, red,
/// green, yellow, blue, magenta, cyan, white). It is kept as-is so output
/// stays compatible with previously generated files.
pub const ANSI_SLOTS: [&str; ANSI_SLOT_COUNT] = [
    "terminal.ansiBlack",
    "terminal.ansiBlue",
    "terminal.ansiCyan",
    "terminal.ansiGreen",
    "terminal.ansiMagenta",
    "terminal.ansiRed",
    "terminal.ansiWhite",
    "terminal.ansiYellow",
    "terminal.ansiBrightBlack",
    "terminal.ansiBrightBlue",
    "terminal.ansiBrightCyan",
    "terminal.ansiBrightGreen",
    "terminal.ansiBrightMagenta",
    "terminal.ansiBrightRed",
    "terminal.ansiBrightWhite",
    "terminal.ansiBrightYellow",
];

/// Special source attribute and its destination key, in emission order.
pub const SPECIAL_PAIRS: [(SpecialColor, &str); 4] = [
    (SpecialColor::Foreground, "terminal.foreground"),
    (SpecialColor::Background, "terminal.background"),
    (SpecialColor::CursorColor, "terminalCursor.foreground"),
    (SpecialColor::SelectionBackground, "terminal.selectionBackground"),
];
