//! Tests for scheme parsing and discovery.

use super::*;
use wtscheme_common::SpecialColor;

const ITERM_SCHEME: &str = r##"
#define Ansi_0_Color #000000
#define Ansi_1_Color #c91b00
#define Ansi_2_Color #00c200
#define Ansi_3_Color #c7c400
#define Ansi_4_Color #0225c7
#define Ansi_5_Color #ca30c7
#define Ansi_6_Color #00c5c7
#define Ansi_7_Color #c7c7c7
#define Ansi_8_Color #686868
#define Ansi_9_Color #ff6e67
#define Ansi_10_Color #5ffa68
#define Ansi_11_Color #fffc67
#define Ansi_12_Color #6871ff
#define Ansi_13_Color #ff77ff
#define Ansi_14_Color #60fdff
#define Ansi_15_Color #ffffff
#define Background_Color #101010
#define Badge_Color #ff0000
#define Bold_Color #ffffff
#define Cursor_Color #e5e5e5
#define Cursor_Text_Color #000000
#define Foreground_Color #c7c7c7
#define Link_Color #0645ad
#define Selected_Text_Color #000000
#define Selection_Color #c1deff
"##;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn parses_iterm_defines() {
    let record = parse_scheme("Builtin", ITERM_SCHEME);
    assert_eq!(record.name, "Builtin");
    assert_eq!(record.colors.len(), 16);
    assert_eq!(record.ansi(0), Some("#000000"));
    assert_eq!(record.ansi(9), Some("#ff6e67"));
    assert_eq!(record.ansi(15), Some("#ffffff"));
    assert_eq!(record.foreground.as_deref(), Some("#c7c7c7"));
    assert_eq!(record.background.as_deref(), Some("#101010"));
    assert_eq!(record.cursor_color.as_deref(), Some("#e5e5e5"));
    assert_eq!(record.selection_background.as_deref(), Some("#c1deff"));
}

#[test]
fn parses_x_resources_with_macros() {
    let content = r##"
! Solarized
#define S_base03 #002b36
#define S_base0  #839496
#include "common.xrdb"

*background:          S_base03
*.foreground:         S_base0
URxvt*cursorColor:    #93a1a1
*selectionBackground: #073642
*.color0:             #073642
*color8:              S_base03
URxvt.font:           xft:Monospace:size=10
"##;
    let record = parse_scheme("solarized", content);
    assert_eq!(record.background.as_deref(), Some("#002b36"));
    assert_eq!(record.foreground.as_deref(), Some("#839496"));
    assert_eq!(record.cursor_color.as_deref(), Some("#93a1a1"));
    assert_eq!(record.selection_background.as_deref(), Some("#073642"));
    assert_eq!(record.ansi(0), Some("#073642"));
    assert_eq!(record.ansi(8), Some("#002b36"));
    assert_eq!(record.ansi(1), None);
}

#[test]
fn leading_byte_order_mark_is_ignored() {
    let record = parse_scheme(
        "bom",
        "\u{feff}#define Ansi_0_Color #000000\n*.color1: Ansi_0_Color\n",
    );
    assert_eq!(record.ansi(0), Some("#000000"));
    assert_eq!(record.ansi(1), Some("#000000"));
}

#[test]
fn later_assignment_wins() {
    let record = parse_scheme("dup", "*.color1: #111111\n*.color1: #222222\n");
    assert_eq!(record.ansi(1), Some("#222222"));
}

#[test]
fn strips_block_comments_and_ignores_bang_comments() {
    let content = "! *.color2: #ffffff\n*.color2: #00ff00 /* green */\n";
    let record = parse_scheme("c", content);
    assert_eq!(record.ansi(2), Some("#00ff00"));
}

#[test]
fn values_pass_through_unvalidated() {
    let record = parse_scheme("n", "*.foreground: rgb:ff/ff/ff\n*.background: black\n");
    assert_eq!(record.foreground.as_deref(), Some("rgb:ff/ff/ff"));
    assert_eq!(record.background.as_deref(), Some("black"));
}

#[test]
fn parse_file_uses_file_stem_as_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "Dracula.xrdb", ITERM_SCHEME);

    let record = XrdbReader::new().parse_file(&path).unwrap();
    assert_eq!(record.name, "Dracula");
}

#[test]
fn parse_all_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "One.xrdb", ITERM_SCHEME);

    let records = XrdbReader::new().parse_all(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "One");
}

#[test]
fn parse_all_directory_is_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Zenburn.xrdb", ITERM_SCHEME);
    write(dir.path(), "Argonaut.XRDB", ITERM_SCHEME);
    write(dir.path(), "README.md", "# not a scheme");
    std::fs::create_dir(dir.path().join("nested.xrdb")).unwrap();

    let records = XrdbReader::new().parse_all(dir.path()).unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Argonaut", "Zenburn"]);
}

#[test]
fn custom_extensions() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.Xresources", "*.foreground: #ffffff\n");
    write(dir.path(), "b.xrdb", ITERM_SCHEME);

    let reader = XrdbReader::new().with_extensions(["Xresources"]);
    assert_eq!(reader.extensions(), ["Xresources".to_string()]);
    let records = reader.parse_all(dir.path()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "a");
    assert_eq!(records[0].special(SpecialColor::Foreground), Some("#ffffff"));
}

#[test]
fn empty_directory_yields_no_records() {
    let dir = tempfile::tempdir().unwrap();
    let records = XrdbReader::new().parse_all(dir.path()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn missing_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.xrdb");
    let err = XrdbReader::new().parse_all(&missing).unwrap_err();
    assert!(matches!(err, SourceReadError::NotFound(p) if p == missing));
}

#[test]
fn unreadable_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "Plain.xrdb", ITERM_SCHEME);
    let err = XrdbReader::new().parse_all(&file.join("x")).unwrap_err();
    assert!(matches!(err, SourceReadError::Io { .. }));
}

#[test]
fn file_without_colors_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "Empty.xrdb", "! nothing here\nURxvt.font: mono\n");
    let err = XrdbReader::new().parse_all(&path).unwrap_err();
    assert!(matches!(err, SourceReadError::Parse { .. }));
    assert!(err.to_string().contains("no color definitions found"));
}

#[test]
fn invalid_utf8_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Binary.xrdb");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
    let err = XrdbReader::new().parse_file(&path).unwrap_err();
    assert!(err.to_string().contains("not valid UTF-8"));
}

#[test]
fn one_bad_file_fails_the_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "A.xrdb", ITERM_SCHEME);
    write(dir.path(), "B.xrdb", "nothing: here\n");
    assert!(XrdbReader::new().parse_all(dir.path()).is_err());
}
