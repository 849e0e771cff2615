//! JSON serialization of converted schemes.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::scheme::ColorCustomizations;

/// Serialize `doc` as pretty JSON with `indent` spaces per level.
pub fn to_json(doc: &ColorCustomizations, indent: usize) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| {
        serde_json::Error::io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
