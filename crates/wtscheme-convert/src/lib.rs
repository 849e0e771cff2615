//! xrdb scheme to terminal color-customization conversion.
//!
//! [`map`] translates a [`ColorSchemeRecord`] through the fixed tables in
//! [`tables`], [`to_json`] serializes the result, and [`run`] drives a
//! whole input path to stdout or a destination directory.
//!
//! [`ColorSchemeRecord`]: wtscheme_common::ColorSchemeRecord

pub mod driver;
pub mod emit;
pub mod scheme;
pub mod tables;
pub mod writer;


pub use driver::{convert_record, run, RunOptions, RunSummary};
pub use emit::to_json;
pub use scheme::{map, ColorCustomizations, OutputScheme};
pub use writer::write_scheme;
