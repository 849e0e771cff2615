pub mod errors;
pub mod source;
pub mod types;

pub use errors::{ConfigError, ConvertError, SourceReadError, WriteError};
pub use source::SchemeSource;
pub use types::{ColorSchemeRecord, SpecialColor, ANSI_SLOT_COUNT, DEFAULT_INDENT};

pub type Result<T> = std::result::Result<T, ConvertError>;
