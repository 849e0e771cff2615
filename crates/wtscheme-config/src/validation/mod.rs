//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError` so the user can fix
//! them all in one pass.


use wtscheme_common::ConfigError;

use crate::schema::AppConfig;

/// Largest accepted JSON indent width.
pub const MAX_INDENT: usize = 8;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_source(&mut errors, config);
    validate_output(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_source(errors: &mut Vec<String>, config: &AppConfig) {
    if config.source.extensions.is_empty() {
        errors.push("source.extensions must not be empty".into());
    }
    for ext in &config.source.extensions {
        if ext.trim().is_empty() {
            errors.push("source.extensions contains an empty entry".into());
        } else if ext.contains('.') || ext.contains('/') {
            errors.push(format!(
                "source.extensions entry '{ext}' must be a bare extension without '.' or '/'"
            ));
        }
    }
}

fn validate_output(errors: &mut Vec<String>, config: &AppConfig) {
    let indent = config.output.indent;
    if indent > MAX_INDENT {
        errors.push(format!(
            "output.indent = {indent} is out of range [0, {MAX_INDENT}]"
        ));
    }
}
