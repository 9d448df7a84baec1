//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LogConfig → Result<(), Vec<ValidationError>>

use crate::config::schema::LogConfig;

/// A semantic problem found in an otherwise well-formed config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("http.exclude_path_prefixes[{index}] is empty")]
    EmptyPathPrefix { index: usize },

    #[error("http.exclude_path_prefixes[{index}] must start with '/': {prefix:?}")]
    RelativePathPrefix { index: usize, prefix: String },

    #[error("driver.ignore_error_messages[{index}] is empty")]
    EmptyIgnoreMessage { index: usize },
}

pub fn validate_config(config: &LogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, prefix) in config.http.exclude_path_prefixes.iter().enumerate() {
        if prefix.is_empty() {
            errors.push(ValidationError::EmptyPathPrefix { index });
        } else if !prefix.starts_with('/') {
            errors.push(ValidationError::RelativePathPrefix {
                index,
                prefix: prefix.clone(),
            });
        }
    }

    for (index, message) in config.driver.ignore_error_messages.iter().enumerate() {
        if message.is_empty() {
            errors.push(ValidationError::EmptyIgnoreMessage { index });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
