//! Clockface identifier validation

use crate::config::Config;
use crate::contract::ClockError;

/// Validate a clockface identifier before it is persisted
///
/// Accepts non-empty identifiers within the configured length bound. Under
/// strict validation, identifiers must start with an alphanumeric character
/// and contain only alphanumeric characters, '_', '.', or '-'.
pub fn validate_clockface_id(clockface_id: &str, config: &Config) -> Result<(), ClockError> {
    if clockface_id.is_empty() {
        return Err(ClockError::Validation {
            message: "clockface id cannot be empty".to_string(),
        });
    }

    if clockface_id.len() > config.max_clockface_id_length {
        return Err(ClockError::Validation {
            message: format!(
                "clockface id exceeds maximum length of {} characters",
                config.max_clockface_id_length
            ),
        });
    }

    if !config.strict_id_validation {
        return Ok(());
    }

    // first char is present, emptiness was checked above
    if let Some(first_char) = clockface_id.chars().next() {
        if !first_char.is_alphanumeric() {
            return Err(ClockError::Validation {
                message: format!(
                    "clockface id '{}' must start with an alphanumeric character",
                    clockface_id
                ),
            });
        }
    }

    let is_valid = clockface_id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == '-');

    if !is_valid {
        return Err(ClockError::Validation {
            message: format!(
                "clockface id '{}' contains invalid characters. Only alphanumeric, '_', '.', and '-' are allowed",
                clockface_id
            ),
        });
    }

    Ok(())
}
