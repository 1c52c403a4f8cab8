//! Input validation for secrets file entries.
//!
//! Keys are passed to the OS verbatim, so the only rules are the ones an
//! environment block itself imposes. No naming convention is enforced.

use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Validate a secret key name.
///
/// A key must be non-empty and contain neither `=` nor NUL.
///
/// # Errors
///
/// Returns `ConfigError::InvalidKey` if the key cannot name an environment variable.
pub fn validate_key(key: &str) -> Result<()> {
    let reason = if key.is_empty() {
        "key cannot be empty"
    } else if key.contains('=') {
        "key cannot contain '='"
    } else if key.contains('\0') {
        "key cannot contain a NUL byte"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidKey {
        key: key.to_string(),
        reason,
    }
    .into())
}

/// Validate a coerced secret value.
///
/// Empty values are allowed; NUL bytes are not.
pub fn validate_value(key: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: "value cannot contain a NUL byte",
        }
        .into());
    }

    Ok(())
}

/// Coerce a JSON scalar to the string an environment variable will hold.
///
/// Strings pass through untouched, numbers use serde_json's canonical
/// rendering and booleans become `true`/`false`.
///
/// # Errors
///
/// Returns `ConfigError::UnsupportedValue` for `null`, arrays and objects.
pub fn coerce_value(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(ConfigError::UnsupportedValue {
            key: key.to_string(),
            kind: json_kind(other),
        }
        .into()),
    }
}

/// Human-readable name for a JSON value's type.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
