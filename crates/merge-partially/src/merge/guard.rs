//! Fail-fast reporting for values the engine has no behaviour for.

use crate::MergeError;
use crate::value::Value;

/// Build the error for an unsupported value found under `key`.
pub fn fail(value: &Value, key: &str) -> MergeError {
    MergeError::UnsupportedValue {
        key: key.to_string(),
        rendered: value.to_string(),
    }
}
