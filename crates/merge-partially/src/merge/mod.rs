//! Partial-override merge engine.
//!
//! Copies the seed, then walks the override's own keys and resolves each one
//! by its `ValueKind`: scalars, sequences and nulls replace, `Undefined`
//! keeps the seed value, and plain objects merge into plain-object seed
//! values (replacing anything else).

mod classify;
mod entries;
mod guard;


pub use classify::ValueKind;
pub use entries::entries;
pub use guard::fail;

use crate::MergeError;
use crate::options::{MergeOptions, SymbolKeyPolicy};
use crate::value::{Object, Value};
use log::{debug, trace, warn};
use std::fmt;

/// Apply `overrides` to a copy of `seed`, expecting fully formed nested objects.
///
/// Nested object values in `overrides` still merge into plain-object seed
/// values; this entry point shares its runtime behaviour with [`merge_deep`].
pub fn merge_shallow(seed: &Value, overrides: Option<&Value>) -> Result<Value, MergeError> {
    merge_with_options(seed, overrides, &MergeOptions::default())
}

/// Apply arbitrarily nested partial `overrides` to a copy of `seed`.
///
/// Do not deep-merge a seed whose nested object fields are optional; use
/// [`merge_shallow`] with a factory for that nested shape, or check the
/// declared shape with [`crate::merge_deep_checked`].
pub fn merge_deep(seed: &Value, overrides: Option<&Value>) -> Result<Value, MergeError> {
    merge_with_options(seed, overrides, &MergeOptions::default())
}

/// Merge with explicit options. Neither input is modified.
pub fn merge_with_options(
    seed: &Value,
    overrides: Option<&Value>,
    options: &MergeOptions,
) -> Result<Value, MergeError> {
    let seed_map = expect_seed(seed)?;
    let mut result = seed_map.clone();

    let Some(override_map) = expect_overrides(overrides)? else {
        debug!("no overrides; returning seed copy (seed_keys={})", result.len());
        return Ok(Value::Object(result));
    };

    debug!(
        "merging overrides (seed_keys={}, override_keys={})",
        result.len(),
        override_map.len()
    );
    apply_overrides(&mut result, override_map, options, "")?;
    Ok(Value::Object(result))
}

fn expect_seed(seed: &Value) -> Result<&Object, MergeError> {
    match seed {
        Value::Object(map) => Ok(map),
        Value::Undefined | Value::Null => Err(MergeError::invalid(format!(
            "seed must be an object, received {}",
            seed.type_name()
        ))),
        Value::Array(_) => Err(MergeError::invalid(
            "seed must be an object; arrays are not supported as seeds",
        )),
        other => Err(MergeError::invalid(format!(
            "seed must be an object, received {}",
            other.type_name()
        ))),
    }
}

fn expect_overrides(overrides: Option<&Value>) -> Result<Option<&Object>, MergeError> {
    match overrides {
        None | Some(Value::Undefined) | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(MergeError::invalid(format!(
            "overrides must be an object, received {}",
            other.type_name()
        ))),
    }
}

fn apply_overrides(
    target: &mut Object,
    overrides: &Object,
    options: &MergeOptions,
    path: &str,
) -> Result<(), MergeError> {
    for (key, value) in entries(overrides) {
        if key.is_symbol() {
            match options.symbol_keys {
                SymbolKeyPolicy::Reject => {
                    return Err(MergeError::UnsupportedKey {
                        path: if path.is_empty() {
                            "<root>".to_string()
                        } else {
                            path.to_string()
                        },
                        key: key.to_string(),
                    });
                }
                SymbolKeyPolicy::Skip => {
                    warn!("skipping symbol key (path={})", join_path(path, key));
                    continue;
                }
                SymbolKeyPolicy::Merge => {}
            }
        }

        let kind = ValueKind::of(value);
        match kind {
            ValueKind::Absent => {
                trace!("keeping seed value (path={})", join_path(path, key));
            }
            ValueKind::Scalar(_) | ValueKind::Sequence(_) | ValueKind::Null => {
                trace!(
                    "replacing value (path={}, kind={})",
                    join_path(path, key),
                    kind.name()
                );
                target.insert(key.clone(), value.clone());
            }
            ValueKind::PlainObject(nested) => match target.get_mut(key) {
                Some(Value::Object(existing)) => {
                    trace!("merging nested object (path={})", join_path(path, key));
                    apply_overrides(existing, nested, options, &join_path(path, key))?;
                }
                _ => {
                    // Nested keys still go through the symbol key policy.
                    let key_path = join_path(path, key);
                    trace!("replacing with object (path={key_path})");
                    let mut fresh = Object::new();
                    apply_overrides(&mut fresh, nested, options, &key_path)?;
                    target.insert(key.clone(), Value::Object(fresh));
                }
            },
            ValueKind::Unsupported(unsupported) => {
                return Err(fail(unsupported, &join_path(path, key)));
            }
        }
    }
    Ok(())
}

/// Dotted path of `key` below `prefix`.
pub(crate) fn join_path(prefix: &str, key: impl fmt::Display) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
