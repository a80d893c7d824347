//! Key/value enumeration over an object's own keys.

use crate::value::{Key, Object, Value};

/// Own entries of `object`. Callers must not rely on the order.
pub fn entries(object: &Object) -> impl Iterator<Item = (&Key, &Value)> {
    object.iter()
}
