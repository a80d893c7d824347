//! Total classification of values into merge behaviours.

use crate::value::{Object, Value};

/// How the engine treats an override value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind<'a> {
    /// Replaced wholesale, including falsy values.
    Scalar(&'a Value),
    /// Replaced wholesale; never merged element-wise.
    Sequence(&'a [Value]),
    /// Explicit null; replaces the seed value.
    Null,
    /// Merged into a plain-object seed value, otherwise replaces it.
    PlainObject(&'a Object),
    /// Leaves the seed value untouched.
    Absent,
    /// No defined behaviour; reported through the guard.
    Unsupported(&'a Value),
}

impl<'a> ValueKind<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Undefined => ValueKind::Absent,
            Value::Null => ValueKind::Null,
            Value::Bool(_)
            | Value::Number(_)
            | Value::BigInt(_)
            | Value::String(_)
            | Value::Date(_)
            | Value::Symbol(_)
            | Value::Function(_) => ValueKind::Scalar(value),
            Value::Array(items) => ValueKind::Sequence(items),
            Value::Object(map) => ValueKind::PlainObject(map),
            Value::Opaque(_) => ValueKind::Unsupported(value),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Scalar(_) => "scalar",
            ValueKind::Sequence(_) => "sequence",
            ValueKind::Null => "null",
            ValueKind::PlainObject(_) => "object",
            ValueKind::Absent => "absent",
            ValueKind::Unsupported(_) => "unsupported",
        }
    }
}
