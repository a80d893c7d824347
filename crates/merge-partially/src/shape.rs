//! Declared seed shapes and the opt-in deep-merge shape check.
//!
//! Deep overrides are ambiguous for optional nested objects: the seed may
//! lack the object entirely, so a partial override would be stored as an
//! incomplete object. `ensure_deep_mergeable` rejects such shapes up front.

use crate::MergeError;
use crate::merge::{join_path, merge_deep};
use crate::value::Value;

const NESTED_OPTIONAL_WARNING: &str = "merge_deep does not allow a seed object to have values on it \
     that are optional objects; use merge_shallow with a factory for the nested object instead";

/// Declared shape of a seed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Unconstrained value.
    Any,
    /// Any non-object, non-array value.
    Scalar,
    /// Array whose elements share a shape.
    Array(Box<Shape>),
    /// Object with declared fields.
    Object(Vec<Field>),
}

impl Shape {
    pub fn array(element: Shape) -> Self {
        Shape::Array(Box::new(element))
    }

    pub fn object(fields: impl IntoIterator<Item = Field>) -> Self {
        Shape::Object(fields.into_iter().collect())
    }
}

/// A named field of an object shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub shape: Shape,
    pub optional: bool,
}

impl Field {
    pub fn required(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            optional: true,
        }
    }
}

/// Fail when any field, at any depth, is an optional object.
pub fn ensure_deep_mergeable(shape: &Shape) -> Result<(), MergeError> {
    check_shape(shape, "")
}

/// Check `shape` with [`ensure_deep_mergeable`], then [`merge_deep`].
pub fn merge_deep_checked(
    seed: &Value,
    overrides: Option<&Value>,
    shape: &Shape,
) -> Result<Value, MergeError> {
    ensure_deep_mergeable(shape)?;
    merge_deep(seed, overrides)
}

fn check_shape(shape: &Shape, path: &str) -> Result<(), MergeError> {
    match shape {
        Shape::Any | Shape::Scalar => Ok(()),
        Shape::Array(element) => check_shape(element, &format!("{path}[]")),
        Shape::Object(fields) => {
            for field in fields {
                let field_path = join_path(path, &field.name);
                if field.optional && matches!(field.shape, Shape::Object(_)) {
                    return Err(MergeError::invalid(format!(
                        "{NESTED_OPTIONAL_WARNING} (field {field_path})"
                    )));
                }
                check_shape(&field.shape, &field_path)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn preferences(optional: bool) -> Shape {
        let nested = Shape::object([
            Field::required("last_updated", Shape::Scalar),
            Field::optional("favorite_color", Shape::Scalar),
        ]);
        let field = if optional {
            Field::optional("preferences", nested)
        } else {
            Field::required("preferences", nested)
        };
        Shape::object([Field::required("user_name", Shape::Scalar), field])
    }

    #[test]
    fn optional_scalars_are_allowed() {
        ensure_deep_mergeable(&preferences(false)).expect("mergeable");
    }

    #[test]
    fn optional_nested_object_is_rejected() {
        let err = ensure_deep_mergeable(&preferences(true)).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, MergeError::InvalidArgument(_)));
        assert!(msg.contains("merge_shallow"));
        assert!(msg.contains("(field preferences)"));
    }

    #[test]
    fn array_elements_are_checked() {
        let shape = Shape::object([Field::required(
            "items",
            Shape::array(Shape::object([Field::optional(
                "meta",
                Shape::object([]),
            )])),
        )]);
        let err = ensure_deep_mergeable(&shape).unwrap_err();
        assert!(err.to_string().contains("(field items[].meta)"));
    }

    #[test]
    fn checked_merge_runs_after_passing_check() {
        let seed = Value::object([(
            "preferences",
            Value::object([("last_updated", Value::from(1))]),
        )]);
        let overrides = Value::object([(
            "preferences",
            Value::object([("last_updated", Value::from(2))]),
        )]);
        let merged =
            merge_deep_checked(&seed, Some(&overrides), &preferences(false)).expect("merge");
        assert_eq!(merged["preferences"]["last_updated"], 2);
    }
}
