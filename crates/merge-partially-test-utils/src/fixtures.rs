use chrono::{TimeZone, Utc};
use merge_partially::{Callable, Field, Shape, Value};

/// Seed with one required and one never-set optional property.
pub fn optional_prop_seed() -> Value {
    Value::object([("required_prop", Value::from("some value"))])
}

/// Seed with a value that may legitimately be set to null.
pub fn nullable_seed() -> Value {
    Value::object([
        ("non_null_prop", Value::from(3)),
        ("nullable_prop", Value::from("is not initialized as null")),
    ])
}

/// Nested seed touching every mergeable value kind.
pub fn profile_seed() -> Value {
    let last_updated = Utc
        .with_ymd_and_hms(2020, 3, 14, 15, 9, 26)
        .single()
        .unwrap_or_default();
    Value::object([
        ("user_name", Value::from("ada")),
        ("visits", Value::from(0)),
        ("active", Value::from(true)),
        ("account_id", Value::from(90_071_992_547_409_930_i128)),
        ("tags", Value::array([Value::from("math"), Value::from("engines")])),
        (
            "greet",
            Value::from(Callable::new("greet", |_| Value::from("hello"))),
        ),
        (
            "preferences",
            Value::object([
                ("last_updated", Value::from(last_updated)),
                ("favorite_color", Value::from("green")),
                (
                    "display",
                    Value::object([("theme", Value::from("light")), ("font_size", Value::from(12))]),
                ),
            ]),
        ),
    ])
}

/// Declared shape of [`profile_seed`], optionally marking `preferences` optional.
pub fn profile_shape(optional_preferences: bool) -> Shape {
    let preferences = Shape::object([
        Field::required("last_updated", Shape::Scalar),
        Field::optional("favorite_color", Shape::Scalar),
        Field::required(
            "display",
            Shape::object([
                Field::required("theme", Shape::Scalar),
                Field::required("font_size", Shape::Scalar),
            ]),
        ),
    ]);
    let preferences = if optional_preferences {
        Field::optional("preferences", preferences)
    } else {
        Field::required("preferences", preferences)
    };
    Shape::object([
        Field::required("user_name", Shape::Scalar),
        Field::required("visits", Shape::Scalar),
        Field::required("active", Shape::Scalar),
        Field::required("account_id", Shape::Scalar),
        Field::required("tags", Shape::array(Shape::Scalar)),
        Field::required("greet", Shape::Any),
        preferences,
    ])
}

/// `{"level": {"level": ... leaf}}` nested `depth` times.
pub fn deep_chain(depth: usize, leaf: Value) -> Value {
    (0..depth).fold(leaf, |inner, _| Value::object([("level", inner)]))
}

/// Flat object with `width` numbered string keys.
pub fn wide_object(width: usize, offset: i32) -> Value {
    Value::object((0..width).map(|index| {
        let number = i32::try_from(index).unwrap_or(i32::MAX).saturating_add(offset);
        (format!("key_{index}"), Value::from(number))
    }))
}
