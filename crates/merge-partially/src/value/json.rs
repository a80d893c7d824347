//! Conversions between `Value` and `serde_json::Value`.

use super::{Key, Object, Value};
use chrono::SecondsFormat;
use serde_json::{Map, Number, Value as JsonValue};

/// Largest whole number an `f64` represents exactly, with all smaller ones.
const MAX_SAFE_WHOLE: f64 = 9_007_199_254_740_991.0;

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(flag) => Value::Bool(flag),
            JsonValue::Number(number) => number_from_json(&number),
            JsonValue::String(text) => Value::String(text),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (Key::name(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Lossy projection onto JSON, following JSON stringification rules.
    ///
    /// Undefined, function and symbol members are dropped from objects and
    /// become `null` inside arrays. Dates render as RFC 3339 strings, big
    /// integers as JSON integers (decimal strings past `u64`) and opaque
    /// handles as `{}`.
    pub fn to_json(&self) -> JsonValue {
        self.to_json_member().unwrap_or(JsonValue::Null)
    }

    fn to_json_member(&self) -> Option<JsonValue> {
        let json = match self {
            Value::Undefined | Value::Function(_) | Value::Symbol(_) => return None,
            Value::Null => JsonValue::Null,
            Value::Bool(flag) => JsonValue::Bool(*flag),
            Value::Number(number) => number_to_json(*number),
            Value::BigInt(number) => bigint_to_json(*number),
            Value::String(text) => JsonValue::String(text.clone()),
            Value::Date(date) => {
                JsonValue::String(date.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Array(items) => JsonValue::Array(
                items
                    .iter()
                    .map(|item| item.to_json_member().unwrap_or(JsonValue::Null))
                    .collect(),
            ),
            Value::Object(map) => JsonValue::Object(object_to_json(map)),
            Value::Opaque(_) => JsonValue::Object(Map::new()),
        };
        Some(json)
    }
}

fn object_to_json(map: &Object) -> Map<String, JsonValue> {
    let mut out = Map::new();
    for (key, value) in map {
        let name = match key {
            Key::Name(name) => name.clone(),
            Key::Index(index) => index.to_string(),
            Key::Symbol(_) => continue,
        };
        if let Some(json) = value.to_json_member() {
            out.insert(name, json);
        }
    }
    out
}

/// Integers beyond the exact `f64` range stay integers as `BigInt`.
fn number_from_json(number: &Number) -> Value {
    if let Some(whole) = number.as_i64() {
        if whole.unsigned_abs() <= MAX_SAFE_WHOLE as u64 {
            return Value::Number(whole as f64);
        }
        return Value::BigInt(i128::from(whole));
    }
    if let Some(whole) = number.as_u64() {
        return Value::BigInt(i128::from(whole));
    }
    number.as_f64().map_or(Value::Null, Value::Number)
}

/// JSON integer when it fits `i64`/`u64`, decimal string otherwise.
fn bigint_to_json(number: i128) -> JsonValue {
    if let Ok(whole) = i64::try_from(number) {
        return JsonValue::from(whole);
    }
    if let Ok(whole) = u64::try_from(number) {
        return JsonValue::from(whole);
    }
    JsonValue::String(number.to_string())
}

fn number_to_json(number: f64) -> JsonValue {
    if number.is_finite() && number.fract() == 0.0 && number.abs() <= MAX_SAFE_WHOLE {
        return JsonValue::from(number as i64);
    }
    Number::from_f64(number).map_or(JsonValue::Null, JsonValue::Number)
}

/// JSON-ish rendering used by `Display` and diagnostics.
pub(super) fn render(value: &Value) -> String {
    match value.to_json_member() {
        Some(json) => json.to_string(),
        None => "undefined".to_string(),
    }
}
