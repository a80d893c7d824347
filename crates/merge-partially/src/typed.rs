//! Merging into serde types and plain JSON.

use crate::MergeError;
use crate::merge::merge_deep;
use crate::value::Value;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Deep-merge `overrides` into a copy of a serializable `seed`.
///
/// The merged value is decoded back into `T`, so overrides of the wrong type
/// surface as `MergeError::Decode`.
pub fn merge_typed<T>(seed: &T, overrides: &Value) -> Result<T, MergeError>
where
    T: Serialize + DeserializeOwned,
{
    let seed_value = Value::from(serde_json::to_value(seed)?);
    let merged = merge_deep(&seed_value, Some(overrides))?;
    debug!("decoding merged value into {}", std::any::type_name::<T>());
    Ok(serde_json::from_value(merged.to_json())?)
}

/// [`merge_typed`] with a JSON override.
pub fn merge_typed_json<T>(seed: &T, overrides: serde_json::Value) -> Result<T, MergeError>
where
    T: Serialize + DeserializeOwned,
{
    merge_typed(seed, &Value::from(overrides))
}

/// Deep-merge two JSON values.
pub fn merge_json(
    seed: &serde_json::Value,
    overrides: Option<&serde_json::Value>,
) -> Result<serde_json::Value, MergeError> {
    let seed_value = Value::from(seed.clone());
    let override_value = overrides.cloned().map(Value::from);
    let merged = merge_deep(&seed_value, override_value.as_ref())?;
    Ok(merged.to_json())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Preferences {
        theme: String,
        font_size: u32,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Profile {
        user_name: String,
        nickname: Option<String>,
        tags: Vec<String>,
        preferences: Preferences,
    }

    fn profile() -> Profile {
        Profile {
            user_name: "ada".to_string(),
            nickname: Some("countess".to_string()),
            tags: vec!["math".to_string(), "engines".to_string()],
            preferences: Preferences {
                theme: "light".to_string(),
                font_size: 12,
            },
        }
    }

    #[test]
    fn typed_merge_updates_nested_fields() {
        let seed = profile();
        let merged = merge_typed_json(
            &seed,
            json!({ "preferences": { "font_size": 14 }, "tags": ["poetry"] }),
        )
        .expect("merge");
        assert_eq!(merged.preferences.font_size, 14);
        assert_eq!(merged.preferences.theme, "light");
        assert_eq!(merged.tags, vec!["poetry".to_string()]);
        assert_eq!(seed, profile());
    }

    #[test]
    fn undefined_cannot_erase_required_field() {
        let overrides = Value::object([("user_name", Value::Undefined)]);
        let merged = merge_typed(&profile(), &overrides).expect("merge");
        assert_eq!(merged.user_name, "ada");
    }

    #[test]
    fn null_clears_optional_field() {
        let merged = merge_typed_json(&profile(), json!({ "nickname": null })).expect("merge");
        assert_eq!(merged.nickname, None);
    }

    #[test]
    fn mistyped_override_is_decode_error() {
        let err = merge_typed_json(&profile(), json!({ "preferences": { "font_size": "big" } }))
            .unwrap_err();
        assert!(matches!(err, MergeError::Decode(_)));
    }

    #[test]
    fn json_merge_replaces_arrays_and_merges_objects() {
        let seed = json!({ "a": [1, 2], "b": { "c": 1, "d": 2 } });
        let merged = merge_json(&seed, Some(&json!({ "a": [3], "b": { "d": 5 } }))).expect("merge");
        assert_eq!(merged, json!({ "a": [3], "b": { "c": 1, "d": 5 } }));
    }

    #[test]
    fn json_merge_rejects_array_seed() {
        let err = merge_json(&json!(["a"]), Some(&json!(["a"]))).unwrap_err();
        assert!(matches!(err, MergeError::InvalidArgument(_)));
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: u64,
        balance: i64,
        name: String,
    }

    #[test]
    fn typed_merge_keeps_integers_beyond_f64_precision() {
        let seed = Record {
            id: 9_007_199_254_740_993,
            balance: -9_007_199_254_740_993,
            name: "a".to_string(),
        };
        let merged = merge_typed_json(&seed, json!({ "name": "b" })).expect("merge");
        assert_eq!(merged.id, 9_007_199_254_740_993);
        assert_eq!(merged.balance, -9_007_199_254_740_993);
        assert_eq!(merged.name, "b");

        let merged = merge_typed_json(&seed, json!({ "id": u64::MAX })).expect("merge");
        assert_eq!(merged.id, u64::MAX);
    }

    #[test]
    fn json_merge_keeps_large_integers_exact() {
        let seed = json!({ "id": 9_007_199_254_740_993_u64, "n": 1 });
        let merged = merge_json(&seed, Some(&json!({ "n": 2 }))).expect("merge");
        assert_eq!(merged, json!({ "id": 9_007_199_254_740_993_u64, "n": 2 }));
        assert_eq!(merged["id"].as_u64(), Some(9_007_199_254_740_993));
    }
}
