//! Field deserializers for the loosely-typed records the API returns.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treat an explicit `null` like a missing key. Pair with `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like [`null_as_default`] for flags that default to `true`.
pub fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// Collapse `_id` and `id` into a single string `id` on every object in
/// `value`, nested records included.
///
/// A non-empty `id` wins; otherwise `_id` is used. Numeric ids are turned
/// into strings.
pub fn canonical_id(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            let legacy = obj.remove("_id");
            let keep_current = match obj.get("id") {
                Some(Value::String(s)) => !s.is_empty(),
                Some(Value::Number(_)) => true,
                _ => false,
            };
            if !keep_current {
                if let Some(legacy) = legacy.filter(|v| !v.is_null()) {
                    obj.insert("id".to_string(), legacy);
                }
            }
            let numeric = match obj.get("id") {
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            };
            if let Some(text) = numeric {
                obj.insert("id".to_string(), Value::String(text));
            }
            obj.values_mut().for_each(canonical_id);
        }
        Value::Array(items) => items.iter_mut().for_each(canonical_id),
        _ => {}
    }
}
