//! Normalization of the wrapper shapes the remote API uses for payloads.
//!
//! Depending on the endpoint a list arrives as a bare array, under `data`,
//! `items` or `results`, under a resource-named key (`users`, `claims`, ...),
//! or nested one level deeper (`{"data": {"results": [...]}}`). Every loader
//! goes through [`unwrap_list`] instead of probing those keys itself.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;
use crate::serde_helpers::canonical_id;

/// Generic wrapper keys, probed in this order after the resource key.
pub const WRAPPER_KEYS: [&str; 3] = ["data", "items", "results"];

/// Maximum wrapper nesting followed before giving up.
const MAX_DEPTH: usize = 4;

/// The shape a list response was found in.
#[derive(Debug, Clone, PartialEq)]
pub enum ListShape {
    /// The payload itself is the array.
    Bare,
    /// The array sits under a known key (`data`, `items`, `results` or the
    /// resource key passed by the caller).
    Keyed(String),
    /// The only array-valued property of an otherwise unknown wrapper.
    SoleArray(String),
    /// A wrapper whose known key holds another wrapper.
    Nested(String, Box<ListShape>),
}

impl ListShape {
    /// Detect where the list lives inside `value`.
    ///
    /// `resource_key` is the resource-named key (e.g. `"users"`) and is
    /// probed before the generic wrapper keys. Returns `None` when no list can
    /// be found.
    pub fn detect(value: &Value, resource_key: Option<&str>) -> Option<Self> {
        detect_at(value, resource_key, 0)
    }

    /// Follow this shape into `value`, returning the array it points at.
    fn locate<'a>(&self, value: &'a Value) -> Option<&'a Vec<Value>> {
        match self {
            ListShape::Bare => value.as_array(),
            ListShape::Keyed(key) | ListShape::SoleArray(key) => value.get(key)?.as_array(),
            ListShape::Nested(key, inner) => inner.locate(value.get(key)?),
        }
    }
}

fn detect_at(value: &Value, resource_key: Option<&str>, depth: usize) -> Option<ListShape> {
    if value.is_array() {
        return Some(ListShape::Bare);
    }
    let obj = value.as_object()?;
    if depth >= MAX_DEPTH {
        return None;
    }

    let keys = resource_key.into_iter().chain(WRAPPER_KEYS);
    for key in keys {
        match obj.get(key) {
            Some(Value::Array(_)) => return Some(ListShape::Keyed(key.to_string())),
            Some(inner @ Value::Object(_)) => {
                if let Some(shape) = detect_at(inner, resource_key, depth + 1) {
                    return Some(ListShape::Nested(key.to_string(), Box::new(shape)));
                }
            }
            _ => {}
        }
    }

    let mut arrays = obj.iter().filter(|(_, v)| v.is_array());
    match (arrays.next(), arrays.next()) {
        (Some((key, _)), None) => Some(ListShape::SoleArray(key.clone())),
        _ => None,
    }
}

/// Flatten any supported list response into a plain vector of JSON values.
///
/// Unrecognized shapes (including `null`) yield an empty list.
pub fn unwrap_list(value: &Value, resource_key: Option<&str>) -> Vec<Value> {
    ListShape::detect(value, resource_key)
        .and_then(|shape| shape.locate(value).cloned())
        .unwrap_or_default()
}

/// Flatten a list response and deserialize each element.
///
/// Records are decoded one at a time after their `_id`/`id` keys are merged.
/// A record that still fails to decode is skipped with a warning, so one bad
/// row never empties the whole table.
pub fn unwrap_list_as<T: DeserializeOwned>(
    value: &Value,
    resource_key: Option<&str>,
) -> Result<Vec<T>, AppError> {
    let records = unwrap_list(value, resource_key)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, mut item)| {
            canonical_id(&mut item);
            match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(
                        position = idx,
                        resource = ?resource_key,
                        error = %e,
                        "skipping undecodable record"
                    );
                    None
                }
            }
        })
        .collect();
    Ok(records)
}

/// Unwrap a single-record response (`{...}`, `{"data": {...}}` or
/// `{"<resource>": {...}}`) and deserialize it.
pub fn unwrap_object_as<T: DeserializeOwned>(
    value: &Value,
    resource_key: Option<&str>,
) -> Result<T, AppError> {
    let mut current = value;
    for _ in 0..MAX_DEPTH {
        let next = resource_key
            .into_iter()
            .chain(["data"])
            .find_map(|key| current.get(key).filter(|v| v.is_object()));
        match next {
            Some(inner) => current = inner,
            None => break,
        }
    }
    let mut record = current.clone();
    canonical_id(&mut record);
    serde_json::from_value(record)
        .map_err(|e| AppError::decode(format!("Unexpected response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Value {
        json!([{"id": "1"}, {"id": "2"}])
    }

    #[test]
    fn all_supported_shapes_flatten_to_the_same_list() {
        let shapes = [
            sample(),
            json!({"data": sample()}),
            json!({"items": sample()}),
            json!({"results": sample()}),
            json!({"data": {"results": sample()}}),
            json!({"payload": sample(), "total": 2, "page": 1}),
        ];
        for shape in &shapes {
            assert_eq!(unwrap_list(shape, None), sample().as_array().unwrap().clone());
        }
    }

    #[test]
    fn resource_key_is_probed_first() {
        let body = json!({"users": sample(), "data": [], "meta": {"total": 2}});
        assert_eq!(unwrap_list(&body, Some("users")).len(), 2);
        assert_eq!(
            ListShape::detect(&body, Some("users")),
            Some(ListShape::Keyed("users".into()))
        );
    }

    #[test]
    fn detect_reports_nested_shape() {
        let body = json!({"data": {"results": sample(), "count": 2}});
        assert_eq!(
            ListShape::detect(&body, None),
            Some(ListShape::Nested(
                "data".into(),
                Box::new(ListShape::Keyed("results".into()))
            ))
        );
    }

    #[test]
    fn wrapper_with_two_arrays_is_ambiguous() {
        let body = json!({"left": sample(), "right": sample()});
        assert_eq!(ListShape::detect(&body, None), None);
        assert!(unwrap_list(&body, None).is_empty());
    }

    #[test]
    fn null_and_scalars_yield_empty() {
        assert!(unwrap_list(&Value::Null, None).is_empty());
        assert!(unwrap_list(&json!("oops"), None).is_empty());
        assert!(unwrap_list(&json!({"data": null}), None).is_empty());
    }

    #[test]
    fn unwrap_list_as_deserializes_items() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Row {
            id: String,
        }
        let rows: Vec<Row> = unwrap_list_as(&json!({"items": sample()}), None).unwrap();
        assert_eq!(rows, vec![Row { id: "1".into() }, Row { id: "2".into() }]);
    }

    #[test]
    fn unwrap_list_as_skips_bad_record() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Row {
            count: u32,
        }
        let rows: Vec<Row> =
            unwrap_list_as(&json!([{"count": 1}, {"count": "x"}, {"count": 3}]), None).unwrap();
        assert_eq!(rows, vec![Row { count: 1 }, Row { count: 3 }]);
    }

    #[test]
    fn records_with_both_id_keys_decode() {
        let body = json!({"data": {"results": [
            {"_id": "1", "id": "1", "firstName": "A", "lastName": "B", "active": false}
        ]}});
        let users: Vec<crate::User> = unwrap_list_as(&body, Some("users")).unwrap();
        assert_eq!(users.len(), 1);
        let row = crate::UserRow::from(&users[0]);
        assert_eq!(row.id, "1");
        assert_eq!(row.name, "A B");
        assert_eq!(row.status, "inactive");
    }

    #[test]
    fn null_collections_do_not_drop_records() {
        let claims: Vec<crate::Claim> =
            unwrap_list_as(&json!({"claims": [{"_id": "c1", "damagePhotos": null}]}), Some("claims"))
                .unwrap();
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].id, "c1");
        assert!(claims[0].damage_photos.is_empty());

        let farms: Vec<crate::Farm> = unwrap_list_as(
            &json!([{"_id": "f1", "id": "f1", "name": null, "area": null, "location": {"province": null, "district": "Rubavu"}}]),
            Some("farms"),
        )
        .unwrap();
        assert_eq!(farms[0].area, 0.0);
        assert_eq!(farms[0].location_label(), "Rubavu");
    }

    #[test]
    fn unwrap_object_follows_wrappers() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Stats {
            total: u32,
        }
        let direct: Stats = unwrap_object_as(&json!({"total": 3}), None).unwrap();
        let wrapped: Stats = unwrap_object_as(&json!({"data": {"total": 4}}), None).unwrap();
        let named: Stats =
            unwrap_object_as(&json!({"data": {"stats": {"total": 5}}}), Some("stats")).unwrap();
        assert_eq!(direct.total, 3);
        assert_eq!(wrapped.total, 4);
        assert_eq!(named.total, 5);
    }
}
