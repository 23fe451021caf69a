//! Tolerant extraction of record collections from response envelopes.
//!
//! Some deployments of the products backend return a bare JSON array, others
//! wrap it in an object (`{"products": [...]}` or `{"data": [...]}`), and a
//! misbehaving proxy has been seen returning an id-keyed object instead of an
//! array. The UI must render an empty list rather than crash on any of them.

use serde_json::Value;

/// Wrapper keys probed on object envelopes, in priority order.
const WRAPPER_KEYS: [&str; 2] = ["products", "data"];

/// Extract an ordered collection of record candidates from a decoded
/// response body of unknown shape.
///
/// - an array is returned unchanged;
/// - an object with an array under a recognized wrapper key yields that
///   array;
/// - an object whose values all look like records yields those values;
/// - anything else yields an empty vector.
///
/// Never fails. Callers decide what to do with candidates that do not
/// decode into their record type.
pub fn extract_collection(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in WRAPPER_KEYS {
                if matches!(map.get(key), Some(Value::Array(_))) {
                    if let Some(Value::Array(items)) = map.remove(key) {
                        return items;
                    }
                }
            }
            if !map.is_empty() && map.values().all(looks_like_record) {
                return map.into_iter().map(|(_, v)| v).collect();
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// A record candidate is a JSON object carrying an `id` key.
fn looks_like_record(value: &Value) -> bool {
    value.as_object().is_some_and(|obj| obj.contains_key("id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_is_returned_unchanged() {
        let items = vec![json!({"id": 1, "name": "a"}), json!({"id": 2})];
        assert_eq!(extract_collection(Value::Array(items.clone())), items);
        assert_eq!(extract_collection(json!([])), Vec::<Value>::new());
    }

    #[test]
    fn products_wrapper_is_unwrapped() {
        let body = json!({"products": [{"id": 1}], "total": 1});
        assert_eq!(extract_collection(body), vec![json!({"id": 1})]);
    }

    #[test]
    fn data_wrapper_is_unwrapped() {
        let body = json!({"data": [{"id": 1}, {"id": 2}]});
        assert_eq!(
            extract_collection(body),
            vec![json!({"id": 1}), json!({"id": 2})]
        );
    }

    #[test]
    fn products_takes_priority_over_data() {
        let body = json!({"data": [{"id": "d"}], "products": [{"id": "p"}]});
        assert_eq!(extract_collection(body), vec![json!({"id": "p"})]);
    }

    #[test]
    fn non_array_wrapper_value_is_skipped() {
        let body = json!({"products": "oops", "data": [{"id": 1}]});
        assert_eq!(extract_collection(body), vec![json!({"id": 1})]);
    }

    #[test]
    fn record_shaped_object_yields_its_values() {
        let body = json!({
            "0": {"id": "a", "name": "first"},
            "1": {"id": "b", "name": "second"}
        });
        let extracted = extract_collection(body);
        assert_eq!(extracted.len(), 2);
        assert!(extracted.contains(&json!({"id": "a", "name": "first"})));
    }

    #[test]
    fn unrecognized_shapes_degrade_to_empty() {
        assert!(extract_collection(json!(null)).is_empty());
        assert!(extract_collection(json!("a string")).is_empty());
        assert!(extract_collection(json!(42)).is_empty());
        assert!(extract_collection(json!({})).is_empty());
        assert!(extract_collection(json!({"message": "not records"})).is_empty());
        // One non-record value disqualifies the whole object.
        assert!(extract_collection(json!({"a": {"id": 1}, "b": "nope"})).is_empty());
    }
}
