//! Tool output encoding

use serde::Serialize;

/// Serialize `value` as minified JSON
///
/// Tool output is read by a model, not a person; indentation only costs
/// context.
pub fn compact_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_compact_json_shapes() {
        assert_eq!(compact_json(&json!({"id": 123, "name": "test"})).unwrap(), r#"{"id":123,"name":"test"}"#);
        assert_eq!(compact_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
        assert_eq!(
            compact_json(&json!({"outer": {"inner": "value"}})).unwrap(),
            r#"{"outer":{"inner":"value"}}"#
        );
        assert_eq!(compact_json(&Value::Null).unwrap(), "null");
    }

    #[test]
    fn test_compact_json_smaller_than_pretty() {
        let data = json!({
            "id": 12345,
            "name": "test-droplet",
            "status": "active",
            "region": { "name": "New York 3", "slug": "nyc3" },
            "size": { "slug": "s-1vcpu-1gb", "memory": 1024, "vcpus": 1 }
        });

        let compact = compact_json(&data).unwrap();
        let pretty = serde_json::to_string_pretty(&data).unwrap();
        assert!(compact.len() < pretty.len());

        let reparsed: Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(reparsed, data);
    }
}
