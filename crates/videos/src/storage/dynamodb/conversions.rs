//! DynamoDB attribute conversion functions.
//!
//! Pure functions that turn typed `AttributeValue`s into plain JSON, the same
//! shape a DynamoDB document client hands back. Testable without DynamoDB.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Number, Value};
use videos_core::storage::StoreError;
use videos_core::Item;

/// Convert a DynamoDB item to a JSON item.
pub fn item_from_attributes(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, StoreError> {
    attributes
        .iter()
        .map(|(name, value)| {
            attribute_to_json(value)
                .map(|json| (name.clone(), json))
                .map_err(|e| match e {
                    StoreError::InvalidData(msg) => {
                        StoreError::InvalidData(format!("attribute '{name}': {msg}"))
                    }
                    other => other,
                })
        })
        .collect()
}

/// Convert a single attribute value to JSON.
///
/// Binary values become base64 strings. Sets become arrays.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, StoreError> {
    let json = match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(list) => Value::Array(
            list.iter()
                .map(attribute_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        AttributeValue::M(map) => Value::Object(item_from_attributes(map)?),
        AttributeValue::Ss(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(set.iter().map(|n| number_to_json(n)).collect()),
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob.as_ref())),
        AttributeValue::Bs(blobs) => Value::Array(
            blobs
                .iter()
                .map(|blob| Value::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        ),
        other => {
            return Err(StoreError::InvalidData(format!(
                "unsupported attribute value: {:?}",
                other
            )))
        }
    };

    Ok(json)
}

/// DynamoDB numbers arrive as strings.
///
/// Integers stay exact, everything else goes through `f64`. A number JSON
/// cannot represent is passed through as its original string.
fn number_to_json(n: &str) -> Value {
    if let Ok(i) = n.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Ok(u) = n.parse::<u64>() {
        return Value::Number(u.into());
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(n.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::primitives::Blob;
    use serde_json::json;

    fn sample_video() -> HashMap<String, AttributeValue> {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("v-001".to_string()));
        item.insert(
            "title".to_string(),
            AttributeValue::S("Launch keynote".to_string()),
        );
        item.insert("durationSeconds".to_string(), AttributeValue::N("3721".to_string()));
        item.insert("published".to_string(), AttributeValue::Bool(true));
        item.insert("rating".to_string(), AttributeValue::N("4.5".to_string()));
        item.insert("thumbnail".to_string(), AttributeValue::Null(true));
        item.insert(
            "tags".to_string(),
            AttributeValue::Ss(vec!["talk".to_string(), "2024".to_string()]),
        );
        item
    }

    #[test]
    fn test_item_from_attributes() {
        let item = item_from_attributes(&sample_video()).unwrap();

        assert_eq!(
            Value::Object(item),
            json!({
                "id": "v-001",
                "title": "Launch keynote",
                "durationSeconds": 3721,
                "published": true,
                "rating": 4.5,
                "thumbnail": null,
                "tags": ["talk", "2024"],
            })
        );
    }

    #[test]
    fn test_nested_list_and_map() {
        let mut resolution = HashMap::new();
        resolution.insert("width".to_string(), AttributeValue::N("1920".to_string()));
        resolution.insert("height".to_string(), AttributeValue::N("1080".to_string()));

        let value = AttributeValue::L(vec![
            AttributeValue::M(resolution),
            AttributeValue::S("hd".to_string()),
        ]);

        assert_eq!(
            attribute_to_json(&value).unwrap(),
            json!([{ "width": 1920, "height": 1080 }, "hd"])
        );
    }

    #[test]
    fn test_number_conversions() {
        assert_eq!(number_to_json("-42"), json!(-42));
        assert_eq!(number_to_json("18446744073709551615"), json!(u64::MAX));
        assert_eq!(number_to_json("0.25"), json!(0.25));
        assert_eq!(number_to_json("1e400"), json!("1e400"));
    }

    #[test]
    fn test_number_set() {
        let value = AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]);

        assert_eq!(attribute_to_json(&value).unwrap(), json!([1, 2.5]));
    }

    #[test]
    fn test_binary_is_base64() {
        let value = AttributeValue::B(Blob::new(b"hello".to_vec()));
        assert_eq!(attribute_to_json(&value).unwrap(), json!("aGVsbG8="));

        let set = AttributeValue::Bs(vec![Blob::new(b"a".to_vec()), Blob::new(b"b".to_vec())]);
        assert_eq!(attribute_to_json(&set).unwrap(), json!(["YQ==", "Yg=="]));
    }

    #[test]
    fn test_empty_item() {
        let item = item_from_attributes(&HashMap::new()).unwrap();
        assert!(item.is_empty());
    }
}
