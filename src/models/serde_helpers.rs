//! Lenient field decoders for hand-authored project drafts.
//!
//! Each decoder accepts any JSON value and keeps it only when it has the
//! expected shape. Anything else decodes as `None`, which the validator then
//! reports as a missing or malformed field.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Keeps the string elements of an array, dropping everything else.
pub fn string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

pub fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool())
}

/// Whole numbers only; `2.0` is accepted, `2.5` is not.
pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    })
}

pub fn id<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer(deserializer)?.and_then(|n| u32::try_from(n).ok()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "super::string_list")]
        tags: Option<Vec<String>>,
        #[serde(default, deserialize_with = "super::integer")]
        size: Option<i64>,
        #[serde(default, deserialize_with = "super::boolean")]
        flag: Option<bool>,
    }

    #[test]
    fn test_wrong_types_decode_as_none() {
        let probe: Probe =
            serde_json::from_value(json!({"name": 3, "tags": "x", "size": "two", "flag": 1}))
                .unwrap();
        assert!(probe.name.is_none());
        assert!(probe.tags.is_none());
        assert!(probe.size.is_none());
        assert!(probe.flag.is_none());
    }

    #[test]
    fn test_missing_fields_decode_as_none() {
        let probe: Probe = serde_json::from_value(json!({})).unwrap();
        assert!(probe.name.is_none() && probe.tags.is_none());
    }

    #[test]
    fn test_string_list_keeps_only_strings() {
        let probe: Probe = serde_json::from_value(json!({"tags": ["a", 1, null, "b"]})).unwrap();
        assert_eq!(probe.tags.unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_integer_accepts_whole_floats() {
        let probe: Probe = serde_json::from_value(json!({"size": 2.0})).unwrap();
        assert_eq!(probe.size, Some(2));
        let probe: Probe = serde_json::from_value(json!({"size": 2.5})).unwrap();
        assert_eq!(probe.size, None);
    }
}
