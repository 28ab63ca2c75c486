//! Lenient deserializers for backend identifiers and numbers.
//!
//! The backend emits ids as JSON numbers while the page compares them as
//! strings (select values, filter values). These helpers normalize both
//! shapes so `7` and `"7"` end up as the same `String`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_id(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Id that must always be present; null or missing becomes an empty string.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(value_to_id)
        .unwrap_or_default())
}

/// Optional id; null, missing and empty strings become `None`.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(value_to_id)
        .filter(|s| !s.is_empty()))
}

/// Optional integer given either as a number or a numeric string.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Optional float given either as a number or a numeric string.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "id")]
        id: String,
        #[serde(default, deserialize_with = "opt_id")]
        parent: Option<String>,
        #[serde(default, deserialize_with = "opt_i64")]
        area: Option<i64>,
        #[serde(default, deserialize_with = "opt_f64")]
        volume: Option<f64>,
    }

    #[test]
    fn test_numbers_and_strings_normalize_to_same_id() {
        let a: Probe = serde_json::from_str(r#"{"id": 7, "parent": 3}"#).unwrap();
        let b: Probe = serde_json::from_str(r#"{"id": "7", "parent": "3"}"#).unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(a.parent, b.parent);
        assert_eq!(a.id, "7");
    }

    #[test]
    fn test_missing_and_null_fields() {
        let p: Probe = serde_json::from_str(r#"{"parent": null, "volume": null}"#).unwrap();
        assert_eq!(p.id, "");
        assert_eq!(p.parent, None);
        assert_eq!(p.area, None);
        assert_eq!(p.volume, None);
    }

    #[test]
    fn test_empty_string_parent_is_none() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "parent": ""}"#).unwrap();
        assert_eq!(p.parent, None);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let p: Probe =
            serde_json::from_str(r#"{"id": 1, "area": "12", "volume": " 4.5 "}"#).unwrap();
        assert_eq!(p.area, Some(12));
        assert_eq!(p.volume, Some(4.5));

        let p: Probe = serde_json::from_str(r#"{"id": 1, "volume": "n/a"}"#).unwrap();
        assert_eq!(p.volume, None);
    }
}
