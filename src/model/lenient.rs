//! Lenient field decoders
//!
//! The analytics API is not consistent about JSON types: ids arrive as
//! strings or numbers, counts sometimes as numeric strings, and free-text
//! fields like `quantity` as either. These helpers accept every shape seen
//! in practice and fall back to the field default instead of failing the
//! whole record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque entity identifier (company id, lead id, user id)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(EntityId(value_to_text(Value::deserialize(deserializer)?).unwrap_or_default()))
    }
}

/// Render scalars as text; objects, arrays and null have no text form
fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }
}

/// String or number → `Option<String>`; empty strings become `None`
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?).filter(|s| !s.is_empty()))
}

/// Number or numeric string → `u64`, anything else → 0
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_f64(&value)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v as u64)
        .unwrap_or(0))
}

/// Number or numeric string → `f64`, anything else → 0.0
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_f64(&value).filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Number or numeric string → `Option<f64>`
pub fn optional_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_f64(&value).filter(|v| v.is_finite()))
}

/// Bool, "true"/"false" or 0/1 → `bool`
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Array of records; null or non-arrays → empty, bad elements skipped
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Object of name → count pairs; non-numeric values count as 0
pub fn counts<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<(String, u64)>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(name, value)| {
                let n = value_to_f64(&value)
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .map(|v| v as u64)
                    .unwrap_or(0);
                (name, n)
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Nested record; null or malformed → `T::default()`
pub fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Optional nested record; null or malformed → `None`
pub fn optional_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => Ok(serde_json::from_value(value).ok()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Default)]
    struct Sample {
        #[serde(default)]
        id: EntityId,
        #[serde(default, deserialize_with = "text")]
        label: Option<String>,
        #[serde(default, deserialize_with = "count")]
        total: u64,
        #[serde(default, deserialize_with = "number")]
        rate: f64,
        #[serde(default, deserialize_with = "flag")]
        active: bool,
    }

    #[test]
    fn test_numeric_id_and_string_counts() {
        let sample: Sample = serde_json::from_value(serde_json::json!({
            "id": 42,
            "label": 500,
            "total": "17",
            "rate": "12.5%",
            "active": 1
        }))
        .unwrap();

        assert_eq!(sample.id.as_str(), "42");
        assert_eq!(sample.label.as_deref(), Some("500"));
        assert_eq!(sample.total, 17);
        assert!((sample.rate - 12.5).abs() < f64::EPSILON);
        assert!(sample.active);
    }

    #[test]
    fn test_null_and_garbage_fall_back() {
        let sample: Sample = serde_json::from_value(serde_json::json!({
            "id": null,
            "label": "",
            "total": {"nested": true},
            "rate": "n/a",
            "active": "nope"
        }))
        .unwrap();

        assert!(sample.id.is_empty());
        assert_eq!(sample.label, None);
        assert_eq!(sample.total, 0);
        assert_eq!(sample.rate, 0.0);
        assert!(!sample.active);
    }
}
