//! Response Envelope
//!
//! The analytics API wraps some payloads as `{ "data": ... }` and returns
//! others bare. [`Envelope`] accepts either form and hands out typed values
//! with empty defaults, so no endpoint shape can fail a dashboard render.
//!
//! ```text
//! [ ... ]            → list: items
//! { data: [ ... ] }  → list: items
//! { data: { ... } }  → object: data
//! { ... }            → object: itself
//! anything else      → [] / T::default()
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Any JSON payload returned by an analytics endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    raw: Value,
}

impl Envelope {
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// Parse a body; unparseable text behaves like an empty payload
    pub fn from_text(body: &str) -> Self {
        Self::from_value(serde_json::from_str(body).unwrap_or(Value::Null))
    }

    /// The wrapped `data` member, if there is one
    fn data(&self) -> Option<&Value> {
        self.raw.as_object()?.get("data")
    }

    /// Array items from a bare array or from `data`
    fn items(&self) -> Option<&Vec<Value>> {
        match &self.raw {
            Value::Array(items) => Some(items),
            _ => self.data()?.as_array(),
        }
    }

    /// The object payload: `data` when it is an object, else the raw object
    fn payload(&self) -> Option<&Value> {
        match self.data() {
            Some(data @ Value::Object(_)) => Some(data),
            _ => self.raw.is_object().then_some(&self.raw),
        }
    }

    /// Typed list; elements that do not decode are skipped
    pub fn list<T: DeserializeOwned>(&self) -> Vec<T> {
        let Some(items) = self.items() else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value(item.clone()) {
                Ok(value) => out.push(value),
                Err(e) => tracing::debug!(error = %e, "Skipping malformed list element"),
            }
        }
        out
    }

    /// First element of the list form
    pub fn first<T: DeserializeOwned>(&self) -> Option<T> {
        let first = self.items()?.first()?;
        serde_json::from_value(first.clone()).ok()
    }

    /// Typed object with defaults for anything missing
    pub fn object<T: DeserializeOwned + Default>(&self) -> T {
        self.optional_object().unwrap_or_default()
    }

    /// Typed object, `None` when there is no object payload at all
    pub fn optional_object<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_value(self.payload()?.clone()).ok()
    }

    /// Only the wrapped `data` object; a bare payload yields `None`
    pub fn data_object<T: DeserializeOwned>(&self) -> Option<T> {
        match self.data()? {
            data @ Value::Object(_) => serde_json::from_value(data.clone()).ok(),
            _ => None,
        }
    }

    /// Only the wrapped `data` array; a bare array yields `[]`
    pub fn data_list<T: DeserializeOwned>(&self) -> Vec<T> {
        match self.data().and_then(Value::as_array) {
            Some(items) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            None => Vec::new(),
        }
    }

    /// A named member of the object payload
    pub fn field<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let value = self.payload()?.get(name)?;
        serde_json::from_value(value.clone()).ok()
    }

    /// A named list member of the object payload, `[]` when absent
    pub fn field_list<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        Envelope::from_value(self.payload().and_then(|p| p.get(name)).cloned().unwrap_or_default())
            .list()
    }
}

impl From<Value> for Envelope {
    fn from(raw: Value) -> Self {
        Self::from_value(raw)
    }
}

/// Public endpoints answer `{ status: "success", data }` or a failure status
#[derive(Debug, Clone, PartialEq)]
pub struct PublicEnvelope {
    raw: Value,
}

impl PublicEnvelope {
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    pub fn is_success(&self) -> bool {
        self.raw.get("status").and_then(Value::as_str) == Some("success")
    }

    /// The `data` record when the status is "success"
    pub fn into_data<T: DeserializeOwned>(self) -> Option<T> {
        if !self.is_success() {
            return None;
        }
        let data = self.raw.get("data")?.clone();
        if data.is_null() {
            return None;
        }
        serde_json::from_value(data).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Company, DailySignups, ProfileCompletion, SignupSummary};
    use serde_json::json;

    #[test]
    fn test_list_shapes() {
        let wrapped = Envelope::from_value(json!({"data": [{"id": 1}, {"id": 2}]}));
        let bare = Envelope::from_value(json!([{"id": 1}]));
        let empty = Envelope::from_value(json!({}));
        let null = Envelope::from_value(Value::Null);
        let wrong = Envelope::from_value(json!({"data": {"id": 1}}));

        assert_eq!(wrapped.list::<Company>().len(), 2);
        assert_eq!(bare.list::<Company>().len(), 1);
        assert!(empty.list::<Company>().is_empty());
        assert!(null.list::<Company>().is_empty());
        assert!(wrong.list::<Company>().is_empty());
    }

    #[test]
    fn test_list_skips_malformed_elements() {
        let env = Envelope::from_value(json!([{"id": 1}, 17, "x", {"id": "b"}]));
        let companies: Vec<Company> = env.list();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[1].id.as_str(), "b");
    }

    #[test]
    fn test_object_shapes() {
        let wrapped = Envelope::from_value(json!({"data": {"allTime": {"count": 9}}}));
        let bare = Envelope::from_value(json!({"allTime": {"count": 4}}));
        let empty = Envelope::from_value(json!({}));
        let list = Envelope::from_value(json!([1, 2]));

        assert_eq!(wrapped.object::<SignupSummary>().total_companies(), 9);
        assert_eq!(bare.object::<SignupSummary>().total_companies(), 4);
        assert_eq!(empty.object::<SignupSummary>(), SignupSummary::default());
        assert_eq!(list.object::<SignupSummary>(), SignupSummary::default());
    }

    #[test]
    fn test_null_data_falls_back_to_raw_object() {
        let env = Envelope::from_value(json!({"data": null, "totalSignups": 5}));
        assert_eq!(env.object::<DailySignups>().total_signups, 5);
    }

    #[test]
    fn test_completion_either_level() {
        let nested = Envelope::from_value(json!({"data": {"completionPercentage": 80}}));
        let flat = Envelope::from_value(json!({"completionPercentage": 35.5}));
        assert_eq!(nested.object::<ProfileCompletion>().completion_percentage, 80.0);
        assert_eq!(flat.object::<ProfileCompletion>().completion_percentage, 35.5);
    }

    #[test]
    fn test_first_and_field_list() {
        let env = Envelope::from_value(json!({"data": [{"id": "a"}, {"id": "b"}]}));
        assert_eq!(env.first::<Company>().map(|c| c.id.0), Some("a".to_string()));
        assert!(Envelope::from_value(json!([])).first::<Company>().is_none());

        let deactivated = Envelope::from_value(json!({"data": {"inactive": [{"id": 3}]}}));
        assert_eq!(deactivated.field_list::<Company>("inactive").len(), 1);
        assert!(deactivated.field_list::<Company>("missing").is_empty());
    }

    #[test]
    fn test_field_lookup() {
        let nested = Envelope::from_value(json!({"data": {"totalSignups": 12, "label": "week"}}));
        assert_eq!(nested.field::<u64>("totalSignups"), Some(12));
        assert_eq!(nested.field::<String>("label").as_deref(), Some("week"));
        assert_eq!(nested.field::<u64>("missing"), None);
        assert_eq!(nested.field::<u64>("label"), None);

        let bare = Envelope::from_value(json!({"totalSignups": 4}));
        assert_eq!(bare.field::<u64>("totalSignups"), Some(4));
        assert_eq!(Envelope::from_value(json!([1, 2])).field::<u64>("totalSignups"), None);
    }

    #[test]
    fn test_data_only_accessors() {
        let bare = Envelope::from_value(json!([{"id": 1}]));
        assert!(bare.data_list::<Company>().is_empty());
        assert!(bare.data_object::<SignupSummary>().is_none());
    }

    #[test]
    fn test_from_text_garbage() {
        let env = Envelope::from_text("<html>502</html>");
        assert!(env.list::<Company>().is_empty());
        assert_eq!(env.object::<SignupSummary>(), SignupSummary::default());
    }

    #[test]
    fn test_public_envelope() {
        let ok = PublicEnvelope::from_value(json!({"status": "success", "data": {"id": 5}}));
        let missing = PublicEnvelope::from_value(json!({"status": "error", "message": "nope"}));
        let empty = PublicEnvelope::from_value(json!({"status": "success", "data": null}));

        assert_eq!(ok.into_data::<Company>().map(|c| c.id.0), Some("5".to_string()));
        assert!(missing.into_data::<Company>().is_none());
        assert!(empty.into_data::<Company>().is_none());
    }
}
