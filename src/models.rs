//! Data models and DTOs (Data Transfer Objects)
//!
//! One request struct per form variant. Each implements [`FormSubmission`],
//! which is everything the dispatch pipeline needs to know about a variant.

pub mod contact;
pub mod order;
pub mod review;

// Re-export commonly used types
pub use contact::*;
pub use order::*;
pub use review::*;

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

/// Descriptor of a form variant: required fields come from its `Validate`
/// derive, presentation from the methods below.
pub trait FormSubmission:
    DeserializeOwned + Validate + Default + std::fmt::Debug + Send + 'static
{
    /// Short name used in logs ("Contact", "Order", ...)
    const KIND: &'static str;

    /// Address the submitter typed in
    fn sender(&self) -> &str;

    fn subject(&self) -> String;

    /// `(label, value)` pairs in display order
    fn lines(&self) -> Vec<(&'static str, &str)>;
}

/// Check every required field is present, collecting the names that are not
pub fn check_required<F: Validate>(form: &F) -> Result<(), AppError> {
    form.validate().map_err(|errors| {
        let mut missing: Vec<String> = errors
            .field_errors()
            .into_keys()
            .map(|field| field.to_string())
            .collect();
        missing.sort();
        AppError::Validation { missing }
    })
}

/// Accept any JSON scalar as text.
///
/// Absent, `null` and `""` count as missing. Everything else is present,
/// so a numeric `0` rating is a real value, not a missing one.
pub fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

pub(crate) fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

/// Body returned for a delivered submission
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn new() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "loose_text")]
        value: Option<String>,
    }

    fn probe(body: Value) -> Option<String> {
        serde_json::from_value::<Probe>(body).unwrap().value
    }

    #[test]
    fn test_presence_predicate() {
        assert_eq!(probe(json!({})), None);
        assert_eq!(probe(json!({ "value": null })), None);
        assert_eq!(probe(json!({ "value": "" })), None);
        assert_eq!(probe(json!({ "value": " " })), Some(" ".to_string()));
        assert_eq!(probe(json!({ "value": "hi" })), Some("hi".to_string()));
    }

    #[test]
    fn test_scalars_render_as_text() {
        assert_eq!(probe(json!({ "value": 0 })), Some("0".to_string()));
        assert_eq!(probe(json!({ "value": 4.5 })), Some("4.5".to_string()));
        assert_eq!(probe(json!({ "value": false })), Some("false".to_string()));
        assert_eq!(probe(json!({ "value": [1, 2] })), Some("[1,2]".to_string()));
    }

    #[test]
    fn test_success_body() {
        let body = serde_json::to_value(SuccessResponse::new()).unwrap();
        assert_eq!(body, json!({ "success": true }));
    }
}
