use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Validation errors keyed by field name.
pub type FieldErrors = HashMap<String, FieldError>;

/// A validation error attached to a single field.
///
/// Errors arrive in three shapes: a list of messages, an object carrying a
/// `message` (and usually the failing rule under `type`), or a bare string.
/// The JSON forms decode untagged, so a server response such as
/// `{"email": ["Required"], "name": {"message": "Too long"}}` maps directly.
/// Any other JSON value lands in `Other` and is shown as its raw text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldError {
    List(Vec<String>),
    Object {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
    Text(String),
    Other(Value),
}

impl FieldError {
    pub fn message(message: impl Into<String>) -> Self {
        FieldError::Object {
            message: Some(message.into()),
            kind: None,
        }
    }

    pub fn rule(kind: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError::Object {
            message: Some(message.into()),
            kind: Some(kind.into()),
        }
    }

    /// Text shown under the field, or `None` when there is nothing to show.
    ///
    /// Lists are joined with `", "`, objects use their `message`, bare
    /// strings are used as-is. Empty results count as no error.
    pub fn display_text(&self) -> Option<String> {
        let text = match self {
            FieldError::List(messages) => messages.join(", "),
            FieldError::Object { message, .. } => message.clone().unwrap_or_default(),
            FieldError::Text(text) => text.clone(),
            FieldError::Other(value) => raw_text(value),
        };
        (!text.is_empty()).then_some(text)
    }
}

impl From<&str> for FieldError {
    fn from(text: &str) -> Self {
        FieldError::Text(text.to_string())
    }
}

impl From<String> for FieldError {
    fn from(text: String) -> Self {
        FieldError::Text(text)
    }
}

impl From<Vec<String>> for FieldError {
    fn from(messages: Vec<String>) -> Self {
        FieldError::List(messages)
    }
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(raw_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(object) => object.get("message").map(raw_text).unwrap_or_default(),
        other => other.to_string(),
    }
}

/// Decodes a field error map, dropping entries whose value is `null`.
///
/// For use with `#[serde(deserialize_with = "...")]`.
pub fn deserialize_field_errors<'de, D>(deserializer: D) -> Result<FieldErrors, D::Error>
where
    D: Deserializer<'de>,
{
    let errors = HashMap::<String, Option<FieldError>>::deserialize(deserializer)?;
    Ok(errors
        .into_iter()
        .filter_map(|(name, error)| error.map(|error| (name, error)))
        .collect())
}

/// Derives the display text for `name`, if it has an error.
pub fn error_text(errors: &FieldErrors, name: &str) -> Option<String> {
    errors.get(name).and_then(FieldError::display_text)
}
