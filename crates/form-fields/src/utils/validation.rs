use crate::form::{FieldError, FieldErrors};
use std::collections::HashMap;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const DISPLAY_NAME_MAX_LEN: usize = 63;

pub type Validator = fn(&str) -> Option<FieldError>;

pub trait FormValidation {
    fn validate(&self) -> FieldErrors;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

pub fn validate_required(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::rule("required", "Required"));
    }
    None
}

pub fn validate_display_name(name: &str) -> Option<FieldError> {
    if let Some(error) = validate_required(name) {
        return Some(error);
    }
    if name.chars().count() > DISPLAY_NAME_MAX_LEN {
        return Some(FieldError::rule(
            "maxLength",
            format!("Must be {} characters or less", DISPLAY_NAME_MAX_LEN),
        ));
    }
    None
}

pub fn validate_email(email: &str) -> Option<FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Some(FieldError::rule("required", "Required"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Some(FieldError::rule("pattern", "Invalid email address"));
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return Some(FieldError::rule("pattern", "Invalid email address"));
    }
    // domain needs at least one dot with labels on both sides
    if domain.split('.').count() < 2 || domain.split('.').any(str::is_empty) {
        return Some(FieldError::rule("pattern", "Invalid email address"));
    }
    None
}

/// Collects every failed password rule so they show together.
pub fn validate_password(password: &str) -> Option<FieldError> {
    let mut messages = Vec::new();
    if password.is_empty() {
        messages.push("Required".to_string());
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        messages.push(format!("Must be at least {} characters", PASSWORD_MIN_LEN));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        messages.push("Must contain a digit".to_string());
    }

    if messages.is_empty() {
        None
    } else {
        Some(FieldError::List(messages))
    }
}

/// Runs `validators` against `values`, keyed by field name.
pub fn validate_fields(
    values: &HashMap<String, String>,
    validators: &[(&str, Validator)],
) -> FieldErrors {
    validators
        .iter()
        .filter_map(|(name, validate)| {
            let value = values.get(*name).map(String::as_str).unwrap_or_default();
            validate(value).map(|error| (name.to_string(), error))
        })
        .collect()
}
