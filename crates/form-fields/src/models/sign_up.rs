use crate::form::FieldErrors;
use crate::utils::validation::{
    validate_display_name, validate_email, validate_fields, validate_password, FormValidation,
    Validator,
};
use serde::Serialize;
use std::collections::HashMap;

pub const EMAIL: &str = "email";
pub const DISPLAY_NAME: &str = "display_name";
pub const PASSWORD: &str = "password";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignUpForm {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

impl SignUpForm {
    pub fn from_values(values: &HashMap<String, String>) -> Self {
        let get = |name: &str| values.get(name).cloned().unwrap_or_default();
        Self {
            email: get(EMAIL).trim().to_string(),
            display_name: get(DISPLAY_NAME).trim().to_string(),
            password: get(PASSWORD),
        }
    }

    fn values(&self) -> HashMap<String, String> {
        HashMap::from([
            (EMAIL.to_string(), self.email.clone()),
            (DISPLAY_NAME.to_string(), self.display_name.clone()),
            (PASSWORD.to_string(), self.password.clone()),
        ])
    }
}

impl FormValidation for SignUpForm {
    fn validate(&self) -> FieldErrors {
        validate_fields(
            &self.values(),
            &[
                (EMAIL, validate_email as Validator),
                (DISPLAY_NAME, validate_display_name as Validator),
                (PASSWORD, validate_password as Validator),
            ],
        )
    }
}
