#[cfg(target_arch = "wasm32")]
use crate::form::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),
}

#[cfg(target_arch = "wasm32")]
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("HTTP error: status {status} - {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Server rejected {} field(s)", .0.len())]
    Validation(FieldErrors),
}
