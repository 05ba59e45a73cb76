use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Id of the `<script type="application/json">` element carrying the config.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults to the page origin when absent.
    #[serde(default)]
    pub api_base_url: Option<String>,

    #[serde(default = "default_sign_up_path")]
    pub sign_up_path: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_sign_up_path() -> String {
    "/api/accounts".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            sign_up_path: default_sign_up_path(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.log_level()?;
        Ok(config)
    }

    /// Reads the config embedded in the host page, falling back to defaults.
    pub fn load() -> Self {
        let embedded = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match embedded {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                log::error!("Ignoring embedded configuration: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    pub fn sign_up_url(&self, origin: &str) -> String {
        let base = self.api_base_url.as_deref().unwrap_or(origin);
        format!("{}{}", base.trim_end_matches('/'), self.sign_up_path)
    }
}
