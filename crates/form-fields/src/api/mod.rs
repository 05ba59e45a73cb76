pub mod accounts;
pub mod client;

use crate::config::AppConfig;

#[derive(Clone, PartialEq)]
pub struct ApiCaller {
    pub config: AppConfig,
}

impl ApiCaller {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
