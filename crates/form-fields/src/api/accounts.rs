use crate::api::{client, ApiCaller};
use crate::error::ApiError;
use crate::models::{Account, SignUpForm};

impl ApiCaller {
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<Account, ApiError> {
        let url = self.config.sign_up_url(&client::get_base_url());
        log::debug!("Signing up {} via {}", form.email, url);
        client::post_json(&url, form).await
    }
}
