use crate::error::ApiError;
use crate::form::error::deserialize_field_errors;
use crate::form::FieldErrors;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const UNPROCESSABLE_ENTITY: u16 = 422;

#[derive(Deserialize)]
struct ValidationBody {
    #[serde(deserialize_with = "deserialize_field_errors")]
    errors: FieldErrors,
}

pub fn get_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

pub async fn post_json<Req, Res>(url: &str, body: &Req) -> Result<Res, ApiError>
where
    Req: Serialize,
    Res: DeserializeOwned,
{
    let response: Response = Request::post(url)
        .header("Accept", "application/json")
        .json(body)?
        .send()
        .await?;

    if response.status() == UNPROCESSABLE_ENTITY {
        let body: ValidationBody = response.json().await?;
        return Err(ApiError::Validation(body.errors));
    }

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    Ok(response.json().await?)
}
