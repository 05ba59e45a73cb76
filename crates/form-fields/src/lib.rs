#[cfg(target_arch = "wasm32")]
pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod utils;

pub use components::{ElementAttrs, InputType, LabeledTextField, LabeledTextFieldProps};
pub use form::{use_form_context, FieldError, FieldErrors, FormHandle, FormProvider, FormState};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = config::AppConfig::load();
    let level = config.log_level().unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Sign-up UI starting...");

    yew::Renderer::<app::App>::with_props(app::AppProps { config }).render();

    Ok(())
}
