use crate::api::ApiCaller;
use crate::components::{FormErrorMessage, InputType, LabeledTextField};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::form::{use_form_context, FieldError, FieldErrors, FormHandle, FormProvider, FormState};
use crate::models::{Account, SessionState, SignUpForm, DISPLAY_NAME, EMAIL, PASSWORD};
use crate::utils::validation::FormValidation;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

const CONFLICT: u16 = 409;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let (session, _) = use_store::<SessionState>();

    html! {
        <main class="container">
            <h1>{"Create your account"}</h1>
            if let Some(account) = &session.account {
                <SignedIn account={account.clone()} />
            } else {
                <SignUp config={props.config.clone()} />
            }
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct SignedInProps {
    account: Account,
}

#[function_component(SignedIn)]
fn signed_in(props: &SignedInProps) -> Html {
    let (_, dispatch) = use_store::<SessionState>();
    let on_sign_out = Callback::from(move |_| {
        dispatch.reduce_mut(|state| state.account = None);
    });

    html! {
        <div class="signed-in">
            <p>{format!("Signed in as {} <{}>", props.account.display_name, props.account.email)}</p>
            <button class="btn-secondary" onclick={on_sign_out}>{"Sign out"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SignUpProps {
    config: AppConfig,
}

#[function_component(SignUp)]
fn sign_up(props: &SignUpProps) -> Html {
    let submit_error = use_state(|| Option::<String>::None);
    let (_, dispatch) = use_store::<SessionState>();

    let on_submit = {
        let api = ApiCaller::new(props.config.clone());
        let submit_error = submit_error.clone();
        Callback::from(move |form: FormHandle| {
            submit_error.set(None);

            let request = SignUpForm::from_values(&form.values());
            let errors = request.validate();
            if !errors.is_empty() {
                log::debug!("Sign-up form has {} invalid field(s)", errors.len());
                form.finish_submit(errors);
                return;
            }

            let api = api.clone();
            let submit_error = submit_error.clone();
            let dispatch = dispatch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.sign_up(&request).await {
                    Ok(account) => {
                        log::info!("Signed up {}", account.email);
                        form.finish_submit(FieldErrors::new());
                        dispatch.reduce_mut(|state| state.account = Some(account));
                    }
                    Err(ApiError::Validation(errors)) => {
                        log::debug!("Server rejected sign-up: {:?}", errors);
                        form.finish_submit(errors);
                        form.set_value(PASSWORD, "");
                    }
                    Err(ApiError::Http { status: CONFLICT, .. }) => {
                        form.finish_submit(FieldErrors::new());
                        form.set_error(
                            EMAIL,
                            FieldError::rule("conflict", "An account with this email already exists"),
                        );
                    }
                    Err(e) => {
                        log::error!("Sign-up failed: {}", e);
                        submit_error.set(Some(e.to_string()));
                        form.finish_submit(FieldErrors::new());
                    }
                }
            });
        })
    };

    html! {
        <FormProvider on_submit={on_submit} class="sign-up-form">
            if let Some(error) = &*submit_error {
                <FormErrorMessage message={error.clone()} />
            }
            <SignUpFields />
        </FormProvider>
    }
}

#[function_component(SignUpFields)]
fn sign_up_fields() -> Html {
    let form = use_form_context();
    let email_ref = use_node_ref();

    let is_submitting = form.as_ref().is_some_and(FormHandle::is_submitting);
    let submit_count = form.as_ref().map(FormHandle::submit_count).unwrap_or_default();
    let email_invalid = form.as_ref().is_some_and(|form| form.error(EMAIL).is_some());
    let show_summary = !is_submitting && form.as_ref().is_some_and(FormHandle::has_errors);

    let on_reset = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(form) = &form {
                form.reset(FormState::default());
            }
        })
    };

    // Inputs are disabled during submission, so focus only once it has settled.
    {
        let email_ref = email_ref.clone();
        use_effect_with(
            (submit_count, !is_submitting && email_invalid),
            move |(_, focus)| {
                if *focus {
                    if let Some(input) = email_ref.cast::<HtmlInputElement>() {
                        if let Err(e) = input.focus() {
                            log::warn!("Could not focus the email field: {:?}", e);
                        }
                    }
                }
                || ()
            },
        );
    }

    html! {
        <>
            if show_summary {
                <p class="form-summary">{"Please fix the highlighted fields."}</p>
            }
            <LabeledTextField
                name={EMAIL}
                label="Email"
                input_type={InputType::Email}
                input_ref={email_ref}
                placeholder="you@example.com"
                autocomplete="email"
                required=true
            />
            <LabeledTextField
                name={DISPLAY_NAME}
                label="Display name"
                placeholder="Ada Lovelace"
                autocomplete="nickname"
            />
            <LabeledTextField
                name={PASSWORD}
                label="Password"
                input_type={InputType::Password}
                autocomplete="new-password"
                required=true
            />
            <div class="form-actions">
                <button type="submit" class="btn-primary" disabled={is_submitting}>
                    { if is_submitting { "Creating..." } else { "Create account" } }
                </button>
                <button type="button" class="btn-secondary" onclick={on_reset} disabled={is_submitting}>
                    {"Clear"}
                </button>
            </div>
        </>
    }
}
