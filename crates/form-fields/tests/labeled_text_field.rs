// Renders fields through Yew's server renderer and inspects the HTML.
// cargo test -p form-fields --test labeled_text_field

use form_fields::{
    ElementAttrs, FieldError, FormProvider, FormState, InputType, LabeledTextField,
};
use rstest::*;
use yew::prelude::*;
use yew::ServerRenderer;

#[derive(Properties, PartialEq)]
struct HarnessProps {
    state: Option<FormState>,
    input_type: Option<InputType>,
    placeholder: Option<&'static str>,
    outer_class: Option<&'static str>,
    label_class: Option<&'static str>,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let mut outer_props = ElementAttrs::default();
    if let Some(class) = props.outer_class {
        outer_props = outer_props.with_class(class);
    }
    let mut label_props = ElementAttrs::default();
    if let Some(class) = props.label_class {
        label_props = label_props.with_class(class);
    }

    let field = html! {
        <LabeledTextField
            name="email"
            label="Email address"
            input_type={props.input_type}
            placeholder={props.placeholder.map(AttrValue::Static)}
            outer_props={outer_props}
            label_props={label_props}
        />
    };

    match &props.state {
        Some(state) => html! {
            <FormProvider initial_state={state.clone()}>
                {field}
            </FormProvider>
        },
        None => field,
    }
}

async fn render(
    state: Option<FormState>,
    input_type: Option<InputType>,
    placeholder: Option<&'static str>,
) -> String {
    ServerRenderer::<Harness>::with_props(move || HarnessProps {
        state,
        input_type,
        placeholder,
        outer_class: None,
        label_class: None,
    })
    .hydratable(false)
    .render()
    .await
}

/// The `<input ...>` tag alone, so assertions don't match the label or error.
fn input_tag(html: &str) -> &str {
    let start = html.find("<input").expect("no input rendered");
    let end = start + html[start..].find('>').expect("unterminated input");
    &html[start..=end]
}

#[fixture]
fn idle() -> FormState {
    FormState::default()
}

#[rstest]
#[case::list(
    FieldError::List(vec!["Required".into(), "Too short".into()]),
    "Required, Too short"
)]
#[case::object(FieldError::message("Invalid"), "Invalid")]
#[case::text(FieldError::Text("Taken".into()), "Taken")]
#[tokio::test]
async fn renders_derived_error_text(
    idle: FormState,
    #[case] error: FieldError,
    #[case] expected: &str,
) {
    let html = render(Some(idle.with_error("email", error)), None, None).await;

    assert!(html.contains("form-error-message"), "html: {}", html);
    assert!(html.contains(expected), "html: {}", html);
    assert!(input_tag(&html).contains("aria-invalid=\"true\""));
}

#[rstest]
#[tokio::test]
async fn no_error_entry_renders_no_error_node(idle: FormState) {
    let html = render(Some(idle.with_error("password", "Weak")), None, None).await;

    assert!(!html.contains("form-error-message"), "html: {}", html);
    assert!(!html.contains("Weak"));
    assert!(!input_tag(&html).contains("aria-invalid"));
}

#[rstest]
#[tokio::test]
async fn empty_error_renders_no_error_node(idle: FormState) {
    let html = render(Some(idle.with_error("email", FieldError::List(vec![]))), None, None).await;

    assert!(!html.contains("form-error-message"), "html: {}", html);
}

#[rstest]
#[case::without_error(None)]
#[case::with_error(Some(FieldError::message("Invalid")))]
#[tokio::test]
async fn submitting_disables_input(idle: FormState, #[case] error: Option<FieldError>) {
    let mut state = idle.submitting(true);
    if let Some(error) = error {
        state = state.with_error("email", error);
    }
    let html = render(Some(state), None, None).await;

    assert!(input_tag(&html).contains("disabled"), "html: {}", html);
}

#[rstest]
#[tokio::test]
async fn idle_form_leaves_input_enabled(idle: FormState) {
    let html = render(Some(idle), None, None).await;

    assert!(!input_tag(&html).contains("disabled"), "html: {}", html);
}

#[rstest]
#[case(InputType::Text, "text")]
#[case(InputType::Password, "password")]
#[case(InputType::Email, "email")]
#[case(InputType::Number, "number")]
#[tokio::test]
async fn type_attribute_follows_prop(
    idle: FormState,
    #[case] input_type: InputType,
    #[case] expected: &str,
) {
    let html = render(Some(idle), Some(input_type), None).await;

    assert!(
        input_tag(&html).contains(&format!("type=\"{}\"", expected)),
        "html: {}",
        html
    );
}

#[rstest]
#[tokio::test]
async fn missing_type_uses_native_default(idle: FormState) {
    let html = render(Some(idle), None, None).await;

    assert!(!input_tag(&html).contains("type="), "html: {}", html);
}

#[rstest]
#[tokio::test]
async fn passes_through_input_attributes(idle: FormState) {
    let html = render(Some(idle), None, Some("you@example.com")).await;
    let input = input_tag(&html);

    assert!(input.contains("placeholder=\"you@example.com\""), "html: {}", html);
    assert!(input.contains("name=\"email\""));
}

#[rstest]
#[tokio::test]
async fn wraps_input_in_label_inside_container() {
    let html = ServerRenderer::<Harness>::with_props(|| HarnessProps {
        state: Some(FormState::default()),
        input_type: None,
        placeholder: None,
        outer_class: Some("signup-email"),
        label_class: Some("wide"),
    })
    .hydratable(false)
    .render()
    .await;

    let container = html.find("form-control").expect("no container");
    let label = html.find("<label").expect("no label");
    let label_text = html.find("Email address").expect("no label text");
    let input = html.find("<input").expect("no input");
    let label_end = html.find("</label>").expect("unterminated label");

    assert!(container < label && label < label_text && label_text < input && input < label_end);
    assert!(html.contains("signup-email"));
    assert!(html.contains("wide"));
}

#[rstest]
#[tokio::test]
async fn outside_provider_renders_unbound_enabled_input() {
    let html = render(None, Some(InputType::Email), None).await;
    let input = input_tag(&html);

    assert!(!input.contains("disabled"), "html: {}", html);
    assert!(!html.contains("form-error-message"));
    assert!(input.contains("type=\"email\""));
}

#[rstest]
#[tokio::test]
async fn bound_input_carries_registered_name_and_value(idle: FormState) {
    let html = render(Some(idle.with_value("email", "ada@example.com")), None, None).await;
    let input = input_tag(&html);

    assert!(input.contains("name=\"email\""), "html: {}", html);
    assert!(input.contains("value=\"ada@example.com\""), "html: {}", html);
}

#[rstest]
#[tokio::test]
async fn numeric_server_error_renders_raw_text(idle: FormState) {
    let errors: form_fields::FieldErrors =
        serde_json::from_str(r#"{"email": 5}"#).expect("decodes");
    let mut state = idle;
    state.errors = errors;
    let html = render(Some(state), None, None).await;

    assert!(html.contains("form-error-message"), "html: {}", html);
    assert!(html.contains(">5<"), "html: {}", html);
}
