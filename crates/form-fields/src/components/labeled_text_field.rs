use crate::components::{ElementAttrs, FormControl, FormErrorMessage};
use crate::form::use_form_context;
use yew::prelude::*;

/// Text-like input types. Radio buttons and checkboxes are not labeled text
/// fields and are left out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Text,
    Password,
    Email,
    Number,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LabeledTextFieldProps {
    /// Key of the field in the form state.
    pub name: AttrValue,
    pub label: AttrValue,
    /// Left unset, the input falls back to the browser default (`text`).
    #[prop_or_default]
    pub input_type: Option<InputType>,
    #[prop_or_default]
    pub outer_props: ElementAttrs,
    #[prop_or_default]
    pub label_props: ElementAttrs,
    /// Attached to the rendered `<input>` so callers can focus or measure it.
    #[prop_or_default]
    pub input_ref: NodeRef,

    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub readonly: bool,
    #[prop_or_default]
    pub autofocus: bool,
    #[prop_or_default]
    pub disabled: bool,
}

/// A label wrapping an input bound to the enclosing [`FormProvider`], with
/// the field's validation error rendered underneath.
///
/// The input is disabled while the form submits.
///
/// [`FormProvider`]: crate::form::FormProvider
#[function_component(LabeledTextField)]
pub fn labeled_text_field(props: &LabeledTextFieldProps) -> Html {
    let form = use_form_context();

    let (is_submitting, error, registration) = match &form {
        Some(form) => (
            form.is_submitting(),
            form.error_text(&props.name),
            Some(form.register(&props.name)),
        ),
        None => {
            log::warn!(
                "LabeledTextField '{}' rendered outside of a FormProvider",
                props.name
            );
            (false, None, None)
        }
    };

    let (name, value, oninput) = match registration {
        Some(registration) => (
            registration.name,
            Some(registration.value),
            Some(registration.oninput),
        ),
        None => (props.name.clone(), None, None),
    };
    let input_type = props.input_type.map(|t| AttrValue::Static(t.as_str()));
    let label_class = classes!("form-label", props.label_props.class.clone());

    html! {
        <FormControl attrs={props.outer_props.clone()} invalid={error.is_some()}>
            <label
                id={props.label_props.id.clone()}
                class={label_class}
                style={props.label_props.style.clone()}
            >
                {props.label.clone()}
                <input
                    ref={props.input_ref.clone()}
                    name={name}
                    type={input_type}
                    value={value}
                    oninput={oninput}
                    disabled={props.disabled || is_submitting}
                    id={props.id.clone()}
                    class={classes!("form-input", props.class.clone())}
                    placeholder={props.placeholder.clone()}
                    autocomplete={props.autocomplete.clone()}
                    required={props.required}
                    readonly={props.readonly}
                    autofocus={props.autofocus}
                    aria-invalid={error.is_some().then_some("true")}
                />
            </label>
            if let Some(message) = error {
                <FormErrorMessage message={message} />
            }
        </FormControl>
    }
}
