use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormErrorMessageProps {
    pub message: AttrValue,
}

#[function_component(FormErrorMessage)]
pub fn form_error_message(props: &FormErrorMessageProps) -> Html {
    html! {
        <div class="form-error-message" role="alert">
            {props.message.clone()}
        </div>
    }
}
