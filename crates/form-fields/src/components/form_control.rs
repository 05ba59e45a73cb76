use yew::prelude::*;

/// Attributes forwarded onto a wrapper element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementAttrs {
    pub id: Option<AttrValue>,
    pub class: Classes,
    pub style: Option<AttrValue>,
}

impl ElementAttrs {
    pub fn with_id(mut self, id: impl Into<AttrValue>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<Classes>) -> Self {
        self.class.push(class.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<AttrValue>) -> Self {
        self.style = Some(style.into());
        self
    }
}

#[derive(Properties, PartialEq)]
pub struct FormControlProps {
    #[prop_or_default]
    pub attrs: ElementAttrs,
    #[prop_or_default]
    pub invalid: bool,
    pub children: Children,
}

#[function_component(FormControl)]
pub fn form_control(props: &FormControlProps) -> Html {
    let class = classes!(
        "form-control",
        props.invalid.then_some("form-control-invalid"),
        props.attrs.class.clone()
    );

    html! {
        <div id={props.attrs.id.clone()} class={class} style={props.attrs.style.clone()}>
            {for props.children.iter()}
        </div>
    }
}
