use crate::form::error::{self, FieldError, FieldErrors};
use crate::form::state::{FormAction, FormState};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Shared handle to the state of the enclosing form.
///
/// Published by [`FormProvider`] and read by fields through
/// [`use_form_context`]. Cloning is cheap; every clone dispatches into the
/// same reducer.
#[derive(Clone)]
pub struct FormHandle {
    state: UseReducerHandle<FormState>,
    guard: SubmitGuard,
}

impl PartialEq for FormHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

/// In-flight marker shared by every clone of a [`FormHandle`].
///
/// The reducer state seen by a handle is the snapshot of its render, so two
/// submit events landing before the next render would both read
/// `is_submitting == false`. The guard is updated immediately.
#[derive(Clone, Debug, Default)]
pub struct SubmitGuard(Rc<Cell<bool>>);

impl SubmitGuard {
    pub fn new(in_flight: bool) -> Self {
        Self(Rc::new(Cell::new(in_flight)))
    }

    /// Marks a submission as started; `false` if one already is.
    pub fn try_begin(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn end(&self) {
        self.0.set(false);
    }

    pub fn in_flight(&self) -> bool {
        self.0.get()
    }
}

/// What a field needs to bind its input to form state.
#[derive(Clone, PartialEq)]
pub struct FieldRegistration {
    pub name: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
}

impl FormHandle {
    pub fn new(state: UseReducerHandle<FormState>, guard: SubmitGuard) -> Self {
        Self { state, guard }
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    pub fn submit_count(&self) -> u32 {
        self.state.submit_count
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.state.values.get(name).map(String::as_str)
    }

    pub fn values(&self) -> HashMap<String, String> {
        self.state.values.clone()
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.state.errors.get(name)
    }

    pub fn error_text(&self, name: &str) -> Option<String> {
        error::error_text(&self.state.errors, name)
    }

    pub fn has_errors(&self) -> bool {
        !self.state.errors.is_empty()
    }

    /// Binds an input to the entry `name`.
    pub fn register(&self, name: &str) -> FieldRegistration {
        let value = self.value(name).unwrap_or_default();
        let oninput = {
            let dispatcher = self.state.dispatcher();
            let name = name.to_string();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                dispatcher.dispatch(FormAction::Change {
                    name: name.clone(),
                    value: input.value(),
                });
            })
        };
        FieldRegistration {
            name: AttrValue::from(name.to_string()),
            value: AttrValue::from(value.to_string()),
            oninput,
        }
    }

    pub fn set_value(&self, name: impl Into<String>, value: impl Into<String>) {
        self.state.dispatch(FormAction::Change {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn set_error(&self, name: impl Into<String>, error: impl Into<FieldError>) {
        self.state.dispatch(FormAction::SetError {
            name: name.into(),
            error: error.into(),
        });
    }

    /// Ends the submission started by the provider, storing `errors`.
    pub fn finish_submit(&self, errors: FieldErrors) {
        self.guard.end();
        self.state.dispatch(FormAction::SubmitFinished { errors });
    }

    pub fn reset(&self, state: FormState) {
        if !state.is_submitting {
            self.guard.end();
        }
        self.state.dispatch(FormAction::Reset(state));
    }

    pub(crate) fn start_submit(&self) -> bool {
        if !self.guard.try_begin() {
            return false;
        }
        self.state.dispatch(FormAction::SubmitStarted);
        true
    }
}

#[hook]
pub fn use_form_context() -> Option<FormHandle> {
    use_context::<FormHandle>()
}

#[derive(Properties, PartialEq)]
pub struct FormProviderProps {
    #[prop_or_default]
    pub initial_state: FormState,
    #[prop_or_default]
    pub on_submit: Callback<FormHandle>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Owns a form's state and exposes it to the fields rendered inside.
///
/// Submitting the `<form>` flips the submitting flag and hands the handle
/// to `on_submit`, which must eventually call [`FormHandle::finish_submit`].
#[function_component(FormProvider)]
pub fn form_provider(props: &FormProviderProps) -> Html {
    let state = {
        let initial_state = props.initial_state.clone();
        use_reducer(move || initial_state)
    };
    let guard = {
        let in_flight = props.initial_state.is_submitting;
        use_memo((), move |_| SubmitGuard::new(in_flight))
    };
    let handle = FormHandle::new(state, (*guard).clone());

    let onsubmit = {
        let handle = handle.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !handle.start_submit() {
                log::debug!("Ignoring submit while a submission is in flight");
                return;
            }
            on_submit.emit(handle.clone());
        })
    };

    html! {
        <ContextProvider<FormHandle> context={handle}>
            <form class={classes!("form", props.class.clone())} onsubmit={onsubmit} novalidate=true>
                {for props.children.iter()}
            </form>
        </ContextProvider<FormHandle>>
    }
}
