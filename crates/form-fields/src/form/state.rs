use crate::form::error::{FieldError, FieldErrors};
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub values: HashMap<String, String>,
    pub errors: FieldErrors,
    pub is_submitting: bool,
    pub submit_count: u32,
}

impl FormState {
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with_error(mut self, name: impl Into<String>, error: impl Into<FieldError>) -> Self {
        self.errors.insert(name.into(), error.into());
        self
    }

    pub fn submitting(mut self, is_submitting: bool) -> Self {
        self.is_submitting = is_submitting;
        self
    }
}

pub enum FormAction {
    Change { name: String, value: String },
    SubmitStarted,
    SubmitFinished { errors: FieldErrors },
    SetError { name: String, error: FieldError },
    Reset(FormState),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Change { name, value } => {
                if self.values.get(&name) == Some(&value) {
                    return self;
                }
                let mut next = (*self).clone();
                next.values.insert(name, value);
                Rc::new(next)
            }
            FormAction::SubmitStarted => {
                let mut next = (*self).clone();
                next.is_submitting = true;
                next.submit_count += 1;
                next.errors.clear();
                Rc::new(next)
            }
            FormAction::SubmitFinished { errors } => {
                let mut next = (*self).clone();
                next.is_submitting = false;
                next.errors = errors;
                Rc::new(next)
            }
            FormAction::SetError { name, error } => {
                if self.errors.get(&name) == Some(&error) {
                    return self;
                }
                let mut next = (*self).clone();
                next.errors.insert(name, error);
                Rc::new(next)
            }
            FormAction::Reset(state) => Rc::new(state),
        }
    }
}
