//! Minimal form state machine shared by the form template.

use std::{collections::BTreeMap, fmt::Display};

/// Validation messages keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<T> {
    pub values: T,
    pub errors: FieldErrors,
    pub status: FormStatus,
}

impl<T: Validate + Clone> FormState<T> {
    pub fn new(values: T) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
            status: FormStatus::Idle,
        }
    }

    /// Validates and enters `Submitting`. Returns the values to submit, or
    /// `None` when validation failed or a submit is already running.
    pub fn begin_submit(&mut self) -> Option<T> {
        if self.is_submitting() {
            return None;
        }
        match self.values.validate() {
            Ok(()) => {
                self.errors.clear();
                self.status = FormStatus::Submitting;
                Some(self.values.clone())
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn finish<E: Display>(&mut self, result: Result<(), E>) {
        self.status = match result {
            Ok(()) => FormStatus::Idle,
            Err(err) => FormStatus::Failed(err.to_string()),
        };
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    pub fn submit_error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}
