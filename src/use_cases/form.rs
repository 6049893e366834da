//! Per-form submission state. A form starts `Idle`, enters `Submitting` while a
//! request is in flight and refuses re-entrant submissions until the effect of
//! that request is applied. Failed attempts return the form to `Idle` with the
//! entered values kept, so the user can fix and resubmit.

use serde::Serialize;

use crate::domain::{AuthError, FormField, FormFields, UiEffect, ValidationErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Idle,
    Submitting,
    // The form handed off to another page.
    Completed,
}

#[derive(Debug)]
pub struct FormSession<F> {
    fields: F,
    errors: ValidationErrors,
    notice: Option<String>,
    phase: FormPhase,
}

impl<F> FormSession<F>
where
    F: FormFields,
{
    pub fn new(fields: F) -> Self {
        Self {
            fields,
            errors: ValidationErrors::new(),
            notice: None,
            phase: FormPhase::Idle,
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Updates one value and clears only that field's error. Values are frozen
    /// while a submission is in flight.
    pub fn edit(&mut self, field: FormField, value: String) -> Result<(), AuthError> {
        if self.phase == FormPhase::Submitting {
            return Err(AuthError::SubmissionInFlight);
        }
        if !self.fields.set(field, value) {
            return Err(AuthError::FieldNotOnForm);
        }
        self.errors.clear(field);
        Ok(())
    }

    /// Starts a submission with the given values, returning the payload to send.
    pub fn begin_submit(&mut self, fields: F) -> Result<F, AuthError> {
        if self.phase == FormPhase::Submitting {
            return Err(AuthError::SubmissionInFlight);
        }

        self.fields = fields;
        self.errors = ValidationErrors::new();
        self.notice = None;
        self.phase = FormPhase::Submitting;
        Ok(self.fields.clone())
    }

    /// Applies the effect of the submission that is in flight.
    pub fn finish(&mut self, effect: &UiEffect) {
        match effect {
            UiEffect::FieldErrors(errors) => {
                self.errors = errors.clone();
                self.phase = FormPhase::Idle;
            }
            UiEffect::Navigate(_) => {
                self.phase = FormPhase::Completed;
            }
            UiEffect::Rejected(message) | UiEffect::ServiceError(message) => {
                self.notice = Some(message.clone());
                self.phase = FormPhase::Idle;
            }
        }
    }

    /// Returns an in-flight submission to `Idle` when it ended without an effect.
    pub fn abort(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Idle;
        }
    }
}
