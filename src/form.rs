//! Client-side controller of the contact form.
//!
//! A [`ContactForm`] owns the field values and the status of at most one
//! in-flight submission. The status only moves along
//! `Idle -> Submitting -> Succeeded | Failed -> Idle`.

mod fields;
mod status;

pub use fields::{ContactFormFields, FieldError, FormField};
pub use status::{StatusNotice, SubmissionOutcome, SubmissionStatus};

use crate::{
    contact_client::{ContactApiClient, ContactApiError},
    domain::ContactSubmissionBody,
};

#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactFormFields,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn fields(&self) -> &ContactFormFields {
        &self.fields
    }

    /// Fields stay editable whatever the status.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        self.fields.validate()
    }

    /// Move from `Idle` to `Submitting` and hand out the body to send.
    ///
    /// Returns `None`, leaving the form untouched, in any other state.
    pub fn begin_submit(&mut self) -> Option<ContactSubmissionBody> {
        if self.status != SubmissionStatus::Idle {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some(self.fields.to_body())
    }

    /// Settle the in-flight submission. Ignored unless `Submitting`.
    pub fn resolve(&mut self, outcome: SubmissionOutcome) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        self.status = match outcome {
            SubmissionOutcome::Delivered => {
                self.fields.clear();
                SubmissionStatus::Succeeded
            }
            // Fields are kept so the sender can retry without re-typing
            SubmissionOutcome::Failed => SubmissionStatus::Failed,
        };
    }

    /// Dismiss the status notice of a finished submission.
    pub fn acknowledge(&mut self) {
        if self.status.is_terminal() {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn notice(&self) -> Option<StatusNotice> {
        self.status.notice()
    }

    /// Validate, send and settle one submission.
    ///
    /// When the form is not `Idle` nothing is sent and the current status is
    /// returned. Invalid fields keep the form `Idle` and are reported back.
    #[tracing::instrument(name = "Submitting the contact form", skip_all)]
    pub async fn submit(
        &mut self,
        client: &ContactApiClient,
    ) -> Result<SubmissionStatus, FormError> {
        if self.status != SubmissionStatus::Idle {
            tracing::debug!(status = ?self.status, "A submission is already in progress");
            return Ok(self.status);
        }
        self.validate().map_err(FormError::Invalid)?;

        let Some(body) = self.begin_submit() else {
            return Ok(self.status);
        };
        let outcome = match client.send(&body).await {
            Ok(()) => SubmissionOutcome::Delivered,
            Err(e) => {
                log_failed_submission(&e);
                SubmissionOutcome::Failed
            }
        };
        self.resolve(outcome);

        Ok(self.status)
    }
}

fn log_failed_submission(e: &ContactApiError) {
    tracing::warn!(
        error.cause_chain = ?e,
        error.message = %e,
        "The contact form could not be delivered"
    );
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("The contact form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),
}
