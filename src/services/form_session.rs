use tracing::{debug, info, warn};

use crate::models::common::SubmissionState;
use crate::models::form::{SurveyDraft, SurveyField};
use crate::services::publisher::SubmissionPublisher;
use crate::validation::{email_has_minimal_shape, live_email_error};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("The form has already been submitted")]
    AlreadySubmitted,

    #[error("'{value}' is not an option of {field}")]
    UnknownChoice { field: SurveyField, value: String },
}

/// One respondent's pass through the survey: the draft, the inline email
/// error flag and the editing/submitted state.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    draft: SurveyDraft,
    email_error: bool,
    state: SubmissionState,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &SurveyDraft {
        &self.draft
    }

    pub fn email_error(&self) -> bool {
        self.email_error
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Replace one field of the draft. Editing the email re-runs the live check.
    pub fn update_field(
        &mut self,
        field: SurveyField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.ensure_editing()?;

        let value = value.into();
        debug!("Updating field {}", field);

        if field == SurveyField::Email {
            self.email_error = live_email_error(&value);
        }

        self.draft.set(field, value);
        Ok(())
    }

    /// Pick an answer for a single-select question, replacing any earlier pick.
    /// Text fields have no option list and are updated as-is.
    pub fn select_choice(&mut self, field: SurveyField, value: &str) -> Result<(), FormError> {
        self.ensure_editing()?;

        if let Some(options) = field.options() {
            if !options.iter().any(|option| option.value == value) {
                return Err(FormError::UnknownChoice {
                    field,
                    value: value.to_string(),
                });
            }
        }

        self.update_field(field, value)
    }

    /// Run the submission-time email check and, when it passes, hand the draft
    /// to `publisher` and close the session.
    pub fn submit(&mut self, publisher: &dyn SubmissionPublisher) -> Result<(), FormError> {
        self.ensure_editing()?;

        if !email_has_minimal_shape(&self.draft.email) {
            self.email_error = true;
            warn!("Rejected submission with invalid email");
            return Err(FormError::InvalidEmail);
        }

        self.email_error = false;
        publisher.publish(&self.draft);
        self.state = SubmissionState::Submitted;

        info!("Form submitted for {}", self.draft.email.trim());
        Ok(())
    }

    fn ensure_editing(&self) -> Result<(), FormError> {
        match self.state {
            SubmissionState::Editing => Ok(()),
            SubmissionState::Submitted => Err(FormError::AlreadySubmitted),
        }
    }
}
