use tracing::{info, warn};

use super::domain::{DonorRegistration, FieldErrors, RegistrationForm};
use super::validation::validate;
use crate::outreach::{ApiError, OutreachApi, RegistrationConfirmation};

/// Shown to the donor whenever the collaborator call fails, whatever the cause.
pub const REGISTRATION_FAILED_NOTICE: &str = "Registration failed. Please try again.";

/// Lifecycle of one registration page instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success(RegistrationConfirmation),
}

impl SubmissionState {
    pub const fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success(_) => "success",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("registration is invalid: {0}")]
    Invalid(FieldErrors),
    #[error("a registration is already being submitted")]
    InFlight,
    #[error("registration already completed")]
    Completed,
    #[error("no registration is being submitted")]
    NotSubmitting,
    #[error("Registration failed. Please try again.")]
    Failed(#[source] ApiError),
}

/// Drives the registration form: Idle → Submitting → Success, or back to Idle on failure.
///
/// The form keeps whatever the donor entered so it can be re-rendered after any failure.
#[derive(Debug, Clone)]
pub struct RegistrationController {
    state: SubmissionState,
    form: RegistrationForm,
    errors: FieldErrors,
    notice: Option<String>,
}

impl Default for RegistrationController {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationController {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            form: RegistrationForm::default(),
            errors: FieldErrors::new(),
            notice: None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_editable(&self) -> bool {
        matches!(self.state, SubmissionState::Idle)
    }

    /// Validate the form and, if it passes, enter Submitting.
    ///
    /// Invalid input leaves the state at Idle with the field errors recorded.
    pub fn begin(&mut self, form: RegistrationForm) -> Result<DonorRegistration, SubmitError> {
        match self.state {
            SubmissionState::Idle => {}
            SubmissionState::Submitting => return Err(SubmitError::InFlight),
            SubmissionState::Success(_) => return Err(SubmitError::Completed),
        }

        self.form = form;
        self.notice = None;
        match validate(&self.form) {
            Ok(registration) => {
                self.errors.clear();
                self.state = SubmissionState::Submitting;
                Ok(registration)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Apply the collaborator's answer to an in-flight submission.
    pub fn finish(
        &mut self,
        outcome: Result<RegistrationConfirmation, ApiError>,
    ) -> Result<RegistrationConfirmation, SubmitError> {
        if self.state != SubmissionState::Submitting {
            return Err(SubmitError::NotSubmitting);
        }

        match outcome {
            Ok(confirmation) => {
                info!(
                    registration_id = confirmation.registration_id.as_deref().unwrap_or("-"),
                    "donor registration completed"
                );
                self.state = SubmissionState::Success(confirmation.clone());
                Ok(confirmation)
            }
            Err(err) => {
                warn!(error = %err, "donor registration failed");
                self.state = SubmissionState::Idle;
                self.notice = Some(REGISTRATION_FAILED_NOTICE.to_string());
                Err(SubmitError::Failed(err))
            }
        }
    }

    /// Validate, then call the collaborator exactly once. No retries.
    pub async fn submit(
        &mut self,
        form: RegistrationForm,
        api: &dyn OutreachApi,
    ) -> Result<RegistrationConfirmation, SubmitError> {
        let registration = self.begin(form)?;
        let outcome = api.register_donor(&registration).await;
        self.finish(outcome)
    }
}
