//! "Get in Touch" contact form on the support page.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use crate::outreach::{ApiError, OutreachApi, SupportAck, SupportMessage};
use crate::registration::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SupportForm {
    #[serde(default)]
    #[validate(length(min = 2, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 10, message = "Please enter a message of at least 10 characters"))]
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SupportError {
    #[error("support message is invalid: {0}")]
    Invalid(FieldErrors),
    #[error("Failed to send message")]
    Failed(#[source] ApiError),
}

pub fn validate_message(form: &SupportForm) -> Result<SupportMessage, FieldErrors> {
    form.validate().map_err(FieldErrors::from)?;
    Ok(SupportMessage {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        message: form.message.trim().to_string(),
    })
}

/// Validate then hand the message to the collaborator once.
pub async fn send_support_message(
    form: &SupportForm,
    api: &dyn OutreachApi,
) -> Result<SupportAck, SupportError> {
    let message = validate_message(form).map_err(SupportError::Invalid)?;
    match api.send_support_message(&message).await {
        Ok(ack) => {
            info!(ticket = ack.ticket_id.as_deref().unwrap_or("-"), "support message sent");
            Ok(ack)
        }
        Err(err) => {
            warn!(error = %err, "support message failed");
            Err(SupportError::Failed(err))
        }
    }
}
