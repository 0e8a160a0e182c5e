use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::domain::{Event, RegistrationConfirmation, Resource, SupportAck, SupportMessage};
use super::http::HttpOutreachApi;
use super::mock::MockOutreachApi;
use crate::config::{DataConfig, DataMode};
use crate::registration::DonorRegistration;

/// Data access for list pages and form submissions.
///
/// Implementations are picked once at construction; callers never branch on the mode.
#[async_trait]
pub trait OutreachApi: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError>;
    async fn fetch_resources(&self) -> Result<Vec<Resource>, ApiError>;
    async fn register_donor(
        &self,
        registration: &DonorRegistration,
    ) -> Result<RegistrationConfirmation, ApiError>;
    async fn send_support_message(&self, message: &SupportMessage)
        -> Result<SupportAck, ApiError>;
}

/// Operation names used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchEvents,
    FetchResources,
    Register,
    SendSupportMessage,
}

impl Operation {
    pub const fn label(self) -> &'static str {
        match self {
            Operation::FetchEvents => "fetch events",
            Operation::FetchResources => "fetch resources",
            Operation::Register => "register donor",
            Operation::SendSupportMessage => "send support message",
        }
    }
}

/// Collaborator failure. Every variant reads as a generic "request failed" to the donor.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{} request failed with status {status}", .operation.label())]
    Status { operation: Operation, status: u16 },
    #[error("{} request failed: {source}", .operation.label())]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("{} request failed: {reason}", .operation.label())]
    Unavailable {
        operation: Operation,
        reason: String,
    },
    #[error("http client unavailable: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ApiError::Status { operation, .. }
            | ApiError::Transport { operation, .. }
            | ApiError::Unavailable { operation, .. } => Some(*operation),
            ApiError::Client(_) => None,
        }
    }
}

/// Build the configured strategy.
pub fn outreach_from_config(config: &DataConfig) -> Result<Arc<dyn OutreachApi>, ApiError> {
    debug!(mode = config.mode.label(), base_url = %config.api_base_url, "selecting outreach api");
    match config.mode {
        DataMode::Mock => Ok(Arc::new(MockOutreachApi::default())),
        DataMode::Live => Ok(Arc::new(HttpOutreachApi::new(&config.api_base_url)?)),
    }
}
