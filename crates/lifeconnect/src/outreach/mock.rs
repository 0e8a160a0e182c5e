use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::info;

use super::api::{ApiError, Operation, OutreachApi};
use super::domain::{Event, RegistrationConfirmation, Resource, SupportAck, SupportMessage};
use super::sample::{sample_events, sample_resources};
use crate::registration::DonorRegistration;

/// Serves the embedded sample lists and accepts submissions in memory.
#[derive(Debug, Clone)]
pub struct MockOutreachApi {
    events: Arc<Vec<Event>>,
    resources: Arc<Vec<Resource>>,
    registrations: Arc<Mutex<Vec<DonorRegistration>>>,
    messages: Arc<Mutex<Vec<SupportMessage>>>,
    sequence: Arc<AtomicU64>,
}

impl Default for MockOutreachApi {
    fn default() -> Self {
        Self::with_records(sample_events(), sample_resources())
    }
}

impl MockOutreachApi {
    pub fn with_records(events: Vec<Event>, resources: Vec<Resource>) -> Self {
        Self {
            events: Arc::new(events),
            resources: Arc::new(resources),
            registrations: Arc::new(Mutex::new(Vec::new())),
            messages: Arc::new(Mutex::new(Vec::new())),
            sequence: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Registrations accepted so far, oldest first.
    pub fn registrations(&self) -> Vec<DonorRegistration> {
        self.registrations
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn support_messages(&self) -> Vec<SupportMessage> {
        self.messages
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn next_id(&self, prefix: &str) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{id:06}")
    }
}

#[async_trait]
impl OutreachApi for MockOutreachApi {
    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        Ok(self.events.as_ref().clone())
    }

    async fn fetch_resources(&self) -> Result<Vec<Resource>, ApiError> {
        Ok(self.resources.as_ref().clone())
    }

    async fn register_donor(
        &self,
        registration: &DonorRegistration,
    ) -> Result<RegistrationConfirmation, ApiError> {
        let mut guard = self
            .registrations
            .lock()
            .map_err(|_| ApiError::Unavailable {
                operation: Operation::Register,
                reason: "registration store poisoned".to_string(),
            })?;
        guard.push(registration.clone());
        drop(guard);

        let registration_id = self.next_id("reg");
        info!(%registration_id, organs = registration.organ_preferences.len(), "mock registration accepted");
        Ok(RegistrationConfirmation {
            registration_id: Some(registration_id),
            message: Some(format!(
                "Thank you for registering as an organ donor, {}. You will receive a confirmation email shortly.",
                registration.full_name()
            )),
        })
    }

    async fn send_support_message(
        &self,
        message: &SupportMessage,
    ) -> Result<SupportAck, ApiError> {
        let mut guard = self.messages.lock().map_err(|_| ApiError::Unavailable {
            operation: Operation::SendSupportMessage,
            reason: "message store poisoned".to_string(),
        })?;
        guard.push(message.clone());
        drop(guard);

        let ticket_id = self.next_id("msg");
        info!(%ticket_id, "mock support message accepted");
        Ok(SupportAck {
            ticket_id: Some(ticket_id),
            message: Some("Thanks for reaching out. Our team will reply soon.".to_string()),
        })
    }
}
