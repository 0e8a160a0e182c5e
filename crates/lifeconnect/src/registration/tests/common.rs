use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::outreach::{
    ApiError, Event, Operation, OutreachApi, RegistrationConfirmation, Resource, SupportAck,
    SupportMessage,
};
use crate::registration::{validate, DonorRegistration, RegistrationForm};

pub(crate) fn valid_form() -> RegistrationForm {
    RegistrationForm {
        first_name: "Ada".to_string(),
        last_name: "Okafor".to_string(),
        email: "ada.okafor@example.com".to_string(),
        date_of_birth: "1988-04-12".to_string(),
        phone: "5155550142".to_string(),
        address: "1200 Grand Avenue".to_string(),
        city: "Des Moines".to_string(),
        state: "IA".to_string(),
        zip_code: "50309".to_string(),
        emergency_contact_name: "Chidi Okafor".to_string(),
        emergency_contact_phone: "5155550199".to_string(),
        organ_preferences: vec!["heart".to_string()],
        medical_history: None,
        consent: true,
    }
}

pub(crate) fn valid_registration() -> DonorRegistration {
    validate(&valid_form()).expect("fixture form is valid")
}

/// Collaborator double that records every registration and can be told to fail.
#[derive(Default)]
pub(crate) struct RecordingApi {
    fail_with_status: Option<u16>,
    calls: AtomicUsize,
    received: Mutex<Vec<DonorRegistration>>,
}

impl RecordingApi {
    pub(crate) fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn received(&self) -> Vec<DonorRegistration> {
        self.received.lock().expect("received mutex").clone()
    }
}

#[async_trait]
impl OutreachApi for RecordingApi {
    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        Ok(Vec::new())
    }

    async fn fetch_resources(&self) -> Result<Vec<Resource>, ApiError> {
        Ok(Vec::new())
    }

    async fn register_donor(
        &self,
        registration: &DonorRegistration,
    ) -> Result<RegistrationConfirmation, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received
            .lock()
            .expect("received mutex")
            .push(registration.clone());
        match self.fail_with_status {
            Some(status) => Err(ApiError::Status {
                operation: Operation::Register,
                status,
            }),
            None => Ok(RegistrationConfirmation {
                registration_id: Some("reg-test".to_string()),
                message: None,
            }),
        }
    }

    async fn send_support_message(
        &self,
        _message: &SupportMessage,
    ) -> Result<SupportAck, ApiError> {
        Ok(SupportAck::default())
    }
}
