//! Data access for event/resource lists and form submissions.

pub mod api;
pub mod domain;
pub mod http;
pub mod mock;
pub mod router;
pub mod sample;

pub use api::{outreach_from_config, ApiError, Operation, OutreachApi};
pub use domain::{Event, RegistrationConfirmation, Resource, SupportAck, SupportMessage};
pub use http::HttpOutreachApi;
pub use mock::MockOutreachApi;
pub use router::outreach_router;
