//! Donor registration: raw form input, field rules, and the submission lifecycle.

pub mod controller;
pub mod domain;
pub mod validation;

#[cfg(test)]
pub(crate) mod tests;

pub use controller::{
    RegistrationController, SubmissionState, SubmitError, REGISTRATION_FAILED_NOTICE,
};
pub use domain::{DonorRegistration, FieldErrors, OrganPreference, RegistrationForm, UnknownOrgan};
pub use validation::validate;
