use std::collections::BTreeSet;

use validator::Validate;

use super::domain::{DonorRegistration, FieldErrors, OrganPreference, RegistrationForm};

/// Check every field rule and build the submission the collaborator receives.
///
/// All fields are checked so the donor sees every problem at once.
pub fn validate(form: &RegistrationForm) -> Result<DonorRegistration, FieldErrors> {
    form.validate().map_err(FieldErrors::from)?;

    let organ_preferences: BTreeSet<OrganPreference> = form
        .organ_preferences
        .iter()
        .filter_map(|raw| raw.parse().ok())
        .collect();

    let medical_history = form
        .medical_history
        .as_deref()
        .map(str::trim)
        .filter(|history| !history.is_empty())
        .map(str::to_string);

    Ok(DonorRegistration {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        email: form.email.clone(),
        date_of_birth: form.date_of_birth.clone(),
        phone: form.phone.clone(),
        address: form.address.clone(),
        city: form.city.clone(),
        state: form.state.clone(),
        zip_code: form.zip_code.clone(),
        emergency_contact_name: form.emergency_contact_name.clone(),
        emergency_contact_phone: form.emergency_contact_phone.clone(),
        organ_preferences,
        medical_history,
        consent: form.consent,
    })
}
