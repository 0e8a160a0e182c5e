use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Organs a donor can pledge. The set is closed; anything else is rejected during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganPreference {
    Heart,
    Lungs,
    Liver,
    Kidneys,
    Pancreas,
    Corneas,
    Tissue,
}

impl OrganPreference {
    pub const ALL: [OrganPreference; 7] = [
        OrganPreference::Heart,
        OrganPreference::Lungs,
        OrganPreference::Liver,
        OrganPreference::Kidneys,
        OrganPreference::Pancreas,
        OrganPreference::Corneas,
        OrganPreference::Tissue,
    ];

    /// Form value, also used on the wire.
    pub const fn value(self) -> &'static str {
        match self {
            OrganPreference::Heart => "heart",
            OrganPreference::Lungs => "lungs",
            OrganPreference::Liver => "liver",
            OrganPreference::Kidneys => "kidneys",
            OrganPreference::Pancreas => "pancreas",
            OrganPreference::Corneas => "corneas",
            OrganPreference::Tissue => "tissue",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            OrganPreference::Heart => "Heart",
            OrganPreference::Lungs => "Lungs",
            OrganPreference::Liver => "Liver",
            OrganPreference::Kidneys => "Kidneys",
            OrganPreference::Pancreas => "Pancreas",
            OrganPreference::Corneas => "Corneas",
            OrganPreference::Tissue => "Tissue",
        }
    }
}

impl fmt::Display for OrganPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown organ preference: {0}")]
pub struct UnknownOrgan(pub String);

impl FromStr for OrganPreference {
    type Err = UnknownOrgan;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        OrganPreference::ALL
            .into_iter()
            .find(|organ| organ.value() == normalized)
            .ok_or_else(|| UnknownOrgan(raw.to_string()))
    }
}

/// Raw registration input exactly as the donor entered it.
///
/// Field names double as the HTML input names and as the keys of [`FieldErrors`].
/// JSON bodies may also use the camelCase keys that [`DonorRegistration`] is sent with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegistrationForm {
    #[serde(default, alias = "firstName")]
    #[validate(length(min = 2, message = "First name is required"))]
    pub first_name: String,
    #[serde(default, alias = "lastName")]
    #[validate(length(min = 2, message = "Last name is required"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default, alias = "dateOfBirth")]
    #[validate(length(min = 1, message = "Date of birth is required"))]
    pub date_of_birth: String,
    #[serde(default)]
    #[validate(length(min = 10, message = "Valid phone number is required"))]
    pub phone: String,
    #[serde(default)]
    #[validate(length(min = 5, message = "Address is required"))]
    pub address: String,
    #[serde(default)]
    #[validate(length(min = 2, message = "City is required"))]
    pub city: String,
    #[serde(default)]
    #[validate(length(min = 2, message = "State is required"))]
    pub state: String,
    #[serde(default, alias = "zipCode")]
    #[validate(length(min = 5, message = "Valid ZIP code is required"))]
    pub zip_code: String,
    #[serde(default, alias = "emergencyContactName")]
    #[validate(length(min = 2, message = "Emergency contact name is required"))]
    pub emergency_contact_name: String,
    #[serde(default, alias = "emergencyContactPhone")]
    #[validate(length(min = 10, message = "Valid emergency contact phone is required"))]
    pub emergency_contact_phone: String,
    #[serde(default, alias = "organPreferences")]
    #[validate(custom(function = "known_organ_selection"))]
    pub organ_preferences: Vec<String>,
    #[serde(default, alias = "medicalHistory")]
    pub medical_history: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "consent_given"))]
    pub consent: bool,
}

impl RegistrationForm {
    /// Build a form from urlencoded pairs. Checkbox groups arrive as repeated keys.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = RegistrationForm::default();
        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "first_name" => form.first_name = value,
                "last_name" => form.last_name = value,
                "email" => form.email = value,
                "date_of_birth" => form.date_of_birth = value,
                "phone" => form.phone = value,
                "address" => form.address = value,
                "city" => form.city = value,
                "state" => form.state = value,
                "zip_code" => form.zip_code = value,
                "emergency_contact_name" => form.emergency_contact_name = value,
                "emergency_contact_phone" => form.emergency_contact_phone = value,
                "organ_preferences" => form.organ_preferences.push(value),
                "medical_history" => form.medical_history = Some(value),
                "consent" => form.consent = checkbox_checked(&value),
                _ => {}
            }
        }
        form
    }

    pub fn has_organ(&self, organ: OrganPreference) -> bool {
        self.organ_preferences
            .iter()
            .any(|raw| raw.parse::<OrganPreference>().ok() == Some(organ))
    }
}

fn checkbox_checked(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "yes" | "1"
    )
}

fn validation_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

fn known_organ_selection(selection: &[String]) -> Result<(), ValidationError> {
    if selection.is_empty() {
        return Err(validation_error(
            "organ_selection",
            "Please select at least one organ".to_string(),
        ));
    }
    match selection
        .iter()
        .find_map(|raw| raw.parse::<OrganPreference>().err())
    {
        Some(unknown) => Err(validation_error("organ_unknown", unknown.to_string())),
        None => Ok(()),
    }
}

fn consent_given(consent: &bool) -> Result<(), ValidationError> {
    if *consent {
        Ok(())
    } else {
        Err(validation_error(
            "consent",
            "You must consent to organ donation".to_string(),
        ))
    }
}

/// A registration that passed every field rule; this is what the collaborator receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub organ_preferences: BTreeSet<OrganPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    pub consent: bool,
}

impl DonorRegistration {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Field name to message, one entry per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, failures) in errors.field_errors() {
            let message = failures
                .iter()
                .find_map(|failure| failure.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{field} is invalid"));
            fields.insert(field.to_string(), message);
        }
        fields
    }
}
