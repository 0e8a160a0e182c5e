use super::common::*;
use crate::registration::{validate, OrganPreference, RegistrationForm};

const REQUIRED_TEXT_FIELDS: [&str; 11] = [
    "first_name",
    "last_name",
    "email",
    "date_of_birth",
    "phone",
    "address",
    "city",
    "state",
    "zip_code",
    "emergency_contact_name",
    "emergency_contact_phone",
];

fn clear_field(form: &mut RegistrationForm, field: &str) {
    let slot = match field {
        "first_name" => &mut form.first_name,
        "last_name" => &mut form.last_name,
        "email" => &mut form.email,
        "date_of_birth" => &mut form.date_of_birth,
        "phone" => &mut form.phone,
        "address" => &mut form.address,
        "city" => &mut form.city,
        "state" => &mut form.state,
        "zip_code" => &mut form.zip_code,
        "emergency_contact_name" => &mut form.emergency_contact_name,
        "emergency_contact_phone" => &mut form.emergency_contact_phone,
        other => panic!("unknown field {other}"),
    };
    slot.clear();
}

#[test]
fn fixture_form_passes_every_rule() {
    let registration = validate(&valid_form()).expect("valid form");
    assert_eq!(registration.full_name(), "Ada Okafor");
    assert!(registration
        .organ_preferences
        .contains(&OrganPreference::Heart));
    assert!(registration.consent);
}

#[test]
fn each_empty_required_field_is_named_in_the_errors() {
    for field in REQUIRED_TEXT_FIELDS {
        let mut form = valid_form();
        clear_field(&mut form, field);

        let errors = validate(&form).expect_err("empty field must fail");
        assert!(errors.contains(field), "missing error for {field}: {errors}");
        assert_eq!(errors.len(), 1, "only {field} should fail: {errors}");
    }
}

#[test]
fn empty_form_reports_every_problem_at_once() {
    let errors = validate(&RegistrationForm::default()).expect_err("empty form");

    for field in REQUIRED_TEXT_FIELDS {
        assert!(errors.contains(field), "missing error for {field}");
    }
    assert_eq!(
        errors.get("organ_preferences"),
        Some("Please select at least one organ")
    );
    assert_eq!(
        errors.get("consent"),
        Some("You must consent to organ donation")
    );
    assert!(!errors.contains("medical_history"));
    assert_eq!(errors.len(), REQUIRED_TEXT_FIELDS.len() + 2);
}

#[test]
fn email_shape_is_enforced() {
    let mut form = valid_form();
    form.email = "not-an-email".to_string();
    let errors = validate(&form).expect_err("bad email");
    assert_eq!(errors.get("email"), Some("Invalid email address"));

    form.email = "a@b.com".to_string();
    assert!(validate(&form).is_ok());
}

#[test]
fn minimum_lengths_match_the_published_rules() {
    let mut form = valid_form();
    form.first_name = "A".to_string();
    form.phone = "555-0142".to_string();
    form.zip_code = "5030".to_string();
    form.address = "1 Rd".to_string();

    let errors = validate(&form).expect_err("too short");
    assert_eq!(errors.get("first_name"), Some("First name is required"));
    assert_eq!(errors.get("phone"), Some("Valid phone number is required"));
    assert_eq!(errors.get("zip_code"), Some("Valid ZIP code is required"));
    assert_eq!(errors.get("address"), Some("Address is required"));
    assert_eq!(errors.len(), 4);
}

#[test]
fn at_least_one_organ_is_required() {
    let mut form = valid_form();
    form.organ_preferences.clear();
    let errors = validate(&form).expect_err("no organs");
    assert!(errors.contains("organ_preferences"));

    form.organ_preferences = vec!["heart".to_string()];
    assert!(validate(&form).is_ok());
}

#[test]
fn unknown_organs_are_rejected_not_dropped() {
    let mut form = valid_form();
    form.organ_preferences = vec!["heart".to_string(), "spleen".to_string()];

    let errors = validate(&form).expect_err("unknown organ");
    assert_eq!(
        errors.get("organ_preferences"),
        Some("Unknown organ preference: spleen")
    );
}

#[test]
fn duplicate_organs_collapse_into_a_set() {
    let mut form = valid_form();
    form.organ_preferences = vec![
        "kidneys".to_string(),
        "Heart".to_string(),
        "kidneys".to_string(),
    ];

    let registration = validate(&form).expect("valid");
    let organs: Vec<_> = registration.organ_preferences.into_iter().collect();
    assert_eq!(organs, vec![OrganPreference::Heart, OrganPreference::Kidneys]);
}

#[test]
fn consent_must_be_given_even_when_everything_else_is_valid() {
    let mut form = valid_form();
    form.consent = false;

    let errors = validate(&form).expect_err("no consent");
    assert_eq!(errors.len(), 1);
    assert!(errors.contains("consent"));
}

#[test]
fn blank_medical_history_is_treated_as_absent() {
    let mut form = valid_form();
    form.medical_history = Some("   ".to_string());
    assert_eq!(validate(&form).expect("valid").medical_history, None);

    form.medical_history = Some(" Type 1 diabetes ".to_string());
    assert_eq!(
        validate(&form).expect("valid").medical_history.as_deref(),
        Some("Type 1 diabetes")
    );
}

#[test]
fn urlencoded_pairs_build_the_form() {
    let form = RegistrationForm::from_pairs(vec![
        ("first_name", "Ada"),
        ("organ_preferences", "heart"),
        ("organ_preferences", "corneas"),
        ("consent", "on"),
        ("unexpected", "ignored"),
    ]);

    assert_eq!(form.first_name, "Ada");
    assert_eq!(form.organ_preferences, vec!["heart", "corneas"]);
    assert!(form.consent);
    assert!(form.has_organ(OrganPreference::Corneas));
    assert!(!form.has_organ(OrganPreference::Liver));
}

#[test]
fn registration_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(valid_registration()).expect("serializes");
    assert_eq!(value["firstName"], "Ada");
    assert_eq!(value["emergencyContactPhone"], "5155550199");
    assert_eq!(value["organPreferences"], serde_json::json!(["heart"]));
    assert!(value.get("medicalHistory").is_none());
}
