use std::fmt::Write as _;

use super::html::{escape_html, field_error, text_area, text_field};
use super::layout::{render_page, Page};
use crate::outreach::RegistrationConfirmation;
use crate::registration::{
    FieldErrors, OrganPreference, RegistrationController, RegistrationForm, SubmissionState,
};

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Thank you for registering as an organ donor. Your decision could save up to eight lives.";

/// Render the register page for whatever state the controller is in.
pub fn render(controller: &RegistrationController) -> String {
    let mut body = String::new();

    body.push_str("<header>\n<h1>Register as an Organ Donor</h1>\n<p>Your decision to become an organ donor can save up to eight lives and enhance many more.</p>\n</header>\n");

    match controller.state() {
        SubmissionState::Success(confirmation) => render_success(&mut body, confirmation),
        SubmissionState::Idle | SubmissionState::Submitting => render_form(
            &mut body,
            controller.form(),
            controller.errors(),
            controller.notice(),
            controller.is_editable(),
        ),
    }

    render_page(Page::Register, &body)
}

fn render_success(body: &mut String, confirmation: &RegistrationConfirmation) {
    body.push_str("<section class=\"notice-success\">\n<h2>Registration Successful!</h2>\n");
    let message = confirmation
        .message
        .as_deref()
        .unwrap_or(REGISTRATION_SUCCESS_MESSAGE);
    writeln!(body, "<p>{}</p>", escape_html(message)).expect("write confirmation");
    if let Some(id) = &confirmation.registration_id {
        writeln!(
            body,
            "<p>Registration ID: <strong>{}</strong></p>",
            escape_html(id)
        )
        .expect("write registration id");
    }
    body.push_str("<a class=\"button\" href=\"/\">Return Home</a>\n</section>");
}

fn render_form(
    body: &mut String,
    form: &RegistrationForm,
    errors: &FieldErrors,
    notice: Option<&str>,
    editable: bool,
) {
    if let Some(notice) = notice {
        writeln!(body, "<p class=\"notice-error\">{}</p>", escape_html(notice))
            .expect("write notice");
    }

    body.push_str("<form method=\"post\" action=\"/register\">\n");

    body.push_str("<fieldset>\n<legend>Personal Information</legend>\n");
    text_field(body, "first_name", "First Name", "text", &form.first_name, errors);
    text_field(body, "last_name", "Last Name", "text", &form.last_name, errors);
    text_field(body, "email", "Email", "email", &form.email, errors);
    text_field(body, "phone", "Phone", "tel", &form.phone, errors);
    text_field(
        body,
        "date_of_birth",
        "Date of Birth",
        "date",
        &form.date_of_birth,
        errors,
    );
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset>\n<legend>Address</legend>\n");
    text_field(body, "address", "Street Address", "text", &form.address, errors);
    text_field(body, "city", "City", "text", &form.city, errors);
    text_field(body, "state", "State", "text", &form.state, errors);
    text_field(body, "zip_code", "ZIP Code", "text", &form.zip_code, errors);
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset>\n<legend>Emergency Contact</legend>\n");
    text_field(
        body,
        "emergency_contact_name",
        "Contact Name",
        "text",
        &form.emergency_contact_name,
        errors,
    );
    text_field(
        body,
        "emergency_contact_phone",
        "Contact Phone",
        "tel",
        &form.emergency_contact_phone,
        errors,
    );
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset>\n<legend>Organ Preferences</legend>\n");
    for organ in OrganPreference::ALL {
        let checked = if form.has_organ(organ) { " checked" } else { "" };
        writeln!(
            body,
            "<label><input type=\"checkbox\" name=\"organ_preferences\" value=\"{}\"{checked}> {}</label>",
            organ.value(),
            organ.label()
        )
        .expect("write organ checkbox");
    }
    field_error(body, "organ_preferences", errors);
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset>\n<legend>Medical History</legend>\n");
    text_area(
        body,
        "medical_history",
        "Relevant medical history (optional)",
        form.medical_history.as_deref().unwrap_or_default(),
        errors,
    );
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset>\n<legend>Consent</legend>\n");
    let consent = if form.consent { " checked" } else { "" };
    writeln!(
        body,
        "<label><input type=\"checkbox\" name=\"consent\" value=\"on\"{consent}> I consent to be an organ donor and understand that my decision will be recorded in the donor registry.</label>"
    )
    .expect("write consent");
    field_error(body, "consent", errors);
    body.push_str("</fieldset>\n");

    if editable {
        body.push_str("<button class=\"button\" type=\"submit\">Complete Registration</button>\n");
    } else {
        body.push_str("<button class=\"button\" type=\"submit\" disabled>Registering...</button>\n");
    }
    body.push_str("</form>");
}
