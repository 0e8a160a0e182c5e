use std::fmt::Write as _;

use super::content::SUPPORT_SERVICES;
use super::html::{escape_html, text_area, text_field};
use super::layout::{render_page, Page};
use crate::outreach::{Resource, SupportAck};
use crate::registration::FieldErrors;
use crate::support::SupportForm;

pub const RESOURCES_UNAVAILABLE: &str =
    "Resources are unavailable right now. Please check back soon.";
pub const SUPPORT_FAILED_NOTICE: &str = "Failed to send message. Please try again.";

/// State of the "Get in Touch" form on one rendering of the support page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactState {
    Editing {
        form: SupportForm,
        errors: FieldErrors,
        notice: Option<String>,
    },
    Sent(SupportAck),
}

impl Default for ContactState {
    fn default() -> Self {
        ContactState::Editing {
            form: SupportForm::default(),
            errors: FieldErrors::new(),
            notice: None,
        }
    }
}

/// Render the support page. `None` resources means the data layer failed.
pub fn render(resources: Option<&[Resource]>, contact: &ContactState) -> String {
    let mut body = String::new();

    body.push_str("<header>\n<h1>Support Services</h1>\n<p>We&#39;re here to support donors, recipients, and their families throughout their journey. Connect with our support services and community.</p>\n</header>\n");

    body.push_str("<section class=\"services\">\n");
    for service in &SUPPORT_SERVICES {
        writeln!(
            body,
            "<div class=\"card\"><h3>{}</h3><p>{}</p><a class=\"button secondary\" href=\"{}\">{}</a></div>",
            service.title, service.description, service.action_url, service.action_text
        )
        .expect("write support service");
    }
    body.push_str("</section>\n");

    body.push_str("<section class=\"resources\">\n<h2>Helpful Resources</h2>\n");
    match resources {
        Some(resources) => {
            for resource in resources {
                writeln!(
                    body,
                    "<a class=\"card\" href=\"{}\" data-category=\"{}\"><h3>{}</h3><p>{}</p></a>",
                    escape_html(&resource.url),
                    escape_html(&resource.category),
                    escape_html(&resource.title),
                    escape_html(&resource.description)
                )
                .expect("write resource");
            }
        }
        None => {
            writeln!(body, "<p class=\"notice-error\">{RESOURCES_UNAVAILABLE}</p>")
                .expect("write unavailable notice");
        }
    }
    body.push_str("</section>\n");

    render_contact(&mut body, contact);

    render_page(Page::Support, &body)
}

fn render_contact(body: &mut String, contact: &ContactState) {
    body.push_str("<section class=\"contact\" id=\"contact\">\n<h2>Get in Touch</h2>\n");
    match contact {
        ContactState::Sent(ack) => {
            let message = ack
                .message
                .as_deref()
                .unwrap_or("Thanks for reaching out. Our team will reply soon.");
            writeln!(
                body,
                "<div class=\"notice-success\"><p>{}</p></div>",
                escape_html(message)
            )
            .expect("write support ack");
        }
        ContactState::Editing {
            form,
            errors,
            notice,
        } => {
            if let Some(notice) = notice {
                writeln!(body, "<p class=\"notice-error\">{}</p>", escape_html(notice))
                    .expect("write support notice");
            }
            body.push_str("<form method=\"post\" action=\"/support\">\n");
            text_field(body, "name", "Name", "text", &form.name, errors);
            text_field(body, "email", "Email", "email", &form.email, errors);
            text_area(body, "message", "Message", &form.message, errors);
            body.push_str("<button class=\"button\" type=\"submit\">Send Message</button>\n</form>\n");
        }
    }
    body.push_str("</section>");
}
