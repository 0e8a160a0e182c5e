use std::fmt::Write as _;

use super::content::{EDUCATION_TOPICS, FAQS};
use super::html::escape_html;
use super::layout::{render_page, Page};

pub fn render() -> String {
    let mut body = String::new();

    body.push_str("<header>\n<h1>Learn About Organ Donation</h1>\n<p>Understanding organ donation is the first step towards making an informed decision. Explore our educational resources to learn more.</p>\n</header>\n");

    body.push_str("<section class=\"topics\">\n");
    for card in &EDUCATION_TOPICS {
        writeln!(
            body,
            "<div class=\"card\"><h3>{}</h3><p>{}</p><ul>",
            card.title, card.description
        )
        .expect("write topic card");
        for topic in card.topics {
            writeln!(body, "<li>{}</li>", escape_html(topic)).expect("write topic");
        }
        body.push_str("</ul></div>\n");
    }
    body.push_str("</section>\n");

    body.push_str("<section class=\"faq\">\n<h2>Frequently Asked Questions</h2>\n");
    for faq in &FAQS {
        writeln!(
            body,
            "<div class=\"faq-item\"><h3>{}</h3><p>{}</p></div>",
            escape_html(faq.question),
            escape_html(faq.answer)
        )
        .expect("write faq");
    }
    body.push_str("</section>\n");

    body.push_str("<section class=\"cta\">\n<h2>Ready to Make a Difference?</h2>\n<p>Join thousands of others who have already registered as organ donors.</p>\n<a class=\"button\" href=\"/register\">Register Now</a>\n</section>");

    render_page(Page::Education, &body)
}
