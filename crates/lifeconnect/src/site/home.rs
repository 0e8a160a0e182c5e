use std::fmt::Write as _;

use super::content::{HOME_FEATURES, IMPACT_STATISTICS};
use super::layout::{render_page, Page};

pub fn render() -> String {
    let mut body = String::new();

    body.push_str("<section class=\"hero\">\n<h1><span>Save Lives Through</span> <span class=\"accent\">Organ Donation</span></h1>\n");
    body.push_str("<p>Join thousands of others in making a difference. Register as an organ donor today and help save lives in your community.</p>\n");
    body.push_str("<p><a class=\"button\" href=\"/register\">Register Now</a> <a class=\"button secondary\" href=\"/education\">Learn More</a></p>\n</section>\n");

    body.push_str("<section class=\"features\">\n<h2>Our Impact</h2>\n<p>Making a difference together</p>\n<dl>\n");
    for feature in &HOME_FEATURES {
        writeln!(
            body,
            "<div class=\"card\"><dt>{}</dt><dd>{}</dd></div>",
            feature.title, feature.description
        )
        .expect("write feature");
    }
    body.push_str("</dl>\n</section>\n");

    body.push_str("<section class=\"statistics\">\n<h2>Making a Real Impact</h2>\n<dl>\n");
    for statistic in &IMPACT_STATISTICS {
        writeln!(
            body,
            "<div><dd>{}</dd><dt>{}</dt></div>",
            statistic.number, statistic.label
        )
        .expect("write statistic");
    }
    body.push_str("</dl>\n</section>");

    render_page(Page::Home, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_links_to_registration_and_lists_impact() {
        let html = render();
        assert!(html.contains("Save Lives Through"));
        assert!(html.contains("href=\"/register\">Register Now"));
        assert!(html.contains("Support Network"));
        assert!(html.contains("<dd>100K+</dd><dt>Registered Donors</dt>"));
    }
}
