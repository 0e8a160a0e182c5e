use std::fmt::Write as _;

use super::content::{SITE_DESCRIPTION, SITE_NAME, SITE_TITLE};
use super::html::escape_html;

/// Every page the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Register,
    Education,
    Support,
    Events,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Register,
        Page::Education,
        Page::Support,
        Page::Events,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Register => "/register",
            Page::Education => "/education",
            Page::Support => "/support",
            Page::Events => "/events",
        }
    }

    pub const fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Register => "Register",
            Page::Education => "Learn",
            Page::Support => "Support",
            Page::Events => "Events",
        }
    }

    /// File name used when the site is exported as static HTML.
    pub const fn file_name(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Register => "register.html",
            Page::Education => "education.html",
            Page::Support => "support.html",
            Page::Events => "events.html",
        }
    }
}

const STYLESHEET: &str = "body{font-family:system-ui,sans-serif;margin:0;color:#111827}\
nav,main,footer{max-width:80rem;margin:0 auto;padding:1rem 2rem}\
nav a{margin-right:1.5rem;color:#111827;text-decoration:none}nav a.active{color:#2563eb}\
.brand{font-size:1.5rem;font-weight:700;color:#2563eb;margin-right:2rem}\
.card{border:1px solid #e5e7eb;border-radius:.5rem;padding:1.5rem;margin:1rem 0}\
.button{display:inline-block;padding:.75rem 1.5rem;border-radius:.375rem;background:#2563eb;color:#fff;text-decoration:none;border:0}\
.button[disabled]{opacity:.5;cursor:not-allowed}\
.field{margin:1rem 0}.field label{display:block;font-weight:500}\
.field-error,.notice-error{color:#dc2626}.notice-success{background:#f0fdf4;color:#166534;padding:1rem}\
footer{background:#f9fafb}";

/// Wrap a page body in the shared head, navigation, and footer.
pub fn render_page(active: Page, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(html, "<title>{}</title>", escape_html(SITE_TITLE)).expect("write title");
    writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape_html(SITE_DESCRIPTION)
    )
    .expect("write description");
    writeln!(html, "<style>{STYLESHEET}</style>\n</head>\n<body>").expect("write style");

    render_navigation(&mut html, active);
    writeln!(html, "<main>\n{body}\n</main>").expect("write main");
    render_footer(&mut html);

    html.push_str("</body>\n</html>\n");
    html
}

fn render_navigation(html: &mut String, active: Page) {
    writeln!(html, "<nav>\n<span class=\"brand\">{SITE_NAME}</span>").expect("write brand");
    for page in Page::ALL {
        let class = if page == active { " class=\"active\"" } else { "" };
        writeln!(
            html,
            "<a href=\"{}\"{class}>{}</a>",
            page.path(),
            page.nav_label()
        )
        .expect("write nav link");
    }
    html.push_str("</nav>\n");
}

fn render_footer(html: &mut String) {
    html.push_str("<footer>\n");
    html.push_str("<section><h3>About</h3><ul><li><a href=\"#\">Our Mission</a></li><li><a href=\"/support\">Contact Us</a></li></ul></section>\n");
    html.push_str("<section><h3>Resources</h3><ul><li><a href=\"/education\">FAQs</a></li><li><a href=\"/support\">Support</a></li></ul></section>\n");
    html.push_str("</footer>\n");
}
