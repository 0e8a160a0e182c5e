use std::fmt::Write as _;

use super::html::escape_html;
use super::layout::{render_page, Page};
use crate::outreach::Event;

pub const EVENTS_UNAVAILABLE: &str = "Events are unavailable right now. Please check back soon.";

/// Render the events page. `None` means the data layer failed.
pub fn render(events: Option<&[Event]>) -> String {
    let mut body = String::new();

    body.push_str("<header>\n<h1>Upcoming Events</h1>\n<p>Join us at our upcoming events to learn more about organ donation, connect with our community, and help spread awareness.</p>\n</header>\n");

    match events {
        Some(events) => {
            let featured = events.iter().find(|event| event.is_featured);
            if let Some(event) = featured {
                render_featured(&mut body, event);
            }

            body.push_str("<section class=\"event-grid\">\n");
            for event in events
                .iter()
                .filter(|event| Some(event.id.as_str()) != featured.map(|f| f.id.as_str()))
            {
                render_card(&mut body, event);
            }
            body.push_str("</section>\n");
        }
        None => {
            writeln!(body, "<p class=\"notice-error\">{EVENTS_UNAVAILABLE}</p>")
                .expect("write unavailable notice");
        }
    }

    body.push_str("<section class=\"host\">\n<h2>Host an Event</h2>\n<p>Interested in organizing an awareness event in your community? We&#39;ll provide you with resources and support to make it successful.</p>\n<a class=\"button\" href=\"/support\">Host an Event</a>\n</section>");

    render_page(Page::Events, &body)
}

fn render_featured(body: &mut String, event: &Event) {
    writeln!(
        body,
        "<section class=\"featured card\" data-event=\"{}\">\n<span class=\"badge\">Featured Event</span>\n<h2>{}</h2>\n<p>{}</p>\n<ul>",
        escape_html(&event.id),
        escape_html(&event.title),
        escape_html(&event.description)
    )
    .expect("write featured event");
    writeln!(body, "<li>{}</li>", event.date_label()).expect("write date");
    if let Some(time) = &event.time {
        writeln!(body, "<li>{}</li>", escape_html(time)).expect("write time");
    }
    writeln!(body, "<li>{}</li>", escape_html(&event.location)).expect("write location");
    if let Some(capacity) = event.capacity {
        writeln!(body, "<li>Expected: {capacity}+ Attendees</li>").expect("write capacity");
    }
    body.push_str("</ul>\n<a class=\"button\" href=\"/register\">Register for Event</a>\n</section>\n");
}

fn render_card(body: &mut String, event: &Event) {
    writeln!(
        body,
        "<div class=\"card\" data-event=\"{}\"><h3>{}</h3><p>{}</p><p>{}</p><p>{}</p></div>",
        escape_html(&event.id),
        escape_html(&event.title),
        escape_html(&event.description),
        event.date_label(),
        escape_html(&event.location)
    )
    .expect("write event card");
}
