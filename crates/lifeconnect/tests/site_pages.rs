use std::sync::Arc;

use chrono::NaiveDate;
use lifeconnect::outreach::{Event, HttpOutreachApi, MockOutreachApi, Resource};
use lifeconnect::site::{self, Page};

fn community_records() -> (Vec<Event>, Vec<Resource>) {
    let events = vec![
        Event {
            id: "evt-a".to_string(),
            title: "Green Ribbon <Gala>".to_string(),
            description: "Evening of stories & thanks.".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 3).expect("valid date"),
            time: Some("6:00 PM".to_string()),
            location: "Harbor Hall".to_string(),
            capacity: Some(120),
            is_featured: true,
        },
        Event {
            id: "evt-b".to_string(),
            title: "Campus Info Booth".to_string(),
            description: "Stop by with questions.".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 10).expect("valid date"),
            time: None,
            location: "Student Union".to_string(),
            capacity: None,
            is_featured: false,
        },
    ];
    let resources = vec![Resource {
        id: "res-a".to_string(),
        title: "Talking With Family".to_string(),
        description: "How to share your decision.".to_string(),
        url: "/resources/family-talk".to_string(),
        category: "Guides".to_string(),
    }];
    (events, resources)
}

#[tokio::test]
async fn every_page_renders_inside_the_shared_layout() {
    let api = MockOutreachApi::default();
    for page in Page::ALL {
        let html = site::render_page(page, &api).await.expect("page renders");
        assert!(html.starts_with("<!DOCTYPE html>"), "{page:?}");
        assert!(
            html.contains(&format!("<a href=\"{}\" class=\"active\">", page.path())),
            "{page:?}"
        );
        assert!(html.contains("Our Mission"), "{page:?}");
    }
}

#[tokio::test]
async fn event_and_resource_text_is_escaped() {
    let (events, resources) = community_records();
    let api = MockOutreachApi::with_records(events, resources);

    let events_html = site::render_page(Page::Events, &api)
        .await
        .expect("events render");
    assert!(events_html.contains("Green Ribbon &lt;Gala&gt;"));
    assert!(events_html.contains("stories &amp; thanks"));
    assert!(events_html.contains("April 03, 2025"));
    assert_eq!(events_html.matches("Green Ribbon").count(), 1);
    assert!(events_html.contains("Campus Info Booth"));

    let support_html = site::render_page(Page::Support, &api)
        .await
        .expect("support renders");
    assert!(support_html.contains("href=\"/resources/family-talk\""));
    assert!(support_html.contains("Get in Touch"));
}

#[tokio::test]
async fn data_pages_report_collaborator_failures() {
    let api = HttpOutreachApi::new("http://127.0.0.1:9/api").expect("client builds");
    assert!(site::render_page(Page::Events, &api).await.is_err());
    assert!(site::render_page(Page::Home, &api).await.is_ok());
}

#[tokio::test]
async fn router_serves_pages_from_a_shared_strategy() {
    use tower::ServiceExt;

    let router = site::site_router(Arc::new(MockOutreachApi::default()));
    let response = router
        .oneshot(
            axum::http::Request::get("/education")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    let html = String::from_utf8(body.to_vec()).expect("utf-8");
    assert!(html.contains("Who can become an organ donor?"));
}
