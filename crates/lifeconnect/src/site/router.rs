use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use tracing::warn;

use super::support::{ContactState, SUPPORT_FAILED_NOTICE};
use super::{education, events, home, register, support};
use crate::outreach::{outreach_router, OutreachApi};
use crate::registration::{RegistrationController, RegistrationForm, SubmitError};
use crate::support::{send_support_message, SupportError, SupportForm};

/// HTML pages plus the embedded collaborator contract under `/api`.
pub fn site_router(api: Arc<dyn OutreachApi>) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/education", get(education_page))
        .route("/events", get(events_page))
        .route("/support", get(support_page).post(support_submit))
        .route("/register", get(register_page).post(register_submit))
        .with_state(api.clone())
        .nest("/api", outreach_router(api))
}

async fn home_page() -> Html<String> {
    Html(home::render())
}

async fn education_page() -> Html<String> {
    Html(education::render())
}

async fn events_page(State(api): State<Arc<dyn OutreachApi>>) -> Html<String> {
    let events = match api.fetch_events().await {
        Ok(events) => Some(events),
        Err(err) => {
            warn!(error = %err, "events unavailable");
            None
        }
    };
    Html(events::render(events.as_deref()))
}

async fn support_page(State(api): State<Arc<dyn OutreachApi>>) -> Html<String> {
    render_support(api.as_ref(), &ContactState::default()).await
}

async fn support_submit(
    State(api): State<Arc<dyn OutreachApi>>,
    Form(form): Form<SupportForm>,
) -> Response {
    let (status, contact) = match send_support_message(&form, api.as_ref()).await {
        Ok(ack) => (StatusCode::OK, ContactState::Sent(ack)),
        Err(SupportError::Invalid(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactState::Editing {
                form,
                errors,
                notice: None,
            },
        ),
        Err(SupportError::Failed(_)) => (
            StatusCode::BAD_GATEWAY,
            ContactState::Editing {
                form,
                errors: Default::default(),
                notice: Some(SUPPORT_FAILED_NOTICE.to_string()),
            },
        ),
    };
    (status, render_support(api.as_ref(), &contact).await).into_response()
}

async fn render_support(api: &dyn OutreachApi, contact: &ContactState) -> Html<String> {
    let resources = match api.fetch_resources().await {
        Ok(resources) => Some(resources),
        Err(err) => {
            warn!(error = %err, "resources unavailable");
            None
        }
    };
    Html(support::render(resources.as_deref(), contact))
}

async fn register_page() -> Html<String> {
    Html(register::render(&RegistrationController::new()))
}

async fn register_submit(
    State(api): State<Arc<dyn OutreachApi>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let mut controller = RegistrationController::new();
    let form = RegistrationForm::from_pairs(pairs);
    let status = match controller.submit(form, api.as_ref()).await {
        Ok(_) => StatusCode::OK,
        Err(SubmitError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(SubmitError::Failed(_)) => StatusCode::BAD_GATEWAY,
        Err(err) => {
            warn!(error = %err, state = controller.state().label(), "unexpected registration state");
            StatusCode::CONFLICT
        }
    };
    (status, Html(register::render(&controller))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outreach::{HttpOutreachApi, MockOutreachApi};
    use crate::registration::tests::RecordingApi;
    use crate::registration::REGISTRATION_FAILED_NOTICE;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    const VALID_BODY: &str = "first_name=Ada&last_name=Okafor&email=ada.okafor%40example.com\
&date_of_birth=1988-04-12&phone=5155550142&address=1200+Grand+Avenue&city=Des+Moines\
&state=IA&zip_code=50309&emergency_contact_name=Chidi+Okafor\
&emergency_contact_phone=5155550199&organ_preferences=heart&organ_preferences=kidneys\
&consent=on";

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    async fn read_body(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 html")
    }

    fn unreachable_api() -> HttpOutreachApi {
        HttpOutreachApi::new("http://127.0.0.1:9/api").expect("client builds")
    }

    #[tokio::test]
    async fn every_page_renders() {
        let router = site_router(Arc::new(MockOutreachApi::default()));
        for path in ["/", "/education", "/events", "/support", "/register"] {
            let response = router
                .clone()
                .oneshot(Request::get(path).body(Body::empty()).expect("request builds"))
                .await
                .expect("route executes");
            assert_eq!(response.status(), StatusCode::OK, "{path}");
            let html = read_body(response).await;
            assert!(html.starts_with("<!DOCTYPE html>"), "{path}");
        }
    }

    #[tokio::test]
    async fn valid_registration_calls_collaborator_once() {
        let api = Arc::new(RecordingApi::default());
        let response = site_router(api.clone())
            .oneshot(form_post("/register", VALID_BODY))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(read_body(response).await.contains("Registration Successful!"));
        assert_eq!(api.calls(), 1);
        let received = api.received();
        assert_eq!(received[0].organ_preferences.len(), 2);
    }

    #[tokio::test]
    async fn invalid_registration_skips_collaborator() {
        let api = Arc::new(RecordingApi::default());
        let body = VALID_BODY.replace("&consent=on", "");
        let response = site_router(api.clone())
            .oneshot(form_post("/register", &body))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let html = read_body(response).await;
        assert!(html.contains("You must consent to organ donation"));
        assert!(html.contains("value=\"Okafor\""));
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn collaborator_failure_shows_notice() {
        let api = Arc::new(RecordingApi::failing(503));
        let response = site_router(api.clone())
            .oneshot(form_post("/register", VALID_BODY))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = read_body(response).await;
        assert!(html.contains(REGISTRATION_FAILED_NOTICE));
        assert!(html.contains("Complete Registration"));
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn events_page_survives_data_failures() {
        let response = site_router(Arc::new(unreachable_api()))
            .oneshot(Request::get("/events").body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(read_body(response).await.contains(events::EVENTS_UNAVAILABLE));
    }

    #[tokio::test]
    async fn support_form_round_trip() {
        let mock = MockOutreachApi::default();
        let router = site_router(Arc::new(mock.clone()));

        let rejected = router
            .clone()
            .oneshot(form_post("/support", "name=J&email=nope&message=hi"))
            .await
            .expect("route executes");
        assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(read_body(rejected).await.contains("Invalid email address"));

        let accepted = router
            .oneshot(form_post(
                "/support",
                "name=Jordan+Lee&email=jordan%40example.org&message=Can+I+volunteer+at+the+walkathon%3F",
            ))
            .await
            .expect("route executes");
        assert_eq!(accepted.status(), StatusCode::OK);
        assert!(!read_body(accepted).await.contains("action=\"/support\""));
        assert_eq!(mock.support_messages().len(), 1);
    }

    #[tokio::test]
    async fn api_routes_are_nested() {
        let response = site_router(Arc::new(MockOutreachApi::default()))
            .oneshot(Request::get("/api/resources").body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
