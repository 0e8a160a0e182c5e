use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::api::OutreachApi;
use super::domain::{Event, Resource};
use crate::error::AppError;
use crate::registration::{validate, FieldErrors, RegistrationForm};
use crate::support::{validate_message, SupportForm};

/// Collaborator contract served by the site itself, meant to be nested under `/api`.
pub fn outreach_router(api: Arc<dyn OutreachApi>) -> Router {
    Router::new()
        .route("/events", get(events_handler))
        .route("/resources", get(resources_handler))
        .route("/register", post(register_handler))
        .route("/support", post(support_handler))
        .with_state(api)
}

pub(crate) async fn events_handler(
    State(api): State<Arc<dyn OutreachApi>>,
) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(api.fetch_events().await?))
}

pub(crate) async fn resources_handler(
    State(api): State<Arc<dyn OutreachApi>>,
) -> Result<Json<Vec<Resource>>, AppError> {
    Ok(Json(api.fetch_resources().await?))
}

fn field_errors_response(status: StatusCode, errors: &FieldErrors) -> Response {
    (status, Json(json!({ "errors": errors }))).into_response()
}

/// A body that is not a JSON object of the expected shape is reported under the `body` key.
fn rejection_response(rejection: JsonRejection) -> Response {
    let mut errors = FieldErrors::new();
    errors.insert("body", rejection.body_text());
    field_errors_response(rejection.status(), &errors)
}

pub(crate) async fn register_handler(
    State(api): State<Arc<dyn OutreachApi>>,
    payload: Result<Json<RegistrationForm>, JsonRejection>,
) -> Response {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return rejection_response(rejection),
    };
    let registration = match validate(&form) {
        Ok(registration) => registration,
        Err(errors) => return field_errors_response(StatusCode::UNPROCESSABLE_ENTITY, &errors),
    };

    match api.register_donor(&registration).await {
        Ok(confirmation) => (StatusCode::CREATED, Json(confirmation)).into_response(),
        Err(err) => {
            warn!(error = %err, "registration collaborator failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Registration failed" })),
            )
                .into_response()
        }
    }
}

pub(crate) async fn support_handler(
    State(api): State<Arc<dyn OutreachApi>>,
    payload: Result<Json<SupportForm>, JsonRejection>,
) -> Response {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return rejection_response(rejection),
    };
    let message = match validate_message(&form) {
        Ok(message) => message,
        Err(errors) => return field_errors_response(StatusCode::UNPROCESSABLE_ENTITY, &errors),
    };

    match api.send_support_message(&message).await {
        Ok(ack) => (StatusCode::CREATED, Json(ack)).into_response(),
        Err(err) => {
            warn!(error = %err, "support collaborator failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Failed to send message" })),
            )
                .into_response()
        }
    }
}
