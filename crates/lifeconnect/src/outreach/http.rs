use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::api::{ApiError, Operation, OutreachApi};
use super::domain::{Event, RegistrationConfirmation, Resource, SupportAck, SupportMessage};
use crate::registration::DonorRegistration;

/// Forwards every call to the remote collaborator as JSON over HTTP.
///
/// No retries: a failed call is reported to the caller as-is.
#[derive(Debug, Clone)]
pub struct HttpOutreachApi {
    client: Client,
    base_url: String,
}

impl HttpOutreachApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("lifeconnect/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, operation = operation.label(), "outreach request");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;
        decode(operation, response).await
    }

    async fn post_json<B, T>(&self, operation: Operation, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, operation = operation.label(), "outreach request");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;
        decode(operation, response).await
    }
}

async fn decode<T: DeserializeOwned>(operation: Operation, response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        warn!(operation = operation.label(), status = status.as_u16(), "outreach request rejected");
        return Err(ApiError::Status {
            operation,
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| ApiError::Transport { operation, source })
}

#[async_trait]
impl OutreachApi for HttpOutreachApi {
    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_json(Operation::FetchEvents, "events").await
    }

    async fn fetch_resources(&self) -> Result<Vec<Resource>, ApiError> {
        self.get_json(Operation::FetchResources, "resources").await
    }

    async fn register_donor(
        &self,
        registration: &DonorRegistration,
    ) -> Result<RegistrationConfirmation, ApiError> {
        self.post_json(Operation::Register, "register", registration)
            .await
    }

    async fn send_support_message(
        &self,
        message: &SupportMessage,
    ) -> Result<SupportAck, ApiError> {
        self.post_json(Operation::SendSupportMessage, "support", message)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outreach::sample::sample_events;
    use crate::registration::tests::valid_registration;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server");
        });
        format!("http://{addr}/api")
    }

    #[tokio::test]
    async fn fetches_events_from_remote_collaborator() {
        let router = Router::new().route("/api/events", get(|| async { Json(sample_events()) }));
        let base = spawn(router).await;
        let api = HttpOutreachApi::new(&base).expect("client builds");

        let events = api.fetch_events().await.expect("events fetched");
        assert_eq!(events, sample_events());
    }

    #[tokio::test]
    async fn non_success_status_is_a_generic_failure() {
        let router = Router::new().route(
            "/api/resources",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
        );
        let base = spawn(router).await;
        let api = HttpOutreachApi::new(&base).expect("client builds");

        let err = api.fetch_resources().await.expect_err("must fail");
        assert!(matches!(
            err,
            ApiError::Status {
                operation: Operation::FetchResources,
                status: 503
            }
        ));
        assert!(err.to_string().contains("request failed"));
    }

    #[tokio::test]
    async fn registration_posts_camel_case_json_once() {
        let received: Arc<Mutex<Vec<serde_json::Value>>> = Arc::default();
        let sink = received.clone();
        let router = Router::new().route(
            "/api/register",
            post(move |Json(body): Json<serde_json::Value>| {
                let sink = sink.clone();
                async move {
                    sink.lock().expect("sink").push(body);
                    (
                        StatusCode::CREATED,
                        Json(serde_json::json!({ "registrationId": "remote-7" })),
                    )
                }
            }),
        );
        let base = spawn(router).await;
        let api = HttpOutreachApi::new(&format!("{base}/")).expect("client builds");

        let confirmation = api
            .register_donor(&valid_registration())
            .await
            .expect("registered");

        assert_eq!(confirmation.registration_id.as_deref(), Some("remote-7"));
        let bodies = received.lock().expect("sink").clone();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["firstName"], "Ada");
        assert_eq!(bodies[0]["zipCode"], "50309");
        assert_eq!(bodies[0]["organPreferences"], serde_json::json!(["heart"]));
        assert_eq!(bodies[0]["consent"], true);
    }

    #[tokio::test]
    async fn unreachable_collaborator_is_a_transport_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let api = HttpOutreachApi::new(&format!("http://{addr}/api")).expect("client builds");
        let err = api
            .send_support_message(&SupportMessage {
                name: "Dana".to_string(),
                email: "dana@example.com".to_string(),
                message: "Is anyone there?".to_string(),
            })
            .await
            .expect_err("must fail");
        assert_eq!(err.operation(), Some(Operation::SendSupportMessage));
    }
}
