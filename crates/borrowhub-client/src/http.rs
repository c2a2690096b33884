use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use borrowhub_core::{
    DeleteEnvelope, MutationEnvelope, NewNotification, NotificationEnvelope, NotificationPage,
};

use crate::error::ApiError;
use crate::gateway::NotificationGateway;

/// HTTP implementation of [`NotificationGateway`].
///
/// The session token is attached as a Bearer header on every request; an
/// absent or expired token surfaces as an ordinary HTTP failure, same as
/// any other non-2xx response.
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpGateway {
    pub fn new(base_url: &str, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
    }
}

#[async_trait]
impl NotificationGateway for HttpGateway {
    async fn list(&self) -> Result<NotificationPage, ApiError> {
        let resp = self
            .request(reqwest::Method::GET, &self.url("/notifications"))
            .send()
            .await?;
        handle_response(resp).await
    }

    async fn get(&self, id: &str) -> Result<NotificationEnvelope, ApiError> {
        let resp = self
            .request(reqwest::Method::GET, &self.url(&format!("/notifications/{id}")))
            .send()
            .await?;
        handle_response(resp).await
    }

    async fn create(&self, new: &NewNotification) -> Result<MutationEnvelope, ApiError> {
        let resp = self
            .request(reqwest::Method::POST, &self.url("/notifications"))
            .json(new)
            .send()
            .await?;
        handle_response(resp).await
    }

    async fn mark_read(&self, id: &str) -> Result<MutationEnvelope, ApiError> {
        let resp = self
            .request(
                reqwest::Method::PUT,
                &self.url(&format!("/notifications/{id}/read")),
            )
            .send()
            .await?;
        handle_response(resp).await
    }

    async fn delete(&self, id: &str) -> Result<DeleteEnvelope, ApiError> {
        let resp = self
            .request(
                reqwest::Method::DELETE,
                &self.url(&format!("/notifications/{id}")),
            )
            .send()
            .await?;
        handle_response(resp).await
    }
}

/// Error bodies carry a human-readable `message` field when the backend
/// produced them itself.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);
        return Err(ApiError::http(status, message));
    }

    serde_json::from_str(&body).map_err(ApiError::from)
}
