use std::time::Duration;

use reqwest::Client;

use crate::api::error::ApiError;
use crate::api::types::{AchievementsSummary, Envelope, ErrorBody, PurchaseRequest};
use crate::config::ApiConfig;

/// Typed client for the rewards backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from connection settings.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit one purchase as form-encoded fields.
    ///
    /// The success body is ignored. On a non-2xx response the body is
    /// parsed as JSON and its `message` field becomes the error text.
    pub async fn submit_purchase(&self, request: &PurchaseRequest) -> Result<(), ApiError> {
        let url = format!("{}/users/purchase", self.base_url);
        let response = self
            .http
            .post(&url)
            .form(request)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "purchase request did not reach the backend");
                ApiError::PurchaseDeclined {
                    message: None,
                    status: None,
                }
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(email = %request.email, "purchase accepted");
            return Ok(());
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.message);
        tracing::warn!(%status, ?message, "purchase declined");
        Err(ApiError::PurchaseDeclined {
            message,
            status: Some(status),
        })
    }

    /// Fetch the achievements summary for one email.
    ///
    /// Non-2xx bodies are not parsed; every failure collapses to the
    /// same generic error.
    pub async fn fetch_achievements(&self, email: &str) -> Result<AchievementsSummary, ApiError> {
        let url = format!("{}/users/{}/achievements", self.base_url, email);
        let response = self.http.get(&url).send().await.map_err(|err| {
            tracing::warn!(error = %err, "achievements request did not reach the backend");
            ApiError::AchievementsUnavailable {
                status: None,
                source: Some(err),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "achievements fetch rejected");
            return Err(ApiError::AchievementsUnavailable {
                status: Some(status),
                source: None,
            });
        }

        let envelope = response.json::<Envelope>().await.map_err(|err| {
            tracing::warn!(error = %err, "achievements payload did not decode");
            ApiError::AchievementsUnavailable {
                status: Some(status),
                source: Some(err),
            }
        })?;
        Ok(envelope.data)
    }

    /// Base URL endpoints resolve against, with no trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
