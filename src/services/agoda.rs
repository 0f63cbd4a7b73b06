//! Upstream Agoda GraphQL client.
//!
//! The search service depends on the [`AgodaClient`] trait rather than on
//! reqwest directly, so the translation core can be exercised without a
//! live network dependency.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;

use crate::{
    config::UpstreamConfig,
    error::{AppError, AppResult},
};

/// Capability to execute one upstream property search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgodaClient: Send + Sync {
    /// POST the GraphQL request body and return the decoded JSON response.
    async fn property_search(&self, payload: &Value) -> AppResult<Value>;
}

/// Production client: a single POST to the fixed GraphQL endpoint with a
/// fixed header set. No retries, no caching.
pub struct HttpAgodaClient {
    client: Client,
    config: UpstreamConfig,
}

impl HttpAgodaClient {
    pub fn new(config: UpstreamConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::Unexpected(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl AgodaClient for HttpAgodaClient {
    async fn property_search(&self, payload: &Value) -> AppResult<Value> {
        tracing::debug!("POST {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(header::ACCEPT, "application/json")
            .header(header::ORIGIN, self.config.origin.as_str())
            .header(header::REFERER, self.config.referer.as_str())
            .header("ag-language-locale", self.config.language_locale.as_str())
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::Unexpected(format!("Agoda request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Agoda returned status {}", status);
            return Err(AppError::UpstreamHttp(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Unexpected(format!("Failed to decode Agoda response: {}", e)))
    }
}
