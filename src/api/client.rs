use crate::api::traits::PredictionApi;
use crate::api::types::ClientConfig;
use crate::models::{PriceResponse, PropertyQuery, SegmentResponse, SimilarResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// reqwest-backed client for the prediction service
pub struct HttpApiClient {
    client: Client,
    config: ClientConfig,
}

impl HttpApiClient {
    /// Client for the default local service
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST the query as JSON and decode the answer. A non-2xx status or a
    /// `null` body is `None`; an unreadable or malformed body is an error.
    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &PropertyQuery,
    ) -> Result<Option<T>> {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(query)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status: {}", url, status);
            return Ok(None);
        }

        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read body from {}", url))?;
        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_slice::<Option<T>>(&body)
            .with_context(|| format!("Malformed JSON from {}", url))
    }
}

#[async_trait]
impl PredictionApi for HttpApiClient {
    async fn health(&self) -> Result<bool> {
        let url = self.config.endpoint("/health");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        if !response.status().is_success() {
            warn!("{} returned status: {}", url, response.status());
        }
        Ok(response.status().is_success())
    }

    async fn predict(&self, query: &PropertyQuery) -> Result<Option<PriceResponse>> {
        self.post_json("/predict", query).await
    }

    async fn segment(&self, query: &PropertyQuery) -> Result<Option<SegmentResponse>> {
        self.post_json("/segmento", query).await
    }

    async fn similar(&self, query: &PropertyQuery) -> Result<Option<SimilarResponse>> {
        let path = format!("/similar?k={}", self.config.similar_k);
        self.post_json(&path, query).await
    }
}
