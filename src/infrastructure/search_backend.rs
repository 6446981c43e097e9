use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::domain::errors::BackendError;
use crate::domain::repositories::SearchBackend;
use crate::domain::search::SearchResponse;

/// Appended to the configured base address to reach the publication index.
pub const SEARCH_PATH: &str = "/search/publication/_search";

#[derive(Clone)]
pub struct ElasticsearchBackend {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl ElasticsearchBackend {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            endpoint: search_endpoint(base_url)?,
            timeout,
        })
    }
}

/// The base address keeps any path prefix it carries; the index path is
/// appended rather than joined.
pub fn search_endpoint(base_url: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}{SEARCH_PATH}", base_url.trim_end_matches('/')))
}

#[async_trait]
impl SearchBackend for ElasticsearchBackend {
    async fn search(&self, query: &Value) -> Result<SearchResponse, BackendError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .json(query)
            .send()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        debug!(status = %response.status(), "search backend responded");

        let body = response
            .bytes()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        serde_json::from_slice(&body).map_err(|err| BackendError::Decode(err.to_string()))
    }
}
