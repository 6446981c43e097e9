use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::application::services::ImageResolver;
use crate::infrastructure::image_origin::HttpImageOrigin;
use crate::infrastructure::search_backend::ElasticsearchBackend;

/// Everything that varies between deployments and tests. Fixed at startup and
/// never mutated while serving.
#[derive(Debug, Clone)]
pub struct AppStateConfig {
    /// Base address of the search backend; the index path is appended.
    pub search_url: String,
    pub backend_timeout: Duration,
    pub image_timeout: Duration,
    /// Origin bodies larger than this count as an unavailable origin.
    pub max_image_bytes: usize,
    pub log_misses: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub resolver: ImageResolver,
    pub log_misses: bool,
}

impl AppState {
    pub fn from_config(config: AppStateConfig) -> anyhow::Result<Self> {
        let http_client = reqwest::ClientBuilder::new()
            .user_agent(concat!("imgresolver/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        let backend = ElasticsearchBackend::new(
            http_client.clone(),
            &config.search_url,
            config.backend_timeout,
        )
        .with_context(|| format!("invalid search backend address: {}", config.search_url))?;
        let origin = HttpImageOrigin::new(
            http_client,
            config.image_timeout,
            config.max_image_bytes,
        );

        Ok(Self {
            resolver: ImageResolver::new(Arc::new(backend), Arc::new(origin)),
            log_misses: config.log_misses,
        })
    }
}
