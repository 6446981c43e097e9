use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::{BackendError, OriginError};
use crate::domain::search::SearchResponse;

#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &Value) -> Result<SearchResponse, BackendError>;
}

/// Image bytes as served by an origin. The declared content type is only
/// logged; responses are always relabelled.
#[derive(Debug, Clone)]
pub struct OriginImage {
    pub status: u16,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

#[async_trait]
pub trait ImageOrigin: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<OriginImage, OriginError>;
}
