use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::BackendError;
use crate::domain::identifiers::Identifier;
use crate::domain::repositories::{ImageOrigin, OriginImage, SearchBackend};
use crate::domain::search::term_query;

#[derive(Debug)]
pub enum Resolution {
    Found(OriginImage),
    Miss(MissReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    NoHits,
    NoImage,
    OriginUnavailable,
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::NoHits => f.write_str("no matching documents"),
            MissReason::NoImage => f.write_str("no hit carries an image"),
            MissReason::OriginUnavailable => f.write_str("image origin unavailable"),
        }
    }
}

/// Looks an identifier up in the search index and fetches the first image
/// any hit points at.
#[derive(Clone)]
pub struct ImageResolver {
    backend: Arc<dyn SearchBackend>,
    origin: Arc<dyn ImageOrigin>,
}

impl ImageResolver {
    pub fn new(backend: Arc<dyn SearchBackend>, origin: Arc<dyn ImageOrigin>) -> Self {
        Self { backend, origin }
    }

    /// Only backend failures are errors. Origin failures are reported as a
    /// miss so callers treat them like an absent image.
    pub async fn resolve(&self, identifier: &Identifier) -> Result<Resolution, BackendError> {
        let response = self.backend.search(&term_query(identifier)).await?;

        let Some(url) = response.first_image_url() else {
            let reason = if response.hits.total.value() == 0 {
                MissReason::NoHits
            } else {
                MissReason::NoImage
            };
            return Ok(Resolution::Miss(reason));
        };

        debug!(url, "fetching resolved image");

        match self.origin.fetch(url).await {
            Ok(image) => {
                let content_type = image.content_type.as_deref().unwrap_or("");
                if (200..300).contains(&image.status) {
                    debug!(url, content_type, bytes = image.data.len(), "fetched resolved image");
                } else {
                    warn!(
                        url,
                        status = image.status,
                        content_type,
                        "image origin returned non-success"
                    );
                }
                Ok(Resolution::Found(image))
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch resolved image");
                Ok(Resolution::Miss(MissReason::OriginUnavailable))
            }
        }
    }
}
