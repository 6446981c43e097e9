use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::OriginError;
use crate::domain::repositories::{ImageOrigin, OriginImage};

/// Fetches images from whatever host a search hit names.
#[derive(Clone)]
pub struct HttpImageOrigin {
    client: reqwest::Client,
    timeout: Duration,
    max_bytes: usize,
}

impl HttpImageOrigin {
    pub fn new(client: reqwest::Client, timeout: Duration, max_bytes: usize) -> Self {
        Self {
            client,
            timeout,
            max_bytes,
        }
    }
}

#[async_trait]
impl ImageOrigin for HttpImageOrigin {
    async fn fetch(&self, url: &str) -> Result<OriginImage, OriginError> {
        let mut response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| OriginError::new(url, err))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let limit = u64::try_from(self.max_bytes).unwrap_or(u64::MAX);
        if response.content_length().is_some_and(|length| length > limit) {
            return Err(OriginError::new(url, too_large(self.max_bytes)));
        }

        // Content-Length may be absent or wrong, so the limit is enforced on
        // what actually arrives.
        let mut data = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|err| OriginError::new(url, err))?
        {
            if data.len() + chunk.len() > self.max_bytes {
                return Err(OriginError::new(url, too_large(self.max_bytes)));
            }
            data.extend_from_slice(&chunk);
        }

        Ok(OriginImage {
            status,
            content_type,
            data,
        })
    }
}

fn too_large(max_bytes: usize) -> String {
    format!("image exceeds {max_bytes} bytes")
}
