use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("search backend request failed: {0}")]
    Transport(String),
    /// Displays the decoder's own message, which is returned to the caller.
    #[error("{0}")]
    Decode(String),
}

#[derive(Debug, Error)]
#[error("image fetch from {url} failed: {message}")]
pub struct OriginError {
    pub url: String,
    pub message: String,
}

impl OriginError {
    pub fn new(url: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
