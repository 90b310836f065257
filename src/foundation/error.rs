/// Crate-wide result alias.
pub type InklineResult<T> = Result<T, InklineError>;

/// Crate-wide error type.
///
/// Only construction-time failures (malformed input handed to a constructor)
/// surface as errors to callers; resource misses and style coercion failures
/// are absorbed where they occur and converted into documented fallbacks.
#[derive(thiserror::Error, Debug)]
pub enum InklineError {
    /// Malformed input rejected at construction time.
    #[error("validation error: {0}")]
    Validation(String),

    /// Image bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Remote fetch failed before producing a status code.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Wrapped error from a collaborator.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InklineError {
    /// Build a [`InklineError::Validation`] from a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`InklineError::Decode`] from a message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`InklineError::Fetch`] from a message.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }
}
