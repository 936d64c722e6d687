//! Completion failure taxonomy.

use thiserror::Error;

/// Every Groq key starts with this.
pub const API_KEY_PREFIX: &str = "gsk_";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    #[error("completion API key is not configured")]
    MissingCredential,

    #[error("completion API key does not start with `gsk_`")]
    MalformedCredential,

    #[error("completion service rejected the credentials")]
    Unauthorized,

    #[error("completion service is rate limiting requests")]
    RateLimited,

    #[error("completion service answered with status {0}")]
    Status(u16),

    #[error("completion request timed out")]
    Timeout,

    #[error("completion transport error: {0}")]
    Transport(String),

    #[error("invalid completion response: {0}")]
    InvalidResponse(String),
}

/// Sanity check applied to the completion key before any request is made.
pub fn check_api_key(key: &str) -> Result<(), CompletionError> {
    if key.trim().is_empty() {
        return Err(CompletionError::MissingCredential);
    }
    if !key.starts_with(API_KEY_PREFIX) {
        return Err(CompletionError::MalformedCredential);
    }
    Ok(())
}
