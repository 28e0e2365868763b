//! Unified error type for backend calls.

use thiserror::Error;

use super::network::NetworkError;

/// Everything that can go wrong between "submit" and a decoded reply.
///
/// None of these reach the screen: the form shows
/// [`FALLBACK_ERROR`](crate::models::FALLBACK_ERROR) for
/// all of them. The variant and its code go to the log.
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The body was not JSON at all.
    #[error("invalid reply from backend (HTTP {status}): {source}")]
    InvalidReply {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl BotError {
    pub fn error_code(&self) -> &'static str {
        match self {
            BotError::Network(err) => err.error_code(),
            BotError::InvalidReply { .. } => "E_REPLY_INVALID",
            BotError::Encode(_) => "E_REQUEST_ENCODE",
        }
    }
}

/// Result alias for backend operations.
pub type BotResult<T> = Result<T, BotError>;
