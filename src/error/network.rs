//! Failures reaching the job bot backend.

use thiserror::Error;

use crate::traits::HttpError;

/// A transport failure, tagged with the URL it happened on where that helps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Refused, DNS failure, reset.
    #[error("Connection failed to '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    #[error("Invalid backend URL '{url}'")]
    InvalidUrl { url: String },

    #[error("Failed to read response: {message}")]
    BodyRead { message: String },

    #[error("Request cancelled")]
    Cancelled,

    #[error("Network error: {message}")]
    Other { message: String },
}

impl NetworkError {
    /// Stable code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::BodyRead { .. } => "E_NET_BODY",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }

    /// Next step suggested by `jobbot ping`.
    pub fn hint(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Is the bot backend running? Start it and try again."
            }
            NetworkError::Timeout { .. } => "The backend did not answer in time.",
            NetworkError::InvalidUrl { .. } => "Check --backend-url / JOBBOT_BACKEND_URL.",
            NetworkError::BodyRead { .. } | NetworkError::Other { .. } => {
                "The backend answered with something unexpected."
            }
            NetworkError::Cancelled => "The request was cancelled.",
        }
    }
}

/// Attach `url` to an [`HttpError`] from the transport.
pub fn classify_http_error(err: &HttpError, url: &str) -> NetworkError {
    let url = url.to_string();
    match err.clone() {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed { url, message },
        HttpError::Timeout(_) => NetworkError::Timeout { url },
        HttpError::InvalidUrl(_) => NetworkError::InvalidUrl { url },
        HttpError::Io(message) => NetworkError::BodyRead { message },
        HttpError::Cancelled => NetworkError::Cancelled,
        HttpError::Other(message) => NetworkError::Other { message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_http_error() {
        let url = "http://localhost:5000/run-bot";
        assert_eq!(
            classify_http_error(&HttpError::ConnectionFailed("refused".into()), url),
            NetworkError::ConnectionFailed {
                url: url.to_string(),
                message: "refused".to_string()
            }
        );
        assert_eq!(
            classify_http_error(&HttpError::Timeout("30s".into()), url),
            NetworkError::Timeout {
                url: url.to_string()
            }
        );
        assert_eq!(
            classify_http_error(&HttpError::Cancelled, url),
            NetworkError::Cancelled
        );
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            NetworkError::ConnectionFailed {
                url: String::new(),
                message: String::new(),
            }
            .error_code(),
            NetworkError::Timeout { url: String::new() }.error_code(),
            NetworkError::InvalidUrl { url: String::new() }.error_code(),
            NetworkError::BodyRead {
                message: String::new(),
            }
            .error_code(),
            NetworkError::Cancelled.error_code(),
            NetworkError::Other {
                message: String::new(),
            }
            .error_code(),
        ];
        let mut unique = codes.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_display() {
        let err = NetworkError::ConnectionFailed {
            url: "http://localhost:5000/".to_string(),
            message: "refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Connection failed to 'http://localhost:5000/': refused"
        );
    }
}
