//! Error types for storefront API calls.

use reqwest::StatusCode;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure (connection refused, DNS, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Non-2xx response from the backend.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Api {
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Server-supplied `message` field, if the body carried one.
        message: Option<String>,
    },

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Creates an API error from a status and optional message.
    #[must_use]
    pub fn api(status: StatusCode, message: Option<String>) -> Self {
        Self::Api { status, message }
    }

    /// Returns the message the server attached to a rejection, if any.
    ///
    /// Transport and decoding failures never carry a server message.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }

    /// Returns the HTTP status for server rejections.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server rejected the bearer token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_present() {
        let err = Error::api(StatusCode::BAD_REQUEST, Some("Out of stock".into()));
        assert_eq!(err.server_message(), Some("Out of stock"));
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.to_string(), "API error (400 Bad Request): Out of stock");
    }

    #[test]
    fn test_blank_server_message_is_ignored() {
        let err = Error::api(StatusCode::BAD_REQUEST, Some("  ".into()));
        assert!(err.server_message().is_none());
    }

    #[test]
    fn test_non_api_errors_have_no_message() {
        let err = Error::InvalidConfig("bad".into());
        assert!(err.server_message().is_none());
        assert!(err.status().is_none());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized() {
        let err = Error::api(StatusCode::UNAUTHORIZED, None);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "API error (401 Unauthorized): no message");
    }
}
