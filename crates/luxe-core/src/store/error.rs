//! Failure reported by store mutations.

/// Why a cart or wishlist mutation did not go through.
///
/// `message()` is the text a UI should show; the caller decides whether to
/// show it at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MutationError {
    /// No shopper is signed in; nothing was sent to the server.
    #[error("Please log in to continue")]
    NotAuthenticated,

    /// A quantity below 1 was requested; nothing was sent to the server.
    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    /// The server refused the request and said why.
    #[error("{0}")]
    Rejected(String),

    /// The request failed without a server explanation (network error,
    /// timeout, undecodable response).
    #[error("{0}")]
    Failed(String),
}

impl MutationError {
    /// Converts an API error, preferring the server's own message over the
    /// operation's generic fallback.
    #[must_use]
    pub fn from_api(err: &luxe_api::Error, fallback: &str) -> Self {
        err.server_message()
            .map_or_else(|| Self::Failed(fallback.to_string()), |m| Self::Rejected(m.to_string()))
    }

    /// User-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if the failure happened before any network call.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::InvalidQuantity)
    }
}

#[cfg(test)]
mod tests {
    use luxe_api::StatusCode;

    use super::*;

    #[test]
    fn test_server_message_wins() {
        let api = luxe_api::Error::api(StatusCode::BAD_REQUEST, Some("Only 2 left".into()));
        let err = MutationError::from_api(&api, "Failed to add to cart");
        assert_eq!(err, MutationError::Rejected("Only 2 left".into()));
        assert_eq!(err.message(), "Only 2 left");
        assert!(!err.is_local());
    }

    #[test]
    fn test_fallback_without_server_message() {
        let api = luxe_api::Error::api(StatusCode::INTERNAL_SERVER_ERROR, None);
        let err = MutationError::from_api(&api, "Failed to add to cart");
        assert_eq!(err.message(), "Failed to add to cart");
    }

    #[test]
    fn test_transport_error_uses_fallback() {
        let api = luxe_api::Error::InvalidConfig("no route".into());
        let err = MutationError::from_api(&api, "Failed to clear cart");
        assert_eq!(err, MutationError::Failed("Failed to clear cart".into()));
    }

    #[test]
    fn test_local_errors() {
        assert!(MutationError::NotAuthenticated.is_local());
        assert!(MutationError::InvalidQuantity.is_local());
        assert_eq!(
            MutationError::InvalidQuantity.message(),
            "Quantity must be at least 1"
        );
    }
}
