//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Backend call failed.
    #[error("API error: {0}")]
    Api(#[from] luxe_api::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Credential storage error.
    #[error("Credential error: {0}")]
    Credential(#[from] crate::session::credentials::CredentialError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The operation needs a signed-in shopper.
    #[error("Not signed in")]
    NotAuthenticated,
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
