//! Bearer token persistence in the system keyring.
//!
//! Uses the platform's native credential storage:
//! - Linux: Secret Service (GNOME Keyring, `KWallet`)
//! - macOS: Keychain
//! - Windows: Credential Manager

use keyring::Entry;
use luxe_api::SessionToken;
use tracing::{debug, warn};

/// Service name used for keyring entries.
const SERVICE_NAME: &str = "luxe";

/// Credential type identifier for session tokens.
const TOKEN_CREDENTIAL: &str = "session_token";

/// Error type for credential operations.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Failed to access keyring.
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// A profile name is required to address the keyring entry.
    #[error("Profile name is required for credential storage")]
    MissingProfile,
}

/// Result type for credential operations.
pub type CredentialResult<T> = std::result::Result<T, CredentialError>;

/// Generates the keyring entry key for a profile's token.
fn credential_key(profile: &str) -> CredentialResult<String> {
    let profile = profile.trim();
    if profile.is_empty() {
        return Err(CredentialError::MissingProfile);
    }
    Ok(format!("{SERVICE_NAME}_{TOKEN_CREDENTIAL}_{profile}"))
}

fn entry(profile: &str) -> CredentialResult<Entry> {
    Ok(Entry::new(SERVICE_NAME, &credential_key(profile)?)?)
}

/// Stores the session token for a profile.
///
/// # Errors
///
/// Returns an error if the keyring operation fails.
pub fn store_token(profile: &str, token: &SessionToken) -> CredentialResult<()> {
    entry(profile)?.set_password(token.as_str())?;
    debug!(profile, "Stored session token");
    Ok(())
}

/// Retrieves the session token for a profile.
///
/// # Errors
///
/// Returns an error if the keyring operation fails.
pub fn get_token(profile: &str) -> CredentialResult<Option<SessionToken>> {
    match entry(profile)?.get_password() {
        Ok(token) => Ok(Some(SessionToken::new(token))),
        Err(keyring::Error::NoEntry) => {
            debug!(profile, "No session token found");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletes the session token for a profile. A missing entry is not an
/// error.
///
/// # Errors
///
/// Returns an error if the keyring operation fails.
pub fn delete_token(profile: &str) -> CredentialResult<()> {
    match entry(profile)?.delete_credential() {
        Ok(()) => {
            debug!(profile, "Deleted session token");
            Ok(())
        }
        Err(keyring::Error::NoEntry) => {
            debug!(profile, "No session token to delete");
            Ok(())
        }
        Err(e) => {
            warn!("Failed to delete session token: {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    // Tests touching the real keyring are ignored by default.
    // Run manually with `cargo test -- --ignored`

    use super::*;

    #[test]
    fn test_credential_key() {
        assert_eq!(credential_key("default").unwrap(), "luxe_session_token_default");
        assert!(matches!(
            credential_key("  "),
            Err(CredentialError::MissingProfile)
        ));
    }

    #[test]
    #[ignore = "Interacts with system keyring"]
    fn test_store_and_retrieve_token() {
        let profile = "test-profile-99999";
        store_token(profile, &SessionToken::new("tok-abc")).unwrap();

        let token = get_token(profile).unwrap();
        assert_eq!(token.as_ref().map(SessionToken::as_str), Some("tok-abc"));

        delete_token(profile).unwrap();
        assert!(get_token(profile).unwrap().is_none());
    }

    #[test]
    #[ignore = "Interacts with system keyring"]
    fn test_delete_missing_token_is_ok() {
        delete_token("test-profile-99998").unwrap();
    }
}
