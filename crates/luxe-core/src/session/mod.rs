//! Who is signed in.
//!
//! [`SessionGate`] owns the current [`Identity`] and notifies subscribers
//! once per real transition. Stores subscribe to it to clear or refetch
//! their collections.

pub mod credentials;

use std::sync::Arc;

use luxe_api::{ApiClient, Credentials, ProfileUpdate, Registration, SessionToken, UserProfile};
use tokio::sync::watch;
use tracing::info;

use crate::error::{Error, Result};

/// An authenticated shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Profile returned by the backend.
    pub user: UserProfile,
    /// Bearer token for authenticated calls.
    pub token: SessionToken,
}

impl Identity {
    /// Creates an identity.
    #[must_use]
    pub const fn new(user: UserProfile, token: SessionToken) -> Self {
        Self { user, token }
    }

    /// Backend id of the user.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    /// Returns true if both identities belong to the same user.
    #[must_use]
    pub fn same_user(&self, other: &Self) -> bool {
        self.user.id == other.user.id
    }
}

/// Observable login state.
///
/// Cheap to clone; clones share the same state.
#[derive(Debug, Clone)]
pub struct SessionGate {
    sender: Arc<watch::Sender<Option<Identity>>>,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate {
    /// Creates a gate with nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Signs an identity in, replacing any previous one.
    pub fn sign_in(&self, identity: Identity) {
        info!(user = %identity.user_id(), "Signed in");
        self.sender.send_replace(Some(identity));
    }

    /// Signs out. Does nothing (and notifies nobody) if already signed out.
    pub fn sign_out(&self) {
        let changed = self.sender.send_if_modified(|current| current.take().is_some());
        if changed {
            info!("Signed out");
        }
    }

    /// The current identity, if any.
    #[must_use]
    pub fn current(&self) -> Option<Identity> {
        self.sender.borrow().clone()
    }

    /// Returns true while someone is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.sender.borrow().is_some()
    }

    /// Returns a receiver that observes every transition.
    ///
    /// The receiver starts with the current value marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.sender.subscribe()
    }

    /// Logs in with email and password and signs the result in.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the credentials or cannot be
    /// reached. The gate is left unchanged in that case.
    pub async fn login(&self, client: &ApiClient, email: &str, password: &str) -> Result<Identity> {
        let session = client
            .login(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        let identity = Identity::new(session.user, session.token);
        self.sign_in(identity.clone());
        Ok(identity)
    }

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the registration or cannot
    /// be reached. The gate is left unchanged in that case.
    pub async fn register(
        &self,
        client: &ApiClient,
        registration: &Registration,
    ) -> Result<Identity> {
        let session = client.register(registration).await?;
        let identity = Identity::new(session.user, session.token);
        self.sign_in(identity.clone());
        Ok(identity)
    }

    /// Saves profile changes and publishes the updated identity.
    ///
    /// The token is kept, so stores treat this as the same user and keep
    /// their caches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAuthenticated`] when nobody is signed in, or the
    /// backend's error if the update is rejected.
    pub async fn update_profile(
        &self,
        client: &ApiClient,
        update: &ProfileUpdate,
    ) -> Result<Identity> {
        let current = self.current().ok_or(Error::NotAuthenticated)?;
        let user = client.update_profile(&current.token, update).await?;
        let identity = Identity::new(user, current.token);
        self.sign_in(identity.clone());
        Ok(identity)
    }

    /// Rebuilds an identity from a stored token by fetching the profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is no longer accepted.
    pub async fn resume(&self, client: &ApiClient, token: SessionToken) -> Result<Identity> {
        let user = client.profile(&token).await?;
        let identity = Identity::new(user, token);
        self.sign_in(identity.clone());
        Ok(identity)
    }
}
