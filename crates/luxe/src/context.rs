//! Wiring shared by every subcommand.

use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Args;
use luxe_api::config::{API_TIMEOUT_ENV, API_URL_ENV, DEFAULT_API_URL};
use luxe_api::{ApiClient, ClientConfig};
use luxe_core::session::credentials;
use luxe_core::{CartStore, Identity, SessionGate, WishlistStore};
use tracing::{debug, warn};

/// Options accepted by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct GlobalArgs {
    /// Storefront API base URL
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = API_TIMEOUT_ENV, default_value_t = 30)]
    timeout_secs: u64,

    /// Keyring profile holding the session token
    #[arg(long, global = true, env = "LUXE_PROFILE", default_value = "default")]
    profile: String,
}

/// API client, session gate and the keyring profile in use.
pub(crate) struct Context {
    pub(crate) client: ApiClient,
    pub(crate) gate: SessionGate,
    pub(crate) profile: String,
}

impl Context {
    pub(crate) fn new(args: GlobalArgs) -> Result<Self> {
        let config = ClientConfig::builder(&args.api_url)
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(concat!("luxe/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("invalid API configuration")?;
        let client = ApiClient::new(config).context("failed to build HTTP client")?;

        Ok(Self {
            client,
            gate: SessionGate::new(),
            profile: args.profile,
        })
    }

    /// Signs the saved session back in, if there is one.
    ///
    /// A token the backend no longer accepts is deleted.
    pub(crate) async fn restore(&self) -> Result<Option<Identity>> {
        let Some(token) = credentials::get_token(&self.profile)
            .context("failed to read saved session")?
        else {
            debug!(profile = %self.profile, "No saved session");
            return Ok(None);
        };

        match self.gate.resume(&self.client, token).await {
            Ok(identity) => Ok(Some(identity)),
            Err(luxe_core::Error::Api(e)) if e.is_unauthorized() => {
                warn!("Saved session expired");
                credentials::delete_token(&self.profile)
                    .context("failed to delete expired session")?;
                Ok(None)
            }
            Err(e) => Err(e).context("failed to restore session"),
        }
    }

    /// Like [`restore`](Self::restore), but a missing session is an error.
    pub(crate) async fn require_identity(&self) -> Result<Identity> {
        self.restore()
            .await?
            .context("not logged in; run `luxe login` first")
    }

    /// A cart store for the saved session, already fetched.
    ///
    /// Without a session the store stays empty and mutations report
    /// that a login is needed.
    pub(crate) async fn cart(&self) -> Result<CartStore> {
        let identity = self.restore().await?;
        let store = CartStore::new(self.client.clone());
        store.on_identity_changed(identity).await;
        Ok(store)
    }

    /// A wishlist store for the saved session, already fetched.
    pub(crate) async fn wishlist(&self) -> Result<WishlistStore> {
        let identity = self.restore().await?;
        let store = WishlistStore::new(self.client.clone());
        store.on_identity_changed(identity).await;
        Ok(store)
    }
}
