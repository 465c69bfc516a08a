//! Store display name.
//!
//! The name is cached on disk so the first render shows the right name
//! before the backend answers, and published through a `watch` channel so
//! every interested view follows changes. Dropping a receiver unsubscribes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use luxe_api::ApiClient;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::Result;

/// Name shown until the backend says otherwise.
pub const DEFAULT_STORE_NAME: &str = "Luxe Perfumes";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrandingFile {
    store_name: String,
}

/// Observable store display name with an on-disk cache.
///
/// Cheap to clone; clones share the same name.
#[derive(Debug, Clone)]
pub struct StoreBranding {
    path: PathBuf,
    sender: Arc<watch::Sender<String>>,
}

impl StoreBranding {
    /// Default cache location: `<config_dir>/luxe/branding.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("luxe")
            .join("branding.json")
    }

    /// Loads the cached name from the default location.
    pub async fn load() -> Self {
        Self::load_from(Self::default_path()).await
    }

    /// Loads the cached name from `path`, falling back to
    /// [`DEFAULT_STORE_NAME`] if the file is missing or unreadable.
    pub async fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = match read_cached(&path).await {
            Ok(Some(name)) => name,
            Ok(None) => DEFAULT_STORE_NAME.to_string(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable branding cache");
                DEFAULT_STORE_NAME.to_string()
            }
        };

        let (sender, _) = watch::channel(name);
        Self {
            path,
            sender: Arc::new(sender),
        }
    }

    /// Current display name.
    #[must_use]
    pub fn name(&self) -> String {
        self.sender.borrow().clone()
    }

    /// Window or page title for the current name.
    #[must_use]
    pub fn page_title(&self) -> String {
        format!("{} - Premium Fragrance Store", *self.sender.borrow())
    }

    /// Returns a receiver that sees every name change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.sender.subscribe()
    }

    /// Publishes and persists a new name. Blank names are ignored.
    ///
    /// Returns true if the name changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache file cannot be written. Subscribers
    /// have already been notified in that case.
    pub async fn set_name(&self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }

        let changed = self.sender.send_if_modified(|current| {
            if current.as_str() == name {
                false
            } else {
                name.clone_into(current);
                true
            }
        });
        if !changed {
            return Ok(false);
        }

        info!(name, "Store name updated");
        write_cached(&self.path, name).await?;
        Ok(true)
    }

    /// Fetches the name from the backend and publishes it.
    ///
    /// Failures are logged; the current name stays in place.
    pub async fn refresh(&self, client: &ApiClient) {
        let settings = match client.store_settings().await {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Could not fetch store settings");
                return;
            }
        };

        let Some(name) = settings.store_name else {
            debug!("Backend has no store name");
            return;
        };
        if let Err(e) = self.set_name(&name).await {
            warn!(error = %e, "Could not cache store name");
        }
    }
}

async fn read_cached(path: &Path) -> Result<Option<String>> {
    if !tokio::fs::try_exists(path).await? {
        return Ok(None);
    }
    let contents = tokio::fs::read_to_string(path).await?;
    let file: BrandingFile = serde_json::from_str(&contents)?;
    let name = file.store_name.trim();
    Ok((!name.is_empty()).then(|| name.to_string()))
}

async fn write_cached(path: &Path, name: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }
    let contents = serde_json::to_string_pretty(&BrandingFile {
        store_name: name.to_string(),
    })?;
    tokio::fs::write(path, contents).await?;
    debug!(path = %path.display(), "Store name cached");
    Ok(())
}
