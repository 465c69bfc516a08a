//! Wishlist store.

use std::convert::identity;
use std::time::Duration;

use luxe_api::{ApiClient, ProductId, Wishlist};

use super::error::MutationError;
use super::remote::WishlistRemote;
use super::CollectionStore;
use crate::time::{SharedClock, SystemClock};

/// How long a fetched wishlist counts as fresh.
pub const WISHLIST_TTL: Duration = Duration::from_secs(60);

const ADD_FAILED: &str = "Failed to add to wishlist";
const REMOVE_FAILED: &str = "Failed to remove from wishlist";

/// The shopper's saved products.
pub type WishlistStore<R = ApiClient> = CollectionStore<Wishlist, R>;

impl<R: WishlistRemote> CollectionStore<Wishlist, R> {
    /// Creates a wishlist store on the system clock.
    #[must_use]
    pub fn new(remote: R) -> Self {
        Self::with_clock(remote, SystemClock::shared())
    }

    /// Creates a wishlist store on the given clock.
    #[must_use]
    pub fn with_clock(remote: R, clock: SharedClock) -> Self {
        Self::with_ttl(remote, WISHLIST_TTL, clock)
    }

    /// Saves a product.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::NotAuthenticated`] when signed out,
    /// otherwise the server's rejection or a generic failure.
    pub async fn add(&self, product_id: &ProductId) -> Result<(), MutationError> {
        let remote = &self.inner.remote;
        self.mutate(
            ADD_FAILED,
            |token| async move { remote.add(&token, product_id).await },
            identity,
        )
        .await
    }

    /// Unsaves a product.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub async fn remove(&self, product_id: &ProductId) -> Result<(), MutationError> {
        let remote = &self.inner.remote;
        self.mutate(
            REMOVE_FAILED,
            |token| async move { remote.remove(&token, product_id).await },
            identity,
        )
        .await
    }

    /// Saves the product if it is not saved, unsaves it otherwise.
    ///
    /// Returns whether the product is saved afterwards.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub async fn toggle(&self, product_id: &ProductId) -> Result<bool, MutationError> {
        if self.contains(product_id) {
            self.remove(product_id).await?;
        } else {
            self.add(product_id).await?;
        }
        Ok(self.contains(product_id))
    }
}

impl<R> CollectionStore<Wishlist, R> {
    /// Returns true if the product is saved.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.view(|wishlist| wishlist.contains(product_id))
    }

    /// Number of saved products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.view(|wishlist| wishlist.products.len())
    }
}
