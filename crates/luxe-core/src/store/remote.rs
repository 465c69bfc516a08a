//! The server side of a store, as the store sees it.
//!
//! [`ApiClient`] is the production implementation; tests substitute an
//! in-memory shop.

use std::future::Future;

use luxe_api::{ApiClient, Cart, ProductId, SessionToken, Wishlist};

use super::collection::Collection;

/// Fetches the authoritative copy of a collection.
pub trait CollectionRemote<C: Collection>: Send + Sync + 'static {
    /// Returns the full collection for the token's owner.
    fn fetch(&self, token: &SessionToken) -> impl Future<Output = luxe_api::Result<C>> + Send;
}

/// Cart mutations. Every mutation answers with the full updated cart.
pub trait CartRemote: CollectionRemote<Cart> {
    /// Adds units of a product.
    fn add(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
        quantity: u32,
    ) -> impl Future<Output = luxe_api::Result<Cart>> + Send;

    /// Sets the quantity of a line.
    fn update(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
        quantity: u32,
    ) -> impl Future<Output = luxe_api::Result<Cart>> + Send;

    /// Removes a line.
    fn remove(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
    ) -> impl Future<Output = luxe_api::Result<Cart>> + Send;

    /// Empties the cart. No collection comes back.
    fn clear(&self, token: &SessionToken) -> impl Future<Output = luxe_api::Result<()>> + Send;
}

/// Wishlist mutations. Every mutation answers with the full updated
/// wishlist.
pub trait WishlistRemote: CollectionRemote<Wishlist> {
    /// Saves a product.
    fn add(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
    ) -> impl Future<Output = luxe_api::Result<Wishlist>> + Send;

    /// Unsaves a product.
    fn remove(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
    ) -> impl Future<Output = luxe_api::Result<Wishlist>> + Send;
}

impl CollectionRemote<Cart> for ApiClient {
    async fn fetch(&self, token: &SessionToken) -> luxe_api::Result<Cart> {
        self.get_cart(token).await
    }
}

impl CartRemote for ApiClient {
    async fn add(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
        quantity: u32,
    ) -> luxe_api::Result<Cart> {
        self.add_to_cart(token, product_id, quantity).await
    }

    async fn update(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
        quantity: u32,
    ) -> luxe_api::Result<Cart> {
        self.update_cart_item(token, product_id, quantity).await
    }

    async fn remove(&self, token: &SessionToken, product_id: &ProductId) -> luxe_api::Result<Cart> {
        self.remove_cart_item(token, product_id).await
    }

    async fn clear(&self, token: &SessionToken) -> luxe_api::Result<()> {
        self.clear_cart(token).await
    }
}

impl CollectionRemote<Wishlist> for ApiClient {
    async fn fetch(&self, token: &SessionToken) -> luxe_api::Result<Wishlist> {
        self.get_wishlist(token).await
    }
}

impl WishlistRemote for ApiClient {
    async fn add(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
    ) -> luxe_api::Result<Wishlist> {
        self.add_to_wishlist(token, product_id).await
    }

    async fn remove(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
    ) -> luxe_api::Result<Wishlist> {
        self.remove_from_wishlist(token, product_id).await
    }
}
