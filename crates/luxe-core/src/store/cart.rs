//! Shopping cart store.

use std::convert::identity;
use std::time::Duration;

use luxe_api::{ApiClient, Cart, ProductId};
use rust_decimal::Decimal;

use super::error::MutationError;
use super::remote::CartRemote;
use super::CollectionStore;
use crate::time::{SharedClock, SystemClock};

/// How long a fetched cart counts as fresh.
pub const CART_TTL: Duration = Duration::from_secs(30);

const ADD_FAILED: &str = "Failed to add to cart";
const UPDATE_FAILED: &str = "Failed to update cart";
const REMOVE_FAILED: &str = "Failed to remove from cart";
const CLEAR_FAILED: &str = "Failed to clear cart";

/// The shopper's cart.
pub type CartStore<R = ApiClient> = CollectionStore<Cart, R>;

impl<R: CartRemote> CollectionStore<Cart, R> {
    /// Creates a cart store on the system clock.
    #[must_use]
    pub fn new(remote: R) -> Self {
        Self::with_clock(remote, SystemClock::shared())
    }

    /// Creates a cart store on the given clock.
    #[must_use]
    pub fn with_clock(remote: R, clock: SharedClock) -> Self {
        Self::with_ttl(remote, CART_TTL, clock)
    }

    /// Adds units of a product. The server merges into an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::InvalidQuantity`] for a zero quantity,
    /// [`MutationError::NotAuthenticated`] when signed out, otherwise the
    /// server's rejection or a generic failure.
    pub async fn add(&self, product_id: &ProductId, quantity: u32) -> Result<(), MutationError> {
        if quantity == 0 {
            return Err(MutationError::InvalidQuantity);
        }
        let remote = &self.inner.remote;
        self.mutate(
            ADD_FAILED,
            |token| async move { remote.add(&token, product_id, quantity).await },
            identity,
        )
        .await
    }

    /// Sets the quantity of an existing line.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub async fn update(&self, product_id: &ProductId, quantity: u32) -> Result<(), MutationError> {
        if quantity == 0 {
            return Err(MutationError::InvalidQuantity);
        }
        let remote = &self.inner.remote;
        self.mutate(
            UPDATE_FAILED,
            |token| async move { remote.update(&token, product_id, quantity).await },
            identity,
        )
        .await
    }

    /// Removes a line.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::NotAuthenticated`] when signed out,
    /// otherwise the server's rejection or a generic failure.
    pub async fn remove(&self, product_id: &ProductId) -> Result<(), MutationError> {
        let remote = &self.inner.remote;
        self.mutate(
            REMOVE_FAILED,
            |token| async move { remote.remove(&token, product_id).await },
            identity,
        )
        .await
    }

    /// Empties the cart. On success the cached cart is empty without
    /// waiting for a payload.
    ///
    /// # Errors
    ///
    /// Same as [`remove`](Self::remove).
    pub async fn clear(&self) -> Result<(), MutationError> {
        let remote = &self.inner.remote;
        self.mutate(
            CLEAR_FAILED,
            |token| async move { remote.clear(&token).await },
            |()| Cart::default(),
        )
        .await
    }
}

impl<R> CollectionStore<Cart, R> {
    /// Total units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.view(|cart| {
            cart.items
                .iter()
                .fold(0, |sum: u32, item| sum.saturating_add(item.quantity))
        })
    }

    /// Sum of `quantity * effective price` over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.view(|cart| cart.items.iter().map(luxe_api::CartItem::line_total).sum())
    }

    /// Units of a product in the cart, zero if absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.view(|cart| cart.item(product_id).map_or(0, |item| item.quantity))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use luxe_api::{CartItem, Product, SessionToken, UserProfile};

    use super::*;
    use crate::session::Identity;
    use crate::store::CollectionRemote;
    use crate::time::MockClock;

    /// Remote that always answers with the same cart, or always fails.
    struct Fixed {
        cart: Cart,
        fail: bool,
    }

    impl Fixed {
        fn answer(&self) -> luxe_api::Result<Cart> {
            if self.fail {
                Err(luxe_api::Error::api(
                    luxe_api::StatusCode::BAD_REQUEST,
                    Some("Insufficient stock".into()),
                ))
            } else {
                Ok(self.cart.clone())
            }
        }
    }

    impl CollectionRemote<Cart> for Fixed {
        async fn fetch(&self, _token: &SessionToken) -> luxe_api::Result<Cart> {
            self.answer()
        }
    }

    impl CartRemote for Fixed {
        async fn add(&self, _: &SessionToken, _: &ProductId, _: u32) -> luxe_api::Result<Cart> {
            self.answer()
        }

        async fn update(&self, _: &SessionToken, _: &ProductId, _: u32) -> luxe_api::Result<Cart> {
            self.answer()
        }

        async fn remove(&self, _: &SessionToken, _: &ProductId) -> luxe_api::Result<Cart> {
            self.answer()
        }

        async fn clear(&self, _: &SessionToken) -> luxe_api::Result<()> {
            self.answer().map(|_| ())
        }
    }

    fn priced_cart() -> Cart {
        Cart {
            items: vec![
                CartItem::new(
                    Product::new("a", Decimal::from(100)).with_discount_price(Decimal::from(80)),
                    2,
                ),
                CartItem::new(Product::new("b", Decimal::from(50)), 1),
            ],
        }
    }

    async fn signed_in(remote: Fixed) -> CartStore<Fixed> {
        let store = CartStore::<Fixed>::with_clock(remote, MockClock::shared());
        store
            .on_identity_changed(Some(Identity::new(
                UserProfile {
                    id: "u1".into(),
                    ..UserProfile::default()
                },
                SessionToken::new("t"),
            )))
            .await;
        store
    }

    #[tokio::test]
    async fn test_derived_totals() {
        let store = signed_in(Fixed {
            cart: priced_cart(),
            fail: false,
        })
        .await;

        assert_eq!(store.total(), Decimal::from(210));
        assert_eq!(store.count(), 3);
        assert_eq!(store.quantity_of(&ProductId::new("a")), 2);
        assert_eq!(store.quantity_of(&ProductId::new("zzz")), 0);
    }

    #[tokio::test]
    async fn test_missing_price_counts_as_zero() {
        let mut product = Product::new("free", Decimal::ZERO);
        product.price = None;
        let store = signed_in(Fixed {
            cart: Cart {
                items: vec![CartItem::new(product, 4)],
            },
            fail: false,
        })
        .await;

        assert_eq!(store.total(), Decimal::ZERO);
        assert_eq!(store.count(), 4);
    }

    #[tokio::test]
    async fn test_zero_quantity_rejected_locally() {
        let store = signed_in(Fixed {
            cart: priced_cart(),
            fail: true,
        })
        .await;

        let err = store.update(&ProductId::new("a"), 0).await.unwrap_err();
        assert_eq!(err, MutationError::InvalidQuantity);
        let err = store.add(&ProductId::new("a"), 0).await.unwrap_err();
        assert_eq!(err, MutationError::InvalidQuantity);
    }

    #[tokio::test]
    async fn test_signed_out_mutation_fails_fast() {
        let store = CartStore::<Fixed>::with_clock(
            Fixed {
                cart: priced_cart(),
                fail: false,
            },
            MockClock::shared(),
        );

        let err = store.add(&ProductId::new("a"), 1).await.unwrap_err();
        assert_eq!(err, MutationError::NotAuthenticated);
        assert_eq!(store.clear().await.unwrap_err(), MutationError::NotAuthenticated);
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_rejection_keeps_server_message() {
        let store = signed_in(Fixed {
            cart: priced_cart(),
            fail: true,
        })
        .await;

        let err = store.add(&ProductId::new("a"), 5).await.unwrap_err();
        assert_eq!(err.message(), "Insufficient stock");
    }

    #[tokio::test]
    async fn test_clear_empties_without_payload() {
        let store = signed_in(Fixed {
            cart: priced_cart(),
            fail: false,
        })
        .await;
        assert_eq!(store.count(), 3);

        store.clear().await.unwrap();
        assert!(store.snapshot().is_empty());
        assert_eq!(store.total(), Decimal::ZERO);
    }
}
