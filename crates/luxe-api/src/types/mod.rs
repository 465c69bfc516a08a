//! Wire types exchanged with the storefront backend.

mod collection;
mod order;
mod product;
mod review;
mod user;

pub use collection::{Cart, CartItem, Wishlist, WishlistEntry};
pub use order::{NewOrder, Order, OrderItem, OrderStatus, PaymentMethod};
pub use product::{Product, ProductId, ProductQuery};
pub use review::{NewReview, Review};
pub use user::{Address, AuthSession, Credentials, ProfileUpdate, Registration, UserProfile};

use serde::{Deserialize, Serialize};

/// `{ "data": ... }` wrapper used by most endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Payload.
    pub data: T,
}

/// `{ "message": ... }` body carried by error responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    #[serde(default)]
    pub message: Option<String>,
}

/// Public storefront settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    /// Display name of the shop.
    #[serde(default)]
    pub store_name: Option<String>,
}
