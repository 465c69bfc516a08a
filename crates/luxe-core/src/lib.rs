//! # luxe-core
//!
//! Client-side state for the Luxe storefront.
//!
//! This crate provides:
//! - **Collection stores**: [`CartStore`] and [`WishlistStore`] cache the
//!   shopper's server-owned collections with a TTL and replace them with the
//!   server's answer after every mutation
//! - **Session gate**: [`SessionGate`] publishes sign-in and sign-out so
//!   stores clear or refetch
//! - **Checkout**: order pricing, address validation and placement
//! - **Branding**: the store display name, cached on disk and observable
//!
//! ## Example
//!
//! ```ignore
//! use luxe_api::{ApiClient, ProductId};
//! use luxe_core::{CartStore, SessionGate};
//!
//! let client = ApiClient::from_env()?;
//! let gate = SessionGate::new();
//! let cart = CartStore::new(client.clone());
//! let _subscription = cart.watch_session(&gate);
//!
//! gate.login(&client, "ana@example.com", "secret").await?;
//! cart.fetch(false).await;
//! cart.add(&ProductId::new("abc"), 1).await?;
//! println!("{} items, {}", cart.count(), cart.total());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod branding;
pub mod cache;
pub mod checkout;
mod error;
pub mod session;
pub mod store;
pub mod time;

pub use branding::{DEFAULT_STORE_NAME, StoreBranding};
pub use cache::{Cached, FetchStamp};
pub use checkout::{CheckoutError, OrderSummary, ValidationError, place_order};
pub use error::{Error, Result};
pub use session::credentials::{CredentialError, CredentialResult};
pub use session::{Identity, SessionGate};
pub use store::{
    CART_TTL, CartRemote, CartStore, Collection, CollectionRemote, CollectionStore,
    MutationError, SessionSubscription, WISHLIST_TTL, WishlistRemote, WishlistStore,
};
pub use time::{Clock, MockClock, SharedClock, SystemClock};
