//! # luxe-api
//!
//! Typed async client for the Luxe storefront REST backend.
//!
//! ## Features
//!
//! - **Bearer authentication**: every authenticated call takes a [`SessionToken`]
//! - **Full collections**: cart and wishlist mutations return the updated
//!   collection, never a delta
//! - **Server messages**: rejections keep the backend's `message` text
//!   ([`Error::server_message`])
//!
//! ## Quick Start
//!
//! ```ignore
//! use luxe_api::{ApiClient, ClientConfig, Credentials, ProductId};
//!
//! #[tokio::main]
//! async fn main() -> luxe_api::Result<()> {
//!     let client = ApiClient::new(ClientConfig::new("https://shop.example.com/api")?)?;
//!
//!     let session = client
//!         .login(&Credentials { email: "ana@example.com".into(), password: "secret".into() })
//!         .await?;
//!
//!     let cart = client.add_to_cart(&session.token, &ProductId::new("abc"), 1).await?;
//!     println!("{} lines in cart", cart.items.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
pub mod config;
mod endpoints;
mod error;
pub mod token;
pub mod types;

pub use client::ApiClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};
pub use token::SessionToken;
pub use types::{
    Address, AuthSession, Cart, CartItem, Credentials, NewOrder, NewReview, Order, OrderItem,
    OrderStatus, PaymentMethod, Product, ProductId, ProductQuery, ProfileUpdate, Registration,
    Review, StoreSettings, UserProfile, Wishlist, WishlistEntry,
};

pub use reqwest::StatusCode;
