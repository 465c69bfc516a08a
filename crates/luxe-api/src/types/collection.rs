//! Cart and wishlist payloads.
//!
//! The backend always answers cart and wishlist mutations with the full,
//! updated collection rather than a delta.
//!
//! Lines whose product has since been deleted arrive as `"product": null`.
//! They are dropped while decoding so the rest of the collection survives.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::product::{Product, ProductId};

/// One line of a shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product in the cart.
    pub product: Product,
    /// Units of the product.
    pub quantity: u32,
}

impl CartItem {
    /// Creates a cart line.
    #[must_use]
    pub const fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Price of the whole line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.effective_price() * Decimal::from(self.quantity)
    }
}

/// A user's shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Cart lines in display order.
    #[serde(default, deserialize_with = "cart_lines")]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Returns the line for a product, if present.
    #[must_use]
    pub fn item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product.id == product_id)
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One wishlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    /// The saved product.
    pub product: Product,
}

/// A user's wishlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    /// Saved products in display order.
    #[serde(default, deserialize_with = "wishlist_entries")]
    pub products: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Returns true if the product is saved.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.products
            .iter()
            .any(|entry| &entry.product.id == product_id)
    }

    /// Returns true if nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Deserialize)]
struct WireCartItem {
    #[serde(default)]
    product: Option<Product>,
    quantity: u32,
}

#[derive(Deserialize)]
struct WireWishlistEntry {
    #[serde(default)]
    product: Option<Product>,
}

fn cart_lines<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<CartItem>, D::Error> {
    let lines = Option::<Vec<WireCartItem>>::deserialize(deserializer)?.unwrap_or_default();
    let total = lines.len();
    let items: Vec<CartItem> = lines
        .into_iter()
        .filter_map(|line| line.product.map(|product| CartItem::new(product, line.quantity)))
        .collect();
    if items.len() != total {
        debug!(dropped = total - items.len(), "Cart lines without a product");
    }
    Ok(items)
}

fn wishlist_entries<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<WishlistEntry>, D::Error> {
    let entries = Option::<Vec<WireWishlistEntry>>::deserialize(deserializer)?.unwrap_or_default();
    let total = entries.len();
    let products: Vec<WishlistEntry> = entries
        .into_iter()
        .filter_map(|entry| entry.product.map(|product| WishlistEntry { product }))
        .collect();
    if products.len() != total {
        debug!(dropped = total - products.len(), "Wishlist entries without a product");
    }
    Ok(products)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_deserializes() {
        let json = r#"{
            "_id": "cart1",
            "user": "u1",
            "items": [
                {"product": {"_id": "p1", "price": 100, "discountPrice": 80}, "quantity": 2},
                {"product": {"_id": "p2", "price": 50}, "quantity": 1}
            ]
        }"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].line_total(), Decimal::from(160));
        assert!(cart.item(&ProductId::new("p2")).is_some());
        assert!(cart.item(&ProductId::new("p3")).is_none());
    }

    #[test]
    fn test_cart_without_items_field_is_empty() {
        let cart: Cart = serde_json::from_str("{}").unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_wishlist_contains() {
        let json = r#"{"products": [{"product": {"_id": "p1"}}]}"#;
        let wishlist: Wishlist = serde_json::from_str(json).unwrap();
        assert!(wishlist.contains(&ProductId::new("p1")));
        assert!(!wishlist.contains(&ProductId::new("p9")));
    }

    #[test]
    fn test_cart_line_with_deleted_product_is_dropped() {
        let json = r#"{"items": [
            {"product": null, "quantity": 1},
            {"product": {"_id": "p2", "price": 50}, "quantity": 3}
        ]}"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product.id, ProductId::new("p2"));
        assert_eq!(cart.items[0].quantity, 3);
    }

    #[test]
    fn test_wishlist_entry_with_deleted_product_is_dropped() {
        let json = r#"{"products": [{"product": null}, {}, {"product": {"_id": "p1"}}]}"#;
        let wishlist: Wishlist = serde_json::from_str(json).unwrap();
        assert_eq!(wishlist.products.len(), 1);
        assert!(wishlist.contains(&ProductId::new("p1")));
    }

    #[test]
    fn test_null_items_is_empty_cart() {
        let cart: Cart = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(cart.is_empty());
    }
}
