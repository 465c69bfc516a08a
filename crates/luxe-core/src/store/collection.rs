//! What a store can cache.

use std::collections::{HashMap, HashSet};
use std::fmt;

use luxe_api::{Cart, ProductId, Wishlist};

/// A server-owned, user-scoped collection of product entries.
pub trait Collection: Clone + Default + fmt::Debug + Send + Sync + 'static {
    /// Short name used in logs.
    const KIND: &'static str;

    /// Number of entries (lines, not units).
    fn len(&self) -> usize;

    /// Returns true if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Product ids in display order.
    fn product_ids(&self) -> Vec<&ProductId>;

    /// Returns true if the product has an entry.
    fn contains(&self, product_id: &ProductId) -> bool {
        self.product_ids().contains(&product_id)
    }

    /// Enforces one entry per product (and, for carts, quantity >= 1).
    ///
    /// Returns true if anything had to change.
    fn normalize(&mut self) -> bool;
}

impl Collection for Cart {
    const KIND: &'static str = "cart";

    fn len(&self) -> usize {
        self.items.len()
    }

    fn product_ids(&self) -> Vec<&ProductId> {
        self.items.iter().map(|item| &item.product.id).collect()
    }

    fn contains(&self, product_id: &ProductId) -> bool {
        self.item(product_id).is_some()
    }

    fn normalize(&mut self) -> bool {
        let before = self.items.len();
        let mut seen: HashMap<ProductId, usize> = HashMap::with_capacity(before);
        let mut merged = false;
        let mut items: Vec<luxe_api::CartItem> = Vec::with_capacity(before);

        for item in self.items.drain(..) {
            if item.quantity == 0 {
                continue;
            }
            if let Some(&index) = seen.get(&item.product.id) {
                if let Some(existing) = items.get_mut(index) {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                    merged = true;
                }
                continue;
            }
            seen.insert(item.product.id.clone(), items.len());
            items.push(item);
        }

        self.items = items;
        merged || self.items.len() != before
    }
}

impl Collection for Wishlist {
    const KIND: &'static str = "wishlist";

    fn len(&self) -> usize {
        self.products.len()
    }

    fn product_ids(&self) -> Vec<&ProductId> {
        self.products.iter().map(|entry| &entry.product.id).collect()
    }

    fn contains(&self, product_id: &ProductId) -> bool {
        Self::contains(self, product_id)
    }

    fn normalize(&mut self) -> bool {
        let before = self.products.len();
        let mut seen = HashSet::with_capacity(before);
        self.products.retain(|entry| seen.insert(entry.product.id.clone()));
        self.products.len() != before
    }
}
