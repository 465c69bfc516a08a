//! Catalog types.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Backend identifier of a product (`_id` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    /// Create a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A fragrance in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Brand / house.
    #[serde(default)]
    pub brand: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Catalog category.
    #[serde(default)]
    pub category: String,
    /// Bottle size (e.g. "100ml").
    #[serde(default)]
    pub size: String,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// List price.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Sale price, when discounted.
    #[serde(default)]
    pub discount_price: Option<Decimal>,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Average review rating.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of reviews.
    #[serde(default)]
    pub num_reviews: u32,
}

impl Product {
    /// Creates a product with only an id and a list price.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            brand: String::new(),
            description: String::new(),
            category: String::new(),
            size: String::new(),
            image: None,
            price: Some(price),
            discount_price: None,
            stock: 0,
            rating: None,
            num_reviews: 0,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sale price.
    #[must_use]
    pub const fn with_discount_price(mut self, discount: Decimal) -> Self {
        self.discount_price = Some(discount);
        self
    }

    /// Sets the stock level.
    #[must_use]
    pub const fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Price a shopper actually pays for one unit.
    ///
    /// A sale price wins when it is non-zero and below the list price. A
    /// missing list price falls back to the sale price, and a product with
    /// neither costs zero.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        let discount = self.discount_price.filter(|d| !d.is_zero());
        match (self.price, discount) {
            (Some(price), Some(discount)) if discount < price => discount,
            (Some(price), _) => price,
            (None, Some(discount)) => discount,
            (None, None) => Decimal::ZERO,
        }
    }

    /// Returns true if the product is on sale.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.price.is_some_and(|price| self.effective_price() < price)
    }

    /// Returns true if at least one unit is in stock.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Catalog filters sent as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Category filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Brand filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Free-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Lower price bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    /// Upper price bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
}

impl ProductQuery {
    /// Returns true if no filter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.brand.is_none()
            && self.search.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Drops filters that are present but blank.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        self.category = keep(self.category);
        self.brand = keep(self.brand);
        self.search = keep(self.search);
        self
    }
}
