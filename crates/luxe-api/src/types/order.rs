//! Order types.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::product::ProductId;
use super::user::Address;

/// Fulfilment status of an order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OrderStatus {
    /// Placed, not yet processed.
    #[default]
    Pending,
    /// Being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Received by the shopper.
    Delivered,
    /// Cancelled.
    Cancelled,
    /// A status this client does not know.
    Other(String),
}

impl OrderStatus {
    /// Parse a status string from the backend.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "Pending" => Self::Pending,
            "Processing" => Self::Processing,
            "Shipped" => Self::Shipped,
            "Delivered" => Self::Delivered,
            "Cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }

    /// Get the status label as sent by the backend.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Other(s) => s,
        }
    }

    /// Returns true once the order can no longer change.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// How the shopper pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Card payment.
    #[default]
    Card,
    /// `PayPal`.
    PayPal,
    /// Cash on delivery.
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Get display name for the payment method.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::PayPal => "PayPal",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// One line of a placed or new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product ordered.
    pub product: ProductId,
    /// Product name at order time.
    #[serde(default)]
    pub name: String,
    /// Units ordered.
    pub quantity: u32,
    /// Image URL at order time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Unit price paid.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl OrderItem {
    /// Price of the whole line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Order submitted at checkout.
///
/// Price aggregates travel as two-decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Lines copied from the cart.
    pub order_items: Vec<OrderItem>,
    /// Where to ship.
    pub shipping_address: Address,
    /// How the shopper pays.
    pub payment_method: PaymentMethod,
    /// Sum of all lines.
    pub items_price: Decimal,
    /// Sales tax.
    pub tax_price: Decimal,
    /// Shipping fee.
    pub shipping_price: Decimal,
    /// Grand total.
    pub total_price: Decimal,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Ordered lines.
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    /// Shipping destination.
    #[serde(default)]
    pub shipping_address: Address,
    /// Payment method.
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// Grand total.
    #[serde(default)]
    pub total_price: Decimal,
    /// Fulfilment status.
    #[serde(default)]
    pub status: OrderStatus,
    /// Whether payment was captured.
    #[serde(default)]
    pub is_paid: bool,
    /// Placement time.
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Short reference shown to shoppers: last 8 characters, upper-cased.
    #[must_use]
    pub fn reference(&self) -> String {
        let start = self.id.char_indices().rev().nth(7).map_or(0, |(i, _)| i);
        self.id.get(start..).unwrap_or_default().to_uppercase()
    }
}
