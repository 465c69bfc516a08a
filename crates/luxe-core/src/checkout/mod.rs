//! Order pricing and placement.

mod validation;

pub use validation::{
    ValidationError, ValidationResult, validate_address, validate_login, validate_registration,
};

use luxe_api::{Address, ApiClient, Cart, NewOrder, Order, OrderItem, PaymentMethod};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{info, warn};

use crate::store::{CartRemote, CartStore};

/// Sales tax applied to the items price.
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Flat shipping fee.
pub const SHIPPING_PRICE: Decimal = Decimal::from_parts(1000, 0, 0, false, 2);

const ORDER_FAILED: &str = "Failed to place order";

/// Price breakdown shown before an order is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of all cart lines.
    pub items_price: Decimal,
    /// Tax on the items price.
    pub tax_price: Decimal,
    /// Shipping fee.
    pub shipping_price: Decimal,
    /// Everything together.
    pub total_price: Decimal,
}

impl OrderSummary {
    /// Prices a cart. Every amount is rounded to cents.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        let items_price: Decimal = cart.items.iter().map(luxe_api::CartItem::line_total).sum();
        let tax_price = items_price * TAX_RATE;
        let total_price = items_price + tax_price + SHIPPING_PRICE;

        Self {
            items_price: cents(items_price),
            tax_price: cents(tax_price),
            shipping_price: cents(SHIPPING_PRICE),
            total_price: cents(total_price),
        }
    }
}

fn cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Why an order was not placed.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("Your cart is empty")]
    EmptyCart,

    /// No shopper is signed in.
    #[error("Please log in to continue")]
    NotAuthenticated,

    /// The shipping address is incomplete.
    #[error("Invalid shipping address: {}", .0.iter().map(ValidationError::message).collect::<Vec<_>>().join(", "))]
    InvalidAddress(Vec<ValidationError>),

    /// The backend refused or could not be reached.
    #[error("Failed to place order: {0}")]
    Api(#[from] luxe_api::Error),
}

impl CheckoutError {
    /// User-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api(e) => e.server_message().unwrap_or(ORDER_FAILED).to_string(),
            other => other.to_string(),
        }
    }
}

/// Builds the order payload for a cart.
#[must_use]
pub fn new_order(cart: &Cart, address: Address, payment_method: PaymentMethod) -> NewOrder {
    let summary = OrderSummary::from_cart(cart);
    let order_items = cart
        .items
        .iter()
        .map(|item| OrderItem {
            product: item.product.id.clone(),
            name: item.product.name.clone(),
            quantity: item.quantity,
            image: item.product.image.clone(),
            price: item.product.effective_price(),
        })
        .collect();

    NewOrder {
        order_items,
        shipping_address: address,
        payment_method,
        items_price: summary.items_price,
        tax_price: summary.tax_price,
        shipping_price: summary.shipping_price,
        total_price: summary.total_price,
    }
}

/// Places an order for the cart's current contents and empties the cart.
///
/// A failure to empty the cart afterwards is logged; the order stands.
///
/// # Errors
///
/// Returns an error if the cart is empty, nobody is signed in, the address
/// is incomplete or the backend rejects the order.
pub async fn place_order<R: CartRemote>(
    client: &ApiClient,
    cart: &CartStore<R>,
    address: Address,
    payment_method: PaymentMethod,
) -> Result<Order, CheckoutError> {
    let identity = cart.identity().ok_or(CheckoutError::NotAuthenticated)?;
    let contents = cart.snapshot();
    if contents.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    validate_address(&address).map_err(CheckoutError::InvalidAddress)?;

    let order = client
        .create_order(&identity.token, &new_order(&contents, address, payment_method))
        .await?;
    info!(order = %order.reference(), "Order placed");

    if let Err(e) = cart.clear().await {
        warn!(error = %e, "Order placed but cart could not be cleared");
    }
    Ok(order)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use luxe_api::{CartItem, Product};

    use super::*;

    fn cart() -> Cart {
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

    #[test]
    fn test_constants() {
        assert_eq!(TAX_RATE.to_string(), "0.08");
        assert_eq!(SHIPPING_PRICE.to_string(), "10.00");
    }

    #[test]
    fn test_summary() {
        let summary = OrderSummary::from_cart(&cart());
        assert_eq!(summary.items_price, Decimal::from(210));
        assert_eq!(summary.tax_price.to_string(), "16.80");
        assert_eq!(summary.shipping_price.to_string(), "10.00");
        assert_eq!(summary.total_price.to_string(), "236.80");
    }

    #[test]
    fn test_tax_rounds_half_up() {
        let cart = Cart {
            items: vec![CartItem::new(Product::new("x", Decimal::new(19_375, 4)), 1)],
        };
        // 1.9375 * 0.08 = 0.155
        assert_eq!(OrderSummary::from_cart(&cart).tax_price.to_string(), "0.16");
    }

    #[test]
    fn test_new_order_lines_use_effective_price() {
        let order = new_order(&cart(), Address::default(), PaymentMethod::Card);
        assert_eq!(order.order_items.len(), 2);
        assert_eq!(order.order_items[0].price, Decimal::from(80));
        assert_eq!(order.order_items[0].quantity, 2);
        assert_eq!(order.total_price.to_string(), "236.80");
    }

    #[test]
    fn test_api_error_message() {
        let err = CheckoutError::from(luxe_api::Error::api(
            luxe_api::StatusCode::BAD_REQUEST,
            Some("Out of stock".into()),
        ));
        assert_eq!(err.message(), "Out of stock");

        let err = CheckoutError::from(luxe_api::Error::api(
            luxe_api::StatusCode::INTERNAL_SERVER_ERROR,
            None,
        ));
        assert_eq!(err.message(), ORDER_FAILED);
    }

    #[test]
    fn test_invalid_address_message() {
        let err = CheckoutError::InvalidAddress(vec![
            ValidationError::EmptyCity,
            ValidationError::EmptyZipCode,
        ]);
        assert_eq!(
            err.message(),
            "Invalid shipping address: City is required, Zip code is required"
        );
    }
}
