//! Terminal formatting helpers.

use chrono::{DateTime, Utc};
use luxe_api::{Product, Review};
use rust_decimal::Decimal;

pub(crate) fn money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

pub(crate) fn date(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(|| "-".to_string(), |at| at.format("%Y-%m-%d").to_string())
}

/// One-line product summary: name, brand, price and stock.
pub(crate) fn product_line(product: &Product) -> String {
    let price = if product.is_discounted() {
        format!(
            "{} (was {})",
            money(product.effective_price()),
            money(product.price.unwrap_or_default())
        )
    } else {
        money(product.effective_price())
    };
    let stock = if product.in_stock() {
        format!("{} in stock", product.stock)
    } else {
        "out of stock".to_string()
    };

    format!(
        "{:<24} {:<28} {:<16} {:>20}  {stock}",
        product.id.as_str(),
        product.name,
        product.brand,
        price
    )
}

pub(crate) fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "*".repeat(filled), ".".repeat(5 - filled))
}

pub(crate) fn review_line(review: &Review) -> String {
    format!(
        "{} {} - {} ({})\n    {}",
        stars(review.rating),
        review.title,
        review.name.as_deref().unwrap_or("Anonymous"),
        date(review.created_at),
        review.comment
    )
}
