use anyhow::{Context as _, Result};
use clap::Args;
use luxe_api::{ProductId, ProductQuery};
use rust_decimal::Decimal;
use tracing::warn;

use crate::context::Context;
use crate::format;

#[derive(Debug, Args)]
pub(crate) struct ProductsArgs {
    /// Only this category
    #[arg(long)]
    category: Option<String>,

    /// Only this brand
    #[arg(long)]
    brand: Option<String>,

    /// Free-text search
    #[arg(long)]
    search: Option<String>,

    /// Minimum price
    #[arg(long)]
    min_price: Option<Decimal>,

    /// Maximum price
    #[arg(long)]
    max_price: Option<Decimal>,
}

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product id
    id: String,
}

pub(crate) async fn list(ctx: &Context, args: ProductsArgs) -> Result<()> {
    let query = ProductQuery {
        category: args.category,
        brand: args.brand,
        search: args.search,
        min_price: args.min_price,
        max_price: args.max_price,
    }
    .normalized();

    let products = ctx
        .client
        .products(&query)
        .await
        .context("failed to load products")?;

    if products.is_empty() {
        println!("No products found");
        return Ok(());
    }
    for product in &products {
        println!("{}", format::product_line(product));
    }
    Ok(())
}

pub(crate) async fn show(ctx: &Context, args: ProductArgs) -> Result<()> {
    let id = ProductId::new(args.id);
    let product = ctx
        .client
        .product(&id)
        .await
        .with_context(|| format!("failed to load product {id}"))?;

    println!("{}", product.name);
    if !product.brand.is_empty() {
        println!("by {}", product.brand);
    }
    println!("{}", format::product_line(&product));
    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }

    // Reviews are optional decoration
    match ctx.client.product_reviews(&id).await {
        Ok(reviews) if reviews.is_empty() => println!("\nNo reviews yet"),
        Ok(reviews) => {
            let rating = product
                .rating
                .map_or_else(String::new, |r| format!(" - {r:.1} average"));
            println!("\n{} review(s){rating}", reviews.len());
            for review in &reviews {
                println!("  {}", format::review_line(review));
            }
        }
        Err(e) => warn!(error = %e, "Could not load reviews"),
    }
    Ok(())
}
