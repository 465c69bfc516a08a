use anyhow::{Context as _, Result, anyhow};
use clap::{Args, ValueEnum};
use luxe_api::{Address, PaymentMethod};
use luxe_core::{OrderSummary, place_order};

use super::cart::print_cart;
use crate::context::Context;
use crate::format;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Payment {
    Card,
    Paypal,
    Cod,
}

impl From<Payment> for PaymentMethod {
    fn from(payment: Payment) -> Self {
        match payment {
            Payment::Card => Self::Card,
            Payment::Paypal => Self::PayPal,
            Payment::Cod => Self::CashOnDelivery,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Street address (defaults to the profile address)
    #[arg(long)]
    street: Option<String>,

    /// City
    #[arg(long)]
    city: Option<String>,

    /// State or region
    #[arg(long)]
    state: Option<String>,

    /// Zip code
    #[arg(long)]
    zip: Option<String>,

    /// Country
    #[arg(long)]
    country: Option<String>,

    /// Payment method
    #[arg(long, value_enum, default_value_t = Payment::Card)]
    payment: Payment,

    /// Only show the price breakdown
    #[arg(long)]
    dry_run: bool,
}

impl CheckoutArgs {
    fn address(self, saved: Option<Address>) -> Address {
        let saved = saved.unwrap_or_default();
        Address {
            street: self.street.unwrap_or(saved.street),
            city: self.city.unwrap_or(saved.city),
            state: self.state.unwrap_or(saved.state),
            zip_code: self.zip.unwrap_or(saved.zip_code),
            country: self.country.unwrap_or(saved.country),
        }
    }
}

pub(crate) async fn place(ctx: &Context, args: CheckoutArgs) -> Result<()> {
    let cart = ctx.cart().await?;
    print_cart(&cart);

    let summary = OrderSummary::from_cart(&cart.snapshot());
    println!("  items     {:>10}", format::money(summary.items_price));
    println!("  tax (8%)  {:>10}", format::money(summary.tax_price));
    println!("  shipping  {:>10}", format::money(summary.shipping_price));
    println!("  total     {:>10}", format::money(summary.total_price));

    if args.dry_run {
        return Ok(());
    }

    let payment = PaymentMethod::from(args.payment);
    let saved = cart.identity().and_then(|identity| identity.user.address);
    let address = args.address(saved);

    let order = place_order(&ctx.client, &cart, address, payment)
        .await
        .map_err(|e| anyhow!(e.message()))?;

    println!(
        "\nOrder #{} placed ({}, {})",
        order.reference(),
        payment.display_name(),
        format::money(order.total_price)
    );
    Ok(())
}

pub(crate) async fn orders(ctx: &Context) -> Result<()> {
    let identity = ctx.require_identity().await?;
    let orders = ctx
        .client
        .my_orders(&identity.token)
        .await
        .context("failed to load orders")?;

    if orders.is_empty() {
        println!("No orders yet");
        return Ok(());
    }
    for order in &orders {
        println!(
            "#{}  {}  {:<10} {:>10}  {} item(s){}",
            order.reference(),
            format::date(order.created_at),
            order.status.as_str(),
            format::money(order.total_price),
            order.order_items.iter().map(|item| item.quantity).sum::<u32>(),
            if order.is_paid { "  paid" } else { "" }
        );
    }
    Ok(())
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Order id
    id: String,
}

pub(crate) async fn order(ctx: &Context, args: OrderArgs) -> Result<()> {
    let identity = ctx.require_identity().await?;
    let order = ctx
        .client
        .order(&identity.token, args.id.trim())
        .await
        .map_err(|error| super::auth::server_error(error.into(), "failed to load order"))?;

    println!(
        "Order #{}  {}  {}{}",
        order.reference(),
        format::date(order.created_at),
        order.status.as_str(),
        if order.is_paid { "  paid" } else { "" }
    );
    for item in &order.order_items {
        println!(
            "  {:<28} x{:<3} {:>10}",
            item.name,
            item.quantity,
            format::money(item.line_total())
        );
    }
    let address = &order.shipping_address;
    println!(
        "  ships to: {}, {}, {} {}, {}",
        address.street, address.city, address.state, address.zip_code, address.country
    );
    println!("  total {:>10}", format::money(order.total_price));
    Ok(())
}
