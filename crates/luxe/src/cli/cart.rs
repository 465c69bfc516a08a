use anyhow::Result;
use clap::{Args, Subcommand};
use luxe_api::ProductId;
use luxe_core::CartStore;

use crate::context::Context;
use crate::format;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// List cart lines and totals
    Show,
    /// Add units of a product
    Add {
        /// Product id
        product: String,
        /// Units to add
        #[arg(long, short, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a line
    Update {
        /// Product id
        product: String,
        /// New quantity
        quantity: u32,
    },
    /// Remove a line
    Remove {
        /// Product id
        product: String,
    },
    /// Empty the cart
    Clear,
}

pub(crate) async fn run(ctx: &Context, command: CartCommand) -> Result<()> {
    let cart = ctx.cart().await?;

    match command.command {
        CartSubcommand::Show => {}
        CartSubcommand::Add { product, quantity } => {
            cart.add(&ProductId::new(product), quantity).await?;
        }
        CartSubcommand::Update { product, quantity } => {
            cart.update(&ProductId::new(product), quantity).await?;
        }
        CartSubcommand::Remove { product } => {
            cart.remove(&ProductId::new(product)).await?;
        }
        CartSubcommand::Clear => cart.clear().await?,
    }

    print_cart(&cart);
    Ok(())
}

pub(crate) fn print_cart(cart: &CartStore) {
    if !cart.is_authenticated() {
        println!("Not logged in");
        return;
    }

    let contents = cart.snapshot();
    if contents.is_empty() {
        println!("Your cart is empty");
        return;
    }

    for item in &contents.items {
        println!(
            "{:<24} {:<28} x{:<3} {:>10}",
            item.product.id.as_str(),
            item.product.name,
            item.quantity,
            format::money(item.line_total())
        );
    }
    println!(
        "\n{} item(s), total {}",
        cart.count(),
        format::money(cart.total())
    );
}
