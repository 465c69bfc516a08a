use anyhow::Result;
use clap::{Args, Subcommand};
use luxe_api::ProductId;

use crate::context::Context;
use crate::format;

#[derive(Debug, Args)]
pub(crate) struct WishlistCommand {
    #[command(subcommand)]
    command: WishlistSubcommand,
}

#[derive(Debug, Subcommand)]
enum WishlistSubcommand {
    /// List saved products
    Show,
    /// Save a product
    Add {
        /// Product id
        product: String,
    },
    /// Unsave a product
    Remove {
        /// Product id
        product: String,
    },
    /// Save or unsave a product
    Toggle {
        /// Product id
        product: String,
    },
}

pub(crate) async fn run(ctx: &Context, command: WishlistCommand) -> Result<()> {
    let wishlist = ctx.wishlist().await?;

    match command.command {
        WishlistSubcommand::Show => {}
        WishlistSubcommand::Add { product } => wishlist.add(&ProductId::new(product)).await?,
        WishlistSubcommand::Remove { product } => {
            wishlist.remove(&ProductId::new(product)).await?;
        }
        WishlistSubcommand::Toggle { product } => {
            let id = ProductId::new(product);
            if wishlist.toggle(&id).await? {
                println!("Saved {id}");
            } else {
                println!("Removed {id}");
            }
        }
    }

    if !wishlist.is_authenticated() {
        println!("Not logged in");
        return Ok(());
    }
    let saved = wishlist.snapshot();
    if saved.is_empty() {
        println!("Your wishlist is empty");
        return Ok(());
    }
    for entry in &saved.products {
        println!("{}", format::product_line(&entry.product));
    }
    println!("\n{} saved", wishlist.count());
    Ok(())
}
