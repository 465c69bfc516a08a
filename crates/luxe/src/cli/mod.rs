use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::context::{Context, GlobalArgs};

mod auth;
mod cart;
mod catalog;
mod checkout;
mod profile;
mod store_name;
mod wishlist;

#[derive(Debug, Parser)]
#[command(name = "luxe", about = "Luxe storefront CLI", version, long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create an account and remember the session
    Register(auth::RegisterArgs),
    /// Log in and remember the session
    Login(auth::LoginArgs),
    /// Forget the saved session
    Logout,
    /// Show who is logged in
    Whoami,
    /// Show or change the account profile
    Profile(profile::ProfileCommand),
    /// Browse the catalog
    Products(catalog::ProductsArgs),
    /// Show one product with its reviews
    Product(catalog::ProductArgs),
    /// Show or change the cart
    Cart(cart::CartCommand),
    /// Show or change the wishlist
    Wishlist(wishlist::WishlistCommand),
    /// Place an order for the cart
    Checkout(checkout::CheckoutArgs),
    /// List past orders
    Orders,
    /// Show one order
    Order(checkout::OrderArgs),
    /// Show the store display name
    StoreName,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<()> {
        let ctx = Context::new(self.global)?;

        match self.command {
            Commands::Register(args) => auth::register(&ctx, args).await,
            Commands::Login(args) => auth::login(&ctx, args).await,
            Commands::Logout => auth::logout(&ctx),
            Commands::Whoami => auth::whoami(&ctx).await,
            Commands::Profile(command) => profile::run(&ctx, command).await,
            Commands::Products(args) => catalog::list(&ctx, args).await,
            Commands::Product(args) => catalog::show(&ctx, args).await,
            Commands::Cart(command) => cart::run(&ctx, command).await,
            Commands::Wishlist(command) => wishlist::run(&ctx, command).await,
            Commands::Checkout(args) => checkout::place(&ctx, args).await,
            Commands::Orders => checkout::orders(&ctx).await,
            Commands::Order(args) => checkout::order(&ctx, args).await,
            Commands::StoreName => store_name::run(&ctx).await,
        }
    }
}
