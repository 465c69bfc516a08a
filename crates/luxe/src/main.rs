//! Luxe - command-line client for the Luxe fragrance storefront.

mod cli;
mod context;
mod format;

use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luxe=info,luxe_core=info,luxe_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(error) = cli.run().await {
        eprintln!("error: {error:#}");
        process::exit(1);
    }
}
