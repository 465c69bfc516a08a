use anyhow::{Context as _, Result};
use clap::Args;
use luxe_api::Registration;
use luxe_core::checkout::{ValidationError, validate_login, validate_registration};
use luxe_core::session::credentials;

use crate::context::Context;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email address
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "LUXE_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    /// Full name
    #[arg(long)]
    name: String,

    /// Account email address
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "LUXE_PASSWORD", hide_env_values = true)]
    password: String,
}

fn reject(errors: &[ValidationError]) -> anyhow::Error {
    let messages: Vec<_> = errors.iter().map(ValidationError::message).collect();
    anyhow::anyhow!("{}", messages.join(", "))
}

/// Prefers the backend's own wording over the local context.
pub(super) fn server_error(error: luxe_core::Error, fallback: &'static str) -> anyhow::Error {
    let message = match &error {
        luxe_core::Error::Api(api) => api.server_message().map(str::to_string),
        _ => None,
    };
    message.map_or_else(
        || anyhow::Error::new(error).context(fallback),
        anyhow::Error::msg,
    )
}

pub(crate) async fn login(ctx: &Context, args: LoginArgs) -> Result<()> {
    validate_login(&args.email, &args.password).map_err(|errors| reject(&errors))?;

    let identity = ctx
        .gate
        .login(&ctx.client, args.email.trim(), &args.password)
        .await
        .map_err(|error| server_error(error, "login failed"))?;

    credentials::store_token(&ctx.profile, &identity.token).context("failed to save session")?;

    println!("Logged in as {} <{}>", identity.user.name, identity.user.email);
    Ok(())
}

pub(crate) async fn register(ctx: &Context, args: RegisterArgs) -> Result<()> {
    validate_registration(&args.name, &args.email, &args.password)
        .map_err(|errors| reject(&errors))?;

    let registration = Registration {
        name: args.name.trim().to_string(),
        email: args.email.trim().to_string(),
        password: args.password,
    };
    let identity = ctx
        .gate
        .register(&ctx.client, &registration)
        .await
        .map_err(|error| server_error(error, "registration failed"))?;

    credentials::store_token(&ctx.profile, &identity.token).context("failed to save session")?;

    println!("Welcome, {} <{}>", identity.user.name, identity.user.email);
    Ok(())
}

pub(crate) fn logout(ctx: &Context) -> Result<()> {
    credentials::delete_token(&ctx.profile).context("failed to delete saved session")?;
    println!("Logged out");
    Ok(())
}

pub(crate) async fn whoami(ctx: &Context) -> Result<()> {
    match ctx.restore().await? {
        Some(identity) => {
            let user = &identity.user;
            println!("{} <{}>", user.name, user.email);
            if user.is_admin() {
                println!("role: admin");
            }
            if let Some(address) = &user.address {
                println!(
                    "ships to: {}, {}, {} {}, {}",
                    address.street, address.city, address.state, address.zip_code, address.country
                );
            }
        }
        None => println!("Not logged in"),
    }
    Ok(())
}
