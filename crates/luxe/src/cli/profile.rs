use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use luxe_api::{Address, ProfileUpdate};

use super::auth;
use crate::context::Context;

#[derive(Debug, Args)]
pub(crate) struct ProfileCommand {
    #[command(subcommand)]
    action: ProfileAction,
}

#[derive(Debug, Subcommand)]
enum ProfileAction {
    /// Show the saved profile
    Show,
    /// Change name, phone, default address or password
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Full name
    #[arg(long)]
    name: Option<String>,

    /// Phone number
    #[arg(long)]
    phone: Option<String>,

    /// Street address
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

    /// New password
    #[arg(long, env = "LUXE_NEW_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl UpdateArgs {
    /// Builds the update, filling unspecified address fields from `saved`.
    fn into_update(self, saved: Option<&Address>) -> ProfileUpdate {
        let touches_address = self.street.is_some()
            || self.city.is_some()
            || self.state.is_some()
            || self.zip.is_some()
            || self.country.is_some();

        let address = touches_address.then(|| {
            let saved = saved.cloned().unwrap_or_default();
            Address {
                street: self.street.unwrap_or(saved.street),
                city: self.city.unwrap_or(saved.city),
                state: self.state.unwrap_or(saved.state),
                zip_code: self.zip.unwrap_or(saved.zip_code),
                country: self.country.unwrap_or(saved.country),
            }
        });

        ProfileUpdate {
            name: self.name,
            phone: self.phone,
            address,
            password: self.password.filter(|password| !password.is_empty()),
        }
    }
}

pub(crate) async fn run(ctx: &Context, command: ProfileCommand) -> Result<()> {
    match command.action {
        ProfileAction::Show => auth::whoami(ctx).await,
        ProfileAction::Update(args) => update(ctx, args).await,
    }
}

async fn update(ctx: &Context, args: UpdateArgs) -> Result<()> {
    let identity = ctx.require_identity().await?;
    let update = args.into_update(identity.user.address.as_ref());
    if update.name.is_none()
        && update.phone.is_none()
        && update.address.is_none()
        && update.password.is_none()
    {
        bail!("nothing to update");
    }

    ctx.gate
        .update_profile(&ctx.client, &update)
        .await
        .map_err(|error| auth::server_error(error, "Failed to update profile"))?;

    println!("Profile updated successfully!");
    auth::whoami(ctx).await
}
