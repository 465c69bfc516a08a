use anyhow::Result;
use luxe_core::StoreBranding;

use crate::context::Context;

pub(crate) async fn run(ctx: &Context) -> Result<()> {
    let branding = StoreBranding::load().await;
    let mut updates = branding.subscribe();

    branding.refresh(&ctx.client).await;
    if updates.has_changed().unwrap_or(false) {
        println!("{} (updated)", *updates.borrow_and_update());
    } else {
        println!("{}", branding.name());
    }
    println!("{}", branding.page_title());
    Ok(())
}
