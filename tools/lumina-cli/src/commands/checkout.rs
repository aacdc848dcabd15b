//! Scripted cart session and checkout.

use anyhow::{Context as _, Result};
use lumina_commerce::catalog::Item;
use lumina_commerce::ids::{ItemId, UserId};
use lumina_commerce::ledger::SessionState;
use lumina_commerce::CommerceError;

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let ledger = ctx.ledger();
    let mut session = match args.customer {
        Some(customer) => SessionState::for_customer(UserId::new(customer)),
        None => SessionState::new(),
    };

    for id in &args.add {
        let item = lookup(ctx, id)?;
        let ack = ledger.add_item(&mut session, item)?;
        ctx.output.success(&ack.to_string());
    }

    for id in &args.remove {
        if ledger.remove_item(&mut session, &ItemId::new(id.as_str())) {
            ctx.output.info(&format!("Removed {} from cart", id));
        }
    }

    for id in &args.wishlist {
        let item = lookup(ctx, id)?;
        if ledger.toggle_wishlist(&mut session, &item.id) {
            ctx.output.info(&format!("Saved {} to wishlist", item.title));
        }
    }

    let summary = ledger.compute_summary(session.cart());

    if !ctx.output.is_json() {
        ctx.output.header("Shopping Cart");
        for line in session.cart().lines() {
            ctx.output.list_item(&format!(
                "{} x{} {}",
                line.item.title,
                line.quantity(),
                line.line_total().display()
            ));
        }
        ctx.output.header("Order Summary");
        ctx.output.summary(&summary);
    }

    if args.dry_run {
        if ctx.output.is_json() {
            ctx.output.json(&session);
        }
        return Ok(());
    }

    let order = ledger
        .place_order(&mut session, args.address)
        .context("Checkout failed")?;

    if ctx.output.is_json() {
        ctx.output.json(&session);
        return Ok(());
    }

    ctx.output.header("Order Placed");
    ctx.output.success("Thank you! Your order is being processed.");
    ctx.output.kv("Order", order.id().as_str());
    ctx.output.kv("Customer", order.user_id().as_str());
    ctx.output.kv("Status", &status_badge(order.status()));
    ctx.output.kv("Placed", &order.created_at().format("%Y-%m-%d %H:%M UTC").to_string());
    if !order.shipping_address().is_empty() {
        ctx.output.kv("Ship to", order.shipping_address());
    }
    ctx.output.kv("Total", &order.total().display());

    Ok(())
}

fn lookup<'a>(ctx: &'a Context, id: &str) -> Result<&'a Item> {
    let id = ItemId::new(id);
    ctx.catalog
        .get(&id)
        .ok_or_else(|| CommerceError::ItemNotFound(id).into())
}
