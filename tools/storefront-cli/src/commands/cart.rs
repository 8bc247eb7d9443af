//! Cart commands.

use anyhow::Result;
use dialoguer::Confirm;
use serde_json::json;
use storefront_core::cart::{hydrate, CartEngine, CartStore, SaveOutcome};

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::format_price;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    match args.command.unwrap_or(CartCommand::Show { hydrate: false }) {
        CartCommand::Show { hydrate } => {
            if hydrate {
                show_hydrated(&cart, ctx)
            } else {
                show(&cart, ctx);
                Ok(())
            }
        }
        CartCommand::Add { item_id, quantity } => {
            let outcome = cart.add_item(item_id.as_str(), quantity);
            report(&outcome, ctx, &format!("Added {} x {}", quantity.max(1), item_id));
            show(&cart, ctx);
            Ok(())
        }
        CartCommand::Remove { item_id } => {
            let was_present = cart.contains(&item_id);
            match removed_message(&item_id, was_present) {
                Some(done) => {
                    let outcome = cart.remove_item(&item_id);
                    report(&outcome, ctx, &done);
                }
                None => ctx.output.info(&format!("{} is not in the cart", item_id)),
            }
            show(&cart, ctx);
            Ok(())
        }
        CartCommand::Set { item_id, quantity } => {
            if quantity <= 0 {
                let was_present = cart.contains(&item_id);
                match removed_message(&item_id, was_present) {
                    Some(done) => {
                        let outcome = cart.set_quantity(item_id.as_str(), quantity);
                        report(&outcome, ctx, &done);
                    }
                    None => ctx.output.info(&format!("{} is not in the cart", item_id)),
                }
            } else {
                let outcome = cart.set_quantity(item_id.as_str(), quantity);
                report(&outcome, ctx, &format!("Set {} to {}", item_id, quantity));
            }
            show(&cart, ctx);
            Ok(())
        }
        CartCommand::Clear { yes } => clear(&mut cart, yes, ctx),
    }
}

fn clear<S: CartStore>(cart: &mut CartEngine<S>, yes: bool, ctx: &Context) -> Result<()> {
    if cart.lines().is_empty() {
        ctx.output.info("Cart is already empty");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} item(s) from the cart?",
                cart.total_item_count()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    let outcome = cart.clear();
    report(&outcome, ctx, "Cart cleared");
    show(cart, ctx);
    Ok(())
}

/// Success line for a removal, or `None` when there was no line to remove.
fn removed_message(item_id: &str, was_present: bool) -> Option<String> {
    was_present.then(|| format!("Removed {}", item_id))
}

/// Surface a save failure without failing the command.
fn report(outcome: &SaveOutcome, ctx: &Context, done: &str) {
    match outcome.warning() {
        None => ctx.output.success(done),
        Some(e) => ctx.output.warn(&format!(
            "{}, but the cart could not be saved and will be lost on exit: {}",
            done, e
        )),
    }
}

fn show<S: CartStore>(cart: &CartEngine<S>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "lines": cart.lines(),
            "totalItemCount": cart.total_item_count(),
        }));
        return;
    }

    ctx.output.header("Cart");
    if cart.lines().is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    let width = cart
        .lines()
        .iter()
        .map(|line| line.item_id.as_str().len())
        .max()
        .unwrap_or(0)
        .max(4);
    ctx.output.table_row(&["ITEM", "QTY"], &[width, 5]);
    for line in cart.lines() {
        ctx.output
            .table_row(&[line.item_id.as_str(), &line.quantity.to_string()], &[width, 5]);
    }
    ctx.output
        .kv("items", &cart.total_item_count().to_string());
}

fn show_hydrated<S: CartStore>(cart: &CartEngine<S>, ctx: &Context) -> Result<()> {
    let lookup = ctx.lookup()?;
    let policy = ctx.config.shipping_policy()?;
    let hydrated = hydrate(cart.lines(), lookup.as_ref());
    let pricing = hydrated.pricing(&policy)?;

    if ctx.output.is_json() {
        let failed: Vec<_> = hydrated
            .failed
            .iter()
            .map(|(id, e)| json!({ "itemId": id, "error": e.to_string() }))
            .collect();
        ctx.output.json(&json!({
            "lines": hydrated.lines,
            "missing": hydrated.missing,
            "failed": failed,
            "pricing": {
                "subtotal": pricing.subtotal.to_decimal(),
                "shipping": pricing.shipping.to_decimal(),
                "total": pricing.total.to_decimal(),
                "currency": policy.currency.code(),
                "itemCount": pricing.item_count,
            },
        }));
        return Ok(());
    }

    ctx.output.header("Cart");
    if cart.lines().is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let width = hydrated
        .lines
        .iter()
        .map(|line| line.item.name.len())
        .max()
        .unwrap_or(0)
        .max(4);
    ctx.output
        .table_row(&["NAME", "QTY", "PRICE", "LINE"], &[width, 5, 10, 10]);
    for line in &hydrated.lines {
        let line_total = line
            .line_total(policy.currency)
            .map(|m| format_price(m.to_decimal()))
            .unwrap_or_else(|| "-".to_string());
        ctx.output.table_row(
            &[
                &line.item.name,
                &line.quantity.to_string(),
                &format_price(line.item.price),
                &line_total,
            ],
            &[width, 5, 10, 10],
        );
    }

    for id in &hydrated.missing {
        ctx.output
            .warn(&format!("{} is no longer in the catalog", id));
    }
    for (id, e) in &hydrated.failed {
        ctx.output
            .warn(&format!("{} is temporarily unavailable: {}", id, e));
    }

    ctx.output.info("");
    ctx.output.kv("subtotal", &pricing.subtotal.to_string());
    if pricing.ships_free() {
        ctx.output.kv("shipping", "free");
    } else {
        ctx.output.kv("shipping", &pricing.shipping.to_string());
        ctx.output.debug(&format!(
            "Orders over {} ship free",
            policy.free_shipping_threshold
        ));
    }
    ctx.output.kv("total", &pricing.total.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_of_absent_item_has_no_success_line() {
        assert_eq!(removed_message("abc", true).as_deref(), Some("Removed abc"));
        assert_eq!(removed_message("abc", false), None);
    }
}
