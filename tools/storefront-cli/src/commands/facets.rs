//! Facets command.

use anyhow::Result;
use storefront_core::catalog::CatalogFacets;

use super::FacetsArgs;
use crate::context::Context;
use crate::output::format_price;

/// Run the facets command.
pub fn run(_args: FacetsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let facets = CatalogFacets::derive(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &facets.categories {
        ctx.output
            .list_item(&format!("{} ({})", category.name, category.count));
    }

    ctx.output.header("Prices");
    ctx.output.kv("min", &format_price(facets.price_bounds.min));
    ctx.output.kv("max", &format_price(facets.price_bounds.max));
    ctx.output.kv(
        "available",
        &format!("{} of {}", facets.available, facets.total),
    );
    Ok(())
}
