//! Catalog listing command.

use anyhow::{bail, Result};
use serde_json::json;
use storefront_core::catalog::{CatalogFacets, CatalogItem};
use storefront_core::search::{evaluate, partition, QueryParameters, ResultSummary};

use super::CatalogArgs;
use crate::context::Context;
use crate::output::{availability_badge, format_price};

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let facets = CatalogFacets::derive(&catalog);
    let params = build_params(&args, &facets)?;

    let results = evaluate(&catalog, &params);
    let summary = ResultSummary::new(&results, &facets);
    let split = partition(&results);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "query": params,
            "summary": summary,
            "featured": split.featured,
            "regular": split.regular,
        }));
        return Ok(());
    }

    ctx.output.info(&format!(
        "Showing {} of {} items ({} available) sorted by {}",
        summary.shown,
        summary.total,
        summary.available,
        params.sort_key.display_name()
    ));

    if results.is_empty() {
        if params.has_active_filters(&facets) {
            ctx.output.info("No items match these filters");
        } else {
            ctx.output.info("The catalog is empty");
        }
        return Ok(());
    }

    let width = results
        .iter()
        .map(|item| item.name.len())
        .max()
        .unwrap_or(0)
        .max(4);

    if !split.featured.is_empty() {
        ctx.output.header("Featured");
        print_items(ctx, &split.featured, width);
    }
    if !split.regular.is_empty() {
        ctx.output.header("All items");
        print_items(ctx, &split.regular, width);
    }
    Ok(())
}

/// Unset price bounds fall back to the catalog's own bounds.
fn build_params(args: &CatalogArgs, facets: &CatalogFacets) -> Result<QueryParameters> {
    let min = args.min.unwrap_or(facets.price_bounds.min);
    let max = args.max.unwrap_or(facets.price_bounds.max);
    if min > max {
        bail!("--min ({}) is greater than --max ({})", min, max);
    }

    let mut params = QueryParameters::for_catalog(facets)
        .with_price_range(min, max)
        .with_sort(args.sort)
        .with_available_only(args.available_only);
    if let Some(term) = &args.search {
        params = params.with_search(term.as_str());
    }
    for category in &args.categories {
        params = params.with_category(category.as_str());
    }
    Ok(params)
}

fn print_items(ctx: &Context, items: &[&CatalogItem], width: usize) {
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", ""], &[8, width, 14, 10, 8]);
    for item in items {
        ctx.output.table_row(
            &[
                item.id.as_str(),
                &item.name,
                &item.category,
                &format_price(item.price),
                &availability_badge(item.is_available),
            ],
            &[8, width, 14, 10, 8],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::search::SortKey;

    fn args() -> CatalogArgs {
        CatalogArgs {
            search: None,
            categories: Vec::new(),
            min: None,
            max: None,
            sort: SortKey::Newest,
            available_only: false,
        }
    }

    fn facets() -> CatalogFacets {
        CatalogFacets::derive(&[
            CatalogItem::new("1", "Tea", 10.0, "Drinks"),
            CatalogItem::new("2", "Cake", 90.0, "Food"),
        ])
    }

    #[test]
    fn test_defaults_are_unfiltered() {
        let facets = facets();
        let params = build_params(&args(), &facets).unwrap();
        assert!(!params.has_active_filters(&facets));
    }

    #[test]
    fn test_flags_map_to_parameters() {
        let mut args = args();
        args.search = Some("tea".into());
        args.categories = vec!["Drinks".into(), "Food".into()];
        args.max = Some(50.0);
        args.sort = SortKey::PriceHigh;

        let params = build_params(&args, &facets()).unwrap();
        assert_eq!(params.search_term, "tea");
        assert_eq!(params.selected_categories.len(), 2);
        assert_eq!(params.price_range.min, 10.0);
        assert_eq!(params.price_range.max, 50.0);
        assert_eq!(params.sort_key, SortKey::PriceHigh);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut args = args();
        args.min = Some(80.0);
        args.max = Some(20.0);
        assert!(build_params(&args, &facets()).is_err());
    }
}
