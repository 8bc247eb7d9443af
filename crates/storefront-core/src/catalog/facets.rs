//! Facet derivation for filter controls.

use crate::catalog::CatalogItem;
use crate::search::PriceRange;
use serde::Serialize;
use std::collections::BTreeMap;

/// Price bounds reported for a catalog with no items.
pub const EMPTY_CATALOG_PRICE_BOUNDS: PriceRange = PriceRange {
    min: 0.0,
    max: 1000.0,
};

/// A category present in the catalog and how many items carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFacet {
    pub name: String,
    pub count: usize,
}

/// Summaries of the full, unfiltered catalog used to populate filter controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogFacets {
    /// Distinct non-empty categories in ascending order.
    pub categories: Vec<CategoryFacet>,
    /// Cheapest and most expensive prices in the catalog.
    pub price_bounds: PriceRange,
    /// Number of available items.
    pub available: usize,
    /// Number of items in the catalog.
    pub total: usize,
}

impl CatalogFacets {
    pub fn derive(catalog: &[CatalogItem]) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for item in catalog.iter().filter(|i| !i.category.is_empty()) {
            *counts.entry(item.category.as_str()).or_default() += 1;
        }

        let price_bounds = catalog
            .iter()
            .map(|i| i.price)
            .fold(None, |bounds: Option<PriceRange>, price| {
                Some(match bounds {
                    None => PriceRange::new(price, price),
                    Some(b) => PriceRange::new(b.min.min(price), b.max.max(price)),
                })
            })
            .unwrap_or(EMPTY_CATALOG_PRICE_BOUNDS);

        Self {
            categories: counts
                .into_iter()
                .map(|(name, count)| CategoryFacet {
                    name: name.to_string(),
                    count,
                })
                .collect(),
            price_bounds,
            available: catalog.iter().filter(|i| i.is_available).count(),
            total: catalog.len(),
        }
    }

    /// Item count for `category`, zero when absent.
    pub fn count_for(&self, category: &str) -> usize {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map_or(0, |c| c.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("1", "Latte", 45.0, "Drinks"),
            CatalogItem::new("2", "Bagel", 30.0, "Bakery").with_availability(false),
            CatalogItem::new("3", "Mocha", 55.0, "Drinks"),
            CatalogItem::new("4", "Mystery", 5.0, ""),
        ]
    }

    #[test]
    fn test_category_counts_sorted() {
        let facets = CatalogFacets::derive(&catalog());
        assert_eq!(
            facets.categories,
            vec![
                CategoryFacet {
                    name: "Bakery".into(),
                    count: 1
                },
                CategoryFacet {
                    name: "Drinks".into(),
                    count: 2
                },
            ]
        );
        assert_eq!(facets.count_for("Drinks"), 2);
        assert_eq!(facets.count_for("Toys"), 0);
    }

    #[test]
    fn test_price_bounds_cover_full_catalog() {
        let facets = CatalogFacets::derive(&catalog());
        assert_eq!(facets.price_bounds, PriceRange::new(5.0, 55.0));
        assert_eq!(facets.available, 3);
        assert_eq!(facets.total, 4);
    }

    #[test]
    fn test_empty_catalog() {
        let facets = CatalogFacets::derive(&[]);
        assert!(facets.categories.is_empty());
        assert_eq!(facets.price_bounds, EMPTY_CATALOG_PRICE_BOUNDS);
        assert_eq!(facets.total, 0);
    }
}
