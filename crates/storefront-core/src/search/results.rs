//! Evaluation, ordering and grouping of listing results.

use crate::catalog::{CatalogFacets, CatalogItem};
use crate::search::{Predicate, QueryParameters, SortKey};
use serde::Serialize;

/// Filter `catalog` by `params` and order the survivors by `params.sort_key`.
///
/// Pure and deterministic: ties keep their relative catalog order.
pub fn evaluate(catalog: &[CatalogItem], params: &QueryParameters) -> Vec<CatalogItem> {
    let predicate = Predicate::new(params);
    let mut items: Vec<CatalogItem> = catalog
        .iter()
        .filter(|item| predicate.matches(item))
        .cloned()
        .collect();
    sort_items(&mut items, params.sort_key);

    tracing::debug!(
        total = catalog.len(),
        shown = items.len(),
        sort = params.sort_key.as_str(),
        "evaluated catalog query"
    );
    items
}

/// Stable sort by `key`.
pub fn sort_items(items: &mut [CatalogItem], key: SortKey) {
    items.sort_by(|a, b| key.compare(a, b));
}

/// Featured and regular groups of an evaluated listing, each in listing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Partition<'a> {
    pub featured: Vec<&'a CatalogItem>,
    pub regular: Vec<&'a CatalogItem>,
}

/// Split `items` by [`CatalogItem::is_featured`].
pub fn partition(items: &[CatalogItem]) -> Partition<'_> {
    let (featured, regular): (Vec<_>, Vec<_>) = items.iter().partition(|item| item.is_featured());
    Partition { featured, regular }
}

/// The counters shown above a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    /// Items passing the current filters.
    pub shown: usize,
    /// Items in the full catalog.
    pub total: usize,
    /// Shown items that are available.
    pub available: usize,
    /// Shown items that are featured.
    pub featured: usize,
}

impl ResultSummary {
    pub fn new(results: &[CatalogItem], facets: &CatalogFacets) -> Self {
        Self {
            shown: results.len(),
            total: facets.total,
            available: results.iter().filter(|i| i.is_available).count(),
            featured: results.iter().filter(|i| i.is_featured()).count(),
        }
    }

    /// True when filters hide part of the catalog.
    pub fn is_narrowed(&self) -> bool {
        self.shown != self.total
    }
}
