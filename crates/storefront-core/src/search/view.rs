//! Live listing state.

use crate::catalog::{CatalogFacets, CatalogItem};
use crate::search::{evaluate, partition, Partition, QueryParameters, ResultSummary};

/// A catalog together with the visitor's current query and its evaluated result.
///
/// Results are recomputed eagerly, and only when the inputs actually change,
/// so a burst of identical updates costs one evaluation and there is never a
/// backlog of stale ones.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Vec<CatalogItem>,
    facets: CatalogFacets,
    params: QueryParameters,
    results: Vec<CatalogItem>,
    evaluations: u64,
}

impl CatalogView {
    /// Build a view with cleared filters.
    pub fn new(catalog: Vec<CatalogItem>) -> Self {
        let facets = CatalogFacets::derive(&catalog);
        let params = QueryParameters::for_catalog(&facets);
        let results = evaluate(&catalog, &params);
        Self {
            catalog,
            facets,
            params,
            results,
            evaluations: 1,
        }
    }

    /// Replace the query. Returns whether the results were recomputed.
    pub fn set_params(&mut self, params: QueryParameters) -> bool {
        if params == self.params {
            return false;
        }
        self.params = params;
        self.refresh();
        true
    }

    /// Edit the current query in place.
    pub fn update(&mut self, edit: impl FnOnce(&mut QueryParameters)) -> bool {
        let mut params = self.params.clone();
        edit(&mut params);
        self.set_params(params)
    }

    /// Swap in a new catalog. Facets are re-derived and the price range is
    /// reseeded to the new bounds; other filters are kept.
    pub fn set_catalog(&mut self, catalog: Vec<CatalogItem>) {
        self.catalog = catalog;
        self.facets = CatalogFacets::derive(&self.catalog);
        self.params.price_range = self.facets.price_bounds;
        self.refresh();
    }

    /// Clear every filter and restore the default ordering.
    pub fn clear_filters(&mut self) -> bool {
        self.set_params(QueryParameters::for_catalog(&self.facets))
    }

    pub fn has_active_filters(&self) -> bool {
        self.params.has_active_filters(&self.facets)
    }

    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    pub fn facets(&self) -> &CatalogFacets {
        &self.facets
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    pub fn results(&self) -> &[CatalogItem] {
        &self.results
    }

    pub fn partition(&self) -> Partition<'_> {
        partition(&self.results)
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(&self.results, &self.facets)
    }

    /// How many times the query has been evaluated.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    fn refresh(&mut self) {
        self.results = evaluate(&self.catalog, &self.params);
        self.evaluations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SortKey;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("1", "Latte", 45.0, "Drinks").with_priority(1),
            CatalogItem::new("2", "Bagel", 30.0, "Bakery").with_priority(5),
            CatalogItem::new("3", "Mocha", 55.0, "Drinks")
                .with_priority(2)
                .with_availability(false),
        ]
    }

    #[test]
    fn test_new_view_shows_everything() {
        let view = CatalogView::new(catalog());
        assert_eq!(view.results().len(), 3);
        assert!(!view.has_active_filters());
        assert_eq!(view.params().price_range, view.facets().price_bounds);
    }

    #[test]
    fn test_identical_params_do_not_recompute() {
        let mut view = CatalogView::new(catalog());
        let before = view.evaluations();

        assert!(!view.set_params(view.params().clone()));
        assert!(!view.update(|_| {}));
        assert_eq!(view.evaluations(), before);

        assert!(view.update(|p| p.search_term = "mocha".into()));
        assert_eq!(view.evaluations(), before + 1);
        assert_eq!(view.results().len(), 1);
    }

    #[test]
    fn test_clear_filters() {
        let mut view = CatalogView::new(catalog());
        view.update(|p| {
            p.toggle_category("Bakery");
            p.sort_key = SortKey::PriceHigh;
        });
        assert!(view.has_active_filters());
        assert_eq!(view.results().len(), 1);

        assert!(view.clear_filters());
        assert!(!view.has_active_filters());
        assert_eq!(view.results().len(), 3);
    }

    #[test]
    fn test_set_catalog_reseeds_price_range() {
        let mut view = CatalogView::new(catalog());
        view.update(|p| p.available_only = true);

        view.set_catalog(vec![
            CatalogItem::new("9", "Cake", 400.0, "Bakery"),
            CatalogItem::new("8", "Cookie", 15.0, "Bakery").with_availability(false),
        ]);

        assert_eq!(view.params().price_range.max, 400.0);
        assert!(view.params().available_only);
        assert_eq!(view.results().len(), 1);
        assert_eq!(view.facets().total, 2);
    }

    #[test]
    fn test_partition_and_summary() {
        let view = CatalogView::new(catalog());
        let groups = view.partition();
        assert_eq!(groups.featured.len(), 1);
        assert_eq!(groups.regular.len(), 2);

        let summary = view.summary();
        assert_eq!(summary.shown, 3);
        assert_eq!(summary.featured, 1);
        assert_eq!(summary.available, 2);
        assert!(!summary.is_narrowed());
    }
}
