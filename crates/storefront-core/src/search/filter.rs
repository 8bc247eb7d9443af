//! Filter predicate.

use crate::catalog::CatalogItem;
use crate::search::QueryParameters;

/// The conjunction of the four listing filters, prepared once per evaluation.
#[derive(Debug, Clone)]
pub struct Predicate<'a> {
    params: &'a QueryParameters,
    needle: Option<String>,
}

impl<'a> Predicate<'a> {
    pub fn new(params: &'a QueryParameters) -> Self {
        let needle = (!params.search_term.is_empty()).then(|| params.search_term.to_lowercase());
        Self { params, needle }
    }

    /// An item passes iff search, category, price and availability all match.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.matches_search(item)
            && self.matches_category(item)
            && self.params.price_range.contains(item.price)
            && (!self.params.available_only || item.is_available)
    }

    fn matches_search(&self, item: &CatalogItem) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        [&item.name, &item.description, &item.category]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle.as_str()))
    }

    fn matches_category(&self, item: &CatalogItem) -> bool {
        self.params.selected_categories.is_empty()
            || self.params.selected_categories.contains(&item.category)
    }
}
