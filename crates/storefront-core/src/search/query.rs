//! Query parameters.

use crate::catalog::{CatalogFacets, CatalogItem};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to filtered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Identifier descending. Identifiers are treated as a recency proxy.
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    /// Priority ascending (lower priority number first).
    Popular,
    NameAz,
    NameZa,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Newest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Popular,
        SortKey::NameAz,
        SortKey::NameZa,
    ];

    /// Wire name, as used in URLs and config.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Popular => "popular",
            SortKey::NameAz => "name-az",
            SortKey::NameZa => "name-za",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Popular => "Most Popular",
            SortKey::NameAz => "Name: A-Z",
            SortKey::NameZa => "Name: Z-A",
        }
    }

    /// Comparator for this key. Equal items compare `Equal` so a stable
    /// sort keeps their catalog order.
    pub fn compare(&self, a: &CatalogItem, b: &CatalogItem) -> Ordering {
        match self {
            SortKey::Newest => b.id.cmp(&a.id),
            SortKey::PriceLow => a.price.total_cmp(&b.price),
            SortKey::PriceHigh => b.price.total_cmp(&a.price),
            SortKey::Popular => a.priority.cmp(&b.priority),
            SortKey::NameAz => a.name.cmp(&b.name),
            SortKey::NameZa => b.name.cmp(&a.name),
        }
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CommerceError::InvalidSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range no catalog price falls outside of.
    pub fn any() -> Self {
        Self::new(0.0, f64::MAX)
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::any()
    }
}

/// Everything the visitor can tune on the listing page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameters {
    /// Case-insensitive substring matched against name, description, category.
    pub search_term: String,
    /// Empty means every category.
    pub selected_categories: BTreeSet<String>,
    pub price_range: PriceRange,
    pub sort_key: SortKey,
    pub available_only: bool,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cleared state for a catalog: no filters, price range spanning the catalog.
    pub fn for_catalog(facets: &CatalogFacets) -> Self {
        Self {
            price_range: facets.price_bounds,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.selected_categories.insert(category.into());
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_available_only(mut self, available_only: bool) -> Self {
        self.available_only = available_only;
        self
    }

    /// Select `category` if unselected, deselect it otherwise.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.to_string());
        }
    }

    /// Whether anything differs from [`QueryParameters::for_catalog`].
    pub fn has_active_filters(&self, facets: &CatalogFacets) -> bool {
        !self.search_term.is_empty()
            || !self.selected_categories.is_empty()
            || self.price_range != facets.price_bounds
            || self.available_only
            || self.sort_key != SortKey::Newest
    }

    /// Return to the cleared state for this catalog.
    pub fn reset(&mut self, facets: &CatalogFacets) {
        *self = Self::for_catalog(facets);
    }
}
