//! Catalog module.
//!
//! Contains the item record served by the item service and the facet
//! summaries derived from a full catalog.

mod facets;
mod item;

pub use facets::{CatalogFacets, CategoryFacet, EMPTY_CATALOG_PRICE_BOUNDS};
pub use item::{CatalogItem, FEATURED_PRIORITY_MAX};
