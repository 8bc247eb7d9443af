//! Storefront domain types and logic.
//!
//! This crate holds the two engines behind a small storefront:
//!
//! - **Cart**: the visitor's cart as a collection of `(item, quantity)`
//!   lines, persisted after every change through a [`cart::CartStore`]
//! - **Search**: filtering, sorting and partitioning of a catalog snapshot
//!   driven by [`search::QueryParameters`]
//! - **Catalog**: the item record and the facets derived from it
//! - **Lookup**: resolving item ids against the item service
//!
//! # Example
//!
//! ```rust
//! use storefront_core::prelude::*;
//!
//! let catalog = vec![
//!     CatalogItem::new("1", "Tea", 10.0, "Drinks"),
//!     CatalogItem::new("2", "Cake", 50.0, "Food"),
//! ];
//!
//! let facets = CatalogFacets::derive(&catalog);
//! let params = QueryParameters::for_catalog(&facets).with_sort(SortKey::PriceLow);
//! let results = evaluate(&catalog, &params);
//! assert_eq!(results[0].name, "Tea");
//!
//! let mut cart = CartEngine::open(MemoryCartStore::new());
//! let _ = cart.add_item("1", 2);
//! assert_eq!(cart.total_item_count(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod lookup;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{
        hydrate, CartCollection, CartEngine, CartLine, CartPricing, CartStore, HydratedCart,
        KvCartStore, MemoryCartStore, SaveOutcome, ShippingPolicy,
    };
    pub use crate::catalog::{CatalogFacets, CatalogItem};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::lookup::{HttpItemLookup, ItemLookup, StaticItemLookup};
    pub use crate::money::{Currency, Money};
    pub use crate::search::{evaluate, CatalogView, PriceRange, QueryParameters, SortKey};
}
