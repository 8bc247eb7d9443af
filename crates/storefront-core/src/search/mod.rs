//! Search module.
//!
//! The catalog query engine: a pure mapping from a catalog and a set of
//! query parameters to an ordered, filtered view, plus the helpers the
//! listing page needs around it (featured partition, result counters, and a
//! live view that recomputes only for the latest parameters).

mod filter;
mod query;
mod results;
mod view;

pub use filter::Predicate;
pub use query::{PriceRange, QueryParameters, SortKey};
pub use results::{evaluate, partition, sort_items, Partition, ResultSummary};
pub use view::CatalogView;
