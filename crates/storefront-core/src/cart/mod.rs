//! Shopping cart module.
//!
//! Contains the cart collection, the engine that owns and persists it, the
//! persistence adapter, and display-side hydration and pricing.

mod cart;
mod engine;
mod pricing;
mod store;

pub use cart::{CartCollection, CartLine};
pub use engine::{CartEngine, SaveOutcome};
pub use pricing::{hydrate, CartPricing, HydratedCart, HydratedLine, ShippingPolicy};
pub use store::{CartStore, KvCartStore, MemoryCartStore, DEFAULT_CART_KEY};
