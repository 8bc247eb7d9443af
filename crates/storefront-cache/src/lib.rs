//! Type-safe key-value store for storefront client state.
//!
//! Values are stored as JSON under string keys. Where the bytes live is
//! decided by a [`KvBackend`]: process memory, a directory on disk, or Spin's
//! key-value store when compiled for a component.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_cache::Cache;
//!
//! let cache = Cache::open_dir(".storefront")?;
//!
//! cache.set("cartItems", &lines)?;
//! let lines: Option<Vec<Line>> = cache.get("cartItems")?;
//! cache.delete("cartItems")?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{DirBackend, KvBackend, MemoryBackend};
#[cfg(target_arch = "wasm32")]
pub use backend::SpinBackend;
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KvBackend};
}
