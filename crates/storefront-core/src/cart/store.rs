//! Durable storage for the cart collection.

use crate::cart::CartCollection;
use crate::error::CommerceError;
use std::cell::RefCell;
use std::rc::Rc;
use storefront_cache::Cache;

/// Key the cart snapshot is stored under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "cartItems";

/// Where the cart engine keeps its snapshot.
pub trait CartStore {
    /// Read the last saved collection. Missing or unreadable snapshots are `None`.
    fn load(&self) -> Option<CartCollection>;

    /// Replace the saved collection.
    fn save(&self, lines: &CartCollection) -> Result<(), CommerceError>;
}

impl<S: CartStore + ?Sized> CartStore for &S {
    fn load(&self) -> Option<CartCollection> {
        (**self).load()
    }

    fn save(&self, lines: &CartCollection) -> Result<(), CommerceError> {
        (**self).save(lines)
    }
}

impl<S: CartStore + ?Sized> CartStore for Rc<S> {
    fn load(&self) -> Option<CartCollection> {
        (**self).load()
    }

    fn save(&self, lines: &CartCollection) -> Result<(), CommerceError> {
        (**self).save(lines)
    }
}

/// Cart snapshot kept as a JSON array under one key of a [`Cache`].
///
/// An unreadable snapshot is removed on load, so it is reported only once.
#[derive(Debug)]
pub struct KvCartStore {
    cache: Cache,
    key: String,
}

impl KvCartStore {
    pub fn new(cache: Cache) -> Self {
        Self::with_key(cache, DEFAULT_CART_KEY)
    }

    pub fn with_key(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl CartStore for KvCartStore {
    fn load(&self) -> Option<CartCollection> {
        match self.cache.get::<CartCollection>(&self.key) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable cart snapshot");
                if let Err(e) = self.cache.delete(&self.key) {
                    tracing::warn!(key = %self.key, error = %e, "could not remove unreadable cart snapshot");
                }
                None
            }
        }
    }

    fn save(&self, lines: &CartCollection) -> Result<(), CommerceError> {
        self.cache.set(&self.key, lines)?;
        Ok(())
    }
}

/// In-process store, for tests and sessions that should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    snapshot: RefCell<Option<CartCollection>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `lines`.
    pub fn with_snapshot(lines: CartCollection) -> Self {
        Self {
            snapshot: RefCell::new(Some(lines)),
        }
    }

    /// The last saved collection.
    pub fn snapshot(&self) -> Option<CartCollection> {
        self.snapshot.borrow().clone()
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Option<CartCollection> {
        self.snapshot()
    }

    fn save(&self, lines: &CartCollection) -> Result<(), CommerceError> {
        *self.snapshot.borrow_mut() = Some(lines.clone());
        Ok(())
    }
}
