//! The cart state engine.

use crate::cart::{CartCollection, CartStore};
use crate::error::CommerceError;
use crate::ids::ItemId;

/// Result of persisting a cart mutation.
///
/// The in-memory cart is already updated either way; `Unsaved` only means
/// the snapshot on disk (or in the KV store) is now behind.
#[must_use = "an unsaved cart should be surfaced to the visitor as a warning"]
#[derive(Debug)]
pub enum SaveOutcome {
    Saved,
    Unsaved(CommerceError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }

    /// The persistence failure, if any.
    pub fn warning(&self) -> Option<&CommerceError> {
        match self {
            SaveOutcome::Saved => None,
            SaveOutcome::Unsaved(e) => Some(e),
        }
    }
}

/// Owns the visitor's cart and writes every change through to a [`CartStore`].
///
/// Created explicitly by the host and handed to whatever needs it; there is
/// no ambient instance.
#[derive(Debug)]
pub struct CartEngine<S: CartStore> {
    store: S,
    lines: CartCollection,
}

impl<S: CartStore> CartEngine<S> {
    /// Load the persisted cart, starting empty when there is none.
    pub fn open(store: S) -> Self {
        let lines = store.load().unwrap_or_default();
        tracing::debug!(lines = lines.len(), items = lines.total_item_count(), "opened cart");
        Self { store, lines }
    }

    /// Add `quantity` of `item_id` (at least one).
    pub fn add_item(&mut self, item_id: impl Into<ItemId>, quantity: i64) -> SaveOutcome {
        let item_id = item_id.into();
        tracing::debug!(item = %item_id, quantity, "add to cart");
        self.lines.add(item_id, quantity);
        self.persist()
    }

    /// Add a single unit of `item_id`.
    pub fn add_one(&mut self, item_id: impl Into<ItemId>) -> SaveOutcome {
        self.add_item(item_id, 1)
    }

    /// Remove `item_id` entirely. Absent items are not an error.
    pub fn remove_item(&mut self, item_id: impl AsRef<str>) -> SaveOutcome {
        let item_id = item_id.as_ref();
        let removed = self.lines.remove(item_id);
        tracing::debug!(item = item_id, removed, "remove from cart");
        self.persist()
    }

    /// Set the exact quantity of `item_id`; zero or less removes it.
    pub fn set_quantity(&mut self, item_id: impl Into<ItemId>, quantity: i64) -> SaveOutcome {
        let item_id = item_id.into();
        tracing::debug!(item = %item_id, quantity, "set cart quantity");
        self.lines.set_quantity(item_id, quantity);
        self.persist()
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> SaveOutcome {
        tracing::debug!(lines = self.lines.len(), "clear cart");
        self.lines.clear();
        self.persist()
    }

    /// Fold another cart into this one, summing shared items.
    pub fn merge(&mut self, other: CartCollection) -> SaveOutcome {
        tracing::debug!(incoming = other.len(), "merge cart");
        self.lines.merge(other);
        self.persist()
    }

    /// Replace the in-memory cart with whatever the store holds now.
    ///
    /// Another view sharing the store may have written since this engine
    /// opened; the latest snapshot wins.
    pub fn reload(&mut self) {
        self.lines = self.store.load().unwrap_or_default();
    }

    pub fn quantity_of(&self, item_id: impl AsRef<str>) -> i64 {
        self.lines.quantity_of(item_id.as_ref())
    }

    pub fn contains(&self, item_id: impl AsRef<str>) -> bool {
        self.lines.contains(item_id.as_ref())
    }

    /// Sum of all quantities, derived on each call.
    pub fn total_item_count(&self) -> i64 {
        self.lines.total_item_count()
    }

    pub fn lines(&self) -> &CartCollection {
        &self.lines
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) -> SaveOutcome {
        match self.store.save(&self.lines) {
            Ok(()) => SaveOutcome::Saved,
            Err(e) => {
                tracing::warn!(error = %e, "cart changed in memory but could not be saved");
                SaveOutcome::Unsaved(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartLine, MemoryCartStore};
    use std::cell::Cell;

    /// Refuses every write after the first `budget`.
    struct FlakyStore {
        inner: MemoryCartStore,
        budget: Cell<usize>,
    }

    impl FlakyStore {
        fn new(budget: usize) -> Self {
            Self {
                inner: MemoryCartStore::new(),
                budget: Cell::new(budget),
            }
        }
    }

    impl CartStore for FlakyStore {
        fn load(&self) -> Option<CartCollection> {
            self.inner.load()
        }

        fn save(&self, lines: &CartCollection) -> Result<(), CommerceError> {
            if self.budget.get() == 0 {
                return Err(CommerceError::CacheError("quota exceeded".into()));
            }
            self.budget.set(self.budget.get() - 1);
            self.inner.save(lines)
        }
    }

    #[test]
    fn test_add_item_twice_accumulates() {
        let mut cart = CartEngine::open(MemoryCartStore::new());
        assert!(cart.add_item("sku1", 2).is_saved());
        assert!(cart.add_item("sku1", 3).is_saved());
        assert_eq!(cart.quantity_of("sku1"), 5);
        assert_eq!(cart.total_item_count(), 5);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = CartEngine::open(MemoryCartStore::new());
        let _ = cart.add_one("sku1");
        let _ = cart.set_quantity("sku1", 0);
        assert!(!cart.contains("sku1"));
        assert_eq!(cart.quantity_of("sku1"), 0);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let store = MemoryCartStore::new();
        let mut cart = CartEngine::open(&store);

        let _ = cart.add_item("a", 2);
        assert_eq!(store.snapshot().unwrap().quantity_of("a"), 2);

        let _ = cart.set_quantity("b", 4);
        assert_eq!(store.snapshot().unwrap().quantity_of("b"), 4);

        let _ = cart.remove_item("a");
        assert!(!store.snapshot().unwrap().contains("a"));

        let _ = cart.clear();
        assert_eq!(store.snapshot(), Some(CartCollection::new()));
    }

    #[test]
    fn test_open_restores_previous_session() {
        let store = MemoryCartStore::with_snapshot(CartCollection::from_lines([
            CartLine::new("a", 1),
            CartLine::new("b", 3),
        ]));
        let cart = CartEngine::open(store);
        assert_eq!(cart.total_item_count(), 4);
        assert!(cart.contains("b"));
    }

    #[test]
    fn test_save_failure_keeps_memory_authoritative() {
        let mut cart = CartEngine::open(FlakyStore::new(1));
        assert!(cart.add_item("a", 1).is_saved());

        let outcome = cart.add_item("a", 2);
        assert!(!outcome.is_saved());
        assert!(matches!(
            outcome.warning(),
            Some(CommerceError::CacheError(_))
        ));

        assert_eq!(cart.quantity_of("a"), 3);
        assert_eq!(cart.store().inner.snapshot().unwrap().quantity_of("a"), 1);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let mut cart = CartEngine::open(MemoryCartStore::new());
        let _ = cart.add_one("a");
        let _ = cart.add_one("b");

        assert!(cart.remove_item("a").is_saved());
        let once = cart.lines().clone();
        assert!(cart.remove_item("a").is_saved());
        assert_eq!(cart.lines(), &once);
    }

    #[test]
    fn test_merge_and_reload() {
        let store = MemoryCartStore::new();
        let mut first = CartEngine::open(&store);
        let mut second = CartEngine::open(&store);

        let _ = first.add_item("a", 1);
        let _ = second.merge(CartCollection::from_lines([CartLine::new("b", 2)]));

        // Last writer wins at whole-collection granularity.
        first.reload();
        assert!(!first.contains("a"));
        assert_eq!(first.quantity_of("b"), 2);
    }
}
