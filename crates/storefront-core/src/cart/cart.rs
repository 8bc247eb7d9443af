//! Cart lines and the collection that holds them.

use crate::ids::ItemId;
use serde::{Deserialize, Serialize};

/// One item and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: ItemId,
    pub quantity: i64,
}

impl CartLine {
    pub fn new(item_id: impl Into<ItemId>, quantity: i64) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }
}

/// The cart contents, in insertion order.
///
/// Every constructor and mutation keeps two invariants: at most one line per
/// item, and every quantity is at least 1. Deserialization goes through the
/// same normalization, so a stored snapshot can never smuggle in a bad line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct CartCollection {
    lines: Vec<CartLine>,
}

impl CartCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary lines: non-positive quantities are dropped and
    /// repeated items are folded into their first line.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut collection = Self::new();
        for line in lines {
            if line.quantity > 0 {
                collection.add(line.item_id, line.quantity);
            }
        }
        collection
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity held for `item_id`, zero when absent.
    pub fn quantity_of(&self, item_id: &str) -> i64 {
        self.position(item_id)
            .map_or(0, |idx| self.lines[idx].quantity)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.quantity_of(item_id) > 0
    }

    /// Sum of all quantities.
    pub fn total_item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |total, line| total.saturating_add(line.quantity))
    }

    /// Increase the quantity of `item_id`, appending a line if needed.
    /// Non-positive quantities count as 1.
    pub fn add(&mut self, item_id: ItemId, quantity: i64) {
        let quantity = quantity.max(1);
        match self.position(item_id.as_str()) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(quantity);
            }
            None => self.lines.push(CartLine::new(item_id, quantity)),
        }
    }

    /// Drop the line for `item_id`. Returns whether a line was removed.
    pub fn remove(&mut self, item_id: &str) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|line| line.item_id.as_str() != item_id);
        self.lines.len() < len_before
    }

    /// Set the exact quantity of `item_id`; zero or less removes the line.
    pub fn set_quantity(&mut self, item_id: ItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove(item_id.as_str());
            return;
        }
        match self.position(item_id.as_str()) {
            Some(idx) => self.lines[idx].quantity = quantity,
            None => self.lines.push(CartLine::new(item_id, quantity)),
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Fold `other` into this collection, summing shared items.
    pub fn merge(&mut self, other: CartCollection) {
        for line in other.lines {
            self.add(line.item_id, line.quantity);
        }
    }

    fn position(&self, item_id: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.item_id.as_str() == item_id)
    }
}

impl From<Vec<CartLine>> for CartCollection {
    fn from(lines: Vec<CartLine>) -> Self {
        Self::from_lines(lines)
    }
}

impl From<CartCollection> for Vec<CartLine> {
    fn from(collection: CartCollection) -> Self {
        collection.lines
    }
}

impl<'a> IntoIterator for &'a CartCollection {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut cart = CartCollection::new();
        cart.add("sku1".into(), 2);
        cart.add("sku1".into(), 3);
        assert_eq!(cart.quantity_of("sku1"), 5);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_clamps_non_positive_to_one() {
        let mut cart = CartCollection::new();
        cart.add("sku1".into(), 0);
        cart.add("sku2".into(), -4);
        assert_eq!(cart.quantity_of("sku1"), 1);
        assert_eq!(cart.quantity_of("sku2"), 1);
    }

    #[test]
    fn test_set_quantity_sets_creates_and_removes() {
        let mut cart = CartCollection::new();
        cart.add("sku1".into(), 4);

        cart.set_quantity("sku1".into(), 2);
        assert_eq!(cart.quantity_of("sku1"), 2);

        cart.set_quantity("sku2".into(), 7);
        assert_eq!(cart.quantity_of("sku2"), 7);

        cart.set_quantity("sku1".into(), 0);
        assert!(!cart.contains("sku1"));
        cart.set_quantity("sku2".into(), -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = CartCollection::new();
        cart.add("a".into(), 1);
        cart.add("b".into(), 1);

        assert!(cart.remove("a"));
        let once = cart.clone();
        assert!(!cart.remove("a"));
        assert_eq!(cart, once);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartCollection::new();
        for id in ["c", "a", "b"] {
            cart.add(id.into(), 1);
        }
        cart.add("a".into(), 1);
        let order: Vec<_> = cart.iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
        assert_eq!(cart.total_item_count(), 4);
    }

    #[test]
    fn test_merge() {
        let mut mine = CartCollection::from_lines([CartLine::new("a", 1), CartLine::new("b", 2)]);
        let theirs = CartCollection::from_lines([CartLine::new("b", 3), CartLine::new("c", 1)]);
        mine.merge(theirs);

        assert_eq!(
            mine.lines(),
            &[
                CartLine::new("a", 1),
                CartLine::new("b", 5),
                CartLine::new("c", 1)
            ]
        );
    }

    #[test]
    fn test_wire_format() {
        let cart = CartCollection::from_lines([CartLine::new("sku1", 2)]);
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"[{"itemId":"sku1","quantity":2}]"#);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let json = r#"[
            {"itemId": "a", "quantity": 2},
            {"itemId": "b", "quantity": 0},
            {"itemId": "a", "quantity": 1},
            {"itemId": "c", "quantity": -3}
        ]"#;
        let cart: CartCollection = serde_json::from_str(json).unwrap();
        assert_eq!(cart.lines(), &[CartLine::new("a", 3)]);
    }
}
