//! Catalog item record.

use crate::ids::{BranchId, ItemId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Items with a priority at or below this value are featured when available.
pub const FEATURED_PRIORITY_MAX: i64 = 3;

/// A purchasable item as served by the item service.
///
/// Read-only to the storefront core: the engines only inspect fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price in major currency units.
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// Merchandising rank; lower is more prominent.
    #[serde(default)]
    pub priority: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchId>,
    #[serde(default)]
    pub is_available: bool,
}

impl CatalogItem {
    /// Create an available item with the given essentials.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: String::new(),
            category: category.into(),
            sub_category: None,
            priority: i64::MAX,
            branch: None,
            is_available: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub fn with_branch(mut self, branch: impl Into<BranchId>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Featured items are available and ranked within the top priorities.
    pub fn is_featured(&self) -> bool {
        self.priority <= FEATURED_PRIORITY_MAX && self.is_available
    }

    /// Unit price as exact money in `currency`; `None` when the price does
    /// not fit in minor units.
    pub fn unit_price(&self, currency: Currency) -> Option<Money> {
        Money::try_from_decimal(self.price, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_record() {
        let json = r#"{
            "id": "64b7f0",
            "name": "Cold Brew",
            "description": "Slow steeped",
            "price": 85.5,
            "imageUrl": "https://cdn.example.com/cb.png",
            "category": "Drinks",
            "subCategory": "Coffee",
            "priority": 2,
            "branch": "main",
            "isAvailable": true
        }"#;

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "64b7f0");
        assert_eq!(item.sub_category.as_deref(), Some("Coffee"));
        assert_eq!(item.branch, Some(BranchId::new("main")));
        assert!(item.is_featured());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id": "x", "name": "Bare", "price": 1}"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, "");
        assert_eq!(item.priority, 0);
        assert!(!item.is_available);
        assert!(!item.is_featured());
    }

    #[test]
    fn test_featured_rule() {
        let base = CatalogItem::new("a", "A", 10.0, "Food");
        assert!(base.clone().with_priority(3).is_featured());
        assert!(!base.clone().with_priority(4).is_featured());
        assert!(!base.with_priority(1).with_availability(false).is_featured());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let item = CatalogItem::new("a", "A", 10.0, "Food").with_priority(1);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["isAvailable"], serde_json::json!(true));
        assert_eq!(value["imageUrl"], serde_json::json!(""));
        assert!(value.get("subCategory").is_none());
    }

    #[test]
    fn test_unit_price() {
        let item = CatalogItem::new("a", "A", 12.75, "Food");
        assert_eq!(item.unit_price(Currency::EGP).map(|m| m.amount_minor), Some(1275));

        let absurd = CatalogItem::new("b", "B", 1.0e17, "Food");
        assert_eq!(absurd.unit_price(Currency::EGP), None);
    }
}
