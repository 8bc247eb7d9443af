//! Cart hydration and pricing summary.
//!
//! Display-side only: nothing here changes which items are in the cart.

use crate::cart::CartCollection;
use crate::catalog::CatalogItem;
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::lookup::ItemLookup;
use crate::money::{Currency, Money};
use serde::Serialize;

/// A cart line resolved to its catalog record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydratedLine {
    pub item: CatalogItem,
    pub quantity: i64,
}

impl HydratedLine {
    /// Unit price times quantity; `None` on overflow.
    pub fn line_total(&self, currency: Currency) -> Option<Money> {
        self.item.unit_price(currency)?.try_multiply(self.quantity)
    }
}

/// Result of resolving every cart line through an [`ItemLookup`].
#[derive(Debug, Default)]
pub struct HydratedCart {
    /// Lines whose item was found, in cart order.
    pub lines: Vec<HydratedLine>,
    /// Items the lookup reported as not existing.
    pub missing: Vec<ItemId>,
    /// Items whose lookup failed outright.
    pub failed: Vec<(ItemId, CommerceError)>,
}

impl HydratedCart {
    /// Whether every line resolved.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.failed.is_empty()
    }

    pub fn pricing(&self, policy: &ShippingPolicy) -> Result<CartPricing, CommerceError> {
        CartPricing::calculate(&self.lines, policy)
    }
}

/// Resolve each cart line to its item record.
///
/// Lookups happen one line at a time; a failure on one line does not stop
/// the rest.
pub fn hydrate(lines: &CartCollection, lookup: &dyn ItemLookup) -> HydratedCart {
    let mut hydrated = HydratedCart::default();
    for line in lines {
        match lookup.get_item(&line.item_id) {
            Ok(Some(item)) => hydrated.lines.push(HydratedLine {
                item,
                quantity: line.quantity,
            }),
            Ok(None) => hydrated.missing.push(line.item_id.clone()),
            Err(e) => {
                tracing::warn!(item = %line.item_id, error = %e, "could not hydrate cart line");
                hydrated.failed.push((line.item_id.clone(), e));
            }
        }
    }
    hydrated
}

/// Flat shipping with a free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    pub currency: Currency,
    /// Subtotals strictly above this ship free.
    pub free_shipping_threshold: Money,
    pub shipping_fee: Money,
}

impl ShippingPolicy {
    /// Policy from major-unit amounts.
    pub fn new(currency: Currency, free_shipping_threshold: f64, shipping_fee: f64) -> Self {
        Self {
            currency,
            free_shipping_threshold: Money::from_decimal(free_shipping_threshold, currency),
            shipping_fee: Money::from_decimal(shipping_fee, currency),
        }
    }

    /// Shipping charged on `subtotal`. Empty carts ship nothing.
    pub fn shipping_for(&self, subtotal: Money, item_count: i64) -> Money {
        if item_count == 0 || subtotal.amount_minor > self.free_shipping_threshold.amount_minor {
            Money::zero(self.currency)
        } else {
            self.shipping_fee
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::new(Currency::EGP, 500.0, 50.0)
    }
}

/// Totals shown on the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartPricing {
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
    pub item_count: i64,
}

impl CartPricing {
    pub fn calculate(
        lines: &[HydratedLine],
        policy: &ShippingPolicy,
    ) -> Result<Self, CommerceError> {
        let currency = policy.currency;
        let mut subtotal = Money::zero(currency);
        let mut item_count: i64 = 0;
        for line in lines {
            let line_total = line.line_total(currency).ok_or(CommerceError::Overflow)?;
            subtotal = subtotal.try_add(&line_total).ok_or(CommerceError::Overflow)?;
            item_count = item_count.saturating_add(line.quantity);
        }

        let shipping = policy.shipping_for(subtotal, item_count);
        let total = subtotal.try_add(&shipping).ok_or(CommerceError::Overflow)?;

        Ok(Self {
            subtotal,
            shipping,
            total,
            item_count,
        })
    }

    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::ids::BranchId;
    use crate::lookup::StaticItemLookup;
    use storefront_data::FetchError;

    fn egp(major: i64) -> Money {
        Money::new(major * 100, Currency::EGP)
    }

    fn line(id: &str, price: f64, quantity: i64) -> HydratedLine {
        HydratedLine {
            item: CatalogItem::new(id, id, price, "Misc"),
            quantity,
        }
    }

    #[test]
    fn test_small_cart_pays_shipping() {
        let pricing =
            CartPricing::calculate(&[line("a", 120.0, 2), line("b", 10.5, 1)], &ShippingPolicy::default())
                .unwrap();
        assert_eq!(pricing.subtotal, Money::new(25050, Currency::EGP));
        assert_eq!(pricing.shipping, egp(50));
        assert_eq!(pricing.total, Money::new(30050, Currency::EGP));
        assert_eq!(pricing.item_count, 3);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let policy = ShippingPolicy::default();

        let at = CartPricing::calculate(&[line("a", 500.0, 1)], &policy).unwrap();
        assert_eq!(at.shipping, egp(50));

        let above = CartPricing::calculate(&[line("a", 500.01, 1)], &policy).unwrap();
        assert!(above.ships_free());
        assert_eq!(above.total, above.subtotal);
    }

    #[test]
    fn test_empty_cart_is_free() {
        let pricing = CartPricing::calculate(&[], &ShippingPolicy::default()).unwrap();
        assert!(pricing.subtotal.is_zero());
        assert!(pricing.total.is_zero());
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = CartPricing::calculate(&[line("a", 1.0e15, i64::MAX / 2)], &ShippingPolicy::default());
        assert!(matches!(result, Err(CommerceError::Overflow)));
    }

    #[test]
    fn test_unrepresentable_price_is_overflow() {
        let policy = ShippingPolicy::default();
        for price in [1.0e17, f64::INFINITY, f64::NAN] {
            let result = CartPricing::calculate(&[line("a", price, 1)], &policy);
            assert!(matches!(result, Err(CommerceError::Overflow)));
        }
    }

    struct PartlyDown;

    impl ItemLookup for PartlyDown {
        fn get_item(&self, id: &ItemId) -> Result<Option<CatalogItem>, CommerceError> {
            match id.as_str() {
                "ok" => Ok(Some(CatalogItem::new("ok", "Ok", 20.0, "Misc"))),
                "gone" => Ok(None),
                _ => Err(FetchError::Timeout.into()),
            }
        }

        fn list_items(&self, _scope: &BranchId) -> Result<Vec<CatalogItem>, CommerceError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_hydrate_separates_missing_from_failed() {
        let cart = CartCollection::from_lines([
            CartLine::new("ok", 2),
            CartLine::new("gone", 1),
            CartLine::new("flaky", 4),
        ]);

        let hydrated = hydrate(&cart, &PartlyDown);
        assert_eq!(hydrated.lines.len(), 1);
        assert_eq!(hydrated.lines[0].quantity, 2);
        assert_eq!(hydrated.missing, vec![ItemId::new("gone")]);
        assert_eq!(hydrated.failed.len(), 1);
        assert_eq!(hydrated.failed[0].0, ItemId::new("flaky"));
        assert!(!hydrated.is_complete());

        // Membership is untouched.
        assert_eq!(cart.len(), 3);

        let pricing = hydrated.pricing(&ShippingPolicy::default()).unwrap();
        assert_eq!(pricing.subtotal, egp(40));
    }

    #[test]
    fn test_hydrate_keeps_cart_order() {
        let lookup = StaticItemLookup::new(vec![
            CatalogItem::new("x", "X", 1.0, "Misc"),
            CatalogItem::new("y", "Y", 2.0, "Misc"),
        ]);
        let cart = CartCollection::from_lines([CartLine::new("y", 1), CartLine::new("x", 1)]);

        let hydrated = hydrate(&cart, &lookup);
        let ids: Vec<_> = hydrated.lines.iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, vec!["y", "x"]);
        assert!(hydrated.is_complete());
    }
}
