//! Cart pricing calculations.

use crate::cart::CartLine;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Subtotal above which shipping is free, in cents.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 5000;

/// Flat shipping fee charged at or below the threshold, in cents.
pub const FLAT_SHIPPING_FEE_CENTS: i64 = 599;

/// Flat-fee shipping with a free-shipping threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotals strictly above this ship free.
    pub free_threshold: Money,
    /// Fee charged otherwise.
    pub flat_fee: Money,
}

impl ShippingPolicy {
    /// Create a policy in `currency` with the given threshold and fee.
    pub fn new(currency: Currency, free_threshold_cents: i64, flat_fee_cents: i64) -> Self {
        Self {
            free_threshold: Money::new(free_threshold_cents, currency),
            flat_fee: Money::new(flat_fee_cents, currency),
        }
    }

    /// The store currency.
    pub fn currency(&self) -> Currency {
        self.free_threshold.currency
    }

    /// Shipping charged on a given subtotal.
    pub fn shipping_for(&self, subtotal: &Money) -> Money {
        if subtotal.amount_cents > self.free_threshold.amount_cents {
            Money::zero(self.currency())
        } else {
            self.flat_fee
        }
    }

    /// Price a set of cart lines.
    ///
    /// Every view that shows pricing goes through here, so the cart and
    /// checkout totals can never disagree for the same lines.
    pub fn summarize<'a>(&self, lines: impl IntoIterator<Item = &'a CartLine>) -> CartSummary {
        let currency = self.currency();
        let subtotal = lines.into_iter().fold(Money::zero(currency), |acc, line| {
            let line_total = line.line_total();
            if line_total.currency != currency {
                tracing::warn!(
                    item_id = %line.item_id(),
                    currency = line_total.currency.code(),
                    "skipping cart line priced in another currency"
                );
                return acc;
            }
            acc.saturating_add(&line_total)
        });
        let shipping = self.shipping_for(&subtotal);
        CartSummary {
            subtotal,
            shipping,
            total: subtotal.saturating_add(&shipping),
            free_threshold: self.free_threshold,
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::new(
            Currency::default(),
            FREE_SHIPPING_THRESHOLD_CENTS,
            FLAT_SHIPPING_FEE_CENTS,
        )
    }
}

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of effective unit price times quantity.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
    /// Threshold the shipping decision was made against.
    free_threshold: Money,
}

impl CartSummary {
    /// Check if shipping is free.
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// How much more the customer must spend to ship free, if anything.
    ///
    /// Shipping is free only strictly above the threshold, so sitting
    /// exactly on it still needs one more cent.
    pub fn amount_to_free_shipping(&self) -> Option<Money> {
        if self.is_free_shipping() {
            return None;
        }
        let gap = self.free_threshold.amount_cents - self.subtotal.amount_cents + 1;
        Some(Money::new(gap.max(0), self.subtotal.currency))
    }

    /// Estimated tax. The storefront does not charge tax.
    pub fn tax(&self) -> Money {
        Money::zero(self.subtotal.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::cart::Cart;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn book(id: &str, cents: i64) -> Item {
        Item::new(id, "Book", "Author", "Fiction", usd(cents))
    }

    #[test]
    fn test_free_shipping_above_threshold() {
        let mut cart = Cart::new();
        cart.add(&book("1", 1499));
        let habits = book("2", 2700).with_discount(usd(2160));
        cart.add(&habits);
        cart.add(&habits);

        let summary = ShippingPolicy::default().summarize(cart.lines());
        assert_eq!(summary.subtotal, usd(5819));
        assert_eq!(summary.shipping, usd(0));
        assert_eq!(summary.total, usd(5819));
        assert!(summary.is_free_shipping());
        assert_eq!(summary.amount_to_free_shipping(), None);
    }

    #[test]
    fn test_flat_fee_below_threshold() {
        let mut cart = Cart::new();
        cart.add(&book("5", 1099));

        let summary = ShippingPolicy::default().summarize(cart.lines());
        assert_eq!(summary.subtotal, usd(1099));
        assert_eq!(summary.shipping, usd(599));
        assert_eq!(summary.total, usd(1698));
        assert_eq!(summary.amount_to_free_shipping(), Some(usd(3902)));
    }

    #[test]
    fn test_other_currency_lines_are_not_summed() {
        let mut cart = Cart::new();
        cart.add(&book("5", 1099));
        cart.add(&Item::new("9", "Book", "Author", "Fiction", Money::new(9900, Currency::EUR)));

        let summary = ShippingPolicy::default().summarize(cart.lines());
        assert_eq!(summary.subtotal, usd(1099));
        assert_eq!(summary.total, usd(1698));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut cart = Cart::new();
        cart.add(&book("1", 5000));

        let summary = ShippingPolicy::default().summarize(cart.lines());
        assert_eq!(summary.shipping, usd(599));
        assert_eq!(summary.amount_to_free_shipping(), Some(usd(1)));
    }

    #[test]
    fn test_empty_cart_pays_flat_fee() {
        let summary = ShippingPolicy::default().summarize(Cart::new().lines());
        assert!(summary.subtotal.is_zero());
        assert_eq!(summary.total, usd(599));
        assert!(summary.tax().is_zero());
    }

    #[test]
    fn test_custom_policy() {
        let policy = ShippingPolicy::new(Currency::GBP, 3000, 250);
        let mut cart = Cart::new();
        cart.add(&Item::new("1", "T", "A", "Fiction", Money::new(3100, Currency::GBP)));
        let summary = policy.summarize(cart.lines());
        assert!(summary.is_free_shipping());
        assert_eq!(summary.total.currency, Currency::GBP);
    }
}
