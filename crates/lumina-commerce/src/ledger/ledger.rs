//! Cart, wishlist and checkout operations over a session.

use crate::cart::{Cart, CartSummary, ShippingPolicy};
use crate::catalog::Item;
use crate::checkout::Order;
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::{ItemId, UserId};
use crate::ledger::{Clock, SessionState, SystemClock};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Acknowledgment returned when an item lands in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartAck {
    /// The item added.
    pub item_id: ItemId,
    /// Its title, for the confirmation message.
    pub title: String,
    /// Line quantity after the add.
    pub quantity: u32,
}

impl fmt::Display for CartAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} added to cart!", self.title)
    }
}

/// Applies shopper actions to a [`SessionState`].
///
/// Holds only pricing rules and a clock; all mutable state lives in the
/// session passed to each call. Every operation runs to completion before
/// returning.
#[derive(Debug, Clone)]
pub struct OrderLedger {
    shipping: ShippingPolicy,
    clock: Arc<dyn Clock>,
}

impl OrderLedger {
    /// Create a ledger with the given shipping policy and the system clock.
    pub fn new(shipping: ShippingPolicy) -> Self {
        Self {
            shipping,
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a ledger from store settings.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.shipping_policy())
    }

    /// Replace the clock used for order timestamps.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The shipping policy in force.
    pub fn shipping_policy(&self) -> &ShippingPolicy {
        &self.shipping
    }

    /// Add one copy of `item` to the cart.
    ///
    /// Refuses items not priced in the store currency, so every cart and
    /// order sums amounts of one currency only.
    pub fn add_item(
        &self,
        session: &mut SessionState,
        item: &Item,
    ) -> Result<CartAck, CommerceError> {
        let expected = self.shipping.currency();
        let got = item.effective_price().currency;
        if got != expected {
            return Err(CommerceError::CurrencyMismatch {
                expected: expected.code().to_string(),
                got: got.code().to_string(),
            });
        }

        let quantity = session.cart.add(item);
        tracing::debug!(item_id = %item.id, quantity, "item added to cart");
        Ok(CartAck {
            item_id: item.id.clone(),
            title: item.title.clone(),
            quantity,
        })
    }

    /// Remove an item's line. Missing items are ignored.
    pub fn remove_item(&self, session: &mut SessionState, item_id: &ItemId) -> bool {
        let removed = session.cart.remove(item_id);
        if removed {
            tracing::debug!(%item_id, "item removed from cart");
        }
        removed
    }

    /// Change a line's quantity by `delta`, never below 1.
    ///
    /// Decrementing a single copy leaves it in the cart; use
    /// [`remove_item`](Self::remove_item) to drop a line. Returns the new
    /// quantity, or `None` if the item is not in the cart.
    pub fn adjust_quantity(
        &self,
        session: &mut SessionState,
        item_id: &ItemId,
        delta: i64,
    ) -> Option<u32> {
        let quantity = session.cart.adjust(item_id, delta);
        if let Some(quantity) = quantity {
            tracing::debug!(%item_id, delta, quantity, "cart quantity adjusted");
        }
        quantity
    }

    /// Save or unsave an item. Returns whether it is saved afterwards.
    pub fn toggle_wishlist(&self, session: &mut SessionState, item_id: &ItemId) -> bool {
        let saved = session.wishlist.toggle(item_id);
        tracing::debug!(%item_id, saved, "wishlist toggled");
        saved
    }

    /// Price a cart. The one place subtotal, shipping and total are computed.
    pub fn compute_summary(&self, cart: &Cart) -> CartSummary {
        self.shipping.summarize(cart.lines())
    }

    /// Turn the cart into an order.
    ///
    /// Refuses an empty cart. Otherwise snapshots the lines and their
    /// summary, records the order at the front of the history and empties
    /// the cart.
    pub fn place_order(
        &self,
        session: &mut SessionState,
        shipping_address: impl Into<String>,
    ) -> Result<Order, CommerceError> {
        if session.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let summary = self.compute_summary(&session.cart);
        let user_id = session.customer.clone().unwrap_or_else(UserId::guest);
        let order = Order::new(
            user_id,
            session.cart.take(),
            summary,
            self.clock.now(),
            shipping_address.into(),
        );

        tracing::info!(
            order_id = %order.id(),
            items = order.item_count(),
            total = %order.total(),
            "order placed"
        );
        session.orders.insert(0, order.clone());
        Ok(order)
    }
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new(ShippingPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_catalog, sample_catalog_in};
    use crate::checkout::OrderStatus;
    use crate::money::{Currency, Money};
    use crate::ledger::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_add_item_acknowledges() {
        let catalog = sample_catalog();
        let ledger = OrderLedger::default();
        let mut session = SessionState::new();
        let item = catalog.get(&ItemId::new("3")).unwrap();

        let ack = ledger.add_item(&mut session, item).unwrap();
        assert_eq!(ack.quantity, 1);
        assert_eq!(ack.to_string(), "The Alchemist added to cart!");
        assert_eq!(ledger.add_item(&mut session, item).unwrap().quantity, 2);
    }

    #[test]
    fn test_missing_lines_are_noops() {
        let ledger = OrderLedger::default();
        let mut session = SessionState::new();
        let id = ItemId::new("404");
        assert!(!ledger.remove_item(&mut session, &id));
        assert_eq!(ledger.adjust_quantity(&mut session, &id, 1), None);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_place_order_refuses_empty_cart() {
        let ledger = OrderLedger::default();
        let mut session = SessionState::new();
        assert_eq!(
            ledger.place_order(&mut session, "1 Main St"),
            Err(CommerceError::EmptyCart)
        );
        assert!(session.orders().is_empty());
    }

    #[test]
    fn test_place_order_records_customer_and_time() {
        let catalog = sample_catalog();
        let at = Utc.with_ymd_and_hms(2024, 10, 15, 9, 30, 0).unwrap();
        let ledger = OrderLedger::default().with_clock(Arc::new(FixedClock(at)));
        let mut session = SessionState::for_customer(UserId::new("u1"));
        ledger.add_item(&mut session, catalog.get(&ItemId::new("5")).unwrap()).unwrap();

        let order = ledger.place_order(&mut session, "221B Baker St").unwrap();
        assert_eq!(order.user_id(), &UserId::new("u1"));
        assert_eq!(order.created_at(), at);
        assert_eq!(order.status(), OrderStatus::Processing);
        assert_eq!(order.total().amount_cents, 1698);
        assert_eq!(session.order(order.id()), Some(&order));
    }

    #[test]
    fn test_guest_orders() {
        let catalog = sample_catalog();
        let ledger = OrderLedger::default();
        let mut session = SessionState::new();
        ledger.add_item(&mut session, catalog.get(&ItemId::new("1")).unwrap()).unwrap();
        let order = ledger.place_order(&mut session, "").unwrap();
        assert_eq!(order.user_id(), &UserId::guest());
    }

    #[test]
    fn test_orders_most_recent_first() {
        let catalog = sample_catalog();
        let ledger = OrderLedger::default();
        let mut session = SessionState::new();
        let item = catalog.get(&ItemId::new("1")).unwrap();

        ledger.add_item(&mut session, item).unwrap();
        let first = ledger.place_order(&mut session, "A").unwrap();
        ledger.add_item(&mut session, item).unwrap();
        let second = ledger.place_order(&mut session, "B").unwrap();

        let ids: Vec<_> = session.orders().iter().map(|o| o.id().clone()).collect();
        assert_eq!(ids, vec![second.id().clone(), first.id().clone()]);
    }

    #[test]
    fn test_add_item_rejects_other_currency() {
        let config = StoreConfig {
            currency: Currency::EUR,
            ..StoreConfig::default()
        };
        let ledger = OrderLedger::from_config(&config);
        let mut session = SessionState::new();
        let catalog = sample_catalog();

        let result = ledger.add_item(&mut session, catalog.get(&ItemId::new("5")).unwrap());
        assert_eq!(
            result,
            Err(CommerceError::CurrencyMismatch {
                expected: "EUR".to_string(),
                got: "USD".to_string(),
            })
        );
        assert!(session.cart().is_empty());

        let euro_catalog = sample_catalog_in(Currency::EUR);
        let item = euro_catalog.get(&ItemId::new("5")).unwrap();
        ledger.add_item(&mut session, item).unwrap();
        let summary = ledger.compute_summary(session.cart());
        assert_eq!(summary.subtotal, Money::new(1099, Currency::EUR));
        assert_eq!(summary.total, Money::new(1698, Currency::EUR));
    }
}
