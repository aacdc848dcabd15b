//! Per-session shopping state.

use crate::cart::{Cart, Wishlist};
use crate::checkout::Order;
use crate::ids::{ItemId, OrderId, UserId};
use serde::{Deserialize, Serialize};

/// Everything one shopper's session owns: cart, wishlist and order history.
///
/// The caller owns the value and lends it to [`OrderLedger`] operations, so
/// independent sessions (or tests) never share state. It serializes as a
/// whole for callers that want to persist it.
///
/// [`OrderLedger`]: crate::ledger::OrderLedger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionState {
    /// Signed-in customer, if any.
    pub customer: Option<UserId>,
    pub(crate) cart: Cart,
    pub(crate) wishlist: Wishlist,
    pub(crate) orders: Vec<Order>,
}

impl SessionState {
    /// Create an anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for a signed-in customer.
    pub fn for_customer(user_id: UserId) -> Self {
        Self {
            customer: Some(user_id),
            ..Self::default()
        }
    }

    /// The live cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Check if an item is on the wishlist.
    pub fn is_wishlisted(&self, id: &ItemId) -> bool {
        self.wishlist.contains(id)
    }

    /// Order history, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up a placed order.
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == id)
    }
}
