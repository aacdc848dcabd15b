//! Order types.

use crate::cart::{CartLine, CartSummary};
use crate::ids::{OrderId, UserId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// Orders start in `Processing`. Nothing in this crate moves them further;
/// fulfilment and cancellation belong to whatever back office is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed and being prepared.
    #[default]
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// A placed order.
///
/// Lines and amounts are copied at checkout and never recomputed, so later
/// catalog or cart changes cannot alter them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    lines: Vec<CartLine>,
    subtotal: Money,
    shipping: Money,
    total: Money,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    shipping_address: String,
}

impl Order {
    /// Snapshot lines and their summary into a new `Processing` order.
    pub(crate) fn new(
        user_id: UserId,
        lines: Vec<CartLine>,
        summary: CartSummary,
        created_at: DateTime<Utc>,
        shipping_address: String,
    ) -> Self {
        Self {
            id: OrderId::generate(),
            user_id,
            lines,
            subtotal: summary.subtotal,
            shipping: summary.shipping,
            total: summary.total,
            status: OrderStatus::Processing,
            created_at,
            shipping_address,
        }
    }

    /// Unique order identifier.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Customer, or the guest placeholder.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Lines as they were at checkout.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Subtotal at checkout.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Shipping charged at checkout.
    pub fn shipping(&self) -> Money {
        self.shipping
    }

    /// Grand total charged.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// When the order was placed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Shipping address as entered.
    pub fn shipping_address(&self) -> &str {
        &self.shipping_address
    }

    /// Get total item count.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Cart, ShippingPolicy};
    use crate::catalog::Item;
    use crate::money::Currency;

    #[test]
    fn test_order_status_terminal() {
        assert!(!OrderStatus::Processing.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    }

    #[test]
    fn test_new_order_snapshots_summary() {
        let mut cart = Cart::new();
        let item = Item::new("5", "Caterpillar", "Eric Carle", "Children", Money::new(1099, Currency::USD));
        cart.add(&item);
        cart.add(&item);
        let summary = ShippingPolicy::default().summarize(cart.lines());

        let order = Order::new(
            UserId::guest(),
            cart.take(),
            summary,
            Utc::now(),
            "1 Main St".to_string(),
        );
        assert_eq!(order.status(), OrderStatus::Processing);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.subtotal().amount_cents, 2198);
        assert_eq!(order.total().amount_cents, 2797);
        assert_eq!(order.shipping_address(), "1 Main St");
    }
}
