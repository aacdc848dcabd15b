//! Store dashboard figures.

use crate::catalog::{Catalog, Item};
use crate::checkout::{Order, OrderStatus};
use crate::money::{Currency, Money};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats<'a> {
    /// Sum of order totals.
    pub total_sales: Money,
    /// Number of orders placed.
    pub order_count: usize,
    /// Number of catalog items.
    pub catalog_size: usize,
    /// Items with fewer copies than the threshold, in catalog order.
    pub low_stock: Vec<&'a Item>,
    /// Orders per status. Statuses with no orders are omitted.
    pub orders_by_status: BTreeMap<&'static str, usize>,
}

impl<'a> DashboardStats<'a> {
    /// Compute the dashboard for a catalog and order history.
    pub fn compute(catalog: &'a Catalog, orders: &[Order], low_stock_threshold: u32) -> Self {
        let currency = orders
            .first()
            .map(|o| o.total().currency)
            .or_else(|| catalog.items().first().map(|i| i.price.currency))
            .unwrap_or_default();

        let total_sales = orders
            .iter()
            .fold(Money::zero(currency), |acc, o| acc.saturating_add(&o.total()));

        let low_stock = catalog
            .items()
            .iter()
            .filter(|i| i.stock < low_stock_threshold)
            .collect();

        let mut orders_by_status = BTreeMap::new();
        for order in orders {
            *orders_by_status.entry(order.status().as_str()).or_insert(0) += 1;
        }

        Self {
            total_sales,
            order_count: orders.len(),
            catalog_size: catalog.len(),
            low_stock,
            orders_by_status,
        }
    }

    /// Orders currently in `status`.
    pub fn count_for(&self, status: OrderStatus) -> usize {
        self.orders_by_status
            .get(status.as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Currency of the sales figure.
    pub fn currency(&self) -> Currency {
        self.total_sales.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::ids::ItemId;
    use crate::ledger::{OrderLedger, SessionState};

    #[test]
    fn test_empty_history() {
        let catalog = sample_catalog();
        let stats = DashboardStats::compute(&catalog, &[], 15);
        assert!(stats.total_sales.is_zero());
        assert_eq!(stats.order_count, 0);
        assert_eq!(stats.catalog_size, 6);
        assert_eq!(stats.count_for(OrderStatus::Processing), 0);
    }

    #[test]
    fn test_low_stock_is_strictly_below_threshold() {
        let catalog = sample_catalog();
        let stats = DashboardStats::compute(&catalog, &[], 15);
        let ids: Vec<&str> = stats.low_stock.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["4"]);

        let stats = DashboardStats::compute(&catalog, &[], 12);
        assert!(stats.low_stock.is_empty());
    }

    #[test]
    fn test_sales_sum_order_totals() {
        let catalog = sample_catalog();
        let ledger = OrderLedger::default();
        let mut session = SessionState::new();

        ledger.add_item(&mut session, catalog.get(&ItemId::new("5")).unwrap()).unwrap();
        ledger.place_order(&mut session, "A").unwrap();
        ledger.add_item(&mut session, catalog.get(&ItemId::new("3")).unwrap()).unwrap();
        ledger.place_order(&mut session, "B").unwrap();

        let stats = DashboardStats::compute(&catalog, session.orders(), 15);
        // 10.99 + 5.99 and 15.99 + 5.99
        assert_eq!(stats.total_sales.amount_cents, 1698 + 2198);
        assert_eq!(stats.order_count, 2);
        assert_eq!(stats.count_for(OrderStatus::Processing), 2);
    }
}
