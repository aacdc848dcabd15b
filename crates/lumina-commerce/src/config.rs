//! Store settings.

use crate::cart::{ShippingPolicy, FLAT_SHIPPING_FEE_CENTS, FREE_SHIPPING_THRESHOLD_CENTS};
use crate::money::{Currency, Money};
use crate::search::{CatalogQuery, DEFAULT_PRICE_CEILING_CENTS};
use serde::{Deserialize, Serialize};

/// Pricing and inventory settings for a storefront.
///
/// Every field has a default, so an empty `[store]` table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Currency every price in the store uses.
    #[serde(default)]
    pub currency: Currency,

    /// Subtotals strictly above this ship free.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold_cents: i64,

    /// Shipping charged at or below the threshold.
    #[serde(default = "default_flat_shipping_fee")]
    pub flat_shipping_fee_cents: i64,

    /// Items with fewer copies than this count as low stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Initial price ceiling for catalog queries.
    #[serde(default = "default_price_ceiling")]
    pub default_price_ceiling_cents: i64,
}

fn default_free_shipping_threshold() -> i64 {
    FREE_SHIPPING_THRESHOLD_CENTS
}

fn default_flat_shipping_fee() -> i64 {
    FLAT_SHIPPING_FEE_CENTS
}

fn default_low_stock_threshold() -> u32 {
    15
}

fn default_price_ceiling() -> i64 {
    DEFAULT_PRICE_CEILING_CENTS
}

impl StoreConfig {
    /// Shipping rules for this store.
    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy::new(
            self.currency,
            self.free_shipping_threshold_cents,
            self.flat_shipping_fee_cents,
        )
    }

    /// The query a fresh browse session starts with.
    pub fn default_query(&self) -> CatalogQuery {
        CatalogQuery::new(self.currency)
            .with_max_price(Money::new(self.default_price_ceiling_cents, self.currency))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            free_shipping_threshold_cents: default_free_shipping_threshold(),
            flat_shipping_fee_cents: default_flat_shipping_fee(),
            low_stock_threshold: default_low_stock_threshold(),
            default_price_ceiling_cents: default_price_ceiling(),
        }
    }
}
