//! Catalog query: filter and sort a list of items.

use crate::catalog::Item;
use crate::money::{Currency, Money};
use crate::search::{within_price_ceiling, CategoryFilter, SearchResults};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default price ceiling, matching the shop slider's starting position.
pub const DEFAULT_PRICE_CEILING_CENTS: i64 = 5000;

/// Sort options for the shop listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Keep catalog order.
    #[default]
    Featured,
    /// Sort by effective price, low to high.
    PriceAsc,
    /// Sort by effective price, high to low.
    PriceDesc,
    /// Sort by rating, highest first.
    Rating,
}

impl SortKey {
    /// Every sort key, in dropdown order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Rating => "Rating",
        }
    }

    /// Order `items` in place. The sort is stable, so ties keep their
    /// input order.
    pub fn apply(&self, items: &mut [&Item]) {
        match self {
            SortKey::Featured => {}
            SortKey::PriceAsc => items.sort_by_key(|i| i.effective_price().amount_cents),
            SortKey::PriceDesc => {
                items.sort_by(|a, b| {
                    b.effective_price()
                        .amount_cents
                        .cmp(&a.effective_price().amount_cents)
                })
            }
            SortKey::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error for an unrecognised sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    /// Accepts the kebab-case key or the dropdown label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s) || k.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// A catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Category filter.
    pub category: CategoryFilter,
    /// Highest effective price to include.
    pub max_price: Money,
    /// Sort option.
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Create a query with every category, the default ceiling and catalog order.
    pub fn new(currency: Currency) -> Self {
        Self {
            category: CategoryFilter::All,
            max_price: Money::new(DEFAULT_PRICE_CEILING_CENTS, currency),
            sort: SortKey::Featured,
        }
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the price ceiling.
    pub fn with_max_price(mut self, max_price: Money) -> Self {
        self.max_price = max_price;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Check if an item passes every filter.
    pub fn matches(&self, item: &Item) -> bool {
        self.category.matches(item) && within_price_ceiling(item, &self.max_price)
    }

    /// Run the query against `items`.
    ///
    /// Pure: the input is only borrowed, and the same input always yields
    /// the same output.
    pub fn run<'a>(&self, items: &'a [Item]) -> SearchResults<'a> {
        let mut matched: Vec<&Item> = items.iter().filter(|i| self.matches(i)).collect();
        self.sort.apply(&mut matched);
        SearchResults::new(matched)
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
