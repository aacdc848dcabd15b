//! Search filter types.

use crate::catalog::Item;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category selection in the shop sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Match every category.
    #[default]
    All,
    /// Match one category label exactly.
    Only(String),
}

impl CategoryFilter {
    /// Create a single-category filter.
    pub fn only(label: impl Into<String>) -> Self {
        CategoryFilter::Only(label.into())
    }

    /// Check if an item passes this filter.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => &item.category == label,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(label) => write!(f, "{}", label),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// `"All"` (any case) or an empty string selects every category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.to_string()))
        }
    }
}

/// Check if an item's effective price is at or below the ceiling.
///
/// A price in another currency never passes.
pub fn within_price_ceiling(item: &Item, ceiling: &Money) -> bool {
    let price = item.effective_price();
    price.currency == ceiling.currency && price.amount_cents <= ceiling.amount_cents
}
