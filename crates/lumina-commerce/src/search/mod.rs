//! Search module.
//!
//! The catalog query engine: category and price filters, sort keys, and
//! results with an explicit "no results" signal.

mod filter;
mod memo;
mod query;
mod results;

pub use filter::{within_price_ceiling, CategoryFilter};
pub use memo::MemoizedQuery;
pub use query::{CatalogQuery, SortKey, UnknownSortKey, DEFAULT_PRICE_CEILING_CENTS};
pub use results::{QueryOutcome, SearchResults};
