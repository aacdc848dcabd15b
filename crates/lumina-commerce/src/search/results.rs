//! Search results.

use crate::catalog::Item;

/// Whether a query matched anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Nothing matched; the listing should show its "no results" state.
    NoResults,
    /// This many items matched.
    Matches(usize),
}

/// Items matched by a catalog query, in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResults<'a> {
    items: Vec<&'a Item>,
}

impl<'a> SearchResults<'a> {
    /// Create new search results.
    pub fn new(items: Vec<&'a Item>) -> Self {
        Self { items }
    }

    /// The matched items.
    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    /// Consume into the matched items.
    pub fn into_items(self) -> Vec<&'a Item> {
        self.items
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of matched items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Explicit empty/non-empty signal for the listing.
    pub fn outcome(&self) -> QueryOutcome {
        if self.items.is_empty() {
            QueryOutcome::NoResults
        } else {
            QueryOutcome::Matches(self.items.len())
        }
    }

    /// Result count line shown above the listing.
    pub fn summary_line(&self) -> String {
        format!("{} results found", self.items.len())
    }
}
