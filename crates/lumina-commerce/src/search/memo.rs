//! Memoized catalog queries.

use crate::catalog::Catalog;
use crate::search::{CatalogQuery, SearchResults};

/// Remembers the last query run against a catalog.
///
/// Re-running the same query on the same catalog value at the same revision
/// reuses the matched positions instead of filtering and sorting again.
/// Results are identical to calling [`CatalogQuery::run`] directly.
#[derive(Debug, Default)]
pub struct MemoizedQuery {
    last: Option<MemoEntry>,
    hits: u64,
}

impl MemoizedQuery {
    /// Create an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `query` against `catalog`, reusing the previous result when possible.
    pub fn run<'a>(&mut self, query: &CatalogQuery, catalog: &'a Catalog) -> SearchResults<'a> {
        let items = catalog.items();

        if let Some(entry) = &self.last {
            if entry.answers(query, catalog) {
                self.hits += 1;
                return SearchResults::new(
                    entry.positions.iter().filter_map(|&p| items.get(p)).collect(),
                );
            }
        }

        let results = query.run(items);
        let positions = results
            .items()
            .iter()
            .filter_map(|matched| items.iter().position(|i| std::ptr::eq(i, *matched)))
            .collect();
        self.last = Some(MemoEntry {
            query: query.clone(),
            instance: catalog.instance(),
            revision: catalog.revision(),
            positions,
        });
        results
    }

    /// Number of runs answered from the memo.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

#[derive(Debug)]
struct MemoEntry {
    query: CatalogQuery,
    instance: u64,
    revision: u64,
    positions: Vec<usize>,
}

impl MemoEntry {
    fn answers(&self, query: &CatalogQuery, catalog: &Catalog) -> bool {
        self.instance == catalog.instance()
            && self.revision == catalog.revision()
            && &self.query == query
    }
}
