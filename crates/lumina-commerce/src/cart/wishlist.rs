//! Wishlist of saved items.

use crate::ids::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of saved item ids. Membership is the only state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Wishlist {
    ids: BTreeSet<ItemId>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    ///
    /// Returns whether the id is saved afterwards. Toggling twice is a no-op.
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Check if an item is saved.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    /// Saved ids.
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.ids.iter()
    }

    /// Number of saved items.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();
        let id = ItemId::new("4");
        assert!(wishlist.toggle(&id));
        assert!(wishlist.contains(&id));
        assert!(!wishlist.toggle(&id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_toggle_leaves_other_ids_alone() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&ItemId::new("1"));
        let before = wishlist.clone();
        wishlist.toggle(&ItemId::new("2"));
        wishlist.toggle(&ItemId::new("2"));
        assert_eq!(wishlist, before);
        assert_eq!(wishlist.len(), 1);
    }
}
