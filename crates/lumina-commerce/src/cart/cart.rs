//! Cart and cart line types.

use crate::catalog::Item;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One line in the cart: an item snapshot and how many copies.
///
/// The quantity is always at least 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Item as it was when first added.
    pub item: Item,
    quantity: u32,
}

impl CartLine {
    /// Create a line with quantity 1.
    pub fn new(item: Item) -> Self {
        Self { item, quantity: 1 }
    }

    /// The line's key.
    pub fn item_id(&self) -> &ItemId {
        &self.item.id
    }

    /// Number of copies.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price charged per copy.
    pub fn unit_price(&self) -> Money {
        self.item.effective_price()
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price().saturating_multiply(i64::from(self.quantity))
    }

    /// Change the quantity by `delta`, never going below 1.
    pub(crate) fn adjust(&mut self, delta: i64) -> u32 {
        let next = i64::from(self.quantity).saturating_add(delta);
        self.quantity = u32::try_from(next.max(1)).unwrap_or(u32::MAX);
        self.quantity
    }
}

/// A shopping cart, in the order items were first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one copy of an item.
    ///
    /// Bumps the existing line if the item is already in the cart,
    /// otherwise appends a new line. Returns the line's new quantity.
    pub fn add(&mut self, item: &Item) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            return line.adjust(1);
        }
        self.lines.push(CartLine::new(item.clone()));
        1
    }

    /// Remove the line for an item. Returns whether a line was removed.
    pub fn remove(&mut self, item_id: &ItemId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.item_id() != item_id);
        self.lines.len() < len_before
    }

    /// Change a line's quantity by `delta`, clamped at 1.
    ///
    /// Returns the new quantity, or `None` if the item is not in the cart.
    pub fn adjust(&mut self, item_id: &ItemId, delta: i64) -> Option<u32> {
        self.lines
            .iter_mut()
            .find(|l| l.item_id() == item_id)
            .map(|line| line.adjust(delta))
    }

    /// Empty the cart, returning the lines it held.
    pub fn take(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up the line for an item.
    pub fn line(&self, item_id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id() == item_id)
    }

    /// Total number of copies (the cart badge count).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<CartLine> for Cart {
    /// Builds a cart from lines, merging lines that share an item.
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for line in iter {
            match cart.lines.iter_mut().find(|l| l.item.id == line.item.id) {
                Some(existing) => {
                    existing.adjust(i64::from(line.quantity));
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn book(id: &str, cents: i64) -> Item {
        Item::new(id, "Book", "Author", "Fiction", Money::new(cents, Currency::USD))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        let item = book("1", 1499);
        assert_eq!(cart.add(&item), 1);
        assert_eq!(cart.add(&item), 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(&book("b", 100));
        cart.add(&book("a", 100));
        cart.add(&book("b", 100));
        let ids: Vec<_> = cart.lines().iter().map(|l| l.item_id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_adjust_clamps_at_one() {
        let mut cart = Cart::new();
        let item = book("1", 1000);
        cart.add(&item);
        assert_eq!(cart.adjust(&item.id, 2), Some(3));
        assert_eq!(cart.adjust(&item.id, -100), Some(1));
        assert_eq!(cart.adjust(&item.id, i64::MIN), Some(1));
        assert_eq!(cart.adjust(&ItemId::new("missing"), 1), None);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        let item = book("1", 1000);
        cart.add(&item);
        assert!(cart.remove(&item.id));
        assert!(!cart.remove(&item.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_line_total_uses_effective_price() {
        let item = book("2", 2700).with_discount(Money::new(2160, Currency::USD));
        let mut cart = Cart::new();
        cart.add(&item);
        cart.add(&item);
        assert_eq!(cart.lines()[0].line_total().amount_cents, 4320);
    }

    #[test]
    fn test_from_iter_merges_duplicates() {
        let line = CartLine::new(book("1", 100));
        let cart: Cart = vec![line.clone(), line].into_iter().collect();
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.line(&ItemId::new("1")).unwrap().quantity(), 2);
    }

    #[test]
    fn test_take_empties_cart() {
        let mut cart = Cart::new();
        cart.add(&book("1", 100));
        let lines = cart.take();
        assert_eq!(lines.len(), 1);
        assert!(cart.is_empty());
    }
}
