//! Catalog item types.

use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating on the review scale.
pub const MAX_RATING: f64 = 5.0;

/// Physical or digital format of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookFormat {
    #[default]
    Paperback,
    Hardcover,
    Ebook,
}

impl BookFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookFormat::Paperback => "Paperback",
            BookFormat::Hardcover => "Hardcover",
            BookFormat::Ebook => "Ebook",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "paperback" => Some(BookFormat::Paperback),
            "hardcover" => Some(BookFormat::Hardcover),
            "ebook" => Some(BookFormat::Ebook),
            _ => None,
        }
    }
}

/// Descriptive metadata shown on the detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ItemMetadata {
    /// Binding or delivery format.
    pub format: BookFormat,
    /// Language of the edition.
    pub language: String,
    /// Page count.
    pub pages: u32,
    /// Publisher name.
    pub publisher: String,
    /// ISBN of the edition.
    pub isbn: Option<String>,
}

/// A book in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique item identifier.
    pub id: ItemId,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Category label (e.g., "Fiction").
    pub category: String,
    /// List price.
    pub price: Money,
    /// Sale price, never above the list price.
    pub discount_price: Option<Money>,
    /// Average rating on a 0 to 5 scale.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Units in stock.
    pub stock: u32,
    /// Format, language and publishing details.
    pub metadata: ItemMetadata,
    /// Blurb for the detail page.
    pub description: String,
    /// Shown in the home page "featured" strip.
    #[serde(default)]
    pub featured: bool,
    /// Shown in the home page bestseller grid.
    #[serde(default)]
    pub bestseller: bool,
    /// Flagged as a new arrival.
    #[serde(default)]
    pub new_arrival: bool,
}

impl Item {
    /// Create an item with no discount, rating or stock.
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            category: category.into(),
            price,
            discount_price: None,
            rating: 0.0,
            review_count: 0,
            stock: 0,
            metadata: ItemMetadata::default(),
            description: String::new(),
            featured: false,
            bestseller: false,
            new_arrival: false,
        }
    }

    /// Set the sale price.
    pub fn with_discount(mut self, discount_price: Money) -> Self {
        self.discount_price = Some(discount_price);
        self
    }

    /// Set rating and review count.
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Set units in stock.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Set descriptive metadata.
    pub fn with_metadata(mut self, metadata: ItemMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// The price a customer pays: the sale price if present, else the list price.
    pub fn effective_price(&self) -> Money {
        self.discount_price.unwrap_or(self.price)
    }

    /// Check if a sale price is active.
    pub fn is_discounted(&self) -> bool {
        self.discount_price.is_some()
    }

    /// Amount saved against the list price, if discounted.
    pub fn savings(&self) -> Option<Money> {
        self.discount_price
            .and_then(|discount| self.price.try_subtract(&discount))
    }

    /// Check if any units are in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check the field constraints every catalog entry must satisfy.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CommerceError::InvalidItem("id must not be empty".to_string()));
        }
        if self.price.is_negative() {
            return Err(CommerceError::InvalidItem(format!(
                "{}: price must not be negative",
                self.id
            )));
        }
        if let Some(discount) = self.discount_price {
            if discount.currency != self.price.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.price.currency.code().to_string(),
                    got: discount.currency.code().to_string(),
                });
            }
            if discount.is_negative() || discount.amount_cents > self.price.amount_cents {
                return Err(CommerceError::InvalidItem(format!(
                    "{}: discount price {} must be between 0 and price {}",
                    self.id, discount, self.price
                )));
            }
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CommerceError::InvalidItem(format!(
                "{}: rating {} outside 0-{}",
                self.id, self.rating, MAX_RATING
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_effective_price_uses_discount() {
        let item = Item::new("1", "The Midnight Library", "Matt Haig", "Fiction", usd(1899))
            .with_discount(usd(1499));
        assert_eq!(item.effective_price(), usd(1499));
        assert_eq!(item.savings(), Some(usd(400)));
    }

    #[test]
    fn test_effective_price_without_discount() {
        let item = Item::new("3", "The Alchemist", "Paulo Coelho", "Fiction", usd(1599));
        assert_eq!(item.effective_price(), usd(1599));
        assert!(!item.is_discounted());
        assert_eq!(item.savings(), None);
    }

    #[test]
    fn test_zero_discount_is_still_a_discount() {
        let item = Item::new("x", "Free Sample", "Anon", "Fiction", usd(999)).with_discount(usd(0));
        assert!(item.effective_price().is_zero());
    }

    #[test]
    fn test_validate_rejects_discount_above_price() {
        let item = Item::new("1", "T", "A", "Fiction", usd(1000)).with_discount(usd(1200));
        assert!(matches!(item.validate(), Err(CommerceError::InvalidItem(_))));
    }

    #[test]
    fn test_validate_rejects_rating_out_of_range() {
        let item = Item::new("1", "T", "A", "Fiction", usd(1000)).with_rating(5.5, 10);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_item() {
        let item = Item::new("2", "Atomic Habits", "James Clear", "Non-Fiction", usd(2700))
            .with_discount(usd(2160))
            .with_rating(4.9, 84_000)
            .with_stock(100);
        assert!(item.validate().is_ok());
        assert!(item.in_stock());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(BookFormat::from_str("hardcover"), Some(BookFormat::Hardcover));
        assert_eq!(BookFormat::from_str("scroll"), None);
        assert_eq!(BookFormat::Ebook.as_str(), "Ebook");
    }
}
