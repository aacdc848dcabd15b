//! The in-memory catalog.

use crate::catalog::{is_known_category, Item, ItemMetadata, BookFormat, CATEGORIES};
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

fn next_instance() -> u64 {
    NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed)
}

fn note_unlisted_category(item: &Item) {
    if !is_known_category(&item.category) {
        tracing::warn!(item_id = %item.id, category = %item.category, "item has unlisted category");
    }
}

/// The collection of items on sale.
///
/// Items are validated on the way in. Every mutation bumps `revision`, and
/// every catalog value (clones included) gets its own `instance` number, so
/// the pair identifies one state of one catalog.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<Item>,
    revision: u64,
    instance: u64,
}

impl Catalog {
    /// Build a catalog from items, rejecting invalid entries and duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id.clone()) {
                return Err(CommerceError::DuplicateItem(item.id.clone()));
            }
            note_unlisted_category(item);
        }
        Ok(Self {
            items,
            revision: 0,
            instance: next_instance(),
        })
    }

    /// Load a catalog from a JSON array of item records priced in `currency`.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<ItemRecord> = serde_json::from_str(json)?;
        let items = records
            .into_iter()
            .map(|record| record.into_item(currency))
            .collect();
        Self::new(items)
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Mutation counter, starting at zero.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Identity of this catalog value. Clones get a fresh one.
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Fail if any price is not in `currency`.
    pub fn ensure_currency(&self, currency: Currency) -> Result<(), CommerceError> {
        match self.items.iter().find(|i| i.price.currency != currency) {
            Some(item) => Err(CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: item.price.currency.code().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// The storefront category labels.
    pub fn categories(&self) -> &'static [&'static str] {
        &CATEGORIES
    }

    /// Up to `limit` featured items.
    pub fn featured(&self, limit: usize) -> Vec<&Item> {
        self.items.iter().filter(|i| i.featured).take(limit).collect()
    }

    /// Up to `limit` bestsellers.
    pub fn bestsellers(&self, limit: usize) -> Vec<&Item> {
        self.items.iter().filter(|i| i.bestseller).take(limit).collect()
    }

    /// Up to `limit` other items from the same category as `item`.
    pub fn related(&self, item: &Item, limit: usize) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|i| i.category == item.category && i.id != item.id)
            .take(limit)
            .collect()
    }

    /// Add a new item at the front of the catalog.
    pub fn add_item(&mut self, item: Item) -> Result<(), CommerceError> {
        item.validate()?;
        if self.get(&item.id).is_some() {
            return Err(CommerceError::DuplicateItem(item.id));
        }
        note_unlisted_category(&item);
        self.items.insert(0, item);
        self.revision += 1;
        Ok(())
    }

    /// Replace the item with the same id.
    pub fn update_item(&mut self, item: Item) -> Result<(), CommerceError> {
        item.validate()?;
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or_else(|| CommerceError::ItemNotFound(item.id.clone()))?;
        *slot = item;
        self.revision += 1;
        Ok(())
    }
}

impl Clone for Catalog {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            revision: self.revision,
            instance: next_instance(),
        }
    }
}

impl PartialEq for Catalog {
    /// Catalogs are equal when they hold the same items at the same revision.
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision && self.items == other.items
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
            instance: next_instance(),
        }
    }
}

/// Item as written in a catalog data file, with decimal prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(alias = "genre")]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub format: BookFormat,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub bestseller: bool,
    #[serde(default)]
    pub new_arrival: bool,
}

impl ItemRecord {
    /// Convert to a catalog item priced in `currency`.
    pub fn into_item(self, currency: Currency) -> Item {
        Item {
            id: ItemId::new(self.id),
            title: self.title,
            author: self.author,
            category: self.category,
            price: Money::from_decimal(self.price, currency),
            discount_price: self
                .discount_price
                .map(|d| Money::from_decimal(d, currency)),
            rating: self.rating,
            review_count: self.reviews,
            stock: self.stock,
            metadata: ItemMetadata {
                format: self.format,
                language: self.language,
                pages: self.pages,
                publisher: self.publisher,
                isbn: self.isbn,
            },
            description: self.description,
            featured: self.featured,
            bestseller: self.bestseller,
            new_arrival: self.new_arrival,
        }
    }
}
