//! Book catalog module.
//!
//! Contains types for items, categories, and the catalog collection.

mod category;
mod collection;
mod item;
mod sample;

pub use category::{is_known_category, CATEGORIES};
pub use collection::{Catalog, ItemRecord};
pub use item::{BookFormat, Item, ItemMetadata, MAX_RATING};
pub use sample::{sample_catalog, sample_catalog_in, sample_items, sample_items_in};
