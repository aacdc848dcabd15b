//! Storefront domain types and logic for Lumina Books.
//!
//! This crate provides the two cooperating halves of the storefront core:
//!
//! - **Search**: a pure catalog query engine (category, price ceiling, sort)
//! - **Ledger**: cart, wishlist and order history for one session
//!
//! Around them sit the catalog itself, integer money, the immutable order
//! record, admin dashboard figures and store configuration.
//!
//! # Example
//!
//! ```rust
//! use lumina_commerce::prelude::*;
//!
//! let catalog = sample_catalog();
//! let ledger = OrderLedger::default();
//! let mut session = SessionState::new();
//!
//! let query = CatalogQuery::default().with_sort(SortKey::PriceAsc);
//! let cheapest = query.run(catalog.items()).items()[0];
//! ledger.add_item(&mut session, cheapest).unwrap();
//!
//! let summary = ledger.compute_summary(session.cart());
//! assert_eq!(summary.total.display(), "$16.98");
//!
//! let order = ledger.place_order(&mut session, "1 Main St").unwrap();
//! assert!(session.cart().is_empty());
//! assert_eq!(session.orders()[0].id(), order.id());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod ledger;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        sample_catalog, sample_catalog_in, BookFormat, Catalog, Item, ItemMetadata,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSummary, ShippingPolicy, Wishlist};

    // Checkout
    pub use crate::checkout::{Order, OrderStatus};

    // Search
    pub use crate::search::{
        CatalogQuery, CategoryFilter, MemoizedQuery, QueryOutcome, SearchResults, SortKey,
    };

    // Ledger
    pub use crate::ledger::{CartAck, Clock, OrderLedger, SessionState};

    pub use crate::admin::DashboardStats;
    pub use crate::config::StoreConfig;
}
