//! Commerce error types.

use crate::ids::ItemId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart lookups that miss are not errors: removing or adjusting a line
/// that is not in the cart is a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Checkout attempted with nothing in the cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Item failed field validation.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Two catalog entries share an identifier.
    #[error("Duplicate item id: {0}")]
    DuplicateItem(ItemId),

    /// Item not found in the catalog.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
