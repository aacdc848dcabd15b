//! Checkout module.
//!
//! Contains the immutable order record produced at checkout.

mod order;

pub use order::{Order, OrderStatus};
