//! Shopping cart module.
//!
//! Contains types for the cart, its lines, pricing, and the wishlist.

mod cart;
mod pricing;
mod wishlist;

pub use cart::{Cart, CartLine};
pub use pricing::{CartSummary, ShippingPolicy, FLAT_SHIPPING_FEE_CENTS, FREE_SHIPPING_THRESHOLD_CENTS};
pub use wishlist::Wishlist;
