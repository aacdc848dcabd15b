//! CLI command implementations.

pub mod admin;
pub mod ai;
pub mod browse;
pub mod checkout;

use clap::Args;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category to show (default: all).
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Highest price to include, in store currency (e.g. 14.99).
    #[arg(short, long)]
    pub max_price: Option<f64>,

    /// Sort order: featured, price-asc, price-desc or rating.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Show the featured and bestseller shelves instead of a query.
    #[arg(long)]
    pub home: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Item to add; repeat to add several or to raise a quantity.
    #[arg(short, long = "add", value_name = "ID")]
    pub add: Vec<String>,

    /// Item whose line is removed after adding.
    #[arg(short, long = "remove", value_name = "ID")]
    pub remove: Vec<String>,

    /// Item to save to the wishlist.
    #[arg(short, long = "wishlist", value_name = "ID")]
    pub wishlist: Vec<String>,

    /// Shipping address for the order.
    #[arg(long, default_value = "")]
    pub address: String,

    /// Customer id (default: guest).
    #[arg(long)]
    pub customer: Option<String>,

    /// Print the summary without placing the order.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    /// Session JSON (as printed by `checkout --json`) to read orders from.
    #[arg(short, long)]
    pub session: Option<String>,
}

/// Arguments for the summary command.
#[derive(Args)]
pub struct SummaryArgs {
    /// Item ID.
    pub id: String,
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Search text.
    pub query: String,
}
