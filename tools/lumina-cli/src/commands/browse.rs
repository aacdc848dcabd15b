//! Catalog browsing.

use anyhow::Result;
use lumina_commerce::money::Money;
use lumina_commerce::search::{CategoryFilter, QueryOutcome, SortKey};

use super::BrowseArgs;
use crate::context::Context;

const FEATURED_SHELF: usize = 4;
const BESTSELLER_SHELF: usize = 8;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if args.home {
        return home(ctx);
    }

    let store = &ctx.config.store;
    let mut query = store.default_query();

    if let Some(category) = args.category.as_deref() {
        query = query.with_category(category.parse::<CategoryFilter>().unwrap_or_default());
    }
    if let Some(max_price) = args.max_price {
        query = query.with_max_price(Money::from_decimal(max_price, store.currency));
    }
    if let Some(sort) = args.sort.as_deref() {
        query = query.with_sort(sort.parse::<SortKey>()?);
    }

    ctx.output.debug(&format!(
        "Query: category={}, max price={}, sort={}",
        query.category,
        query.max_price,
        query.sort.as_str()
    ));

    let results = query.run(ctx.catalog.items());

    if ctx.output.is_json() {
        ctx.output.json(&results.items());
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} under {} ({})",
        query.category,
        query.max_price.display(),
        query.sort.display_name()
    ));

    match results.outcome() {
        QueryOutcome::NoResults => {
            ctx.output.info("No books found. Try adjusting your filters.");
        }
        QueryOutcome::Matches(_) => {
            ctx.output.info(&results.summary_line());
            ctx.output.items(results.items());
        }
    }

    Ok(())
}

fn home(ctx: &Context) -> Result<()> {
    let featured = ctx.catalog.featured(FEATURED_SHELF);
    let bestsellers = ctx.catalog.bestsellers(BESTSELLER_SHELF);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "featured": featured,
            "bestsellers": bestsellers,
        }));
        return Ok(());
    }

    ctx.output.header("Featured");
    ctx.output.items(&featured);

    ctx.output.header("Bestsellers");
    ctx.output.items(&bestsellers);

    ctx.output.header("Categories");
    for category in ctx.catalog.categories() {
        ctx.output.list_item(category);
    }

    Ok(())
}
