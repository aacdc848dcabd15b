//! Store dashboard.

use anyhow::{Context as _, Result};
use lumina_commerce::admin::DashboardStats;
use lumina_commerce::checkout::OrderStatus;
use lumina_commerce::ledger::SessionState;

use super::AdminArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the admin command.
pub fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    let session = match args.session.as_deref() {
        Some(path) => {
            let path = ctx.resolve_path(path);
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read session file: {}", path.display()))?;
            serde_json::from_str::<SessionState>(&json)
                .with_context(|| format!("Failed to parse session file: {}", path.display()))?
        }
        None => SessionState::new(),
    };

    let stats = DashboardStats::compute(
        &ctx.catalog,
        session.orders(),
        ctx.config.store.low_stock_threshold,
    );

    if ctx.output.is_json() {
        ctx.output.json(&stats);
        return Ok(());
    }

    ctx.output.header("Dashboard");
    ctx.output.kv("Total Sales", &stats.total_sales.display());
    ctx.output.kv("Orders", &stats.order_count.to_string());
    ctx.output.kv("Books", &stats.catalog_size.to_string());
    ctx.output.kv("Low Stock", &stats.low_stock.len().to_string());

    if stats.order_count > 0 {
        ctx.output.header("Orders by Status");
        for status in OrderStatus::ALL {
            let count = stats.count_for(status);
            if count > 0 {
                ctx.output.kv(&status_badge(status), &count.to_string());
            }
        }
    }

    if !stats.low_stock.is_empty() {
        ctx.output.header("Low Stock");
        for item in &stats.low_stock {
            ctx.output.list_item(&format!("{} ({} left)", item.title, item.stock));
        }
    }

    Ok(())
}
