//! Lumina CLI - Command line storefront for Lumina Books.
//!
//! Commands:
//! - `lumina browse` - Filter and sort the catalog
//! - `lumina checkout` - Fill a cart and place an order
//! - `lumina admin` - Show dashboard figures
//! - `lumina summary` - Ask the AI service about a book
//! - `lumina suggest` - Ask the AI service for search suggestions

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AdminArgs, BrowseArgs, CheckoutArgs, SuggestArgs, SummaryArgs};

/// Lumina CLI - Browse the catalog, check out and ask the AI assistant
#[derive(Parser)]
#[command(name = "lumina")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog JSON file (default: bundled sample books)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort the catalog
    Browse(BrowseArgs),

    /// Add items to a cart and place an order
    Checkout(CheckoutArgs),

    /// Show store dashboard figures
    Admin(AdminArgs),

    /// Generate an AI summary of a book
    Summary(SummaryArgs),

    /// Generate AI search suggestions
    Suggest(SuggestArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), cli.catalog.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Admin(args) => commands::admin::run(args, &ctx),
        Commands::Summary(args) => commands::ai::summary(args, &ctx).await,
        Commands::Suggest(args) => commands::ai::suggest(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
