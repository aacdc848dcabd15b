//! AI summary and suggestion commands.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use lumina_ai::{spawn_summary, BookAssistant, GeminiClient};
use lumina_commerce::ids::ItemId;
use lumina_commerce::CommerceError;

use super::{SuggestArgs, SummaryArgs};
use crate::context::Context;

fn assistant(ctx: &Context) -> Result<BookAssistant<GeminiClient>> {
    let client = GeminiClient::new(ctx.config.ai.clone()).context("Failed to create AI client")?;
    Ok(BookAssistant::new(client))
}

/// Run the summary command.
pub async fn summary(args: SummaryArgs, ctx: &Context) -> Result<()> {
    let id = ItemId::new(args.id);
    let item = ctx
        .catalog
        .get(&id)
        .ok_or_else(|| CommerceError::ItemNotFound(id.clone()))?;

    let assistant = Arc::new(assistant(ctx)?);
    let spinner = ctx.output.spinner(&format!("Asking AI about {}...", item.title));
    let summary = spawn_summary(assistant, item.title.clone(), item.author.clone())
        .await
        .context("Summary task failed")?;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "id": item.id,
            "title": item.title,
            "summary": summary,
        }));
        return Ok(());
    }

    match summary {
        Some(text) => {
            ctx.output.header(&format!("AI Summary: {}", item.title));
            println!("{}", text.trim());
        }
        None => ctx.output.warn("Failed to generate AI summary."),
    }

    Ok(())
}

/// Run the suggest command.
pub async fn suggest(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let assistant = assistant(ctx)?;
    let spinner = ctx.output.spinner("Fetching suggestions...");
    let suggestions = assistant.suggestions(&args.query).await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&suggestions);
        return Ok(());
    }

    if suggestions.is_empty() {
        ctx.output.info("No suggestions.");
        return Ok(());
    }

    ctx.output.header(&format!("Suggestions for \"{}\"", args.query));
    for suggestion in &suggestions {
        ctx.output.list_item(suggestion);
    }

    Ok(())
}
