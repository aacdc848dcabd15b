//! The text generation seam.

use crate::error::AiError;
use async_trait::async_trait;

/// A remote model that turns prompts into text.
#[async_trait]
pub trait TextService: Send + Sync {
    /// Generate free text (Markdown) for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;

    /// Generate a JSON array of strings for `prompt`, returned as raw text.
    async fn generate_json(&self, prompt: &str) -> Result<String, AiError>;
}
