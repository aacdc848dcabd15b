//! AI service settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection and sampling settings for the Gemini API.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// API key. Usually supplied through `GEMINI_API_KEY` rather than a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// API root URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature for free-text answers.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling cutoff for free-text answers.
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_p() -> f32 {
    0.8
}

impl AiConfig {
    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Check whether a non-blank key is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Placeholder printed instead of a secret.
pub(crate) const REDACTED: &str = "<redacted>";

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            timeout_secs: None,
        }
    }
}
