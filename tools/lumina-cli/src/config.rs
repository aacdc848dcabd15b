//! CLI configuration.

use anyhow::{Context, Result};
use lumina_ai::AiConfig;
use lumina_commerce::config::StoreConfig;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the AI key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store pricing and inventory settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// AI service settings.
    #[serde(default)]
    pub ai: AiConfig,

    /// Catalog JSON file, relative to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(&content, path.ends_with(".json"))
            .with_context(|| format!("Failed to parse config file: {}", path))
    }

    /// Parse config text as JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Take the API key from the environment when it is set.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn with_api_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.ai.api_key = Some(key);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_commerce::Currency;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("", false).unwrap();
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.ai, AiConfig::default());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
catalog_path = "books.json"

[store]
currency = "EUR"
free_shipping_threshold_cents = 3000
low_stock_threshold = 5

[ai]
model = "gemini-2.5-flash"
timeout_secs = 20
"#;
        let config = CliConfig::parse(content, false).unwrap();
        assert_eq!(config.catalog_path.as_deref(), Some("books.json"));
        assert_eq!(config.store.currency, Currency::EUR);
        assert_eq!(config.store.free_shipping_threshold_cents, 3000);
        assert_eq!(config.store.flat_shipping_fee_cents, 599);
        assert_eq!(config.store.low_stock_threshold, 5);
        assert_eq!(config.ai.model, "gemini-2.5-flash");
        assert_eq!(config.ai.timeout_secs, Some(20));
    }

    #[test]
    fn test_parse_json() {
        let config = CliConfig::parse(r#"{"store": {"flat_shipping_fee_cents": 499}}"#, true).unwrap();
        assert_eq!(config.store.flat_shipping_fee_cents, 499);
    }

    #[test]
    fn test_api_key_override() {
        let config = CliConfig::default().with_api_key(Some("secret".to_string()));
        assert_eq!(config.ai.api_key.as_deref(), Some("secret"));

        let config = config.with_api_key(Some(String::new()));
        assert_eq!(config.ai.api_key.as_deref(), Some("secret"));
    }
}
