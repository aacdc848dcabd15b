//! Gemini `generateContent` client.

use crate::config::{AiConfig, REDACTED};
use crate::error::AiError;
use crate::service::TextService;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;

/// HTTP client for the Gemini API.
#[derive(Clone)]
pub struct GeminiClient {
    config: AiConfig,
    api_key: String,
    http: Client,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .field("api_key", &REDACTED)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client. Fails without an API key.
    pub fn new(config: AiConfig) -> Result<Self, AiError> {
        let api_key = match &config.api_key {
            Some(key) if !key.trim().is_empty() => key.clone(),
            _ => return Err(AiError::MissingApiKey),
        };

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            config,
            api_key,
            http: builder.build()?,
        })
    }

    /// Settings in use.
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn send(&self, body: Value) -> Result<String, AiError> {
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Status { status, body });
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed.text().ok_or(AiError::EmptyResponse)
    }
}

#[async_trait]
impl TextService for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        tracing::debug!(model = %self.config.model, "requesting text");
        self.send(text_request(prompt, &self.config)).await
    }

    async fn generate_json(&self, prompt: &str) -> Result<String, AiError> {
        tracing::debug!(model = %self.config.model, "requesting JSON");
        self.send(json_request(prompt)).await
    }
}

fn contents(prompt: &str) -> Value {
    json!([{ "parts": [{ "text": prompt }] }])
}

fn text_request(prompt: &str, config: &AiConfig) -> Value {
    json!({
        "contents": contents(prompt),
        "generationConfig": {
            "temperature": config.temperature,
            "topP": config.top_p,
        },
    })
}

fn json_request(prompt: &str) -> Value {
    json!({
        "contents": contents(prompt),
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
            },
        },
    })
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_api_key() {
        assert!(matches!(
            GeminiClient::new(AiConfig::default()),
            Err(AiError::MissingApiKey)
        ));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = GeminiClient::new(AiConfig::default().with_api_key("sk-live-123")).unwrap();
        let printed = format!("{client:?}");
        assert!(!printed.contains("sk-live-123"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_endpoint() {
        let config = AiConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..AiConfig::default()
        }
        .with_api_key("k");
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_text_request_carries_sampling() {
        let body = text_request("hi", &AiConfig::default());
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
        let top_p = body["generationConfig"]["topP"].as_f64().unwrap();
        assert!((top_p - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_json_request_asks_for_string_array() {
        let body = json_request("q");
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "ARRAY");
        assert_eq!(config["responseSchema"]["items"]["type"], "STRING");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Hello, "},{"text":"reader"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text().as_deref(), Some("Hello, reader"));
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.text(), None);
    }
}
