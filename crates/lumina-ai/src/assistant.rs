//! Book summaries and search suggestions.

use crate::service::TextService;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Shortest query that is sent for suggestions.
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// Number of suggestions asked for.
pub const SUGGESTION_COUNT: usize = 5;

/// Storefront helper over a [`TextService`].
///
/// Failures never reach the caller. They are logged and come back as `None`
/// or an empty list.
#[derive(Debug, Clone)]
pub struct BookAssistant<S> {
    service: S,
}

impl<S: TextService> BookAssistant<S> {
    /// Wrap a text service.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// The underlying service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// A short Markdown summary of a book and why to read it.
    pub async fn summary(&self, title: &str, author: &str) -> Option<String> {
        match self.service.generate(&summary_prompt(title, author)).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(title, author, error = %e, "summary request failed");
                None
            }
        }
    }

    /// Title or author suggestions for a search query.
    pub async fn suggestions(&self, query: &str) -> Vec<String> {
        let query = query.trim();
        if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
            return Vec::new();
        }

        let raw = match self.service.generate_json(&suggestions_prompt(query)).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(query, error = %e, "suggestion request failed");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!(query, error = %e, "suggestions were not a string array");
                Vec::new()
            }
        }
    }
}

/// Run [`BookAssistant::summary`] as a background task.
pub fn spawn_summary<S>(
    assistant: Arc<BookAssistant<S>>,
    title: impl Into<String>,
    author: impl Into<String>,
) -> JoinHandle<Option<String>>
where
    S: TextService + 'static,
{
    let title = title.into();
    let author = author.into();
    tokio::spawn(async move { assistant.summary(&title, &author).await })
}

fn summary_prompt(title: &str, author: &str) -> String {
    format!(
        "Provide a concise, engaging summary and why someone should read \"{title}\" by {author}. Format as Markdown."
    )
}

fn suggestions_prompt(query: &str) -> String {
    format!(
        "Based on the search query \"{query}\", suggest {SUGGESTION_COUNT} book titles or authors. Return only as a JSON array of strings."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AiError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Replays a canned answer and records prompts.
    #[derive(Debug, Default)]
    struct FakeService {
        answer: Option<String>,
        prompts: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl FakeService {
        fn answering(answer: &str) -> Self {
            Self {
                answer: Some(answer.to_string()),
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self::default()
        }

        fn reply(&self, prompt: &str) -> Result<String, AiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answer.clone().ok_or(AiError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    #[async_trait]
    impl TextService for FakeService {
        async fn generate(&self, prompt: &str) -> Result<String, AiError> {
            self.reply(prompt)
        }

        async fn generate_json(&self, prompt: &str) -> Result<String, AiError> {
            self.reply(prompt)
        }
    }

    #[tokio::test]
    async fn test_summary_prompt_names_book() {
        let assistant = BookAssistant::new(FakeService::answering("**Great read**"));
        let summary = assistant.summary("Deep Work", "Cal Newport").await;

        assert_eq!(summary.as_deref(), Some("**Great read**"));
        let prompts = assistant.service().prompts.lock().unwrap();
        assert_eq!(
            prompts[0],
            "Provide a concise, engaging summary and why someone should read \"Deep Work\" by Cal Newport. Format as Markdown."
        );
    }

    #[tokio::test]
    async fn test_summary_failure_is_absent() {
        let assistant = BookAssistant::new(FakeService::failing());
        assert_eq!(assistant.summary("Sapiens", "Harari").await, None);
    }

    #[tokio::test]
    async fn test_short_query_skips_service() {
        let assistant = BookAssistant::new(FakeService::answering("[\"x\"]"));
        assert!(assistant.suggestions("a").await.is_empty());
        assert!(assistant.suggestions(" ").await.is_empty());
        assert_eq!(assistant.service().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_suggestions_parse_array() {
        let assistant =
            BookAssistant::new(FakeService::answering(r#"["Dune","Frank Herbert"]"#));
        let suggestions = assistant.suggestions("dune").await;
        assert_eq!(suggestions, vec!["Dune", "Frank Herbert"]);

        let prompts = assistant.service().prompts.lock().unwrap();
        assert!(prompts[0].contains("\"dune\""));
        assert!(prompts[0].contains("suggest 5 book titles"));
    }

    #[tokio::test]
    async fn test_malformed_suggestions_are_empty() {
        let assistant = BookAssistant::new(FakeService::answering("not json"));
        assert!(assistant.suggestions("rust").await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_suggestions_are_empty() {
        let assistant = BookAssistant::new(FakeService::failing());
        assert!(assistant.suggestions("rust").await.is_empty());
    }

    #[tokio::test]
    async fn test_spawned_summary() {
        let assistant = Arc::new(BookAssistant::new(FakeService::answering("summary")));
        let handle = spawn_summary(Arc::clone(&assistant), "The Alchemist", "Paulo Coelho");
        assert_eq!(handle.await.unwrap().as_deref(), Some("summary"));
    }
}
