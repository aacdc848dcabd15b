//! AI service error types.

use thiserror::Error;

/// Errors from the generative text service.
///
/// [`BookAssistant`](crate::BookAssistant) never surfaces these to callers;
/// it logs them and degrades to an absent result.
#[derive(Error, Debug)]
pub enum AiError {
    /// No API key was configured.
    #[error("No API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response carried no text.
    #[error("Empty response from service")]
    EmptyResponse,

    /// The response text was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
