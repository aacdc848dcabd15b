//! Generative text for the Lumina Books storefront.
//!
//! The storefront asks a remote model for two things: a short summary of a
//! book and title suggestions for a search box. [`TextService`] is the seam
//! to the model, [`GeminiClient`] the production implementation and
//! [`BookAssistant`] the caller-facing layer that turns every failure into
//! an absent result.

pub mod assistant;
pub mod config;
pub mod error;
pub mod gemini;
pub mod service;

pub use assistant::{spawn_summary, BookAssistant};
pub use config::AiConfig;
pub use error::AiError;
pub use gemini::GeminiClient;
pub use service::TextService;
