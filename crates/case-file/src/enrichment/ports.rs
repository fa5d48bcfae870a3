//! Driven ports for the external collaborators of case enrichment.
//!
//! Enrichment owns the request and response shapes so strategies stay
//! adapter-agnostic. No network adapter ships with this crate; the fixture
//! implementations below stand in until one is wired up.

use async_trait::async_trait;

use crate::macros::define_port_error;

/// Sampling parameters and text for one generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrompt {
    /// Prompt text sent to the model.
    pub text: String,
    /// Upper bound on generated tokens.
    pub max_new_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling threshold.
    pub top_p: f32,
}

impl TextPrompt {
    /// Builds a prompt with the sampling used for structured case requests.
    #[must_use]
    pub fn structured(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_new_tokens: 600,
            temperature: 0.8,
            top_p: 0.95,
        }
    }

    /// Builds a prompt with the sampling used for briefing prose.
    #[must_use]
    pub fn prose(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_new_tokens: 500,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

define_port_error! {
    /// Errors surfaced while calling a text generator.
    pub enum TextGenerationError {
        /// No generator is configured or the model is not loaded.
        Unavailable {
            /// Why the generator is unavailable.
            message: String,
        } => "text generator unavailable: {message}",
        /// Transport failed before a response arrived.
        Transport {
            /// Transport failure detail.
            message: String,
        } => "text generation transport failed: {message}",
        /// The response could not be decoded.
        Decode {
            /// Decode failure detail.
            message: String,
        } => "text generation response decode failed: {message}",
    }
}

/// Port for free-text generation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt`, returning only the continuation.
    async fn generate(&self, prompt: &TextPrompt) -> Result<String, TextGenerationError>;
}

/// One encyclopedia search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Article title.
    pub title: String,
    /// Short description of the article.
    pub description: String,
    /// Article URL.
    pub url: String,
}

define_port_error! {
    /// Errors surfaced while searching the encyclopedia.
    pub enum EncyclopediaSearchError {
        /// Transport failed before a response arrived.
        Transport {
            /// Transport failure detail.
            message: String,
        } => "encyclopedia search transport failed: {message}",
        /// The response could not be decoded.
        Decode {
            /// Decode failure detail.
            message: String,
        } => "encyclopedia search response decode failed: {message}",
    }
}

/// Port for encyclopedia article search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EncyclopediaSearch: Send + Sync {
    /// Returns up to `limit` hits for `query`, best match first.
    ///
    /// # Examples
    ///
    /// ```
    /// use case_file::enrichment::{EncyclopediaSearch, FixtureEncyclopediaSearch};
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
    /// let hits = FixtureEncyclopediaSearch
    ///     .search("Wow signal from space", 5)
    ///     .await
    ///     .expect("fixture search never fails");
    /// assert!(hits.is_empty());
    /// # });
    /// ```
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, EncyclopediaSearchError>;
}

/// Fixture generator that reports itself as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureTextGenerator;

#[async_trait]
impl TextGenerator for FixtureTextGenerator {
    async fn generate(&self, _prompt: &TextPrompt) -> Result<String, TextGenerationError> {
        Err(TextGenerationError::unavailable(
            "no text generator is configured",
        ))
    }
}

/// Fixture search returning no hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureEncyclopediaSearch;

#[async_trait]
impl EncyclopediaSearch for FixtureEncyclopediaSearch {
    async fn search(
        &self,
        _query: &str,
        _limit: usize,
    ) -> Result<Vec<SearchHit>, EncyclopediaSearchError> {
        Ok(Vec::new())
    }
}
