//! The strategy seam shared by every enrichment source.

use async_trait::async_trait;
use case_engine::{AssemblyError, CasePayload};
use thiserror::Error;

use super::ports::{EncyclopediaSearchError, TextGenerationError};

/// Which strategy produced an enriched case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseOrigin {
    /// Structured case generated end to end by a model.
    Oracle,
    /// Case built around a topic with encyclopedia and search links.
    TopicSearch,
    /// Static template with a generated briefing.
    BriefingRewrite,
    /// Static template as curated.
    StaticTemplate,
}

impl CaseOrigin {
    /// Returns a stable label for logs and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oracle => "oracle",
            Self::TopicSearch => "topic-search",
            Self::BriefingRewrite => "briefing-rewrite",
            Self::StaticTemplate => "static-template",
        }
    }
}

/// A case payload together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedCase {
    /// The case itself.
    pub payload: CasePayload,
    /// Strategy that produced the case.
    pub origin: CaseOrigin,
    /// Whether model-generated text made it into the payload.
    pub ai_generated: bool,
}

/// Errors that make a strategy fail rather than decline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The text generator failed.
    #[error("text generation failed: {source}")]
    TextGeneration {
        /// Underlying generator error.
        #[from]
        source: TextGenerationError,
    },
    /// The encyclopedia search failed.
    #[error("encyclopedia search failed: {source}")]
    Search {
        /// Underlying search error.
        #[from]
        source: EncyclopediaSearchError,
    },
    /// The static case could not be assembled.
    #[error("case assembly failed: {source}")]
    Assembly {
        /// Underlying assembly error.
        #[from]
        source: AssemblyError,
    },
}

/// One source of cases with attempt-or-decline semantics.
///
/// `Ok(Some(_))` is a produced case, `Ok(None)` a decline, and `Err(_)` a
/// failure. The chain treats declines and failures alike apart from how
/// they are logged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrichmentStrategy: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Attempts to produce the case for `identifier`.
    async fn attempt(&self, identifier: &str) -> Result<Option<EnrichedCase>, StrategyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_error_wraps_generator_errors() {
        let err = StrategyError::from(TextGenerationError::unavailable("offline"));
        assert_eq!(
            err.to_string(),
            "text generation failed: text generator unavailable: offline"
        );
    }

    #[test]
    fn strategy_error_wraps_assembly_errors() {
        let err = StrategyError::from(AssemblyError::EmptyPool);
        assert_eq!(
            err.to_string(),
            "case assembly failed: cannot assemble a case from an empty template pool"
        );
    }

    #[test]
    fn origin_labels_are_stable() {
        assert_eq!(CaseOrigin::TopicSearch.as_str(), "topic-search");
        assert_eq!(CaseOrigin::StaticTemplate.as_str(), "static-template");
    }
}
