//! Cases built around a real-world topic with search-backed evidence.

use std::sync::Arc;

use async_trait::async_trait;
use case_engine::{CasePayload, Difficulty, derive_seed, pick_item};
use tracing::{debug, warn};

use super::ports::{EncyclopediaSearch, TextGenerator, TextPrompt};
use super::prompts::{case_writer_prompt, format_briefing_paragraphs};
use super::strategy::{CaseOrigin, EnrichedCase, EnrichmentStrategy, StrategyError};
use super::topics::{TOPICS, determine_category, topic_artifacts};

/// Number of encyclopedia hits requested per topic.
const SEARCH_LIMIT: usize = 5;

/// Picks a topic by seed and links encyclopedia and search evidence to it.
///
/// The strategy never fails. A search error leaves out the encyclopedia
/// link, and a generator error or blank output keeps the placeholder
/// briefing and clears `ai_generated`.
pub struct TopicSearchStrategy {
    search: Arc<dyn EncyclopediaSearch>,
    generator: Arc<dyn TextGenerator>,
}

impl TopicSearchStrategy {
    /// Builds the strategy over a search port and a text generator.
    #[must_use]
    pub const fn new(
        search: Arc<dyn EncyclopediaSearch>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self { search, generator }
    }

    /// Returns the topic a given identifier maps to.
    #[must_use]
    pub fn topic_for(identifier: &str) -> &'static str {
        pick_item(&TOPICS, derive_seed(identifier))
            .copied()
            .unwrap_or(TOPICS[0])
    }

    async fn write_briefing(&self, topic: &str, payload: &CasePayload) -> Option<String> {
        let prompt = TextPrompt::prose(case_writer_prompt(
            topic,
            payload.category,
            payload.difficulty,
        ));
        let text = self
            .generator
            .generate(&prompt)
            .await
            .inspect_err(|error| {
                warn!(
                    topic,
                    kind = error.kind(),
                    error = %error,
                    "briefing generation failed; keeping placeholder"
                );
            })
            .ok()?;
        Some(format_briefing_paragraphs(&text)).filter(|html| !html.is_empty())
    }
}

fn placeholder_briefing(topic: &str) -> String {
    format!(
        concat!(
            "<p>Case file opened on {topic}. The record is incomplete and the ",
            "official explanations leave questions unanswered.</p>\n",
            "<p>Review the linked evidence and build your own account of what ",
            "happened.</p>"
        ),
        topic = topic
    )
}

#[async_trait]
impl EnrichmentStrategy for TopicSearchStrategy {
    fn name(&self) -> &'static str {
        CaseOrigin::TopicSearch.as_str()
    }

    async fn attempt(&self, identifier: &str) -> Result<Option<EnrichedCase>, StrategyError> {
        let topic = Self::topic_for(identifier);
        let hits = self
            .search
            .search(topic, SEARCH_LIMIT)
            .await
            .unwrap_or_else(|error| {
                warn!(
                    topic,
                    kind = error.kind(),
                    error = %error,
                    "encyclopedia search failed; continuing without hits"
                );
                Vec::new()
            });
        debug!(identifier, topic, hits = hits.len(), "topic search completed");

        let mut payload = CasePayload {
            hash: identifier.to_owned(),
            title: topic.to_owned(),
            category: determine_category(topic),
            difficulty: Difficulty::from_seed(derive_seed(identifier)),
            briefing: placeholder_briefing(topic),
            wikipedia: None,
            artifacts: topic_artifacts(topic, hits.first()),
        };

        let briefing = self.write_briefing(topic, &payload).await;
        let ai_generated = briefing.is_some();
        if let Some(html) = briefing {
            payload.briefing = html;
        }

        Ok(Some(EnrichedCase {
            payload,
            origin: CaseOrigin::TopicSearch,
            ai_generated,
        }))
    }
}
