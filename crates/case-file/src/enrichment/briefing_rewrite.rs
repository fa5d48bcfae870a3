//! Static cases with a model-written briefing.

use std::sync::Arc;

use async_trait::async_trait;
use case_engine::{TemplatePool, assemble_case};

use super::ports::{TextGenerator, TextPrompt};
use super::prompts::{case_writer_prompt, format_briefing_paragraphs};
use super::strategy::{CaseOrigin, EnrichedCase, EnrichmentStrategy, StrategyError};

/// Assembles the static case and swaps in a generated briefing.
///
/// Everything apart from the briefing comes from the template. Declines
/// when the generator returns blank text.
pub struct BriefingRewriteStrategy {
    pool: Arc<TemplatePool>,
    generator: Arc<dyn TextGenerator>,
}

impl BriefingRewriteStrategy {
    /// Builds the strategy over a template pool and a text generator.
    #[must_use]
    pub const fn new(pool: Arc<TemplatePool>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { pool, generator }
    }
}

#[async_trait]
impl EnrichmentStrategy for BriefingRewriteStrategy {
    fn name(&self) -> &'static str {
        CaseOrigin::BriefingRewrite.as_str()
    }

    async fn attempt(&self, identifier: &str) -> Result<Option<EnrichedCase>, StrategyError> {
        let mut payload = assemble_case(identifier, &self.pool)?;
        let prompt = TextPrompt::prose(case_writer_prompt(
            &payload.title,
            payload.category,
            payload.difficulty,
        ));
        let text = self.generator.generate(&prompt).await?;
        let briefing = format_briefing_paragraphs(&text);
        if briefing.is_empty() {
            return Ok(None);
        }
        payload.briefing = briefing;
        Ok(Some(EnrichedCase {
            payload,
            origin: CaseOrigin::BriefingRewrite,
            ai_generated: true,
        }))
    }
}
