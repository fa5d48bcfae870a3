//! Ordered fallback over enrichment strategies.

use std::sync::Arc;

use case_engine::{AssemblyError, TemplatePool};
use tracing::{debug, info, warn};

use super::briefing_rewrite::BriefingRewriteStrategy;
use super::oracle::OracleStrategy;
use super::ports::{EncyclopediaSearch, TextGenerator};
use super::static_template::StaticTemplateStrategy;
use super::strategy::{EnrichedCase, EnrichmentStrategy};
use super::topic_search::TopicSearchStrategy;

/// Runs strategies in order and falls back to the static template.
///
/// Declines and failures both move on to the next strategy. The static
/// strategy always runs last, so only an empty pool makes the chain fail.
pub struct EnrichmentChain {
    strategies: Vec<Arc<dyn EnrichmentStrategy>>,
    fallback: StaticTemplateStrategy,
}

impl EnrichmentChain {
    /// Builds a chain with no optional strategies.
    #[must_use]
    pub fn new(pool: Arc<TemplatePool>) -> Self {
        Self {
            strategies: Vec::new(),
            fallback: StaticTemplateStrategy::new(pool),
        }
    }

    /// Builds the chain in the standard priority order: oracle, topic
    /// search, briefing rewrite, then the static template.
    #[must_use]
    pub fn standard(
        pool: Arc<TemplatePool>,
        generator: Arc<dyn TextGenerator>,
        search: Arc<dyn EncyclopediaSearch>,
    ) -> Self {
        Self::new(Arc::clone(&pool))
            .with_strategy(Arc::new(OracleStrategy::new(Arc::clone(&generator))))
            .with_strategy(Arc::new(TopicSearchStrategy::new(
                search,
                Arc::clone(&generator),
            )))
            .with_strategy(Arc::new(BriefingRewriteStrategy::new(pool, generator)))
    }

    /// Appends a strategy ahead of the static fallback.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Arc<dyn EnrichmentStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Names of the strategies in the order they run, fallback included.
    #[must_use]
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies
            .iter()
            .map(|strategy| strategy.name())
            .chain(std::iter::once(self.fallback.name()))
            .collect()
    }

    /// Produces the case for `identifier` from the first strategy that
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::EmptyPool`] when every optional strategy
    /// gives up and the template pool is empty.
    pub async fn generate(&self, identifier: &str) -> Result<EnrichedCase, AssemblyError> {
        for strategy in &self.strategies {
            match strategy.attempt(identifier).await {
                Ok(Some(case)) => {
                    info!(
                        identifier,
                        strategy = strategy.name(),
                        ai_generated = case.ai_generated,
                        "case generated"
                    );
                    return Ok(case);
                }
                Ok(None) => debug!(identifier, strategy = strategy.name(), "strategy declined"),
                Err(error) => warn!(
                    identifier,
                    strategy = strategy.name(),
                    error = %error,
                    "strategy failed; falling back"
                ),
            }
        }
        let case = self.fallback.assemble(identifier)?;
        debug!(identifier, "case generated from static template");
        Ok(case)
    }
}
