//! The curated template case, used as the terminal fallback.

use std::sync::Arc;

use async_trait::async_trait;
use case_engine::{AssemblyError, TemplatePool, assemble_case};

use super::strategy::{CaseOrigin, EnrichedCase, EnrichmentStrategy, StrategyError};

/// Assembles the case straight from the template pool. Never declines.
#[derive(Debug, Clone)]
pub struct StaticTemplateStrategy {
    pool: Arc<TemplatePool>,
}

impl StaticTemplateStrategy {
    /// Builds the strategy over a template pool.
    #[must_use]
    pub const fn new(pool: Arc<TemplatePool>) -> Self {
        Self { pool }
    }

    /// Assembles the case synchronously.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::EmptyPool`] if the pool holds no templates.
    pub fn assemble(&self, identifier: &str) -> Result<EnrichedCase, AssemblyError> {
        let payload = assemble_case(identifier, &self.pool)?;
        Ok(EnrichedCase {
            payload,
            origin: CaseOrigin::StaticTemplate,
            ai_generated: false,
        })
    }
}

#[async_trait]
impl EnrichmentStrategy for StaticTemplateStrategy {
    fn name(&self) -> &'static str {
        CaseOrigin::StaticTemplate.as_str()
    }

    async fn attempt(&self, identifier: &str) -> Result<Option<EnrichedCase>, StrategyError> {
        Ok(Some(self.assemble(identifier)?))
    }
}
