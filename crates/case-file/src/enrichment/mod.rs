//! Case enrichment through an ordered chain of strategies.
//!
//! Each strategy either produces a case, declines, or fails. The chain tries
//! model-backed strategies first and always ends with the curated template,
//! so enrichment never blocks a case from opening. External collaborators
//! sit behind the [`TextGenerator`] and [`EncyclopediaSearch`] ports.

mod briefing_rewrite;
mod chain;
mod oracle;
mod ports;
mod prompts;
mod static_template;
mod strategy;
mod topic_search;
mod topics;

pub use briefing_rewrite::BriefingRewriteStrategy;
pub use chain::EnrichmentChain;
pub use oracle::OracleStrategy;
pub use ports::{
    EncyclopediaSearch, EncyclopediaSearchError, FixtureEncyclopediaSearch, FixtureTextGenerator,
    SearchHit, TextGenerationError, TextGenerator, TextPrompt,
};
pub use prompts::{
    case_writer_prompt, extract_json_object, format_briefing_paragraphs, oracle_prompt,
};
pub use static_template::StaticTemplateStrategy;
pub use strategy::{CaseOrigin, EnrichedCase, EnrichmentStrategy, StrategyError};
pub use topic_search::TopicSearchStrategy;
pub use topics::{TOPICS, determine_category, topic_artifacts};
