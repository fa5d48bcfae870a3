//! Structured case generation end to end by a text model.

use std::sync::Arc;

use async_trait::async_trait;
use case_engine::{
    ARTIFACT_CAP, ArtifactKind, ArtifactRecord, CasePayload, Difficulty, derive_seed,
};
use serde::Deserialize;
use tracing::debug;

use super::ports::{TextGenerator, TextPrompt};
use super::prompts::{extract_json_object, format_briefing_paragraphs, oracle_prompt};
use super::strategy::{CaseOrigin, EnrichedCase, EnrichmentStrategy, StrategyError};
use super::topics::determine_category;

#[derive(Debug, Deserialize)]
struct RawOracleCase {
    title: String,
    #[serde(default)]
    briefing: String,
    #[serde(default)]
    artifacts: Vec<RawOracleArtifact>,
}

#[derive(Debug, Deserialize)]
struct RawOracleArtifact {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    url: String,
}

/// Maps a model-supplied type tag onto a kind; unknown tags read as articles.
fn artifact_kind(tag: &str) -> ArtifactKind {
    [ArtifactKind::Video, ArtifactKind::Research]
        .into_iter()
        .find(|kind| tag.trim().eq_ignore_ascii_case(kind.as_str()))
        .unwrap_or(ArtifactKind::Article)
}

impl From<RawOracleArtifact> for ArtifactRecord {
    fn from(raw: RawOracleArtifact) -> Self {
        Self {
            kind: raw.kind.as_deref().map_or(ArtifactKind::Article, artifact_kind),
            title: raw.title,
            description: raw.description,
            url: raw.url,
        }
    }
}

/// Asks a model for a complete case as JSON.
///
/// Declines when the output holds no parseable object or the object has a
/// blank title. A generator error is a failure.
pub struct OracleStrategy {
    generator: Arc<dyn TextGenerator>,
}

impl OracleStrategy {
    /// Builds the strategy over a text generator.
    #[must_use]
    pub const fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    fn parse(identifier: &str, output: &str) -> Option<CasePayload> {
        let json = extract_json_object(output)?;
        let raw: RawOracleCase = serde_json::from_str(json)
            .inspect_err(|error| debug!(identifier, %error, "oracle output is not a case object"))
            .ok()?;
        let title = raw.title.trim();
        if title.is_empty() {
            return None;
        }

        let briefing = if raw.briefing.contains("<p>") {
            raw.briefing.trim().to_owned()
        } else {
            format_briefing_paragraphs(&raw.briefing)
        };
        let artifacts = raw
            .artifacts
            .into_iter()
            .take(ARTIFACT_CAP)
            .map(ArtifactRecord::from)
            .collect();

        Some(CasePayload {
            hash: identifier.to_owned(),
            title: title.to_owned(),
            category: determine_category(title),
            difficulty: Difficulty::from_seed(derive_seed(identifier)),
            briefing,
            wikipedia: None,
            artifacts,
        })
    }
}

#[async_trait]
impl EnrichmentStrategy for OracleStrategy {
    fn name(&self) -> &'static str {
        CaseOrigin::Oracle.as_str()
    }

    async fn attempt(&self, identifier: &str) -> Result<Option<EnrichedCase>, StrategyError> {
        let prompt = TextPrompt::structured(oracle_prompt(identifier));
        let output = self.generator.generate(&prompt).await?;
        Ok(Self::parse(identifier, &output).map(|payload| EnrichedCase {
            payload,
            origin: CaseOrigin::Oracle,
            ai_generated: true,
        }))
    }
}
