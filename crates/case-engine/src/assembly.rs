//! Case assembly from an identifier and a template pool.
//!
//! Assembly is a pure function of `(identifier, templates)`: the seed picks the
//! template and, through an independent sequence, orders its artifacts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AssemblyError;
use crate::pool::TemplatePool;
use crate::seed::derive_seed;
use crate::selection::{pick_item, shuffle};
use crate::template::{ArtifactRecord, CaseCategory, Difficulty, TemplateRecord};

/// Maximum number of artifacts a case payload carries.
pub const ARTIFACT_CAP: usize = 4;

/// A fully assembled case, owned by the caller.
///
/// Serializes with the keys `hash`, `title`, `category`, `difficulty`,
/// `briefing`, `wikipedia` and `artifacts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePayload {
    /// The identifier the case was assembled from.
    pub hash: String,
    /// Case title.
    pub title: String,
    /// Case category.
    pub category: CaseCategory,
    /// Case difficulty.
    pub difficulty: Difficulty,
    /// Briefing markup.
    pub briefing: String,
    /// Encyclopedia reference. Always present for template-backed cases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikipedia: Option<String>,
    /// Shuffled evidence, at most [`ARTIFACT_CAP`] entries.
    pub artifacts: Vec<ArtifactRecord>,
}

impl CasePayload {
    /// Renders the payload as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Assembles the case for `identifier` from a validated pool.
///
/// # Errors
///
/// Returns [`AssemblyError::EmptyPool`] if the pool holds no templates.
///
/// # Example
///
/// ```
/// use case_engine::{TemplatePool, assemble_case};
///
/// let pool = TemplatePool::bundled().expect("bundled pool");
/// let case = assemble_case("voynich-manuscript", &pool).expect("assembled");
///
/// assert_eq!(case.title, "The Tamam Shud Case");
/// assert_eq!(case, assemble_case("voynich-manuscript", &pool).expect("assembled"));
/// ```
pub fn assemble_case(identifier: &str, pool: &TemplatePool) -> Result<CasePayload, AssemblyError> {
    assemble_case_from(identifier, pool.templates())
}

/// Assembles the case for `identifier` from a slice of templates.
///
/// # Errors
///
/// Returns [`AssemblyError::EmptyPool`] if `templates` is empty.
pub fn assemble_case_from(
    identifier: &str,
    templates: &[TemplateRecord],
) -> Result<CasePayload, AssemblyError> {
    let seed = derive_seed(identifier);
    let template = pick_item(templates, seed).ok_or(AssemblyError::EmptyPool)?;

    let mut artifacts = shuffle(&template.artifacts, seed);
    artifacts.truncate(ARTIFACT_CAP);

    debug!(
        identifier,
        seed,
        template = %template.id,
        artifacts = artifacts.len(),
        "assembled case"
    );

    Ok(CasePayload {
        hash: identifier.to_owned(),
        title: template.title.clone(),
        category: template.category,
        difficulty: template.difficulty,
        briefing: template.briefing.clone(),
        wikipedia: Some(template.reference_link.clone()),
        artifacts,
    })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::template::ArtifactKind;

    fn artifact(title: &str) -> ArtifactRecord {
        ArtifactRecord {
            kind: ArtifactKind::Article,
            title: title.to_owned(),
            description: format!("{title} description"),
            url: format!("https://example.invalid/{title}"),
        }
    }

    fn template(id: &str, artifact_titles: &[&str]) -> TemplateRecord {
        TemplateRecord {
            id: id.to_owned(),
            title: format!("Case {id}"),
            category: CaseCategory::Historical,
            difficulty: Difficulty::Medium,
            briefing: format!("<p>{id}</p>"),
            reference_link: format!("https://example.invalid/wiki/{id}"),
            artifacts: artifact_titles.iter().map(|t| artifact(t)).collect(),
        }
    }

    #[fixture]
    fn three_templates() -> Vec<TemplateRecord> {
        vec![
            template("first", &["a", "b", "c", "d", "e", "f"]),
            template("second", &["a", "b"]),
            template("third", &[]),
        ]
    }

    #[rstest]
    fn empty_pool_is_an_error() {
        let err = assemble_case_from("anything", &[]).expect_err("empty pool");
        assert_eq!(err, AssemblyError::EmptyPool);
    }

    #[rstest]
    fn artifacts_are_capped(three_templates: Vec<TemplateRecord>) {
        // "a" -> seed 97 -> index 0 of three.
        let case = assemble_case_from("a", &three_templates).expect("assembled");
        assert_eq!(case.title, "Case first");
        assert_eq!(case.artifacts.len(), ARTIFACT_CAP);
    }

    #[rstest]
    fn short_artifact_lists_are_not_padded(three_templates: Vec<TemplateRecord>) {
        // "A1B2C3D4" -> index 2, "hello world" -> index 1.
        let third = assemble_case_from("A1B2C3D4", &three_templates).expect("assembled");
        assert_eq!(third.title, "Case third");
        assert!(third.artifacts.is_empty());

        let second = assemble_case_from("hello world", &three_templates).expect("assembled");
        assert_eq!(second.title, "Case second");
        assert_eq!(second.artifacts.len(), 2);
    }

    #[rstest]
    fn payload_copies_template_fields(three_templates: Vec<TemplateRecord>) {
        let case = assemble_case_from("a", &three_templates).expect("assembled");
        assert_eq!(case.hash, "a");
        assert_eq!(case.briefing, "<p>first</p>");
        assert_eq!(
            case.wikipedia.as_deref(),
            Some("https://example.invalid/wiki/first")
        );
    }

    #[rstest]
    fn artifacts_come_from_the_template(three_templates: Vec<TemplateRecord>) {
        let case = assemble_case_from("a", &three_templates).expect("assembled");
        let source = &three_templates.first().expect("template").artifacts;
        assert!(case.artifacts.iter().all(|a| source.contains(a)));
    }

    #[test]
    fn payload_json_uses_expected_keys() {
        let case = assemble_case_from("a", &[template("x", &["a"])]).expect("assembled");
        let json = serde_json::to_value(&case).expect("serialize");
        for key in [
            "hash",
            "title",
            "category",
            "difficulty",
            "briefing",
            "wikipedia",
            "artifacts",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["artifacts"][0]["type"], "article");
    }

    #[test]
    fn pretty_json_round_trips() {
        let case = assemble_case_from("a", &[template("x", &["a", "b"])]).expect("assembled");
        let rendered = case.to_json_pretty().expect("render");
        let parsed: CasePayload = serde_json::from_str(&rendered).expect("parse");
        assert_eq!(parsed, case);
    }
}
