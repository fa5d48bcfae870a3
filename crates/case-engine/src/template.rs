//! Template and artifact records.
//!
//! Templates are curated, read-only case descriptions. They carry everything a
//! case payload needs apart from the artifact ordering, which is derived per
//! identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad family a case belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseCategory {
    /// Ciphers, codes and undeciphered scripts.
    Cryptographic,
    /// Missing people, vanished craft and unsolved deaths.
    Disappearance,
    /// Ancient sites and objects.
    Archaeological,
    /// Historical events without a settled explanation.
    Historical,
    /// Physical phenomena and unexplained signals.
    Scientific,
}

impl CaseCategory {
    /// Returns the lowercase tag used in JSON and on screen.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cryptographic => "cryptographic",
            Self::Disappearance => "disappearance",
            Self::Archaeological => "archaeological",
            Self::Historical => "historical",
            Self::Scientific => "scientific",
        }
    }
}

impl fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How demanding a case is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry-level case.
    Easy,
    /// Moderate case.
    Medium,
    /// Hard case.
    Hard,
}

impl Difficulty {
    /// All difficulties in ascending order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Chooses a difficulty from a seed as `ALL[seed % 3]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use case_engine::{Difficulty, derive_seed};
    ///
    /// assert_eq!(Difficulty::from_seed(derive_seed("")), Difficulty::Easy);
    /// assert_eq!(Difficulty::from_seed(derive_seed("a")), Difficulty::Medium);
    /// ```
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "difficulty is the seed modulo the number of tiers"
    )]
    pub const fn from_seed(seed: u32) -> Self {
        match seed % 3 {
            0 => Self::Easy,
            1 => Self::Medium,
            _ => Self::Hard,
        }
    }

    /// Returns the lowercase tag used in JSON and on screen.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of evidence an artifact links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Written article or official record.
    Article,
    /// Documentary or other video.
    Video,
    /// Academic research.
    Research,
}

impl ArtifactKind {
    /// Returns the lowercase tag used in JSON and on screen.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Research => "research",
        }
    }
}

/// A piece of evidence attached to a case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Evidence kind, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    /// Display title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Reference link for the evidence.
    pub url: String,
}

/// An immutable case template from the curated pool.
///
/// # Example
///
/// ```
/// use case_engine::{ArtifactKind, ArtifactRecord, CaseCategory, Difficulty, TemplateRecord};
///
/// let template = TemplateRecord {
///     id: "kryptos".to_owned(),
///     title: "The Kryptos Sculpture".to_owned(),
///     category: CaseCategory::Cryptographic,
///     difficulty: Difficulty::Hard,
///     briefing: "<p>Four messages, one unsolved.</p>".to_owned(),
///     reference_link: "https://en.wikipedia.org/wiki/Kryptos".to_owned(),
///     artifacts: vec![ArtifactRecord {
///         kind: ArtifactKind::Article,
///         title: "K4".to_owned(),
///         description: "The unsolved passage".to_owned(),
///         url: "https://en.wikipedia.org/wiki/Kryptos".to_owned(),
///     }],
/// };
///
/// assert_eq!(template.artifacts.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    /// Stable template identifier, unique within a pool.
    pub id: String,
    /// Case title.
    pub title: String,
    /// Case category.
    pub category: CaseCategory,
    /// Case difficulty.
    pub difficulty: Difficulty,
    /// Briefing markup, a sequence of HTML paragraphs.
    pub briefing: String,
    /// Encyclopedia reference for the case.
    pub reference_link: String,
    /// Evidence in curated order.
    pub artifacts: Vec<ArtifactRecord>,
}
