//! Topic list and keyword categorisation for search-driven cases.

use case_engine::{ArtifactKind, ArtifactRecord, CaseCategory};
use url::Url;

use super::ports::SearchHit;

/// Real-world mysteries a search-driven case can be built around.
pub const TOPICS: [&str; 20] = [
    "Bermuda Triangle disappearances",
    "Nazca Lines Peru",
    "Stonehenge construction mystery",
    "Mary Celeste ghost ship",
    "Wow signal from space",
    "Shroud of Turin authenticity",
    "Loch Ness Monster sightings",
    "Atlantis lost civilization",
    "Easter Island Moai statues",
    "Tunguska event explosion",
    "Black Dahlia murder",
    "Jack the Ripper identity",
    "Amelia Earhart disappearance",
    "Malaysian Airlines MH370",
    "Cicada 3301 puzzle",
    "Kryptos CIA sculpture",
    "Phaistos Disc inscription",
    "Linear A script Minoan",
    "Indus Valley script",
    "Rongorongo Easter Island script",
];

const VIDEO_SEARCH_URL: &str = "https://www.youtube.com/results";
const SCHOLAR_SEARCH_URL: &str = "https://scholar.google.com/scholar";

/// Keyword groups checked in order; the first group with a match wins.
const CATEGORY_KEYWORDS: [(CaseCategory, &[&str]); 4] = [
    (CaseCategory::Cryptographic, &["cipher", "code", "script"]),
    (
        CaseCategory::Disappearance,
        &["disappear", "missing", "murder"],
    ),
    (
        CaseCategory::Archaeological,
        &["ancient", "artifact", "ruins"],
    ),
    (CaseCategory::Scientific, &["space", "signal", "explosion"]),
];

/// Infers a category from a topic or title by keyword.
///
/// Matching is case-insensitive and substring based, so "inscription"
/// counts as "script". Topics matching no group are historical.
///
/// # Examples
///
/// ```
/// use case_engine::CaseCategory;
/// use case_file::enrichment::determine_category;
///
/// assert_eq!(determine_category("Wow signal from space"), CaseCategory::Scientific);
/// assert_eq!(determine_category("Nazca Lines Peru"), CaseCategory::Historical);
/// ```
#[must_use]
pub fn determine_category(topic: &str) -> CaseCategory {
    let lower = topic.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map_or(CaseCategory::Historical, |(category, _)| *category)
}

/// Builds the evidence list for a topic from an optional encyclopedia hit.
///
/// The hit, when present, comes first as an article. A documentary search
/// and a scholarly search follow.
#[must_use]
pub fn topic_artifacts(topic: &str, hit: Option<&SearchHit>) -> Vec<ArtifactRecord> {
    let mut artifacts = Vec::with_capacity(3);
    if let Some(found) = hit {
        artifacts.push(ArtifactRecord {
            kind: ArtifactKind::Article,
            title: format!("Wikipedia - {}", found.title),
            description: found.description.clone(),
            url: found.url.clone(),
        });
    }
    artifacts.push(ArtifactRecord {
        kind: ArtifactKind::Video,
        title: format!("Documentary: {topic}"),
        description: "Video investigation and analysis".to_owned(),
        url: search_link(
            VIDEO_SEARCH_URL,
            "search_query",
            &format!("{topic} documentary"),
        ),
    });
    artifacts.push(ArtifactRecord {
        kind: ArtifactKind::Research,
        title: format!("Academic Research - {topic}"),
        description: "Scholarly articles and papers".to_owned(),
        url: search_link(SCHOLAR_SEARCH_URL, "q", topic),
    });
    artifacts
}

fn search_link(base: &str, key: &str, query: &str) -> String {
    Url::parse_with_params(base, &[(key, query)]).map_or_else(|_| base.to_owned(), String::from)
}
