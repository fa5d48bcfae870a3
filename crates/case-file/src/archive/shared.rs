//! Shareable archive exports and merging imports.

use std::collections::HashSet;

use case_engine::CaseCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use super::{Archive, ArchiveError, Submission, submission_id};

/// Format version written into shared exports.
pub const SHARED_VERSION: &str = "1.0";

/// Platform tag written into shared exports.
pub const SHARED_PLATFORM: &str = "Case011";

/// A submission as exchanged between archives, without its local id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedSubmission {
    /// Identifier of the case.
    pub case_hash: String,
    /// Case title.
    pub case_name: String,
    /// Case category.
    pub case_category: CaseCategory,
    /// Investigator display name.
    pub investigator_name: String,
    /// Final conclusion.
    pub conclusion: String,
    /// Notebook contents.
    pub notebook: String,
    /// Submission time.
    pub submitted_at: DateTime<Utc>,
    /// Notebook word count.
    pub word_count: usize,
}

impl From<&Submission> for SharedSubmission {
    fn from(submission: &Submission) -> Self {
        Self {
            case_hash: submission.case_hash.clone(),
            case_name: submission.case_name.clone(),
            case_category: submission.case_category,
            investigator_name: submission.investigator_name.clone(),
            conclusion: submission.conclusion.clone(),
            notebook: submission.notebook.clone(),
            submitted_at: submission.submitted_at,
            word_count: submission.word_count,
        }
    }
}

impl From<SharedSubmission> for Submission {
    fn from(shared: SharedSubmission) -> Self {
        Self {
            id: submission_id(&shared.case_hash, shared.submitted_at),
            case_hash: shared.case_hash,
            case_name: shared.case_name,
            case_category: shared.case_category,
            investigator_name: shared.investigator_name,
            conclusion: shared.conclusion,
            notebook: shared.notebook,
            submitted_at: shared.submitted_at,
            word_count: shared.word_count,
        }
    }
}

/// The shareable export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedArchive {
    /// Export format version.
    pub version: String,
    /// Export time.
    pub exported_at: DateTime<Utc>,
    /// Exporting platform.
    pub platform: String,
    /// Exported submissions.
    pub submissions: Vec<SharedSubmission>,
}

/// Only the submissions are required when reading a shared document.
#[derive(Debug, Deserialize)]
struct RawSharedArchive {
    submissions: Vec<SharedSubmission>,
}

type MergeKey = (String, DateTime<Utc>);

fn merge_key(case_hash: &str, submitted_at: DateTime<Utc>) -> MergeKey {
    (case_hash.to_owned(), submitted_at)
}

/// Drops later submissions that repeat an earlier `(case_hash,
/// submitted_at)` pair.
#[must_use]
pub fn deduplicate(submissions: Vec<Submission>) -> Vec<Submission> {
    let mut seen = HashSet::new();
    submissions
        .into_iter()
        .filter(|submission| seen.insert(merge_key(&submission.case_hash, submission.submitted_at)))
        .collect()
}

impl Archive {
    /// Builds the shareable export stamped with `now`.
    #[must_use]
    pub fn export_shared(&self, now: DateTime<Utc>) -> SharedArchive {
        SharedArchive {
            version: SHARED_VERSION.to_owned(),
            exported_at: now,
            platform: SHARED_PLATFORM.to_owned(),
            submissions: self.submissions.iter().map(SharedSubmission::from).collect(),
        }
    }

    /// Renders the shareable export as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::SerializeError`] if rendering fails.
    pub fn export_shared_json(&self, now: DateTime<Utc>) -> Result<String, ArchiveError> {
        serde_json::to_string_pretty(&self.export_shared(now)).map_err(|err| {
            ArchiveError::SerializeError {
                message: err.to_string(),
            }
        })
    }

    /// Merges a shared export, keeping only submissions whose
    /// `(case_hash, submitted_at)` pair is new. Returns how many were added.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidFormat`] when the document has no
    /// `submissions` array or an entry is malformed. Nothing is merged in
    /// that case.
    pub fn import_shared(&mut self, json: &str) -> Result<usize, ArchiveError> {
        let raw: RawSharedArchive =
            serde_json::from_str(json).map_err(|err| ArchiveError::InvalidFormat {
                message: err.to_string(),
            })?;
        let mut seen: HashSet<MergeKey> = self
            .submissions
            .iter()
            .map(|submission| merge_key(&submission.case_hash, submission.submitted_at))
            .collect();
        let before = self.submissions.len();
        self.submissions.extend(
            raw.submissions
                .into_iter()
                .filter(|shared| seen.insert(merge_key(&shared.case_hash, shared.submitted_at)))
                .map(Submission::from),
        );
        let added = self.submissions.len().saturating_sub(before);
        info!(added, total = self.submissions.len(), "shared archive imported");
        Ok(added)
    }
}

/// Link that opens a submission on an archive page under `base`.
///
/// # Errors
///
/// Returns [`url::ParseError`] if `base` is not an absolute URL.
///
/// # Examples
///
/// ```
/// use case_file::archive::shareable_link;
///
/// let link = shareable_link("https://case011.example", "CASE0110", "CASE0110-1700000000000")
///     .expect("valid base");
/// assert_eq!(
///     link,
///     "https://case011.example/archive.html?hash=CASE0110&view=submission&id=CASE0110-1700000000000"
/// );
/// ```
pub fn shareable_link(base: &str, case_hash: &str, id: &str) -> Result<String, url::ParseError> {
    let page = Url::parse(base)?.join("archive.html")?;
    let link = Url::parse_with_params(
        page.as_str(),
        &[("hash", case_hash), ("view", "submission"), ("id", id)],
    )?;
    Ok(link.into())
}
