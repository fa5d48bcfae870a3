//! The submission archive: closed case files with their conclusions.
//!
//! An [`Archive`] is an owned, ordered list of submissions. It persists as a
//! JSON array inside a capability-scoped directory and can be exchanged with
//! other investigators through the shared export format.

mod atomic_io;
mod error;
mod shared;

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use camino::Utf8Path;
use cap_std::fs::Dir;
use case_engine::CaseCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::investigation::count_words;

pub use error::ArchiveError;
pub use shared::{
    SHARED_PLATFORM, SHARED_VERSION, SharedArchive, SharedSubmission, deduplicate, shareable_link,
};

/// A conclusion as entered by an investigator, before it is archived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
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
}

/// An archived submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Archive-unique id, `{case_hash}-{millis}`.
    pub id: String,
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

fn submission_id(case_hash: &str, submitted_at: DateTime<Utc>) -> String {
    format!("{case_hash}-{}", submitted_at.timestamp_millis())
}

/// Ordering for archive listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first.
    Recent,
    /// Oldest first.
    Oldest,
    /// Longest notebook first.
    Longest,
}

/// Summary figures for an archive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArchiveStats {
    /// Number of submissions.
    pub total_submissions: usize,
    /// Distinct investigator names.
    pub unique_investigators: usize,
    /// Distinct case identifiers.
    pub unique_cases: usize,
    /// Submissions per category tag.
    pub category_counts: BTreeMap<String, usize>,
    /// Time of the most recently added submission.
    pub latest_submission: Option<DateTime<Utc>>,
}

/// Owned, insertion-ordered submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Archive {
    submissions: Vec<Submission>,
}

impl Archive {
    /// Creates an empty archive.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            submissions: Vec::new(),
        }
    }

    /// Wraps existing submissions, keeping their order.
    #[must_use]
    pub const fn from_submissions(submissions: Vec<Submission>) -> Self {
        Self { submissions }
    }

    /// Loads the archive stored at `path` inside `dir`.
    ///
    /// A missing file is an empty archive.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::IoError`] if the file cannot be read and
    /// [`ArchiveError::ParseError`] if it is not a submission array.
    pub fn load(dir: &Dir, path: &Utf8Path) -> Result<Self, ArchiveError> {
        let contents = match dir.read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(%path, "no archive on disk; starting empty");
                return Ok(Self::new());
            }
            Err(err) => {
                return Err(ArchiveError::IoError {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
            }
        };
        let submissions =
            serde_json::from_str(&contents).map_err(|err| ArchiveError::ParseError {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
        Ok(Self { submissions })
    }

    /// Writes the archive to `path` inside `dir`, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::WriteError`] if the file cannot be written.
    pub fn save(&self, dir: &Dir, path: &Utf8Path) -> Result<(), ArchiveError> {
        let json = serde_json::to_string_pretty(&self.submissions).map_err(|err| {
            ArchiveError::SerializeError {
                message: err.to_string(),
            }
        })?;
        atomic_io::write_atomic(dir, path, &json)?;
        debug!(%path, submissions = self.submissions.len(), "archive saved");
        Ok(())
    }

    /// Archives a submission at `now` and returns a copy of the stored
    /// record.
    pub fn push(&mut self, submission: NewSubmission, now: DateTime<Utc>) -> Submission {
        let NewSubmission {
            case_hash,
            case_name,
            case_category,
            investigator_name,
            conclusion,
            notebook,
        } = submission;
        let stored = Submission {
            id: submission_id(&case_hash, now),
            word_count: count_words(&notebook),
            case_hash,
            case_name,
            case_category,
            investigator_name,
            conclusion,
            notebook,
            submitted_at: now,
        };
        debug!(id = %stored.id, "submission archived");
        self.submissions.push(stored.clone());
        stored
    }

    /// All submissions in insertion order.
    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Number of submissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.submissions().len()
    }

    /// Whether the archive holds no submissions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.submissions().is_empty()
    }

    /// Submissions for one case.
    pub fn by_case<'a>(&'a self, case_hash: &'a str) -> impl Iterator<Item = &'a Submission> {
        self.submissions
            .iter()
            .filter(move |submission| submission.case_hash == case_hash)
    }

    /// Looks a submission up by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|submission| submission.id == id)
    }

    /// Removes a submission by id, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Submission> {
        let index = self
            .submissions
            .iter()
            .position(|submission| submission.id == id)?;
        Some(self.submissions.remove(index))
    }

    /// Case-insensitive search over case name, investigator, conclusion
    /// and notebook.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Submission> {
        let needle = query.to_lowercase();
        self.submissions
            .iter()
            .filter(|submission| {
                [
                    &submission.case_name,
                    &submission.investigator_name,
                    &submission.conclusion,
                    &submission.notebook,
                ]
                .into_iter()
                .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Submissions in one category.
    #[must_use]
    pub fn filter_by_category(&self, category: CaseCategory) -> Vec<&Submission> {
        self.submissions
            .iter()
            .filter(|submission| submission.case_category == category)
            .collect()
    }

    /// Submissions in the requested order. Ties keep insertion order.
    #[must_use]
    pub fn sorted(&self, order: SortOrder) -> Vec<&Submission> {
        let mut listing: Vec<&Submission> = self.submissions.iter().collect();
        match order {
            SortOrder::Recent => listing.sort_by_key(|submission| Reverse(submission.submitted_at)),
            SortOrder::Oldest => listing.sort_by_key(|submission| submission.submitted_at),
            SortOrder::Longest => listing.sort_by_key(|submission| Reverse(submission.word_count)),
        }
        listing
    }

    /// Summary figures.
    #[must_use]
    pub fn stats(&self) -> ArchiveStats {
        let investigators: BTreeSet<&str> = self
            .submissions
            .iter()
            .map(|submission| submission.investigator_name.as_str())
            .collect();
        let cases: BTreeSet<&str> = self
            .submissions
            .iter()
            .map(|submission| submission.case_hash.as_str())
            .collect();
        let mut category_counts = BTreeMap::new();
        for submission in &self.submissions {
            *category_counts
                .entry(submission.case_category.as_str().to_owned())
                .or_insert(0) += 1;
        }
        ArchiveStats {
            total_submissions: self.submissions.len(),
            unique_investigators: investigators.len(),
            unique_cases: cases.len(),
            category_counts,
            latest_submission: self.submissions.last().map(|submission| submission.submitted_at),
        }
    }

    /// Whether `investigator` already closed `case_hash`.
    #[must_use]
    pub fn has_submitted(&self, case_hash: &str, investigator: &str) -> bool {
        self.by_case(case_hash)
            .any(|submission| submission.investigator_name == investigator)
    }
}

#[cfg(test)]
pub(crate) mod test_support;
