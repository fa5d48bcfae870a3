//! Template pool loading and lookup.
//!
//! A pool is a versioned, validated collection of [`TemplateRecord`]s. The
//! curated pool ships inside the crate; alternative pools can be loaded from
//! JSON with the same shape.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PoolError;
use crate::template::{CaseCategory, TemplateRecord};

/// Current supported pool version.
const SUPPORTED_VERSION: u32 = 1;

const BUNDLED_POOL: &str = include_str!("../data/case_pool.json");

/// A validated, read-only pool of case templates.
///
/// # Example
///
/// ```
/// use case_engine::TemplatePool;
///
/// let json = r#"{
///     "version": 1,
///     "templates": [{
///         "id": "wow-signal",
///         "title": "The Wow Signal from Space",
///         "category": "scientific",
///         "difficulty": "hard",
///         "briefing": "<p>72 seconds of signal.</p>",
///         "referenceLink": "https://en.wikipedia.org/wiki/Wow!_signal",
///         "artifacts": []
///     }]
/// }"#;
///
/// let pool = TemplatePool::from_json(json).expect("valid pool");
/// assert_eq!(pool.len(), 1);
/// assert!(pool.find("wow-signal").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePool {
    version: u32,
    templates: Vec<TemplateRecord>,
}

impl TemplatePool {
    /// Returns the curated pool compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] if the bundled data fails validation, which only
    /// happens if the data file was edited into an invalid state.
    pub fn bundled() -> Result<Self, PoolError> {
        Self::from_json(BUNDLED_POOL)
    }

    /// Parses a template pool from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] if:
    /// - The JSON is malformed or a field is missing
    /// - The version is unsupported
    /// - The templates array is empty
    /// - A template has a blank id or title
    /// - Two templates share an id
    pub fn from_json(json: &str) -> Result<Self, PoolError> {
        let raw: RawTemplatePool =
            serde_json::from_str(json).map_err(|e| PoolError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a template pool from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, PoolError> {
        let contents = fs::read_to_string(path).map_err(|e| PoolError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawTemplatePool) -> Result<Self, PoolError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(PoolError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.templates.is_empty() {
            return Err(PoolError::EmptyTemplates);
        }

        let mut seen = HashSet::new();
        for (index, template) in raw.templates.iter().enumerate() {
            if template.id.trim().is_empty() {
                return Err(PoolError::BlankField { index, field: "id" });
            }
            if template.title.trim().is_empty() {
                return Err(PoolError::BlankField {
                    index,
                    field: "title",
                });
            }
            if !seen.insert(template.id.as_str()) {
                return Err(PoolError::DuplicateId {
                    id: template.id.clone(),
                });
            }
        }

        Ok(Self {
            version: raw.version,
            templates: raw.templates,
        })
    }

    /// Returns the pool version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns every template in pool order.
    #[must_use]
    pub fn templates(&self) -> &[TemplateRecord] {
        &self.templates
    }

    /// Returns the number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates().len()
    }

    /// Returns `true` when the pool holds no templates.
    ///
    /// Validated pools are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates().is_empty()
    }

    /// Finds a template by id.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TemplateNotFound`] if no template has the id.
    pub fn find(&self, id: &str) -> Result<&TemplateRecord, PoolError> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| PoolError::TemplateNotFound { id: id.to_owned() })
    }

    /// Finds a template by exact title.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&TemplateRecord> {
        self.templates.iter().find(|t| t.title == title)
    }

    /// Returns the distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<CaseCategory> {
        let mut categories = Vec::new();
        for template in &self.templates {
            if !categories.contains(&template.category) {
                categories.push(template.category);
            }
        }
        categories
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTemplatePool {
    version: u32,
    templates: Vec<TemplateRecord>,
}
