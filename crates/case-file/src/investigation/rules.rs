//! Versioned keyword rule files keyed by case id.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Rule file version this crate understands.
pub const SUPPORTED_RULES_VERSION: u32 = 1;

/// Errors raised while loading a rule file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The document is not valid rule JSON.
    #[error("failed to parse rules: {message}")]
    ParseError {
        /// Parser diagnostic.
        message: String,
    },
    /// The document declares a version this crate cannot read.
    #[error("unsupported rules version {actual}; expected {expected}")]
    UnsupportedVersion {
        /// Supported version.
        expected: u32,
        /// Declared version.
        actual: u32,
    },
    /// Two rules target the same case.
    #[error("duplicate rule for case {case_id}")]
    DuplicateCase {
        /// Offending case id.
        case_id: String,
    },
}

/// A rule that applies to exactly one case.
pub trait CaseRule: DeserializeOwned {
    /// Rule document compiled into the crate.
    const BUNDLED: &'static str;

    /// Template id the rule applies to.
    fn case_id(&self) -> &str;
}

#[derive(Debug, Deserialize)]
#[serde(bound = "R: DeserializeOwned")]
struct RawRuleSet<R> {
    version: u32,
    rules: Vec<R>,
}

/// Validated rules, at most one per case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet<R> {
    rules: Vec<R>,
}

impl<R: CaseRule> RuleSet<R> {
    /// Loads the rules compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if the bundled document is invalid.
    pub fn bundled() -> Result<Self, RulesError> {
        Self::from_json(R::BUNDLED)
    }

    /// Parses and validates a rule document.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] on malformed JSON, an unsupported version or
    /// duplicate case ids.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let raw: RawRuleSet<R> = serde_json::from_str(json).map_err(|err| {
            RulesError::ParseError {
                message: err.to_string(),
            }
        })?;
        if raw.version != SUPPORTED_RULES_VERSION {
            return Err(RulesError::UnsupportedVersion {
                expected: SUPPORTED_RULES_VERSION,
                actual: raw.version,
            });
        }
        for (index, rule) in raw.rules.iter().enumerate() {
            let mut earlier = raw.rules.iter().take(index);
            if earlier.any(|other| other.case_id() == rule.case_id()) {
                return Err(RulesError::DuplicateCase {
                    case_id: rule.case_id().to_owned(),
                });
            }
        }
        Ok(Self { rules: raw.rules })
    }

    /// Returns the rule for `case_id`, if any.
    #[must_use]
    pub fn get(&self, case_id: &str) -> Option<&R> {
        self.rules.iter().find(|rule| rule.case_id() == case_id)
    }

    /// Returns every rule in document order.
    #[must_use]
    pub fn rules(&self) -> &[R] {
        &self.rules
    }
}

/// Returns the keywords found in `text`, case-insensitively, in rule order.
pub(crate) fn matching_keywords(text: &str, keywords: &[String]) -> Vec<String> {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| lower.contains(&keyword.to_lowercase()))
        .cloned()
        .collect()
}
