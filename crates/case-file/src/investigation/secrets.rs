//! Hidden evidence unlocked by notebook keywords.

use std::collections::BTreeSet;

use case_engine::ArtifactRecord;
use serde::Deserialize;
use tracing::info;

use super::rules::{CaseRule, RuleSet, matching_keywords};

/// Distinct keyword hits needed to unlock a secret.
pub const UNLOCK_THRESHOLD: usize = 2;

/// Keywords guarding one case's hidden artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretRule {
    /// Template id the secret belongs to.
    pub case_id: String,
    /// Keywords matched case-insensitively as substrings.
    pub keywords: Vec<String>,
    /// Artifact revealed on unlock.
    pub secret: ArtifactRecord,
}

impl CaseRule for SecretRule {
    const BUNDLED: &'static str = include_str!("../../data/secret_rules.json");

    fn case_id(&self) -> &str {
        &self.case_id
    }
}

/// Outcome of scanning text against a secret rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretScan {
    /// Keywords present in the text, in rule order.
    pub found: Vec<String>,
}

impl SecretScan {
    /// Whether enough keywords matched to unlock the secret.
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.found.len() >= UNLOCK_THRESHOLD
    }
}

/// Scans `text` for the rule's keywords.
///
/// # Examples
///
/// ```
/// use case_file::investigation::{RuleSet, SecretRule, detect_secret};
///
/// let rules = RuleSet::<SecretRule>::bundled().expect("bundled rules");
/// let rule = rules.get("mh370").expect("mh370 rule");
/// let scan = detect_secret("Inmarsat logged a satellite ping at 00:19.", rule);
/// assert!(scan.is_unlocked());
/// ```
#[must_use]
pub fn detect_secret(text: &str, rule: &SecretRule) -> SecretScan {
    SecretScan {
        found: matching_keywords(text, &rule.keywords),
    }
}

/// Tracks which case secrets have been unlocked.
///
/// The ledger is caller-owned; persisting [`SecretLedger::unlocked`] between
/// sessions is up to the caller.
#[derive(Debug, Clone)]
pub struct SecretLedger {
    rules: RuleSet<SecretRule>,
    unlocked: BTreeSet<String>,
}

impl SecretLedger {
    /// Creates a ledger with nothing unlocked.
    #[must_use]
    pub const fn new(rules: RuleSet<SecretRule>) -> Self {
        Self {
            rules,
            unlocked: BTreeSet::new(),
        }
    }

    /// Creates a ledger restoring previously unlocked case ids.
    #[must_use]
    pub fn with_unlocked<I, S>(rules: RuleSet<SecretRule>, unlocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules,
            unlocked: unlocked.into_iter().map(Into::into).collect(),
        }
    }

    /// Scans `text` for `case_id` and returns the secret on first unlock.
    ///
    /// Returns `None` for cases without a rule, for text below the threshold
    /// and for secrets already unlocked.
    pub fn check(&mut self, case_id: &str, text: &str) -> Option<ArtifactRecord> {
        if self.unlocked.contains(case_id) {
            return None;
        }
        let rule = self.rules.get(case_id)?;
        let scan = detect_secret(text, rule);
        if !scan.is_unlocked() {
            return None;
        }
        let secret = rule.secret.clone();
        self.unlocked.insert(case_id.to_owned());
        info!(case_id, found = ?scan.found, "secret unlocked");
        Some(secret)
    }

    /// Whether the secret for `case_id` has been unlocked.
    #[must_use]
    pub fn is_unlocked(&self, case_id: &str) -> bool {
        self.unlocked.contains(case_id)
    }

    /// Unlocked case ids in sorted order.
    pub fn unlocked(&self) -> impl Iterator<Item = &str> {
        self.unlocked.iter().map(String::as_str)
    }

    /// Number of unlocked secrets.
    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn ledger() -> SecretLedger {
        SecretLedger::new(RuleSet::bundled().expect("bundled secret rules"))
    }

    #[rstest]
    fn single_keyword_does_not_unlock(mut ledger: SecretLedger) {
        assert_eq!(ledger.check("voynich-manuscript", "Written on vellum."), None);
        assert!(!ledger.is_unlocked("voynich-manuscript"));
    }

    #[rstest]
    fn secret_is_returned_only_once(mut ledger: SecretLedger) {
        let text = "Carbon dating places the VELLUM in the 15th century.";
        let secret = ledger
            .check("voynich-manuscript", text)
            .expect("first unlock");
        assert_eq!(secret.title, "CLASSIFIED: Recent AI Decryption Attempt");
        assert_eq!(ledger.check("voynich-manuscript", text), None);
        assert_eq!(ledger.unlocked_count(), 1);
        assert_eq!(ledger.unlocked().collect::<Vec<_>>(), vec!["voynich-manuscript"]);
    }

    #[rstest]
    fn unknown_case_never_unlocks(mut ledger: SecretLedger) {
        assert_eq!(ledger.check("kryptos", "cipher vellum botanical"), None);
    }

    #[test]
    fn restored_ledger_skips_known_secrets() {
        let rules = RuleSet::bundled().expect("bundled secret rules");
        let mut ledger = SecretLedger::with_unlocked(rules, ["mh370"]);
        assert!(ledger.is_unlocked("mh370"));
        assert_eq!(ledger.check("mh370", "inmarsat satellite ping"), None);
    }

    #[rstest]
    #[case::none("a quiet evening", 0)]
    #[case::one("Liber Primus pages", 1)]
    #[case::three("Steganography, runes and onion routing", 3)]
    fn scan_counts_distinct_keywords(#[case] text: &str, #[case] expected: usize) {
        let rules = RuleSet::<SecretRule>::bundled().expect("bundled secret rules");
        let rule = rules.get("cicada-3301").expect("cicada rule");
        let scan = detect_secret(text, rule);
        assert_eq!(scan.found.len(), expected);
        assert_eq!(scan.is_unlocked(), expected >= UNLOCK_THRESHOLD);
    }
}
