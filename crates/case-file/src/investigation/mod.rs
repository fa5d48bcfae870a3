//! Notebook heuristics for an open investigation.
//!
//! Everything here is a pure function of notebook text, counters or
//! timestamps plus the bundled keyword rules. Persistence of ledgers and
//! counters belongs to the caller.

mod age;
mod progress;
mod rules;
mod secrets;
mod signal;
mod text;

pub use age::{AgeCategory, CaseAge, days_between, format_case_age};
pub use progress::{Achievement, ProgressMetrics};
pub use rules::{CaseRule, RuleSet, RulesError, SUPPORTED_RULES_VERSION};
pub use secrets::{SecretLedger, SecretRule, SecretScan, UNLOCK_THRESHOLD, detect_secret};
pub use signal::{SignalMonitor, SignalReading, SignalRule, score_signal};
pub use text::{
    count_words, format_elapsed, format_time_spent, notebook_timestamp, truncate_text,
};
