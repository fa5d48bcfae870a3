//! Signal strength: how close notebook notes are to a case's key ideas.

use serde::Deserialize;
use tracing::debug;

use super::rules::{CaseRule, matching_keywords};

const HIGH_WEIGHT: u64 = 3;
const MEDIUM_WEIGHT: u64 = 2;
const LOW_WEIGHT: u64 = 1;

/// Tiered keywords for one case.
///
/// Keywords outside every tier still score, with the low weight.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalRule {
    /// Template id the rule belongs to.
    pub case_id: String,
    /// Every keyword that scores.
    pub keywords: Vec<String>,
    /// Keywords weighing three points.
    #[serde(default)]
    pub high: Vec<String>,
    /// Keywords weighing two points.
    #[serde(default)]
    pub medium: Vec<String>,
    /// Keywords weighing one point.
    #[serde(default)]
    pub low: Vec<String>,
}

impl SignalRule {
    fn weight(&self, keyword: &str) -> u64 {
        if self.high.iter().any(|tier| tier == keyword) {
            HIGH_WEIGHT
        } else if self.medium.iter().any(|tier| tier == keyword) {
            MEDIUM_WEIGHT
        } else {
            LOW_WEIGHT
        }
    }

    fn max_score(&self) -> u64 {
        let tier = |keywords: &[String], weight: u64| {
            u64::try_from(keywords.len())
                .unwrap_or(u64::MAX)
                .saturating_mul(weight)
        };
        tier(&self.high, HIGH_WEIGHT)
            .saturating_add(tier(&self.medium, MEDIUM_WEIGHT))
            .saturating_add(tier(&self.low, LOW_WEIGHT))
    }
}

impl CaseRule for SignalRule {
    const BUNDLED: &'static str = include_str!("../../data/signal_rules.json");

    fn case_id(&self) -> &str {
        &self.case_id
    }
}

/// A scored reading of notebook text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalReading {
    /// Strength percentage in `0..=100`.
    pub strength: u8,
    /// Keywords present in the text, in rule order.
    pub found: Vec<String>,
}

impl SignalReading {
    /// Signal bars from zero to five.
    #[must_use]
    pub const fn bars(&self) -> u8 {
        match self.strength {
            80..=u8::MAX => 5,
            60..=79 => 4,
            40..=59 => 3,
            20..=39 => 2,
            1..=19 => 1,
            0 => 0,
        }
    }

    /// Investigator hint for the current bar count.
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self.bars() {
            0 => "SIGNAL WEAK - BEGIN RESEARCH INTO CORE EVIDENCE",
            1 => "SIGNAL DETECTED - EXPLORE ALTERNATIVE THEORIES",
            2 => "SIGNAL MODERATE - CONSIDER TECHNICAL ASPECTS",
            3 => "SIGNAL STRONG - INVESTIGATE SCIENTIFIC EXPLANATIONS",
            4 => "SIGNAL VERY STRONG - VERIFY PRIMARY SOURCES",
            _ => "MAXIMUM SIGNAL - COMPREHENSIVE ANALYSIS ACHIEVED",
        }
    }
}

/// Scores `text` against a signal rule.
///
/// The score is the sum of matched keyword weights over the tier maximum,
/// rounded half up and capped at 100. A rule with empty tiers scores zero.
///
/// # Examples
///
/// ```
/// use case_file::investigation::{RuleSet, SignalRule, score_signal};
///
/// let rules = RuleSet::<SignalRule>::bundled().expect("bundled rules");
/// let rule = rules.get("voynich-manuscript").expect("voynich rule");
/// let reading = score_signal("Maybe a hoax in a constructed language?", rule);
/// assert_eq!(reading.strength, 33);
/// assert_eq!(reading.bars(), 2);
/// ```
#[must_use]
pub fn score_signal(text: &str, rule: &SignalRule) -> SignalReading {
    let found = matching_keywords(text, &rule.keywords);
    let total = found
        .iter()
        .map(|keyword| rule.weight(keyword))
        .fold(0_u64, u64::saturating_add);
    SignalReading {
        strength: rounded_percent(total, rule.max_score()),
        found,
    }
}

fn rounded_percent(total: u64, max: u64) -> u8 {
    let doubled_max = max.saturating_mul(2);
    let percent = total
        .saturating_mul(200)
        .saturating_add(max)
        .checked_div(doubled_max)
        .unwrap_or(0)
        .min(100);
    u8::try_from(percent).unwrap_or(100)
}

/// Re-scores notebook text only when it changes.
///
/// Blank text keeps the previous reading, matching how the notebook clears
/// between edits.
#[derive(Debug, Clone)]
pub struct SignalMonitor {
    rule: SignalRule,
    last_text: String,
    reading: SignalReading,
}

impl SignalMonitor {
    /// Creates a monitor with a zero reading.
    #[must_use]
    pub fn new(rule: SignalRule) -> Self {
        Self {
            rule,
            last_text: String::new(),
            reading: SignalReading::default(),
        }
    }

    /// Scores `text` unless it is blank or unchanged, then returns the
    /// current reading.
    pub fn analyze(&mut self, text: &str) -> &SignalReading {
        if text.is_empty() || text == self.last_text {
            return &self.reading;
        }
        text.clone_into(&mut self.last_text);
        self.reading = score_signal(text, &self.rule);
        debug!(
            case_id = %self.rule.case_id,
            strength = self.reading.strength,
            "signal re-scored"
        );
        &self.reading
    }

    /// The most recent reading.
    #[must_use]
    pub const fn reading(&self) -> &SignalReading {
        &self.reading
    }
}
