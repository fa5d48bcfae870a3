//! Investigation progress and achievement badges.

use std::time::Duration;

/// Common multiple of every progress target.
const SCALE: u64 = 1_800_000;

const WORD_TARGET: u64 = 500;
const ARTIFACT_TARGET: u64 = 4;
const TIME_TARGET_MS: u64 = 30 * 60 * 1000;
const TIMESTAMP_TARGET: u64 = 5;
const SECRET_TARGET: u64 = 3;

const WORD_UNIT: u64 = SCALE.div_euclid(WORD_TARGET);
const ARTIFACT_UNIT: u64 = SCALE.div_euclid(ARTIFACT_TARGET);
const TIME_UNIT: u64 = SCALE.div_euclid(TIME_TARGET_MS);
const TIMESTAMP_UNIT: u64 = SCALE.div_euclid(TIMESTAMP_TARGET);
const SECRET_UNIT: u64 = SCALE.div_euclid(SECRET_TARGET);

const DEDICATED_MS: u64 = 60 * 60 * 1000;

/// Activity counters for one investigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressMetrics {
    /// Words written in the notebook.
    pub word_count: usize,
    /// Distinct artifacts opened.
    pub artifacts_viewed: usize,
    /// Time spent on the case.
    pub time_spent: Duration,
    /// Timestamps inserted into the notebook.
    pub timestamps_added: usize,
    /// Secrets unlocked.
    pub secrets_unlocked: usize,
}

/// Badges earned during an investigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    /// 500 or more notebook words.
    DeepResearcher,
    /// Five or more timestamps.
    TimeKeeper,
    /// Four or more artifacts viewed.
    EvidenceCollector,
    /// An hour or more on the case.
    DedicatedInvestigator,
    /// At least one secret unlocked.
    SecretFinder,
}

impl Achievement {
    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::DeepResearcher => "deep_researcher",
            Self::TimeKeeper => "time_keeper",
            Self::EvidenceCollector => "evidence_collector",
            Self::DedicatedInvestigator => "dedicated_investigator",
            Self::SecretFinder => "secret_finder",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DeepResearcher => "Deep Researcher",
            Self::TimeKeeper => "Time Keeper",
            Self::EvidenceCollector => "Evidence Collector",
            Self::DedicatedInvestigator => "Dedicated Investigator",
            Self::SecretFinder => "Secret Finder",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::DeepResearcher => "Wrote 500+ words",
            Self::TimeKeeper => "Added 5+ timestamps",
            Self::EvidenceCollector => "Viewed all artifacts",
            Self::DedicatedInvestigator => "Spent 1+ hour",
            Self::SecretFinder => "Unlocked hidden clues",
        }
    }
}

fn capped(value: usize, target: u64) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX).min(target)
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl ProgressMetrics {
    /// Weighted completion percentage in `0..=100`.
    ///
    /// Words count for 40%, artifacts 25%, time 15%, timestamps 10% and
    /// secrets 10%, each capped at its target. The result is rounded half
    /// up.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use case_file::investigation::ProgressMetrics;
    ///
    /// let metrics = ProgressMetrics {
    ///     word_count: 250,
    ///     artifacts_viewed: 2,
    ///     time_spent: Duration::from_secs(15 * 60),
    ///     ..ProgressMetrics::default()
    /// };
    /// assert_eq!(metrics.progress_percent(), 40);
    /// ```
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let words = 40 * capped(self.word_count, WORD_TARGET) * WORD_UNIT;
        let artifacts = 25 * capped(self.artifacts_viewed, ARTIFACT_TARGET) * ARTIFACT_UNIT;
        let time = 15 * millis(self.time_spent).min(TIME_TARGET_MS) * TIME_UNIT;
        let timestamps = 10 * capped(self.timestamps_added, TIMESTAMP_TARGET) * TIMESTAMP_UNIT;
        let secrets = 10 * capped(self.secrets_unlocked, SECRET_TARGET) * SECRET_UNIT;

        let weighted = words + artifacts + time + timestamps + secrets;
        let percent = (2 * weighted + SCALE).div_euclid(2 * SCALE).min(100);
        u8::try_from(percent).unwrap_or(100)
    }

    /// Badges earned so far, in display order.
    #[must_use]
    pub fn achievements(&self) -> Vec<Achievement> {
        [
            (self.word_count >= 500, Achievement::DeepResearcher),
            (self.timestamps_added >= 5, Achievement::TimeKeeper),
            (self.artifacts_viewed >= 4, Achievement::EvidenceCollector),
            (
                millis(self.time_spent) >= DEDICATED_MS,
                Achievement::DedicatedInvestigator,
            ),
            (self.secrets_unlocked >= 1, Achievement::SecretFinder),
        ]
        .into_iter()
        .filter_map(|(earned, achievement)| earned.then_some(achievement))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::idle(ProgressMetrics::default(), 0)]
    #[case::words_only(ProgressMetrics { word_count: 500, ..ProgressMetrics::default() }, 40)]
    #[case::words_capped(ProgressMetrics { word_count: 9_000, ..ProgressMetrics::default() }, 40)]
    #[case::one_secret(ProgressMetrics { secrets_unlocked: 1, ..ProgressMetrics::default() }, 3)]
    #[case::one_timestamp(ProgressMetrics { timestamps_added: 1, ..ProgressMetrics::default() }, 2)]
    #[case::one_artifact(ProgressMetrics { artifacts_viewed: 1, ..ProgressMetrics::default() }, 6)]
    #[case::mixed(ProgressMetrics { word_count: 10, artifacts_viewed: 1, ..ProgressMetrics::default() }, 7)]
    #[case::rounds_half_up(ProgressMetrics { time_spent: Duration::from_secs(60), ..ProgressMetrics::default() }, 1)]
    #[case::complete(
        ProgressMetrics {
            word_count: 600,
            artifacts_viewed: 4,
            time_spent: Duration::from_secs(2 * 60 * 60),
            timestamps_added: 7,
            secrets_unlocked: 3,
        },
        100
    )]
    fn weights_each_metric(#[case] metrics: ProgressMetrics, #[case] expected: u8) {
        assert_eq!(metrics.progress_percent(), expected);
    }

    #[test]
    fn idle_investigation_has_no_badges() {
        assert!(ProgressMetrics::default().achievements().is_empty());
    }

    #[test]
    fn thresholds_award_badges_in_order() {
        let metrics = ProgressMetrics {
            word_count: 500,
            artifacts_viewed: 3,
            time_spent: Duration::from_secs(60 * 60),
            timestamps_added: 5,
            secrets_unlocked: 1,
        };
        let ids: Vec<&str> = metrics
            .achievements()
            .into_iter()
            .map(Achievement::id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "deep_researcher",
                "time_keeper",
                "dedicated_investigator",
                "secret_finder"
            ]
        );
    }

    #[test]
    fn badges_carry_display_text() {
        assert_eq!(Achievement::EvidenceCollector.name(), "Evidence Collector");
        assert_eq!(
            Achievement::EvidenceCollector.description(),
            "Viewed all artifacts"
        );
    }
}
