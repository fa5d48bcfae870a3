//! How long a case has been open.

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Freshness bucket for an open case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeCategory {
    /// Open for a week or less.
    Fresh,
    /// Open for a month or less.
    Aging,
    /// Open for longer than a month.
    Cold,
}

impl AgeCategory {
    /// Returns the lowercase tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Aging => "aging",
            Self::Cold => "cold",
        }
    }
}

/// Whole days a case has been open, with its freshness bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseAge {
    days: u64,
}

impl CaseAge {
    /// Wraps a day count.
    #[must_use]
    pub const fn from_days(days: u64) -> Self {
        Self { days }
    }

    /// Age between the opening time and `now`.
    #[must_use]
    pub fn between(opened: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_days(days_between(opened, now))
    }

    /// Day count.
    #[must_use]
    pub const fn days(self) -> u64 {
        self.days
    }

    /// Freshness bucket: up to 7 days fresh, up to 30 aging, then cold.
    #[must_use]
    pub const fn category(self) -> AgeCategory {
        match self.days {
            0..=7 => AgeCategory::Fresh,
            8..=30 => AgeCategory::Aging,
            _ => AgeCategory::Cold,
        }
    }

    /// Status line shown beside the case title.
    ///
    /// # Examples
    ///
    /// ```
    /// use case_file::investigation::CaseAge;
    ///
    /// assert_eq!(CaseAge::from_days(3).status_label(), "ACTIVE - Day 3");
    /// assert_eq!(CaseAge::from_days(45).status_label(), "COLD CASE - 45 Days");
    /// ```
    #[must_use]
    pub fn status_label(self) -> String {
        match self.category() {
            AgeCategory::Fresh => format!("ACTIVE - Day {}", self.days),
            AgeCategory::Aging => format!("AGING - {} Days", self.days),
            AgeCategory::Cold => format!("COLD CASE - {} Days", self.days),
        }
    }
}

/// Whole days between two instants, rounded up, in either order.
#[must_use]
pub fn days_between(opened: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let elapsed = now
        .signed_duration_since(opened)
        .num_milliseconds()
        .unsigned_abs();
    elapsed.div_ceil(MILLIS_PER_DAY)
}

/// Renders a day count as days, months or years.
///
/// Months are 30 days and years 365, both rounded down.
#[must_use]
pub fn format_case_age(days: u64) -> String {
    match days {
        1 => "1 day".to_owned(),
        0..30 => format!("{days} days"),
        30..365 => counted(days.div_euclid(30), "month"),
        _ => counted(days.div_euclid(365), "year"),
    }
}

fn counted(count: u64, unit: &str) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("{count} {unit}{plural}")
}
