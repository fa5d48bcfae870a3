//! Notebook text and duration formatting.

use std::time::Duration;

/// Counts whitespace-separated words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Cuts `text` to `max_chars` characters and appends `...` when it was
/// longer. Counts characters, not bytes.
///
/// # Examples
///
/// ```
/// use case_file::investigation::truncate_text;
///
/// assert_eq!(truncate_text("Mary Celeste", 4), "Mary...");
/// assert_eq!(truncate_text("Wow!", 4), "Wow!");
/// ```
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    text.char_indices().nth(max_chars).map_or_else(
        || text.to_owned(),
        |(cut, _)| format!("{}...", text.get(..cut).unwrap_or(text)),
    )
}

const fn clock_parts(elapsed: Duration) -> (u64, u64, u64) {
    let seconds = elapsed.as_secs();
    let minutes = seconds.div_euclid(60);
    (minutes.div_euclid(60), minutes.rem_euclid(60), seconds.rem_euclid(60))
}

/// Formats an elapsed duration as `HH:MM:SS`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let (hours, minutes, seconds) = clock_parts(elapsed);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Formats time spent as `1h 5m`, `12m` or `40s`.
#[must_use]
pub fn format_time_spent(elapsed: Duration) -> String {
    let (hours, minutes, seconds) = clock_parts(elapsed);
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{seconds}s")
    }
}

/// Notebook timestamp marker for a wall-clock time, such as `[09:05:30]`.
#[must_use]
pub fn notebook_timestamp(time: chrono::NaiveTime) -> String {
    format!("[{}]", time.format("%H:%M:%S"))
}
