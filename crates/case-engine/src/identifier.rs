//! Case identifier generation.
//!
//! Identifiers are short upper-case strings derived from the clock and a random
//! suffix. They are not deterministic; only what happens after an identifier
//! exists is.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Number of characters kept from the end of the concatenated digits.
pub const IDENTIFIER_LEN: usize = 8;

/// Exclusive upper bound of the random suffix.
const SUFFIX_BOUND: u32 = 10_000;

/// Builds an identifier from a millisecond timestamp and a suffix.
///
/// Both numbers are written in decimal, concatenated, and the last
/// [`IDENTIFIER_LEN`] characters are kept and upper-cased.
///
/// # Examples
///
/// ```
/// use case_engine::case_identifier_from_parts;
///
/// assert_eq!(case_identifier_from_parts(1_700_000_000_000, 42), "00000042");
/// assert_eq!(case_identifier_from_parts(12, 3), "123");
/// ```
#[must_use]
pub fn case_identifier_from_parts(unix_millis: u128, suffix: u32) -> String {
    let digits = format!("{unix_millis}{suffix}");
    let start = digits.len().saturating_sub(IDENTIFIER_LEN);
    digits.get(start..).unwrap_or(&digits).to_uppercase()
}

/// Generates a fresh identifier from the system clock and thread-local RNG.
///
/// A clock set before the Unix epoch is treated as the epoch itself.
#[must_use]
pub fn generate_case_identifier() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    let suffix = rand::rng().random_range(0..SUFFIX_BOUND);
    case_identifier_from_parts(millis, suffix)
}
