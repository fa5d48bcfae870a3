//! Seeded linear congruential sequence.
//!
//! The generator is deliberately tiny: `state = (state * 9301 + 49297) mod
//! 233280`, with each draw being `state / 233280`. The constants and the
//! integer-then-float arithmetic are fixed so any implementation reproduces
//! the same stream bit for bit. It is not suitable for anything that needs
//! unpredictability.

/// LCG multiplier.
pub const MULTIPLIER: u64 = 9_301;

/// LCG increment.
pub const INCREMENT: u64 = 49_297;

/// LCG modulus; also bounds the period of the sequence.
pub const MODULUS: u64 = 233_280;

/// A reproducible stream of draws in `[0, 1)` built from a seed.
///
/// Each instance is owned by the single computation that created it. Two
/// instances created from the same seed and advanced the same number of times
/// produce identical draws.
///
/// # Examples
///
/// ```
/// use case_engine::SeededSequence;
///
/// let mut first = SeededSequence::new(0);
/// let mut second = SeededSequence::new(0);
///
/// assert_eq!(first.next_draw(), 49_297.0 / 233_280.0);
/// assert_eq!(second.next_draw(), 49_297.0 / 233_280.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededSequence {
    state: u64,
}

impl SeededSequence {
    /// Creates a sequence whose initial state is `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    /// Advances the state and returns the next draw.
    ///
    /// Draws always lie in `[0, 1)` because the state is reduced modulo
    /// [`MODULUS`] before the division.
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "the recurrence is defined modulo 233280"
    )]
    pub fn next_draw(&mut self) -> f64 {
        // `u32::MAX * 9301 + 49297` is far below `u64::MAX`.
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        state_to_draw(self.state)
    }
}

impl Iterator for SeededSequence {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_draw())
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "state is below 2^18 and the division must match browser float semantics"
)]
const fn state_to_draw(state: u64) -> f64 {
    state as f64 / MODULUS as f64
}
