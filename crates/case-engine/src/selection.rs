//! Deterministic selection and shuffling driven by [`SeededSequence`].
//!
//! Every call builds its own sequence from the seed, so picking and shuffling
//! with the same seed never share draws.

use crate::sequence::SeededSequence;

/// Returns the index a pool of `len` items resolves to for `seed`.
///
/// The index is `floor(r * len)` for the first draw `r`, evaluated in `f64`
/// so that it agrees with the browser build even where exact
/// rational arithmetic would round differently. Returns `None` when `len` is
/// zero.
///
/// # Examples
///
/// ```
/// use case_engine::pick_index;
///
/// assert_eq!(pick_index(3, 0), Some(0));
/// assert_eq!(pick_index(0, 0), None);
/// ```
#[must_use]
pub fn pick_index(len: usize, seed: u32) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let draw = SeededSequence::new(seed).next_draw();
    Some(scaled_index(draw, len))
}

/// Picks one item from `pool` for `seed`.
///
/// Returns `None` for an empty pool. Callers that treat an empty pool as a
/// configuration error convert this into their own error type.
///
/// # Examples
///
/// ```
/// use case_engine::pick_item;
///
/// let pool = ["alpha", "bravo", "charlie"];
/// assert_eq!(pick_item(&pool, 205_690_624), Some(&"charlie"));
/// ```
#[must_use]
pub fn pick_item<T>(pool: &[T], seed: u32) -> Option<&T> {
    pick_index(pool.len(), seed).and_then(|index| pool.get(index))
}

/// Returns a seeded Fisher-Yates permutation of `list`.
///
/// Walks `i` from `len - 1` down to `1`, draws `r`, and swaps positions `i`
/// and `floor(r * (i + 1))`. The input is left untouched. Lists of length zero
/// or one come back unchanged.
///
/// # Examples
///
/// ```
/// use case_engine::shuffle;
///
/// let letters = ['a', 'b', 'c', 'd', 'e'];
/// assert_eq!(shuffle(&letters, 0), vec!['a', 'd', 'e', 'c', 'b']);
/// assert_eq!(shuffle(&letters, 0), shuffle(&letters, 0));
/// ```
#[must_use]
pub fn shuffle<T: Clone>(list: &[T], seed: u32) -> Vec<T> {
    let mut shuffled = list.to_vec();
    let mut sequence = SeededSequence::new(seed);
    for i in (1..shuffled.len()).rev() {
        let j = scaled_index(sequence.next_draw(), i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Maps a draw in `[0, 1)` onto `0..len`.
///
/// The product is non-negative, so truncating it is the same as flooring.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "draw is in [0, 1) so the truncated product is a valid index below len"
)]
const fn scaled_index(draw: f64, len: usize) -> usize {
    let index = (draw * len as f64) as usize;
    // Guards against a product that rounds up to `len` for very large pools.
    if index >= len { len.saturating_sub(1) } else { index }
}
