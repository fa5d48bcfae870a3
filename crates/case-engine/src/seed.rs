//! Seed derivation from opaque case identifiers.
//!
//! The hash is the classic polynomial rolling hash with multiplier 31, written
//! in its shift form `(h << 5) - h + c`. It runs over UTF-16 code units so a
//! case identifier hashes to the same seed a browser would compute with
//! `charCodeAt`. The accumulator wraps as a 32-bit signed integer.

/// Derives a non-negative seed from an identifier.
///
/// Identical identifiers always yield identical seeds. Different identifiers
/// may collide. The empty string yields `0`.
///
/// The result is a `u32` because the absolute value of `i32::MIN` does not
/// fit in an `i32`.
///
/// # Examples
///
/// ```
/// use case_engine::derive_seed;
///
/// assert_eq!(derive_seed(""), 0);
/// assert_eq!(derive_seed("a"), 97);
/// assert_eq!(derive_seed("voynich-manuscript"), derive_seed("voynich-manuscript"));
/// ```
#[must_use]
pub fn derive_seed(identifier: &str) -> u32 {
    let accumulator = identifier.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    accumulator.unsigned_abs()
}
