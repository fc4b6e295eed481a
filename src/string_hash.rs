//! StringHash: the 31-multiplier string hash and its reduction to a slot.
//!
//! Slot assignment is a compatibility contract: existing reports must
//! keep their slot numbers. The hash is computed in wrapping `i32`
//! arithmetic over UTF-16 code units and reduced with a truncated
//! remainder followed by an absolute value.

use core::num::NonZeroU32;

/// Hash function seam between `BucketedWordSet` and the word it stores.
///
/// Implementations must be deterministic: the same word must always
/// produce the same value for the lifetime of a table.
pub trait WordHasher {
    fn hash_word(&self, word: &str) -> i32;
}

/// `s[0]*31^(n-1) + s[1]*31^(n-2) + ... + s[n-1]`, wrapping at 32 bits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Poly31Hash;

impl WordHasher for Poly31Hash {
    #[inline]
    fn hash_word(&self, word: &str) -> i32 {
        string_hash(word)
    }
}

#[inline]
pub fn string_hash(word: &str) -> i32 {
    word.encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Reduce a hash to a slot in `[0, capacity)`.
///
/// `hash % capacity` keeps the sign of `hash`, and its magnitude is below
/// `capacity`, so the absolute value never sees `i32::MIN` when
/// `capacity <= i32::MAX`. If it ever did, the slot falls back to 0.
#[inline]
pub fn bucket_index(hash: i32, capacity: NonZeroU32) -> usize {
    // capacity is validated to fit in i32 at table construction
    let cap = i32::try_from(capacity.get()).unwrap_or(i32::MAX);
    match hash.wrapping_rem(cap).checked_abs() {
        Some(slot) => slot as usize,
        None => 0,
    }
}
