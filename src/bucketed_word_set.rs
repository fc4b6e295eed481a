//! BucketedWordSet: fixed array of ordered collision chains holding each
//! distinct word exactly once.

use crate::error::Error;
use crate::statistics::Statistics;
use crate::string_hash::{bucket_index, Poly31Hash, WordHasher};
use core::num::NonZeroU32;
use std::io;

/// A set of words bucketed by `H` into `capacity` chains.
///
/// Every word in chain `i` hashes to slot `i`, chains keep first-insertion
/// order, and no word appears twice anywhere in the table.
#[derive(Debug, Clone)]
pub struct BucketedWordSet<H = Poly31Hash> {
    hasher: H,
    capacity: NonZeroU32,
    buckets: Vec<Vec<String>>,
    len: usize,
}

impl BucketedWordSet {
    pub fn new(capacity: usize) -> Result<Self, Error> {
        Self::with_hasher(capacity, Poly31Hash)
    }
}

/// Iterator over `(slot, chain)` pairs in slot order.
pub struct Slots<'a> {
    it: core::iter::Enumerate<core::slice::Iter<'a, Vec<String>>>,
}

impl<'a> Iterator for Slots<'a> {
    type Item = (usize, &'a [String]);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(i, chain)| (i, chain.as_slice()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl ExactSizeIterator for Slots<'_> {}

impl<H: WordHasher> BucketedWordSet<H> {
    /// Build an empty table with `capacity` chains.
    ///
    /// Fails with `InvalidCapacity` for 0 and for anything that does not
    /// fit the 32-bit hash domain.
    pub fn with_hasher(capacity: usize, hasher: H) -> Result<Self, Error> {
        let capacity = u32::try_from(capacity)
            .ok()
            .filter(|&c| c <= i32::MAX as u32)
            .and_then(NonZeroU32::new)
            .ok_or(Error::InvalidCapacity { capacity })?;
        Ok(Self {
            hasher,
            capacity,
            buckets: vec![Vec::new(); capacity.get() as usize],
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get() as usize
    }

    /// Number of distinct words across all chains.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slot the word maps to, whether or not it is present.
    #[inline]
    pub fn slot_of(&self, word: &str) -> usize {
        bucket_index(self.hasher.hash_word(word), self.capacity)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.buckets[self.slot_of(word)].iter().any(|w| w == word)
    }

    /// Add `word` to the end of its chain unless it is already there.
    ///
    /// Returns `true` when the word was new. Any string is accepted,
    /// including the empty string.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        let slot = self.slot_of(&word);
        let chain = &mut self.buckets[slot];
        if chain.iter().any(|w| *w == word) {
            return false;
        }
        chain.push(word);
        self.len += 1;
        true
    }

    /// Chain at `slot` in insertion order.
    pub fn slot(&self, slot: usize) -> Option<&[String]> {
        self.buckets.get(slot).map(Vec::as_slice)
    }

    pub fn slots(&self) -> Slots<'_> {
        Slots {
            it: self.buckets.iter().enumerate(),
        }
    }

    /// Snapshot of per-slot counts and listings. Does not mutate the table.
    pub fn statistics(&self) -> Statistics<'_> {
        Statistics::new(self.buckets.iter().map(Vec::as_slice).collect())
    }

    /// Write the occupancy report to `out` and return the same figures.
    pub fn report<W: io::Write>(&self, mut out: W) -> io::Result<Statistics<'_>> {
        let stats = self.statistics();
        write!(out, "{stats}")?;
        out.flush()?;
        Ok(stats)
    }
}

impl<H: WordHasher> Extend<String> for BucketedWordSet<H> {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<'a, H: WordHasher> Extend<&'a str> for BucketedWordSet<H> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}
