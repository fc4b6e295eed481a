//! Statistics: occupancy figures for a `BucketedWordSet` and the plain-text
//! report rendered from them.

use core::fmt;

/// Borrowed view of every chain in slot order, plus the distinct total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics<'a> {
    slots: Vec<&'a [String]>,
    total: usize,
}

impl<'a> Statistics<'a> {
    pub(crate) fn new(slots: Vec<&'a [String]>) -> Self {
        let total = slots.iter().map(|chain| chain.len()).sum();
        Self { slots, total }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Distinct words across all slots; always the sum of `slot_counts`.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn slot_counts(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.slots.iter().map(|chain| chain.len())
    }

    pub fn slot_words(&self, slot: usize) -> Option<&'a [String]> {
        self.slots.get(slot).copied()
    }

    pub fn empty_slots(&self) -> usize {
        self.slots.iter().filter(|chain| chain.is_empty()).count()
    }

    pub fn longest_chain(&self) -> usize {
        self.slots.iter().map(|chain| chain.len()).max().unwrap_or(0)
    }

    /// Distinct words per slot.
    pub fn load_factor(&self) -> f64 {
        if self.slots.is_empty() {
            return 0.0;
        }
        self.total as f64 / self.slots.len() as f64
    }
}

// Output format is fixed: a blank line before the total and a space
// after every listed word, including the last one.
impl fmt::Display for Statistics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.slots.iter().enumerate() {
            writeln!(f, "Slot {}: {} words", i, chain.len())?;
        }
        writeln!(f)?;
        writeln!(f, "Total words: {}", self.total)?;
        for (i, chain) in self.slots.iter().enumerate() {
            write!(f, "Slot {}: ", i)?;
            for word in chain.iter() {
                write!(f, "{} ", word)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn renders_fixed_layout() {
        let s0 = owned(&["sat"]);
        let s1 = owned(&[]);
        let s2 = owned(&["cat", "mat"]);
        let stats = Statistics::new(vec![&s0[..], &s1[..], &s2[..]]);
        let expected = concat!(
            "Slot 0: 1 words\n",
            "Slot 1: 0 words\n",
            "Slot 2: 2 words\n",
            "\n",
            "Total words: 3\n",
            "Slot 0: sat \n",
            "Slot 1: \n",
            "Slot 2: cat mat \n",
        );
        assert_eq!(stats.to_string(), expected);
    }

    /// Invariant: sum of slot counts equals the total.
    #[test]
    fn conservation_and_derived_figures() {
        let s0 = owned(&["a", "b", "c"]);
        let s1 = owned(&[]);
        let s2 = owned(&["d"]);
        let s3 = owned(&[]);
        let stats = Statistics::new(vec![&s0[..], &s1[..], &s2[..], &s3[..]]);
        assert_eq!(stats.slot_counts().sum::<usize>(), stats.total());
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.capacity(), 4);
        assert_eq!(stats.empty_slots(), 2);
        assert_eq!(stats.longest_chain(), 3);
        assert!((stats.load_factor() - 1.0).abs() < f64::EPSILON);
        assert_eq!(stats.slot_words(2), Some(&s2[..]));
        assert_eq!(stats.slot_words(4), None);
    }
}
