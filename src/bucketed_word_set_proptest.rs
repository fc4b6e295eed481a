#![cfg(test)]

// Property tests for BucketedWordSet kept inside the crate next to the
// hash internals they cross-check.

use crate::bucketed_word_set::BucketedWordSet;
use crate::string_hash::{bucket_index, string_hash, WordHasher};
use core::num::NonZeroU32;
use proptest::prelude::*;
use std::collections::BTreeSet;

// Pool-indexed operations so shrinking moves toward earlier, shorter words.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize),
    Contains(String),
    Statistics,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (1usize..=13, proptest::collection::vec("[a-z]{0,6}", 1..=10)).prop_flat_map(|(cap, pool)| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            3 => idx.prop_map(OpI::Insert),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,6}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => Just(OpI::Statistics),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (cap, pool.clone(), ops))
    })
}

// Model: a BTreeSet of distinct words plus one Vec per slot in insertion
// order. Slots are computed independently from the public hash functions.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((cap, pool, ops) in arb_scenario()) {
        let ncap = NonZeroU32::new(cap as u32).unwrap();
        let mut sut = BucketedWordSet::new(cap).unwrap();
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut chains: Vec<Vec<String>> = vec![Vec::new(); cap];

        for op in ops {
            match op {
                OpI::Insert(i) => {
                    let w = pool[i].clone();
                    let fresh = seen.insert(w.clone());
                    prop_assert_eq!(sut.insert(w.clone()), fresh, "insert reports novelty");
                    if fresh {
                        chains[bucket_index(string_hash(&w), ncap)].push(w);
                    }
                }
                OpI::Contains(w) => {
                    prop_assert_eq!(sut.contains(&w), seen.contains(&w));
                }
                OpI::Statistics => {
                    let stats = sut.statistics();
                    prop_assert_eq!(stats.total(), seen.len());
                    prop_assert_eq!(stats.slot_counts().sum::<usize>(), stats.total());
                }
            }
            prop_assert_eq!(sut.len(), seen.len());
            prop_assert_eq!(sut.is_empty(), seen.is_empty());
        }

        for (i, chain) in sut.slots() {
            prop_assert_eq!(chain, chains[i].as_slice(), "slot {} order", i);
        }
    }

    /// Every stored word sits in the slot its hash selects, and that slot is in range.
    #[test]
    fn prop_bucket_validity(cap in 1usize..=2000, words in proptest::collection::vec("[a-z]{0,12}", 0..200)) {
        let mut m = BucketedWordSet::new(cap).unwrap();
        m.extend(words.iter().map(String::as_str));
        for (i, chain) in m.slots() {
            for w in chain {
                let slot = m.slot_of(w);
                prop_assert!(slot < cap);
                prop_assert_eq!(slot, i);
            }
        }
        let distinct: BTreeSet<&String> = words.iter().collect();
        prop_assert_eq!(m.len(), distinct.len());
    }

    /// Two independent runs over the same input render identical reports.
    #[test]
    fn prop_deterministic_report(cap in 1usize..=50, words in proptest::collection::vec("[a-z]{1,8}", 0..100)) {
        let mut a = BucketedWordSet::new(cap).unwrap();
        let mut b = BucketedWordSet::new(cap).unwrap();
        a.extend(words.iter().cloned());
        b.extend(words.iter().cloned());
        prop_assert_eq!(a.statistics().to_string(), b.statistics().to_string());
    }

    /// Re-inserting any already-seen word leaves every chain unchanged.
    #[test]
    fn prop_reinsert_is_noop(words in proptest::collection::vec("[a-z]{0,5}", 1..60), pick in any::<proptest::sample::Index>()) {
        let mut m = BucketedWordSet::new(7).unwrap();
        m.extend(words.iter().cloned());
        let before: Vec<Vec<String>> = m.slots().map(|(_, c)| c.to_vec()).collect();
        let again = pick.get(&words).clone();
        prop_assert!(!m.insert(again));
        let after: Vec<Vec<String>> = m.slots().map(|(_, c)| c.to_vec()).collect();
        prop_assert_eq!(before, after);
    }

    /// Slot reduction stays in range for every hash, including i32::MIN.
    #[test]
    fn prop_bucket_index_in_range(hash in any::<i32>(), cap in 1u32..=i32::MAX as u32) {
        let ncap = NonZeroU32::new(cap).unwrap();
        prop_assert!(bucket_index(hash, ncap) < cap as usize);
        prop_assert!(bucket_index(i32::MIN, ncap) < cap as usize);
    }
}

// A user hasher with heavy collisions still yields set semantics.
#[derive(Clone, Default)]
struct LenHasher;
impl WordHasher for LenHasher {
    fn hash_word(&self, word: &str) -> i32 {
        word.len() as i32
    }
}

proptest! {
    #[test]
    fn prop_custom_hasher_set_semantics(words in proptest::collection::vec("[a-c]{0,3}", 0..80)) {
        let mut m = BucketedWordSet::with_hasher(4, LenHasher).unwrap();
        m.extend(words.iter().cloned());
        let distinct: BTreeSet<&String> = words.iter().collect();
        prop_assert_eq!(m.len(), distinct.len());
        for (i, chain) in m.slots() {
            prop_assert!(chain.iter().all(|w| w.len() % 4 == i));
        }
    }
}
