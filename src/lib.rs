//! word-buckets: a fixed-size, separately chained hash table of distinct
//! words, fed by a text tokenizer and reporting per-slot occupancy.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: stable slot assignment and a byte-stable text report, built
//!   in small layers that can be checked on their own.
//! - Layers:
//!   - `string_hash`: 31-multiplier hash over UTF-16 units in wrapping
//!     `i32` arithmetic, reduced by truncated remainder then absolute value.
//!   - `BucketedWordSet<H>`: `capacity` ordered chains; a word is appended
//!     to the chain of its slot unless an equal word is already there.
//!   - `Statistics`: borrowed per-slot view; renders the text report.
//!   - `Tokenizer` / `analyzer`: lazy word stream from a reader or file,
//!     drained into a table under a `SourcePolicy`.
//!
//! Constraints
//! - Single-threaded, single writer. `insert` takes `&mut self`; sharing a
//!   table across threads for mutation needs external synchronization.
//! - Set semantics: each distinct word is stored once, in the only chain
//!   it can hash to, so per-chain dedup is global dedup.
//! - Chains preserve first-insertion order; there is no removal.
//! - Capacity is fixed at construction and must lie in `1..=i32::MAX`.
//!
//! Overflow semantics
//! - The hash accumulator wraps. The remainder is taken before the
//!   absolute value so the result is always in `(-capacity, capacity)`;
//!   the `i32::MIN` absolute-value case cannot arise, and is mapped to
//!   slot 0 should it ever be reached.
//!
//! Source failures
//! - `SourcePolicy::FailFast` (default) propagates `SourceUnavailable`.
//! - `SourcePolicy::Lenient` logs it and keeps the words read so far.
//!
//! Notes and non-goals
//! - No word frequencies, no resizing, no deletion.
//! - Tokenization is ASCII-letter only; other characters are stripped.

pub mod analyzer;
mod bucketed_word_set;
mod bucketed_word_set_proptest;
pub mod config;
mod error;
pub mod logging;
mod statistics;
pub mod string_hash;
pub mod tokenizer;

// Public surface
pub use analyzer::{analyze_path, analyze_reader, SourcePolicy};
pub use bucketed_word_set::{BucketedWordSet, Slots};
pub use config::Config;
pub use error::Error;
pub use statistics::Statistics;
pub use string_hash::{Poly31Hash, WordHasher};
pub use tokenizer::Tokenizer;
