//! Analyzer: drains a tokenizer into a `BucketedWordSet`.

use crate::bucketed_word_set::BucketedWordSet;
use crate::error::Error;
use crate::tokenizer::Tokenizer;
use std::io::BufRead;
use std::path::Path;

/// What to do when the text source cannot be opened or read.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SourcePolicy {
    /// Return `SourceUnavailable` to the caller.
    #[default]
    FailFast,
    /// Log the failure and keep whatever was inserted before it.
    Lenient,
}

/// Insert every word from `reader` into a fresh table of `capacity` slots.
pub fn analyze_reader<R: BufRead>(reader: R, capacity: usize) -> Result<BucketedWordSet, Error> {
    let mut set = BucketedWordSet::new(capacity)?;
    drain(Tokenizer::new(reader), &mut set)?;
    Ok(set)
}

/// Open `path` and bucket its words, applying `policy` to source failures.
///
/// `InvalidCapacity` is always returned, whatever the policy.
pub fn analyze_path<P: AsRef<Path>>(
    path: P,
    capacity: usize,
    policy: SourcePolicy,
) -> Result<BucketedWordSet, Error> {
    let path = path.as_ref();
    let mut set = BucketedWordSet::new(capacity)?;
    log::info!("bucketing words from {} into {} slots", path.display(), capacity);

    let res = Tokenizer::open(path).and_then(|tok| drain(tok, &mut set));
    match (res, policy) {
        (Ok(read), _) => {
            log::info!("read {} words, {} distinct", read, set.len());
            Ok(set)
        }
        (Err(e), SourcePolicy::FailFast) => Err(e),
        (Err(e), SourcePolicy::Lenient) => {
            log::error!("{e}; reporting the {} words read so far", set.len());
            Ok(set)
        }
    }
}

// Returns the number of tokens consumed, duplicates included.
fn drain<R: BufRead>(tokens: Tokenizer<R>, set: &mut BucketedWordSet) -> Result<usize, Error> {
    let mut read = 0usize;
    for word in tokens {
        set.insert(word?);
        read += 1;
    }
    log::debug!("drained {} tokens into {} distinct words", read, set.len());
    Ok(read)
}
