//! Tokenizer: lazy stream of normalized words from a text source.
//!
//! Tokens are separated by `is_token_separator` characters, lowercased, and
//! stripped down to ASCII letters; tokens left empty after stripping are
//! skipped. Input bytes are decoded leniently, so malformed UTF-8 never
//! aborts the stream.

use crate::error::Error;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Whitespace that ends a token.
///
/// Unicode space, line and paragraph separators plus the ASCII controls
/// `\t`..=`\r` and `\u{1c}`..=`\u{1f}`. The no-break spaces (U+00A0,
/// U+2007, U+202F) and NEL (U+0085) do not separate tokens.
pub fn is_token_separator(c: char) -> bool {
    matches!(
        c,
        '\t'..='\r'
            | '\u{1c}'..='\u{1f}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205f}'
            | '\u{3000}'
    )
}

/// Lowercase `token` and keep only ASCII letters.
///
/// Lowercasing runs first, so characters whose lowercase form is an ASCII
/// letter (e.g. the Kelvin sign) survive the filter.
pub fn normalize(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect()
}

/// Word iterator over a buffered reader. Not restartable; the reader is
/// dropped with the tokenizer.
pub struct Tokenizer<R> {
    reader: R,
    path: Option<PathBuf>,
    line: Vec<u8>,
    pending: VecDeque<String>,
    // read error held back until the words before it are drained
    failed: Option<Error>,
    done: bool,
}

impl Tokenizer<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::SourceUnavailable {
            path: Some(path.to_path_buf()),
            source,
        })?;
        log::debug!("opened text source {}", path.display());
        let mut tok = Tokenizer::new(BufReader::new(file));
        tok.path = Some(path.to_path_buf());
        Ok(tok)
    }
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            path: None,
            line: Vec::new(),
            pending: VecDeque::new(),
            failed: None,
            done: false,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // Refill `pending` from the next non-blank line. Ok(false) at end of input.
    // Bytes read before an I/O error are still tokenized; the error is
    // returned once those words are consumed.
    fn fill(&mut self) -> Result<bool, Error> {
        while self.pending.is_empty() {
            if let Some(e) = self.failed.take() {
                return Err(e);
            }
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => return Ok(false),
                Ok(_) => {}
                Err(source) => {
                    self.failed = Some(Error::SourceUnavailable {
                        path: self.path.clone(),
                        source,
                    });
                }
            }
            let text = String::from_utf8_lossy(&self.line);
            self.pending.extend(
                text.split(is_token_separator)
                    .map(normalize)
                    .filter(|w| !w.is_empty()),
            );
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.fill() {
            Ok(true) => self.pending.pop_front().map(Ok),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
