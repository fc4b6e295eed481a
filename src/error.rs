//! Error type shared by the table, the tokenizer and the driver.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Table capacity outside `1..=i32::MAX`.
    #[error("invalid table capacity {capacity}: must be between 1 and {}", i32::MAX)]
    InvalidCapacity { capacity: usize },

    /// The text source could not be opened or read.
    #[error("text source {} unavailable: {source}", display_path(.path))]
    SourceUnavailable {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("'{}'", p.display()),
        None => "<reader>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let e = Error::InvalidCapacity { capacity: 0 };
        assert!(e.to_string().contains("capacity 0"));

        let e = Error::SourceUnavailable {
            path: Some(PathBuf::from("gatsby.txt")),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = e.to_string();
        assert!(msg.contains("'gatsby.txt'"), "{msg}");
        assert!(msg.contains("gone"), "{msg}");

        let e = Error::SourceUnavailable {
            path: None,
            source: io::Error::new(io::ErrorKind::Other, "eof"),
        };
        assert!(e.to_string().contains("<reader>"));
    }
}
