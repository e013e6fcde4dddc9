//! Reading tags out of text

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{InsertError, LoadingError};
use crate::sequence::TagSequence;

mod normalize;

pub use normalize::{normalize, ParsingError, MAX_TAG_LENGTH};

/// Read a file and return an owned String. A filename of `-` reads standard
/// input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => Err(LoadingError {
                problem: "Failed reading standard input".to_string(),
                details: error
                    .kind()
                    .to_string(),
                filename,
            }),
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Pick the `<...>` tokens out of a line of text. Anything between tokens is
/// skipped. An opening `<` without a later `>` ends the line with an
/// incomplete tag error; tokens before it are still returned.
pub fn split_tokens(line: &str) -> Vec<Result<&str, ParsingError>> {
    let mut pieces = Vec::new();
    let mut rest = line;

    while let Some(start) = rest.find('<') {
        let candidate = &rest[start..];
        match candidate.find('>') {
            Some(end) => {
                pieces.push(Ok(&candidate[..=end]));
                rest = &candidate[end + 1..];
            }
            None => {
                pieces.push(Err(ParsingError::IncompleteTag(candidate.to_string())));
                break;
            }
        }
    }

    pieces
}

/// A tag that was found in the input but not accepted into the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// zero-origin line number
    pub line: usize,
    pub raw: String,
    pub error: InsertError,
}

/// Insert every tag found on one line, in order, collecting the ones that
/// were declined.
pub fn insert_line(sequence: &mut TagSequence, line: &str, number: usize) -> Vec<Rejection> {
    let mut rejections = Vec::new();

    for piece in split_tokens(line) {
        let result = match piece {
            Ok(raw) => sequence
                .insert(raw)
                .map_err(|error| (raw.to_string(), error)),
            Err(error) => {
                let raw = match &error {
                    ParsingError::IncompleteTag(raw) => raw.clone(),
                    _ => String::new(),
                };
                Err((raw, InsertError::InvalidFormat(error)))
            }
        };

        if let Err((raw, error)) = result {
            rejections.push(Rejection {
                line: number,
                raw,
                error,
            });
        }
    }

    rejections
}

/// Build a sequence from a whole document, one line at a time. Declined tags
/// are returned alongside the sequence rather than aborting the load.
pub fn parse(content: &str) -> (TagSequence, Vec<Rejection>) {
    let mut sequence = TagSequence::new();
    let mut rejections = Vec::new();

    for (number, line) in content
        .lines()
        .enumerate()
    {
        rejections.extend(insert_line(&mut sequence, line, number));
    }

    debug!(
        "Read {} tag{}, {} rejected",
        sequence.len(),
        if sequence.len() == 1 { "" } else { "s" },
        rejections.len()
    );

    (sequence, rejections)
}
