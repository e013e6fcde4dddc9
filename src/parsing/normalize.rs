//! Turning raw text like `<P>` or `</body>` into canonical tokens.

use std::fmt;

use crate::language::{Role, TagToken};

/// Longest tag name accepted, not counting brackets or the closing `/`.
pub const MAX_TAG_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    IncompleteTag(String),
    EmptyName(String),
    TooLong(usize),
}

impl ParsingError {
    pub fn message(&self) -> String {
        match self {
            ParsingError::IncompleteTag(raw) => format!("incomplete tag {}", raw),
            ParsingError::EmptyName(raw) => format!("invalid tag format {}", raw),
            ParsingError::TooLong(length) => format!(
                "tag name of {} characters exceeds the limit of {}",
                length, MAX_TAG_LENGTH
            ),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ParsingError {}

fn is_terminator(c: char) -> bool {
    c == '>' || c == ' ' || c == '\0'
}

/// Extract the tag name from a raw token. The leading `<` is optional, a `/`
/// directly after it marks a closing tag, and the name runs up to the first
/// `>`. Anything after that `>` is ignored. Running into a space or the end
/// of input before the `>` means the tag is incomplete.
///
/// This does not consult the vocabulary; a well-formed but unrecognized name
/// is returned as is.
pub fn normalize(raw: &str) -> Result<TagToken, ParsingError> {
    let rest = raw
        .strip_prefix('<')
        .unwrap_or(raw);

    let (role, rest) = match rest.strip_prefix('/') {
        Some(rest) => (Role::Closing, rest),
        None => (Role::Opening, rest),
    };

    let name = match rest.find(is_terminator) {
        Some(i) if rest[i..].starts_with('>') => &rest[..i],
        _ => return Err(ParsingError::IncompleteTag(raw.to_string())),
    };

    if name.is_empty() {
        return Err(ParsingError::EmptyName(raw.to_string()));
    }

    let length = name
        .chars()
        .count();
    if length > MAX_TAG_LENGTH {
        return Err(ParsingError::TooLong(length));
    }

    Ok(TagToken {
        name: name.to_ascii_lowercase(),
        role,
    })
}
