use std::{fmt, path::Path};

use crate::parsing::ParsingError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// Reasons an insertion into a tag sequence can be declined. In every case
/// the sequence is left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    InvalidFormat(ParsingError),
    UnknownTag(String),
    OutOfOrder { tag: String, after: String },
    ResourceExhausted,
}

impl InsertError {
    pub fn message(&self) -> String {
        match self {
            InsertError::InvalidFormat(error) => error.message(),
            InsertError::UnknownTag(name) => format!("unknown tag <{}>", name),
            InsertError::OutOfOrder { tag, after } => {
                format!("<{}> should not appear after <{}>", tag, after)
            }
            InsertError::ResourceExhausted => "out of memory".to_string(),
        }
    }
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for InsertError {}
