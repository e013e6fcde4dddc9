//! Structural validation of markup tag sequences.

pub mod formatting;
pub mod language;
pub mod parsing;
pub mod rendering;
pub mod sequence;
pub mod validation;
