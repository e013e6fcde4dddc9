use std::fmt;

use crate::language::vocabulary::ROOT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A single finding from a validation pass. The leading `usize`, where
/// present, is the position in the sequence of the token concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MissingRootTag,
    MalformedToken(usize, String),
    OutOfOrderTag(usize, String, Option<&'static str>),
    UnmatchedClosingTag(usize, String),
    UnmatchedOpeningTag(usize, String),
    NestingTooDeep(usize, String),
    Valid,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::Valid => Severity::Info,
            _ => Severity::Error,
        }
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            Diagnostic::MissingRootTag => None,
            Diagnostic::MalformedToken(position, _) => Some(*position),
            Diagnostic::OutOfOrderTag(position, _, _) => Some(*position),
            Diagnostic::UnmatchedClosingTag(position, _) => Some(*position),
            Diagnostic::UnmatchedOpeningTag(position, _) => Some(*position),
            Diagnostic::NestingTooDeep(position, _) => Some(*position),
            Diagnostic::Valid => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Diagnostic::MissingRootTag => format!("missing <{}> tag", ROOT),
            Diagnostic::MalformedToken(_, name) => format!("invalid or incomplete tag <{}>", name),
            Diagnostic::OutOfOrderTag(_, found, Some(expected)) => format!(
                "<{}> should appear after <{}> or be in correct order",
                found, expected
            ),
            Diagnostic::OutOfOrderTag(_, found, None) => {
                format!("<{}> is not in correct order", found)
            }
            Diagnostic::UnmatchedClosingTag(_, name) => format!("unmatched closing tag </{}>", name),
            Diagnostic::UnmatchedOpeningTag(_, name) => format!("unclosed tag <{}>", name),
            Diagnostic::NestingTooDeep(_, name) => format!("<{}> nested too deeply", name),
            Diagnostic::Valid => "code is valid".to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity(), self.message())
    }
}

/// Findings of one validation pass, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    findings: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Report {
        Report { findings: vec![] }
    }

    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.findings
            .push(diagnostic);
    }

    pub fn findings(&self) -> &[Diagnostic] {
        &self.findings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.findings
            .iter()
    }

    pub fn len(&self) -> usize {
        self.findings
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings
            .is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.findings
            .iter()
            .filter(|finding| finding.severity() == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.errors()
            .count()
    }

    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finding in &self.findings {
            writeln!(f, "{}", finding)?;
        }
        Ok(())
    }
}
