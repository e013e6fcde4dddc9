//! Structural validation of a whole tag sequence: matching closers to
//! openers, and checking that top-level sections come in the right order.

use tracing::debug;

use crate::language::vocabulary::{
    self, BODY_PRIORITY, HEAD_PRIORITY, ROOT, ROOT_PRIORITY, TITLE_PRIORITY,
};
use crate::language::{Role, TagToken};

mod report;
mod stack;

pub use report::{Diagnostic, Report, Severity};
use stack::{Entry, OpenStack};

pub const DEFAULT_MAX_DEPTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// How many tags may be open at once before further openers are
    /// reported as nested too deeply.
    pub max_depth: usize,
    /// Don't report empty elements (`br`, `hr`, `img`) that are never
    /// closed.
    pub allow_unclosed_empty: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_unclosed_empty: false,
        }
    }
}

/// Check a sequence of tokens from scratch, in a single pass. Validation
/// never stops at the first problem; every finding is accumulated into the
/// returned Report, which ends with a single `Valid` entry if no errors were
/// found.
pub fn validate(tokens: &[TagToken], options: &Options) -> Report {
    let mut validator = Validator::new(options);

    if let Some(first) = tokens.first() {
        if !(first.is_opening() && first.name == ROOT) {
            validator
                .report
                .push(Diagnostic::MissingRootTag);
        }
    }

    for (position, token) in tokens
        .iter()
        .enumerate()
    {
        validator.step(position, token);
    }

    validator.finish(tokens.len())
}

struct Validator<'a> {
    options: &'a Options,
    report: Report,
    stack: OpenStack<'a>,
    expected: usize,
    seen_head: bool,
    seen_title: bool,
}

impl<'a> Validator<'a> {
    fn new(options: &'a Options) -> Validator<'a> {
        Validator {
            options,
            report: Report::new(),
            stack: OpenStack::new(options.max_depth),
            expected: ROOT_PRIORITY as usize,
            seen_head: false,
            seen_title: false,
        }
    }

    fn step(&mut self, position: usize, token: &'a TagToken) {
        if token
            .name
            .is_empty()
        {
            self.report
                .push(Diagnostic::MalformedToken(position, String::new()));
            return;
        }

        let priority = token.priority();
        if priority.is_none() {
            self.report
                .push(Diagnostic::MalformedToken(
                    position,
                    token
                        .name
                        .clone(),
                ));
        }

        match (token.role, priority) {
            (Role::Opening, Some(priority)) => self.open(position, token, priority as usize),
            (Role::Opening, None) => self.push(position, token),
            (Role::Closing, _) => self.close(position, token),
        }
    }

    fn open(&mut self, position: usize, token: &'a TagToken, priority: usize) {
        if priority == HEAD_PRIORITY as usize {
            self.seen_head = true;
        } else if priority == TITLE_PRIORITY as usize {
            self.seen_title = true;
        }

        if priority != self.expected {
            if self.seen_head
                && self.expected == TITLE_PRIORITY as usize
                && priority == BODY_PRIORITY as usize
            {
                // head without a title, going straight on to body
                self.expected = BODY_PRIORITY as usize;
            } else if !self.seen_head && !self.seen_title {
                // document structure not yet established; take the tag as
                // the new baseline
                self.expected = priority + 1;
            } else {
                let expected = u8::try_from(self.expected)
                    .ok()
                    .and_then(vocabulary::name_of_priority);
                self.report
                    .push(Diagnostic::OutOfOrderTag(
                        position,
                        token
                            .name
                            .clone(),
                        expected,
                    ));
            }
        }

        self.push(position, token);
        self.expected += 1;
    }

    fn push(&mut self, position: usize, token: &'a TagToken) {
        if let Err(overflow) = self
            .stack
            .push(position, token)
        {
            debug!("Open tag stack full at depth {}", overflow.depth);
            self.report
                .push(Diagnostic::NestingTooDeep(
                    position,
                    token
                        .name
                        .clone(),
                ));
        }
    }

    fn close(&mut self, position: usize, token: &'a TagToken) {
        match self
            .stack
            .find(&token.name)
        {
            Some(index) => {
                let (matched, skipped) = self
                    .stack
                    .close(index);

                for entry in skipped {
                    self.unclosed(entry);
                }

                if let Some(priority) = matched
                    .token
                    .priority()
                {
                    self.expected = priority as usize + 1;
                }
            }
            None => {
                self.report
                    .push(Diagnostic::UnmatchedClosingTag(
                        position,
                        token
                            .name
                            .clone(),
                    ));
            }
        }
    }

    fn unclosed(&mut self, entry: Entry<'a>) {
        if self
            .options
            .allow_unclosed_empty
            && entry
                .token
                .is_empty_element()
        {
            return;
        }

        self.report
            .push(Diagnostic::UnmatchedOpeningTag(
                entry.position,
                entry
                    .token
                    .name
                    .clone(),
            ));
    }

    fn finish(mut self, total: usize) -> Report {
        let stack = std::mem::replace(&mut self.stack, OpenStack::new(0));
        for entry in stack.remaining() {
            self.unclosed(entry);
        }

        let errors = self
            .report
            .error_count();

        debug!(
            "Validated {} tag{}, {} error{}",
            total,
            if total == 1 { "" } else { "s" },
            errors,
            if errors == 1 { "" } else { "s" }
        );

        if errors == 0 {
            self.report
                .push(Diagnostic::Valid);
        }

        self.report
    }
}
