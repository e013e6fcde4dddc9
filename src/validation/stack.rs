use crate::language::TagToken;

/// An opening tag not yet matched, along with where it sits in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry<'a> {
    pub(crate) position: usize,
    pub(crate) token: &'a TagToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Overflow {
    pub(crate) depth: usize,
}

/// Opening tags seen but not yet closed, most recent last. Lives for a single
/// validation pass. Depth is capped; pushing past the cap is refused rather
/// than growing without bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OpenStack<'a> {
    stack: Vec<Entry<'a>>,
    max_depth: usize,
}

impl<'a> OpenStack<'a> {
    pub(crate) fn new(max_depth: usize) -> OpenStack<'a> {
        OpenStack {
            stack: vec![],
            max_depth,
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack
            .len()
    }

    pub(crate) fn push(&mut self, position: usize, token: &'a TagToken) -> Result<(), Overflow> {
        if self.depth() >= self.max_depth {
            return Err(Overflow {
                depth: self.max_depth,
            });
        }
        self.stack
            .push(Entry { position, token });
        Ok(())
    }

    /// Search from the innermost entry outward for an opening tag with the
    /// given name, returning its index.
    pub(crate) fn find(&self, name: &str) -> Option<usize> {
        self.stack
            .iter()
            .rposition(|entry| entry.token.name == name)
    }

    /// Pop everything from `index` upward. The entry at `index` is returned
    /// separately from the ones above it, which come back outermost first.
    pub(crate) fn close(&mut self, index: usize) -> (Entry<'a>, Vec<Entry<'a>>) {
        let mut popped = self
            .stack
            .split_off(index);
        let skipped = popped.split_off(1);
        (popped[0], skipped)
    }

    /// Consume the stack, yielding whatever is still open, outermost first.
    pub(crate) fn remaining(self) -> Vec<Entry<'a>> {
        self.stack
    }
}
