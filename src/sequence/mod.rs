//! The ordered list of tags accepted so far in a session.

use tracing::{debug, info};

use crate::language::{vocabulary, InsertError, TagToken};
use crate::parsing::normalize;
use crate::validation::{self, Options, Report};

/// Tags in document order. Order is fixed at insertion; the only other
/// mutation is removing every instance of a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSequence {
    tokens: Vec<TagToken>,
}

impl TagSequence {
    pub fn new() -> TagSequence {
        TagSequence { tokens: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tokens
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens
            .is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TagToken> {
        self.tokens
            .iter()
    }

    pub fn tokens(&self) -> &[TagToken] {
        &self.tokens
    }

    /// Normalize a raw token and append it. An opening tag is refused if any
    /// opening tag already present outranks it; closing tags are never
    /// refused on ordering grounds.
    pub fn insert(&mut self, raw: &str) -> Result<TagToken, InsertError> {
        let token = normalize(raw).map_err(|error| {
            debug!("Rejected {:?}: {}", raw, error);
            InsertError::InvalidFormat(error)
        })?;

        let priority = match vocabulary::priority_of(&token.name) {
            Some(priority) => priority,
            None => {
                debug!("Rejected unknown tag {:?}", token.name);
                return Err(InsertError::UnknownTag(token.name));
            }
        };

        if token.is_opening() {
            let outranking = self
                .tokens
                .iter()
                .filter(|existing| existing.is_opening())
                .find(|existing| match existing.priority() {
                    Some(other) => priority < other,
                    None => false,
                });

            if let Some(existing) = outranking {
                debug!("Rejected {} appearing after {}", token, existing);
                return Err(InsertError::OutOfOrder {
                    tag: token.name,
                    after: existing
                        .name
                        .clone(),
                });
            }
        }

        self.tokens
            .try_reserve(1)
            .map_err(|_| InsertError::ResourceExhausted)?;
        self.tokens
            .push(token.clone());

        debug!("Inserted {} at position {}", token, self.tokens.len() - 1);
        Ok(token)
    }

    /// Remove every opening and closing instance of the named tag, returning
    /// how many were removed. The name may be given bare (`p`) or as a raw
    /// token (`<p>` or `</p>`); either way both roles are removed.
    pub fn delete_by_name(&mut self, name: &str) -> usize {
        let name = match normalize(name) {
            Ok(token) => token.name,
            Err(_) => name
                .trim_start_matches('/')
                .to_ascii_lowercase(),
        };

        let before = self
            .tokens
            .len();
        self.tokens
            .retain(|token| token.name != name);
        let removed = before
            - self
                .tokens
                .len();

        if removed == 0 {
            debug!("Nothing to delete for {:?}", name);
        } else {
            info!(
                "Deleted {} instance{} of {:?}",
                removed,
                if removed == 1 { "" } else { "s" },
                name
            );
        }

        removed
    }

    /// The sequence as canonical strings, closing tags carrying a leading
    /// `/`.
    pub fn list(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(TagToken::canonical)
            .collect()
    }

    pub fn validate(&self) -> Report {
        validation::validate(&self.tokens, &Options::default())
    }

    pub fn validate_with(&self, options: &Options) -> Report {
        validation::validate(&self.tokens, options)
    }
}

impl<'a> IntoIterator for &'a TagSequence {
    type Item = &'a TagToken;
    type IntoIter = std::slice::Iter<'a, TagToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
