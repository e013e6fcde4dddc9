//! Types representing the tokens held in a tag sequence

use std::fmt;

use super::vocabulary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Opening,
    Closing,
}

/// A single accepted tag. The name is canonical: lowercase, and without any
/// closing marker; that is carried separately as the role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    pub name: String,
    pub role: Role,
}

impl TagToken {
    pub fn opening(name: impl Into<String>) -> TagToken {
        TagToken {
            name: name.into(),
            role: Role::Opening,
        }
    }

    pub fn closing(name: impl Into<String>) -> TagToken {
        TagToken {
            name: name.into(),
            role: Role::Closing,
        }
    }

    pub fn is_closing(&self) -> bool {
        self.role == Role::Closing
    }

    pub fn is_opening(&self) -> bool {
        self.role == Role::Opening
    }

    pub fn priority(&self) -> Option<u8> {
        vocabulary::priority_of(&self.name)
    }

    pub fn is_empty_element(&self) -> bool {
        vocabulary::is_empty_element(&self.name)
    }

    /// The form used when listing a sequence: `p` for an opening tag, `/p`
    /// for its closer.
    pub fn canonical(&self) -> String {
        match self.role {
            Role::Opening => self
                .name
                .clone(),
            Role::Closing => format!("/{}", self.name),
        }
    }
}

impl fmt::Display for TagToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Role::Opening => write!(f, "<{}>", self.name),
            Role::Closing => write!(f, "</{}>", self.name),
        }
    }
}
