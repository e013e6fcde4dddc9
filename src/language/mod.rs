// Types representing tags and the rules governing them

mod error;
mod types;
pub mod vocabulary;

// Re-export all public symbols
pub use error::*;
pub use types::*;
pub use vocabulary::TagSpec;
