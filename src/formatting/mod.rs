//! Turning tags and sequences back into text

mod renderer;
mod syntax;

pub use renderer::*;
pub use syntax::*;
