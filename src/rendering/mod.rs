//! Output backends implementing Render

mod terminal;

pub use terminal::Terminal;
