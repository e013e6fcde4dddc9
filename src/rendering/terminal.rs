//! Renderers for colourizing tag listings and reports

use crate::formatting::*;
use owo_colors::OwoColorize;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Punctuation => content // punctuation.definition.tag - #999999 (grey)
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .to_string(),
            Syntax::Section => content // entity.name.tag.structure - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Element => content // entity.name.tag - #4e9a06 (green)
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .to_string(),
            Syntax::Unknown => content // invalid.illegal - #cc0000 (red) underlined
                .color(owo_colors::Rgb(204, 0, 0))
                .underline()
                .to_string(),
            Syntax::Position => content
                .bright_blue()
                .to_string(),
            Syntax::Caret => content
                .bright_red()
                .to_string(),
            Syntax::Error => content
                .bright_red()
                .to_string(),
            Syntax::Info => content
                .bright_green()
                .to_string(),
            Syntax::Heading => content
                .bold()
                .to_string(),
        }
    }
}
