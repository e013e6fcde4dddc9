use std::borrow::Cow;

use crate::formatting::*;
use crate::language::vocabulary::{self, BODY_PRIORITY};
use crate::language::TagToken;

/// We do the formatting in two passes. First we convert the tokens into a
/// Vec of "fragments" (Syntax tag, String pairs). Then second we apply the
/// specified renderer to each pair to result in an embellished/highlighted
/// String.
pub fn render(renderer: &dyn Render, tokens: &[TagToken]) -> String {
    // Pass 1: tokens to tagged fragments
    let fragments = format_to_fragments(tokens);

    // Pass 2: render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Render one token, brackets included.
pub fn render_token(token: &TagToken, renderer: &dyn Render) -> String {
    let mut fragments = Vec::new();
    append_token(&mut fragments, token);

    render_to_string(renderer, fragments)
}

fn classify(name: &str) -> Syntax {
    match vocabulary::priority_of(name) {
        Some(priority) if priority <= BODY_PRIORITY => Syntax::Section,
        Some(_) => Syntax::Element,
        None => Syntax::Unknown,
    }
}

fn append_token<'i>(fragments: &mut Vec<(Syntax, Cow<'i, str>)>, token: &'i TagToken) {
    if token.is_closing() {
        fragments.push((Syntax::Punctuation, Cow::Borrowed("</")));
    } else {
        fragments.push((Syntax::Punctuation, Cow::Borrowed("<")));
    }
    fragments.push((classify(&token.name), Cow::Borrowed(&token.name)));
    fragments.push((Syntax::Punctuation, Cow::Borrowed(">")));
}

/// Pass 1: convert tokens to semantic fragments, separated by spaces.
fn format_to_fragments(tokens: &[TagToken]) -> Vec<(Syntax, Cow<'_, str>)> {
    let mut fragments = Vec::new();

    for (i, token) in tokens
        .iter()
        .enumerate()
    {
        if i > 0 {
            fragments.push((Syntax::Neutral, Cow::Borrowed(" ")));
        }
        append_token(&mut fragments, token);
    }

    fragments
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string<'i>(renderer: &dyn Render, fragments: Vec<(Syntax, Cow<'i, str>)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
