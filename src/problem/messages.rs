use crate::problem::Present;
use tagcheck::{
    formatting::Render,
    language::{vocabulary, InsertError, TagToken},
    parsing::{ParsingError, MAX_TAG_LENGTH},
    validation::Diagnostic,
};

fn tag(name: &str, renderer: &dyn Render) -> String {
    TagToken::opening(name).present(renderer)
}

fn closer(name: &str, renderer: &dyn Render) -> String {
    TagToken::closing(name).present(renderer)
}

fn sections(renderer: &dyn Render) -> String {
    ["html", "head", "title", "body"]
        .iter()
        .map(|name| tag(name, renderer))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate problem and detail messages for a tag refused at insertion
pub fn generate_insert_message(error: &InsertError, renderer: &dyn Render) -> (String, String) {
    match error {
        InsertError::InvalidFormat(ParsingError::IncompleteTag(raw)) => (
            format!("Incomplete tag {}", raw),
            format!(
                r#"
Each tag must be closed with a '>' before any space or the end of the line,
for example {} or {}. Attributes are not supported, so a space inside a tag
also leaves it incomplete.
                "#,
                tag("p", renderer),
                closer("p", renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        InsertError::InvalidFormat(ParsingError::EmptyName(raw)) => (
            format!("Invalid tag format {}", raw),
            "The tag has no name between its angle brackets.".to_string(),
        ),
        InsertError::InvalidFormat(ParsingError::TooLong(length)) => (
            "Tag too long".to_string(),
            format!(
                "The tag name is {} characters long; names may be at most {} characters.",
                length, MAX_TAG_LENGTH
            ),
        ),
        InsertError::UnknownTag(name) => {
            let known = vocabulary::VOCABULARY
                .iter()
                .map(|spec| spec.present(renderer))
                .collect::<Vec<_>>();

            (
                format!("Invalid tag <{}>", name),
                format!(
                    r#"
Only the following tags are recognized:

    {}
                    "#,
                    known.join(" ")
                )
                .trim_ascii()
                .to_string(),
            )
        }
        InsertError::OutOfOrder { tag: found, after } => (
            format!("<{}> should not appear after <{}>", found, after),
            format!(
                r#"
Opening tags must be entered in structural order: {} first, then {}, {}
and {}, then content. An opening tag ranked below one already entered is
refused; delete the later tag first if you need to insert {}.
                "#,
                tag("html", renderer),
                tag("head", renderer),
                tag("title", renderer),
                tag("body", renderer),
                tag(found, renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        InsertError::ResourceExhausted => (
            "Memory allocation failed".to_string(),
            "There was not enough memory to store another tag.".to_string(),
        ),
    }
}

/// Generate problem and detail messages for a validation finding
pub fn generate_diagnostic_message(
    diagnostic: &Diagnostic,
    renderer: &dyn Render,
) -> (String, String) {
    match diagnostic {
        Diagnostic::MissingRootTag => (
            "Missing <html> tag".to_string(),
            format!(
                "A document must begin with {}.",
                tag(vocabulary::ROOT, renderer)
            ),
        ),
        Diagnostic::MalformedToken(_, name) => (
            format!("Invalid or incomplete tag <{}>", name),
            "This tag has no name, or a name that is not in the vocabulary.".to_string(),
        ),
        Diagnostic::OutOfOrderTag(_, found, expected) => {
            let problem = match expected {
                Some(expected) => format!(
                    "<{}> should appear after <{}> or be in correct order",
                    found, expected
                ),
                None => format!("<{}> is not in correct order", found),
            };
            (
                problem,
                format!(
                    r#"
The top-level sections of a document are expected in the order {}.
The {} section and its {} are optional, but once {} has been
seen the remaining tags must follow in sequence.
                    "#,
                    sections(renderer),
                    tag("head", renderer),
                    tag("title", renderer),
                    tag("head", renderer)
                )
                .trim_ascii()
                .to_string(),
            )
        }
        Diagnostic::UnmatchedClosingTag(_, name) => (
            format!("Unmatched closing tag </{}>", name),
            format!(
                "There is no open {} for this {} to close.",
                tag(name, renderer),
                closer(name, renderer)
            ),
        ),
        Diagnostic::UnmatchedOpeningTag(_, name) => (
            format!("Unmatched tag <{}>", name),
            format!(
                "This {} is never closed by a matching {}.",
                tag(name, renderer),
                closer(name, renderer)
            ),
        ),
        Diagnostic::NestingTooDeep(_, name) => (
            format!("<{}> nested too deeply", name),
            "Too many tags are open at this point; the limit can be raised with --max-depth."
                .to_string(),
        ),
        Diagnostic::Valid => ("Code is valid".to_string(), String::new()),
    }
}
