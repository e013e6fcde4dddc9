use super::messages::{generate_diagnostic_message, generate_insert_message};
use std::path::Path;
use tagcheck::{
    formatting::{render, Identity, Render, Syntax},
    language::{InsertError, LoadingError, TagToken},
    parsing::Rejection,
    validation::{Diagnostic, Severity},
};

fn label(severity: Severity, renderer: &dyn Render) -> String {
    match severity {
        Severity::Error => renderer.style(Syntax::Error, "error"),
        Severity::Info => renderer.style(Syntax::Info, "info"),
    }
}

/// Format a refused tag with full details including the line it came from
pub fn full_rejection<'i>(
    rejection: &Rejection,
    filename: &'i Path,
    source: &'i str,
    renderer: &dyn Render,
) -> String {
    let (problem, details) = generate_insert_message(&rejection.error, renderer);

    let code = source
        .lines()
        .nth(rejection.line)
        .unwrap_or("?");
    let j = calculate_column_number(code, &rejection.raw);

    let line = rejection.line + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{} {} {}
{:width$} {} {}

{}
        "#,
        label(Severity::Error, renderer),
        filename.to_string_lossy(),
        line,
        column,
        renderer.style(Syntax::Heading, &problem),
        ' ',
        renderer.style(Syntax::Position, "|"),
        renderer.style(Syntax::Position, &format!("{:>width$}", line)),
        renderer.style(Syntax::Position, "|"),
        code,
        ' ',
        renderer.style(Syntax::Position, "|"),
        renderer.style(Syntax::Caret, &format!("{:>column$}", '^')),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a refused tag with concise single-line output
pub fn concise_rejection<'i>(
    rejection: &Rejection,
    filename: &'i Path,
    source: &'i str,
    renderer: &dyn Render,
) -> String {
    let (problem, _) = generate_insert_message(&rejection.error, renderer);

    let code = source
        .lines()
        .nth(rejection.line)
        .unwrap_or("");
    let line = rejection.line + 1;
    let column = calculate_column_number(code, &rejection.raw) + 1;

    format!(
        "{}: {}:{}:{} {}",
        label(Severity::Error, renderer),
        filename.to_string_lossy(),
        line,
        column,
        renderer.style(Syntax::Heading, &problem),
    )
}

/// Format a refused tag typed interactively, where there is no file or line
/// to point at
pub fn concise_insert_error(raw: &str, error: &InsertError, renderer: &dyn Render) -> String {
    let (problem, _) = generate_insert_message(error, renderer);

    format!(
        "{}: {} {}",
        label(Severity::Error, renderer),
        raw,
        renderer.style(Syntax::Heading, &problem),
    )
}

/// Format a validation finding with the sequence it refers to, marking the
/// offending tag
pub fn full_diagnostic(diagnostic: &Diagnostic, tokens: &[TagToken], renderer: &dyn Render) -> String {
    let (problem, details) = generate_diagnostic_message(diagnostic, renderer);
    let severity = label(diagnostic.severity(), renderer);

    let position = match diagnostic.position() {
        Some(position) if position < tokens.len() => position,
        _ => {
            let problem = renderer.style(Syntax::Heading, &problem);
            return if details.is_empty() {
                format!("{}: {}", severity, problem)
            } else {
                format!("{}: {}\n\n{}", severity, problem, details)
            };
        }
    };

    let code = render(renderer, tokens);
    let column = calculate_token_column(tokens, position) + 1;
    let width = 3.max(
        (position + 1)
            .to_string()
            .len(),
    );

    format!(
        r#"
{}: tag {} {}

{:width$} {}
{} {} {}
{:width$} {} {}

{}
        "#,
        severity,
        position + 1,
        renderer.style(Syntax::Heading, &problem),
        ' ',
        renderer.style(Syntax::Position, "|"),
        renderer.style(Syntax::Position, &format!("{:>width$}", position + 1)),
        renderer.style(Syntax::Position, "|"),
        code,
        ' ',
        renderer.style(Syntax::Position, "|"),
        renderer.style(Syntax::Caret, &format!("{:>column$}", '^')),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a validation finding with concise single-line output
pub fn concise_diagnostic(diagnostic: &Diagnostic, renderer: &dyn Render) -> String {
    let (problem, _) = generate_diagnostic_message(diagnostic, renderer);
    let severity = label(diagnostic.severity(), renderer);

    match diagnostic.position() {
        Some(position) => format!(
            "{}: tag {} {}",
            severity,
            position + 1,
            renderer.style(Syntax::Heading, &problem)
        ),
        None => format!("{}: {}", severity, renderer.style(Syntax::Heading, &problem)),
    }
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>, renderer: &dyn Render) -> String {
    format!(
        "{}: {}: {}",
        label(Severity::Error, renderer),
        error
            .filename
            .display(),
        renderer.style(Syntax::Heading, &error.problem)
    )
}

// Zero-origin column of a raw tag within the line it came from, counted in
// characters.
fn calculate_column_number(code: &str, raw: &str) -> usize {
    match code.find(raw) {
        Some(offset) => code[..offset]
            .chars()
            .count(),
        None => 0,
    }
}

// Zero-origin column of a token within the plain rendering of the sequence.
// The styled rendering may carry escapes, so width is measured unstyled.
fn calculate_token_column(tokens: &[TagToken], position: usize) -> usize {
    if position == 0 {
        return 0;
    }
    render(&Identity, &tokens[..position])
        .chars()
        .count()
        + 1
}
