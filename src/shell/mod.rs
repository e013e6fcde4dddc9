//! Interactive session: a menu loop over a single tag sequence.

use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use tagcheck::formatting::{Render, Syntax};
use tagcheck::parsing;
use tagcheck::sequence::TagSequence;
use tagcheck::validation::Options;

use crate::output;
use crate::problem::{self, Present};

const TITLE: &str = "HTML Tag Validator";

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    Template(tinytemplate::error::Error),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Io(error) => write!(f, "i/o failure: {}", error),
            ShellError::Template(error) => write!(f, "template failure: {}", error),
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(error: std::io::Error) -> Self {
        ShellError::Io(error)
    }
}

impl From<tinytemplate::error::Error> for ShellError {
    fn from(error: tinytemplate::error::Error) -> Self {
        ShellError::Template(error)
    }
}

pub struct Settings<'a> {
    pub options: Options,
    pub renderer: &'a dyn Render,
    pub full: bool,
}

/// Run the menu loop until the user chooses Exit or input runs out,
/// returning the sequence as it stood at the end of the session.
pub fn run<R, W>(input: R, writer: &mut W, settings: &Settings) -> Result<TagSequence, ShellError>
where
    R: BufRead,
    W: Write,
{
    let renderer = settings.renderer;
    let mut sequence = TagSequence::new();
    let mut lines = input.lines();

    info!("Starting interactive session");

    loop {
        write!(writer, "{}", output::menu(TITLE)?)?;
        writer.flush()?;

        let choice = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match choice.trim() {
            "1" => {
                write!(writer, "Enter HTML tag (e.g., <html>, <p>, </p>): ")?;
                writer.flush()?;
                let line = match lines.next() {
                    Some(line) => line?,
                    None => break,
                };

                for rejection in parsing::insert_line(&mut sequence, &line, 0) {
                    writeln!(
                        writer,
                        "{}",
                        problem::concise_insert_error(&rejection.raw, &rejection.error, renderer)
                    )?;
                }
            }
            "2" => {
                write!(writer, "Enter tag to delete (e.g., <p>): ")?;
                writer.flush()?;
                let line = match lines.next() {
                    Some(line) => line?,
                    None => break,
                };

                let label = renderer.style(Syntax::Info, "info");
                if sequence.is_empty() {
                    writeln!(writer, "{}: No tags to delete", label)?;
                    continue;
                }

                let name = line.trim();
                match sequence.delete_by_name(name) {
                    0 => writeln!(writer, "{}: Nothing to delete for {}", label, name)?,
                    removed => writeln!(
                        writer,
                        "{}: Deleted {} tag{}; both opening and closing instances are removed",
                        label,
                        removed,
                        if removed == 1 { "" } else { "s" }
                    )?,
                }
            }
            "3" => {
                let report = sequence.validate_with(&settings.options);

                for finding in &report {
                    let text = if settings.full {
                        problem::full_diagnostic(finding, sequence.tokens(), renderer)
                    } else {
                        problem::concise_diagnostic(finding, renderer)
                    };
                    writeln!(writer, "{}", text)?;
                }
                writeln!(
                    writer,
                    "{}",
                    output::summary(sequence.len(), report.error_count())?
                )?;
            }
            "4" => {
                let tags = sequence.present(renderer);
                writeln!(writer, "{}", output::listing(&tags)?)?;
            }
            "5" => break,
            other => {
                debug!("Unrecognized menu choice {:?}", other);
                writeln!(writer, "Invalid choice. Please try again.")?;
            }
        }
    }

    info!("Session ended with {} tags", sequence.len());
    Ok(sequence)
}
