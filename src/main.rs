use clap::value_parser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use tagcheck::formatting::{Identity, Render, Syntax};
use tagcheck::parsing;
use tagcheck::rendering::Terminal;
use tagcheck::validation::{Options, DEFAULT_MAX_DEPTH};

mod output;
mod problem;
mod shell;

fn validation_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_parser(value_parser!(usize))
                .help("How many tags may be open at once before nesting is reported as too deep."),
        )
        .arg(
            Arg::new("lenient-empty")
                .long("lenient-empty")
                .action(ArgAction::SetTrue)
                .help("Don't report empty elements such as <br> that are never closed."),
        )
        .arg(
            Arg::new("full")
                .long("full")
                .action(ArgAction::SetTrue)
                .help("Explain each problem in detail rather than with a single line."),
        )
        .arg(
            Arg::new("raw-control-chars")
                .short('R')
                .long("raw-control-chars")
                .action(ArgAction::SetTrue)
                .help("Emit ANSI escape codes for colour even if output is redirected to a pipe or file."),
        )
}

fn options_from(submatches: &ArgMatches) -> Options {
    Options {
        max_depth: submatches
            .get_one::<usize>("max-depth")
            .copied()
            .unwrap_or(DEFAULT_MAX_DEPTH),
        allow_unclosed_empty: submatches.get_flag("lenient-empty"),
    }
}

fn renderer_from(submatches: &ArgMatches) -> &'static dyn Render {
    if submatches.get_flag("raw-control-chars")
        || std::io::stdout().is_terminal()
    {
        &Terminal
    } else {
        &Identity
    }
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("tagcheck")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Check the structure of a sequence of HTML tags.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log internal progress to standard error."),
        )
        .subcommand(validation_args(
            Command::new("check")
                .about("Validate the tags in the given file")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the tags you want to check, or '-' for standard input."),
                ),
        ))
        .subcommand(validation_args(
            Command::new("shell").about("Enter tags interactively and validate them"),
        ))
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let options = options_from(submatches);
            let renderer = renderer_from(submatches);
            let full = submatches.get_flag("full");

            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));

            debug!(?filename, ?options);

            let content = match parsing::load(filename) {
                Ok(content) => content,
                Err(error) => {
                    eprintln!("{}", problem::concise_loading_error(&error, renderer));
                    std::process::exit(1);
                }
            };

            let (sequence, rejections) = parsing::parse(&content);

            for rejection in &rejections {
                if full {
                    eprintln!(
                        "{}\n",
                        problem::full_rejection(rejection, filename, &content, renderer)
                    );
                } else {
                    eprintln!(
                        "{}",
                        problem::concise_rejection(rejection, filename, &content, renderer)
                    );
                }
            }

            let report = sequence.validate_with(&options);

            for finding in &report {
                if full {
                    println!(
                        "{}\n",
                        problem::full_diagnostic(finding, sequence.tokens(), renderer)
                    );
                } else {
                    println!("{}", problem::concise_diagnostic(finding, renderer));
                }
            }

            match output::summary(sequence.len(), report.error_count()) {
                Ok(summary) => println!("{}", summary),
                Err(error) => debug!(?error),
            }

            if !rejections.is_empty() || !report.is_valid() {
                std::process::exit(1);
            }
        }
        Some(("shell", submatches)) => {
            let settings = shell::Settings {
                options: options_from(submatches),
                renderer: renderer_from(submatches),
                full: submatches.get_flag("full"),
            };

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();

            if let Err(error) = shell::run(stdin.lock(), &mut stdout, &settings) {
                eprintln!(
                    "{}: {}",
                    settings
                        .renderer
                        .style(Syntax::Error, "error"),
                    error
                );
                std::process::exit(1);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: tagcheck [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}
