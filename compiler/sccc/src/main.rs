//! Shader cross compiler driver.
//!
//! ```text
//! sccc lex <file> [options]     dump the token stream
//! sccc parse <file> [options]   check the program declaration
//! ```
//!
//! `-` reads from stdin. Set `RUST_LOG` (for example
//! `RUST_LOG=scc_ir_lexer=trace`) to get scanner and parser traces on stderr.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Once;

use scc_ir_lexer::tokenize;
use scc_ir_parse::{parse, ParseOptions, Recovery};
use scc_lexer_core::ReaderFeed;
use tracing::debug;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber. Only active when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Command {
    Lex,
    Parse,
}

#[derive(Clone, Eq, PartialEq, Debug)]
enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug)]
struct Invocation {
    command: Command,
    input: Input,
    options: ParseOptions,
}

const USAGE: &str = "\
Usage: sccc <lex|parse> <file|-> [options]

Options:
  --buffer=<n>         Scanner buffer capacity in characters (even, default 8192)
  --tab-width=<n>      Columns per tab (default 2)
  --no-recovery        Report every token after a grammar error
  --legacy-keywords    Accept `ouputs` as `outputs`";

fn numeric<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects a number, got `{value}`"))
}

/// Interpret everything after the program name.
fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut args = args.iter();
    let command = match args.next().map(String::as_str) {
        Some("lex") => Command::Lex,
        Some("parse") => Command::Parse,
        Some(other) => return Err(format!("unknown command `{other}`")),
        None => return Err("missing command".to_owned()),
    };

    let mut input = None;
    let mut options = ParseOptions::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--buffer=") {
            options.scanner = options.scanner.with_capacity(numeric("--buffer", value)?);
        } else if let Some(value) = arg.strip_prefix("--tab-width=") {
            options.scanner = options.scanner.with_tab_width(numeric("--tab-width", value)?);
        } else if arg == "--no-recovery" {
            options.recovery = Recovery::None;
        } else if arg == "--legacy-keywords" {
            options.classifier.legacy_keywords = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option `{arg}`"));
        } else if input.is_some() {
            return Err(format!("unexpected argument `{arg}`"));
        } else if arg == "-" {
            input = Some(Input::Stdin);
        } else {
            input = Some(Input::File(PathBuf::from(arg)));
        }
    }

    let input = input.ok_or_else(|| "missing input file".to_owned())?;
    Ok(Invocation {
        command,
        input,
        options,
    })
}

fn open(input: &Input) -> io::Result<ReaderFeed<Box<dyn Read>>> {
    let reader: Box<dyn Read> = match input {
        Input::Stdin => Box::new(io::stdin().lock()),
        Input::File(path) => Box::new(File::open(path)?),
    };
    Ok(ReaderFeed::new(reader))
}

fn describe(input: &Input) -> String {
    match input {
        Input::Stdin => "<stdin>".to_owned(),
        Input::File(path) => path.display().to_string(),
    }
}

/// Run one invocation; the result is the process exit code.
fn run(invocation: &Invocation) -> i32 {
    let name = describe(&invocation.input);
    debug!(command = ?invocation.command, input = %name, "running");
    let mut feed = match open(&invocation.input) {
        Ok(feed) => feed,
        Err(err) => {
            eprintln!("error: cannot read '{name}': {err}");
            return 1;
        }
    };

    let failed = match invocation.command {
        Command::Lex => lex(&mut feed, &invocation.options),
        Command::Parse => check(&mut feed, &invocation.options),
    };
    let failed = match failed {
        Ok(failed) => failed,
        Err(message) => {
            eprintln!("error: {message}");
            return 1;
        }
    };

    if let Some(err) = feed.take_error() {
        eprintln!("error: reading '{name}' failed: {err}");
        return 1;
    }
    i32::from(failed)
}

/// Print every token, then the lexical errors. Returns whether any error was
/// recorded.
fn lex(feed: &mut ReaderFeed<Box<dyn Read>>, options: &ParseOptions) -> Result<bool, String> {
    let tokenized =
        tokenize(feed, &options.scanner, options.classifier.clone()).map_err(|e| e.to_string())?;

    let mut out = io::stdout().lock();
    for token in &tokenized.tokens {
        writeln!(out, "{token}").map_err(|e| e.to_string())?;
    }
    for error in &tokenized.errors {
        eprintln!("{} {error}", error.span.start);
    }
    Ok(!tokenized.errors.is_empty())
}

/// Parse, print the diagnostics and the declared program type. Returns
/// whether the parse failed.
fn check(feed: &mut ReaderFeed<Box<dyn Read>>, options: &ParseOptions) -> Result<bool, String> {
    let outcome = parse(feed, options).map_err(|e| e.to_string())?;

    outcome
        .render(&mut io::stderr().lock())
        .map_err(|e| e.to_string())?;
    match outcome.program {
        Some(kind) => println!("program: {kind}"),
        None => println!("program: none"),
    }
    Ok(!outcome.is_success())
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return;
    }

    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };
    process::exit(run(&invocation));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn defaults_with_file() {
        let invocation = match parse_args(&args(&["parse", "shader.ir"])) {
            Ok(invocation) => invocation,
            Err(message) => panic!("{message}"),
        };
        assert_eq!(invocation.command, Command::Parse);
        assert_eq!(invocation.input, Input::File(PathBuf::from("shader.ir")));
        assert_eq!(invocation.options.scanner.capacity, 8192);
        assert_eq!(invocation.options.recovery, Recovery::PanicMode);
    }

    #[test]
    fn flags_fill_options() {
        let invocation = match parse_args(&args(&[
            "lex",
            "--buffer=64",
            "-",
            "--tab-width=4",
            "--no-recovery",
            "--legacy-keywords",
        ])) {
            Ok(invocation) => invocation,
            Err(message) => panic!("{message}"),
        };
        assert_eq!(invocation.command, Command::Lex);
        assert_eq!(invocation.input, Input::Stdin);
        assert_eq!(invocation.options.scanner.capacity, 64);
        assert_eq!(invocation.options.scanner.tab_width, 4);
        assert_eq!(invocation.options.recovery, Recovery::None);
        assert!(invocation.options.classifier.legacy_keywords);
    }

    #[test]
    fn rejects_bad_arguments() {
        let cases: [(&[&str], &str); 5] = [
            (&["build", "x"], "unknown command `build`"),
            (&["lex"], "missing input file"),
            (&["lex", "a", "b"], "unexpected argument `b`"),
            (&["parse", "a", "--fast"], "unknown option `--fast`"),
            (&["parse", "a", "--buffer=big"], "--buffer expects a number, got `big`"),
        ];
        for (list, expected) in cases {
            match parse_args(&args(list)) {
                Ok(invocation) => panic!("{list:?} accepted: {invocation:?}"),
                Err(message) => assert_eq!(message, expected),
            }
        }
    }
}
