//! Parser for the shader cross compiler's IR text format.
//!
//! Drives a [`TokenBuffer`](scc_ir_lexer::TokenBuffer) and collects
//! grammar diagnostics alongside the lexical ones. Nothing is printed and
//! nothing aborts; the caller gets a [`ParseOutcome`] and decides what to do
//! with a failure.
//!
//! # Diagnostics
//!
//! - [`LexicalError`](scc_lexer_core::LexicalError): malformed lexemes,
//!   rendered `SYNTAX ERROR: ...`
//! - [`ParserMessage`]: grammar violations, rendered `ERROR: ...` (or
//!   `WARNING`, `INTERNAL ERROR`)

mod message;
mod options;
mod outcome;
mod parser;
mod program;
pub mod recovery;

pub use message::{ParserMessage, Severity};
pub use options::{ParseOptions, Recovery};
pub use outcome::ParseOutcome;
pub use parser::Parser;
pub use program::ProgramKind;

use scc_lexer_core::{ConfigError, Feed, SliceFeed};

/// Parse a whole stream.
pub fn parse<F: Feed>(feed: F, options: &ParseOptions) -> Result<ParseOutcome, ConfigError> {
    Ok(Parser::new(feed, options)?.parse())
}

/// Parse in-memory source text.
pub fn parse_str(source: &str, options: &ParseOptions) -> Result<ParseOutcome, ConfigError> {
    parse(SliceFeed::new(source), options)
}
