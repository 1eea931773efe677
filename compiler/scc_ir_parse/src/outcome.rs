//! Result of a parse session.

use std::fmt;
use std::io;

use scc_lexer_core::LexicalError;

use crate::{ParserMessage, ProgramKind};

/// Everything a parse produced. Diagnostics are returned, never printed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The declared program type, if a declaration succeeded.
    pub program: Option<ProgramKind>,
    pub lexical_errors: Vec<LexicalError>,
    pub messages: Vec<ParserMessage>,
}

impl ParseOutcome {
    /// No lexical errors and no failing parser message.
    pub fn is_success(&self) -> bool {
        self.lexical_errors.is_empty() && !self.messages.iter().any(|m| m.severity.is_failure())
    }

    /// Total number of diagnostics of either kind.
    pub fn diagnostic_count(&self) -> usize {
        self.lexical_errors.len() + self.messages.len()
    }

    /// Write every diagnostic, one per line: lexical errors first, then
    /// parser messages, each in recorded order.
    pub fn render<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.lexical_errors {
            writeln!(f, "{error}")?;
        }
        for message in &self.messages {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scc_lexer_core::Span;

    use super::*;

    fn sample() -> ParseOutcome {
        ParseOutcome {
            program: None,
            lexical_errors: vec![LexicalError {
                span: Span::default(),
                message: "Unknown token `$'!".into(),
            }],
            messages: vec![
                ParserMessage::warning(Span::default(), "odd"),
                ParserMessage::error(Span::default(), "Unexpected token."),
            ],
        }
    }

    #[test]
    fn empty_outcome_succeeds() {
        let outcome = ParseOutcome::default();
        assert!(outcome.is_success());
        assert_eq!(outcome.to_string(), "");
    }

    #[test]
    fn warnings_alone_still_succeed() {
        let outcome = ParseOutcome {
            messages: vec![ParserMessage::warning(Span::default(), "odd")],
            ..ParseOutcome::default()
        };
        assert!(outcome.is_success());
    }

    #[test]
    fn lexical_errors_render_first() {
        let outcome = sample();
        assert!(!outcome.is_success());
        assert_eq!(outcome.diagnostic_count(), 3);

        let mut out = Vec::new();
        let rendered = match outcome.render(&mut out) {
            Ok(()) => String::from_utf8_lossy(&out).into_owned(),
            Err(err) => panic!("render into a Vec failed: {err}"),
        };
        assert_eq!(
            rendered,
            "SYNTAX ERROR: Unknown token `$'!\nWARNING: odd\nERROR: Unexpected token.\n"
        );
        assert_eq!(outcome.to_string(), rendered);
    }
}
