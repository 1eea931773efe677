//! Parser diagnostics.

use std::fmt;

use scc_lexer_core::Span;

/// How serious a [`ParserMessage`] is.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    /// Informational; the parse still succeeds.
    Warning,
    Error,
    /// The parser broke one of its own invariants.
    Internal,
}

impl Severity {
    /// Does a message of this severity fail the parse?
    #[inline]
    pub const fn is_failure(self) -> bool {
        !matches!(self, Severity::Warning)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Internal => "INTERNAL ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A grammar diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserMessage {
    pub severity: Severity,
    pub span: Span,
    pub message: String,
}

impl ParserMessage {
    pub fn new(severity: Severity, span: Span, message: impl Into<String>) -> Self {
        ParserMessage {
            severity,
            span,
            message: message.into(),
        }
    }

    pub fn warning(span: Span, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, span, message)
    }

    pub fn error(span: Span, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, span, message)
    }

    pub fn internal(span: Span, message: impl Into<String>) -> Self {
        Self::new(Severity::Internal, span, message)
    }
}

impl fmt::Display for ParserMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_with_severity_label() {
        let span = Span::default();
        assert_eq!(
            ParserMessage::warning(span, "careful").to_string(),
            "WARNING: careful"
        );
        assert_eq!(
            ParserMessage::error(span, "Unexpected token.").to_string(),
            "ERROR: Unexpected token."
        );
        assert_eq!(
            ParserMessage::internal(span, "lost").to_string(),
            "INTERNAL ERROR: lost"
        );
    }

    #[test]
    fn only_warnings_are_harmless() {
        assert!(!Severity::Warning.is_failure());
        assert!(Severity::Error.is_failure());
        assert!(Severity::Internal.is_failure());
    }
}
