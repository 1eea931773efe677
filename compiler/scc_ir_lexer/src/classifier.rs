//! Token classification cascade.
//!
//! Each call to [`Classifier::next_token`] skips whitespace and classifies
//! what follows. Single characters are handled directly:
//!
//! | Start | Token |
//! |-------|-------|
//! | `;` | [`Comment`](TokenKind::Comment) to end of line |
//! | `( ) { } [ ] , =` | punctuation |
//! | anything else | a lexeme, up to whitespace or a delimiter |
//!
//! Lexemes are tried in order, first match wins: keyword, type name,
//! operation mnemonic, identifier, label, number. A lexeme nothing accepts
//! becomes [`Unknown`](TokenKind::Unknown) with a lexical error quoting it.
//!
//! Classification never stops on an error. A rejected lexeme is recorded on
//! the scanner's error list and returned as `Unknown` so the caller keeps
//! getting tokens.

use scc_lexer_core::{
    Character, ConfigError, Delimiters, Feed, LexicalError, Position, ScanError, ScanOutput,
    Scanner, ScannerConfig, Span,
};
use tracing::trace;

use crate::lex_error::LexErrorKind;
use crate::{ident, keywords, number, types, OperationTable, Token, TokenKind};

/// Characters that end a lexeme in addition to whitespace.
pub const DELIMITERS: Delimiters = Delimiters::new(b"(){}[];,=");

/// Dialect switches for the classifier.
#[derive(Clone, Default, Debug)]
pub struct ClassifierOptions {
    /// Also accept the historical `ouputs` spelling.
    pub legacy_keywords: bool,
    pub operations: OperationTable,
}

impl ClassifierOptions {
    #[must_use]
    pub fn with_legacy_keywords(mut self, legacy_keywords: bool) -> Self {
        self.legacy_keywords = legacy_keywords;
        self
    }

    #[must_use]
    pub fn with_operations(mut self, operations: OperationTable) -> Self {
        self.operations = operations;
        self
    }
}

/// Outcome of one classification step.
#[derive(Clone, PartialEq, Debug)]
pub(crate) enum Attempt {
    Matched(TokenKind),
    /// The step owns this lexeme but it is malformed.
    Rejected(LexErrorKind),
    /// Not this step's lexeme; try the next one.
    Declined,
}

impl Attempt {
    #[inline]
    pub(crate) fn or_else(self, next: impl FnOnce() -> Attempt) -> Attempt {
        match self {
            Attempt::Declined => next(),
            decided => decided,
        }
    }
}

/// Turns the scanner's characters into [`Token`]s.
pub struct Classifier<F> {
    scanner: Scanner<F>,
    options: ClassifierOptions,
    max_lexeme_len: usize,
}

impl<F: Feed> Classifier<F> {
    pub fn new(
        feed: F,
        config: &ScannerConfig,
        options: ClassifierOptions,
    ) -> Result<Self, ConfigError> {
        let scanner = Scanner::new(feed, config, DELIMITERS)?;
        Ok(Classifier {
            scanner,
            options,
            max_lexeme_len: config.max_lexeme_len,
        })
    }

    /// Classifier whose scanner buffers into caller-supplied storage, handed
    /// back by [`finish`](Self::finish).
    pub fn with_storage(
        feed: F,
        storage: Vec<Character>,
        config: &ScannerConfig,
        options: ClassifierOptions,
    ) -> Result<Self, ConfigError> {
        let scanner = Scanner::with_storage(feed, storage, config, DELIMITERS)?;
        Ok(Classifier {
            scanner,
            options,
            max_lexeme_len: config.max_lexeme_len,
        })
    }

    /// Lexical errors recorded so far.
    pub fn errors(&self) -> &[LexicalError] {
        self.scanner.errors()
    }

    pub fn finish(self) -> ScanOutput {
        self.scanner.finish()
    }

    /// Classify the next token. Returns [`TokenKind::Eof`] once the stream is
    /// exhausted, and on every call after that.
    pub fn next_token(&mut self) -> Token {
        self.scanner.get_next_character();
        let ch = self.scanner.skip_any_whitespace();
        let start = self.scanner.position();

        let token = if self.scanner.is_eof() {
            Token::new(TokenKind::Eof, Span::point(start), 0)
        } else {
            match ch {
                b';' => self.comment(start),
                b'(' => punctuation(TokenKind::LParen, start),
                b')' => punctuation(TokenKind::RParen, start),
                b'{' => punctuation(TokenKind::LBrace, start),
                b'}' => punctuation(TokenKind::RBrace, start),
                b'[' => punctuation(TokenKind::LBracket, start),
                b']' => punctuation(TokenKind::RBracket, start),
                b',' => punctuation(TokenKind::Comma, start),
                b'=' => punctuation(TokenKind::Equals, start),
                _ => self.lexeme(start),
            }
        };

        trace!(
            kind = token.kind.display_name(),
            at = %token.span.start,
            length = token.length,
            "token"
        );
        token
    }

    /// `;` up to the end of the line. The newline is consumed but not
    /// counted; the span ends on it.
    fn comment(&mut self, start: Position) -> Token {
        self.scanner.skip_to_next_line();
        let end = self.scanner.position();
        Token::new(
            TokenKind::Comment,
            Span::new(start, end),
            end.absolute - start.absolute,
        )
    }

    fn lexeme(&mut self, start: Position) -> Token {
        let result = self.scanner.get_up_to_delimiter(self.max_lexeme_len);
        let end = self.scanner.position();
        let span = Span::new(start, end);
        let length = end.absolute - start.absolute + 1;

        let lexeme = match result {
            Ok(lexeme) => lexeme,
            Err(err) => {
                let message = match err {
                    ScanError::LexemeTooLong { length, limit } => {
                        LexErrorKind::TooLong { length, limit }.to_string()
                    }
                    other => other.to_string(),
                };
                self.scanner.error(message, span);
                return Token::new(TokenKind::Unknown, span, length);
            }
        };

        let kind = match self.classify(&lexeme) {
            Attempt::Matched(kind) => kind,
            Attempt::Rejected(err) => {
                self.scanner.error(err.to_string(), span);
                TokenKind::Unknown
            }
            Attempt::Declined => {
                let err = LexErrorKind::UnknownToken(lexeme);
                self.scanner.error(err.to_string(), span);
                TokenKind::Unknown
            }
        };
        Token::new(kind, span, length)
    }

    fn classify(&self, lexeme: &str) -> Attempt {
        if let Some(kind) = keywords::lookup(lexeme, self.options.legacy_keywords) {
            return Attempt::Matched(kind);
        }
        if let Some(def) = types::lookup(lexeme) {
            return Attempt::Matched(TokenKind::Type(def));
        }
        if let Some(op) = self.options.operations.lookup(lexeme) {
            return Attempt::Matched(TokenKind::Operation(op));
        }
        ident::identifier(lexeme)
            .or_else(|| ident::label(lexeme))
            .or_else(|| number::number(lexeme))
    }
}

#[inline]
fn punctuation(kind: TokenKind, at: Position) -> Token {
    Token::new(kind, Span::point(at), 1)
}
