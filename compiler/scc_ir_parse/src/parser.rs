//! Statement-level parser.
//!
//! The grammar currently covers the program-type declaration:
//!
//! ```text
//! program  := (comment | declaration)* EOF
//! declaration := "program" ("vertex" | "pixel" | "compute") <end of line>
//! ```
//!
//! A declaration must be the last thing on its line; a trailing comment or
//! the end of the stream also counts. Every other token is reported as
//! unexpected.

use scc_ir_lexer::{Classifier, Token, TokenBuffer, TokenKind};
use scc_lexer_core::{ConfigError, Feed, Span};
use tracing::debug;

use crate::recovery::{synchronize, STATEMENT_START};
use crate::{ParseOptions, ParseOutcome, ParserMessage, ProgramKind, Recovery};

const PROGRAM_TYPE: &str = "Program type can only be `vertex`, `pixel`, or `compute`.";

/// Parser state for one stream.
pub struct Parser<F> {
    tokens: TokenBuffer<F>,
    recovery: Recovery,
    program: Option<ProgramKind>,
    messages: Vec<ParserMessage>,
}

impl<F: Feed> Parser<F> {
    pub fn new(feed: F, options: &ParseOptions) -> Result<Self, ConfigError> {
        let classifier = Classifier::new(feed, &options.scanner, options.classifier.clone())?;
        Ok(Parser {
            tokens: TokenBuffer::with_chunk(classifier, options.token_chunk),
            recovery: options.recovery,
            program: None,
            messages: Vec::new(),
        })
    }

    /// Has a failing message been recorded? Lexical errors are not counted.
    pub fn has_failed(&self) -> bool {
        self.messages.iter().any(|m| m.severity.is_failure())
    }

    /// Run to the end of the stream.
    pub fn parse(mut self) -> ParseOutcome {
        loop {
            let Some(token) = self.tokens.get() else {
                let span = self.tokens.last().map_or_else(Span::default, |t| t.span);
                self.messages.push(ParserMessage::internal(
                    span,
                    "Token stream ended without an end-of-file token.",
                ));
                break;
            };
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Comment => {}
                TokenKind::Program => match self.program_declaration(&token) {
                    Ok(kind) => {
                        debug!(program = %kind, line = token.line(), "program type declared");
                        self.program = Some(kind);
                    }
                    Err(message) => self.report(message),
                },
                _ => {
                    debug!(kind = token.kind.display_name(), span = %token.span, "unexpected token");
                    self.report(ParserMessage::error(token.span, "Unexpected token."));
                }
            }
        }

        let scanned = self.tokens.finish();
        ParseOutcome {
            program: self.program,
            lexical_errors: scanned.errors,
            messages: self.messages,
        }
    }

    /// `keyword` is the consumed `program` token.
    fn program_declaration(&mut self, keyword: &Token) -> Result<ProgramKind, ParserMessage> {
        let name = match self.tokens.peek() {
            Some(Token {
                kind: TokenKind::Identifier { name, .. },
                ..
            }) => name.clone(),
            Some(other) => return Err(ParserMessage::error(other.span, PROGRAM_TYPE)),
            None => return Err(ParserMessage::error(keyword.span, PROGRAM_TYPE)),
        };
        let span = self.tokens.get().map_or(keyword.span, |t| t.span);

        let Some(kind) = ProgramKind::from_name(&name) else {
            return Err(ParserMessage::error(
                span,
                format!("{PROGRAM_TYPE} Was given `{name}`."),
            ));
        };
        if !self.ends_line() {
            return Err(ParserMessage::error(
                span,
                "Program type must be specified on its own line.",
            ));
        }
        if self.program.is_some() {
            return Err(ParserMessage::error(keyword.span, "Cannot redefine program type!"));
        }
        Ok(kind)
    }

    /// Nothing but a comment or the end of the stream follows on this line.
    fn ends_line(&mut self) -> bool {
        if self.tokens.is_next_on_new_line() {
            return true;
        }
        self.tokens
            .peek()
            .is_some_and(|next| matches!(next.kind, TokenKind::Comment | TokenKind::Eof))
    }

    fn report(&mut self, message: ParserMessage) {
        self.messages.push(message);
        if self.recovery == Recovery::PanicMode {
            synchronize(&mut self.tokens, STATEMENT_START);
        }
    }
}
