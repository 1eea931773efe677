//! Chunked token lookahead.
//!
//! The buffer classifies tokens a chunk at a time and serves them from a
//! queue, so peeking never re-runs classification. A chunk ends early at the
//! [`Eof`](TokenKind::Eof) token; nothing is classified after it.

use std::collections::VecDeque;

use scc_lexer_core::{Feed, LexicalError, ScanOutput};
use tracing::trace;

use crate::{Classifier, Token};

/// Default number of tokens classified per chunk.
pub const DEFAULT_TOKEN_CHUNK: usize = 256;

/// One-token lookahead over a [`Classifier`].
pub struct TokenBuffer<F> {
    classifier: Classifier<F>,
    queue: VecDeque<Token>,
    chunk: usize,
    /// The classifier has produced its `Eof` token.
    drained: bool,
    /// `get` has returned the `Eof` token.
    exhausted: bool,
    last: Option<Token>,
}

impl<F: Feed> TokenBuffer<F> {
    pub fn new(classifier: Classifier<F>) -> Self {
        Self::with_chunk(classifier, DEFAULT_TOKEN_CHUNK)
    }

    /// Buffer classifying `chunk` tokens at a time. A chunk of zero is treated
    /// as one.
    pub fn with_chunk(classifier: Classifier<F>, chunk: usize) -> Self {
        let chunk = chunk.max(1);
        TokenBuffer {
            classifier,
            queue: VecDeque::with_capacity(chunk),
            chunk,
            drained: false,
            exhausted: false,
            last: None,
        }
    }

    fn fill(&mut self) {
        if !self.queue.is_empty() || self.drained {
            return;
        }
        for _ in 0..self.chunk {
            let token = self.classifier.next_token();
            let eof = token.is_eof();
            self.queue.push_back(token);
            if eof {
                self.drained = true;
                break;
            }
        }
        trace!(tokens = self.queue.len(), drained = self.drained, "classified chunk");
    }

    /// The next token, without consuming it. `None` once the `Eof` token has
    /// been consumed.
    pub fn peek(&mut self) -> Option<&Token> {
        if self.exhausted {
            return None;
        }
        self.fill();
        self.queue.front()
    }

    /// Consume the next token. After the `Eof` token has been returned, every
    /// further call returns `None`.
    pub fn get(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }
        self.fill();
        let token = self.queue.pop_front()?;
        self.exhausted = token.is_eof();
        self.last = Some(token.clone());
        Some(token)
    }

    /// Does the next token start on a later line than the last consumed one?
    ///
    /// True before anything is consumed; false once nothing is left to peek.
    pub fn is_next_on_new_line(&mut self) -> bool {
        let Some(next) = self.peek().map(Token::line) else {
            return false;
        };
        match &self.last {
            Some(last) => next > last.line(),
            None => true,
        }
    }

    /// The most recently consumed token.
    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.last.as_ref()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Lexical errors recorded so far.
    pub fn errors(&self) -> &[LexicalError] {
        self.classifier.errors()
    }

    pub fn finish(self) -> ScanOutput {
        self.classifier.finish()
    }
}
