//! Parser configuration.

use scc_ir_lexer::{ClassifierOptions, DEFAULT_TOKEN_CHUNK};
use scc_lexer_core::ScannerConfig;

/// What the parser does after reporting a grammar error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub enum Recovery {
    /// Carry on with the very next token. One structural error can cascade
    /// into a run of `Unexpected token.` messages.
    None,
    /// Skip to the next token that can start a statement, or to the end.
    #[default]
    PanicMode,
}

/// Everything a parse session is configured with.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    pub scanner: ScannerConfig,
    pub classifier: ClassifierOptions,
    /// Tokens classified per lookahead chunk.
    pub token_chunk: usize,
    pub recovery: Recovery,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            scanner: ScannerConfig::default(),
            classifier: ClassifierOptions::default(),
            token_chunk: DEFAULT_TOKEN_CHUNK,
            recovery: Recovery::default(),
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_scanner(mut self, scanner: ScannerConfig) -> Self {
        self.scanner = scanner;
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: ClassifierOptions) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub fn with_token_chunk(mut self, token_chunk: usize) -> Self {
        self.token_chunk = token_chunk;
        self
    }

    #[must_use]
    pub fn with_recovery(mut self, recovery: Recovery) -> Self {
        self.recovery = recovery;
        self
    }
}
