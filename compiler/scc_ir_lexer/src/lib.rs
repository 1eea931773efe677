//! Token layer for the shader cross compiler's IR text format.
//!
//! Builds on [`scc_lexer_core`]: a [`Classifier`] turns the scanner's
//! characters into [`Token`]s, and a [`TokenBuffer`] gives the parser cheap
//! one-token lookahead on top of it.
//!
//! ```text
//! Scanner ──lexeme──► Classifier ──Token──► TokenBuffer ──► parser
//! ```
//!
//! # Token Surface
//!
//! - keywords: `program type inputs outputs constants def call ret`
//! - type names: see [`types`]
//! - operation mnemonics: supplied through an [`OperationTable`]
//! - identifiers `name`, `%local`, `@global`; labels `name:`
//! - numbers: decimal, `0x` hexadecimal, `0b` binary, leading-zero octal
//! - punctuation `( ) { } [ ] , =`; comments from `;` to end of line

mod classifier;
mod ident;
mod keywords;
mod lex_error;
mod number;
mod operations;
mod token;
mod token_buffer;
pub mod types;

pub use classifier::{Classifier, ClassifierOptions, DELIMITERS};
pub use keywords::LEGACY_OUTPUTS;
pub use lex_error::{ConstantKind, LexErrorKind};
pub use operations::{OpCode, OperationTable};
pub use token::{Number, Scope, Token, TokenKind, TokenTag};
pub use token_buffer::{TokenBuffer, DEFAULT_TOKEN_CHUNK};
pub use types::{Scalar, TypeDef};

use scc_lexer_core::{ConfigError, Feed, LexicalError, ScannerConfig};

/// Every token of a stream, `Eof` included, plus the lexical errors.
#[derive(Clone, Debug)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexicalError>,
}

/// Classify a whole stream.
pub fn tokenize<F: Feed>(
    feed: F,
    config: &ScannerConfig,
    options: ClassifierOptions,
) -> Result<Tokenized, ConfigError> {
    let mut classifier = Classifier::new(feed, config, options)?;
    let mut tokens = Vec::new();
    loop {
        let token = classifier.next_token();
        let eof = token.is_eof();
        tokens.push(token);
        if eof {
            break;
        }
    }
    Ok(Tokenized {
        tokens,
        errors: classifier.finish().errors,
    })
}
