//! Lexical error kinds raised while classifying a lexeme.
//!
//! Each kind renders to the message stored in the scanner's error list. Only
//! the rendered text is kept; the kind exists so the classification helpers
//! can report failures as values.

use std::fmt;

use thiserror::Error;

/// Which kind of numeric constant was being read.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConstantKind {
    Binary,
    Octal,
    Decimal,
    FloatingPoint,
    Hexadecimal,
}

impl fmt::Display for ConstantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstantKind::Binary => "binary",
            ConstantKind::Octal => "octal",
            ConstantKind::Decimal => "decimal",
            ConstantKind::FloatingPoint => "floating-point",
            ConstantKind::Hexadecimal => "hexadecimal",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexErrorKind {
    // === Identifiers ===
    #[error("Undecorated identifiers must start with a letter or underscore.")]
    UndecoratedStart,
    #[error("Identifiers must contain one or more characters.")]
    EmptyIdentifier,
    #[error("Only identifiers can be scoped.")]
    ScopedLabel,
    #[error("Identifiers can only be composed of alphanumerics and underscores.")]
    IdentifierCharacter,

    // === Labels ===
    #[error("Labels may only end with `:`.")]
    MisplacedColon,

    // === Numbers ===
    #[error("Do not understand `0{0}` prefix.")]
    NumberPrefix(char),
    #[error("Unexpected character `{found}` in {constant} constant.")]
    UnexpectedCharacter { found: char, constant: ConstantKind },
    #[error("Duplicate `.` in floating-point constant.")]
    DuplicatePoint,
    #[error("Binary constants must specify 8, 16, 32, or 64 bits.")]
    BinaryWidth,
    #[error("Constant `{0}` does not fit in 64 bits.")]
    Overflow(String),

    // === Fallback ===
    #[error("Tokens can be at most {limit} characters long, found {length}.")]
    TooLong { length: usize, limit: usize },
    #[error("Unknown token `{0}'!")]
    UnknownToken(String),
}
