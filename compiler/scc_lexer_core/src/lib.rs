//! Streaming character scanner for the shader cross compiler.
//!
//! This crate is the character-level half of the front end. It pulls raw
//! characters from a [`Feed`], keeps them in a double-buffered [`RingBuffer`],
//! and exposes them through a [`Scanner`] that tracks [`Position`]s and
//! supports bounded backtracking.
//!
//! ```text
//! Feed ──fetch──► RingBuffer ──► Scanner ──lexemes──► (token classifier)
//! ```
//!
//! The scanner knows nothing about any particular token grammar. A dialect
//! supplies its delimiter set at construction and classifies the lexemes
//! itself (see `scc_ir_lexer`).
//!
//! # Character Set
//!
//! Characters are single bytes; positions count bytes. Lexemes are decoded
//! as UTF-8 when they are collected. The value `0x00` is reserved as the
//! end-of-stream sentinel and never appears as content.

mod config;
mod feed;
mod position;
mod ring_buffer;
mod scanner;

pub use config::{ConfigError, ScannerConfig};
pub use feed::{Feed, ReaderFeed, SliceFeed};
pub use position::{Position, Span};
pub use ring_buffer::RingBuffer;
pub use scanner::{
    Bookmark, CharFlags, Delimiters, LexicalError, ScanError, ScanOutput, Scanner,
};

/// A single source character.
pub type Character = u8;

/// The end-of-stream sentinel written by a [`Feed`] once it is exhausted.
pub const EOF: Character = 0x00;

/// Returns `true` for the end-of-stream sentinel.
#[inline]
pub const fn is_eof(ch: Character) -> bool {
    ch == EOF
}

/// Returns `true` for space, tab, newline, and carriage return.
#[inline]
pub const fn is_whitespace(ch: Character) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}
