//! Source positions and spans.
//!
//! Positions are character based rather than byte based: the scanner never
//! sees the whole source, only a window of it, so every position is computed
//! incrementally as characters are consumed.

use std::fmt;

use crate::Character;

/// Location of a single character in the stream.
///
/// `character` counts characters within the line. `column` is the display
/// column: a tab advances it by the configured tab width while `character`
/// advances by exactly one. Carriage returns advance neither.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Position {
    /// Number of characters consumed before this one.
    pub absolute: u64,
    /// Zero-based line.
    pub line: u64,
    /// Zero-based index within the line.
    pub character: u64,
    /// Zero-based display column.
    pub column: u64,
}

impl Position {
    /// The first position in any stream.
    pub const START: Position = Position {
        absolute: 0,
        line: 0,
        character: 0,
        column: 0,
    };

    /// Position of the character following `ch`, given that `ch` sits at `self`.
    #[inline]
    #[must_use]
    pub fn following(self, ch: Character, tab_width: u64) -> Position {
        let absolute = self.absolute + 1;
        match ch {
            b'\n' => Position {
                absolute,
                line: self.line + 1,
                character: 0,
                column: 0,
            },
            b'\r' => Position { absolute, ..self },
            b'\t' => Position {
                absolute,
                line: self.line,
                character: self.character + 1,
                column: self.column + tab_width,
            },
            _ => Position {
                absolute,
                line: self.line,
                character: self.character + 1,
                column: self.column + 1,
            },
        }
    }
}

impl fmt::Display for Position {
    /// Renders as one-based `line:column`, the form editors expect.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Inclusive range of positions, from the first to the last character.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Span covering a single character.
    #[inline]
    pub const fn point(at: Position) -> Self {
        Span { start: at, end: at }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
