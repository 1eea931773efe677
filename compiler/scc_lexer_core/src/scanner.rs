//! Character-level streaming scanner.
//!
//! The scanner pulls characters from a [`Feed`] through a [`RingBuffer`] and
//! tracks the [`Position`] of the current character. Speculative lookahead is
//! done with [`bookmark`](Scanner::bookmark), [`rewind`](Scanner::rewind) and
//! [`commit`](Scanner::commit); the distance that can be rewound is bounded by
//! half the buffer capacity.
//!
//! # Current Character
//!
//! The scanner always sits *on* a character: the one most recently returned by
//! [`get_next_character`](Scanner::get_next_character). Before the first call
//! it sits on nothing, which reads as [`EOF`] with no flags set. Once the
//! sentinel has been consumed every further read returns [`EOF`].
//!
//! # Diagnostics
//!
//! Lexical problems are recorded with [`error`](Scanner::error) and never stop
//! scanning. API misuse (over-long rewinds, committing with a rewind pending,
//! over-long lexemes) is reported as a [`ScanError`].

use std::fmt;

use thiserror::Error;
use tracing::{trace, warn};

use crate::{
    is_eof, is_whitespace, Character, ConfigError, Feed, Position, RingBuffer, ScannerConfig,
    Span, EOF,
};

/// Set of characters that end a lexeme in addition to whitespace.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Delimiters([bool; 256]);

impl Delimiters {
    /// No delimiters: only whitespace and end of stream end a lexeme.
    pub const NONE: Delimiters = Delimiters([false; 256]);

    pub const fn new(chars: &[Character]) -> Self {
        let mut table = [false; 256];
        let mut i = 0;
        while i < chars.len() {
            table[chars[i] as usize] = true;
            i += 1;
        }
        Delimiters(table)
    }

    #[inline]
    pub const fn contains(&self, ch: Character) -> bool {
        self.0[ch as usize]
    }
}

impl fmt::Debug for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(
                (0..=u8::MAX)
                    .filter(|&ch| self.contains(ch))
                    .map(char::from),
            )
            .finish()
    }
}

/// Classification of the current character.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct CharFlags(u8);

impl CharFlags {
    /// Space, tab, newline, or carriage return.
    pub const WHITESPACE: u8 = 1 << 0;
    /// Member of the scanner's delimiter set, or the end-of-stream sentinel.
    pub const DELIMITER: u8 = 1 << 1;
    /// The end-of-stream sentinel has been consumed.
    pub const EOF: u8 = 1 << 2;

    pub const EMPTY: Self = CharFlags(0);

    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    fn classify(ch: Character, delimiters: &Delimiters) -> Self {
        if is_eof(ch) {
            return CharFlags(Self::DELIMITER | Self::EOF);
        }
        let mut bits = 0;
        if is_whitespace(ch) {
            bits |= Self::WHITESPACE;
        }
        if delimiters.contains(ch) {
            bits |= Self::DELIMITER;
        }
        CharFlags(bits)
    }
}

/// A recorded lexical problem. Scanning continues past it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexicalError {
    pub span: Span,
    pub message: String,
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SYNTAX ERROR: {}", self.message)
    }
}

/// Misuse of the scanner's lookahead or lexeme APIs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("cannot rewind {requested} characters, at most {limit} are retained")]
    BacktrackOverflow { requested: u64, limit: u64 },
    #[error("cannot commit with {0} rewound characters still unread")]
    PendingBacktrack(u64),
    #[error("lexeme of {length} characters exceeds the limit of {limit}")]
    LexemeTooLong { length: usize, limit: usize },
}

/// Snapshot of the scanner taken by [`Scanner::bookmark`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Bookmark {
    pub position: Position,
    next: Position,
    character: Character,
    flags: CharFlags,
    /// Characters consumed when the snapshot was taken.
    consumed: u64,
}

/// Everything a scanner hands back once it is done.
#[derive(Debug)]
pub struct ScanOutput {
    pub errors: Vec<LexicalError>,
    /// Caller-supplied buffer storage, if any.
    pub storage: Option<Vec<Character>>,
}

/// Streaming scanner over a [`Feed`].
pub struct Scanner<F> {
    feed: F,
    ring: RingBuffer,
    tab_width: u64,
    max_backtrack: u64,
    delimiters: Delimiters,
    character: Character,
    flags: CharFlags,
    /// Position of the current character.
    position: Position,
    /// Position the next character will take.
    next: Position,
    /// Rewound characters still to be re-read from history.
    backtrack: u64,
    bookmark: Bookmark,
    errors: Vec<LexicalError>,
}

impl<F: Feed> Scanner<F> {
    pub fn new(feed: F, config: &ScannerConfig, delimiters: Delimiters) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(
            feed,
            RingBuffer::new(config.capacity),
            config,
            delimiters,
        ))
    }

    /// Scanner buffering into caller-supplied storage. The storage length
    /// takes the place of `config.capacity`; [`finish`](Self::finish) hands
    /// the storage back.
    pub fn with_storage(
        feed: F,
        storage: Vec<Character>,
        config: &ScannerConfig,
        delimiters: Delimiters,
    ) -> Result<Self, ConfigError> {
        let config = config.clone().with_capacity(storage.len());
        config.validate()?;
        Ok(Self::build(
            feed,
            RingBuffer::with_storage(storage),
            &config,
            delimiters,
        ))
    }

    fn build(feed: F, ring: RingBuffer, config: &ScannerConfig, delimiters: Delimiters) -> Self {
        let start = Bookmark {
            position: Position::START,
            next: Position::START,
            character: EOF,
            flags: CharFlags::EMPTY,
            consumed: 0,
        };
        Scanner {
            feed,
            ring,
            tab_width: config.tab_width,
            max_backtrack: config.max_backtrack() as u64,
            delimiters,
            character: EOF,
            flags: CharFlags::EMPTY,
            position: Position::START,
            next: Position::START,
            backtrack: 0,
            bookmark: start,
            errors: Vec::new(),
        }
    }

    // === Accessors ===

    /// The current character.
    #[inline]
    pub fn character(&self) -> Character {
        self.character
    }

    /// Position of the current character.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Position the next character will take.
    #[inline]
    pub fn next_position(&self) -> Position {
        self.next
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.flags.contains(CharFlags::WHITESPACE)
    }

    #[inline]
    pub fn is_delimiter(&self) -> bool {
        self.flags.contains(CharFlags::DELIMITER)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.flags.contains(CharFlags::EOF)
    }

    #[inline]
    pub fn flags(&self) -> CharFlags {
        self.flags
    }

    /// Rewound characters not yet re-read.
    #[inline]
    pub fn backtrack(&self) -> u64 {
        self.backtrack
    }

    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Characters consumed so far, not counting rewound ones.
    #[inline]
    fn consumed(&self) -> u64 {
        self.ring.head() - self.backtrack
    }

    // === Reading ===

    fn refill(&mut self) {
        let fetched = self.ring.refill(&mut self.feed);
        if fetched == 0 {
            warn!(
                at = self.ring.fill(),
                "feed produced no characters; ending stream"
            );
            self.ring.push(EOF);
        } else {
            trace!(fetched, at = self.ring.fill(), "fetched chunk");
        }
    }

    /// The character after the current one, without consuming it.
    pub fn peek_next_character(&mut self) -> Character {
        if self.is_eof() {
            return EOF;
        }
        if self.backtrack > 0 {
            return self.history(self.backtrack);
        }
        if self.ring.is_drained() {
            self.refill();
        }
        self.history(0)
    }

    /// Consume one character and make it current.
    pub fn get_next_character(&mut self) -> Character {
        if self.is_eof() {
            return EOF;
        }
        let ch = if self.backtrack > 0 {
            let ch = self.history(self.backtrack);
            self.backtrack -= 1;
            ch
        } else {
            if self.ring.is_drained() {
                self.refill();
            }
            let ch = self.history(0);
            self.ring.advance();
            ch
        };

        self.character = ch;
        self.flags = CharFlags::classify(ch, &self.delimiters);
        self.position = self.next;
        self.next = self.position.following(ch, self.tab_width);
        ch
    }

    /// Consume one character, discarding it.
    #[inline]
    pub fn swallow_next_character(&mut self) {
        self.get_next_character();
    }

    fn history(&self, behind: u64) -> Character {
        let ch = self.ring.at(behind);
        debug_assert!(ch.is_some(), "read {behind} behind head outside the ring");
        ch.unwrap_or(EOF)
    }

    // === Lookahead ===

    /// Remember the current state as the point [`rewind`](Self::rewind)
    /// returns to.
    pub fn bookmark(&mut self) {
        self.bookmark = Bookmark {
            position: self.position,
            next: self.next,
            character: self.character,
            flags: self.flags,
            consumed: self.consumed(),
        };
    }

    /// The bookmark [`rewind`](Self::rewind) would return to.
    #[inline]
    pub fn current_bookmark(&self) -> &Bookmark {
        &self.bookmark
    }

    /// Return to the bookmark. Characters consumed since then will be read
    /// again. Fails without changing anything if more than half the buffer
    /// capacity would need re-reading.
    pub fn rewind(&mut self) -> Result<(), ScanError> {
        let requested = self.backtrack + (self.consumed() - self.bookmark.consumed);
        if requested > self.max_backtrack {
            return Err(ScanError::BacktrackOverflow {
                requested,
                limit: self.max_backtrack,
            });
        }
        self.backtrack = requested;
        self.character = self.bookmark.character;
        self.flags = self.bookmark.flags;
        self.position = self.bookmark.position;
        self.next = self.bookmark.next;
        trace!(backtrack = self.backtrack, at = %self.position, "rewind");
        Ok(())
    }

    /// Move the bookmark to the current state. Only legal once every rewound
    /// character has been re-read.
    pub fn commit(&mut self) -> Result<(), ScanError> {
        if self.backtrack > 0 {
            return Err(ScanError::PendingBacktrack(self.backtrack));
        }
        self.bookmark();
        Ok(())
    }

    // === Skipping ===

    /// Consume characters while the current one is whitespace. Returns the
    /// first non-whitespace character.
    pub fn skip_any_whitespace(&mut self) -> Character {
        while self.is_whitespace() {
            self.get_next_character();
        }
        self.character
    }

    /// Consume characters up to and including the next `'\n'`, or up to the
    /// end of the stream. Returns the character that stopped the loop.
    pub fn skip_to_next_line(&mut self) -> Character {
        loop {
            let ch = self.get_next_character();
            if ch == b'\n' || self.is_eof() {
                return ch;
            }
        }
    }

    /// Collect the current character and every following one up to, but not
    /// including, the next whitespace, delimiter, or end of stream.
    ///
    /// The collected bytes are decoded as UTF-8, invalid sequences replaced.
    /// A lexeme longer than `limit` is still consumed in full so scanning
    /// resumes after it, but is reported as [`ScanError::LexemeTooLong`].
    pub fn get_up_to_delimiter(&mut self, limit: usize) -> Result<String, ScanError> {
        let mut lexeme = Vec::with_capacity(limit.min(64));
        let mut length = 1;
        lexeme.push(self.character);
        loop {
            let ch = self.peek_next_character();
            if is_eof(ch) || is_whitespace(ch) || self.delimiters.contains(ch) {
                break;
            }
            if lexeme.len() < limit {
                lexeme.push(ch);
            }
            length += 1;
            self.swallow_next_character();
        }
        if length > limit {
            return Err(ScanError::LexemeTooLong { length, limit });
        }
        Ok(String::from_utf8_lossy(&lexeme).into_owned())
    }

    // === Diagnostics ===

    /// Record a lexical error. Scanning carries on.
    pub fn error(&mut self, message: impl Into<String>, span: Span) {
        let message = message.into();
        trace!(%span, %message, "lexical error");
        self.errors.push(LexicalError { span, message });
    }

    /// Tear the scanner down, returning its diagnostics and any
    /// caller-supplied storage.
    pub fn finish(self) -> ScanOutput {
        ScanOutput {
            errors: self.errors,
            storage: self.ring.into_storage(),
        }
    }
}
