//! Scanner configuration.

use thiserror::Error;

/// Default buffer capacity in characters.
pub const DEFAULT_CAPACITY: usize = 8192;

/// Default display width of a tab.
pub const DEFAULT_TAB_WIDTH: u64 = 2;

/// Default upper bound on a single lexeme.
pub const DEFAULT_MAX_LEXEME_LEN: usize = 256;

/// Caller-supplied scanner parameters. Fixed for the life of a scanner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScannerConfig {
    /// Characters buffered internally. Must be even and non-zero: the
    /// buffer is split in two so that one half can hold backtrackable
    /// history while the other is refilled.
    pub capacity: usize,
    /// Display columns a tab advances.
    pub tab_width: u64,
    /// Longest lexeme `get_up_to_delimiter` will return.
    pub max_lexeme_len: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            capacity: DEFAULT_CAPACITY,
            tab_width: DEFAULT_TAB_WIDTH,
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
        }
    }
}

impl ScannerConfig {
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_tab_width(mut self, tab_width: u64) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn with_max_lexeme_len(mut self, max_lexeme_len: usize) -> Self {
        self.max_lexeme_len = max_lexeme_len;
        self
    }

    /// Furthest the scanner may rewind.
    #[inline]
    pub fn max_backtrack(&self) -> usize {
        self.capacity / 2
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.capacity % 2 != 0 {
            return Err(ConfigError::OddCapacity(self.capacity));
        }
        if self.tab_width == 0 {
            return Err(ConfigError::ZeroTabWidth);
        }
        if self.max_lexeme_len == 0 {
            return Err(ConfigError::ZeroLexemeLimit);
        }
        Ok(())
    }
}

/// Rejected scanner configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("buffer capacity must be non-zero")]
    ZeroCapacity,
    #[error("buffer capacity must be even, got {0}")]
    OddCapacity(usize),
    #[error("tab width must be at least one column")]
    ZeroTabWidth,
    #[error("lexeme limit must be at least one character")]
    ZeroLexemeLimit,
}
