//! Panic-mode error recovery.
//!
//! After a grammar error the parser can skip ahead to a token that starts a
//! statement, so one mistake yields one message instead of a cascade.

use scc_ir_lexer::{TokenBuffer, TokenKind, TokenTag};
use scc_lexer_core::Feed;
use tracing::trace;

/// A set of token tags, one bit per [`TokenTag`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenSet(u32);

const _: () = assert!(TokenTag::COUNT <= u32::BITS as usize);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        Self(self.0 | (1u32 << tag.index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains_tag(&self, tag: TokenTag) -> bool {
        (self.0 & (1u32 << tag.index())) != 0
    }

    /// Payload is ignored; only the kind's tag is tested.
    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        self.contains_tag(kind.tag())
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Tokens that can begin a top-level statement.
pub const STATEMENT_START: TokenSet = TokenSet::new()
    .with(TokenTag::Program)
    .with(TokenTag::TypeDef)
    .with(TokenTag::Inputs)
    .with(TokenTag::Outputs)
    .with(TokenTag::Constants)
    .with(TokenTag::Define);

/// Discard tokens until the next one is in `recovery` or is `Eof`.
///
/// Returns `true` if a recovery token was found, `false` at the end of the
/// stream. The stopping token is left unconsumed.
pub fn synchronize<F: Feed>(tokens: &mut TokenBuffer<F>, recovery: TokenSet) -> bool {
    let mut skipped = 0usize;
    let found = loop {
        match tokens.peek() {
            None => break false,
            Some(next) if next.is_eof() => break false,
            Some(next) if recovery.contains(&next.kind) => break true,
            Some(_) => {}
        }
        tokens.get();
        skipped += 1;
    };
    trace!(skipped, found, "synchronized");
    found
}
