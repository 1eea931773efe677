//! Identifier and label classification.
//!
//! ```text
//! @name    global identifier
//! %name    local identifier
//! name     identifier without scope
//! name:    label
//! ```
//!
//! Lexemes whose first character could begin a number (`+ - . 0-9`) are left
//! for number classification.

use crate::classifier::Attempt;
use crate::lex_error::LexErrorKind;
use crate::{Scope, TokenKind};

/// Characters a numeric literal may start with.
#[inline]
fn may_start_number(ch: u8) -> bool {
    matches!(ch, b'+' | b'-' | b'.') || ch.is_ascii_digit()
}

#[inline]
fn is_name_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

#[inline]
fn is_name_continue(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}

/// Classify `lexeme` as an identifier.
///
/// Declines lexemes that may be numbers, and unscoped lexemes containing a
/// `:` so they can be tried as labels.
pub(crate) fn identifier(lexeme: &str) -> Attempt {
    let bytes = lexeme.as_bytes();
    let Some(&first) = bytes.first() else {
        return Attempt::Declined;
    };
    let scope = match first {
        b'@' => Scope::Global,
        b'%' => Scope::Local,
        _ => Scope::None,
    };
    let scoped = scope != Scope::None;

    if scoped {
        if bytes.len() == 1 {
            return Attempt::Rejected(LexErrorKind::EmptyIdentifier);
        }
    } else if !is_name_start(first) {
        if may_start_number(first) {
            return Attempt::Declined;
        }
        return Attempt::Rejected(LexErrorKind::UndecoratedStart);
    }

    let name = if scoped { &lexeme[1..] } else { lexeme };
    for ch in name.bytes() {
        if is_name_continue(ch) {
            continue;
        }
        return match (ch, scoped) {
            (b':', false) => Attempt::Declined,
            (b':', true) => Attempt::Rejected(LexErrorKind::ScopedLabel),
            _ => Attempt::Rejected(LexErrorKind::IdentifierCharacter),
        };
    }

    Attempt::Matched(TokenKind::Identifier {
        scope,
        name: name.to_owned(),
    })
}

/// Classify `lexeme` as a label: a name followed by exactly one trailing `:`.
///
/// Only tried after [`identifier`] declined, so the lexeme either may be a
/// number or is a valid name up to its first `:`. Declines anything else.
pub(crate) fn label(lexeme: &str) -> Attempt {
    let starts_name = lexeme.as_bytes().first().is_some_and(|&ch| is_name_start(ch));
    if !starts_name || !lexeme.contains(':') {
        return Attempt::Declined;
    }
    let name = lexeme.strip_suffix(':').unwrap_or(lexeme);
    if name.contains(':') {
        return Attempt::Rejected(LexErrorKind::MisplacedColon);
    }
    if !name.bytes().all(is_name_continue) {
        return Attempt::Declined;
    }
    Attempt::Matched(TokenKind::Label {
        name: name.to_owned(),
    })
}

#[cfg(test)]
mod tests;
