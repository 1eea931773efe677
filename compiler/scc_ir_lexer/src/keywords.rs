//! Keyword resolution.
//!
//! Keywords are 3 to 9 characters long; the length is used as a first-pass
//! filter before comparing text.

use crate::TokenKind;

/// Historical misspelling of `outputs`, still found in older IR files.
pub const LEGACY_OUTPUTS: &str = "ouputs";

/// Look up a keyword by text.
///
/// `legacy` additionally accepts [`LEGACY_OUTPUTS`] as `outputs`.
#[inline]
pub fn lookup(text: &str, legacy: bool) -> Option<TokenKind> {
    if !(3..=9).contains(&text.len()) {
        return None;
    }
    match text {
        "def" => Some(TokenKind::Define),
        "ret" => Some(TokenKind::Return),
        "call" => Some(TokenKind::Call),
        "type" => Some(TokenKind::TypeDef),
        "inputs" => Some(TokenKind::Inputs),
        "ouputs" if legacy => Some(TokenKind::Outputs),
        "outputs" => Some(TokenKind::Outputs),
        "program" => Some(TokenKind::Program),
        "constants" => Some(TokenKind::Constants),
        _ => None,
    }
}
