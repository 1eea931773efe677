use pretty_assertions::assert_eq;

use super::*;

fn ident(scope: Scope, name: &str) -> Attempt {
    Attempt::Matched(TokenKind::Identifier {
        scope,
        name: name.to_owned(),
    })
}

// === Identifiers ===

#[test]
fn sigils_select_scope() {
    assert_eq!(identifier("@foo"), ident(Scope::Global, "foo"));
    assert_eq!(identifier("%bar"), ident(Scope::Local, "bar"));
    assert_eq!(identifier("baz"), ident(Scope::None, "baz"));
}

#[test]
fn names_may_hold_digits_and_underscores() {
    assert_eq!(identifier("_tmp0"), ident(Scope::None, "_tmp0"));
    assert_eq!(identifier("%0"), ident(Scope::Local, "0"));
    assert_eq!(identifier("@__A_9"), ident(Scope::Global, "__A_9"));
}

#[test]
fn bare_sigil_is_empty() {
    assert_eq!(
        identifier("@"),
        Attempt::Rejected(LexErrorKind::EmptyIdentifier)
    );
    assert_eq!(
        identifier("%"),
        Attempt::Rejected(LexErrorKind::EmptyIdentifier)
    );
}

#[test]
fn number_like_lexemes_are_declined() {
    for lexeme in ["1", "-2", "+x", ".5", "0x1F"] {
        assert_eq!(identifier(lexeme), Attempt::Declined, "{lexeme:?}");
    }
}

#[test]
fn bad_start_is_rejected() {
    assert_eq!(
        identifier("$x"),
        Attempt::Rejected(LexErrorKind::UndecoratedStart)
    );
    assert_eq!(
        identifier("#"),
        Attempt::Rejected(LexErrorKind::UndecoratedStart)
    );
}

#[test]
fn bad_character_is_rejected() {
    assert_eq!(
        identifier("a-b"),
        Attempt::Rejected(LexErrorKind::IdentifierCharacter)
    );
    assert_eq!(
        identifier("@a.b"),
        Attempt::Rejected(LexErrorKind::IdentifierCharacter)
    );
}

#[test]
fn colon_routes_unscoped_to_labels() {
    assert_eq!(identifier("loop:"), Attempt::Declined);
    assert_eq!(
        identifier("%loop:"),
        Attempt::Rejected(LexErrorKind::ScopedLabel)
    );
}

// === Labels ===

#[test]
fn trailing_colon_makes_a_label() {
    assert_eq!(
        label("loop:"),
        Attempt::Matched(TokenKind::Label {
            name: "loop".to_owned()
        })
    );
}

#[test]
fn inner_colon_is_rejected() {
    assert_eq!(
        label("a:b:"),
        Attempt::Rejected(LexErrorKind::MisplacedColon)
    );
    assert_eq!(label("a::"), Attempt::Rejected(LexErrorKind::MisplacedColon));
}

#[test]
fn colon_must_be_last() {
    assert_eq!(label("a:b"), Attempt::Rejected(LexErrorKind::MisplacedColon));
}

#[test]
fn colonless_and_numeric_lexemes_are_declined() {
    assert_eq!(label("abc"), Attempt::Declined);
    assert_eq!(label("1:"), Attempt::Declined);
}

#[test]
fn non_name_lexemes_are_declined() {
    assert_eq!(label("$x:"), Attempt::Declined);
    assert_eq!(label("a-b:"), Attempt::Declined);
    assert_eq!(label("@a:"), Attempt::Declined);
}

#[test]
fn identifier_decline_leaves_label_outcomes() {
    for lexeme in ["loop:", "a:b", "a::", "_x:y:"] {
        assert_eq!(identifier(lexeme), Attempt::Declined, "{lexeme:?}");
        assert!(
            !matches!(label(lexeme), Attempt::Declined),
            "{lexeme:?} fell through labels"
        );
    }
}
