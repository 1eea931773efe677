//! IR token model.

use std::fmt;

use scc_lexer_core::Span;

use crate::{OpCode, TypeDef};

/// Scope selected by an identifier's sigil.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub enum Scope {
    /// No sigil.
    #[default]
    None,
    /// `%name`
    Local,
    /// `@name`
    Global,
}

/// Value of a numeric literal.
///
/// A lone `0` is valid as both an integer and a floating-point constant, so
/// both flags may be set at once.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Number {
    pub is_integer: bool,
    pub is_float: bool,
    pub integer: i64,
    pub float: f64,
}

impl Number {
    /// The literal `0`.
    pub const ZERO: Number = Number {
        is_integer: true,
        is_float: true,
        integer: 0,
        float: 0.0,
    };

    #[inline]
    pub const fn integer(value: i64) -> Self {
        Number {
            is_integer: true,
            is_float: false,
            integer: value,
            float: 0.0,
        }
    }

    #[inline]
    pub const fn float(value: f64) -> Self {
        Number {
            is_integer: false,
            is_float: true,
            integer: 0,
            float: value,
        }
    }
}

/// What a token is, with its payload.
#[derive(Clone, PartialEq, Debug)]
pub enum TokenKind {
    /// End of the stream. Produced once, then repeated on every further read.
    Eof,
    /// A lexeme that failed classification. A lexical error was recorded.
    Unknown,
    /// `;` to end of line.
    Comment,

    // === Keywords ===
    Program,
    TypeDef,
    Inputs,
    Outputs,
    Constants,
    Define,
    Call,
    Return,

    /// A first-class type name.
    Type(&'static TypeDef),
    /// An operation mnemonic.
    Operation(OpCode),
    Identifier {
        scope: Scope,
        name: String,
    },
    /// `name:`; the colon is not part of `name`.
    Label {
        name: String,
    },
    Number(Number),

    // === Punctuation ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Equals,
}

impl TokenKind {
    /// Payload-free tag for this kind.
    pub const fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Eof => TokenTag::Eof,
            TokenKind::Unknown => TokenTag::Unknown,
            TokenKind::Comment => TokenTag::Comment,
            TokenKind::Program => TokenTag::Program,
            TokenKind::TypeDef => TokenTag::TypeDef,
            TokenKind::Inputs => TokenTag::Inputs,
            TokenKind::Outputs => TokenTag::Outputs,
            TokenKind::Constants => TokenTag::Constants,
            TokenKind::Define => TokenTag::Define,
            TokenKind::Call => TokenTag::Call,
            TokenKind::Return => TokenTag::Return,
            TokenKind::Type(_) => TokenTag::Type,
            TokenKind::Operation(_) => TokenTag::Operation,
            TokenKind::Identifier { .. } => TokenTag::Identifier,
            TokenKind::Label { .. } => TokenTag::Label,
            TokenKind::Number(_) => TokenTag::Number,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RParen => TokenTag::RParen,
            TokenKind::LBrace => TokenTag::LBrace,
            TokenKind::RBrace => TokenTag::RBrace,
            TokenKind::LBracket => TokenTag::LBracket,
            TokenKind::RBracket => TokenTag::RBracket,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Equals => TokenTag::Equals,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Human-readable name for messages and token dumps.
    pub const fn display_name(&self) -> &'static str {
        self.tag().display_name()
    }
}

/// Fieldless mirror of [`TokenKind`], usable in `const` contexts and bitsets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenTag {
    Eof,
    Unknown,
    Comment,
    Program,
    TypeDef,
    Inputs,
    Outputs,
    Constants,
    Define,
    Call,
    Return,
    Type,
    Operation,
    Identifier,
    Label,
    Number,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Equals,
}

impl TokenTag {
    /// Number of tags.
    pub const COUNT: usize = TokenTag::Equals as usize + 1;

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            TokenTag::Eof => "end of file",
            TokenTag::Unknown => "unknown",
            TokenTag::Comment => "comment",
            TokenTag::Program => "`program`",
            TokenTag::TypeDef => "`type`",
            TokenTag::Inputs => "`inputs`",
            TokenTag::Outputs => "`outputs`",
            TokenTag::Constants => "`constants`",
            TokenTag::Define => "`def`",
            TokenTag::Call => "`call`",
            TokenTag::Return => "`ret`",
            TokenTag::Type => "type",
            TokenTag::Operation => "operation",
            TokenTag::Identifier => "identifier",
            TokenTag::Label => "label",
            TokenTag::Number => "number",
            TokenTag::LParen => "`(`",
            TokenTag::RParen => "`)`",
            TokenTag::LBrace => "`{`",
            TokenTag::RBrace => "`}`",
            TokenTag::LBracket => "`[`",
            TokenTag::RBracket => "`]`",
            TokenTag::Comma => "`,`",
            TokenTag::Equals => "`=`",
        }
    }
}

/// A classified token.
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// First to last character, inclusive.
    pub span: Span,
    /// Characters in the source text, sigils and label colons included.
    pub length: u64,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, length: u64) -> Self {
        Token { kind, span, length }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }

    /// Zero-based line the token starts on.
    #[inline]
    pub fn line(&self) -> u64 {
        self.span.start.line
    }
}

impl fmt::Display for Token {
    /// One-line dump: `line:col kind payload`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.span.start, self.kind.display_name())?;
        match &self.kind {
            TokenKind::Type(def) => write!(f, " {}", def.name),
            TokenKind::Operation(op) => write!(f, " {op}"),
            TokenKind::Identifier { scope, name } => match scope {
                Scope::None => write!(f, " {name}"),
                Scope::Local => write!(f, " %{name}"),
                Scope::Global => write!(f, " @{name}"),
            },
            TokenKind::Label { name } => write!(f, " {name}:"),
            TokenKind::Number(n) if n.is_integer => write!(f, " {}", n.integer),
            TokenKind::Number(n) => write!(f, " {}", n.float),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scc_lexer_core::Position;

    use super::*;

    fn at(line: u64, column: u64) -> Span {
        let p = Position {
            absolute: 0,
            line,
            character: column,
            column,
        };
        Span::point(p)
    }

    #[test]
    fn tags_are_dense() {
        assert_eq!(TokenTag::Eof.index(), 0);
        assert_eq!(TokenTag::COUNT, 24);
        assert_eq!(TokenKind::Equals.tag().index() as usize, TokenTag::COUNT - 1);
    }

    #[test]
    fn payload_kinds_share_a_tag() {
        let a = TokenKind::Identifier {
            scope: Scope::Local,
            name: "a".into(),
        };
        let b = TokenKind::Identifier {
            scope: Scope::Global,
            name: "b".into(),
        };
        assert_eq!(a.tag(), b.tag());
        assert_eq!(a.display_name(), "identifier");
    }

    #[test]
    fn zero_is_integer_and_float() {
        let zero = Number::ZERO;
        assert!(zero.is_integer && zero.is_float);
        assert!(!Number::integer(5).is_float);
        assert!(!Number::float(0.5).is_integer);
    }

    #[test]
    fn display_dumps_payload() {
        let ident = Token::new(
            TokenKind::Identifier {
                scope: Scope::Global,
                name: "main".into(),
            },
            at(2, 4),
            5,
        );
        assert_eq!(ident.to_string(), "3:5 identifier @main");

        let label = Token::new(TokenKind::Label { name: "loop".into() }, at(0, 0), 5);
        assert_eq!(label.to_string(), "1:1 label loop:");

        let number = Token::new(TokenKind::Number(Number::float(-3.5)), at(0, 0), 4);
        assert_eq!(number.to_string(), "1:1 number -3.5");

        let eof = Token::new(TokenKind::Eof, at(1, 0), 0);
        assert_eq!(eof.to_string(), "2:1 end of file");
    }
}
