//! Numeric literal classification.
//!
//! # Grammar
//!
//! ```text
//! number   = [sign] decimal | "0" | "0b" bin+ | "0x" hex+ | "0" oct+ | decimal
//! sign     = "+" | "-"
//! decimal  = (digit | ".")+          at most one "."
//! ```
//!
//! A `'` anywhere in the digits is a readability separator and is dropped.
//! A sign always selects decimal; prefixes are only recognized unsigned.
//!
//! Binary literals must spell out exactly 8, 16, 32 or 64 bits. Binary, octal
//! and hexadecimal literals are read as unsigned 64-bit values and stored
//! bit-for-bit in the signed integer. Decimal literals are signed; a `.`
//! makes them floating-point.

use crate::classifier::Attempt;
use crate::lex_error::{ConstantKind, LexErrorKind};
use crate::{Number, TokenKind};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

/// Classify `lexeme` as a numeric literal.
///
/// Declines lexemes that hold no digits at all, such as a lone sign or `.`.
pub(crate) fn number(lexeme: &str) -> Attempt {
    let (negative, skip, radix) = match lexeme.as_bytes() {
        [b'+', ..] => (false, 1, Radix::Decimal),
        [b'-', ..] => (true, 1, Radix::Decimal),
        [b'0'] => return Attempt::Matched(TokenKind::Number(Number::ZERO)),
        [b'0', b'.', ..] => (false, 0, Radix::Decimal),
        [b'0', b'b', ..] => (false, 2, Radix::Binary),
        [b'0', b'x', ..] => (false, 2, Radix::Hexadecimal),
        [b'0', d, ..] if d.is_ascii_digit() => (false, 1, Radix::Octal),
        [b'0', ..] => {
            let prefix = lexeme.chars().nth(1).unwrap_or_default();
            return Attempt::Rejected(LexErrorKind::NumberPrefix(prefix));
        }
        _ => (false, 0, Radix::Decimal),
    };
    // Every prefix is ASCII, so `skip` lands on a character boundary.
    let digits = &lexeme[skip..];

    let (digits, fractional) = match collect_digits(digits, radix) {
        Ok(collected) => collected,
        Err(err) => return Attempt::Rejected(err),
    };

    let overflow = || Attempt::Rejected(LexErrorKind::Overflow(lexeme.to_owned()));
    let value = match radix {
        Radix::Binary => {
            if !matches!(digits.len(), 8 | 16 | 32 | 64) {
                return Attempt::Rejected(LexErrorKind::BinaryWidth);
            }
            Number::integer(assemble_bits(&digits))
        }
        _ if !digits.bytes().any(|b| b.is_ascii_hexdigit()) => {
            return Attempt::Declined;
        }
        Radix::Octal | Radix::Hexadecimal => {
            let base = if radix == Radix::Octal { 8 } else { 16 };
            match u64::from_str_radix(&digits, base) {
                Ok(value) => Number::integer(reinterpret(value)),
                Err(_) => return overflow(),
            }
        }
        Radix::Decimal if fractional => match digits.parse::<f64>() {
            Ok(value) => Number::float(if negative { -value } else { value }),
            Err(_) => return Attempt::Declined,
        },
        Radix::Decimal => {
            let signed = if negative {
                format!("-{digits}")
            } else {
                digits
            };
            match signed.parse::<i64>() {
                Ok(value) => Number::integer(value),
                Err(_) => return overflow(),
            }
        }
    };
    Attempt::Matched(TokenKind::Number(value))
}

/// Validate the digit run for `radix`, dropping separators. Also reports
/// whether a `.` was seen.
fn collect_digits(run: &str, radix: Radix) -> Result<(String, bool), LexErrorKind> {
    let mut digits = String::with_capacity(run.len());
    let mut fractional = false;
    for ch in run.chars() {
        if ch == '\'' {
            continue;
        }
        let valid = match radix {
            Radix::Binary => matches!(ch, '0' | '1'),
            Radix::Octal => matches!(ch, '0'..='7'),
            Radix::Hexadecimal => ch.is_ascii_hexdigit(),
            Radix::Decimal if ch == '.' => {
                if fractional {
                    return Err(LexErrorKind::DuplicatePoint);
                }
                fractional = true;
                true
            }
            Radix::Decimal => ch.is_ascii_digit(),
        };
        if !valid {
            let constant = match radix {
                Radix::Binary => ConstantKind::Binary,
                Radix::Octal => ConstantKind::Octal,
                Radix::Hexadecimal => ConstantKind::Hexadecimal,
                Radix::Decimal if fractional => ConstantKind::FloatingPoint,
                Radix::Decimal => ConstantKind::Decimal,
            };
            return Err(LexErrorKind::UnexpectedCharacter {
                found: ch,
                constant,
            });
        }
        digits.push(ch);
    }
    Ok((digits, fractional))
}

/// Most-significant digit first.
fn assemble_bits(digits: &str) -> i64 {
    let value = digits
        .bytes()
        .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit - b'0'));
    reinterpret(value)
}

#[allow(
    clippy::cast_possible_wrap,
    reason = "unsigned literals are stored bit-for-bit in the signed field"
)]
#[inline]
fn reinterpret(value: u64) -> i64 {
    value as i64
}
