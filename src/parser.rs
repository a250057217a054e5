use crate::literal::{DecimalLiteral, Sign};

/// An invalid numeric literal.
///
/// Returned when an input does not match the grammar
/// `[sign] digits ['.' digits] [('e'|'E'|'c'|'C') [sign] digits]`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid numeric literal: {kind}")]
pub struct ParseNumericLiteralError {
    kind: LiteralParseErrorKind,
}

#[derive(Debug, Clone, thiserror::Error)]
enum LiteralParseErrorKind {
    #[error("unexpected end of string")]
    UnexpectedEnd,
    #[error("unexpected character")]
    UnexpectedChar,
    #[error("exponent out of range")]
    ExponentOverflow,
}

const PARSE_UNEXPECTED_END: ParseNumericLiteralError = ParseNumericLiteralError {
    kind: LiteralParseErrorKind::UnexpectedEnd,
};
const PARSE_UNEXPECTED_CHAR: ParseNumericLiteralError = ParseNumericLiteralError {
    kind: LiteralParseErrorKind::UnexpectedChar,
};
const PARSE_EXPONENT_OVERFLOW: ParseNumericLiteralError = ParseNumericLiteralError {
    kind: LiteralParseErrorKind::ExponentOverflow,
};

/// Parses a numeric literal into its exact decomposed form.
///
/// Absent groups get explicit defaults (empty fraction, zero exponent) here,
/// never downstream: every field of the returned value is always populated.
pub(crate) fn parse_numeric_literal(
    input: &str,
) -> Result<DecimalLiteral, ParseNumericLiteralError> {
    let bytes = input.as_bytes();
    let mut cursor = 0;

    let sign = match bytes.first() {
        Some(b'+') => {
            cursor += 1;
            Sign::Positive
        }
        Some(b'-') => {
            cursor += 1;
            Sign::Negative
        }
        _ => Sign::None,
    };

    let integer_start = cursor;
    while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
        cursor += 1;
    }
    if cursor == integer_start {
        return Err(if cursor == bytes.len() {
            PARSE_UNEXPECTED_END
        } else {
            PARSE_UNEXPECTED_CHAR
        });
    }
    let integer = &input[integer_start..cursor];

    let mut fraction = "";
    if cursor < bytes.len() && bytes[cursor] == b'.' {
        cursor += 1;
        let fraction_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor == fraction_start {
            return Err(if cursor == bytes.len() {
                PARSE_UNEXPECTED_END
            } else {
                PARSE_UNEXPECTED_CHAR
            });
        }
        fraction = &input[fraction_start..cursor];
    }

    let mut exponent = 0_i64;
    if cursor < bytes.len() && matches!(bytes[cursor], b'e' | b'E' | b'c' | b'C') {
        cursor += 1;
        let negative = match bytes.get(cursor) {
            Some(b'+') => {
                cursor += 1;
                false
            }
            Some(b'-') => {
                cursor += 1;
                true
            }
            _ => false,
        };
        let exponent_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            exponent = exponent
                .checked_mul(10)
                .ok_or(PARSE_EXPONENT_OVERFLOW)?
                .checked_add(i64::from(bytes[cursor] - b'0'))
                .ok_or(PARSE_EXPONENT_OVERFLOW)?;
            cursor += 1;
        }
        if cursor == exponent_start {
            return Err(if cursor == bytes.len() {
                PARSE_UNEXPECTED_END
            } else {
                PARSE_UNEXPECTED_CHAR
            });
        }
        if negative {
            exponent = -exponent;
        }
    }

    if cursor != bytes.len() {
        return Err(PARSE_UNEXPECTED_CHAR);
    }

    Ok(DecimalLiteral::from_parts(sign, integer, fraction, exponent))
}
