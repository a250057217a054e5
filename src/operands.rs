use crate::literal::{DecimalLiteral, NumericValue};
use crate::parser::ParseNumericLiteralError;
use num_bigint::BigUint;
use std::str::FromStr;

/// The seven operands of the [CLDR plural rules](https://unicode.org/reports/tr35/tr35-numbers.html#Operands),
/// computed from a numeric literal kept exactly as written.
///
/// All operands except `n` are derived from the digit runs after the exponent
/// has been folded in, so `"1.2c6"` counts the fraction digits of `1200000.0`
/// and not of `1.2`. `n` alone is computed from the un-shifted literal with
/// its sign dropped and trailing fraction zeros removed, which preserves the
/// selection behavior plural-rule grammars were written against.
///
/// ```
/// use oxplurals::PluralOperands;
///
/// let operands = "1.50".parse::<PluralOperands>().unwrap();
/// assert_eq!(operands.n.to_string(), "1.5");
/// assert_eq!(operands.i, 1_u32.into());
/// assert_eq!(operands.f, 50_u32.into());
/// assert_eq!(operands.t, 5_u32.into());
/// assert_eq!(operands.v, 2);
/// assert_eq!(operands.w, 1);
/// assert_eq!(operands.e, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PluralOperands {
    /// Absolute value of the input (integer and decimals).
    pub n: NumericValue,
    /// Integer digits of the input.
    pub i: BigUint,
    /// Visible fraction digits, with trailing zeros.
    pub f: BigUint,
    /// Visible fraction digits, without trailing zeros.
    pub t: BigUint,
    /// Number of visible fraction digits, with trailing zeros.
    pub v: usize,
    /// Number of visible fraction digits, without trailing zeros.
    pub w: usize,
    /// Exponent of the input, as written.
    pub e: i64,
}

impl From<&DecimalLiteral> for PluralOperands {
    fn from(literal: &DecimalLiteral) -> Self {
        let shifted = literal.apply_exponent();
        let stripped = shifted.strip_trailing_zeros();
        Self {
            n: literal.abs().strip_trailing_zeros().to_value(),
            i: shifted.integer_value(),
            f: shifted.fraction_value(),
            t: stripped.fraction_value(),
            v: shifted.fraction_digits().len(),
            w: stripped.significant_fraction().len(),
            e: literal.exponent(),
        }
    }
}

impl FromStr for PluralOperands {
    type Err = ParseNumericLiteralError;

    #[inline]
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok((&DecimalLiteral::from_str(input)?).into())
    }
}

impl From<PluralOperands> for (NumericValue, BigUint, BigUint, BigUint, usize, usize, i64) {
    /// The operands in their conventional `(n, i, f, t, v, w, e)` order.
    #[inline]
    fn from(operands: PluralOperands) -> Self {
        (
            operands.n,
            operands.i,
            operands.f,
            operands.t,
            operands.v,
            operands.w,
            operands.e,
        )
    }
}
