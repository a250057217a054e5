use crate::parser::{ParseNumericLiteralError, parse_numeric_literal};
use num_bigint::{BigInt, BigUint};
use num_traits::{Pow, ToPrimitive};
use std::fmt;
use std::str::FromStr;

/// Sign of a numeric literal, as written.
///
/// [`Sign::None`] means the literal carried no sign character and is
/// non-negative.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum Sign {
    #[default]
    None,
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Positive => "+",
            Self::Negative => "-",
        }
    }
}

impl fmt::Display for Sign {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decimal number kept exactly as it was written.
///
/// The sign, integer digit run, fraction digit run and exponent are stored
/// separately, so `1.0` and `1.00` stay distinct and no trailing zero is ever
/// lost to a binary floating point round-trip. The exponent is independent
/// storage until [`apply_exponent`](Self::apply_exponent) folds it into the
/// digits.
///
/// Every transformation returns a new value; an existing literal is never
/// mutated.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DecimalLiteral {
    sign: Sign,
    integer: String,
    fraction: String,
    exponent: i64,
}

impl DecimalLiteral {
    pub(crate) fn from_parts(sign: Sign, integer: &str, fraction: &str, exponent: i64) -> Self {
        Self {
            sign,
            integer: integer.to_owned(),
            fraction: fraction.to_owned(),
            exponent,
        }
    }

    #[inline]
    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// The integer digit run, with any leading zeros the literal carried.
    #[inline]
    #[must_use]
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// The fraction digit run, with any trailing zeros the literal carried.
    ///
    /// Empty when the literal had no decimal point.
    #[inline]
    #[must_use]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    #[inline]
    #[must_use]
    pub const fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Folds the exponent into the digit runs.
    ///
    /// Returns a value with the same magnitude and a zero exponent: a
    /// positive exponent moves the decimal point rightward through the
    /// fraction digits (padding with zeros past their end), a negative one
    /// moves it leftward through the integer digits.
    #[must_use]
    pub fn apply_exponent(&self) -> Self {
        let (integer, fraction) = if self.exponent > 0 {
            self.shift_right(usize::try_from(self.exponent).unwrap_or(usize::MAX))
        } else if self.exponent < 0 {
            self.shift_left(usize::try_from(self.exponent.unsigned_abs()).unwrap_or(usize::MAX))
        } else {
            (self.integer.clone(), self.fraction.clone())
        };
        Self {
            sign: self.sign,
            integer,
            fraction,
            exponent: 0,
        }
    }

    fn shift_right(&self, n: usize) -> (String, String) {
        let moved = n.min(self.fraction.len());
        let mut integer = String::with_capacity(self.integer.len() + n);
        integer.push_str(&self.integer);
        integer.push_str(&self.fraction[..moved]);
        for _ in moved..n {
            integer.push('0');
        }
        let rest = &self.fraction[moved..];
        let fraction = if rest.is_empty() && !self.fraction.is_empty() {
            "0".to_owned()
        } else {
            rest.to_owned()
        };
        (integer, fraction)
    }

    fn shift_left(&self, n: usize) -> (String, String) {
        let moved = n.min(self.integer.len());
        let split = self.integer.len() - moved;
        let mut fraction = String::with_capacity(n + self.fraction.len());
        for _ in moved..n {
            fraction.push('0');
        }
        fraction.push_str(&self.integer[split..]);
        fraction.push_str(&self.fraction);
        let integer = if split == 0 {
            "0".to_owned()
        } else {
            self.integer[..split].to_owned()
        };
        (integer, fraction)
    }

    /// Drops the sign, keeping digits and exponent.
    #[inline]
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::None,
            integer: self.integer.clone(),
            fraction: self.fraction.clone(),
            exponent: self.exponent,
        }
    }

    /// Removes trailing zeros from the fraction digit run.
    #[inline]
    #[must_use]
    pub fn strip_trailing_zeros(&self) -> Self {
        Self {
            sign: self.sign,
            integer: self.integer.clone(),
            fraction: self.fraction.trim_end_matches('0').to_owned(),
            exponent: self.exponent,
        }
    }

    /// The fraction digit run with leading zeros removed, i.e. the digits
    /// that matter when the fraction is read as a plain integer.
    #[inline]
    #[must_use]
    pub fn significant_fraction(&self) -> &str {
        self.fraction.trim_start_matches('0')
    }

    /// The integer digit run read as an unsigned integer.
    #[inline]
    #[must_use]
    pub fn integer_value(&self) -> BigUint {
        BigUint::parse_bytes(self.integer.as_bytes(), 10).unwrap_or_default()
    }

    /// The fraction digit run read as an unsigned integer (an empty run
    /// reads as zero).
    #[inline]
    #[must_use]
    pub fn fraction_value(&self) -> BigUint {
        BigUint::parse_bytes(self.significant_fraction().as_bytes(), 10).unwrap_or_default()
    }

    /// The magnitude this literal denotes.
    ///
    /// A literal without visible fraction digits and with a non-negative
    /// exponent evaluates exactly, as `integer × 10^exponent` over [`BigInt`].
    /// Anything else carries a fractional part and evaluates to the nearest
    /// [`f64`], which is precise enough for the externally consumed magnitude
    /// (the digit-exact operands never go through this path).
    #[must_use]
    pub fn to_value(&self) -> NumericValue {
        if self.fraction.is_empty() && self.exponent >= 0 {
            let mut value = BigInt::from(self.integer_value());
            if self.sign == Sign::Negative {
                value = -value;
            }
            NumericValue::Integer(value * Pow::pow(BigInt::from(10), self.exponent.unsigned_abs()))
        } else {
            // the digit runs and the exponent are validated, this cannot fail
            NumericValue::Fractional(self.to_string().parse().unwrap_or(f64::NAN))
        }
    }
}

impl FromStr for DecimalLiteral {
    type Err = ParseNumericLiteralError;

    #[inline]
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_numeric_literal(input)
    }
}

impl fmt::Display for DecimalLiteral {
    /// Formats the literal following its canonical representation:
    /// sign and integer digits, `.` and the fraction digits when the
    /// fraction is non-empty, `e` and the exponent when it is non-zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sign.as_str())?;
        f.write_str(&self.integer)?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        if self.exponent != 0 {
            write!(f, "e{}", self.exponent)?;
        }
        Ok(())
    }
}

/// The magnitude of a literal: exact when integral, nearest [`f64`] otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    Integer(BigInt),
    Fractional(f64),
}

impl NumericValue {
    /// The value as an [`f64`], losing exactness on very large integers.
    #[inline]
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Integer(value) => value.to_f64().unwrap_or(f64::NAN),
            Self::Fractional(value) => *value,
        }
    }
}

impl From<i64> for NumericValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for NumericValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Fractional(value)
    }
}

impl fmt::Display for NumericValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => value.fmt(f),
            Self::Fractional(value) => value.fmt(f),
        }
    }
}

#[cfg(test)]
#[expect(clippy::panic_in_result_fn)]
mod tests {
    use super::*;

    #[test]
    fn apply_exponent_rightward() -> Result<(), ParseNumericLiteralError> {
        assert_eq!(
            DecimalLiteral::from_str("1.2c6")?.apply_exponent().to_string(),
            "1200000.0"
        );
        assert_eq!(
            DecimalLiteral::from_str("1.23e1")?.apply_exponent().to_string(),
            "12.3"
        );
        assert_eq!(
            DecimalLiteral::from_str("1.2e3")?.apply_exponent().to_string(),
            "1200.0"
        );
        assert_eq!(
            DecimalLiteral::from_str("1e2")?.apply_exponent().to_string(),
            "100"
        );
        assert_eq!(
            DecimalLiteral::from_str("-1.25e1")?.apply_exponent().to_string(),
            "-12.5"
        );
        Ok(())
    }

    #[test]
    fn apply_exponent_leftward() -> Result<(), ParseNumericLiteralError> {
        assert_eq!(
            DecimalLiteral::from_str("5e-2")?.apply_exponent().to_string(),
            "0.05"
        );
        assert_eq!(
            DecimalLiteral::from_str("12e-2")?.apply_exponent().to_string(),
            "0.12"
        );
        assert_eq!(
            DecimalLiteral::from_str("123e-1")?.apply_exponent().to_string(),
            "12.3"
        );
        assert_eq!(
            DecimalLiteral::from_str("1.5e-2")?.apply_exponent().to_string(),
            "0.015"
        );
        assert_eq!(
            DecimalLiteral::from_str("5e-1")?.apply_exponent().to_string(),
            "0.5"
        );
        Ok(())
    }

    #[test]
    fn apply_exponent_without_exponent_is_identity() -> Result<(), ParseNumericLiteralError> {
        let literal = DecimalLiteral::from_str("1.50")?;
        assert_eq!(literal.apply_exponent(), literal);
        let applied = DecimalLiteral::from_str("1.2e3")?.apply_exponent();
        assert_eq!(applied.apply_exponent(), applied);
        Ok(())
    }

    #[test]
    fn abs() -> Result<(), ParseNumericLiteralError> {
        assert_eq!(DecimalLiteral::from_str("-3.40")?.abs().to_string(), "3.40");
        assert_eq!(DecimalLiteral::from_str("+3.40")?.abs().to_string(), "3.40");
        assert_eq!(
            DecimalLiteral::from_str("-1e-2")?.abs().to_string(),
            "1e-2"
        );
        Ok(())
    }

    #[test]
    fn strip_trailing_zeros() -> Result<(), ParseNumericLiteralError> {
        assert_eq!(
            DecimalLiteral::from_str("1.500")?.strip_trailing_zeros().to_string(),
            "1.5"
        );
        assert_eq!(
            DecimalLiteral::from_str("1.00")?.strip_trailing_zeros().to_string(),
            "1"
        );
        assert_eq!(
            DecimalLiteral::from_str("10.05")?.strip_trailing_zeros().to_string(),
            "10.05"
        );
        let stripped = DecimalLiteral::from_str("1.500")?.strip_trailing_zeros();
        assert_eq!(stripped.strip_trailing_zeros(), stripped);
        Ok(())
    }

    #[test]
    fn significant_fraction() -> Result<(), ParseNumericLiteralError> {
        assert_eq!(DecimalLiteral::from_str("1.050")?.significant_fraction(), "50");
        assert_eq!(DecimalLiteral::from_str("1.00")?.significant_fraction(), "");
        assert_eq!(DecimalLiteral::from_str("1")?.significant_fraction(), "");
        Ok(())
    }

    #[test]
    fn digit_run_values() -> Result<(), ParseNumericLiteralError> {
        assert_eq!(
            DecimalLiteral::from_str("007.050")?.integer_value(),
            BigUint::from(7_u32)
        );
        assert_eq!(
            DecimalLiteral::from_str("007.050")?.fraction_value(),
            BigUint::from(50_u32)
        );
        assert_eq!(DecimalLiteral::from_str("1")?.fraction_value(), BigUint::default());
        Ok(())
    }

    #[test]
    fn to_value() -> Result<(), ParseNumericLiteralError> {
        assert_eq!(DecimalLiteral::from_str("12")?.to_value(), 12_i64.into());
        assert_eq!(DecimalLiteral::from_str("-12")?.to_value(), (-12_i64).into());
        assert_eq!(DecimalLiteral::from_str("1e2")?.to_value(), 100_i64.into());
        assert_eq!(DecimalLiteral::from_str("1.5")?.to_value(), 1.5.into());
        assert_eq!(DecimalLiteral::from_str("-1.5")?.to_value(), (-1.5).into());
        assert_eq!(DecimalLiteral::from_str("5e-2")?.to_value(), 0.05.into());
        assert_eq!(DecimalLiteral::from_str("1.2e6")?.to_value(), 1_200_000.0.into());
        assert_eq!(
            DecimalLiteral::from_str("123456789123456789123456789e3")?
                .to_value()
                .to_string(),
            "123456789123456789123456789000"
        );
        Ok(())
    }

    #[test]
    fn canonical_display() -> Result<(), ParseNumericLiteralError> {
        for (input, expected) in [
            ("0", "0"),
            ("1.50", "1.50"),
            ("-3.40", "-3.40"),
            ("+7", "+7"),
            ("1.2c6", "1.2e6"),
            ("2E-3", "2e-3"),
        ] {
            assert_eq!(DecimalLiteral::from_str(input)?.to_string(), expected);
        }
        Ok(())
    }
}
