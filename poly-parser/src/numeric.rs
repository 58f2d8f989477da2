//! Conversion of decimal literals into the numeric domains used by polynomials and calculator
//! commands.
//!
//! Each function accepts an optional leading `-` followed by one or more ASCII digits, and
//! nothing else. Anything that does not have this shape is a [`NumericError::Syntax`] error. A
//! literal that has this shape but whose value does not fit the target domain is a
//! [`NumericError::OutOfRange`] error; this includes any negative literal for an unsigned
//! domain, even `-0`.

use poly_core::{Coeff, Exp, MAX_EXP};
use std::fmt;

/// An error that occurred while converting a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// The input is not a number.
    Syntax,

    /// The input is a number, but it lies outside the target domain.
    OutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumericError::Syntax => write!(f, "not a number"),
            NumericError::OutOfRange => write!(f, "number out of range"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Splits the literal into its sign and digits, checking its shape.
fn split_sign(input: &str) -> Result<(bool, &str), NumericError> {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, input),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::Syntax);
    }

    Ok((negative, digits))
}

/// Accumulates the digits into a magnitude, failing as soon as it exceeds `bound`.
fn magnitude(digits: &str, bound: u64) -> Result<u64, NumericError> {
    digits.bytes().try_fold(0u64, |acc, digit| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(digit - b'0')))
            .filter(|&acc| acc <= bound)
            .ok_or(NumericError::OutOfRange)
    })
}

/// Converts a non-negative literal, bounded by `bound`.
fn parse_unsigned(input: &str, bound: u64) -> Result<u64, NumericError> {
    let (negative, digits) = split_sign(input)?;
    if negative {
        return Err(NumericError::OutOfRange);
    }

    magnitude(digits, bound)
}

/// Parses a monomial exponent, in the range `0..=MAX_EXP`.
pub fn parse_exp(input: &str) -> Result<Exp, NumericError> {
    let value = parse_unsigned(input, u64::from(MAX_EXP))?;
    Exp::try_from(value).map_err(|_| NumericError::OutOfRange)
}

/// Parses a polynomial coefficient, in the range of [`Coeff`].
pub fn parse_coeff(input: &str) -> Result<Coeff, NumericError> {
    let (negative, digits) = split_sign(input)?;
    let value = magnitude(digits, u64::MAX)?;

    if negative {
        0i64.checked_sub_unsigned(value).ok_or(NumericError::OutOfRange)
    } else {
        Coeff::try_from(value).map_err(|_| NumericError::OutOfRange)
    }
}

/// Parses a command parameter, such as a variable index or the number of substitutions, in the
/// range `0..=u64::MAX` (further limited to the range of [`usize`]).
pub fn parse_param(input: &str) -> Result<usize, NumericError> {
    let value = parse_unsigned(input, u64::MAX)?;
    usize::try_from(value).map_err(|_| NumericError::OutOfRange)
}
