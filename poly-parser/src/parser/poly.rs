use crate::{
    numeric::{self, NumericError},
    parser::{
        error::{kind, Error},
        structure,
        token::{CloseParen, Comma, Int, OpenParen, Sub},
        Parser,
        Parse,
    },
    tokenizer::{Token, TokenKind},
};
use poly_core::{Coeff, Exp, Mono, Poly};
use std::ops::Range;

/// A coefficient literal: an integer, optionally preceded by a minus sign.
#[derive(Debug, Clone, PartialEq)]
pub struct LitCoeff {
    /// The value of the literal.
    pub value: Coeff,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitCoeff {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let sub = input.try_parse::<Sub>().ok();
        let int = input.try_parse::<Int>().map_err(|err| match &sub {
            Some(sub) => Error::new(vec![sub.span.clone()], kind::LoneMinus),
            None => err,
        })?;

        let (span, literal) = match sub {
            Some(sub) => (sub.span.start..int.span.end, format!("-{}", int.digits)),
            None => (int.span, int.digits),
        };

        // an `Int` token is a non-empty run of digits, so only the range can be wrong
        match numeric::parse_coeff(&literal) {
            Ok(value) => Ok(Self { value, span }),
            Err(err) => {
                debug_assert_eq!(err, NumericError::OutOfRange);
                Err(Error::new_range(vec![span], kind::CoefficientOutOfRange {
                    negative: literal.starts_with('-'),
                }))
            },
        }
    }
}

/// An exponent literal: a non-negative integer.
#[derive(Debug, Clone, PartialEq)]
pub struct LitExp {
    /// The value of the literal.
    pub value: Exp,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitExp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let int = input.try_parse::<Int>()?;

        match numeric::parse_exp(&int.digits) {
            Ok(value) => Ok(Self { value, span: int.span }),
            Err(err) => {
                debug_assert_eq!(err, NumericError::OutOfRange);
                Err(Error::new_range(vec![int.span], kind::ExponentOutOfRange))
            },
        }
    }
}

/// A monomial, written as `(coeff,exp)`, where `coeff` is itself a polynomial.
impl Parse for Mono {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input.try_parse::<OpenParen>()?;
        let poly = input.try_parse::<Poly>()?;
        input.try_parse::<Comma>()?;
        let exp = input.try_parse::<LitExp>()?;
        input.try_parse::<CloseParen>()?;

        Ok(Mono::new(poly, exp.value))
    }
}

/// A polynomial: either a coefficient literal, or one or more monomials joined by `+`.
///
/// The monomials are combined with [`Poly::from_monos`], so they may appear in any order, and
/// may repeat exponents.
impl Parse for Poly {
    fn validate(tokens: &[Token]) -> Result<(), Error> {
        structure::validate(tokens)
    }

    fn parse(input: &mut Parser) -> Result<Self, Error> {
        match input.current_token() {
            Some(token) if token.kind == TokenKind::OpenParen => {
                let monos = input.try_parse_delimited::<Mono>(TokenKind::Add)?;
                Ok(Poly::from_monos(monos))
            },
            _ => input
                .try_parse::<LitCoeff>()
                .map(|lit| Poly::from_coeff(lit.value)),
        }
    }
}
