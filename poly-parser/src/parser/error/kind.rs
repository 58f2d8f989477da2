use ariadne::Fmt;
use poly_attrs::ErrorKind;
use poly_core::{Coeff, MAX_EXP};
use poly_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// Joins the descriptions of the given token kinds into a readable list.
fn describe_all(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.describe())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The input was empty.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty polynomial",
    labels = [format!("I expected to see a {} here", "polynomial".fg(EXPR))],
    help = "a constant such as `5`, or a sum of monomials such as `(1,0)+(2,3)`",
)]
pub struct EmptyInput;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of polynomial",
    labels = [format!("I expected to see one of: {}", describe_all(self.expected))],
)]
pub struct UnexpectedEof {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],
}

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of polynomial",
    labels = [format!("I could not understand the remaining {} here", "input".fg(EXPR))],
    help = "monomials must be joined with `+`",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", describe_all(self.expected))],
    help = format!("found {}", self.found.describe()),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A character that cannot appear in a polynomial was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character {:?}", self.found),
    labels = ["this character cannot appear in a polynomial"],
    help = "polynomials are made of digits and the characters `(`, `)`, `,`, `+` and `-`, without any spaces",
)]
pub struct InvalidCharacter {
    /// The character(s) that were found.
    pub found: String,
}

/// A minus sign was not followed by a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing number after minus sign",
    labels = [format!("I expected to see a {} after this", "number".fg(EXPR))],
)]
pub struct LoneMinus;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if self.opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// An exponent does not fit in the exponent domain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent out of range",
    labels = ["this exponent is too large"],
    help = format!("exponents must be between {} and {}", "0".fg(EXPR), MAX_EXP.fg(EXPR)),
)]
pub struct ExponentOutOfRange;

/// A coefficient does not fit in the coefficient domain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "coefficient out of range",
    labels = [if self.negative {
        "this coefficient is too small"
    } else {
        "this coefficient is too large"
    }],
    help = format!("coefficients must be between {} and {}", Coeff::MIN.fg(EXPR), Coeff::MAX.fg(EXPR)),
)]
pub struct CoefficientOutOfRange {
    /// Whether the coefficient was negative.
    pub negative: bool,
}

/// The polynomial is nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "polynomial is nested too deeply",
    labels = [format!("this parenthesis opens level {}", self.max + 1)],
    help = format!("polynomials may be nested at most {} levels deep", self.max.fg(EXPR)),
)]
pub struct NestedTooDeep {
    /// The maximum nesting depth.
    pub max: usize,
}
