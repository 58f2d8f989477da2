//! Structural validation of a polynomial, performed over the whole token stream before any
//! numbers are converted.
//!
//! Each token may only be followed by certain kinds of tokens. What may follow a number depends
//! on whether it is a coefficient or an exponent, which is decided by the last token that was
//! not a number: a number after `(` or `-` is a coefficient, and must be followed by `,`; any
//! other number is an exponent, and must be followed by `)`.
//!
//! Parentheses may be nested at most [`MAX_DEPTH`] levels deep, which bounds the recursion of
//! parsing and of every later operation on the polynomial.

use crate::{
    parser::error::{kind, Error},
    tokenizer::{Token, TokenKind},
};
use std::ops::Range;

/// The deepest nesting of parentheses that is accepted.
pub const MAX_DEPTH: usize = 128;

/// Tokens that can start a polynomial, or a monomial's coefficient.
const POLY_START: &[TokenKind] = &[TokenKind::OpenParen, TokenKind::Sub, TokenKind::Int];

/// Returns the kinds of tokens that may follow the token `prev`.
///
/// `depth` is the number of parentheses that are open after `prev`, and `in_coeff` is true if
/// the last token that was not a number was `(` or `-`.
fn allowed_after(prev: TokenKind, depth: usize, in_coeff: bool) -> &'static [TokenKind] {
    match prev {
        // a constant polynomial is a single number
        TokenKind::Int if depth == 0 => &[],
        TokenKind::Int if in_coeff => &[TokenKind::Comma],
        TokenKind::Int => &[TokenKind::CloseParen],
        TokenKind::OpenParen => POLY_START,
        TokenKind::CloseParen if depth == 0 => &[TokenKind::Add],
        TokenKind::CloseParen => &[TokenKind::Comma, TokenKind::Add],
        TokenKind::Comma | TokenKind::Sub => &[TokenKind::Int],
        TokenKind::Add => &[TokenKind::OpenParen],
        TokenKind::Symbol => &[],
    }
}

/// Checks that the given tokens have the structure of a polynomial.
///
/// This does not check that the numbers fit in their domains; see
/// [`numeric`](crate::numeric).
pub fn validate(tokens: &[Token]) -> Result<(), Error> {
    let Some(first) = tokens.first() else {
        return Err(Error::new(vec![0..0], kind::EmptyInput));
    };

    // spans of the parentheses that are currently open
    let mut open: Vec<Range<usize>> = Vec::new();
    let mut in_coeff = true;
    let mut prev: Option<&Token> = None;

    for token in tokens {
        if token.kind == TokenKind::Symbol {
            return Err(Error::new(vec![token.span.clone()], kind::InvalidCharacter {
                found: token.lexeme.to_owned(),
            }));
        }

        let allowed = prev.map_or(POLY_START, |prev| allowed_after(prev.kind, open.len(), in_coeff));
        if !allowed.contains(&token.kind) {
            return Err(if allowed.is_empty() {
                Error::new(vec![token.span.clone()], kind::ExpectedEof)
            } else {
                Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                    expected: allowed,
                    found: token.kind,
                })
            });
        }

        match token.kind {
            TokenKind::OpenParen => {
                if open.len() == MAX_DEPTH {
                    return Err(Error::new(vec![token.span.clone()], kind::NestedTooDeep {
                        max: MAX_DEPTH,
                    }));
                }
                open.push(token.span.clone());
            },
            TokenKind::CloseParen => {
                if open.pop().is_none() {
                    return Err(Error::new(vec![token.span.clone()], kind::UnclosedParenthesis {
                        opening: false,
                    }));
                }
            },
            _ => (),
        }

        if token.kind != TokenKind::Int {
            in_coeff = matches!(token.kind, TokenKind::OpenParen | TokenKind::Sub);
        }
        prev = Some(token);
    }

    if let Some(span) = open.pop() {
        return Err(Error::new(vec![span], kind::UnclosedParenthesis { opening: true }));
    }

    let last = prev.unwrap_or(first);
    match last.kind {
        TokenKind::Int | TokenKind::CloseParen => Ok(()),
        TokenKind::Sub => Err(Error::new(vec![last.span.clone()], kind::LoneMinus)),
        other => Err(Error::new(vec![last.span.end..last.span.end], kind::UnexpectedEof {
            expected: allowed_after(other, 0, in_coeff),
        })),
    }
}

#[cfg(test)]
mod tests {
    use crate::{parser::error::ErrorClass, tokenizer::tokenize_complete};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Validates the given source, returning the spans of the error, if any.
    fn check(source: &str) -> Result<(), Vec<Range<usize>>> {
        validate(&tokenize_complete(source)).map_err(|err| {
            assert_eq!(err.class, ErrorClass::Syntax);
            err.spans
        })
    }

    #[test]
    fn accepts_scalars() {
        for source in ["0", "-0", "42", "-42", "007", "99999999999999999999999"] {
            assert_eq!(check(source), Ok(()), "{}", source);
        }
    }

    #[test]
    fn accepts_polys() {
        for source in [
            "(1,0)",
            "(-1,2)+(3,4)",
            "((1,2),3)",
            "((1,0)+(1,1),2)+(5,7)",
            "(((1,6),5),2)+((1,0)+(1,2),3)+(5,7)",
            "(1,99999999999999999999)",
            "(1,2)+(1,2)",
        ] {
            assert_eq!(check(source), Ok(()), "{}", source);
        }
    }

    #[test]
    fn rejects_misplaced_tokens() {
        assert_eq!(check("(1,-2)"), Err(vec![3..4]));
        assert_eq!(check("(1,2,3)"), Err(vec![4..5]));
        assert_eq!(check("(1,2)(3,4)"), Err(vec![5..6]));
        assert_eq!(check("()"), Err(vec![1..2]));
        assert_eq!(check("(1 ,2)"), Err(vec![2..3]));
        assert_eq!(check("(--1,2)"), Err(vec![2..3]));
        assert_eq!(check("(-(1,2),3)"), Err(vec![2..3]));
        assert_eq!(check("(12,)"), Err(vec![4..5]));
        assert_eq!(check("+(1,2)"), Err(vec![0..1]));
        assert_eq!(check("1+2"), Err(vec![1..2]));
        assert_eq!(check("(1,2),3)"), Err(vec![5..6]));
    }

    #[test]
    fn rejects_missing_comma() {
        assert_eq!(check("(1)"), Err(vec![2..3]));
        assert_eq!(check("((1,2)3)"), Err(vec![6..7]));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(check("(1,x)"), Err(vec![3..4]));
        assert_eq!(check(" 1"), Err(vec![0..1]));
        assert_eq!(check("1\n"), Err(vec![1..2]));
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert_eq!(check("(1,2"), Err(vec![0..1]));
        assert_eq!(check("((1,2),3"), Err(vec![0..1]));
    }

    /// Builds a polynomial whose parentheses are nested `depth` levels deep.
    fn nested(depth: usize) -> String {
        format!("{}1{}", "(".repeat(depth), ",1)".repeat(depth))
    }

    #[test]
    fn nesting_limit() {
        assert_eq!(check(&nested(MAX_DEPTH)), Ok(()));
        assert_eq!(check(&nested(MAX_DEPTH + 1)), Err(vec![MAX_DEPTH..MAX_DEPTH + 1]));

        // the limit applies to depth, not to the number of parentheses
        let wide = vec![nested(MAX_DEPTH); 4].join("+");
        assert_eq!(check(&wide), Ok(()));
    }

    #[test]
    fn rejects_incomplete_input() {
        assert_eq!(check(""), Err(vec![0..0]));
        assert_eq!(check("-"), Err(vec![0..1]));
        assert_eq!(check("(1,2)+"), Err(vec![6..6]));
    }
}
