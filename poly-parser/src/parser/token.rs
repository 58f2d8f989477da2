use crate::{
    parser::{error::{kind, Error}, Parser, Parse},
    tokenizer::{Token, TokenKind},
};
use std::ops::Range;

/// Consumes the next token if it is of the given kind.
fn expect<'source>(input: &mut Parser<'source>, expected: &'static [TokenKind]) -> Result<Token<'source>, Error> {
    let token = input.next_token()?;
    if expected.contains(&token.kind) {
        Ok(token)
    } else {
        Err(Error::new(vec![token.span], kind::UnexpectedToken {
            expected,
            found: token.kind,
        }))
    }
}

/// Generates a struct holding the span of a punctuation token, parsed by requesting that exact
/// token kind.
macro_rules! punctuation {
    ($($name:ident)*) => {
        $(
            #[derive(Clone, Debug, PartialEq)]
            pub(crate) struct $name {
                pub(crate) span: Range<usize>,
            }

            impl Parse for $name {
                fn parse(input: &mut Parser) -> Result<Self, Error> {
                    expect(input, &[TokenKind::$name]).map(|token| Self { span: token.span })
                }
            }
        )*
    };
}

punctuation!(OpenParen CloseParen Comma Sub);

/// A run of decimal digits. The digits are kept as written; converting them is left to the
/// literal that needs them, since each literal has its own range.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Int {
    pub(crate) digits: String,
    pub(crate) span: Range<usize>,
}

impl Parse for Int {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        expect(input, &[TokenKind::Int]).map(|token| Self {
            digits: token.lexeme.to_owned(),
            span: token.span,
        })
    }
}
