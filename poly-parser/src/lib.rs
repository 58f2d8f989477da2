//! Parser for the textual representation of sparse multivariate polynomials.
//!
//! A polynomial is either a constant, such as `-12`, or a sum of one or more monomials joined by
//! `+`, such as `(1,0)+((2,1),3)`. Each monomial is written `(coeff,exp)`, where `coeff` is
//! itself a polynomial over the next variable, and `exp` is the exponent of the current
//! variable. Whitespace is not allowed anywhere.
//!
//! Parsing is done in two phases. The whole line is first checked for the structure of a
//! polynomial, which results in a [syntax error](ErrorClass::Syntax) if it is malformed. Only
//! then are the numbers converted, which can result in a [range error](ErrorClass::Range) if a
//! coefficient or an exponent does not fit in its domain.
//!
//! ```
//! use poly_parser::{parse_poly, ErrorClass};
//!
//! let poly = parse_poly("(3,1)+(2,0)").unwrap();
//! assert_eq!(poly.to_string(), "(2,0)+(3,1)");
//!
//! let err = parse_poly("(1,2147483648)").unwrap_err();
//! assert_eq!(err.class, ErrorClass::Range);
//! ```

pub mod numeric;
pub mod parser;
pub mod tokenizer;

pub use parser::{
    error::{Error, ErrorClass},
    parse_poly,
    structure::MAX_DEPTH,
    Parse,
    Parser,
};
