//! Sparse multivariate polynomials with integer coefficients.
//!
//! A polynomial over the variables `x_0, x_1, x_2, ...` is stored as a recursive tree. At every
//! level of the tree, a [`Poly`] is either a [`Poly::Scalar`] (an integer constant), or a
//! [`Poly::Terms`] list of [`Mono`]mials in the variable of that level. The coefficient of each
//! monomial is itself a [`Poly`] over the *next* variable. For example, the polynomial
//! `x_0^2 * (3 + x_1) + 5` is stored as:
//!
//! ```text
//! Terms [
//!     Mono { exp: 0, poly: Scalar(5) },
//!     Mono { exp: 2, poly: Terms [
//!         Mono { exp: 0, poly: Scalar(3) },
//!         Mono { exp: 1, poly: Scalar(1) },
//!     ] },
//! ]
//! ```
//!
//! and printed as `(5,0)+((3,0)+(1,1),2)`.
//!
//! # Canonical form
//!
//! Every [`Poly`] that can be observed outside this crate is in canonical form:
//!
//! - a [`Poly::Terms`] list is never empty;
//! - its monomials are sorted by strictly increasing exponent;
//! - no monomial has the zero polynomial as its coefficient;
//! - a list consisting of a single monomial with exponent `0` and a scalar coefficient is
//! collapsed into that scalar.
//!
//! Because every value has exactly one representation, structural equality ([`PartialEq`]) is
//! also mathematical equality. The only way to build a [`Poly::Terms`] is through
//! [`Poly::from_monos`] (or the algebraic operations, which use it internally), so this cannot
//! be broken from the outside.
//!
//! # Overflow
//!
//! Coefficient arithmetic is performed with wrapping (two's complement) semantics, the same as
//! the integer types of the underlying machine. Multiplying `2^32 * x` by `2^32` yields `0`.
//!
//! Exponents never wrap. They are stored as [`Exp`] (`u64`), which is much wider than the
//! exponents accepted by the parser (at most [`MAX_EXP`]), and are added with saturating
//! arithmetic when monomials are multiplied. A product of non-constant polynomials therefore
//! never collapses into a constant. Products and powers may hold exponents above [`MAX_EXP`];
//! they are printed as usual, but such output cannot be parsed back.

mod fmt;
mod mono;
mod ops;
mod poly;
#[cfg(feature = "serde")]
mod serde_impl;

pub use mono::Mono;
pub use poly::{Poly, Terms};

/// Type of a polynomial coefficient.
pub type Coeff = i64;

/// Type of a monomial exponent.
pub type Exp = u64;

/// The largest exponent that can be written in the textual representation of a polynomial.
pub const MAX_EXP: Exp = i32::MAX as Exp;
