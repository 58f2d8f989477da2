use crate::{Exp, Poly};

/// A monomial `p * x_i^n`, where `x_i` is the variable of the level this monomial is stored at,
/// and `p` is a polynomial over the variables `x_(i+1), x_(i+2), ...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mono {
    /// The coefficient of the monomial.
    pub(crate) poly: Poly,

    /// The exponent of the variable.
    pub(crate) exp: Exp,
}

impl Mono {
    /// Creates the monomial `poly * x^exp`.
    ///
    /// A zero coefficient is allowed here; such monomials are dropped when the monomial is used
    /// to build a [`Poly`].
    pub fn new(poly: Poly, exp: Exp) -> Self {
        Self { poly, exp }
    }

    /// Returns the exponent of the monomial.
    pub fn exp(&self) -> Exp {
        self.exp
    }

    /// Returns the coefficient of the monomial.
    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    /// Consumes the monomial, returning its coefficient.
    pub fn into_poly(self) -> Poly {
        self.poly
    }

    /// Consumes the monomial, returning its coefficient and exponent.
    pub fn into_parts(self) -> (Poly, Exp) {
        (self.poly, self.exp)
    }

    /// Returns true if the coefficient of the monomial is zero.
    pub fn is_zero(&self) -> bool {
        self.poly.is_zero()
    }
}
