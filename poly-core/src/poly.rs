use crate::{Coeff, Exp, Mono};
use std::ops::Deref;

/// A sparse multivariate polynomial with integer coefficients.
///
/// See the [crate-level documentation](crate) for a description of the representation and the
/// canonical form every [`Poly`] is kept in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "crate::serde_impl::PolyRepr"))]
pub enum Poly {
    /// A constant polynomial.
    Scalar(Coeff),

    /// A non-constant polynomial, made up of monomials in the variable of the current level.
    Terms(Terms),
}

/// The monomials of a non-constant [`Poly`].
///
/// The list is guaranteed to be non-empty, sorted by strictly increasing exponent, and free of
/// monomials with a zero coefficient. It can be inspected through [`Deref`], but only built
/// through [`Poly::from_monos`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Terms(Vec<Mono>);

impl Terms {
    /// Returns the monomials, sorted by increasing exponent.
    pub fn monos(&self) -> &[Mono] {
        &self.0
    }

    /// Consumes the list, returning the monomials sorted by increasing exponent.
    pub fn into_monos(self) -> Vec<Mono> {
        self.0
    }
}

impl Deref for Terms {
    type Target = [Mono];

    fn deref(&self) -> &[Mono] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Terms {
    type Item = &'a Mono;
    type IntoIter = std::slice::Iter<'a, Mono>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Coeff> for Poly {
    fn from(value: Coeff) -> Self {
        Self::Scalar(value)
    }
}

impl Poly {
    /// Creates the zero polynomial.
    pub const fn zero() -> Self {
        Self::Scalar(0)
    }

    /// Creates a constant polynomial.
    pub const fn from_coeff(value: Coeff) -> Self {
        Self::Scalar(value)
    }

    /// Builds a polynomial as the sum of the given monomials, taking ownership of them.
    ///
    /// The monomials may be given in any order. Monomials with the same exponent are summed
    /// together, and monomials whose coefficient is (or sums to) zero are dropped. If nothing
    /// remains, the zero polynomial is returned; if only a constant term remains, it is
    /// collapsed into a [`Poly::Scalar`].
    pub fn from_monos(mut monos: Vec<Mono>) -> Self {
        monos.sort_by_key(Mono::exp);

        let mut merged: Vec<Mono> = Vec::with_capacity(monos.len());
        for mono in monos {
            match merged.last_mut() {
                Some(last) if last.exp == mono.exp => last.poly = &last.poly + &mono.poly,
                _ => merged.push(mono),
            }
        }

        merged.retain(|mono| !mono.is_zero());
        Self::from_sorted(merged)
    }

    /// Builds a polynomial as the sum of the given monomials, cloning them.
    ///
    /// See [`Poly::from_monos`].
    pub fn from_monos_cloned(monos: &[Mono]) -> Self {
        Self::from_monos(monos.to_vec())
    }

    /// Wraps a list of monomials that is already sorted by strictly increasing exponent and free
    /// of zero coefficients, collapsing it if it is empty or a lone constant term.
    pub(crate) fn from_sorted(monos: Vec<Mono>) -> Self {
        debug_assert!(monos.windows(2).all(|pair| pair[0].exp < pair[1].exp));
        debug_assert!(monos.iter().all(|mono| !mono.is_zero()));

        if monos.is_empty() {
            return Self::zero();
        }
        if let [Mono { poly: Self::Scalar(value), exp: 0 }] = monos[..] {
            return Self::Scalar(value);
        }

        Self::Terms(Terms(monos))
    }

    /// Returns true if the polynomial is a constant.
    pub fn is_coeff(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns true if the polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Scalar(0))
    }

    /// Returns the value of the polynomial if it is a constant.
    pub fn as_coeff(&self) -> Option<Coeff> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Terms(_) => None,
        }
    }

    /// Returns the monomials of the polynomial, or [`None`] if it is a constant.
    pub fn terms(&self) -> Option<&Terms> {
        match self {
            Self::Scalar(_) => None,
            Self::Terms(terms) => Some(terms),
        }
    }

    /// Returns the total degree of the polynomial: the highest sum of exponents over all
    /// variables in any single term.
    ///
    /// The degree of the zero polynomial is `-1`.
    pub fn deg(&self) -> i64 {
        match self {
            Self::Scalar(0) => -1,
            Self::Scalar(_) => 0,
            Self::Terms(terms) => terms
                .iter()
                .map(|mono| degree_of(mono.exp).saturating_add(mono.poly.deg()))
                .max()
                .unwrap_or(0),
        }
    }

    /// Returns the degree of the polynomial with respect to the variable `x_var`.
    ///
    /// The degree of the zero polynomial is `-1`.
    pub fn deg_by(&self, var: usize) -> i64 {
        match self {
            Self::Scalar(_) => self.deg(),
            Self::Terms(terms) if var == 0 => terms.last().map_or(0, |mono| degree_of(mono.exp)),
            Self::Terms(terms) => terms
                .iter()
                .map(|mono| mono.poly.deg_by(var - 1))
                .fold(0, i64::max),
        }
    }

    /// Evaluates the polynomial at `x_0 = x`. The result is a polynomial over the remaining
    /// variables, where `x_1` of `self` becomes `x_0` of the result, and so on.
    pub fn at(&self, x: Coeff) -> Poly {
        match self {
            Self::Scalar(_) => self.clone(),
            Self::Terms(terms) => terms
                .iter()
                .map(|mono| &mono.poly * &Self::Scalar(wrapping_pow(x, mono.exp)))
                .sum(),
        }
    }

    /// Raises the polynomial to the power `exp`, using exponentiation by squaring.
    pub fn pow(&self, mut exp: Exp) -> Poly {
        if let Self::Scalar(value) = self {
            return Self::Scalar(wrapping_pow(*value, exp));
        }

        let mut result = Self::from_coeff(1);
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        result
    }

    /// Substitutes the variable `x_i` with `substitutions[i]`, for every variable of the
    /// polynomial. Variables with no corresponding substitution are substituted with zero.
    ///
    /// Every substitution is a polynomial over `x_0, x_1, ...`; the result is therefore also a
    /// polynomial over those variables.
    pub fn compose(&self, substitutions: &[Poly]) -> Poly {
        self.compose_from(substitutions, 0)
    }

    /// Performs the composition of a polynomial found at depth `idx` of the outer polynomial.
    fn compose_from(&self, substitutions: &[Poly], idx: usize) -> Poly {
        let Self::Terms(terms) = self else {
            return self.clone();
        };

        let zero = Self::zero();
        let substitution = substitutions.get(idx).unwrap_or(&zero);
        terms
            .iter()
            .filter_map(|mono| {
                let power = substitution.pow(mono.exp);
                if power.is_zero() {
                    return None;
                }
                Some(power * mono.poly.compose_from(substitutions, idx + 1))
            })
            .sum()
    }
}

/// Converts an exponent to a degree, saturating at `i64::MAX`.
fn degree_of(exp: Exp) -> i64 {
    i64::try_from(exp).unwrap_or(i64::MAX)
}

/// Raises `base` to the power `exp` with wrapping arithmetic, by repeated squaring.
fn wrapping_pow(mut base: Coeff, mut exp: Exp) -> Coeff {
    let mut result: Coeff = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        exp >>= 1;
        base = base.wrapping_mul(base);
    }

    result
}

#[cfg(test)]
mod tests {
    use crate::testing::{c, p};
    use pretty_assertions::assert_eq;
    use super::*;

    /// `x_0^3 + x_0^2 x_1^2 + x_1^3`.
    fn poly_p() -> Poly {
        p([(p([(c(1), 3)]), 0), (p([(c(1), 2)]), 2), (c(1), 3)])
    }

    #[test]
    fn from_monos_merges_and_drops() {
        assert_eq!(p([(c(-1), 0), (c(1), 0)]), c(0));
        assert_eq!(p([(c(-1), 1), (c(1), 1)]), c(0));
        assert_eq!(p([(c(1), 0), (c(1), 0)]), c(2));
        assert_eq!(p([(c(1), 1), (c(1), 1)]), p([(c(2), 1)]));
        assert_eq!(p([(p([(c(-1), 1)]), 0), (p([(c(1), 1)]), 0)]), c(0));
    }

    #[test]
    fn from_monos_sorts() {
        let poly = p([
            (p([(c(-1), 0)]), 1),
            (p([(c(1), 0)]), 1),
            (c(2), 0),
            (c(1), 1),
            (p([(c(2), 1)]), 2),
            (p([(c(2), 2)]), 2),
        ]);
        let Poly::Terms(terms) = &poly else {
            panic!("expected a non-constant polynomial");
        };

        assert_eq!(terms.iter().map(Mono::exp).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(terms[0].poly(), &c(2));
        assert_eq!(terms[1].poly(), &c(1));
        assert_eq!(terms[2].poly(), &p([(c(2), 1), (c(2), 2)]));
    }

    #[test]
    fn from_monos_collapses_constant() {
        assert_eq!(Poly::from_monos(vec![]), c(0));
        assert_eq!(p([(c(7), 0)]), c(7));
        assert_eq!(p([(p([(c(7), 0)]), 0)]), c(7));
        assert!(p([(p([(c(7), 1)]), 0)]).terms().is_some());
    }

    #[test]
    fn from_monos_cloned_keeps_input() {
        let monos = vec![Mono::new(p([(c(-1), 1)]), 1), Mono::new(p([(c(1), 1)]), 2)];
        let poly = Poly::from_monos_cloned(&monos);

        assert_eq!(poly, Poly::from_monos(monos.clone()));
        assert_eq!(monos[0].poly(), &p([(c(-1), 1)]));
        assert_eq!(monos.len(), 2);
    }

    #[test]
    fn from_monos_is_idempotent() {
        let poly = poly_p();
        let Poly::Terms(terms) = &poly else {
            panic!("expected a non-constant polynomial");
        };

        assert_eq!(Poly::from_monos_cloned(terms.monos()), poly);
    }

    #[test]
    fn deg() {
        assert_eq!(c(0).deg(), -1);
        assert_eq!(c(1).deg(), 0);
        assert_eq!(p([(c(1), 1)]).deg(), 1);
        assert_eq!(poly_p().deg(), 4);
    }

    #[test]
    fn deg_by() {
        assert_eq!(c(0).deg_by(1), -1);
        assert_eq!(c(1).deg_by(0), 0);
        assert_eq!(p([(c(1), 1)]).deg_by(1), 0);
        assert_eq!(poly_p().deg_by(0), 3);
        assert_eq!(poly_p().deg_by(1), 3);
        assert_eq!(poly_p().deg_by(2), 0);
    }

    #[test]
    fn deg_by_deep_variable() {
        // x_0 * x_2^5 + x_1^2
        let poly = p([(p([(p([(c(1), 5)]), 0)]), 1), (p([(c(1), 2)]), 0)]);

        assert_eq!(poly.deg_by(0), 1);
        assert_eq!(poly.deg_by(1), 2);
        assert_eq!(poly.deg_by(2), 5);
        assert_eq!(poly.deg(), 6);
    }

    #[test]
    fn is_eq() {
        assert_eq!(c(0), c(0));
        assert_ne!(c(0), c(1));
        assert_ne!(p([(c(1), 1)]), c(1));
        assert_ne!(p([(c(1), 1)]), p([(c(1), 2)]));
        assert_ne!(p([(c(1), 1)]), p([(c(2), 1)]));
        assert_eq!(poly_p(), poly_p());
        assert_ne!(poly_p() + c(1), poly_p() + c(2));
    }

    #[test]
    fn at() {
        assert_eq!(c(2).at(1), c(2));
        assert_eq!(p([(c(1), 0), (c(1), 18)]).at(10), c(1_000_000_000_000_000_001));
        assert_eq!(p([(c(3), 1), (c(2), 3), (c(1), 5)]).at(10), c(102030));
        assert_eq!(
            p([(p([(c(1), 4)]), 0), (p([(c(1), 2)]), 2), (c(1), 3)]).at(2),
            p([(c(8), 0), (c(4), 2), (c(1), 4)]),
        );
    }

    #[test]
    fn at_wraps() {
        assert_eq!(p([(c(1), 64)]).at(2), c(0));
        assert_eq!(p([(c(1), 0), (c(1), 64)]).at(2), c(1));
        assert_eq!(p([(p([(c(1), 1)]), 64)]).at(2), c(0));
    }

    #[test]
    fn at_exponent_beyond_u32() {
        let poly = p([(c(1), 1 << 32)]);

        assert_eq!(poly.at(1), c(1));
        assert_eq!(poly.at(-1), c(1));
        assert_eq!(poly.at(2), c(0));
        assert_eq!(poly.deg(), 1 << 32);
    }

    #[test]
    fn pow() {
        let x_plus_one = p([(c(1), 0), (c(1), 1)]);

        assert_eq!(x_plus_one.pow(0), c(1));
        assert_eq!(x_plus_one.pow(1), x_plus_one);
        assert_eq!(x_plus_one.pow(3), p([(c(1), 0), (c(3), 1), (c(3), 2), (c(1), 3)]));
        assert_eq!(c(0).pow(0), c(1));
        assert_eq!(c(-2).pow(5), c(-32));
    }

    #[test]
    fn compose() {
        let substitutions = [p([(c(1), 4)]), p([(p([(c(1), 0), (c(1), 1)]), 1)])];
        let poly = p([
            (p([(p([(c(1), 6)]), 5)]), 2),
            (p([(c(1), 0), (c(1), 2)]), 3),
            (c(5), 7),
        ]);
        let expected = p([
            (c(1), 12),
            (p([(c(1), 0), (c(2), 1), (c(1), 2)]), 14),
            (c(5), 28),
        ]);

        assert_eq!(poly.compose(&substitutions), expected);
    }

    #[test]
    fn compose_missing_substitutions_are_zero() {
        let poly = p([(c(3), 0), (p([(c(2), 0), (c(1), 1)]), 2)]);

        assert_eq!(poly.compose(&[]), c(3));
        assert_eq!(poly.compose(&[c(2)]), c(11));
        assert_eq!(c(9).compose(&[c(2)]), c(9));
    }

    #[test]
    fn compose_identity() {
        let x0 = p([(c(1), 1)]);
        let x1 = p([(p([(c(1), 1)]), 0)]);

        assert_eq!(poly_p().compose(&[x0, x1]), poly_p());
    }
}
