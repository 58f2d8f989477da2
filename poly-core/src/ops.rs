//! Arithmetic operators for [`Poly`].
//!
//! All operators are implemented on references, and the owned forms forward to them. The
//! result of every operation is built in canonical form: sums and products of constants wrap on
//! overflow, exponent sums saturate, and any term whose coefficient becomes zero is dropped.

use crate::{Coeff, Mono, Poly, Terms};
use std::{
    cmp::Ordering,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub},
};

/// Adds the constant `value` to the non-constant polynomial `terms`.
fn add_scalar(terms: &Terms, value: Coeff) -> Poly {
    if value == 0 {
        return Poly::Terms(terms.clone());
    }

    let mut monos = Vec::with_capacity(terms.len() + 1);
    let rest = match terms.first() {
        Some(first) if first.exp == 0 => {
            let sum = &first.poly + &Poly::Scalar(value);
            if !sum.is_zero() {
                monos.push(Mono::new(sum, 0));
            }
            &terms[1..]
        },
        _ => {
            monos.push(Mono::new(Poly::Scalar(value), 0));
            &terms[..]
        },
    };
    monos.extend_from_slice(rest);

    Poly::from_sorted(monos)
}

/// Adds two non-constant polynomials by merging their (sorted) monomial lists.
fn add_terms(lhs: &Terms, rhs: &Terms) -> Poly {
    let mut monos = Vec::with_capacity(lhs.len() + rhs.len());
    let (mut i, mut j) = (0, 0);

    while i < lhs.len() && j < rhs.len() {
        let (left, right) = (&lhs[i], &rhs[j]);
        match left.exp.cmp(&right.exp) {
            Ordering::Less => {
                monos.push(left.clone());
                i += 1;
            },
            Ordering::Greater => {
                monos.push(right.clone());
                j += 1;
            },
            Ordering::Equal => {
                let sum = &left.poly + &right.poly;
                if !sum.is_zero() {
                    monos.push(Mono::new(sum, left.exp));
                }
                i += 1;
                j += 1;
            },
        }
    }

    monos.extend_from_slice(&lhs[i..]);
    monos.extend_from_slice(&rhs[j..]);

    Poly::from_sorted(monos)
}

/// Multiplies the non-constant polynomial `terms` by the constant `value`.
fn mul_scalar(terms: &Terms, value: Coeff) -> Poly {
    if value == 0 {
        return Poly::zero();
    }

    let monos = terms
        .iter()
        .filter_map(|mono| {
            let product = match &mono.poly {
                Poly::Scalar(coeff) => Poly::Scalar(coeff.wrapping_mul(value)),
                Poly::Terms(inner) => mul_scalar(inner, value),
            };
            (!product.is_zero()).then(|| Mono::new(product, mono.exp))
        })
        .collect();

    Poly::from_sorted(monos)
}

/// Multiplies two non-constant polynomials, term by term.
fn mul_terms(lhs: &Terms, rhs: &Terms) -> Poly {
    let mut monos = Vec::with_capacity(lhs.len() * rhs.len());
    for left in lhs {
        for right in rhs {
            monos.push(Mono::new(&left.poly * &right.poly, left.exp.saturating_add(right.exp)));
        }
    }

    Poly::from_monos(monos)
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        match (self, rhs) {
            (Poly::Scalar(lhs), Poly::Scalar(rhs)) => Poly::Scalar(lhs.wrapping_add(*rhs)),
            (Poly::Scalar(value), Poly::Terms(terms))
                | (Poly::Terms(terms), Poly::Scalar(value)) => add_scalar(terms, *value),
            (Poly::Terms(lhs), Poly::Terms(rhs)) => add_terms(lhs, rhs),
        }
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        match (self, rhs) {
            (Poly::Scalar(lhs), Poly::Scalar(rhs)) => Poly::Scalar(lhs.wrapping_mul(*rhs)),
            (Poly::Scalar(value), Poly::Terms(terms))
                | (Poly::Terms(terms), Poly::Scalar(value)) => mul_scalar(terms, *value),
            (Poly::Terms(lhs), Poly::Terms(rhs)) => mul_terms(lhs, rhs),
        }
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        self * &Poly::from_coeff(-1)
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        self + &-rhs
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        -&self
    }
}

/// Implements the owned forms of a binary operator in terms of the borrowed form.
macro_rules! forward_binop {
    ($($op:ident $method:ident),* $(,)?) => {
        $(
            impl $op<Poly> for Poly {
                type Output = Poly;

                fn $method(self, rhs: Poly) -> Poly {
                    <&Poly as $op<&Poly>>::$method(&self, &rhs)
                }
            }

            impl $op<&Poly> for Poly {
                type Output = Poly;

                fn $method(self, rhs: &Poly) -> Poly {
                    <&Poly as $op<&Poly>>::$method(&self, rhs)
                }
            }

            impl $op<Poly> for &Poly {
                type Output = Poly;

                fn $method(self, rhs: Poly) -> Poly {
                    <&Poly as $op<&Poly>>::$method(self, &rhs)
                }
            }
        )*
    };
}

forward_binop!(Add add, Sub sub, Mul mul);

impl Sum for Poly {
    fn sum<I: Iterator<Item = Poly>>(iter: I) -> Poly {
        iter.fold(Poly::zero(), |acc, poly| &acc + &poly)
    }
}

impl<'a> Sum<&'a Poly> for Poly {
    fn sum<I: Iterator<Item = &'a Poly>>(iter: I) -> Poly {
        iter.fold(Poly::zero(), |acc, poly| &acc + poly)
    }
}
