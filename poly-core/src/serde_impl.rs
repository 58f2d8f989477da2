//! Deserialization goes through an unchecked mirror of [`Poly`], which is then rebuilt in
//! canonical form.

use crate::{Coeff, Mono, Poly};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename = "Poly")]
pub(crate) enum PolyRepr {
    Scalar(Coeff),
    Terms(Vec<Mono>),
}

impl From<PolyRepr> for Poly {
    fn from(repr: PolyRepr) -> Self {
        match repr {
            PolyRepr::Scalar(value) => Poly::Scalar(value),
            PolyRepr::Terms(monos) => Poly::from_monos(monos),
        }
    }
}
