use crate::{Mono, Poly};
use std::fmt::{Display, Formatter, Result};

/// Formats the polynomial in its textual representation, such as `(1,0)+((2,1),3)`.
///
/// The output of this implementation is accepted by the polynomial parser, and parsing it yields
/// the same polynomial.
impl Display for Poly {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Scalar(value) => write!(f, "{}", value),
            Self::Terms(terms) => {
                let mut iter = terms.iter();
                if let Some(mono) = iter.next() {
                    write!(f, "{}", mono)?;
                }
                for mono in iter {
                    write!(f, "+{}", mono)?;
                }
                Ok(())
            },
        }
    }
}

impl Display for Mono {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "({},{})", self.poly, self.exp)
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{c, p};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn scalar() {
        assert_eq!(c(0).to_string(), "0");
        assert_eq!(c(-42).to_string(), "-42");
        assert_eq!(c(i64::MIN).to_string(), "-9223372036854775808");
    }

    #[test]
    fn terms() {
        assert_eq!(p([(c(1), 1)]).to_string(), "(1,1)");
        assert_eq!(p([(c(5), 0), (c(-3), 2)]).to_string(), "(5,0)+(-3,2)");
        assert_eq!(
            p([(c(5), 0), (p([(c(3), 0), (c(1), 1)]), 2)]).to_string(),
            "(5,0)+((3,0)+(1,1),2)",
        );
    }

    #[test]
    fn nested_constant_term() {
        // a constant term whose coefficient depends on the next variable is not collapsed
        assert_eq!(p([(p([(c(1), 1)]), 0)]).to_string(), "((1,1),0)");
    }

    #[test]
    fn mono() {
        assert_eq!(Mono::new(c(0), 3).to_string(), "(0,3)");
        assert_eq!(Mono::new(p([(c(2), 1)]), 2147483647).to_string(), "((2,1),2147483647)");
    }
}
