//! A stack-based calculator for sparse multivariate polynomials.
//!
//! The calculator reads its input line by line. A line starting with an ASCII letter is a
//! [`Command`]; an empty line or a line starting with `#` is ignored; any other line is parsed as
//! a polynomial and pushed on the stack.
//!
//! ```
//! use poly_calc::Calculator;
//!
//! let input = "(1,1)\n(2,0)\nADD\nPRINT\nPOP\nPOP\n";
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//! Calculator::new().run(input.as_bytes(), &mut out, &mut err).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "(2,0)+(1,1)\n");
//! assert_eq!(String::from_utf8(err).unwrap(), "ERROR 6 STACK UNDERFLOW\n");
//! ```

pub mod calc;
pub mod command;
pub mod error;
pub mod stack;

pub use calc::{Calculator, LineKind};
pub use command::Command;
pub use error::{CalcError, Reason};
pub use stack::PolyStack;
