use std::fmt;

/// The reason a line of calculator input could not be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The line is not a valid polynomial.
    WrongPoly,

    /// The line is not a known command, or the command name is followed by something other than a
    /// blank.
    WrongCommand,

    /// The argument of `AT` is missing or is not a valid coefficient.
    AtWrongValue,

    /// The stack holds fewer polynomials than the command needs.
    StackUnderflow,

    /// The argument of `DEG_BY` is missing or is not a valid variable index.
    DegByWrongVariable,

    /// The argument of `COMPOSE` is missing or is not a valid count.
    ComposeWrongParameter,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match self {
            Reason::WrongPoly => "WRONG POLY",
            Reason::WrongCommand => "WRONG COMMAND",
            Reason::AtWrongValue => "AT WRONG VALUE",
            Reason::StackUnderflow => "STACK UNDERFLOW",
            Reason::DegByWrongVariable => "DEG BY WRONG VARIABLE",
            Reason::ComposeWrongParameter => "COMPOSE WRONG PARAMETER",
        };
        f.write_str(reason)
    }
}

/// An error that occurred while processing a line of calculator input.
#[derive(Debug)]
pub struct CalcError {
    /// The reason reported to the user.
    pub reason: Reason,

    /// The underlying error, pointing into the line, if there is one.
    pub source: Option<poly_error::Error>,
}

impl CalcError {
    /// Creates an error with no underlying source.
    pub fn new(reason: Reason) -> Self {
        Self { reason, source: None }
    }
}

impl From<Reason> for CalcError {
    fn from(reason: Reason) -> Self {
        Self::new(reason)
    }
}

impl From<poly_parser::Error> for CalcError {
    fn from(err: poly_parser::Error) -> Self {
        Self { reason: Reason::WrongPoly, source: Some(err.into()) }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}
