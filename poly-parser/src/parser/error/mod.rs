pub mod kind;

use ariadne::{Report, Source};
use poly_error::ErrorKind;
use std::{io, ops::Range};

/// The class of a parsing error, which tells apart input that is not a polynomial at all from
/// input that is a polynomial whose numbers do not fit their domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The input does not follow the grammar of a polynomial.
    Syntax,

    /// The input follows the grammar, but an exponent or coefficient is out of range.
    Range,
}

/// A general parsing error.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,

    /// Whether the error is a syntax or a range error.
    ///
    /// Range errors are fatal: they are only reported for input that is otherwise well-formed, so
    /// the parser stops and reports them immediately instead of backtracking.
    pub class: ErrorClass,
}

impl Error {
    /// Creates a new syntax error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind), class: ErrorClass::Syntax }
    }

    /// Creates a new range error with the given spans and kind.
    pub fn new_range(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind), class: ErrorClass::Range }
    }

    /// Returns true if this is a range error.
    pub fn is_range(&self) -> bool {
        self.class == ErrorClass::Range
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer.
    pub fn write_report(&self, src_id: &str, input: &str, out: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), out)
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl From<Error> for poly_error::Error {
    fn from(err: Error) -> Self {
        Self { spans: err.spans, kind: err.kind }
    }
}
