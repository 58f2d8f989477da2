use crate::{
    command::Command,
    error::{CalcError, Reason},
    stack::PolyStack,
};
use poly_core::Poly;
use poly_parser::parse_poly;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, trace};

/// The kind of a line of calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// An empty line, or a comment starting with `#`.
    Ignored,

    /// A command, which starts with an ASCII letter.
    Command,

    /// Anything else, which must be a polynomial.
    Poly,
}

impl LineKind {
    /// Classifies the given line by its first character.
    pub fn of(line: &str) -> Self {
        match line.bytes().next() {
            None | Some(b'#') => LineKind::Ignored,
            Some(b) if b.is_ascii_alphabetic() => LineKind::Command,
            Some(_) => LineKind::Poly,
        }
    }
}

/// A stack-based polynomial calculator.
///
/// Each line of input either pushes a polynomial on the stack, or executes a command on the
/// polynomials at the top of the stack.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    stack: PolyStack,
}

impl Calculator {
    /// Creates a calculator with an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the operand stack.
    pub fn stack(&self) -> &PolyStack {
        &self.stack
    }

    /// Processes one line of input, without its line terminator.
    ///
    /// Returns the text to print for the line, if the line produces any. If the line could not
    /// be processed, the stack is left unchanged.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>, CalcError> {
        match LineKind::of(line) {
            LineKind::Ignored => Ok(None),
            LineKind::Command => {
                let command = line.parse::<Command>()?;
                trace!(?command, "executing command");
                Ok(self.execute(command)?)
            },
            LineKind::Poly => {
                let poly = parse_poly(line)?;
                self.stack.push(poly);
                Ok(None)
            },
        }
    }

    /// Executes the given command on the stack.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>, Reason> {
        let stack = &mut self.stack;
        let output = match command {
            Command::Zero => {
                stack.push(Poly::zero());
                None
            },
            Command::IsCoeff => Some(flag(stack.top()?.is_coeff())),
            Command::IsZero => Some(flag(stack.top()?.is_zero())),
            Command::Clone => {
                let top = stack.top()?.clone();
                stack.push(top);
                None
            },
            Command::Add => {
                let (p, q) = stack.pop_two()?;
                stack.push(p + q);
                None
            },
            Command::Mul => {
                let (p, q) = stack.pop_two()?;
                stack.push(p * q);
                None
            },
            Command::Neg => {
                let top = stack.pop()?;
                stack.push(-top);
                None
            },
            Command::Sub => {
                let (p, q) = stack.pop_two()?;
                stack.push(p - q);
                None
            },
            Command::IsEq => {
                let (p, q) = stack.top_two()?;
                Some(flag(p == q))
            },
            Command::Deg => Some(stack.top()?.deg().to_string()),
            Command::DegBy(var) => Some(stack.top()?.deg_by(var).to_string()),
            Command::At(x) => {
                let top = stack.pop()?;
                stack.push(top.at(x));
                None
            },
            Command::Print => Some(stack.top()?.to_string()),
            Command::Pop => {
                stack.pop()?;
                None
            },
            Command::Compose(count) => {
                stack.require(count.checked_add(1).ok_or(Reason::StackUnderflow)?)?;
                let top = stack.pop()?;
                let substitutions = stack.pop_many(count)?;
                stack.push(top.compose(&substitutions));
                None
            },
        };

        Ok(output)
    }

    /// Processes every line of the given input, writing results to `out` and errors to `err`.
    ///
    /// Errors are written as `ERROR <line> <reason>` and do not stop processing. Line numbers
    /// start at 1 and count every line, including ignored ones.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write, mut err: impl Write) -> io::Result<()> {
        for (idx, line) in input.split(b'\n').enumerate() {
            let line = line?;
            let line = String::from_utf8_lossy(&line);
            let number = idx + 1;

            match self.process_line(&line) {
                Ok(Some(output)) => writeln!(out, "{}", output)?,
                Ok(None) => (),
                Err(error) => {
                    debug!(line = number, reason = %error.reason, "line rejected");
                    writeln!(err, "ERROR {} {}", number, error.reason)?;
                },
            }
        }

        info!(remaining = self.stack.len(), "input exhausted");
        Ok(())
    }
}

/// Formats a boolean the way the calculator prints it.
fn flag(value: bool) -> String {
    u8::from(value).to_string()
}
