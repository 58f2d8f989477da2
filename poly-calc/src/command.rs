use crate::error::Reason;
use poly_core::Coeff;
use poly_parser::numeric::{self, NumericError};
use std::str::FromStr;

/// A calculator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pushes the zero polynomial.
    Zero,

    /// Prints whether the top polynomial is a constant.
    IsCoeff,

    /// Prints whether the top polynomial is zero.
    IsZero,

    /// Pushes a copy of the top polynomial.
    Clone,

    /// Replaces the two topmost polynomials with their sum.
    Add,

    /// Replaces the two topmost polynomials with their product.
    Mul,

    /// Replaces the top polynomial with its negation.
    Neg,

    /// Replaces the two topmost polynomials with the topmost minus the one below it.
    Sub,

    /// Prints whether the two topmost polynomials are equal.
    IsEq,

    /// Prints the total degree of the top polynomial.
    Deg,

    /// Prints the degree of the top polynomial with respect to the given variable.
    DegBy(usize),

    /// Replaces the top polynomial with its value at `x_0` equal to the given value.
    At(Coeff),

    /// Prints the top polynomial.
    Print,

    /// Removes the top polynomial.
    Pop,

    /// Pops the top polynomial, then composes it with the given number of polynomials below it.
    Compose(usize),
}

/// Parses the argument following a command name.
///
/// `rest` is the part of the line after the command name. It must be empty or start with a
/// blank, otherwise the name itself is wrong. The argument must then follow a single space.
fn argument<T>(
    rest: &str,
    reason: Reason,
    parse: fn(&str) -> Result<T, NumericError>,
) -> Result<T, Reason> {
    if !(rest.is_empty() || rest.starts_with([' ', '\t'])) {
        return Err(Reason::WrongCommand);
    }

    let arg = rest.strip_prefix(' ').ok_or(reason)?;
    parse(arg).map_err(|_| reason)
}

impl FromStr for Command {
    type Err = Reason;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if line.contains('\0') {
            return Err(Reason::WrongCommand);
        }

        let command = match line {
            "ZERO" => Command::Zero,
            "IS_COEFF" => Command::IsCoeff,
            "IS_ZERO" => Command::IsZero,
            "CLONE" => Command::Clone,
            "ADD" => Command::Add,
            "MUL" => Command::Mul,
            "NEG" => Command::Neg,
            "SUB" => Command::Sub,
            "IS_EQ" => Command::IsEq,
            "DEG" => Command::Deg,
            "PRINT" => Command::Print,
            "POP" => Command::Pop,
            _ => {
                if let Some(rest) = line.strip_prefix("DEG_BY") {
                    Command::DegBy(argument(rest, Reason::DegByWrongVariable, numeric::parse_param)?)
                } else if let Some(rest) = line.strip_prefix("AT") {
                    Command::At(argument(rest, Reason::AtWrongValue, numeric::parse_coeff)?)
                } else if let Some(rest) = line.strip_prefix("COMPOSE") {
                    Command::Compose(argument(rest, Reason::ComposeWrongParameter, numeric::parse_param)?)
                } else {
                    return Err(Reason::WrongCommand);
                }
            },
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(line: &str) -> Result<Command, Reason> {
        line.parse()
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse("ZERO"), Ok(Command::Zero));
        assert_eq!(parse("IS_EQ"), Ok(Command::IsEq));
        assert_eq!(parse("DEG"), Ok(Command::Deg));
        assert_eq!(parse("POP"), Ok(Command::Pop));
    }

    #[test]
    fn simple_commands_match_exactly() {
        assert_eq!(parse("ZERO "), Err(Reason::WrongCommand));
        assert_eq!(parse("zero"), Err(Reason::WrongCommand));
        assert_eq!(parse("DEG 1"), Err(Reason::WrongCommand));
        assert_eq!(parse("PRINTX"), Err(Reason::WrongCommand));
        assert_eq!(parse("HELLO"), Err(Reason::WrongCommand));
    }

    #[test]
    fn commands_with_arguments() {
        assert_eq!(parse("DEG_BY 0"), Ok(Command::DegBy(0)));
        assert_eq!(parse("DEG_BY 18446744073709551615"), Ok(Command::DegBy(usize::MAX)));
        assert_eq!(parse("AT -5"), Ok(Command::At(-5)));
        assert_eq!(parse("AT -9223372036854775808"), Ok(Command::At(i64::MIN)));
        assert_eq!(parse("COMPOSE 2"), Ok(Command::Compose(2)));
    }

    #[test]
    fn wrong_delimiter() {
        assert_eq!(parse("DEG_BYX"), Err(Reason::WrongCommand));
        assert_eq!(parse("DEG_BY1"), Err(Reason::WrongCommand));
        assert_eq!(parse("ATE"), Err(Reason::WrongCommand));
        assert_eq!(parse("COMPOSEX 1"), Err(Reason::WrongCommand));
        assert_eq!(parse("AT\0 1"), Err(Reason::WrongCommand));
        assert_eq!(parse("AT 1\0"), Err(Reason::WrongCommand));
    }

    #[test]
    fn wrong_argument() {
        assert_eq!(parse("DEG_BY"), Err(Reason::DegByWrongVariable));
        assert_eq!(parse("DEG_BY "), Err(Reason::DegByWrongVariable));
        assert_eq!(parse("DEG_BY\t1"), Err(Reason::DegByWrongVariable));
        assert_eq!(parse("DEG_BY  1"), Err(Reason::DegByWrongVariable));
        assert_eq!(parse("DEG_BY -1"), Err(Reason::DegByWrongVariable));
        assert_eq!(parse("DEG_BY 18446744073709551616"), Err(Reason::DegByWrongVariable));
        assert_eq!(parse("AT"), Err(Reason::AtWrongValue));
        assert_eq!(parse("AT -"), Err(Reason::AtWrongValue));
        assert_eq!(parse("AT 1 "), Err(Reason::AtWrongValue));
        assert_eq!(parse("AT 9223372036854775808"), Err(Reason::AtWrongValue));
        assert_eq!(parse("AT 1a"), Err(Reason::AtWrongValue));
        assert_eq!(parse("COMPOSE"), Err(Reason::ComposeWrongParameter));
        assert_eq!(parse("COMPOSE -0"), Err(Reason::ComposeWrongParameter));
        assert_eq!(parse("COMPOSE +1"), Err(Reason::ComposeWrongParameter));
    }
}
