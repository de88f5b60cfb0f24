use ariadne::Source;
use deriv_error::Error as DerivError;
use std::{fmt, io};

/// Utility enum to package any error that can occur while reading or differentiating input.
#[derive(Debug)]
pub enum Error {
    /// Invalid command line arguments.
    Args(String),

    /// The variable is not a single lowercase letter.
    Variable(String),

    /// The expression is empty, or only whitespace.
    EmptyExpression,

    /// The input could not be read.
    Io(io::Error),

    /// The expression is malformed.
    Derivative(DerivError),
}

impl Error {
    /// Report this error to stderr. Errors in the expression are rendered as reports that point
    /// into `input`.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: ariadne::Report
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Derivative(err) => {
                let report = err.build_report("input");
                if let Err(io_err) = report.eprint(("input", Source::from(input))) {
                    eprintln!("{}", io_err);
                }
            },
            _ => eprintln!("error: {}", self),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Args(msg) => write!(f, "{}", msg),
            Self::Variable(variable) => write!(
                f,
                "invalid variable `{}`: the variable must be a single lowercase letter",
                variable,
            ),
            Self::EmptyExpression => write!(f, "the expression is empty"),
            Self::Io(err) => write!(f, "could not read input: {}", err),
            Self::Derivative(err) => write!(f, "{}", err.message()),
        }
    }
}

impl From<DerivError> for Error {
    fn from(err: DerivError) -> Self {
        Self::Derivative(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use deriv_core::differentiate;
    use super::*;

    #[test]
    fn derivative_error_displays_message() {
        let err = Error::from(differentiate("x^-1", 'x').unwrap_err());
        assert_eq!(err.to_string(), "invalid exponent: `-1`");
    }
}
