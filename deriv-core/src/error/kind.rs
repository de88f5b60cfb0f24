use ariadne::Fmt;
use deriv_attrs::ErrorKind;
use deriv_error::{ErrorKind, EXPR};
use std::fmt;

/// The coefficient of a term, or the value of a constant term, is not an integer or decimal
/// numeral.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid coefficient: `{}`", text),
    labels = ["this is not a number"],
    help = format!(
        "coefficients must be integers or decimals, like {} or {}",
        "3".fg(EXPR),
        ".5".fg(EXPR),
    ),
)]
pub struct MalformedCoefficient {
    /// The text that was found in place of the coefficient.
    pub text: String,
}

/// Why an exponent was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExponentIssue {
    /// Nothing follows the `^`.
    Missing,

    /// The exponent is not a numeral.
    NotANumber,

    /// The exponent is negative.
    Negative,

    /// The exponent has a fractional part.
    Fractional,

    /// The exponent does not fit in 32 bits.
    TooLarge,
}

impl fmt::Display for ExponentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "add an exponent here"),
            Self::NotANumber => write!(f, "this is not a number"),
            Self::Negative => write!(f, "this exponent is negative"),
            Self::Fractional => write!(f, "this exponent is not a whole number"),
            Self::TooLarge => write!(f, "this exponent is too large"),
        }
    }
}

/// The exponent of a term is not a non-negative whole numeral.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid exponent: `{}`", text),
    labels = [issue.to_string()],
    help = format!(
        "only non-negative integer powers are supported, like {} or {}",
        "x^2".fg(EXPR),
        "x".fg(EXPR),
    ),
)]
pub struct MalformedExponent {
    /// The text that was found after the variable.
    pub text: String,

    /// What is wrong with the exponent.
    pub issue: ExponentIssue,
}

/// A term has no content, for example because two operators are next to each other.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing term",
    labels = [format!("add a {} here", "term".fg(EXPR))],
    help = "each `+` or `-` must be followed by a term",
)]
pub struct EmptyOrMalformedTerm;

/// A coefficient of the derivative is too large to be represented, even though every numeral in
/// the expression is. There is one span for each term that contributed to it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "coefficient overflow",
    labels = std::iter::repeat("the derivative of this term is too large"),
    help = "use smaller coefficients or exponents",
)]
pub struct CoefficientOverflow;
