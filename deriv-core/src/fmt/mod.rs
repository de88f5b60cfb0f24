//! Formatting of polynomials in canonical form.
//!
//! A polynomial is written with its exponents in descending order, with terms whose coefficient
//! is zero left out. The first term has no leading `+`, and each later term is preceded by `+` or
//! `-`. A coefficient of `1` is not written before the variable, though it is written for the
//! constant term. A polynomial with no remaining terms is written as the empty string.
//!
//! ```
//! use deriv_core::{derivative::Monomial, fmt::FormatOptions, polynomial::Polynomial};
//!
//! let polynomial = [Monomial::new(-1.0, 1), Monomial::new(4.0, 3), Monomial::new(-6.0, 0)]
//!     .into_iter()
//!     .collect::<Polynomial>();
//! assert_eq!(polynomial.display('z', FormatOptions::default()).to_string(), "4z^3-z-6");
//! ```

mod number;

use crate::{derivative::Monomial, polynomial::Polynomial};
use std::fmt::{Display, Formatter, Result};

pub use number::fmt_number;

/// How exponents are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Plain text, such as `4z^3+z`.
    ///
    /// This is the default option, and produces the canonical form.
    #[default]
    Plain,

    /// LaTeX, with each exponent in braces, such as `4z^{3}+z`.
    Latex,
}

/// Formatting options for polynomials.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// The number of fractional digits to round coefficients to. If [`None`], each coefficient is
    /// written as the shortest decimal that represents it exactly.
    ///
    /// This option might be useful to trim the errors introduced by floating-point arithmetic
    /// (e.g. `0.30000000000000004`). A coefficient that rounds to zero is left out.
    pub precision: Option<usize>,

    /// How to write exponents.
    pub notation: Notation,
}

impl FormatOptions {
    /// Wraps the given [`FormatOptions`] into a builder for further customization.
    pub fn into_builder(self) -> FormatOptionsBuilder {
        FormatOptionsBuilder(self)
    }
}

/// A builder for [`FormatOptions`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the precision.
    pub fn precision(mut self, precision: Option<usize>) -> Self {
        self.0.precision = precision;
        self
    }

    /// Sets the notation.
    pub fn notation(mut self, notation: Notation) -> Self {
        self.0.notation = notation;
        self
    }

    /// Builds the [`FormatOptions`].
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

/// Writes a term without its sign: the coefficient's magnitude, then the variable and exponent.
fn fmt_unsigned(
    f: &mut Formatter<'_>,
    magnitude: &str,
    exponent: u32,
    variable: char,
    notation: Notation,
) -> Result {
    if exponent == 0 {
        return write!(f, "{}", magnitude);
    }

    if magnitude != "1" {
        write!(f, "{}", magnitude)?;
    }
    write!(f, "{}", variable)?;

    match (exponent, notation) {
        (1, _) => Ok(()),
        (_, Notation::Plain) => write!(f, "^{}", exponent),
        (_, Notation::Latex) => write!(f, "^{{{}}}", exponent),
    }
}

/// A [`Display`] wrapper that writes a [`Polynomial`] in canonical form.
#[derive(Debug, Clone, Copy)]
pub struct PolynomialFormatter<'a> {
    polynomial: &'a Polynomial,
    variable: char,
    options: FormatOptions,
}

impl<'a> PolynomialFormatter<'a> {
    /// Creates a formatter that writes the polynomial in the given variable.
    pub fn new(polynomial: &'a Polynomial, variable: char, options: FormatOptions) -> Self {
        Self { polynomial, variable, options }
    }
}

impl Display for PolynomialFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut first = true;

        for term in self.polynomial.terms_descending() {
            let magnitude = fmt_number(term.coefficient.abs(), self.options.precision);
            if term.coefficient == 0.0 || magnitude == "0" {
                continue;
            }

            let negative = term.coefficient < 0.0;
            if negative {
                write!(f, "-")?;
            } else if !first {
                write!(f, "+")?;
            }
            first = false;

            fmt_unsigned(f, &magnitude, term.exponent, self.variable, self.options.notation)?;
        }

        Ok(())
    }
}

/// A [`Display`] wrapper that writes a single [`Monomial`], with a leading `-` if it is negative.
///
/// Unlike [`PolynomialFormatter`], a zero coefficient is written as `0`.
#[derive(Debug, Clone, Copy)]
pub struct MonomialFormatter<'a> {
    monomial: &'a Monomial,
    variable: char,
    options: FormatOptions,
}

impl<'a> MonomialFormatter<'a> {
    /// Creates a formatter that writes the monomial in the given variable.
    pub fn new(monomial: &'a Monomial, variable: char, options: FormatOptions) -> Self {
        Self { monomial, variable, options }
    }
}

impl Display for MonomialFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let magnitude = fmt_number(self.monomial.coefficient.abs(), self.options.precision);
        if magnitude == "0" {
            return write!(f, "0");
        }

        if self.monomial.coefficient < 0.0 {
            write!(f, "-")?;
        }
        fmt_unsigned(f, &magnitude, self.monomial.exponent, self.variable, self.options.notation)
    }
}

impl Polynomial {
    /// Returns a wrapper that writes this polynomial in the given variable with the given options.
    pub fn display(&self, variable: char, options: FormatOptions) -> PolynomialFormatter<'_> {
        PolynomialFormatter::new(self, variable, options)
    }
}
