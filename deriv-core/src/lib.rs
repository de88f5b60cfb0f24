//! Symbolic differentiation of polynomials in a single variable.
//!
//! An expression such as `x^2+3x-6` is differentiated term by term with the power rule:
//!
//! 1. [`split::split_terms`] cuts the expression into signed terms at each `+` and `-`.
//! 2. [`term::parse_term`] reads the coefficient and exponent of each term.
//! 3. [`Term::derivative`](term::Term::derivative) applies the power rule to each term.
//! 4. [`polynomial::aggregate`] combines the terms that share an exponent.
//! 5. [`fmt::PolynomialFormatter`] writes the result in canonical form.
//!
//! ```
//! use deriv_core::differentiate;
//!
//! assert_eq!(differentiate("x^2+3x", 'x').unwrap(), "2x+3");
//! assert_eq!(differentiate("z^4+.5z^2-6", 'z').unwrap(), "4z^3+z");
//! assert_eq!(differentiate("5", 'x').unwrap(), "");
//! ```
//!
//! The expression must not contain whitespace. Only flat sums of terms `c*x^n` are supported,
//! where `c` is an integer or decimal numeral written directly before the variable, and `n` is a
//! non-negative integer.

pub mod derivative;
pub mod error;
pub mod fmt;
pub mod polynomial;
pub mod split;
pub mod step;
pub mod term;
pub mod tokenizer;

use derivative::{differentiate_term, Monomial};
use error::{kind::CoefficientOverflow, Error};
use fmt::FormatOptions;
use polynomial::{aggregate, Polynomial};
use split::split_terms;
use std::ops::Range;
use step::{Step, StepCollector};
use term::{parse_term, Term};

/// Computes the derivative of the expression with respect to `variable`, recording each rule that
/// was applied.
///
/// Every term is parsed before any is differentiated, so nothing is recorded if the expression
/// is malformed. If a coefficient of the derivative is not finite, a [`CoefficientOverflow`] is
/// returned instead, pointing at the terms that produced it.
pub fn derivative_with(
    expression: &str,
    variable: char,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Polynomial, Error> {
    let raw_terms = split_terms(expression);
    let terms = raw_terms
        .iter()
        .map(|raw| parse_term(raw, variable))
        .collect::<Result<Vec<Term>, _>>()?;

    let mut differentiated = Vec::<(Range<usize>, Monomial)>::new();
    for (raw, term) in raw_terms.iter().zip(&terms) {
        let Some(monomial) = differentiate_term(term, steps) else {
            continue;
        };
        if !monomial.coefficient.is_finite() {
            return Err(Error::new(vec![raw.span.clone()], CoefficientOverflow));
        }
        differentiated.push((raw.span.clone(), monomial));
    }

    let polynomial = aggregate(differentiated.iter().map(|(_, monomial)| *monomial), steps);

    // like terms can overflow when summed
    let overflowed = polynomial.terms_descending().find(|term| !term.coefficient.is_finite());
    if let Some(overflowed) = overflowed {
        let spans = differentiated
            .into_iter()
            .filter(|(_, monomial)| monomial.exponent == overflowed.exponent)
            .map(|(span, _)| span)
            .collect();
        return Err(Error::new(spans, CoefficientOverflow));
    }

    Ok(polynomial)
}

/// Computes the derivative of the expression with respect to `variable`.
pub fn derivative(expression: &str, variable: char) -> Result<Polynomial, Error> {
    derivative_with(expression, variable, &mut ())
}

/// Computes the derivative of the expression with respect to `variable`, and writes it with the
/// given options, recording each rule that was applied.
pub fn differentiate_with(
    expression: &str,
    variable: char,
    options: FormatOptions,
    steps: &mut dyn StepCollector<Step>,
) -> Result<String, Error> {
    let polynomial = derivative_with(expression, variable, steps)?;
    Ok(polynomial.display(variable, options).to_string())
}

/// Computes the derivative of the expression with respect to `variable`, and writes it in
/// canonical form.
///
/// The derivative of an expression without `variable` is written as the empty string.
pub fn differentiate(expression: &str, variable: char) -> Result<String, Error> {
    differentiate_with(expression, variable, FormatOptions::default(), &mut ())
}
