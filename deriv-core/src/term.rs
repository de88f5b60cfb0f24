//! Parsing of a single term into its coefficient and exponent.

use crate::{
    error::{kind::{EmptyOrMalformedTerm, ExponentIssue, MalformedCoefficient, MalformedExponent}, Error},
    split::RawTerm,
    tokenizer::is_numeral,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sign of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Applies this sign to the given magnitude.
    pub fn apply(self, magnitude: f64) -> f64 {
        match self {
            Self::Positive => magnitude,
            Self::Negative => -magnitude,
        }
    }
}

/// A parsed term of a polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    /// A term containing the variable, `c*x^n`.
    Power {
        /// The sign written before the term.
        sign: Sign,

        /// The magnitude of the coefficient. This is `1` if no coefficient was written.
        coefficient: f64,

        /// The power the variable is raised to. This is `1` if no exponent was written.
        exponent: u32,
    },

    /// A term that does not contain the variable.
    Constant {
        /// The sign written before the term.
        sign: Sign,

        /// The magnitude of the constant.
        value: f64,
    },
}

impl Term {
    /// Returns the coefficient of the term, with its sign applied. For a constant, this is its
    /// value.
    pub fn signed_coefficient(&self) -> f64 {
        match *self {
            Self::Power { sign, coefficient, .. } => sign.apply(coefficient),
            Self::Constant { sign, value } => sign.apply(value),
        }
    }
}

/// Parses a coefficient, which must be a finite integer or decimal numeral.
fn parse_coefficient(text: &str, span: Range<usize>) -> Result<f64, Error> {
    let malformed = || Error::new(vec![span.clone()], MalformedCoefficient { text: text.to_owned() });

    if !is_numeral(text) {
        return Err(malformed());
    }

    // numerals with hundreds of digits parse to infinity
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed()),
    }
}

/// Parses the text written after the variable: either nothing (an exponent of `1`) or `^`
/// followed by a non-negative whole numeral.
fn parse_exponent(text: &str, span: Range<usize>) -> Result<u32, Error> {
    if text.is_empty() {
        return Ok(1);
    }

    let digits = text.strip_prefix('^');
    let issue = match digits {
        None => ExponentIssue::NotANumber,
        Some("") => ExponentIssue::Missing,
        Some(digits) if is_numeral(digits) => match digits.parse::<f64>() {
            Ok(value) if value.fract() != 0.0 => ExponentIssue::Fractional,
            Ok(value) if value > f64::from(u32::MAX) => ExponentIssue::TooLarge,
            // whole and in range, so the cast is exact
            Ok(value) => return Ok(value as u32),
            Err(_) => ExponentIssue::NotANumber,
        },
        Some(digits) if digits.strip_prefix('-').is_some_and(is_numeral) => ExponentIssue::Negative,
        Some(_) => ExponentIssue::NotANumber,
    };

    Err(Error::new(vec![span], MalformedExponent {
        text: digits.unwrap_or(text).to_owned(),
        issue,
    }))
}

/// Parses a term of the expression, differentiating with respect to `variable`.
///
/// A term without `variable` is a constant, and must be a numeral. Otherwise, the term is split
/// at the first occurrence of `variable` into the coefficient before it (`1` if empty) and the
/// exponent after it (`1` if empty, otherwise `^` followed by a non-negative whole numeral).
pub fn parse_term(raw: &RawTerm, variable: char) -> Result<Term, Error> {
    let sign = raw.sign();
    let body = raw.body();
    let body_span = raw.body_span();

    if body.is_empty() {
        return Err(Error::new(vec![raw.span.clone()], EmptyOrMalformedTerm));
    }

    let Some(index) = body.find(variable) else {
        let value = parse_coefficient(body, body_span)?;
        return Ok(Term::Constant { sign, value });
    };

    let variable_end = index + variable.len_utf8();
    let coefficient = match &body[..index] {
        "" => 1.0,
        text => parse_coefficient(text, body_span.start..body_span.start + index)?,
    };
    let exponent = parse_exponent(&body[variable_end..], body_span.start + variable_end..body_span.end)?;

    Ok(Term::Power { sign, coefficient, exponent })
}
