//! Differentiation of a single term with the power rule.

use crate::{step::{Step, StepCollector}, term::Term};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A signed term `c*x^n`, without the variable it is written in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monomial {
    /// The coefficient, including its sign.
    pub coefficient: f64,

    /// The power the variable is raised to.
    pub exponent: u32,
}

impl Monomial {
    /// Creates a new monomial.
    pub const fn new(coefficient: f64, exponent: u32) -> Self {
        Self { coefficient, exponent }
    }
}

impl From<Term> for Monomial {
    /// Converts the term to a monomial. A constant becomes a monomial with an exponent of `0`.
    fn from(term: Term) -> Self {
        match term {
            Term::Power { exponent, .. } => Self::new(term.signed_coefficient(), exponent),
            Term::Constant { .. } => Self::new(term.signed_coefficient(), 0),
        }
    }
}

impl Term {
    /// Computes the derivative of this term with the power rule, `d/dx c*x^n = (c*n)*x^(n-1)`.
    ///
    /// Returns [`None`] if the derivative is zero because the term does not depend on the
    /// variable. This is the case for constants, and for `c*x^0`.
    pub fn derivative(&self) -> Option<Monomial> {
        match *self {
            Term::Constant { .. } | Term::Power { exponent: 0, .. } => None,
            Term::Power { exponent, .. } => Some(Monomial::new(
                self.signed_coefficient() * f64::from(exponent),
                exponent - 1,
            )),
        }
    }
}

/// Computes the derivative of the term, recording the rule that was applied.
pub fn differentiate_term(term: &Term, steps: &mut dyn StepCollector<Step>) -> Option<Monomial> {
    let derivative = term.derivative();
    match derivative {
        Some(to) => steps.push(Step::PowerRule { from: Monomial::from(*term), to }),
        None => steps.push(Step::ConstantRule { value: term.signed_coefficient() }),
    }
    derivative
}
