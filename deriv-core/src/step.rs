//! Tracing of the rules applied while differentiating an expression.

use crate::{
    derivative::Monomial,
    fmt::{FormatOptions, MonomialFormatter},
};

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// want to know the steps taken by an algorithm.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// A rule applied while differentiating a polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// `d/dx c = 0`
    ///
    /// Also applied to `c*x^0`, whose value is the constant `c`.
    ConstantRule {
        /// The value of the constant that vanished.
        value: f64,
    },

    /// `d/dx c*x^n = (c*n)*x^(n-1)`
    PowerRule {
        /// The term before differentiation.
        from: Monomial,

        /// The differentiated term.
        to: Monomial,
    },

    /// `a*x^n + b*x^n = (a+b)*x^n`
    CombineLikeTerms {
        /// The exponent shared by the combined terms.
        exponent: u32,

        /// How many terms were combined.
        count: usize,
    },

    /// `0*x^n` is dropped from the result.
    DropZero {
        /// The exponent of the dropped term.
        exponent: u32,
    },
}

impl Step {
    /// Describes this step in words, writing terms in the given variable.
    pub fn describe(&self, variable: char) -> String {
        let term = |monomial: &Monomial| {
            MonomialFormatter::new(monomial, variable, FormatOptions::default()).to_string()
        };

        match self {
            Self::ConstantRule { value } => format!("constant rule: {} vanishes", value),
            Self::PowerRule { from, to } => format!("power rule: {} -> {}", term(from), term(to)),
            Self::CombineLikeTerms { exponent, count } => {
                let like = term(&Monomial::new(1.0, *exponent));
                format!("combine like terms: {} terms in {}", count, like)
            },
            Self::DropZero { exponent } => {
                let like = term(&Monomial::new(1.0, *exponent));
                format!("drop zero term: 0 * {}", like)
            },
        }
    }
}
