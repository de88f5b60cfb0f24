//! Aggregation of differentiated terms into a polynomial.

use crate::{derivative::Monomial, step::{Step, StepCollector}};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial in one variable, stored as a map from each exponent to its coefficient.
///
/// Each exponent appears at most once. Iteration is by exponent, regardless of the order in which
/// terms were added.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    terms: BTreeMap<u32, f64>,
}

impl Polynomial {
    /// Creates an empty polynomial, which is equal to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term to the polynomial, combining it with the existing term of the same exponent.
    pub fn add_term(&mut self, term: Monomial) {
        *self.terms.entry(term.exponent).or_insert(0.0) += term.coefficient;
    }

    /// Returns the coefficient of the given exponent, or `0` if there is no such term.
    pub fn coefficient(&self, exponent: u32) -> f64 {
        self.terms.get(&exponent).copied().unwrap_or(0.0)
    }

    /// Returns the highest exponent with a nonzero coefficient, or [`None`] if the polynomial is
    /// zero.
    pub fn degree(&self) -> Option<u32> {
        self.terms_descending()
            .find(|term| term.coefficient != 0.0)
            .map(|term| term.exponent)
    }

    /// Returns the terms of the polynomial, from the highest exponent to the lowest.
    pub fn terms_descending(&self) -> impl Iterator<Item = Monomial> + '_ {
        self.terms
            .iter()
            .rev()
            .map(|(exponent, coefficient)| Monomial::new(*coefficient, *exponent))
    }

    /// Removes every term whose coefficient is zero.
    pub fn prune_zeros(&mut self, steps: &mut dyn StepCollector<Step>) {
        self.terms.retain(|exponent, coefficient| {
            let keep = *coefficient != 0.0;
            if !keep {
                steps.push(Step::DropZero { exponent: *exponent });
            }
            keep
        });
    }
}

impl Extend<Monomial> for Polynomial {
    fn extend<I: IntoIterator<Item = Monomial>>(&mut self, iter: I) {
        for term in iter {
            self.add_term(term);
        }
    }
}

impl FromIterator<Monomial> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
        let mut polynomial = Self::new();
        polynomial.extend(iter);
        polynomial
    }
}

/// Combines the differentiated terms into a polynomial by summing the coefficients of terms that
/// share an exponent, then removes the terms that cancelled out.
pub fn aggregate(
    terms: impl IntoIterator<Item = Monomial>,
    steps: &mut dyn StepCollector<Step>,
) -> Polynomial {
    let mut counts = BTreeMap::<u32, usize>::new();
    let mut polynomial = terms
        .into_iter()
        .inspect(|term| *counts.entry(term.exponent).or_default() += 1)
        .collect::<Polynomial>();

    for (exponent, count) in counts.into_iter().rev() {
        if count > 1 {
            steps.push(Step::CombineLikeTerms { exponent, count });
        }
    }

    polynomial.prune_zeros(steps);
    polynomial
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn combines_like_terms() {
        let polynomial = [
            Monomial::new(2.0, 1),
            Monomial::new(3.0, 0),
            Monomial::new(4.0, 1),
        ]
            .into_iter()
            .collect::<Polynomial>();

        assert_eq!(polynomial.terms_descending().count(), 2);
        assert_eq!(polynomial.coefficient(1), 6.0);
        assert_eq!(polynomial.coefficient(0), 3.0);
        assert_eq!(polynomial.coefficient(5), 0.0);
    }

    #[test]
    fn order_independent() {
        let terms = [Monomial::new(2.0, 1), Monomial::new(3.0, 0), Monomial::new(-1.5, 4)];
        let forward = terms.into_iter().collect::<Polynomial>();
        let backward = terms.into_iter().rev().collect::<Polynomial>();
        assert_eq!(forward, backward);
    }

    #[test]
    fn descending_iteration() {
        let polynomial = [Monomial::new(1.0, 0), Monomial::new(5.0, 7), Monomial::new(2.0, 3)]
            .into_iter()
            .collect::<Polynomial>();
        let exponents = polynomial.terms_descending().map(|term| term.exponent).collect::<Vec<_>>();
        assert_eq!(exponents, [7, 3, 0]);
        assert_eq!(polynomial.degree(), Some(7));
    }

    #[test]
    fn cancelled_terms_are_pruned() {
        let mut steps = Vec::<Step>::new();
        let polynomial = aggregate(
            [Monomial::new(2.0, 1), Monomial::new(-2.0, 1), Monomial::new(3.0, 0)],
            &mut steps,
        );

        assert_eq!(polynomial.terms_descending().count(), 1);
        assert_eq!(polynomial.coefficient(0), 3.0);
        assert_eq!(steps, vec![
            Step::CombineLikeTerms { exponent: 1, count: 2 },
            Step::DropZero { exponent: 1 },
        ]);
    }

    #[test]
    fn zero_polynomial() {
        let polynomial = aggregate([Monomial::new(0.0, 2)], &mut ());
        assert_eq!(polynomial, Polynomial::new());
        assert_eq!(polynomial.degree(), None);

        let unpruned = [Monomial::new(0.0, 2)].into_iter().collect::<Polynomial>();
        assert_eq!(unpruned.terms_descending().count(), 1);
        assert_eq!(unpruned.degree(), None);
    }
}
