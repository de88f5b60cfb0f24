//! Splits an expression into its signed terms.

use crate::{term::Sign, tokenizer::{tokenize_complete, TokenKind}};
use std::ops::Range;

/// A term of an expression, as written in the source, including its leading sign (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTerm<'source> {
    /// The text of the term, starting with its `+` or `-` sign if one was written.
    pub text: &'source str,

    /// The region of the source code that this term originated from.
    pub span: Range<usize>,
}

impl<'source> RawTerm<'source> {
    /// The length in bytes of the written sign: `1` if the term starts with `+` or `-`, otherwise
    /// `0`.
    fn sign_len(&self) -> usize {
        usize::from(self.text.starts_with(['+', '-']))
    }

    /// Returns the sign of the term. A term without a written sign is positive.
    pub fn sign(&self) -> Sign {
        if self.text.starts_with('-') {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Returns the text of the term without its sign.
    pub fn body(&self) -> &'source str {
        &self.text[self.sign_len()..]
    }

    /// Returns the region of the source code covered by [`RawTerm::body`].
    pub fn body_span(&self) -> Range<usize> {
        self.span.start + self.sign_len()..self.span.end
    }
}

/// Splits the expression into terms at every `+` and `-`, keeping each sign attached to the term
/// that follows it.
///
/// A sign at the very start of the expression belongs to the first term, and a sign directly
/// after `^` belongs to the exponent it precedes, so neither starts a new term. A sign at the very
/// end of the expression is discarded, so `x^2+` is the single term `x^2`. Otherwise,
/// concatenating the text of the returned terms gives back the expression.
///
/// Empty terms inside the expression are not filtered out: `x++1` and the empty expression each
/// produce a term with an empty body, which is rejected when the term is parsed. The result is
/// never empty.
pub fn split_terms(expression: &str) -> Vec<RawTerm<'_>> {
    let mut terms = Vec::new();
    let mut start = 0;
    let mut prev_kind = None;

    for token in tokenize_complete(expression).iter() {
        if token.kind.is_term_delimiter()
            && token.span.start > start
            && prev_kind != Some(TokenKind::Exp)
        {
            terms.push(RawTerm {
                text: &expression[start..token.span.start],
                span: start..token.span.start,
            });
            start = token.span.start;
        }
        prev_kind = Some(token.kind);
    }

    let last = RawTerm {
        text: &expression[start..],
        span: start..expression.len(),
    };
    if terms.is_empty() || !last.body().is_empty() {
        terms.push(last);
    }
    terms
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Splits the expression and returns the text of each term.
    fn texts(expression: &str) -> Vec<&str> {
        split_terms(expression).into_iter().map(|term| term.text).collect()
    }

    #[test]
    fn keeps_signs() {
        assert_eq!(texts("x^2+3x-6"), ["x^2", "+3x", "-6"]);
        assert_eq!(texts("-z^4+.5z^2"), ["-z^4", "+.5z^2"]);
    }

    #[test]
    fn leading_sign_belongs_to_first_term() {
        assert_eq!(texts("+x"), ["+x"]);
        assert_eq!(texts("-5"), ["-5"]);
    }

    #[test]
    fn sign_after_caret_stays_in_exponent() {
        assert_eq!(texts("x^-1+2"), ["x^-1", "+2"]);
    }

    #[test]
    fn empty_terms_are_kept() {
        assert_eq!(texts("x++2"), ["x", "+", "+2"]);
        assert_eq!(texts("x++"), ["x", "+"]);
        assert_eq!(texts(""), [""]);
        assert_eq!(texts("-"), ["-"]);
    }

    #[test]
    fn trailing_sign_is_discarded() {
        assert_eq!(texts("x^2+"), ["x^2"]);
        assert_eq!(texts("3x-"), ["3x"]);
        assert_eq!(split_terms("x^2+")[0].span, 0..3);
    }

    #[test]
    fn rejoining_reconstructs_expression() {
        for expression in ["x^2+3x", "z^4+.5z^2-6", "-x-x-x", "3x^2+-4", "+", "a^+b*-c"] {
            let rejoined = split_terms(expression)
                .into_iter()
                .map(|term| term.text)
                .collect::<String>();
            assert_eq!(rejoined, expression);
        }
    }

    #[test]
    fn spans_and_bodies() {
        let terms = split_terms("4x-12x^3");
        assert_eq!(terms[1].span, 2..8);
        assert_eq!(terms[1].sign(), Sign::Negative);
        assert_eq!(terms[1].body(), "12x^3");
        assert_eq!(terms[1].body_span(), 3..8);
        assert_eq!(terms[0].sign(), Sign::Positive);
        assert_eq!(terms[0].body_span(), 0..2);
    }
}
