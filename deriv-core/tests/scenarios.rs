use deriv_core::{
    differentiate,
    differentiate_with,
    error::kind::{
        CoefficientOverflow,
        EmptyOrMalformedTerm,
        ExponentIssue,
        MalformedCoefficient,
        MalformedExponent,
    },
    fmt::{FormatOptionsBuilder, Notation},
    split::split_terms,
};
use pretty_assertions::assert_eq;

/// Differentiates the expression, panicking if it is malformed.
fn diff(expression: &str, variable: char) -> String {
    differentiate(expression, variable)
        .unwrap_or_else(|err| panic!("`{expression}` failed to differentiate: {:?}", err.kind))
}

#[test]
fn power_and_linear() {
    assert_eq!(diff("x^2+3x", 'x'), "2x+3");
}

#[test]
fn decimal_coefficient_and_constant() {
    assert_eq!(diff("z^4+.5z^2-6", 'z'), "4z^3+z");
}

#[test]
fn constant_term_vanishes() {
    assert_eq!(diff("x^2+3x+5", 'x'), "2x+3");
}

#[test]
fn linear_term() {
    assert_eq!(diff("2x", 'x'), "2");
}

#[test]
fn pure_constant() {
    assert_eq!(diff("5", 'x'), "");
    assert_eq!(diff("-2.5+7", 'x'), "");
}

#[test]
fn negative_exponent() {
    let err = differentiate("x^-1", 'x').unwrap_err();
    assert_eq!(
        err.downcast_ref::<MalformedExponent>(),
        Some(&MalformedExponent { text: "-1".to_owned(), issue: ExponentIssue::Negative }),
    );
}

#[test]
fn unit_power() {
    assert_eq!(diff("x^2", 'x'), "2x");
    assert_eq!(diff("x^3", 'x'), "3x^2");
    assert_eq!(diff("x^10", 'x'), "10x^9");
    assert_eq!(diff("x", 'x'), "1");
    assert_eq!(diff("-x", 'x'), "-1");
}

#[test]
fn term_order_does_not_matter() {
    assert_eq!(diff("x^2+3x", 'x'), diff("3x+x^2", 'x'));
    assert_eq!(diff("3x+x^2", 'x'), "2x+3");
    assert_eq!(diff("-6+.5z^2+z^4", 'z'), "4z^3+z");
}

#[test]
fn like_terms_combine() {
    assert_eq!(diff("x^3+2x^3-x", 'x'), "9x^2-1");
    assert_eq!(diff("x^2-x^2+4", 'x'), "");
    assert_eq!(diff("2x^2-x^2", 'x'), "2x");
}

#[test]
fn leading_negative() {
    assert_eq!(diff("-3x^2+x", 'x'), "-6x+1");
    assert_eq!(diff("+x^4", 'x'), "4x^3");
}

#[test]
fn other_variable() {
    assert_eq!(diff("t^3-4t", 't'), "3t^2-4");
}

#[test]
fn zero_exponent_is_constant() {
    assert_eq!(diff("7x^0+x", 'x'), "1");
}

#[test]
fn fractional_results() {
    assert_eq!(diff("1.5x^2", 'x'), "3x");
    assert_eq!(diff("0.25x^3", 'x'), "0.75x^2");
}

#[test]
fn options() {
    let options = FormatOptionsBuilder::new()
        .notation(Notation::Latex)
        .precision(Some(3))
        .build();
    let result = differentiate_with("x^11+.1x^3", 'x', options, &mut ()).unwrap();
    assert_eq!(result, "11x^{10}+0.3x^{2}");
}

#[test]
fn malformed_input() {
    assert!(differentiate("x^2++3", 'x').unwrap_err().is::<EmptyOrMalformedTerm>());
    assert!(differentiate("x^2++", 'x').unwrap_err().is::<EmptyOrMalformedTerm>());
    assert!(differentiate("+", 'x').unwrap_err().is::<EmptyOrMalformedTerm>());
    assert!(differentiate("", 'x').unwrap_err().is::<EmptyOrMalformedTerm>());
    assert!(differentiate("3*x", 'x').unwrap_err().is::<MalformedCoefficient>());
    assert!(differentiate("x^2.5", 'x').unwrap_err().is::<MalformedExponent>());
}

#[test]
fn trailing_operator_is_discarded() {
    assert_eq!(diff("x^2+", 'x'), "2x");
    assert_eq!(diff("z^4+.5z^2-6-", 'z'), "4z^3+z");
    assert_eq!(diff("5+", 'x'), "");
}

#[test]
fn overflow_is_an_error() {
    let huge = format!("1{}", "0".repeat(308));
    for expression in [format!("{huge}x^2"), format!("{huge}x^2-{huge}x^2")] {
        let err = differentiate(&expression, 'x').unwrap_err();
        assert!(err.is::<CoefficientOverflow>(), "`{expression}` gave {:?}", err.kind);
    }
}

#[test]
fn split_rejoins() {
    for expression in ["x^2+3x", "z^4+.5z^2-6", "-x+1-2x^3", "x^-1"] {
        let rejoined = split_terms(expression)
            .iter()
            .map(|term| term.text)
            .collect::<String>();
        assert_eq!(rejoined, expression);
    }
}
