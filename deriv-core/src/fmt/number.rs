//! Utility functions to format coefficients.

/// Trims trailing zeros from the fractional part of a number in decimal notation, along with the
/// decimal point if nothing is left after it.
fn trim_trailing(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Formats a number in decimal notation.
///
/// With no precision, the shortest decimal that round-trips to the same `f64` is used, so whole
/// numbers are printed without a decimal point (`4.0` is printed as `4`). With a precision, the
/// number is rounded to that many fractional digits before trailing zeros are trimmed, which hides
/// floating-point noise such as `0.30000000000000004`.
///
/// Negative zero is printed as `0`.
pub fn fmt_number(n: f64, precision: Option<usize>) -> String {
    let s = match precision {
        Some(precision) => trim_trailing(&format!("{:.*}", precision, n)).to_owned(),
        None => n.to_string(),
    };

    match s.as_str() {
        "-0" => "0".to_owned(),
        _ => s,
    }
}
