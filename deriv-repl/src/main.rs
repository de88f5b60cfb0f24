//! Command line tool to differentiate polynomials in one variable.
//!
//! Pass an expression and a variable to differentiate once, e.g. `deriv-repl "x^2 + 3x" x`.
//! Without them, the tool prompts for an expression and then a variable until `exit` (or `e`) is
//! entered. When stdin is not a terminal, it reads expressions and variables from alternating
//! lines instead.
//!
//! Flags:
//!
//! - `--steps`: print the rules applied while differentiating to stderr.
//! - `--latex`: write exponents in LaTeX notation, e.g. `4z^{3}`.
//! - `--precision <digits>`: round coefficients to the given number of fractional digits.

mod error;

use deriv_core::{
    differentiate_with,
    fmt::{FormatOptions, FormatOptionsBuilder, Notation},
    step::Step,
};
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};

const USAGE: &str = "usage: deriv-repl [--steps] [--latex] [--precision <digits>] [<expression> <variable>]";

/// Configuration read from the command line.
#[derive(Debug, Default, PartialEq)]
struct Config {
    /// How to format the derivatives.
    options: FormatOptions,

    /// Whether to print the rules applied while differentiating.
    steps: bool,

    /// Whether the usage was requested.
    help: bool,

    /// The expression and variable, if given.
    positional: Vec<String>,
}

/// Parses the command line arguments, excluding the program name.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Config, Error> {
    let mut config = Config::default();
    let mut builder = FormatOptionsBuilder::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--steps" => config.steps = true,
            "--latex" => builder = builder.notation(Notation::Latex),
            "--precision" => {
                let digits = args.next()
                    .ok_or_else(|| Error::Args("`--precision` requires a number of digits".to_owned()))?;
                let digits = digits.parse::<usize>()
                    .map_err(|_| Error::Args(format!("invalid precision: `{}`", digits)))?;
                builder = builder.precision(Some(digits));
            },
            "-h" | "--help" => config.help = true,
            flag if flag.starts_with("--") => return Err(Error::Args(format!("unknown flag `{}`", flag))),
            _ => config.positional.push(arg),
        }
    }

    config.options = builder.build();
    Ok(config)
}

/// Parses the variable to differentiate with respect to.
fn parse_variable(input: &str) -> Result<char, Error> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => Ok(c),
        _ => Err(Error::Variable(input.trim().to_owned())),
    }
}

/// Removes all whitespace from the expression.
fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Returns true if the input is a command to leave the interactive mode.
fn is_exit(input: &str) -> bool {
    matches!(input.trim(), "exit" | "e")
}

/// Differentiates the expression, which must already be stripped of whitespace, and returns the
/// line to print. The steps taken are printed to stderr if requested.
fn eval(expression: &str, variable: &str, config: &Config) -> Result<String, Error> {
    if expression.is_empty() {
        return Err(Error::EmptyExpression);
    }

    let variable = parse_variable(variable)?;
    let mut steps = Vec::<Step>::new();
    let result = differentiate_with(expression, variable, config.options, &mut steps)?;

    if config.steps {
        for step in &steps {
            eprintln!("  {}", step.describe(variable));
        }
    }

    // also covers terms that round to zero
    let result = if result.is_empty() { "0" } else { &result };
    Ok(format!("f'({}) = {}", variable, result))
}

/// Differentiates the expression and prints the result or the error. Returns true on success.
fn eval_print(expression: &str, variable: &str, config: &Config) -> bool {
    let expression = strip_whitespace(expression);
    match eval(&expression, variable, config) {
        Ok(output) => {
            println!("{}", output);
            true
        },
        Err(err) => {
            err.report_to_stderr(&expression);
            false
        },
    }
}

/// Prompts for an expression and a variable, and prints the derivative. Returns `false` if the
/// user asked to exit.
fn process_line(rl: &mut DefaultEditor, config: &Config) -> Result<bool, ReadlineError> {
    let input = rl.readline("expression> ")?;
    if input.trim().is_empty() {
        return Ok(true);
    }
    if is_exit(&input) {
        return Ok(false);
    }

    rl.add_history_entry(&input)?;

    let variable = rl.readline("variable> ")?;
    eval_print(&input, &variable, config);
    Ok(true)
}

/// Runs the interactive mode.
fn repl(config: &Config) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    loop {
        match process_line(&mut rl, config) {
            Ok(true) => (),
            Ok(false) | Err(ReadlineError::Eof | ReadlineError::Interrupted) => return ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        }
    }
}

/// Reads expressions and variables from alternating lines of the input. Returns true if every
/// expression was differentiated.
///
/// Reading stops with an error at the first line that cannot be read.
fn read_pairs(input: impl BufRead, config: &Config) -> bool {
    let mut lines = input.lines();
    let mut ok = true;

    loop {
        let expression = match lines.next().transpose() {
            Ok(Some(expression)) => expression,
            Ok(None) => break,
            Err(err) => {
                Error::from(err).report_to_stderr("");
                return false;
            },
        };
        if expression.trim().is_empty() {
            continue;
        }
        if is_exit(&expression) {
            break;
        }

        let variable = match lines.next().transpose() {
            Ok(Some(variable)) => variable,
            Ok(None) => {
                eprintln!("error: missing variable for `{}`", expression.trim());
                return false;
            },
            Err(err) => {
                Error::from(err).report_to_stderr("");
                return false;
            },
        };
        ok &= eval_print(&expression, &variable, config);
    }

    ok
}

fn main() -> ExitCode {
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}\n{}", err, USAGE);
            return ExitCode::FAILURE;
        },
    };

    if config.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let succeeded = match config.positional.as_slice() {
        [expression, variable] => eval_print(expression, variable, &config),
        [] if io::stdin().is_terminal() => return repl(&config),
        [] => read_pairs(io::stdin().lock(), &config),
        _ => {
            eprintln!("error: expected an expression and a variable\n{}", USAGE);
            false
        },
    };

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Result<Config, Error> {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn flags() {
        let config = args(&["--latex", "--precision", "3", "x^2", "x", "--steps"]).unwrap();
        assert_eq!(config.options.notation, Notation::Latex);
        assert_eq!(config.options.precision, Some(3));
        assert!(config.steps);
        assert_eq!(config.positional, ["x^2", "x"]);
    }

    #[test]
    fn negative_expression_is_positional() {
        let config = args(&["-x^2", "x"]).unwrap();
        assert_eq!(config.positional, ["-x^2", "x"]);
        assert_eq!(config.options, FormatOptions::default());
    }

    #[test]
    fn bad_flags() {
        assert!(matches!(args(&["--precision"]), Err(Error::Args(_))));
        assert!(matches!(args(&["--precision", "many"]), Err(Error::Args(_))));
        assert!(matches!(args(&["--verbose"]), Err(Error::Args(_))));
        assert!(args(&["--help"]).unwrap().help);
    }

    #[test]
    fn variables() {
        assert_eq!(parse_variable(" z ").unwrap(), 'z');
        for bad in ["", "xy", "X", "1", "é"] {
            assert!(matches!(parse_variable(bad), Err(Error::Variable(_))), "{bad}");
        }
    }

    #[test]
    fn exit_words() {
        assert!(is_exit("exit"));
        assert!(is_exit(" e "));
        assert!(!is_exit("ex"));
        assert!(!is_exit("e^2"));
    }

    #[test]
    fn whitespace_is_stripped() {
        assert_eq!(strip_whitespace(" x^2 + 3 x\t- 6 "), "x^2+3x-6");
    }

    #[test]
    fn eval_output() {
        let config = Config::default();
        assert_eq!(eval("x^2+3x", "x", &config).unwrap(), "f'(x) = 2x+3");
        assert_eq!(eval("5", "x", &config).unwrap(), "f'(x) = 0");
        assert!(matches!(eval("x^-1", "x", &config), Err(Error::Derivative(_))));
        assert!(matches!(eval("x^2", "xx", &config), Err(Error::Variable(_))));
        assert_eq!(eval("x^2+", "x", &config).unwrap(), "f'(x) = 2x");
    }

    #[test]
    fn empty_expression() {
        let config = Config::default();
        assert!(matches!(eval("", "x", &config), Err(Error::EmptyExpression)));
        assert!(!eval_print("", "x", &config));
        assert!(!eval_print(" \t ", "x", &config));
    }

    #[test]
    fn options_are_applied() {
        let config = args(&["--latex", "--precision", "2"]).unwrap();
        assert_eq!(eval("x^3+.1x^2", "x", &config).unwrap(), "f'(x) = 3x^{2}+0.2x");
        assert_eq!(eval(".001x^2", "x", &config).unwrap(), "f'(x) = 0");
    }

    #[test]
    fn pairs() {
        let config = Config::default();
        assert!(read_pairs("x^2 + 3x\nx\n\nz^4\nz\nexit\nnot read\n".as_bytes(), &config));
        assert!(!read_pairs("x^2\nx\nx^-1\nx\n".as_bytes(), &config));
        assert!(!read_pairs("x^2\n".as_bytes(), &config));
    }

    #[test]
    fn unreadable_line_stops_pairs() {
        let config = Config::default();
        assert!(!read_pairs(&b"x^2\nx\n\xff\xfe\nx\n"[..], &config));
        assert!(!read_pairs(&b"x^2\n\xff\n"[..], &config));
    }
}
