pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer.
///
/// Every character of the input is covered by exactly one token, since anything unrecognized
/// becomes a [`TokenKind::Symbol`].
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // `.` does not match a newline, which the lexer reports as an error
        let kind = result.unwrap_or(TokenKind::Symbol);
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

/// Returns true if the entire input is a single numeral token, such as `3`, `.5`, or `2.75`.
pub fn is_numeral(input: &str) -> bool {
    let mut lexer = tokenize(input);
    matches!(lexer.next(), Some(Ok(TokenKind::Num))) && lexer.next().is_none()
}
