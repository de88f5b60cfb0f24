use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("^")]
    Exp,

    /// An integer or decimal numeral, such as `3`, `3.`, `.5`, or `2.75`.
    #[regex(r"[0-9]+\.?[0-9]*")]
    #[regex(r"\.[0-9]+")]
    Num,

    /// A single letter. Each letter is its own token, so `xy` is two tokens.
    #[regex(r"[a-zA-Z]")]
    Letter,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token separates two terms.
    pub fn is_term_delimiter(self) -> bool {
        matches!(self, TokenKind::Add | TokenKind::Sub)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
