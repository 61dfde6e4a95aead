//! Lexer for the path-template micro-grammar using logos

use logos::Logos;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// `$` followed by one or more digits, e.g. `$1`
    #[regex(r"\$[0-9]+", |lex| lex.slice().to_string())]
    Variable(String),

    /// A `$` that does not start a well-formed variable
    #[token("$")]
    Dollar,

    /// Brace-delimited alternation, e.g. `{md,mdx}`
    #[regex(r"\{[^{}]*\}", |lex| lex.slice().to_string())]
    Extension(String),

    // Everything up to the next special character
    #[regex(r"[^${}]+", |lex| lex.slice().to_string())]
    Literal(String),
}

/// Lex a template into tokens with spans.
///
/// Nothing is skipped: every byte ends up in a token or an error span.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}
