//! Lexer for the visual-format language using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Orientation prefixes
    #[token("H")]
    Horizontal,
    #[token("V")]
    Vertical,

    // Relations (longer patterns first)
    #[token("==")]
    Equal,
    #[token(">=")]
    GreaterOrEqual,
    #[token("<=")]
    LessOrEqual,

    // Delimiters
    #[token(":")]
    Colon,
    #[token("|")]
    Pipe,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("-")]
    Dash,
    #[token(",")]
    Comma,
    #[token("@")]
    At,

    // Literals - identifiers must come after keywords
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
}

/// Lex input string into tokens with spans. A character no token matches
/// stops the lexer and returns its span, so malformed input cannot pass by
/// simply being skipped.
pub fn lex(input: &str) -> Result<Vec<(Token, Span)>, Span> {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(t) => Ok((t, span)),
            Err(()) => Err(span),
        })
        .collect()
}
