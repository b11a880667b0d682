//! Error types for visual-format parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::chain::ChainError;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
    #[error("unknown view '{name}' at {span:?}")]
    UnknownView { name: String, span: Span },
    #[error("unknown metric '{name}' at {span:?}")]
    UnknownMetric { name: String, span: Span },
    #[error(transparent)]
    Layout(#[from] ChainError),
}

impl ParseError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message, note) = match self {
            ParseError::Syntax {
                span,
                message,
                expected,
            } => {
                let note = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };
                (span.clone(), message.clone(), note)
            }
            ParseError::UnknownView { name, span } => (
                span.clone(),
                format!("unknown view '{}'", name),
                "\nEvery name in [brackets] must appear in the views map".to_string(),
            ),
            ParseError::UnknownMetric { name, span } => (
                span.clone(),
                format!("unknown metric '{}'", name),
                "\nEvery name used as a value must appear in the metrics map".to_string(),
            ),
            ParseError::Layout(err) => return err.to_string(),
        };

        let mut buf = Vec::new();
        Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(format!("{}{}", message, note))
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }
}

impl<'a> From<chumsky::error::Rich<'a, crate::vfl::Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, crate::vfl::Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of input".to_string(),
                };
                format!("Unexpected {}", found_str)
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &crate::vfl::Token) -> String {
    use crate::vfl::Token;
    match tok {
        Token::Ident(s) => format!("identifier '{}'", s),
        Token::Number(n) => format!("number {}", n),
        Token::Horizontal => "'H'".to_string(),
        Token::Vertical => "'V'".to_string(),
        Token::Colon => "':'".to_string(),
        Token::Pipe => "'|'".to_string(),
        Token::BracketOpen => "'['".to_string(),
        Token::BracketClose => "']'".to_string(),
        Token::ParenOpen => "'('".to_string(),
        Token::ParenClose => "')'".to_string(),
        Token::Dash => "'-'".to_string(),
        Token::Comma => "','".to_string(),
        Token::At => "'@'".to_string(),
        Token::Equal => "'=='".to_string(),
        Token::GreaterOrEqual => "'>='".to_string(),
        Token::LessOrEqual => "'<='".to_string(),
    }
}
