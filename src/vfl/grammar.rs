//! Parser implementation using chumsky

use std::collections::HashMap;

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::constraint::{Attribute, Constraint, Priority, Relation};
use crate::error::{ParseError, Span};
use crate::vfl::lexer::Token;
use crate::view::{Item, View};

/// The platform standard space used for a bare `-` connection.
pub const STANDARD_SPACE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// A value in a predicate: a literal number or a name from the metrics map.
#[derive(Debug, Clone)]
enum Operand {
    Number(f64),
    Metric(String, Span),
}

#[derive(Debug, Clone)]
struct Predicate {
    relation: Option<Relation>,
    operand: Operand,
    priority: Option<f64>,
}

/// The space between two endpoints of a sequence.
#[derive(Debug, Clone)]
enum Gap {
    /// Adjacent endpoints, zero space.
    None,
    /// A bare `-`, the platform standard space.
    Standard,
    /// An explicit predicate list, one constraint each.
    Predicates(Vec<Predicate>),
}

/// What a connection leads to: another view, or the closing superview edge.
#[derive(Debug, Clone)]
enum Next {
    Element(String, Span),
    Superview,
}

#[derive(Debug, Clone)]
struct Format {
    orientation: Orientation,
    /// The gap after a leading `|`, when the sequence starts at the superview.
    leading: Option<Gap>,
    first: (String, Span),
    steps: Vec<(Gap, Next)>,
}

/// Parse a visual-format string into constraints.
///
/// `views` maps the names in `[brackets]` to view handles; `metrics` maps
/// names used in predicates to numbers. Superview edges (`|`) resolve
/// through the adjacent view's parent.
pub fn parse(
    input: &str,
    views: &HashMap<String, View>,
    metrics: &HashMap<String, f64>,
) -> Result<Vec<Constraint>, Vec<ParseError>> {
    let len = input.len();

    let tokens = crate::vfl::lexer::lex(input).map_err(|span| {
        vec![ParseError::Syntax {
            span,
            message: "unrecognized character".to_string(),
            expected: Vec::new(),
        }]
    })?;
    let token_iter = tokens.into_iter().map(|(tok, span)| (tok, span.into()));
    let token_stream = Stream::from_iter(token_iter).map((len..len).into(), |(t, s): (_, _)| (t, s));

    let format = format_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| -> Vec<ParseError> { errs.into_iter().map(|e| e.into()).collect() })?;

    resolve(&format, views, metrics).map_err(|e| vec![e])
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> Span {
    e.start()..e.end()
}

fn format_parser<'a, I>() -> impl Parser<'a, I, Format, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let number = select! {
        Token::Number(n) => n,
    };

    let identifier = select! {
        Token::Ident(s) => s,
    };

    let orientation = choice((
        just(Token::Horizontal).to(Orientation::Horizontal),
        just(Token::Vertical).to(Orientation::Vertical),
    ));

    let relation = choice((
        just(Token::Equal).to(Relation::Equal),
        just(Token::GreaterOrEqual).to(Relation::GreaterOrEqual),
        just(Token::LessOrEqual).to(Relation::LessOrEqual),
    ));

    let operand = choice((
        number.clone().map(Operand::Number),
        identifier
            .clone()
            .map_with(|name, e| Operand::Metric(name, span_range(&e.span()))),
    ));

    let predicate = relation
        .or_not()
        .then(operand)
        .then(just(Token::At).ignore_then(number).or_not())
        .map(|((relation, operand), priority)| Predicate {
            relation,
            operand,
            priority,
        });

    // A connection: a bare `-` or `-(predicates)-`.
    let connection = just(Token::Dash)
        .ignore_then(
            predicate
                .separated_by(just(Token::Comma))
                .at_least(1)
                .collect::<Vec<_>>()
                .delimited_by(just(Token::ParenOpen), just(Token::ParenClose))
                .then_ignore(just(Token::Dash))
                .or_not(),
        )
        .map(|predicates| match predicates {
            Some(list) => Gap::Predicates(list),
            None => Gap::Standard,
        });

    // Endpoints written back to back mean a zero gap.
    let gap = connection.or_not().map(|c| c.unwrap_or(Gap::None));

    let element = identifier
        .map_with(|name, e| (name, span_range(&e.span())))
        .delimited_by(just(Token::BracketOpen), just(Token::BracketClose));

    let next = choice((
        element
            .clone()
            .map(|(name, span)| Next::Element(name, span)),
        just(Token::Pipe).to(Next::Superview),
    ));

    orientation
        .then_ignore(just(Token::Colon))
        .then(just(Token::Pipe).ignore_then(gap.clone()).or_not())
        .then(element)
        .then(gap.then(next).repeated().collect::<Vec<_>>())
        .then_ignore(end())
        .try_map(|(((orientation, leading), first), steps), span| {
            // The superview edge can only close the sequence.
            if steps
                .iter()
                .rev()
                .skip(1)
                .any(|(_, next)| matches!(next, Next::Superview))
            {
                return Err(Rich::custom(span, "'|' can only appear at the ends"));
            }
            Ok(Format {
                orientation,
                leading,
                first,
                steps,
            })
        })
}

fn resolve(
    format: &Format,
    views: &HashMap<String, View>,
    metrics: &HashMap<String, f64>,
) -> Result<Vec<Constraint>, ParseError> {
    let (leading_attr, trailing_attr) = match format.orientation {
        Orientation::Horizontal => (Attribute::Leading, Attribute::Trailing),
        Orientation::Vertical => (Attribute::Top, Attribute::Bottom),
    };

    let lookup = |name: &str, span: &Span| -> Result<View, ParseError> {
        views.get(name).cloned().ok_or_else(|| ParseError::UnknownView {
            name: name.to_string(),
            span: span.clone(),
        })
    };
    let superview_of = |view: &View| -> Result<View, ParseError> {
        view.parent()
            .ok_or_else(|| crate::chain::ChainError::missing_container(view.name()).into())
    };

    let mut constraints = Vec::new();
    let first = lookup(&format.first.0, &format.first.1)?;

    // Emit right-relates-to-left, same as the chain resolver.
    let mut emit = |gap: &Gap,
                    left: &(Item, Attribute),
                    right: &(Item, Attribute)|
     -> Result<(), ParseError> {
        let expanded: Vec<(Relation, f64, Priority)> = match gap {
            Gap::None => vec![(Relation::Equal, 0.0, Priority::REQUIRED)],
            Gap::Standard => vec![(Relation::Equal, STANDARD_SPACE, Priority::REQUIRED)],
            Gap::Predicates(predicates) => {
                let mut expanded = Vec::with_capacity(predicates.len());
                for predicate in predicates {
                    let value = match &predicate.operand {
                        Operand::Number(n) => *n,
                        Operand::Metric(name, span) => *metrics.get(name).ok_or_else(|| {
                            ParseError::UnknownMetric {
                                name: name.clone(),
                                span: span.clone(),
                            }
                        })?,
                    };
                    let priority = predicate
                        .priority
                        .map(|p| Priority::new(p as f32))
                        .unwrap_or(Priority::REQUIRED);
                    expanded.push((
                        predicate.relation.unwrap_or(Relation::Equal),
                        value,
                        priority,
                    ));
                }
                expanded
            }
        };
        for (relation, constant, priority) in expanded {
            constraints.push(Constraint::new(
                right.0.clone(),
                right.1,
                relation,
                left.0.clone(),
                left.1,
                1.0,
                constant,
                priority,
            ));
        }
        Ok(())
    };

    let mut current = first.clone();
    if let Some(gap) = &format.leading {
        let superview = superview_of(&first)?;
        emit(
            gap,
            &(Item::from(&superview), leading_attr),
            &(Item::from(&first), leading_attr),
        )?;
    }
    let mut left: (Item, Attribute) = (Item::from(&first), trailing_attr);

    for (gap, next) in &format.steps {
        match next {
            Next::Element(name, span) => {
                let view = lookup(name, span)?;
                emit(gap, &left, &(Item::from(&view), leading_attr))?;
                left = (Item::from(&view), trailing_attr);
                current = view;
            }
            Next::Superview => {
                let superview = superview_of(&current)?;
                emit(gap, &left, &(Item::from(&superview), trailing_attr))?;
            }
        }
    }

    Ok(constraints)
}
