//! Parser for the visual-format layout language
//!
//! Turns format strings like `H:|-(>=10)-[viewA]-(10)-[viewB]-|` into the
//! same [`Constraint`](crate::constraint::Constraint) descriptors the chain
//! builder produces, which makes the two notations directly comparable.
//! Views and metric values are supplied by name through maps.

mod grammar;
pub mod lexer;

pub use grammar::{parse, STANDARD_SPACE};
pub use lexer::Token;
