//! Axis-neutral constraint chains
//!
//! A chain describes a run of boxes along one axis, each separated from the
//! next (and optionally from the container edges) by a [`Padding`]. Chains
//! are immutable values built left to right; nothing touches the host until
//! [`Chain::horizontal`] or [`Chain::vertical`] resolves the chain into
//! concrete [`Constraint`](crate::constraint::Constraint)s.
//!
//! ```
//! use tackline::{Chain, Padding, View};
//!
//! let container = View::new("container");
//! let a = View::new("a");
//! let b = View::new("b");
//! container.add_subview(&a);
//! container.add_subview(&b);
//!
//! // |-(>=10)-[a]-(10)-[b]
//! let constraints = Chain::from_container(Padding::ge(10.0))
//!     .view(&a)
//!     .gap(10.0)
//!     .view(&b)
//!     .horizontal()
//!     .unwrap();
//! assert_eq!(constraints.len(), 2);
//! ```

mod anchor;
mod builder;
mod error;
mod padding;
mod resolver;

pub use anchor::{Anchor, Edge, Reference};
pub use builder::{ChainHead, Link};
pub use error::ChainError;
pub use padding::{Padding, PaddingKind};
pub use resolver::{AlignHorizontal, AlignVertical};

/// Two adjacent anchors and the padding binding them.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub(crate) lhs: Anchor,
    pub(crate) padding: Padding,
    pub(crate) rhs: Anchor,
}

/// A chain of pairs plus the anchor the next pair would attach to.
///
/// The tail is always the trailing-side anchor of the last element appended,
/// so `gap(..).view(..)` keeps extending the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub(crate) pairs: Vec<Pair>,
    pub(crate) tail: Anchor,
}

impl Chain {
    /// The pairs accumulated so far, in chain order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }
}
