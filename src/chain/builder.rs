use crate::chain::anchor::{Anchor, Edge, Reference};
use crate::chain::padding::Padding;
use crate::chain::{Chain, Pair};
use crate::constraint::Priority;
use crate::view::View;

impl Chain {
    /// Begin a chain at a bare view, like `[a]` in visual format.
    pub fn start(view: &View) -> Chain {
        Chain {
            pairs: Vec::new(),
            tail: Anchor::new(Edge::Trailing, Reference::This, view),
        }
    }

    /// Begin a chain at the container's leading edge, like `|-(pad)-`.
    /// The container itself is looked up from the first attached view when
    /// the chain is resolved.
    pub fn from_container(padding: impl Into<Padding>) -> ChainHead {
        ChainHead {
            padding: padding.into(),
            reference: Reference::Container,
        }
    }

    /// Begin a chain at the container's safe-area leading edge, like
    /// `|>-(pad)-`.
    pub fn from_safe_area(padding: impl Into<Padding>) -> ChainHead {
        ChainHead {
            padding: padding.into(),
            reference: Reference::ContainerSafeArea,
        }
    }

    /// Add padding after the current tail, like `-(pad)-`. The returned
    /// [`Link`] must be completed with a view or a container edge.
    pub fn gap(self, padding: impl Into<Padding>) -> Link {
        Link {
            chain: self,
            padding: padding.into(),
        }
    }
}

/// A chain opened at a container edge, waiting for its first view.
#[derive(Debug, Clone)]
pub struct ChainHead {
    padding: Padding,
    reference: Reference,
}

impl ChainHead {
    /// Re-tag the opening padding's priority.
    pub fn at_priority(self, priority: impl Into<Priority>) -> ChainHead {
        ChainHead {
            padding: self.padding.with_priority(priority),
            ..self
        }
    }

    /// Attach the first view: `|-(pad)-[a]`.
    pub fn view(self, view: &View) -> Chain {
        Chain {
            pairs: vec![Pair {
                lhs: Anchor::new(Edge::Leading, self.reference, view),
                padding: self.padding,
                rhs: Anchor::new(Edge::Leading, Reference::This, view),
            }],
            tail: Anchor::new(Edge::Trailing, Reference::This, view),
        }
    }

    /// Close straight back onto the container's trailing edge without any
    /// view in between: `|-(pad)-|`. The resulting pair spans the container's
    /// own edges, which only pins down the container width; `subject` names
    /// the view whose container is meant.
    pub fn to_container(self, subject: &View) -> Chain {
        let rhs = Anchor::new(Edge::Trailing, Reference::Container, subject);
        Chain {
            pairs: vec![Pair {
                lhs: Anchor::new(Edge::Leading, self.reference, subject),
                padding: self.padding,
                rhs: rhs.clone(),
            }],
            tail: rhs,
        }
    }
}

/// A pending padding between the chain so far and its next element.
#[derive(Debug, Clone)]
pub struct Link {
    chain: Chain,
    padding: Padding,
}

impl Link {
    /// Re-tag the pending padding's priority. This applies to the pair being
    /// formed only; later gaps carry their own priorities.
    pub fn at_priority(self, priority: impl Into<Priority>) -> Link {
        Link {
            padding: self.padding.with_priority(priority),
            ..self
        }
    }

    /// Continue the chain with another view: `-(pad)-[b]`.
    pub fn view(self, view: &View) -> Chain {
        let mut pairs = self.chain.pairs;
        pairs.push(Pair {
            lhs: self.chain.tail,
            padding: self.padding,
            rhs: Anchor::new(Edge::Leading, Reference::This, view),
        });
        Chain {
            pairs,
            tail: Anchor::new(Edge::Trailing, Reference::This, view),
        }
    }

    /// Close the chain onto the container's trailing edge: `-(pad)-|`.
    pub fn container(self) -> Chain {
        self.close(Reference::Container)
    }

    /// Close the chain onto the container's safe-area trailing edge:
    /// `-(pad)-<|`.
    pub fn safe_area(self) -> Chain {
        self.close(Reference::ContainerSafeArea)
    }

    fn close(self, reference: Reference) -> Chain {
        let subject = self.chain.tail.view().clone();
        let rhs = Anchor::new(Edge::Trailing, reference, &subject);
        let mut pairs = self.chain.pairs;
        pairs.push(Pair {
            lhs: self.chain.tail,
            padding: self.padding,
            rhs: rhs.clone(),
        });
        Chain { pairs, tail: rhs }
    }
}
