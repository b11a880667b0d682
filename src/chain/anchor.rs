use crate::chain::error::ChainError;
use crate::constraint::Attribute;
use crate::view::{Item, View};

/// The axis a chain is resolved along. Chains themselves are axis-neutral;
/// the axis is chosen at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// Which end of the axis an anchor refers to, before the axis is known.
/// Leading maps to leading/top, trailing to trailing/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Leading,
    Trailing,
}

/// Whose edge the anchor means: the subject view's own edge, its container's
/// edge, or the container's safe-area edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    This,
    Container,
    ContainerSafeArea,
}

/// One endpoint of a chain pair: an edge of a view, or of the view's
/// container, on an axis yet to be chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub(crate) edge: Edge,
    pub(crate) reference: Reference,
    pub(crate) view: View,
}

impl Anchor {
    pub(crate) fn new(edge: Edge, reference: Reference, view: &View) -> Self {
        Anchor {
            edge,
            reference,
            view: view.clone(),
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn reference(&self) -> Reference {
        self.reference
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Pick the concrete item and attribute this anchor stands for on the
    /// given axis. Container references need the subject view to have a
    /// parent at this point.
    pub(crate) fn resolve(&self, axis: Axis) -> Result<(Item, Attribute), ChainError> {
        let attribute = match (axis, self.edge) {
            (Axis::Horizontal, Edge::Leading) => Attribute::Leading,
            (Axis::Horizontal, Edge::Trailing) => Attribute::Trailing,
            (Axis::Vertical, Edge::Leading) => Attribute::Top,
            (Axis::Vertical, Edge::Trailing) => Attribute::Bottom,
        };
        let item = match self.reference {
            Reference::This => Item::from(&self.view),
            Reference::Container => {
                let parent = self
                    .view
                    .parent()
                    .ok_or_else(|| ChainError::missing_container(self.view.name()))?;
                Item::from(&parent)
            }
            Reference::ContainerSafeArea => {
                let parent = self
                    .view
                    .parent()
                    .ok_or_else(|| ChainError::missing_container(self.view.name()))?;
                Item::from(&parent.safe_area_guide())
            }
        };
        Ok((item, attribute))
    }
}
