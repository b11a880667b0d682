use crate::chain::anchor::{Axis, Reference};
use crate::chain::{Chain, ChainError};
use crate::constraint::{Attribute, Constraint, Priority, Relation};
use crate::view::{Item, View};

/// Cross-axis alignment for a horizontal chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignVertical {
    Top,
    FirstBaseline,
    CenterY,
    LastBaseline,
    Bottom,
}

impl AlignVertical {
    fn attribute(self) -> Attribute {
        match self {
            AlignVertical::Top => Attribute::Top,
            AlignVertical::FirstBaseline => Attribute::FirstBaseline,
            AlignVertical::CenterY => Attribute::CenterY,
            AlignVertical::LastBaseline => Attribute::LastBaseline,
            AlignVertical::Bottom => Attribute::Bottom,
        }
    }
}

/// Cross-axis alignment for a vertical chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignHorizontal {
    Leading,
    Left,
    CenterX,
    Trailing,
    Right,
}

impl AlignHorizontal {
    fn attribute(self) -> Attribute {
        match self {
            AlignHorizontal::Leading => Attribute::Leading,
            AlignHorizontal::Left => Attribute::Left,
            AlignHorizontal::CenterX => Attribute::CenterX,
            AlignHorizontal::Trailing => Attribute::Trailing,
            AlignHorizontal::Right => Attribute::Right,
        }
    }
}

impl Chain {
    /// Resolve along the horizontal axis. Leading/trailing anchors become
    /// leading/trailing attributes, so the result follows the layout
    /// direction of the host.
    pub fn horizontal(&self) -> Result<Vec<Constraint>, ChainError> {
        self.resolve(Axis::Horizontal, None)
    }

    /// Resolve along the vertical axis: leading becomes top, trailing bottom.
    pub fn vertical(&self) -> Result<Vec<Constraint>, ChainError> {
        self.resolve(Axis::Vertical, None)
    }

    /// Resolve horizontally and additionally tie every view of the chain
    /// together on the given vertical attribute.
    pub fn horizontal_aligned(
        &self,
        align: AlignVertical,
    ) -> Result<Vec<Constraint>, ChainError> {
        self.resolve(Axis::Horizontal, Some(align.attribute()))
    }

    /// Resolve vertically and additionally tie every view of the chain
    /// together on the given horizontal attribute.
    pub fn vertical_aligned(
        &self,
        align: AlignHorizontal,
    ) -> Result<Vec<Constraint>, ChainError> {
        self.resolve(Axis::Vertical, Some(align.attribute()))
    }

    fn resolve(
        &self,
        axis: Axis,
        align: Option<Attribute>,
    ) -> Result<Vec<Constraint>, ChainError> {
        let mut constraints = Vec::new();
        for pair in &self.pairs {
            let (lhs_item, lhs_attribute) = pair.lhs.resolve(axis)?;
            let (rhs_item, rhs_attribute) = pair.rhs.resolve(axis)?;
            // The right edge sits at the left edge plus the padding, so the
            // right anchor is the constraint's first item.
            for (relation, constant, priority) in pair.padding.expanded() {
                constraints.push(Constraint::new(
                    rhs_item.clone(),
                    rhs_attribute,
                    relation,
                    lhs_item.clone(),
                    lhs_attribute,
                    1.0,
                    constant,
                    priority,
                ));
            }
        }
        if let Some(attribute) = align {
            let subjects = self.aligned_subjects();
            for window in subjects.windows(2) {
                constraints.push(Constraint::new(
                    Item::from(&window[1]),
                    attribute,
                    Relation::Equal,
                    Item::from(&window[0]),
                    attribute,
                    1.0,
                    0.0,
                    Priority::REQUIRED,
                ));
            }
        }
        Ok(constraints)
    }

    /// The chain's own views in order, consecutive duplicates collapsed.
    /// Container anchors carry a subject view too, but only the views the
    /// chain actually lays out get cross-aligned.
    fn aligned_subjects(&self) -> Vec<View> {
        let mut subjects: Vec<View> = Vec::new();
        let mut push = |view: &View| {
            if subjects.last() != Some(view) {
                subjects.push(view.clone());
            }
        };
        for pair in &self.pairs {
            if pair.lhs.reference == Reference::This {
                push(pair.lhs.view());
            }
            if pair.rhs.reference == Reference::This {
                push(pair.rhs.view());
            }
        }
        subjects
    }
}
