//! Whole-box alignment policies
//!
//! Aligns one view or guide inside another with a small set of policies
//! ("fill", "center", pin to an edge, golden-section centering) instead of a
//! chain. The item being aligned does not have to be a child of the target.
//!
//! Insets behave as if applied to the target's bounds first: a `fill` keeps
//! the inset paddings exactly, while a `center` shifts the centerline by half
//! the inset difference and additionally keeps the item inside the inset
//! bounds.

use crate::constraint::{Attribute, Constraint, Priority, Relation};
use crate::view::Item;

/// Edge insets applied to the target's bounds before aligning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Insets {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on all four edges.
    pub fn uniform(value: f64) -> Self {
        Insets::new(value, value, value, value)
    }
}

/// How to align along the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizontal {
    /// Pin both edges to the target's (inset) edges.
    Fill,
    Left,
    /// Left for LTR locales, right for RTL.
    Leading,
    Center,
    /// Center on the golden-section line of the target.
    Golden,
    /// Center on the line splitting the target left-to-right in this ratio.
    Ratio(f64),
    Right,
    /// Right for LTR locales, left for RTL.
    Trailing,
}

/// How to align along the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vertical {
    /// Pin both edges to the target's (inset) edges.
    Fill,
    Top,
    FirstBaseline,
    Center,
    /// Center on the golden-section line of the target, which reads better
    /// than the exact middle for standalone content.
    Golden,
    /// Center on the line splitting the target top-to-bottom in this ratio.
    Ratio(f64),
    Bottom,
    LastBaseline,
}

/// The constraints aligning `item` inside `to` under the given policies.
/// Pass `None` for an axis to leave it unconstrained. All constraints are
/// required; activation is up to the caller.
pub fn constraints(
    item: impl Into<Item>,
    to: impl Into<Item>,
    horizontal: Option<Horizontal>,
    vertical: Option<Vertical>,
    insets: Insets,
) -> Vec<Constraint> {
    let item = item.into();
    let to = to.into();
    let mut constraints = Vec::new();
    if let Some(policy) = horizontal {
        emit(&item, &to, &policy, insets, &mut constraints);
    }
    if let Some(policy) = vertical {
        emit(&item, &to, &policy, insets, &mut constraints);
    }
    constraints
}

/// Converts a split ratio into the `multiplier` of a center constraint.
///
/// A ratio describes where the aligned item's center should divide the
/// target (top-to-bottom or left-to-right), but center constraints relate
/// distances to centers, not edges, so the multiplier is
/// `(2 * ratio) / (1 + ratio)`. A ratio of 1 yields multiplier 1, the plain
/// center.
pub fn center_multiplier(ratio: f64) -> f64 {
    (2.0 * ratio) / (1.0 + ratio)
}

/// The golden ratio used by the `Golden` policies, adjusted up 110% since
/// the mathematical section tends to look too low in practice.
pub const GOLDEN: f64 = 1.47093999 * 1.10;

fn emit(
    item: &Item,
    to: &Item,
    policy: &dyn AlignmentPolicy,
    insets: Insets,
    out: &mut Vec<Constraint>,
) {
    match policy.shape() {
        Shape::Fill => {
            out.push(equal(item, to, policy.attribute(), 1.0, policy.inset(insets)));
            out.push(equal(
                item,
                to,
                policy.inverse_attribute(),
                1.0,
                -policy.inverse_inset(insets),
            ));
        }
        Shape::Pin => {
            out.push(equal(item, to, policy.attribute(), 1.0, policy.inset(insets)));
            // Keep the view in bounds on the opposite side.
            out.push(Constraint::new(
                item.clone(),
                policy.inverse_attribute(),
                policy.in_bounds_relation(),
                to.clone(),
                policy.inverse_attribute(),
                1.0,
                policy.inverse_inset(insets),
                Priority::REQUIRED,
            ));
        }
        Shape::Center { multiplier } => {
            out.push(equal(
                item,
                to,
                policy.attribute(),
                multiplier,
                policy.inset(insets),
            ));
            // Keep the view in bounds on both sides.
            let (lead, lead_inset, trail, trail_inset) = policy.center_bounds(insets);
            out.push(Constraint::new(
                item.clone(),
                lead,
                Relation::GreaterOrEqual,
                to.clone(),
                lead,
                1.0,
                lead_inset,
                Priority::REQUIRED,
            ));
            out.push(Constraint::new(
                item.clone(),
                trail,
                Relation::LessOrEqual,
                to.clone(),
                trail,
                1.0,
                -trail_inset,
                Priority::REQUIRED,
            ));
        }
    }
}

fn equal(item: &Item, to: &Item, attribute: Attribute, multiplier: f64, constant: f64) -> Constraint {
    Constraint::new(
        item.clone(),
        attribute,
        Relation::Equal,
        to.clone(),
        attribute,
        multiplier,
        constant,
        Priority::REQUIRED,
    )
}

enum Shape {
    Fill,
    Pin,
    Center { multiplier: f64 },
}

/// The per-policy attribute/inset table shared by both axes.
trait AlignmentPolicy {
    fn shape(&self) -> Shape;
    /// The pinned attribute; the leading edge for fills.
    fn attribute(&self) -> Attribute;
    /// The opposite attribute, used for the in-bounds side of pins and the
    /// trailing edge of fills.
    fn inverse_attribute(&self) -> Attribute;
    /// The relation keeping the inverse attribute in bounds when pinning.
    fn in_bounds_relation(&self) -> Relation;
    fn inset(&self, insets: Insets) -> f64;
    fn inverse_inset(&self, insets: Insets) -> f64;
    /// Bound attributes and insets for centering, in leading-trailing order.
    fn center_bounds(&self, insets: Insets) -> (Attribute, f64, Attribute, f64);
}

impl AlignmentPolicy for Horizontal {
    fn shape(&self) -> Shape {
        match self {
            Horizontal::Fill => Shape::Fill,
            Horizontal::Left | Horizontal::Leading | Horizontal::Right | Horizontal::Trailing => {
                Shape::Pin
            }
            Horizontal::Center => Shape::Center { multiplier: 1.0 },
            Horizontal::Golden => Shape::Center {
                multiplier: center_multiplier(1.0 / GOLDEN),
            },
            Horizontal::Ratio(ratio) => Shape::Center {
                multiplier: center_multiplier(*ratio),
            },
        }
    }

    fn attribute(&self) -> Attribute {
        match self {
            Horizontal::Center | Horizontal::Golden | Horizontal::Ratio(_) => Attribute::CenterX,
            Horizontal::Left | Horizontal::Fill => Attribute::Left,
            Horizontal::Leading => Attribute::Leading,
            Horizontal::Right => Attribute::Right,
            Horizontal::Trailing => Attribute::Trailing,
        }
    }

    fn inverse_attribute(&self) -> Attribute {
        match self {
            Horizontal::Center | Horizontal::Golden | Horizontal::Ratio(_) => Attribute::CenterX,
            Horizontal::Left => Attribute::Right,
            Horizontal::Leading => Attribute::Trailing,
            Horizontal::Right => Attribute::Left,
            Horizontal::Trailing => Attribute::Leading,
            Horizontal::Fill => Attribute::Right,
        }
    }

    fn in_bounds_relation(&self) -> Relation {
        match self {
            Horizontal::Left | Horizontal::Leading => Relation::LessOrEqual,
            Horizontal::Right | Horizontal::Trailing => Relation::GreaterOrEqual,
            _ => Relation::Equal,
        }
    }

    fn inset(&self, insets: Insets) -> f64 {
        match self {
            Horizontal::Center | Horizontal::Golden | Horizontal::Ratio(_) => {
                (insets.left - insets.right) * 0.5
            }
            Horizontal::Left | Horizontal::Leading | Horizontal::Fill => insets.left,
            Horizontal::Right | Horizontal::Trailing => -insets.right,
        }
    }

    fn inverse_inset(&self, insets: Insets) -> f64 {
        match self {
            Horizontal::Center | Horizontal::Golden | Horizontal::Ratio(_) => {
                (insets.left - insets.right) * 0.5
            }
            Horizontal::Left | Horizontal::Leading => -insets.right,
            Horizontal::Right | Horizontal::Trailing => insets.left,
            Horizontal::Fill => insets.right,
        }
    }

    fn center_bounds(&self, insets: Insets) -> (Attribute, f64, Attribute, f64) {
        (Attribute::Left, insets.left, Attribute::Right, insets.right)
    }
}

impl AlignmentPolicy for Vertical {
    fn shape(&self) -> Shape {
        match self {
            Vertical::Fill => Shape::Fill,
            Vertical::Top | Vertical::FirstBaseline | Vertical::Bottom | Vertical::LastBaseline => {
                Shape::Pin
            }
            Vertical::Center => Shape::Center { multiplier: 1.0 },
            Vertical::Golden => Shape::Center {
                multiplier: center_multiplier(1.0 / GOLDEN),
            },
            Vertical::Ratio(ratio) => Shape::Center {
                multiplier: center_multiplier(*ratio),
            },
        }
    }

    fn attribute(&self) -> Attribute {
        match self {
            Vertical::Center | Vertical::Golden | Vertical::Ratio(_) => Attribute::CenterY,
            Vertical::Top | Vertical::Fill => Attribute::Top,
            Vertical::FirstBaseline => Attribute::FirstBaseline,
            Vertical::Bottom => Attribute::Bottom,
            Vertical::LastBaseline => Attribute::LastBaseline,
        }
    }

    fn inverse_attribute(&self) -> Attribute {
        match self {
            Vertical::Center | Vertical::Golden | Vertical::Ratio(_) => Attribute::CenterY,
            Vertical::Top => Attribute::Bottom,
            Vertical::FirstBaseline => Attribute::LastBaseline,
            Vertical::Bottom => Attribute::Top,
            Vertical::LastBaseline => Attribute::FirstBaseline,
            Vertical::Fill => Attribute::Bottom,
        }
    }

    fn in_bounds_relation(&self) -> Relation {
        match self {
            Vertical::Top | Vertical::FirstBaseline => Relation::LessOrEqual,
            Vertical::Bottom | Vertical::LastBaseline => Relation::GreaterOrEqual,
            _ => Relation::Equal,
        }
    }

    fn inset(&self, insets: Insets) -> f64 {
        match self {
            Vertical::Center | Vertical::Golden | Vertical::Ratio(_) => {
                (insets.top - insets.bottom) * 0.5
            }
            Vertical::Top | Vertical::FirstBaseline | Vertical::Fill => insets.top,
            Vertical::Bottom | Vertical::LastBaseline => -insets.bottom,
        }
    }

    fn inverse_inset(&self, insets: Insets) -> f64 {
        match self {
            Vertical::Center | Vertical::Golden | Vertical::Ratio(_) => {
                (insets.top - insets.bottom) * 0.5
            }
            Vertical::Top | Vertical::FirstBaseline => -insets.bottom,
            Vertical::Bottom | Vertical::LastBaseline => insets.top,
            Vertical::Fill => insets.bottom,
        }
    }

    fn center_bounds(&self, insets: Insets) -> (Attribute, f64, Attribute, f64) {
        (Attribute::Top, insets.top, Attribute::Bottom, insets.bottom)
    }
}
