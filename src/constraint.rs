//! Primitive constraint descriptors
//!
//! A [`Constraint`] is the unit the host toolkit understands:
//! `item.attribute <relation> to_item.to_attribute * multiplier + constant`
//! at a given priority. The crate only ever asks the host to activate or
//! deactivate these; it never solves them itself.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::view::Item;

/// Edge or derived line of an item a constraint can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Text-direction-aware leading edge (left in LTR locales).
    Leading,
    /// Text-direction-aware trailing edge (right in LTR locales).
    Trailing,
    Left,
    Right,
    Top,
    Bottom,
    CenterX,
    CenterY,
    FirstBaseline,
    LastBaseline,
}

/// Relation between the two sides of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl Relation {
    /// The relation as seen from the other side of the constraint.
    pub fn inverse(self) -> Relation {
        match self {
            Relation::Equal => Relation::Equal,
            Relation::GreaterOrEqual => Relation::LessOrEqual,
            Relation::LessOrEqual => Relation::GreaterOrEqual,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relation::Equal => "==",
            Relation::GreaterOrEqual => ">=",
            Relation::LessOrEqual => "<=",
        })
    }
}

/// Layout priority on the host toolkit's 0..=1000 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Priority(f32);

impl Priority {
    /// A constraint the solver must satisfy.
    pub const REQUIRED: Priority = Priority(1000.0);
    pub const DEFAULT_HIGH: Priority = Priority(750.0);
    pub const DEFAULT_LOW: Priority = Priority(250.0);
    /// One less than [`DEFAULT_LOW`](Self::DEFAULT_LOW): loses to any
    /// default-low constraint elsewhere while still pulling when nothing else
    /// cares. This is the implicit priority of a double pin.
    pub const BELOW_DEFAULT_LOW: Priority = Priority(249.0);

    pub fn new(value: f32) -> Self {
        Priority(value)
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn is_required(self) -> bool {
        self.0 >= Self::REQUIRED.0
    }
}

impl From<f32> for Priority {
    fn from(value: f32) -> Self {
        Priority(value)
    }
}

struct ConstraintInner {
    item: Item,
    attribute: Attribute,
    relation: Relation,
    to_item: Item,
    to_attribute: Attribute,
    multiplier: f64,
    constant: f64,
    priority: Priority,
    active: Cell<bool>,
}

/// A primitive layout constraint descriptor, created inactive.
///
/// Cheap to clone: clones share the same underlying descriptor and activation
/// flag, which is what lets the same constraint be registered under several
/// states of a [`Conductor`](crate::state::Conductor) and activated exactly
/// once. Not thread-safe by design; constraints live on the host toolkit's
/// main thread.
#[derive(Clone)]
pub struct Constraint(Rc<ConstraintInner>);

impl Constraint {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        item: Item,
        attribute: Attribute,
        relation: Relation,
        to_item: Item,
        to_attribute: Attribute,
        multiplier: f64,
        constant: f64,
        priority: Priority,
    ) -> Self {
        Self(Rc::new(ConstraintInner {
            item,
            attribute,
            relation,
            to_item,
            to_attribute,
            multiplier,
            constant,
            priority,
            active: Cell::new(false),
        }))
    }

    pub fn item(&self) -> &Item {
        &self.0.item
    }

    pub fn attribute(&self) -> Attribute {
        self.0.attribute
    }

    pub fn relation(&self) -> Relation {
        self.0.relation
    }

    pub fn to_item(&self) -> &Item {
        &self.0.to_item
    }

    pub fn to_attribute(&self) -> Attribute {
        self.0.to_attribute
    }

    pub fn multiplier(&self) -> f64 {
        self.0.multiplier
    }

    pub fn constant(&self) -> f64 {
        self.0.constant
    }

    pub fn priority(&self) -> Priority {
        self.0.priority
    }

    pub fn is_active(&self) -> bool {
        self.0.active.get()
    }

    /// Ask the host to install this constraint. Idempotent.
    pub fn activate(&self) {
        self.0.active.set(true);
    }

    /// Ask the host to remove this constraint. Idempotent.
    pub fn deactivate(&self) {
        self.0.active.set(false);
    }

    /// Whether `self` and `other` are the same underlying constraint object.
    pub fn ptr_eq(&self, other: &Constraint) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Field-wise equivalence, allowing the legal left-right flip:
    /// `(A, a1, rel, B, a2, k, p)` is the same constraint as
    /// `(B, a2, rel⁻¹, A, a1, -k, p)`. The flip is only meaningful at
    /// multiplier 1.
    pub fn equivalent(&self, other: &Constraint) -> bool {
        let straight = self.0.item == other.0.item
            && self.0.attribute == other.0.attribute
            && self.0.relation == other.0.relation
            && self.0.to_item == other.0.to_item
            && self.0.to_attribute == other.0.to_attribute
            && nearly(self.0.multiplier, other.0.multiplier)
            && nearly(self.0.constant, other.0.constant)
            && self.0.priority == other.0.priority;
        if straight {
            return true;
        }
        nearly(self.0.multiplier, 1.0)
            && nearly(other.0.multiplier, 1.0)
            && self.0.item == other.0.to_item
            && self.0.attribute == other.0.to_attribute
            && self.0.relation == other.0.relation.inverse()
            && self.0.to_item == other.0.item
            && self.0.to_attribute == other.0.attribute
            && nearly(self.0.constant, -other.0.constant)
            && self.0.priority == other.0.priority
    }
}

fn nearly(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}.{:?} {} {:?}.{:?}",
            self.0.item, self.0.attribute, self.0.relation, self.0.to_item, self.0.to_attribute
        )?;
        if self.0.multiplier != 1.0 {
            write!(f, " * {}", self.0.multiplier)?;
        }
        if self.0.constant != 0.0 {
            write!(f, " + {}", self.0.constant)?;
        }
        write!(f, " @{}", self.0.priority.value())
    }
}

/// Activate a group of constraints at once.
pub fn activate(constraints: &[Constraint]) {
    for constraint in constraints {
        constraint.activate();
    }
}

/// Deactivate a group of constraints at once.
pub fn deactivate(constraints: &[Constraint]) {
    for constraint in constraints {
        constraint.deactivate();
    }
}
