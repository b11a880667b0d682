use crate::constraint::{Priority, Relation};

/// How a padding value binds the gap between two anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingKind {
    /// The gap is exactly the value.
    Equal,
    /// The gap is at least the value.
    GreaterOrEqual,
    /// The gap is at least the value, and softly prefers to be exactly it.
    DoublePin,
}

/// The space requested between two adjacent anchors of a chain.
///
/// A plain `f64` converts to an exact, required padding, so most call sites
/// can pass a number. The double pin expands to two constraints when the
/// chain is resolved: a required floor plus a soft preference that collapses
/// the gap back to the value when nothing stronger holds it open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    kind: PaddingKind,
    value: f64,
    priority: Priority,
}

impl Padding {
    /// Exactly `value`, required.
    pub fn eq(value: f64) -> Self {
        Self::eq_at(value, Priority::REQUIRED)
    }

    /// Exactly `value` at the given priority.
    pub fn eq_at(value: f64, priority: impl Into<Priority>) -> Self {
        Padding {
            kind: PaddingKind::Equal,
            value,
            priority: priority.into(),
        }
    }

    /// At least `value`, required.
    pub fn ge(value: f64) -> Self {
        Self::ge_at(value, Priority::REQUIRED)
    }

    /// At least `value` at the given priority.
    pub fn ge_at(value: f64, priority: impl Into<Priority>) -> Self {
        Padding {
            kind: PaddingKind::GreaterOrEqual,
            value,
            priority: priority.into(),
        }
    }

    /// At least `value`, preferring exactly `value` just below default-low
    /// priority, so any default-low preference elsewhere wins over the
    /// collapse.
    pub fn double_pin(value: f64) -> Self {
        Self::double_pin_at(value, Priority::BELOW_DEFAULT_LOW)
    }

    /// At least `value`, preferring exactly `value` at the given priority.
    /// The floor constraint stays required regardless.
    pub fn double_pin_at(value: f64, priority: impl Into<Priority>) -> Self {
        Padding {
            kind: PaddingKind::DoublePin,
            value,
            priority: priority.into(),
        }
    }

    /// The same padding re-tagged with a different priority. The kind and
    /// value are kept as-is.
    pub fn with_priority(self, priority: impl Into<Priority>) -> Self {
        Padding {
            priority: priority.into(),
            ..self
        }
    }

    pub fn kind(self) -> PaddingKind {
        self.kind
    }

    pub fn value(self) -> f64 {
        self.value
    }

    pub fn priority(self) -> Priority {
        self.priority
    }

    /// The relations a single padding contributes to the resolved chain, in
    /// emission order. A double pin puts its required floor ahead of the soft
    /// preference.
    pub(crate) fn expanded(self) -> Vec<(Relation, f64, Priority)> {
        match self.kind {
            PaddingKind::Equal => vec![(Relation::Equal, self.value, self.priority)],
            PaddingKind::GreaterOrEqual => {
                vec![(Relation::GreaterOrEqual, self.value, self.priority)]
            }
            PaddingKind::DoublePin => vec![
                (Relation::GreaterOrEqual, self.value, Priority::REQUIRED),
                (Relation::Equal, self.value, self.priority),
            ],
        }
    }
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Padding::eq(value)
    }
}
