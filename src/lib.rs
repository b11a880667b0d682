//! Tackline - constraint-chain sugar for box layout
//!
//! This library builds layout constraint descriptors from compact chain
//! expressions, the way one would write them in AutoLayout's visual format,
//! but checked by the compiler. It never solves constraints itself; the
//! resolved [`Constraint`] values are handed to whatever installs them.
//!
//! # Example
//!
//! ```rust
//! use tackline::{Chain, Padding, View};
//!
//! let container = View::new("container");
//! let label = View::new("label");
//! let icon = View::new("icon");
//! container.add_subview(&label);
//! container.add_subview(&icon);
//!
//! // |-(>=16)-[icon]-(8)-[label]-(>=16)-|
//! let constraints = Chain::from_container(Padding::ge(16.0))
//!     .view(&icon)
//!     .gap(8.0)
//!     .view(&label)
//!     .gap(Padding::ge(16.0))
//!     .container()
//!     .horizontal()
//!     .unwrap();
//!
//! tackline::activate(&constraints);
//! assert!(constraints.iter().all(|c| c.is_active()));
//! ```

pub mod align;
pub mod chain;
pub mod constraint;
pub mod error;
pub mod state;
pub mod vfl;
pub mod view;

pub use chain::{AlignHorizontal, AlignVertical, Chain, ChainError, Padding};
pub use constraint::{activate, deactivate, Attribute, Constraint, Priority, Relation};
pub use error::ParseError;
pub use state::{Conductor, Scope, ScopedBox, StateError};
pub use view::{Item, LayoutGuide, View};

/// Collect constraint groups conditionally, without if/else around the
/// activation calls themselves.
///
/// Each entry is a group paired with whether it applies; the applying groups
/// are flattened in order. Useful for building the full set for a layout
/// pass before a single [`activate`] call.
///
/// ```rust
/// use tackline::{compose, Chain, View};
///
/// let container = View::new("container");
/// let a = View::new("a");
/// container.add_subview(&a);
/// let compact = true;
///
/// let constraints = compose([
///     (Chain::from_container(8.0).view(&a).horizontal().unwrap(), compact),
///     (Chain::from_container(24.0).view(&a).horizontal().unwrap(), !compact),
/// ]);
/// assert_eq!(constraints.len(), 1);
/// ```
pub fn compose(
    groups: impl IntoIterator<Item = (Vec<Constraint>, bool)>,
) -> Vec<Constraint> {
    groups
        .into_iter()
        .filter(|(_, applies)| *applies)
        .flat_map(|(group, _)| group)
        .collect()
}
