//! State-driven constraint orchestration
//!
//! Two ways to avoid hand-written if/else chains when different layout
//! states need different constraint groups:
//!
//! - [`Conductor`] keys constraint groups by a caller-defined state type and
//!   diffs activation when [`Conductor::apply_changes`] runs.
//! - [`ScopedBox`] re-derives the dynamic constraints on every pass inside
//!   an open/close scope, with a once-only section for permanent ones.

mod conductor;
mod scoped;

pub use conductor::Conductor;
pub use scoped::{Scope, ScopedBox};

use thiserror::Error;

/// Misuse errors of the state orchestrators.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StateError {
    /// Tried to remove the constraints of a state that is currently active.
    #[error("state is currently active; switch away before removing its constraints")]
    StateActive,
    /// Tried to activate or remove a state no constraints were added for.
    #[error("state has no constraints registered")]
    StateNotRegistered,
}
