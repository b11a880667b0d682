use std::collections::HashSet;

use crate::constraint::{activate, deactivate, Constraint};

/// Scope-based constraint bookkeeping for update-constraints passes that
/// re-derive their dynamic constraints every time.
///
/// Each pass opens the box, re-states the constraints that depend on the
/// current flags, and closes it (or lets the scope drop). Opening
/// deactivates whatever the previous pass activated dynamically, so a
/// forgotten deactivation cannot leak stale constraints. Permanent
/// constraints go through [`Scope::activate_once`], which builds them on the
/// very first pass only, retains them in the box, and never turns them off.
///
/// ```
/// use tackline::{Chain, ScopedBox, View};
///
/// let container = View::new("container");
/// let a = View::new("a");
/// container.add_subview(&a);
///
/// let mut tack_box = ScopedBox::new();
/// let mut update_constraints = |wide: bool| {
///     let mut scope = tack_box.open();
///     scope.activate_once("frame", || {
///         Chain::from_container(10.0).view(&a).vertical().unwrap()
///     });
///     let padding = if wide { 40.0 } else { 10.0 };
///     scope.activate(
///         Chain::from_container(padding)
///             .view(&a)
///             .gap(padding)
///             .container()
///             .horizontal()
///             .unwrap(),
///     );
/// };
/// update_constraints(true);
/// update_constraints(false);
/// ```
#[derive(Default)]
pub struct ScopedBox {
    seen_keys: HashSet<&'static str>,
    once_frozen: bool,
    permanent: Vec<Constraint>,
    dynamic: Vec<Constraint>,
}

impl ScopedBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// The constraints built by [`Scope::activate_once`] sections, which the
    /// box keeps alive and active for its own lifetime. A host adapter can
    /// enumerate them here; callers built them inline and hold no handle.
    pub fn permanent(&self) -> &[Constraint] {
        &self.permanent
    }

    /// Begin an update pass. Dynamic constraints from the previous pass are
    /// deactivated here, before any new ones are stated. The borrow on the
    /// returned scope keeps the box closed until the scope ends.
    pub fn open(&mut self) -> Scope<'_> {
        deactivate(&self.dynamic);
        self.dynamic.clear();
        Scope {
            owner: self,
            closed: false,
        }
    }
}

/// An open update pass on a [`ScopedBox`]. Closes itself on drop.
pub struct Scope<'a> {
    owner: &'a mut ScopedBox,
    closed: bool,
}

impl Scope<'_> {
    /// Activate constraints that exist in every state of the layout.
    ///
    /// The closure runs only during the first pass (and only once per key),
    /// so the constraints are built a single time and stay active for the
    /// life of the box, which retains them. Several once-sections can share
    /// a pass; each needs its own key.
    pub fn activate_once<F>(&mut self, key: &'static str, build: F)
    where
        F: FnOnce() -> Vec<Constraint>,
    {
        if self.owner.once_frozen || !self.owner.seen_keys.insert(key) {
            return;
        }
        let constraints = build();
        activate(&constraints);
        self.owner.permanent.extend(constraints);
    }

    /// Activate constraints for the current pass only. They stay active
    /// after the scope closes and get deactivated when the box is opened
    /// for the next pass.
    pub fn activate(&mut self, constraints: Vec<Constraint>) {
        activate(&constraints);
        self.owner.dynamic.extend(constraints);
    }

    /// End the pass early. Safe to call more than once; dropping the scope
    /// closes it as well. The first close anywhere freezes the once-phase,
    /// so later passes skip their `activate_once` sections entirely.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.owner.once_frozen = true;
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.close();
    }
}
