use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::constraint::Constraint;
use crate::state::StateError;

/// Orchestrates groups of constraints keyed by a caller-defined state,
/// usually an enum describing the layout modes of a view.
///
/// Add constraints per state up front, switch with
/// [`set_active_state`](Self::set_active_state), then call
/// [`apply_changes`](Self::apply_changes) from the host's
/// update-constraints pass. Only the difference between the previously
/// applied states and the active ones is touched, so applying is cheap and
/// idempotent.
pub struct Conductor<S> {
    storage: HashMap<S, Vec<Constraint>>,
    active: HashSet<S>,
    applied: HashSet<S>,
}

impl<S: Eq + Hash + Clone> Conductor<S> {
    pub fn new() -> Self {
        Conductor {
            storage: HashMap::new(),
            active: HashSet::new(),
            applied: HashSet::new(),
        }
    }

    /// Start off with one state marked active. Constraints added for it
    /// later activate immediately.
    pub fn with_active_state(state: S) -> Self {
        Self::with_active_states(HashSet::from_iter([state]))
    }

    /// Start off with a set of active states.
    pub fn with_active_states(states: HashSet<S>) -> Self {
        Conductor {
            storage: HashMap::new(),
            active: states,
            applied: HashSet::new(),
        }
    }

    /// The states currently marked active (not necessarily applied yet).
    pub fn active_states(&self) -> &HashSet<S> {
        &self.active
    }

    /// Register constraints for a state. New constraints go ahead of any
    /// previously stored ones. If the state is already active, the new
    /// constraints that aren't active yet are activated right away.
    pub fn add(&mut self, state: S, constraints: Vec<Constraint>) {
        if self.active.contains(&state) {
            for constraint in constraints.iter().filter(|c| !c.is_active()) {
                constraint.activate();
            }
        }
        let stored = self.storage.entry(state).or_default();
        let mut all = constraints;
        all.append(stored);
        *stored = all;
    }

    /// Register the same constraints under several states. Clones share the
    /// activation flag, so a constraint kept by two active states is only
    /// installed once.
    pub fn add_shared(&mut self, states: impl IntoIterator<Item = S>, constraints: &[Constraint]) {
        for state in states {
            self.add(state, constraints.to_vec());
        }
    }

    /// Take back the constraints registered for a state. The state must be
    /// registered and not active.
    pub fn remove(&mut self, state: &S) -> Result<Vec<Constraint>, StateError> {
        if self.active.contains(state) {
            return Err(StateError::StateActive);
        }
        self.storage
            .remove(state)
            .ok_or(StateError::StateNotRegistered)
    }

    /// Mark a single state active. Records intent only; nothing changes
    /// until [`apply_changes`](Self::apply_changes).
    pub fn set_active_state(&mut self, state: S) -> Result<(), StateError> {
        self.set_active_states(HashSet::from_iter([state]))
    }

    /// Mark a set of states active. Fails without changing anything if any
    /// of them has no constraints registered.
    pub fn set_active_states(&mut self, states: HashSet<S>) -> Result<(), StateError> {
        if states.iter().any(|s| !self.storage.contains_key(s)) {
            return Err(StateError::StateNotRegistered);
        }
        self.active = states;
        Ok(())
    }

    /// Deactivate the groups that fell out of the active set and activate
    /// the newly active ones. Call from the host's update-constraints pass.
    ///
    /// A constraint shared with a group that stays active is left installed.
    /// Groups removed while inactive are silently skipped.
    pub fn apply_changes(&mut self) {
        for state in self.applied.difference(&self.active) {
            let Some(outgoing) = self.storage.get(state) else {
                continue;
            };
            for constraint in outgoing {
                if !self.kept_by_active(constraint) {
                    constraint.deactivate();
                }
            }
        }
        for state in self.active.difference(&self.applied) {
            if let Some(incoming) = self.storage.get(state) {
                for constraint in incoming.iter().filter(|c| !c.is_active()) {
                    constraint.activate();
                }
            }
        }
        self.applied = self.active.clone();
    }

    fn kept_by_active(&self, constraint: &Constraint) -> bool {
        self.active.iter().any(|state| {
            self.storage
                .get(state)
                .is_some_and(|group| group.iter().any(|c| c.ptr_eq(constraint)))
        })
    }
}

impl<S: Eq + Hash + Clone> Default for Conductor<S> {
    fn default() -> Self {
        Self::new()
    }
}
