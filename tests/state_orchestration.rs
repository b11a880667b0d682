//! Integration tests driving the state orchestrators the way a view's
//! update-constraints pass would, with real chains over a real hierarchy.

use std::collections::HashSet;

use tackline::{Chain, Conductor, Constraint, Padding, ScopedBox, StateError, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum State {
    Collapsed,
    Expanded,
}

struct Fixture {
    // Parent links are weak; the container must outlive the chains.
    _container: View,
    a: View,
    b: View,
}

impl Fixture {
    fn new() -> Self {
        let container = View::new("container");
        let a = View::new("a");
        let b = View::new("b");
        container.add_subview(&a);
        container.add_subview(&b);
        Fixture {
            _container: container,
            a,
            b,
        }
    }

    /// |-(8)-[a]-(8)-|
    fn collapsed(&self) -> Vec<Constraint> {
        Chain::from_container(8.0)
            .view(&self.a)
            .gap(8.0)
            .container()
            .horizontal()
            .unwrap()
    }

    /// |-(8)-[a]-(8)-[b]-(8)-|
    fn expanded(&self) -> Vec<Constraint> {
        Chain::from_container(8.0)
            .view(&self.a)
            .gap(8.0)
            .view(&self.b)
            .gap(8.0)
            .container()
            .horizontal()
            .unwrap()
    }

    /// |-(8)-[a]-(8)-| vertically, shared by every state.
    fn frame(&self) -> Vec<Constraint> {
        Chain::from_container(8.0)
            .view(&self.a)
            .gap(8.0)
            .container()
            .vertical()
            .unwrap()
    }
}

fn active(constraints: &[Constraint]) -> usize {
    constraints.iter().filter(|c| c.is_active()).count()
}

#[test]
fn test_conductor_switches_between_layouts() {
    let fixture = Fixture::new();
    let collapsed = fixture.collapsed();
    let expanded = fixture.expanded();
    let frame = fixture.frame();

    let mut conductor = Conductor::with_active_state(State::Collapsed);
    conductor.add(State::Collapsed, collapsed.clone());
    conductor.add(State::Expanded, expanded.clone());
    conductor.add_shared([State::Collapsed, State::Expanded], &frame);

    // Adding to the initially active state activates immediately; the rest
    // waits for the first apply.
    assert_eq!(active(&collapsed), collapsed.len());
    assert_eq!(active(&expanded), 0);
    conductor.apply_changes();

    conductor.set_active_state(State::Expanded).unwrap();
    conductor.apply_changes();
    assert_eq!(active(&collapsed), 0);
    assert_eq!(active(&expanded), expanded.len());
    // The shared frame never flickers off.
    assert_eq!(active(&frame), frame.len());

    // Applying twice in a row changes nothing.
    conductor.apply_changes();
    assert_eq!(active(&expanded), expanded.len());
}

#[test]
fn test_conductor_rejects_unregistered_states_atomically() {
    let fixture = Fixture::new();
    let mut conductor = Conductor::new();
    conductor.add(State::Collapsed, fixture.collapsed());
    conductor.set_active_state(State::Collapsed).unwrap();
    conductor.apply_changes();

    let result =
        conductor.set_active_states(HashSet::from_iter([State::Collapsed, State::Expanded]));
    assert_eq!(result, Err(StateError::StateNotRegistered));

    // The failed switch left the previous intent in place.
    conductor.apply_changes();
    assert_eq!(
        conductor.active_states(),
        &HashSet::from_iter([State::Collapsed])
    );
}

#[test]
fn test_scoped_box_update_pass() {
    let fixture = Fixture::new();
    let frame = fixture.frame();
    let collapsed = fixture.collapsed();
    let expanded = fixture.expanded();

    let mut tack_box = ScopedBox::new();
    let mut update_constraints = |show_b: bool| {
        let mut scope = tack_box.open();
        scope.activate_once("frame", || frame.clone());
        if show_b {
            scope.activate(expanded.clone());
        } else {
            scope.activate(collapsed.clone());
        }
    };

    update_constraints(true);
    assert_eq!(active(&frame), frame.len());
    assert_eq!(active(&expanded), expanded.len());
    assert_eq!(active(&collapsed), 0);

    update_constraints(false);
    assert_eq!(active(&frame), frame.len());
    assert_eq!(active(&expanded), 0);
    assert_eq!(active(&collapsed), collapsed.len());

    // Opening and closing without stating dynamics keeps only permanents.
    tack_box.open().close();
    assert_eq!(active(&frame), frame.len());
    assert_eq!(active(&collapsed), 0);
}

#[test]
fn test_compose_feeds_a_conductor_group() {
    let fixture = Fixture::new();
    let compact = false;

    let group = tackline::compose([
        (fixture.collapsed(), !compact),
        (
            Chain::from_safe_area(Padding::ge(0.0))
                .view(&fixture.a)
                .vertical()
                .unwrap(),
            true,
        ),
        (fixture.expanded(), compact),
    ]);
    // Two pair constraints from the collapsed chain plus the safe-area one.
    assert_eq!(group.len(), 3);

    let mut conductor = Conductor::with_active_state(State::Collapsed);
    conductor.add(State::Collapsed, group.clone());
    assert_eq!(active(&group), group.len());
}
