//! Integration tests verifying the geometric consequences of resolved
//! constraints. The library never solves anything itself, so these tests
//! feed its output into the kasuari Cassowary solver and check the
//! coordinates that come out.

use std::collections::HashMap;

use kasuari::{Expression, Solver, Strength, Variable, WeightedRelation::*};
use tackline::{align, Attribute, Chain, Constraint, Item, Padding, Priority, Relation, View};

/// Which solver variable an attribute addresses on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum End {
    HorizontalMin,
    HorizontalMax,
    VerticalMin,
    VerticalMax,
}

/// Maps items and attributes onto kasuari variables and installs resolved
/// constraints with strengths derived from their priorities.
struct GeometrySolver {
    solver: Solver,
    vars: HashMap<(String, End), Variable>,
    values: Vec<(Variable, f64)>,
}

fn strength_for(priority: Priority) -> Strength {
    if priority.is_required() {
        Strength::REQUIRED
    } else if priority.value() >= 750.0 {
        Strength::STRONG
    } else if priority.value() >= 250.0 {
        Strength::MEDIUM
    } else {
        Strength::WEAK
    }
}

impl GeometrySolver {
    fn new() -> Self {
        GeometrySolver {
            solver: Solver::new(),
            vars: HashMap::new(),
            values: Vec::new(),
        }
    }

    fn var(&mut self, item: &Item, end: End) -> Variable {
        *self
            .vars
            .entry((item.name().to_string(), end))
            .or_insert_with(Variable::new)
    }

    fn expression(&mut self, item: &Item, attribute: Attribute) -> Expression {
        match attribute {
            Attribute::Leading | Attribute::Left => self.var(item, End::HorizontalMin).into(),
            Attribute::Trailing | Attribute::Right => self.var(item, End::HorizontalMax).into(),
            Attribute::Top => self.var(item, End::VerticalMin).into(),
            Attribute::Bottom => self.var(item, End::VerticalMax).into(),
            Attribute::CenterX => {
                (self.var(item, End::HorizontalMin) + self.var(item, End::HorizontalMax)) * 0.5
            }
            Attribute::CenterY => {
                (self.var(item, End::VerticalMin) + self.var(item, End::VerticalMax)) * 0.5
            }
            Attribute::FirstBaseline | Attribute::LastBaseline => {
                panic!("baselines have no geometry in these tests")
            }
        }
    }

    fn add(&mut self, constraints: &[Constraint]) {
        for constraint in constraints {
            let lhs = self.expression(constraint.item(), constraint.attribute());
            let rhs = self.expression(constraint.to_item(), constraint.to_attribute())
                * constraint.multiplier()
                + constraint.constant();
            let strength = strength_for(constraint.priority());
            let relation = match constraint.relation() {
                Relation::Equal => EQ(strength),
                Relation::GreaterOrEqual => GE(strength),
                Relation::LessOrEqual => LE(strength),
            };
            self.solver.add_constraint(lhs | relation | rhs).unwrap();
        }
    }

    /// Pin an item's horizontal or vertical extent to exact coordinates.
    fn fix(&mut self, item: &Item, min_end: End, min: f64, max: f64) {
        let max_end = match min_end {
            End::HorizontalMin => End::HorizontalMax,
            End::VerticalMin => End::VerticalMax,
            other => other,
        };
        let min_var = self.var(item, min_end);
        let max_var = self.var(item, max_end);
        self.solver
            .add_constraint(min_var | EQ(Strength::REQUIRED) | min)
            .unwrap();
        self.solver
            .add_constraint(max_var | EQ(Strength::REQUIRED) | max)
            .unwrap();
    }

    /// Give an item a fixed width without pinning its position.
    fn fix_width(&mut self, item: &Item, width: f64) {
        let min = self.var(item, End::HorizontalMin);
        let max = self.var(item, End::HorizontalMax);
        self.solver
            .add_constraint(max | EQ(Strength::REQUIRED) | min + width)
            .unwrap();
    }

    fn fix_height(&mut self, item: &Item, height: f64) {
        let min = self.var(item, End::VerticalMin);
        let max = self.var(item, End::VerticalMax);
        self.solver
            .add_constraint(max | EQ(Strength::REQUIRED) | min + height)
            .unwrap();
    }

    fn value(&mut self, item: &Item, end: End) -> f64 {
        let target = self.var(item, end);
        for (var, value) in self.solver.fetch_changes() {
            match self.values.iter_mut().find(|(v, _)| v == var) {
                Some(entry) => entry.1 = *value,
                None => self.values.push((*var, *value)),
            }
        }
        self.values
            .iter()
            .find(|(v, _)| *v == target)
            .map(|(_, value)| *value)
            .unwrap_or(0.0)
    }
}

const TOLERANCE: f64 = 1e-6;

fn family() -> (View, View, View) {
    let container = View::new("container");
    let a = View::new("a");
    let b = View::new("b");
    container.add_subview(&a);
    container.add_subview(&b);
    (container, a, b)
}

#[test]
fn test_double_pin_prefers_the_value_when_unopposed() {
    let (container, a, b) = family();
    let constraints = Chain::from_container(0.0)
        .view(&a)
        .gap(Padding::double_pin(10.0))
        .view(&b)
        .horizontal()
        .unwrap();

    let mut solver = GeometrySolver::new();
    solver.fix(&Item::from(&container), End::HorizontalMin, 0.0, 200.0);
    solver.fix_width(&Item::from(&a), 50.0);
    solver.fix_width(&Item::from(&b), 50.0);
    solver.add(&constraints);

    // Nothing pulls b away, so the soft preference collapses the gap to 10.
    let b_min = solver.value(&Item::from(&b), End::HorizontalMin);
    assert!((b_min - 60.0).abs() < TOLERANCE, "b starts at {}", b_min);
}

#[test]
fn test_double_pin_floor_holds_when_pressed() {
    let (container, a, b) = family();
    let constraints = Chain::from_container(0.0)
        .view(&a)
        .gap(Padding::double_pin(10.0))
        .view(&b)
        .gap(0.0)
        .container()
        .horizontal()
        .unwrap();

    let mut solver = GeometrySolver::new();
    solver.fix(&Item::from(&container), End::HorizontalMin, 0.0, 200.0);
    solver.fix_width(&Item::from(&a), 50.0);
    solver.fix_width(&Item::from(&b), 50.0);
    solver.add(&constraints);

    // Both ends are pinned, so the gap is forced open to 100; the required
    // floor is satisfied and the soft preference simply loses.
    let a_max = solver.value(&Item::from(&a), End::HorizontalMax);
    let b_min = solver.value(&Item::from(&b), End::HorizontalMin);
    let gap = b_min - a_max;
    assert!((gap - 100.0).abs() < TOLERANCE, "gap is {}", gap);
}

#[test]
fn test_double_pin_yields_to_default_low() {
    let (container, a, b) = family();
    let mut constraints = Chain::from_container(0.0)
        .view(&a)
        .gap(Padding::double_pin(10.0))
        .view(&b)
        .horizontal()
        .unwrap();

    // A default-low preference elsewhere asks for a wider gap; the double
    // pin's preference sits just below it and must lose.
    constraints.push(Constraint::new(
        Item::from(&b),
        Attribute::Leading,
        Relation::Equal,
        Item::from(&a),
        Attribute::Trailing,
        1.0,
        40.0,
        Priority::DEFAULT_LOW,
    ));

    let mut solver = GeometrySolver::new();
    solver.fix(&Item::from(&container), End::HorizontalMin, 0.0, 200.0);
    solver.fix_width(&Item::from(&a), 50.0);
    solver.fix_width(&Item::from(&b), 50.0);
    solver.add(&constraints);

    let b_min = solver.value(&Item::from(&b), End::HorizontalMin);
    assert!((b_min - 90.0).abs() < TOLERANCE, "b starts at {}", b_min);
}

#[test]
fn test_fill_alignment_keeps_insets() {
    let (container, a, _) = family();
    let constraints = align::constraints(
        &a,
        &container,
        Some(align::Horizontal::Fill),
        None,
        align::Insets::new(0.0, 20.0, 0.0, 10.0),
    );

    let mut solver = GeometrySolver::new();
    solver.fix(&Item::from(&container), End::HorizontalMin, 0.0, 100.0);
    solver.add(&constraints);

    let a_min = solver.value(&Item::from(&a), End::HorizontalMin);
    let a_max = solver.value(&Item::from(&a), End::HorizontalMax);
    assert!((a_min - 20.0).abs() < TOLERANCE);
    assert!((a_max - 90.0).abs() < TOLERANCE);
}

#[test]
fn test_center_alignment_centers_in_inset_bounds() {
    let (container, a, _) = family();
    let constraints = align::constraints(
        &a,
        &container,
        Some(align::Horizontal::Center),
        None,
        align::Insets::new(0.0, 30.0, 0.0, 0.0),
    );

    let mut solver = GeometrySolver::new();
    solver.fix(&Item::from(&container), End::HorizontalMin, 0.0, 100.0);
    solver.fix_width(&Item::from(&a), 10.0);
    solver.add(&constraints);

    // Inset bounds are [30, 100]; their center is 65.
    let a_min = solver.value(&Item::from(&a), End::HorizontalMin);
    let a_max = solver.value(&Item::from(&a), End::HorizontalMax);
    let center = (a_min + a_max) / 2.0;
    assert!((center - 65.0).abs() < TOLERANCE, "center is {}", center);
}

#[test]
fn test_golden_centering_sits_above_the_middle() {
    let (container, a, _) = family();
    let constraints = align::constraints(
        &a,
        &container,
        None,
        Some(align::Vertical::Golden),
        align::Insets::default(),
    );

    let mut solver = GeometrySolver::new();
    solver.fix(&Item::from(&container), End::VerticalMin, 0.0, 100.0);
    solver.fix_height(&Item::from(&a), 10.0);
    solver.add(&constraints);

    let a_min = solver.value(&Item::from(&a), End::VerticalMin);
    let a_max = solver.value(&Item::from(&a), End::VerticalMax);
    let center = (a_min + a_max) / 2.0;
    let expected = 50.0 * align::center_multiplier(1.0 / align::GOLDEN);
    assert!((center - expected).abs() < TOLERANCE, "center is {}", center);
    assert!(center < 50.0, "golden center must sit above the middle");
}

#[test]
fn test_chain_run_lays_out_left_to_right() {
    let (container, a, b) = family();
    let constraints = Chain::from_container(Padding::ge(10.0))
        .view(&a)
        .gap(10.0)
        .view(&b)
        .gap(10.0)
        .container()
        .horizontal()
        .unwrap();

    let mut solver = GeometrySolver::new();
    solver.fix(&Item::from(&container), End::HorizontalMin, 0.0, 130.0);
    solver.fix_width(&Item::from(&a), 50.0);
    solver.fix_width(&Item::from(&b), 50.0);
    solver.add(&constraints);

    // 130 = >=10 + 50 + 10 + 50 + 10, so the leading gap closes to its floor.
    let a_min = solver.value(&Item::from(&a), End::HorizontalMin);
    let b_min = solver.value(&Item::from(&b), End::HorizontalMin);
    assert!((a_min - 10.0).abs() < TOLERANCE, "a starts at {}", a_min);
    assert!((b_min - 70.0).abs() < TOLERANCE, "b starts at {}", b_min);
}
