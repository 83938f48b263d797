use std::collections::BTreeMap;

use crate::{
	cost::{build_power_cost_rules, modifier_attr, power_attr, power_points_attr, CostSchedule, POINTS_ALLOCATED},
	diagnostic::Warning,
	formula::Formula,
	graph::{Op, RuleGraph},
	MemoryGraph,
};

/// Builds a schedule lookup from literal deltas.
fn schedules(entries: &[(&str, &[i32])]) -> BTreeMap<String, CostSchedule> {
	entries
		.iter()
		.map(|(name, deltas)| ((*name).to_owned(), CostSchedule::from_deltas(deltas).unwrap()))
		.collect()
}

#[test]
fn cumulative_schedule() {
	let schedule = CostSchedule::from_deltas(&[2, 3, 4]).unwrap();
	assert_eq!(schedule.deltas(), [2, 3, 4]);
	assert_eq!(schedule.cumulative(), [2, 5, 9]);
	assert_eq!([1, 2, 3].map(|rank| schedule.cost(rank)), [2, 5, 9]);
}

#[test]
fn ranks_out_of_range() {
	let schedule = CostSchedule::from_deltas(&[2, 3, 4]).unwrap();
	assert_eq!(schedule.cost(4), 9);
	assert_eq!(schedule.cost(100), 9);
	assert_eq!(schedule.cost(0), 0);
	assert_eq!(schedule.cost(-3), 0);
}

#[test]
fn degenerate_schedules() {
	assert_eq!(CostSchedule::from_deltas(&[]), None);
	assert_eq!(CostSchedule::from_deltas(&[i32::MAX, 1]), None);
	assert_eq!(CostSchedule::flat(3).cumulative(), [3]);
	assert_eq!(CostSchedule::from_deltas(&[-2]).unwrap().cost(1), -2);
}

#[test]
fn formula_matches_cost() {
	let schedule = CostSchedule::from_deltas(&[1, 1, 2]).unwrap();
	let formula = schedule.formula(Formula::Source);
	for rank in -1..6 {
		assert_eq!(formula.calc_with(rank, |_| None).unwrap(), schedule.cost(rank));
	}
}

#[test]
fn allocation_totals_every_contribution() {
	let schedules = schedules(&[("A", &[1]), ("B", &[1, 2])]);
	let mut graph = MemoryGraph::new();
	let warnings = build_power_cost_rules(&mut graph, "P", 2, &["A", "B"], &schedules);
	assert!(warnings.is_empty());

	let mut eval = graph.evaluate([
		(power_attr("P"), 1),
		(modifier_attr("P", "A"), 1),
		(modifier_attr("P", "B"), 1),
	]);
	assert_eq!(eval.value(&power_points_attr("P")).unwrap(), Some(4));
	assert_eq!(eval.value(POINTS_ALLOCATED).unwrap(), Some(4));

	let mut eval = graph.evaluate([
		(power_attr("P"), 1),
		(modifier_attr("P", "A"), 1),
		(modifier_attr("P", "B"), 2),
	]);
	assert_eq!(eval.value(POINTS_ALLOCATED).unwrap(), Some(6));
}

#[test]
fn base_cost_scales_with_selection_count() {
	let mut graph = MemoryGraph::new();
	let warnings = build_power_cost_rules(&mut graph, "Armor", 2, &[] as &[&str], &BTreeMap::new());
	assert!(warnings.is_empty());

	let mut eval = graph.evaluate([(power_attr("Armor"), 3)]);
	assert_eq!(eval.value(POINTS_ALLOCATED).unwrap(), Some(6));
}

#[test]
fn powers_add_into_one_total() {
	let schedules = schedules(&[("Range", &[1])]);
	let mut graph = MemoryGraph::new();
	assert!(build_power_cost_rules(&mut graph, "Telepathy", 2, &["Range"], &schedules).is_empty());
	assert!(build_power_cost_rules(&mut graph, "Flight", 3, &["Range"], &schedules).is_empty());

	let mut eval = graph.evaluate([
		(power_attr("Telepathy"), 1),
		(modifier_attr("Telepathy", "Range"), 1),
		(power_attr("Flight"), 1),
	]);
	assert_eq!(eval.value(&power_points_attr("Telepathy")).unwrap(), Some(3));
	assert_eq!(eval.value(&power_points_attr("Flight")).unwrap(), Some(3));
	assert_eq!(eval.value(POINTS_ALLOCATED).unwrap(), Some(6));
}

#[test]
fn unknown_modifier_is_reported_and_skipped() {
	let schedules = schedules(&[("Range", &[1])]);
	let mut graph = MemoryGraph::new();
	let warnings = build_power_cost_rules(&mut graph, "Telepathy", 2, &["Range", "Bogus Modifier"], &schedules);

	assert_eq!(
		warnings,
		[Warning::UnknownModifier {
			power: "Telepathy".to_owned(),
			modifier: "Bogus Modifier".to_owned(),
		}]
	);

	// Base cost and Range both still feed the power's total
	let into_total = graph
		.rules_for(&power_points_attr("Telepathy"))
		.filter(|rule| rule.op == Op::Add)
		.count();
	assert_eq!(into_total, 2);
	assert!(!graph.rules().iter().any(|rule| rule.source.contains("Bogus Modifier")));
}

#[test]
fn repeated_modifier_is_skipped() {
	let schedules = schedules(&[("Range", &[1])]);
	let mut graph = MemoryGraph::new();
	let warnings = build_power_cost_rules(&mut graph, "Zap", 2, &["Range", "Range"], &schedules);
	assert_eq!(
		warnings,
		[Warning::DuplicateModifier {
			power: "Zap".to_owned(),
			modifier: "Range".to_owned(),
		}]
	);
	assert_eq!(graph.rules_for(&power_points_attr("Zap")).count(), 2);

	let mut eval = graph.evaluate([(power_attr("Zap"), 1), (modifier_attr("Zap", "Range"), 1)]);
	assert_eq!(eval.value(POINTS_ALLOCATED).unwrap(), Some(3));
}

#[test]
fn negative_modifiers_reduce_the_total() {
	let schedules = schedules(&[("Requires Touch", &[-2]), ("Range", &[1])]);
	let mut graph = MemoryGraph::new();
	build_power_cost_rules(&mut graph, "Healing", 3, &["Requires Touch", "Range"], &schedules);

	let mut eval = graph.evaluate([(power_attr("Healing"), 1), (modifier_attr("Healing", "Requires Touch"), 1)]);
	assert_eq!(eval.value(&power_points_attr("Healing")).unwrap(), Some(1));
	assert_eq!(eval.value(POINTS_ALLOCATED).unwrap(), Some(1));
}

#[test]
fn works_through_a_trait_object() {
	let schedules = schedules(&[("Range", &[1])]);
	let mut graph = MemoryGraph::new();
	let dyn_graph: &mut dyn RuleGraph = &mut graph;
	build_power_cost_rules(dyn_graph, "Stun", 2, &["Range"], &schedules);
	assert_eq!(graph.rules_for(POINTS_ALLOCATED).count(), 1);
}
