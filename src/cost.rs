//! Super power point costs: modifier cost schedules and the rules that add up what a power costs.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
	diagnostic::Warning,
	formula::Formula,
	graph::{Op, RuleGraph},
};

/// Attribute every super power's points are totalled into
pub const POINTS_ALLOCATED: &str = "superPowerPointsAllocated";

/// Cost of each rank of a super power modifier
///
/// The schedule is written as the extra cost of each rank (`Cost=2,3,4`), and is kept alongside its running sums so
/// that the cost of a rank is a single lookup.
///
/// # Examples
/// ```
/// use savage_rules::cost::CostSchedule;
///
/// let schedule = CostSchedule::from_deltas(&[2, 3, 4]).unwrap();
/// assert_eq!(schedule.cumulative(), &[2, 5, 9]);
/// assert_eq!(schedule.cost(2), 5);
/// assert_eq!(schedule.cost(7), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CostSchedule {
	/// Extra cost of each rank
	deltas: Vec<i32>,

	/// Total cost through each rank
	cumulative: Vec<i32>,
}

impl CostSchedule {
	/// Creates a schedule from the extra cost of each rank. Returns `None` if there are no ranks or a running total
	/// overflows.
	#[must_use]
	pub fn from_deltas(deltas: &[i32]) -> Option<Self> {
		if deltas.is_empty() {
			return None;
		}

		let mut total = 0_i32;
		let mut cumulative = Vec::with_capacity(deltas.len());
		for delta in deltas {
			total = total.checked_add(*delta)?;
			cumulative.push(total);
		}

		Some(Self {
			deltas: deltas.to_vec(),
			cumulative,
		})
	}

	/// Creates a schedule with a single rank.
	#[must_use]
	pub fn flat(cost: i32) -> Self {
		Self {
			deltas: vec![cost],
			cumulative: vec![cost],
		}
	}

	/// Gets the extra cost of each rank, as written in attrs.
	#[must_use]
	pub fn deltas(&self) -> &[i32] {
		&self.deltas
	}

	/// Gets the total cost through each rank.
	#[must_use]
	pub fn cumulative(&self) -> &[i32] {
		&self.cumulative
	}

	/// Gets the total cost of taking the modifier up to a 1-based rank. Ranks past the end cost the same as the last
	/// rank, and ranks below 1 cost nothing.
	#[must_use]
	pub fn cost(&self, rank: i32) -> i32 {
		let Ok(rank) = usize::try_from(rank) else {
			return 0;
		};
		match rank.checked_sub(1) {
			Some(idx) => self
				.cumulative
				.get(idx)
				.or_else(|| self.cumulative.last())
				.copied()
				.unwrap_or(0),
			None => 0,
		}
	}

	/// Builds a formula that calculates [`Self::cost()`] for the rank given by another formula.
	#[must_use]
	pub fn formula(&self, rank: Formula) -> Formula {
		Formula::Step(self.cumulative.clone(), Box::new(rank))
	}
}

/// Gets the attribute that holds how many times a super power was taken.
#[must_use]
pub fn power_attr(power: &str) -> String {
	format!("superPowers.{power}")
}

/// Gets the attribute that holds the rank a modifier was taken at for a power.
#[must_use]
pub fn modifier_attr(power: &str, modifier: &str) -> String {
	format!("superPowerModifiers.{power} ({modifier})")
}

/// Gets the attribute that totals a single power's points.
#[must_use]
pub fn power_points_attr(power: &str) -> String {
	format!("superPowerPoints.{power}")
}

/// Registers the rules that total up the points spent on a super power.
///
/// The power's own selection contributes `base_cost` per selection. Every modifier then contributes the cost of the
/// rank it was taken at, looked up from `schedules`. Each contribution goes into the power's own total
/// ([`power_points_attr()`]), which in turn feeds [`POINTS_ALLOCATED`]. Modifiers missing from `schedules` are left out
/// and reported, and the rest are still registered. A modifier listed more than once is only charged once.
///
/// # Examples
/// ```
/// use std::collections::{BTreeMap, BTreeSet};
/// use savage_rules::{cost::{build_power_cost_rules, CostSchedule}, MemoryGraph};
///
/// let mut schedules = BTreeMap::new();
/// schedules.insert("Range".to_owned(), CostSchedule::flat(1));
///
/// let mut graph = MemoryGraph::new();
/// let warnings = build_power_cost_rules(&mut graph, "Telepathy", 2, &["Range", "Bogus Modifier"], &schedules);
/// assert_eq!(warnings.len(), 1);
///
/// let mut eval = graph.evaluate([("superPowers.Telepathy", 1), ("superPowerModifiers.Telepathy (Range)", 1)]);
/// assert_eq!(eval.value("superPowerPointsAllocated")?, Some(3));
/// # Ok::<(), savage_rules::formula::CalcError>(())
/// ```
pub fn build_power_cost_rules<G: RuleGraph + ?Sized, S: AsRef<str>>(
	graph: &mut G,
	power: &str,
	base_cost: i32,
	modifiers: &[S],
	schedules: &BTreeMap<String, CostSchedule>,
) -> Vec<Warning> {
	let total = power_points_attr(power);
	let base = format!("superPowerBaseCost.{power}");
	graph.rule(&base, &power_attr(power), Op::Set, Formula::mul(Formula::Source, Formula::Num(base_cost)));
	graph.rule(&total, &base, Op::Add, Formula::Source);

	let mut warnings = Vec::new();
	let mut seen = BTreeSet::new();
	for modifier in modifiers {
		let modifier = modifier.as_ref();
		if !seen.insert(modifier) {
			warnings.push(
				Warning::DuplicateModifier {
					power: power.to_owned(),
					modifier: modifier.to_owned(),
				}
				.logged(),
			);
			continue;
		}

		let Some(schedule) = schedules.get(modifier) else {
			warnings.push(
				Warning::UnknownModifier {
					power: power.to_owned(),
					modifier: modifier.to_owned(),
				}
				.logged(),
			);
			continue;
		};

		let cost = format!("superPowerModifierCost.{power} ({modifier})");
		graph.rule(&cost, &modifier_attr(power, modifier), Op::Set, schedule.formula(Formula::Source));
		graph.rule(&total, &cost, Op::Add, Formula::Source);
	}

	graph.rule(POINTS_ALLOCATED, &total, Op::Add, Formula::Source);
	tracing::debug!(power, base_cost, modifiers = modifiers.len(), "registered super power cost rules");
	warnings
}
