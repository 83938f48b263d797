//! In-process [`RuleGraph`] that records everything registered into it and can evaluate the result.

use std::collections::BTreeMap;

use super::{Catalog, Op, Rule, RuleGraph};
use crate::{
	formula::{CalcError, Resolve},
	requirement::{Clause, Requirement},
};

/// Rule graph kept entirely in memory
///
/// # Examples
/// ```
/// use savage_rules::{Formula, MemoryGraph, Op, RuleGraph};
///
/// let mut graph = MemoryGraph::new();
/// graph.rule("toughness", "level", Op::Set, Formula::Num(2));
/// graph.rule("toughness", "armorToughness", Op::Add, Formula::Source);
///
/// let mut eval = graph.evaluate([("level", 1), ("armorToughness", 3)]);
/// assert_eq!(eval.value("toughness")?, Some(5));
/// # Ok::<(), savage_rules::formula::CalcError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
	/// Valid names per category
	defined: BTreeMap<String, Vec<String>>,

	/// Raw attrs strings per category
	catalogs: BTreeMap<String, Catalog>,

	/// Every rule, in registration order
	rules: Vec<Rule>,

	/// Indices into `rules` for each target attribute
	by_target: BTreeMap<String, Vec<usize>>,

	/// Every requirement, in registration order
	requirements: Vec<Requirement>,
}

impl MemoryGraph {
	/// Creates an empty graph.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Gets every rule, in registration order.
	#[must_use]
	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	/// Iterates over the rules that contribute to an attribute.
	pub fn rules_for<'a>(&'a self, target: &str) -> impl Iterator<Item = &'a Rule> + 'a {
		self.by_target
			.get(target)
			.into_iter()
			.flatten()
			.filter_map(|idx| self.rules.get(*idx))
	}

	/// Gets every requirement, in registration order.
	#[must_use]
	pub fn requirements(&self) -> &[Requirement] {
		&self.requirements
	}

	/// Gets the valid names defined for a category.
	#[must_use]
	pub fn defined(&self, category: &str) -> &[String] {
		self.defined.get(category).map_or(&[], Vec::as_slice)
	}

	/// Iterates over every category that has stored choices.
	pub fn categories(&self) -> impl Iterator<Item = (&str, &Catalog)> {
		self.catalogs
			.iter()
			.map(|(category, catalog)| (category.as_str(), catalog))
	}

	/// Starts an evaluation of the graph with the given leaf values (typically a character's selections).
	#[must_use]
	pub fn evaluate<S: Into<String>>(&self, inputs: impl IntoIterator<Item = (S, i32)>) -> Evaluation<'_> {
		Evaluation {
			graph: self,
			inputs: inputs.into_iter().map(|(attr, val)| (attr.into(), val)).collect(),
			cache: BTreeMap::new(),
			stack: Vec::new(),
		}
	}
}

impl RuleGraph for MemoryGraph {
	fn define_choice(&mut self, category: &str, names: &[String]) {
		self.defined.insert(category.to_owned(), names.to_vec());
	}

	fn define_rule(&mut self, rule: Rule) {
		self.by_target
			.entry(rule.target.clone())
			.or_default()
			.push(self.rules.len());
		self.rules.push(rule);
	}

	fn define_requirement(&mut self, requirement: Requirement) {
		self.requirements.push(requirement);
	}

	fn add_choice(&mut self, category: &str, name: &str, raw: &str) {
		self.catalogs
			.entry(category.to_owned())
			.or_default()
			.insert(name.to_owned(), raw.to_owned());
	}

	fn choices(&self, category: &str) -> Option<&Catalog> {
		self.catalogs.get(category)
	}
}

/// Values of a [`MemoryGraph`]'s attributes for one set of inputs, calculated on demand and cached
///
/// For each attribute, the input value (if any) is the starting point. Rules are then applied grouped by operator:
/// every [`Op::Set`] rule first, then [`Op::Add`], [`Op::Multiply`], and finally [`Op::Max`], each group in
/// registration order.
#[derive(Debug)]
pub struct Evaluation<'g> {
	/// Graph being evaluated
	graph: &'g MemoryGraph,

	/// Leaf values
	inputs: BTreeMap<String, i32>,

	/// Attributes resolved so far
	cache: BTreeMap<String, Option<i32>>,

	/// Attributes currently being resolved, for cycle detection
	stack: Vec<String>,
}

impl<'g> Evaluation<'g> {
	/// Gets the value of an attribute. `None` means nothing defined it.
	///
	/// # Errors
	/// If a formula fails to calculate or the attribute depends on itself, an error variant is returned.
	pub fn value(&mut self, attr: &str) -> Result<Option<i32>, CalcError> {
		self.resolve(attr)
	}

	/// Lists the requirements whose subject is selected but whose clause doesn't hold. Opaque clauses are never
	/// reported since they can't be judged here.
	///
	/// # Errors
	/// If any attribute involved fails to calculate, an error variant is returned.
	pub fn unmet_requirements(&mut self) -> Result<Vec<&'g Requirement>, CalcError> {
		let graph = self.graph;
		let mut unmet = Vec::new();
		for requirement in &graph.requirements {
			if self.resolve(&requirement.subject)?.unwrap_or(0) == 0 {
				continue;
			}

			let mut values = BTreeMap::new();
			for attr in requirement_attrs(requirement) {
				values.insert(attr, self.resolve(attr)?.unwrap_or(0));
			}
			if requirement.clause.check(|attr| values.get(attr).copied().unwrap_or(0)) == Some(false) {
				unmet.push(requirement);
			}
		}
		Ok(unmet)
	}

	/// Calculates an attribute from its input value and rules.
	fn compute(&mut self, attr: &str) -> Result<Option<i32>, CalcError> {
		let graph = self.graph;
		let mut value = self.inputs.get(attr).copied();

		for op in [Op::Set, Op::Add, Op::Multiply, Op::Max] {
			for rule in graph.rules_for(attr).filter(|rule| rule.op == op) {
				let source = match self.resolve(&rule.source)? {
					Some(source) if source != 0 => source,
					_ => continue,
				};

				let x = rule.formula.calc(source, self)?;
				value = match (op, value) {
					(Op::Set, _) => Some(x),
					(Op::Add, current) => Some(
						current
							.unwrap_or(0)
							.checked_add(x)
							.ok_or_else(|| CalcError::Overflow(rule.formula.clone()))?,
					),
					(Op::Multiply, Some(current)) => Some(
						current
							.checked_mul(x)
							.ok_or_else(|| CalcError::Overflow(rule.formula.clone()))?,
					),
					(Op::Multiply, None) => None,
					(Op::Max, current) => Some(current.map_or(x, |current| current.max(x))),
				};
			}
		}

		Ok(value)
	}
}

impl Resolve for Evaluation<'_> {
	fn resolve(&mut self, attr: &str) -> Result<Option<i32>, CalcError> {
		if let Some(value) = self.cache.get(attr) {
			return Ok(*value);
		}
		if self.stack.iter().any(|pending| pending == attr) {
			return Err(CalcError::Cycle(attr.to_owned()));
		}

		self.stack.push(attr.to_owned());
		let result = self.compute(attr);
		self.stack.pop();

		let value = result?;
		self.cache.insert(attr.to_owned(), value);
		Ok(value)
	}
}

/// Gets the attribute a requirement's clause compares, if it's a comparison.
fn requirement_attrs(requirement: &Requirement) -> Option<&str> {
	match &requirement.clause {
		Clause::Compare { attr, .. } => Some(attr),
		Clause::Opaque(..) => None,
	}
}
