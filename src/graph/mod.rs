//! The boundary with the host's rule graph: the dependency network of derived attributes that choices feed into.
//!
//! Nothing in this crate evaluates a character. Registration only describes, through [`RuleGraph`], how attributes
//! are derived from one another; the host resolves them later. [`memory::MemoryGraph`] is a self-contained
//! implementation for tools and tests.

pub mod memory;

use std::{collections::BTreeMap, fmt};

use crate::{formula::Formula, requirement::Requirement};

/// Raw attrs strings of a category, keyed by choice name
pub type Catalog = BTreeMap<String, String>;

/// How a rule's value is combined into its target attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Closed set of operators the host understands")]
pub enum Op {
	/// Replaces the current value
	Set,

	/// Adds to the current value
	Add,

	/// Raises the current value to at least the rule's value
	Max,

	/// Multiplies the current value
	Multiply,
}

impl Op {
	/// Gets the symbol used for the operator when describing rules.
	#[must_use]
	pub const fn symbol(self) -> &'static str {
		match self {
			Self::Set => "=",
			Self::Add => "+=",
			Self::Max => "max=",
			Self::Multiply => "*=",
		}
	}
}

/// Single incremental contribution to a derived attribute
///
/// The rule fires whenever its source attribute has a defined, non-zero value. Its formula is calculated with
/// `source` bound to that value, and the result is combined into the target with the rule's operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs, reason = "Plain data passed across the host boundary")]
pub struct Rule {
	/// Attribute the rule contributes to
	pub target: String,

	/// Attribute whose value triggers the rule and is bound to `source` in the formula
	pub source: String,

	/// How the result is combined into the target
	pub op: Op,

	/// Value of the contribution
	pub formula: Formula,
}

impl Rule {
	/// Creates a new rule.
	#[must_use]
	pub fn new(target: impl Into<String>, source: impl Into<String>, op: Op, formula: Formula) -> Self {
		Self {
			target: target.into(),
			source: source.into(),
			op,
			formula,
		}
	}
}

impl fmt::Display for Rule {
	/// Formats the rule as `target op formula <- source`, e.g. `toughness += source <- armorToughness`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {} <- {}", self.target, self.op.symbol(), self.formula, self.source)
	}
}

/// Host-owned dependency network that choices are registered into
pub trait RuleGraph {
	/// Registers the set of valid names for a catalog category.
	fn define_choice(&mut self, category: &str, names: &[String]);

	/// Registers one incremental contribution to a derived attribute.
	fn define_rule(&mut self, rule: Rule);

	/// Registers a prerequisite that the host's validation layer checks.
	fn define_requirement(&mut self, requirement: Requirement);

	/// Stores a choice's raw attrs string for display and editing.
	fn add_choice(&mut self, category: &str, name: &str, raw: &str);

	/// Gets the choices previously stored in a category.
	fn choices(&self, category: &str) -> Option<&Catalog>;

	/// Shorthand for [`Self::define_rule()`] with a freshly built [`Rule`].
	fn rule(&mut self, target: &str, source: &str, op: Op, formula: Formula) {
		self.define_rule(Rule::new(target, source, op, formula));
	}
}
