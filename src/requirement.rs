//! Prerequisite clauses attached to edges, hindrances, races and powers.

use std::{fmt, str::FromStr};

use crate::parse;

/// Test that an attribute value can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Unlikely to change, no logical fallback")]
pub enum Condition {
	/// Checks whether values are equal to its own value. Symbol: `=` (or `==`)
	Eq(i32),

	/// Checks whether values are greater than its own value. Symbol: `>`
	Gt(i32),

	/// Checks whether values are greater than or equal to its own value. Symbol: `>=`
	Gte(i32),

	/// Checks whether values are less than its own value. Symbol: `<`
	Lt(i32),

	/// Checks whether values are less than or equal to its own value. Symbol: `<=`
	Lte(i32),
}

impl Condition {
	/// Creates a condition from its corresponding symbol and a given value.
	///
	/// # Examples
	/// ```
	/// use savage_rules::requirement::Condition;
	///
	/// assert_eq!(Condition::from_symbol_and_val(">=", 8), Some(Condition::Gte(8)));
	/// assert_eq!(Condition::from_symbol_and_val("!", 8), None);
	/// ```
	#[must_use]
	pub fn from_symbol_and_val(symbol: &str, val: i32) -> Option<Self> {
		Some(match symbol {
			"=" | "==" => Self::Eq(val),
			">" => Self::Gt(val),
			">=" => Self::Gte(val),
			"<" => Self::Lt(val),
			"<=" => Self::Lte(val),
			_ => return None,
		})
	}

	/// Checks a value against the condition.
	#[must_use]
	pub const fn check(&self, val: i32) -> bool {
		match self {
			Self::Eq(expected) => val == *expected,
			Self::Gt(expected) => val > *expected,
			Self::Gte(expected) => val >= *expected,
			Self::Lt(expected) => val < *expected,
			Self::Lte(expected) => val <= *expected,
		}
	}

	/// Gets the symbol that represents the condition.
	#[must_use]
	pub const fn symbol(&self) -> &'static str {
		match self {
			Self::Eq(..) => "==",
			Self::Gt(..) => ">",
			Self::Gte(..) => ">=",
			Self::Lt(..) => "<",
			Self::Lte(..) => "<=",
		}
	}

	/// Gets the value the condition compares against.
	#[must_use]
	pub const fn val(&self) -> i32 {
		match self {
			Self::Eq(val) | Self::Gt(val) | Self::Gte(val) | Self::Lt(val) | Self::Lte(val) => *val,
		}
	}
}

impl fmt::Display for Condition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.symbol(), self.val())
	}
}

/// Single prerequisite clause
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Clause {
	/// Comparison of one attribute against a constant, e.g. `strength >= 8`
	Compare {
		/// Attribute being tested
		attr: String,

		/// Test applied to the attribute's value
		cond: Condition,
	},

	/// Anything more involved than a single comparison. The host's validation layer owns its meaning.
	Opaque(String),
}

impl Clause {
	/// Reads a clause from its written form. Clauses that aren't a simple comparison are kept verbatim rather than
	/// rejected.
	///
	/// # Examples
	/// ```
	/// use savage_rules::requirement::{Clause, Condition};
	///
	/// assert_eq!(
	/// 	Clause::read("strength >= 8"),
	/// 	Clause::Compare { attr: "strength".to_owned(), cond: Condition::Gte(8) },
	/// );
	/// assert_eq!(
	/// 	Clause::read("features.Brawler || features.Martial Artist"),
	/// 	Clause::Opaque("features.Brawler || features.Martial Artist".to_owned()),
	/// );
	/// ```
	#[must_use]
	pub fn read(text: &str) -> Self {
		text.parse().unwrap_or_else(|_| Self::Opaque(text.trim().to_owned()))
	}

	/// Evaluates the clause against a lookup of attribute values. Opaque clauses can't be judged here and yield `None`.
	#[must_use]
	pub fn check(&self, lookup: impl Fn(&str) -> i32) -> Option<bool> {
		match self {
			Self::Compare { attr, cond } => Some(cond.check(lookup(attr))),
			Self::Opaque(..) => None,
		}
	}
}

impl FromStr for Clause {
	type Err = parse::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse::run(parse::clause(), s)
	}
}

impl fmt::Display for Clause {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Compare { attr, cond } => write!(f, "{attr} {cond}"),
			Self::Opaque(text) => f.write_str(text),
		}
	}
}

/// Prerequisite attached to a choice and forwarded to the host's validation layer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs, reason = "Plain data passed across the host boundary")]
pub struct Requirement {
	/// Attribute that selecting the choice sets, e.g. `edges.Brawler`
	pub subject: String,

	/// Condition that must hold when the subject is selected
	pub clause: Clause,

	/// Whether a failed check is a hard error (`Require`) or only a warning (`Imply`)
	pub strict: bool,
}
