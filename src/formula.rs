//! AST-like data structures for the expressions carried by registered rules, and a checked evaluator for them.

use std::{fmt, str::FromStr};

use crate::parse;

/// Individual elements of a rule expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Formula {
	/// Standalone integer
	Num(i32),

	/// Value of the rule's source attribute
	Source,

	/// Value of another named attribute
	Attr(String),

	/// Cumulative cost schedule indexed by a 1-based rank. Ranks past the end of the schedule use its last entry, and
	/// ranks below 1 are worth nothing.
	Step(Vec<i32>, Box<Self>),

	/// Negation of an expression (makes the result of it negative)
	Neg(Box<Self>),

	/// Sum of two expressions
	Add(Box<Self>, Box<Self>),

	/// Difference of two expressions
	Sub(Box<Self>, Box<Self>),

	/// Product of two expressions
	Mul(Box<Self>, Box<Self>),

	/// Integer quotient of two expressions (rounded down)
	DivDown(Box<Self>, Box<Self>),

	/// Integer quotient of two expressions (rounded up)
	DivUp(Box<Self>, Box<Self>),
}

impl Formula {
	/// Creates a reference to another attribute.
	#[must_use]
	pub fn attr(name: impl Into<String>) -> Self {
		Self::Attr(name.into())
	}

	/// Creates the sum of two expressions.
	#[must_use]
	pub fn add(a: Self, b: Self) -> Self {
		Self::Add(Box::new(a), Box::new(b))
	}

	/// Creates the product of two expressions.
	#[must_use]
	pub fn mul(a: Self, b: Self) -> Self {
		Self::Mul(Box::new(a), Box::new(b))
	}

	/// Creates a rounded-down quotient of two expressions.
	#[must_use]
	pub fn div_down(a: Self, b: Self) -> Self {
		Self::DivDown(Box::new(a), Box::new(b))
	}

	/// Gets the type of this expression.
	#[must_use]
	pub const fn op_type(&self) -> OpType {
		match self {
			Self::Num(..) | Self::Source | Self::Attr(..) | Self::Step(..) => OpType::Value,
			Self::Neg(..) => OpType::Unary,
			Self::Add(..) | Self::Sub(..) => OpType::Additive,
			Self::Mul(..) | Self::DivDown(..) | Self::DivUp(..) => OpType::Multiplicative,
		}
	}

	/// Calculates the value of the expression for a given source value, resolving other attributes through `resolver`.
	/// Attributes the resolver doesn't know about count as 0.
	///
	/// # Errors
	/// If there is an integer overflow or division error, or the resolver fails, an error variant will be returned.
	pub fn calc<R: Resolve + ?Sized>(&self, source: i32, resolver: &mut R) -> Result<i32, CalcError> {
		match self {
			Self::Num(x) => Ok(*x),
			Self::Source => Ok(source),
			Self::Attr(name) => Ok(resolver.resolve(name)?.unwrap_or(0)),

			Self::Step(schedule, rank) => {
				let rank = rank.calc(source, resolver)?;
				Ok(step(schedule, rank))
			}

			Self::Neg(x) => x
				.calc(source, resolver)?
				.checked_neg()
				.ok_or_else(|| CalcError::Overflow(self.clone())),

			Self::Add(a, b) => a
				.calc(source, resolver)?
				.checked_add(b.calc(source, resolver)?)
				.ok_or_else(|| CalcError::Overflow(self.clone())),
			Self::Sub(a, b) => a
				.calc(source, resolver)?
				.checked_sub(b.calc(source, resolver)?)
				.ok_or_else(|| CalcError::Overflow(self.clone())),
			Self::Mul(a, b) => a
				.calc(source, resolver)?
				.checked_mul(b.calc(source, resolver)?)
				.ok_or_else(|| CalcError::Overflow(self.clone())),
			Self::DivDown(a, b) => a
				.calc(source, resolver)?
				.checked_div_euclid(b.calc(source, resolver)?)
				.ok_or_else(|| CalcError::Division(self.clone())),
			Self::DivUp(a, b) => {
				let a_val = a.calc(source, resolver)?;
				let b_val = b.calc(source, resolver)?;
				let result = a_val
					.checked_div_euclid(b_val)
					.ok_or_else(|| CalcError::Division(self.clone()))?;
				let remainder = a_val
					.checked_rem_euclid(b_val)
					.ok_or_else(|| CalcError::Division(self.clone()))?;
				if remainder != 0 {
					result.checked_add(1).ok_or_else(|| CalcError::Overflow(self.clone()))
				} else {
					Ok(result)
				}
			}
		}
	}

	/// Calculates the value of the expression using a plain lookup function for other attributes.
	/// See [`Self::calc()`] for more information.
	///
	/// # Examples
	/// ```
	/// use savage_rules::Formula;
	///
	/// let parry: Formula = "2 + skillDie.Fighting / 2".parse()?;
	/// let val = parry.calc_with(1, |attr| (attr == "skillDie.Fighting").then_some(8))?;
	/// assert_eq!(val, 6);
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	#[allow(clippy::missing_errors_doc, reason = "Same as calc()")]
	pub fn calc_with(&self, source: i32, lookup: impl Fn(&str) -> Option<i32>) -> Result<i32, CalcError> {
		self.calc(source, &mut Lookup(lookup))
	}
}

/// Looks up a rank in a cumulative schedule, clamping to its last entry.
fn step(schedule: &[i32], rank: i32) -> i32 {
	let Ok(rank) = usize::try_from(rank) else {
		return 0;
	};
	match rank.checked_sub(1) {
		Some(idx) => schedule.get(idx).or_else(|| schedule.last()).copied().unwrap_or(0),
		None => 0,
	}
}

impl fmt::Display for Formula {
	/// Builds a full usable expression string from the formula. Operations are grouped with parentheses whenever the
	/// order of operations could be considered ambiguous, such as when mixing addition and multiplication together.
	/// Re-parsing the output always results in a formula that calculates the same values.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Num(x) => write!(f, "{x}"),
			Self::Source => f.write_str("source"),
			Self::Attr(name) if is_bare_name(name) => f.write_str(name),
			Self::Attr(name) => write!(f, "[{name}]"),
			Self::Step(schedule, rank) => write!(
				f,
				"step[{}]({rank})",
				schedule.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
			),

			Self::Neg(x) => match x.op_type() {
				OpType::Value => write!(f, "-{x}"),
				_ => write!(f, "-({x})"),
			},

			Self::Add(a, b) => fmt_binary(f, self.op_type(), '+', a, b),
			Self::Sub(a, b) => fmt_binary(f, self.op_type(), '-', a, b),
			Self::Mul(a, b) => fmt_binary(f, self.op_type(), '*', a, b),
			Self::DivDown(a, b) => fmt_binary(f, self.op_type(), '/', a, b),
			Self::DivUp(a, b) => fmt_binary(f, self.op_type(), '\\', a, b),
		}
	}
}

/// Writes a binary expression with parentheses added to disambiguate mixed additive/multiplicative operations.
/// Right-hand operands of the same precedence are also wrapped, since every operator is left-associative.
fn fmt_binary(
	f: &mut fmt::Formatter<'_>,
	op_type: OpType,
	op: char,
	a: &Formula,
	b: &Formula,
) -> fmt::Result {
	let wrap_a = matches!((op_type, a.op_type()), (OpType::Multiplicative, OpType::Additive));
	let wrap_b = matches!(
		(op_type, b.op_type()),
		(OpType::Multiplicative, OpType::Additive | OpType::Multiplicative) | (OpType::Additive, OpType::Additive)
	);

	if wrap_a {
		write!(f, "({a})")?;
	} else {
		write!(f, "{a}")?;
	}
	write!(f, " {op} ")?;
	if wrap_b {
		write!(f, "({b})")
	} else {
		write!(f, "{b}")
	}
}

impl FromStr for Formula {
	type Err = parse::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse::run(parse::formula(), s)
	}
}

/// Checks whether an attribute name can be written without brackets.
fn is_bare_name(name: &str) -> bool {
	let mut chars = name.chars();
	chars.next().is_some_and(char::is_alphabetic)
		&& chars.all(|c| c.is_alphanumeric() || matches!(c, '.' | '_'))
		&& name != "source"
		&& name != "step"
}

/// Operation type for an individual expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_enums, reason = "Closed set of precedence levels")]
pub enum OpType {
	/// Single value, no operation
	Value,

	/// Unary operation
	Unary,

	/// Additive operation (sum or difference)
	Additive,

	/// Multiplicative operation (product or quotient)
	Multiplicative,
}

/// Source of values for attributes referenced by a [`Formula`]
pub trait Resolve {
	/// Resolves the current value of an attribute. `Ok(None)` means the attribute is undefined.
	///
	/// # Errors
	/// Implementations that compute values on demand may fail, e.g. when they detect a dependency cycle.
	fn resolve(&mut self, attr: &str) -> Result<Option<i32>, CalcError>;
}

/// Adapts a plain lookup function into a [`Resolve`]r.
#[derive(Debug, Clone, Copy)]
struct Lookup<F>(F);

impl<F: Fn(&str) -> Option<i32>> Resolve for Lookup<F> {
	fn resolve(&mut self, attr: &str) -> Result<Option<i32>, CalcError> {
		Ok((self.0)(attr))
	}
}

/// Error that can occur during [`Formula::calc()`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalcError {
	/// Integer overflow (likely during calculation of a sum or product)
	#[error("integer overflow while calculating {0}")]
	Overflow(Formula),

	/// Division-related error (likely division by zero)
	#[error("division error while calculating {0}")]
	Division(Formula),

	/// The attribute's value depends on itself.
	#[error("dependency cycle while resolving {0}")]
	Cycle(String),
}
