//! Parsers for every string grammar that appears in choice tables: attrs strings, rule formulas, weapon damage, and
//! requirement clauses.

use std::ops::Range;

use chumsky::{prelude::*, span::Span as _};

use crate::{
	attrs::{Attrs, Field},
	damage::{Damage, Die, Part},
	formula::Formula,
	requirement::{Clause, Condition},
};

/// Generates a parser that handles attrs strings like `Era=Medieval Area=Body Armor=1 Weight=15` and expects end of
/// input.
///
/// Fields are separated by whitespace. Values are separated by commas, and may be wrapped in double quotes to
/// protect embedded whitespace and commas.
pub fn attrs<'src>() -> impl Parser<'src, &'src str, Attrs, extra::Err<Rich<'src, char>>> + Clone {
	// Parser for field keys (e.g. MinStr, PowerPoints)
	let key = any()
		.filter(|c: &char| c.is_alphanumeric() || *c == '_')
		.repeated()
		.at_least(1)
		.collect::<String>()
		.labelled("key");

	// Parser for quoted values (e.g. "Grants +2 to resist, once per turn")
	let quoted = none_of("\"")
		.repeated()
		.collect::<String>()
		.delimited_by(just('"'), just('"'))
		.labelled("quoted value");

	// Parser for bare values (e.g. Medieval, Str+d6, 15)
	let bare = none_of(" \t\r\n,\"")
		.repeated()
		.at_least(1)
		.collect::<String>()
		.labelled("value");

	let field = key
		.then_ignore(just('='))
		.then(quoted.or(bare).separated_by(just(',')).collect::<Vec<_>>())
		.map(|(key, values)| Field { key, values });

	field
		.padded()
		.repeated()
		.collect::<Vec<_>>()
		.padded()
		.then_ignore(end())
		.map(Attrs::from_fields)
}

/// Generates a parser for optionally-negative integers.
fn signed_int<'src>() -> impl Parser<'src, &'src str, i32, extra::Err<Rich<'src, char>>> + Clone {
	just('-')
		.or_not()
		.then(text::int(10))
		.try_map(|(neg, digits): (Option<char>, &str), span| {
			let val: i32 = digits
				.parse()
				.map_err(|err| Rich::custom(span, format!("Integer: {err}")))?;
			if neg.is_some() {
				val.checked_neg()
					.ok_or_else(|| Rich::custom(span, "Integer: overflow"))
			} else {
				Ok(val)
			}
		})
}

/// Generates a parser that handles full rule formulas including mathematical operations, grouping with parentheses,
/// attribute references, and cost schedules, and expects end of input.
///
/// Attribute names containing anything other than letters, digits, `.` and `_` must be wrapped in square brackets
/// (e.g. `[features.Arcane Resistance]`). The bare name `source` refers to the rule's source attribute.
pub fn formula<'src>() -> impl Parser<'src, &'src str, Formula, extra::Err<Rich<'src, char>>> + Clone {
	// Helper function for operators
	let op = |c| just(c).padded();

	recursive(|formula| {
		// Parser for numbers
		let int = text::int(10).try_map(|s: &str, span| {
			s.parse()
				.map(Formula::Num)
				.map_err(|err| Rich::custom(span, format!("{err}")))
		});

		// Parser for cost schedules (e.g. step[2,5,9](source))
		let schedule = just("step")
			.ignore_then(
				signed_int()
					.padded()
					.separated_by(just(','))
					.at_least(1)
					.collect::<Vec<_>>()
					.delimited_by(just('['), just(']')),
			)
			.then(formula.clone().delimited_by(just('('), just(')')))
			.map(|(schedule, rank)| Formula::Step(schedule, Box::new(rank)));

		// Parser for plain attribute names (e.g. skillDie.Fighting)
		let name = any()
			.filter(|c: &char| c.is_alphabetic())
			.then(
				any()
					.filter(|c: &char| c.is_alphanumeric() || matches!(c, '.' | '_'))
					.repeated()
					.collect::<String>(),
			)
			.map(|(first, rest)| {
				let mut name = String::with_capacity(rest.len().saturating_add(1));
				name.push(first);
				name.push_str(&rest);
				if name == "source" {
					Formula::Source
				} else {
					Formula::Attr(name)
				}
			});

		// Parser for bracketed attribute names (e.g. [features.Arcane Resistance])
		let bracketed = none_of("]")
			.repeated()
			.at_least(1)
			.collect::<String>()
			.delimited_by(just('['), just(']'))
			.map(Formula::Attr);

		// Parser for formulas enclosed in parentheses
		let atom = choice((int, schedule, name, bracketed, formula.delimited_by(just('('), just(')')))).padded();

		// Parser for negative sign
		let unary = op('-').repeated().foldr(atom, |_op, rhs| Formula::Neg(Box::new(rhs)));

		// Parser for multiplication and division (round up or down)
		let product = unary.clone().foldl(
			choice((
				op('*').to(Formula::Mul as fn(_, _) -> _),
				op('/').to(Formula::DivDown as fn(_, _) -> _),
				op('\\').to(Formula::DivUp as fn(_, _) -> _),
			))
			.then(unary)
			.repeated(),
			|lhs, (op, rhs)| op(Box::new(lhs), Box::new(rhs)),
		);

		// Parser for addition and subtraction operators
		product.clone().foldl(
			choice((
				op('+').to(Formula::Add as fn(_, _) -> _),
				op('-').to(Formula::Sub as fn(_, _) -> _),
			))
			.then(product)
			.repeated(),
			|lhs, (op, rhs)| op(Box::new(lhs), Box::new(rhs)),
		)
	})
	.then_ignore(end())
}

/// Single term of a damage expression, before signs are applied
#[derive(Debug, Clone, Copy)]
enum DamageTerm {
	/// Wielder's strength die
	Str,

	/// Dice term
	Dice(Die),

	/// Flat bonus
	Bonus(i32),
}

/// Generates a parser that handles weapon damage like `Str+d6`, `2d6+1`, or `Str+d4+d4` and expects end of input.
pub fn damage<'src>() -> impl Parser<'src, &'src str, Damage, extra::Err<Rich<'src, char>>> + Clone {
	// Parser for dice terms (e.g. d6, 2d10)
	let die = text::int(10)
		.or_not()
		.then_ignore(just('d'))
		.then(text::int(10))
		.try_map(|(count, sides): (Option<&str>, &str), span| {
			let count = count
				.unwrap_or("1")
				.parse()
				.map_err(|err| Rich::custom(span, format!("Dice count: {err}")))?;
			let sides = sides
				.parse()
				.map_err(|err| Rich::custom(span, format!("Dice sides: {err}")))?;
			Ok(Die { count, sides })
		});

	// Parser for flat bonuses
	let bonus = text::int(10).try_map(|s: &str, span| {
		s.parse()
			.map_err(|err| Rich::custom(span, format!("Damage bonus: {err}")))
	});

	let term = choice((
		just("Str").or(just("str")).to(DamageTerm::Str),
		die.map(DamageTerm::Dice),
		bonus.map(DamageTerm::Bonus),
	))
	.padded();

	let sign = choice((just('+').to(false), just('-').to(true))).padded();

	term.clone()
		.then(sign.then(term).repeated().collect::<Vec<_>>())
		.then_ignore(end())
		.try_map(|(first, rest), span| {
			let mut damage = Damage::default();
			match first {
				DamageTerm::Str => damage.strength = true,
				DamageTerm::Dice(die) => damage.parts.push(Part::Dice(die)),
				DamageTerm::Bonus(val) => damage.parts.push(Part::Bonus(val)),
			}

			for (negative, term) in rest {
				match (negative, term) {
					(_, DamageTerm::Str) => return Err(Rich::custom(span, "Str must be the first damage term")),
					(true, DamageTerm::Dice(..)) => return Err(Rich::custom(span, "Dice can't be subtracted")),
					(false, DamageTerm::Dice(die)) => damage.parts.push(Part::Dice(die)),
					(false, DamageTerm::Bonus(val)) => damage.parts.push(Part::Bonus(val)),
					(true, DamageTerm::Bonus(val)) => damage.parts.push(Part::Bonus(
						val.checked_neg()
							.ok_or_else(|| Rich::custom(span, "Damage bonus: overflow"))?,
					)),
				}
			}

			Ok(damage)
		})
}

/// Generates a parser that handles simple comparison clauses like `strength >= 8` and expects end of input.
pub fn clause<'src>() -> impl Parser<'src, &'src str, Clause, extra::Err<Rich<'src, char>>> + Clone {
	let attr = none_of("<>=!|&()").repeated().at_least(1).collect::<String>();
	let symbol = choice((just(">="), just("<="), just("=="), just(">"), just("<"), just("=")));

	attr.then(symbol)
		.then(signed_int().padded())
		.then_ignore(end())
		.try_map(|((attr, symbol), val), span| {
			let attr = attr.trim();
			if attr.is_empty() {
				return Err(Rich::custom(span, "Clause: missing attribute"));
			}
			let cond = Condition::from_symbol_and_val(symbol, val)
				.ok_or_else(|| Rich::custom(span, format!("Clause: unknown comparison {symbol}")))?;
			Ok(Clause::Compare {
				attr: attr.to_owned(),
				cond,
			})
		})
}

/// Runs a parser over a full input, converting any failures into an [`Error`].
pub(crate) fn run<'src, T>(
	parser: impl Parser<'src, &'src str, T, extra::Err<Rich<'src, char>>>,
	input: &'src str,
) -> Result<T, Error> {
	parser
		.parse(input)
		.into_result()
		.map_err(|errs| Error::from_rich(&errs))
}

/// Single problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Problem {
	/// Byte range of the input the problem was found at
	pub span: Range<usize>,

	/// Description of the problem
	pub message: String,
}

/// Error that can occur while parsing any of the crate's string grammars
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{details}")]
#[non_exhaustive]
pub struct Error {
	/// All problem messages joined together
	pub details: String,

	/// Each individual problem, with its location in the input
	pub problems: Vec<Problem>,
}

impl Error {
	/// Collects chumsky's rich errors into a single error.
	fn from_rich(errs: &[Rich<'_, char>]) -> Self {
		let problems = errs
			.iter()
			.map(|err| {
				let span = err.span();
				Problem {
					span: span.start()..span.end(),
					message: err.to_string(),
				}
			})
			.collect::<Vec<_>>();

		Self {
			details: problems
				.iter()
				.map(|problem| problem.message.as_str())
				.collect::<Vec<_>>()
				.join("; "),
			problems,
		}
	}
}
