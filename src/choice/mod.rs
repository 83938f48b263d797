//! Typed records for every kind of choice a character can make, read from and written back to attrs strings.

pub mod arcane;
pub mod gear;
pub mod identity;
pub mod talent;

use std::{fmt, str::FromStr};

pub use self::{
	arcane::{Arcana, Power, SuperPower, SuperPowerModifier},
	gear::{Armor, Shield, Weapon},
	identity::{Concept, Deity, Era, Language, Race},
	talent::{Edge, Feature, Goody, Hindrance, Skill},
};
use crate::{attrs::Attrs, diagnostic::Warning, requirement::Clause};

/// Every kind of choice that can be registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Closed set; registration matches on it exhaustively")]
pub enum ChoiceType {
	/// Arcane background
	Arcana,
	/// Worn armor
	Armor,
	/// Character concept (suggested build)
	Concept,
	/// Deity
	Deity,
	/// Edge
	Edge,
	/// Setting era
	Era,
	/// Feature granted by another choice
	Feature,
	/// Free-form sheet bonus
	Goody,
	/// Hindrance
	Hindrance,
	/// Language
	Language,
	/// Arcane power
	Power,
	/// Race
	Race,
	/// Shield
	Shield,
	/// Skill
	Skill,
	/// Weapon
	Weapon,
	/// Super power (Super Powers Companion)
	SuperPower,
	/// Modifier applied to a super power (Super Powers Companion)
	SuperPowerModifier,
}

impl ChoiceType {
	/// All choice types, in alphabetical order of their names.
	pub const ALL: [Self; 17] = [
		Self::Arcana,
		Self::Armor,
		Self::Concept,
		Self::Deity,
		Self::Edge,
		Self::Era,
		Self::Feature,
		Self::Goody,
		Self::Hindrance,
		Self::Language,
		Self::Power,
		Self::Race,
		Self::Shield,
		Self::Skill,
		Self::Weapon,
		Self::SuperPower,
		Self::SuperPowerModifier,
	];

	/// Gets the human-readable name of the choice type, as the host refers to it.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Arcana => "Arcana",
			Self::Armor => "Armor",
			Self::Concept => "Concept",
			Self::Deity => "Deity",
			Self::Edge => "Edge",
			Self::Era => "Era",
			Self::Feature => "Feature",
			Self::Goody => "Goody",
			Self::Hindrance => "Hindrance",
			Self::Language => "Language",
			Self::Power => "Power",
			Self::Race => "Race",
			Self::Shield => "Shield",
			Self::Skill => "Skill",
			Self::Weapon => "Weapon",
			Self::SuperPower => "Super Power",
			Self::SuperPowerModifier => "Super Power Modifier",
		}
	}

	/// Gets the rule graph category that choices of this type are stored under.
	#[must_use]
	pub const fn category(self) -> &'static str {
		match self {
			Self::Arcana => "arcanas",
			Self::Armor => "armors",
			Self::Concept => "concepts",
			Self::Deity => "deities",
			Self::Edge => "edges",
			Self::Era => "eras",
			Self::Feature => "features",
			Self::Goody => "goodies",
			Self::Hindrance => "hindrances",
			Self::Language => "languages",
			Self::Power => "powers",
			Self::Race => "races",
			Self::Shield => "shields",
			Self::Skill => "skills",
			Self::Weapon => "weapons",
			Self::SuperPower => "superPowers",
			Self::SuperPowerModifier => "superPowerModifiers",
		}
	}
}

impl fmt::Display for ChoiceType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for ChoiceType {
	type Err = UnknownChoiceType;

	/// Reads a choice type from its name. Case and surrounding whitespace are ignored.
	///
	/// # Examples
	/// ```
	/// use savage_rules::ChoiceType;
	///
	/// assert_eq!("Super Power Modifier".parse(), Ok(ChoiceType::SuperPowerModifier));
	/// assert_eq!(" edge".parse(), Ok(ChoiceType::Edge));
	/// assert!("Spell".parse::<ChoiceType>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		Self::ALL
			.into_iter()
			.find(|kind| kind.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| UnknownChoiceType(s.to_owned()))
	}
}

/// Error for a choice type name that doesn't match any [`ChoiceType`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown choice type: {0}")]
#[allow(clippy::exhaustive_structs, reason = "Only ever wraps the bad name")]
pub struct UnknownChoiceType(pub String);

/// Typed record for one kind of choice
pub trait Record: Sized {
	/// Choice type the record belongs to
	const KIND: ChoiceType;

	/// Reads the record's fields. Bad values fall back to documented defaults and are reported through `fields`.
	fn read(fields: &mut Fields<'_>) -> Self;

	/// Writes the record back into attrs. Reading the result produces an equal record.
	fn to_attrs(&self) -> Attrs;

	/// Reads a record from parsed attrs, returning any warnings about individual fields.
	fn from_attrs(name: &str, attrs: &Attrs) -> (Self, Vec<Warning>) {
		let mut fields = Fields::new(Self::KIND, name, attrs);
		let record = Self::read(&mut fields);
		(record, fields.finish())
	}
}

/// Any typed choice record
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_enums, reason = "Mirrors ChoiceType")]
#[allow(missing_docs, reason = "Variants are named for their record types")]
pub enum Choice {
	Arcana(Arcana),
	Armor(Armor),
	Concept(Concept),
	Deity(Deity),
	Edge(Edge),
	Era(Era),
	Feature(Feature),
	Goody(Goody),
	Hindrance(Hindrance),
	Language(Language),
	Power(Power),
	Race(Race),
	Shield(Shield),
	Skill(Skill),
	Weapon(Weapon),
	SuperPower(SuperPower),
	SuperPowerModifier(SuperPowerModifier),
}

impl Choice {
	/// Reads the record for a choice of the given type.
	#[must_use]
	pub fn read(kind: ChoiceType, name: &str, attrs: &Attrs) -> (Self, Vec<Warning>) {
		/// Reads a record type and wraps it in its variant.
		fn wrap<R: Record>(name: &str, attrs: &Attrs, variant: fn(R) -> Choice) -> (Choice, Vec<Warning>) {
			let (record, warnings) = R::from_attrs(name, attrs);
			(variant(record), warnings)
		}

		match kind {
			ChoiceType::Arcana => wrap(name, attrs, Self::Arcana),
			ChoiceType::Armor => wrap(name, attrs, Self::Armor),
			ChoiceType::Concept => wrap(name, attrs, Self::Concept),
			ChoiceType::Deity => wrap(name, attrs, Self::Deity),
			ChoiceType::Edge => wrap(name, attrs, Self::Edge),
			ChoiceType::Era => wrap(name, attrs, Self::Era),
			ChoiceType::Feature => wrap(name, attrs, Self::Feature),
			ChoiceType::Goody => wrap(name, attrs, Self::Goody),
			ChoiceType::Hindrance => wrap(name, attrs, Self::Hindrance),
			ChoiceType::Language => wrap(name, attrs, Self::Language),
			ChoiceType::Power => wrap(name, attrs, Self::Power),
			ChoiceType::Race => wrap(name, attrs, Self::Race),
			ChoiceType::Shield => wrap(name, attrs, Self::Shield),
			ChoiceType::Skill => wrap(name, attrs, Self::Skill),
			ChoiceType::Weapon => wrap(name, attrs, Self::Weapon),
			ChoiceType::SuperPower => wrap(name, attrs, Self::SuperPower),
			ChoiceType::SuperPowerModifier => wrap(name, attrs, Self::SuperPowerModifier),
		}
	}

	/// Gets the type of the choice.
	#[must_use]
	pub const fn kind(&self) -> ChoiceType {
		match self {
			Self::Arcana(..) => ChoiceType::Arcana,
			Self::Armor(..) => ChoiceType::Armor,
			Self::Concept(..) => ChoiceType::Concept,
			Self::Deity(..) => ChoiceType::Deity,
			Self::Edge(..) => ChoiceType::Edge,
			Self::Era(..) => ChoiceType::Era,
			Self::Feature(..) => ChoiceType::Feature,
			Self::Goody(..) => ChoiceType::Goody,
			Self::Hindrance(..) => ChoiceType::Hindrance,
			Self::Language(..) => ChoiceType::Language,
			Self::Power(..) => ChoiceType::Power,
			Self::Race(..) => ChoiceType::Race,
			Self::Shield(..) => ChoiceType::Shield,
			Self::Skill(..) => ChoiceType::Skill,
			Self::Weapon(..) => ChoiceType::Weapon,
			Self::SuperPower(..) => ChoiceType::SuperPower,
			Self::SuperPowerModifier(..) => ChoiceType::SuperPowerModifier,
		}
	}

	/// Writes the record back into attrs.
	#[must_use]
	pub fn to_attrs(&self) -> Attrs {
		match self {
			Self::Arcana(record) => record.to_attrs(),
			Self::Armor(record) => record.to_attrs(),
			Self::Concept(record) => record.to_attrs(),
			Self::Deity(record) => record.to_attrs(),
			Self::Edge(record) => record.to_attrs(),
			Self::Era(record) => record.to_attrs(),
			Self::Feature(record) => record.to_attrs(),
			Self::Goody(record) => record.to_attrs(),
			Self::Hindrance(record) => record.to_attrs(),
			Self::Language(record) => record.to_attrs(),
			Self::Power(record) => record.to_attrs(),
			Self::Race(record) => record.to_attrs(),
			Self::Shield(record) => record.to_attrs(),
			Self::Skill(record) => record.to_attrs(),
			Self::Weapon(record) => record.to_attrs(),
			Self::SuperPower(record) => record.to_attrs(),
			Self::SuperPowerModifier(record) => record.to_attrs(),
		}
	}
}

/// Field reader handed to [`Record::read()`]. Falls back to defaults on bad values and records a [`Warning`] for each.
#[derive(Debug)]
pub struct Fields<'a> {
	/// Attrs being read
	attrs: &'a Attrs,

	/// Type of the choice being read
	kind: ChoiceType,

	/// Name of the choice being read
	name: &'a str,

	/// Problems found so far
	warnings: Vec<Warning>,
}

impl<'a> Fields<'a> {
	/// Creates a reader over a choice's attrs.
	#[must_use]
	pub const fn new(kind: ChoiceType, name: &'a str, attrs: &'a Attrs) -> Self {
		Self {
			attrs,
			kind,
			name,
			warnings: Vec::new(),
		}
	}

	/// Reads a single text value.
	#[must_use]
	pub fn text(&self, key: &str) -> Option<String> {
		self.attrs.get(key).map(ToOwned::to_owned)
	}

	/// Reads a list of text values. Missing keys produce an empty list.
	#[must_use]
	pub fn list(&self, key: &str) -> Vec<String> {
		self.attrs.get_list(key).to_vec()
	}

	/// Reads an integer, falling back to `default` when the key is missing or its value isn't an integer.
	pub fn int(&mut self, key: &str, default: i32) -> i32 {
		self.int_or_else(key, || default)
	}

	/// Reads an integer, computing the fallback only when it's needed.
	pub fn int_or_else(&mut self, key: &str, fallback: impl FnOnce() -> i32) -> i32 {
		match self.attrs.get(key) {
			None => fallback(),
			Some(value) => value.trim().parse().unwrap_or_else(|_| {
				let fallback = fallback();
				self.invalid(key, value, fallback.to_string());
				fallback
			}),
		}
	}

	/// Reads a list of integers, skipping (and reporting) any that aren't integers.
	pub fn ints(&mut self, key: &str) -> Vec<i32> {
		let mut ints = Vec::new();
		for value in self.attrs.get_list(key) {
			match value.trim().parse() {
				Ok(val) => ints.push(val),
				Err(..) => self.invalid(key, value, "nothing"),
			}
		}
		ints
	}

	/// Reads a yes/no flag. Missing keys are `false`.
	pub fn flag(&mut self, key: &str) -> bool {
		match self.attrs.get(key).map(str::to_ascii_lowercase).as_deref() {
			None | Some("n" | "no" | "false" | "0") => false,
			Some("y" | "yes" | "true" | "1") => true,
			Some(other) => {
				let other = other.to_owned();
				self.invalid(key, &other, "n");
				false
			}
		}
	}

	/// Reads a value with its own grammar, reporting a failure and returning `None` if it doesn't parse.
	pub fn parsed<T: FromStr>(&mut self, key: &str) -> Option<T> {
		let value = self.attrs.get(key)?;
		match value.parse() {
			Ok(parsed) => Some(parsed),
			Err(..) => {
				self.invalid(key, value, "nothing");
				None
			}
		}
	}

	/// Reads a list of requirement clauses.
	#[must_use]
	pub fn clauses(&self, key: &str) -> Vec<Clause> {
		self.attrs
			.get_list(key)
			.iter()
			.map(|text| Clause::read(text))
			.collect()
	}

	/// Reports a value that couldn't be used.
	pub fn invalid(&mut self, key: &str, value: &str, fallback: impl Into<String>) {
		self.warnings.push(
			Warning::InvalidField {
				kind: self.kind,
				name: self.name.to_owned(),
				key: key.to_owned(),
				value: value.to_owned(),
				fallback: fallback.into(),
			}
			.logged(),
		);
	}

	/// Finishes reading, handing back every problem found.
	#[must_use]
	pub fn finish(self) -> Vec<Warning> {
		self.warnings
	}
}

/// Formats a list of clauses for writing back into attrs.
pub(crate) fn clause_strings(clauses: &[Clause]) -> impl Iterator<Item = String> + '_ {
	clauses.iter().map(ToString::to_string)
}
