//! Edges, hindrances, skills, features and goodies.

use std::{fmt, str::FromStr};

use super::{clause_strings, ChoiceType, Fields, Record};
use crate::{attrs::Attrs, formula::Formula, graph::Op, requirement::Clause};

/// Edge, e.g. `Type=Combat Require="agility >= 8","skills.Fighting >= 6"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Edge {
	/// Edge group (Background, Combat, Leadership, ...)
	pub kind: Option<String>,

	/// Hard prerequisites
	pub require: Vec<Clause>,

	/// Soft prerequisites; the edge is allowed without them but is flagged
	pub imply: Vec<Clause>,
}

impl Record for Edge {
	const KIND: ChoiceType = ChoiceType::Edge;

	fn read(fields: &mut Fields<'_>) -> Self {
		Self {
			kind: fields.text("Type"),
			require: fields.clauses("Require"),
			imply: fields.clauses("Imply"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with_opt("Type", self.kind.clone())
			.with_list("Require", clause_strings(&self.require))
			.with_list("Imply", clause_strings(&self.imply))
	}
}

/// How severe a hindrance is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Fixed by the rules")]
pub enum Severity {
	/// Worth one hindrance point
	#[default]
	Minor,

	/// Worth two hindrance points
	Major,

	/// Can be taken as either; the character's choice decides its worth
	Either,
}

impl Severity {
	/// Gets the name of the severity as written in attrs.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Minor => "Minor",
			Self::Major => "Major",
			Self::Either => "Minor/Major",
		}
	}

	/// Hindrance points granted when taken at this severity. Hindrances that can be either severity are worth the
	/// minor value unless the major version is chosen separately.
	#[must_use]
	pub const fn points(self) -> i32 {
		match self {
			Self::Minor | Self::Either => 1,
			Self::Major => 2,
		}
	}
}

impl FromStr for Severity {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		[Self::Minor, Self::Major, Self::Either]
			.into_iter()
			.find(|severity| severity.name().eq_ignore_ascii_case(s))
			.ok_or(())
	}
}

/// Hindrance, e.g. `Severity=Major`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Hindrance {
	/// How severe the hindrance is
	pub severity: Severity,

	/// Prerequisites
	pub require: Vec<Clause>,
}

impl Record for Hindrance {
	const KIND: ChoiceType = ChoiceType::Hindrance;

	fn read(fields: &mut Fields<'_>) -> Self {
		let severity = match fields.text("Severity") {
			None => Severity::Minor,
			Some(text) => text.parse().unwrap_or_else(|()| {
				fields.invalid("Severity", &text, Severity::Minor.name());
				Severity::Minor
			}),
		};

		Self {
			severity,
			require: fields.clauses("Require"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with("Severity", self.severity.name())
			.with_list("Require", clause_strings(&self.require))
	}
}

/// Skill, e.g. `Attribute=agility Core=y`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Skill {
	/// Linked attribute
	pub attribute: Option<String>,

	/// Whether every character starts with the skill at d4
	pub core: bool,

	/// Eras the skill exists in (empty means all)
	pub eras: Vec<String>,
}

impl Record for Skill {
	const KIND: ChoiceType = ChoiceType::Skill;

	fn read(fields: &mut Fields<'_>) -> Self {
		Self {
			attribute: fields.text("Attribute"),
			core: fields.flag("Core"),
			eras: fields.list("Era"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with_opt("Attribute", self.attribute.clone())
			.with("Core", if self.core { "y" } else { "n" })
			.with_list("Era", self.eras.iter().cloned())
	}
}

/// Feature granted by another choice, e.g. `Section=combat Note="+1 Toughness"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Feature {
	/// Sheet section the feature's note is shown in
	pub section: Option<String>,

	/// Text shown on the sheet
	pub note: Option<String>,
}

impl Record for Feature {
	const KIND: ChoiceType = ChoiceType::Feature;

	fn read(fields: &mut Fields<'_>) -> Self {
		Self {
			section: fields.text("Section"),
			note: fields.text("Note"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with_opt("Section", self.section.clone())
			.with_opt("Note", self.note.clone())
	}
}

/// How a goody changes its attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Mirrors the rule operators")]
pub enum Effect {
	/// Adds to the attribute
	#[default]
	Add,

	/// Replaces the attribute
	Set,

	/// Raises the attribute to at least the value
	Raise,

	/// Multiplies the attribute
	Multiply,
}

impl Effect {
	/// Gets the name of the effect as written in attrs.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Add => "add",
			Self::Set => "set",
			Self::Raise => "raise",
			Self::Multiply => "multiply",
		}
	}

	/// Gets the rule operator that applies the effect.
	#[must_use]
	pub const fn op(self) -> Op {
		match self {
			Self::Add => Op::Add,
			Self::Set => Op::Set,
			Self::Raise => Op::Max,
			Self::Multiply => Op::Multiply,
		}
	}
}

impl fmt::Display for Effect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Effect {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		[Self::Add, Self::Set, Self::Raise, Self::Multiply]
			.into_iter()
			.find(|effect| effect.name().eq_ignore_ascii_case(s))
			.ok_or(())
	}
}

/// Free-form bonus a player can add to their sheet, e.g. `Attribute=parry Effect=add Value=1 Note="+1 Parry"`
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Goody {
	/// Attribute the goody changes
	pub attribute: Option<String>,

	/// How the attribute is changed
	pub effect: Effect,

	/// Amount of the change. The goody's own selection count is available as `source`.
	pub value: Formula,

	/// Sheet section the note is shown in
	pub section: Option<String>,

	/// Text shown on the sheet
	pub note: Option<String>,
}

impl Default for Goody {
	fn default() -> Self {
		Self {
			attribute: None,
			effect: Effect::Add,
			value: Formula::Num(1),
			section: None,
			note: None,
		}
	}
}

impl Record for Goody {
	const KIND: ChoiceType = ChoiceType::Goody;

	fn read(fields: &mut Fields<'_>) -> Self {
		let effect = match fields.text("Effect") {
			None => Effect::Add,
			Some(text) => text.parse().unwrap_or_else(|()| {
				fields.invalid("Effect", &text, Effect::Add.name());
				Effect::Add
			}),
		};

		let value = match fields.text("Value") {
			None => Formula::Num(1),
			Some(text) => text.parse().unwrap_or_else(|_| {
				fields.invalid("Value", &text, "1");
				Formula::Num(1)
			}),
		};

		Self {
			attribute: fields.text("Attribute"),
			effect,
			value,
			section: fields.text("Section"),
			note: fields.text("Note"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with_opt("Attribute", self.attribute.clone())
			.with("Effect", self.effect.name())
			.with("Value", self.value.to_string())
			.with_opt("Section", self.section.clone())
			.with_opt("Note", self.note.clone())
	}
}
