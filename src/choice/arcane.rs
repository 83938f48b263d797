//! Arcane backgrounds, powers, and the Super Powers Companion's super powers and their modifiers.

use super::{ChoiceType, Fields, Record};
use crate::{attrs::Attrs, cost::CostSchedule};

/// Arcane background, e.g. `Skill=Spellcasting Powers=Bolt,Blast,"Arcane Protection"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Arcana {
	/// Arcane skill used to activate powers
	pub skill: Option<String>,

	/// Powers available to the background (empty means any)
	pub powers: Vec<String>,
}

impl Record for Arcana {
	const KIND: ChoiceType = ChoiceType::Arcana;

	fn read(fields: &mut Fields<'_>) -> Self {
		Self {
			skill: fields.text("Skill"),
			powers: fields.list("Powers"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with_opt("Skill", self.skill.clone())
			.with_list("Powers", self.powers.iter().cloned())
	}
}

/// Arcane power, e.g. `Advances=0 PowerPoints=2 Range=Smarts Description="Target's Toughness +2"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Power {
	/// Advances the character needs before learning the power
	pub advances: i32,

	/// Base power point cost
	pub power_points: i32,

	/// Range, as written in the rulebook
	pub range: Option<String>,

	/// Short description
	pub description: Option<String>,
}

impl Record for Power {
	const KIND: ChoiceType = ChoiceType::Power;

	fn read(fields: &mut Fields<'_>) -> Self {
		Self {
			advances: fields.int("Advances", 0),
			power_points: fields.int("PowerPoints", 0),
			range: fields.text("Range"),
			description: fields.text("Description"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with("Advances", self.advances.to_string())
			.with("PowerPoints", self.power_points.to_string())
			.with_opt("Range", self.range.clone())
			.with_opt("Description", self.description.clone())
	}
}

/// Super power, e.g. `Cost=2 Modifier=Range,"Requires Touch"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct SuperPower {
	/// Power points per selection of the power itself
	pub cost: i32,

	/// Modifiers that can be bought for the power
	pub modifiers: Vec<String>,

	/// Short description
	pub description: Option<String>,
}

impl Record for SuperPower {
	const KIND: ChoiceType = ChoiceType::SuperPower;

	fn read(fields: &mut Fields<'_>) -> Self {
		Self {
			cost: fields.int("Cost", 0),
			modifiers: fields.list("Modifier"),
			description: fields.text("Description"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with("Cost", self.cost.to_string())
			.with_list("Modifier", self.modifiers.iter().cloned())
			.with_opt("Description", self.description.clone())
	}
}

/// Super power modifier, e.g. `Cost=1` or `Cost=2,3,4` for modifiers whose later ranks cost more
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct SuperPowerModifier {
	/// Cost of each rank of the modifier
	pub cost: CostSchedule,

	/// Short description
	pub description: Option<String>,
}

impl Default for SuperPowerModifier {
	fn default() -> Self {
		Self {
			cost: CostSchedule::flat(0),
			description: None,
		}
	}
}

impl Record for SuperPowerModifier {
	const KIND: ChoiceType = ChoiceType::SuperPowerModifier;

	fn read(fields: &mut Fields<'_>) -> Self {
		let deltas = fields.ints("Cost");
		let cost = CostSchedule::from_deltas(&deltas).unwrap_or_else(|| {
			let raw = fields.text("Cost").unwrap_or_default();
			fields.invalid("Cost", &raw, "0");
			CostSchedule::flat(0)
		});

		Self {
			cost,
			description: fields.text("Description"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with_list("Cost", self.cost.deltas().iter().map(ToString::to_string))
			.with_opt("Description", self.description.clone())
	}
}
