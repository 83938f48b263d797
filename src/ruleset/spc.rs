//! Super Powers Companion tables.

use crate::{
	choice::ChoiceType,
	merge::{table as build, Table},
};

/// Arcane background the Companion replaces
pub(super) const ARCANA: &str = "Super Powers";

/// Gets the Companion's table for a choice type. Types the Companion doesn't touch get an empty table.
pub(super) fn table(kind: ChoiceType) -> Table {
	match kind {
		ChoiceType::Arcana => build(&[(ARCANA, "")]),
		ChoiceType::SuperPower => super_powers(),
		ChoiceType::SuperPowerModifier => modifiers(),
		_ => Table::new(),
	}
}

fn super_powers() -> Table {
	build(&[
		("Ageless", "Cost=1 Description=\"Doesn't age\""),
		(
			"Armor",
			"Cost=2 Modifier=Hardy,Heavy,\"Partial Protection\" Description=\"+2 Armor per level\"",
		),
		(
			"Attack, Melee",
			"Cost=2 Modifier=\"Armor Piercing\",Damage,Heavy,Lethal Description=\"Str+d6 damage per level\"",
		),
		(
			"Attack, Ranged",
			"Cost=2 Modifier=\"Area Effect\",\"Armor Piercing\",Damage,Heavy,Lethal,Range \
			 Description=\"2d6 damage, Range 12/24/48\"",
		),
		("Awareness", "Cost=3 Modifier=Range Description=\"Knows everything in the area\""),
		("Chameleon", "Cost=3 Modifier=\"Requires Touch\" Description=\"Takes on another's appearance\""),
		("Darkvision", "Cost=1 Description=\"Sees in darkness\""),
		("Deflection", "Cost=2 Modifier=Selective Description=\"-2 to attacks per level\""),
		("Fear", "Cost=2 Modifier=\"Area Effect\",Range Description=\"Causes Fear checks\""),
		("Flight", "Cost=2 Modifier=Lasting,Strong Description=\"Pace 12 flight per level\""),
		("Healing", "Cost=2 Modifier=\"Requires Touch\",Selective Description=\"Heals wounds\""),
		("Invisibility", "Cost=5 Modifier=Selective Description=\"Can't be seen\""),
		("Leaping", "Cost=1 Description=\"Jumps great distances\""),
		("Mind Reading", "Cost=2 Modifier=Range,\"Requires Touch\" Description=\"Reads thoughts\""),
		("Parry", "Cost=1 Description=\"+1 Parry per level\""),
		("Regeneration", "Cost=2 Modifier=Lasting Description=\"Natural healing every day\""),
		("Speed", "Cost=1 Modifier=Strong Description=\"+2 Pace per level\""),
		("Stun", "Cost=2 Modifier=\"Area Effect\",Range Description=\"Stuns targets\""),
		("Super Attribute", "Cost=2 Description=\"+1 attribute step per level\""),
		("Super Edge", "Cost=2 Description=\"Gains an edge without requirements\""),
		("Super Skill", "Cost=1 Description=\"+1 skill step per level\""),
		("Telekinesis", "Cost=5 Modifier=Range,Strong Description=\"Moves objects with the mind\""),
		("Telepathy", "Cost=2 Modifier=Range,\"Requires Touch\" Description=\"Mental communication\""),
		("Teleport", "Cost=3 Modifier=Range,Selective Description=\"Moves instantly\""),
		("Toughness", "Cost=1 Description=\"+1 Toughness per level\""),
		("Wall Walker", "Cost=1 Description=\"Walks on walls\""),
	])
}

fn modifiers() -> Table {
	build(&[
		("Area Effect", "Cost=2,2 Description=\"Medium Blast Template, then Large\""),
		("Armor Piercing", "Cost=1,1,1,1 Description=\"+2 AP per level\""),
		("Damage", "Cost=2,2,2 Description=\"+1 damage die per level\""),
		("Hardy", "Cost=2 Description=\"A second Shaken doesn't cause a wound\""),
		("Heavy", "Cost=2 Description=\"Counts as a heavy weapon or heavy armor\""),
		("Lasting", "Cost=1 Description=\"Doesn't need to be maintained\""),
		("Lethal", "Cost=1 Description=\"Wounds instead of Shaken\""),
		("Partial Protection", "Cost=-1 Description=\"Covers only part of the body\""),
		("Range", "Cost=1 Description=\"Range 12/24/48\""),
		("Requires Touch", "Cost=-2 Description=\"Only works on touch\""),
		("Selective", "Cost=1 Description=\"Chooses which targets are affected\""),
		("Strong", "Cost=1,2 Description=\"Greater effect, then greater still\""),
	])
}
