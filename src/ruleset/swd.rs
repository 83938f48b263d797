//! Savage Worlds Deluxe tables, as changes to the SWADE tables plus entries SWADE doesn't have.
//!
//! SWD has no minimum strength for gear. Gear that SWADE lists one for has it overridden with `MinStr=0` so the stored
//! entries read the same way, and registration ignores any minimum under SWD, including one implied by a weapon's
//! damage.

use crate::{
	choice::ChoiceType,
	merge::{changeset, table as build, Changeset, Table},
};

/// Gets the changes SWD makes to the SWADE table for a choice type.
pub(super) fn changes(kind: ChoiceType) -> Changeset {
	match kind {
		ChoiceType::Arcana => changeset(&[("Gifted", None), ("Miracles", Some("Skill=Faith"))]),
		ChoiceType::Armor => changeset(&[
			("Leather", Some("Armor=1 MinStr=0")),
			("Chain Hauberk", Some("Armor=2 MinStr=0")),
			("Plate Corselet", Some("Armor=3 MinStr=0")),
			("Plate Vambraces", Some("Armor=3 MinStr=0")),
			("Plate Greaves", Some("Armor=3 MinStr=0")),
			("Pot Helm", Some("MinStr=0")),
			("Flak Jacket", Some("MinStr=0")),
			("Kevlar Vest", Some("MinStr=0")),
			("Motorcycle Helmet", Some("MinStr=0")),
			("Body Armor", Some("MinStr=0")),
			("Infantry Battle Suit", Some("MinStr=0")),
		]),
		ChoiceType::Concept => changeset(&[("Hacker", None)]),
		ChoiceType::Edge => changeset(&[
			("Fame", None),
			("Famous", None),
			("Brawler", Some("Require=\"strength >= 8\"")),
			("Bruiser", Some("Require=\"advances >= 4\",\"edges.Brawler >= 1\"")),
			("Calculating", None),
			("Elan", Some("Require=\"spirit >= 8\"")),
			("Extraction", Some("Require=\"agility >= 8\"")),
			("Free Runner", None),
			("Martial Artist", Some("Require=\"skills.Fighting >= 6\"")),
			("Rapid Fire", None),
			("Rock And Roll!", Some("Require=\"advances >= 4\",\"skills.Shooting >= 8\" Imply=")),
			("Very Attractive", Some("Require=\"edges.Attractive >= 1\",\"vigor >= 6\"")),
		]),
		ChoiceType::Feature => changeset(&[
			("Brawler", Some("Note=\"+2 unarmed damage\"")),
			("Bruiser", Some("Note=\"Brawler damage increases by +2\"")),
			("Brawny", Some("Note=\"+1 Toughness, load limit is 8x Strength\"")),
			("Keen Senses", Some("Note=\"+2 Notice\"")),
			("Size +1", None),
		]),
		ChoiceType::Hindrance => changeset(&[
			("Anemic", None),
			("Driven", None),
			("Slow", None),
			("Small", Some("Severity=Major Require=")),
			("Obese", Some("Require=")),
			("Ugly", Some("Severity=Minor")),
			("Young", Some("Severity=Major")),
		]),
		ChoiceType::Power => changeset(&[
			("Arcane Protection", None),
			("Protection", None),
			("Relief", None),
			("Sloth/Speed", None),
			("Bolt", Some("Range=\"12/24/48\"")),
		]),
		ChoiceType::Race => changeset(&[
			("Android", None),
			("Aquarian", None),
			("Half-Folk", Some("Features=Luck,Small,Spirited")),
			("Rakashan", None),
		]),
		ChoiceType::Shield => changeset(&[
			("Small Shield", Some("MinStr=0")),
			("Medium Shield", Some("Parry=1 MinStr=0")),
			("Large Shield", Some("Parry=2 MinStr=0")),
			("Ballistic Shield", Some("MinStr=0")),
			("Riot Shield", Some("MinStr=0")),
		]),
		ChoiceType::Skill => changeset(&[
			("Academics", None),
			("Athletics", None),
			("Battle", None),
			("Common Knowledge", None),
			("Electronics", None),
			("Focus", None),
			("Hacking", None),
			("Occult", None),
			("Performance", None),
			("Research", None),
			("Science", None),
		]),
		ChoiceType::Weapon => changeset(&[
			("Dagger", Some("MinStr=0")),
			("Bow", Some("MinStr=0")),
			("Crossbow", Some("MinStr=0")),
			("Colt 1911", Some("MinStr=0")),
			("M-16", Some("MinStr=0")),
			("Shotgun", Some("MinStr=0 Damage=3d6")),
			("Laser Pistol", Some("MinStr=0")),
			("Laser Rifle", Some("MinStr=0")),
		]),
		_ => Changeset::new(),
	}
}

/// Gets the entries SWD adds that have no SWADE counterpart.
pub(super) fn extra(kind: ChoiceType) -> Table {
	match kind {
		ChoiceType::Arcana => build(&[("Super Powers", "Powers=Armor,Bolt,Deflection,Fly,Speed")]),
		ChoiceType::Edge => build(&[
			("Acrobat", "Type=Combat Require=\"agility >= 8\",\"strength >= 6\""),
			("Improved Dodge", "Type=Combat Require=\"advances >= 8\",\"edges.Dodge >= 1\""),
			("Noble", "Type=Background"),
		]),
		ChoiceType::Hindrance => build(&[("Lame", "Severity=Major")]),
		ChoiceType::Power => build(&[
			("Armor", "Advances=0 PowerPoints=2 Range=Touch Description=\"+2 Armor\""),
			("Greater Healing", "Advances=8 PowerPoints=10 Range=Touch Description=\"Removes wounds\""),
			("Quickness", "Advances=4 PowerPoints=4 Range=Touch Description=\"Two actions per round\""),
			("Speed", "Advances=0 PowerPoints=1 Range=Touch Description=\"Doubles Pace\""),
		]),
		ChoiceType::Skill => build(&[
			("Climbing", "Attribute=strength"),
			("Investigation", "Attribute=smarts"),
			("Knowledge", "Attribute=smarts"),
			("Lockpicking", "Attribute=agility"),
			("Streetwise", "Attribute=smarts"),
			("Swimming", "Attribute=agility"),
			("Throwing", "Attribute=agility"),
			("Tracking", "Attribute=smarts"),
		]),
		_ => Table::new(),
	}
}
