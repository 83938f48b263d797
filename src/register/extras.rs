//! Special-case rules for choices whose effects can't be expressed as plain field forwarding.
//!
//! Edges grant a feature of the same name, and races grant their listed features, so most special cases hang off the
//! feature rather than whatever granted it.

use super::selection_attr;
use crate::{
	choice::ChoiceType,
	formula::Formula,
	graph::{Op, RuleGraph},
	ruleset::Variant,
};

/// Features that raise an attribute by one step
const ATTRIBUTE_FEATURES: [(&str, &str); 5] = [
	("Agile", "agility"),
	("Smart", "smarts"),
	("Spirited", "spirit"),
	("Strong", "strength"),
	("Tough", "vigor"),
];

/// Registers the extra rules for a feature, if it has any.
pub(super) fn feature_rules<G: RuleGraph + ?Sized>(graph: &mut G, variant: Variant, name: &str, subject: &str) {
	if let Some((_, attribute)) = ATTRIBUTE_FEATURES.iter().find(|(feature, _)| *feature == name) {
		graph.rule(&format!("attributeStep.{attribute}"), subject, Op::Add, Formula::Num(1));
		return;
	}

	// Written as "Size +1", "Size -2", etc.
	if let Some(size) = name.strip_prefix("Size ").and_then(|size| size.trim_start_matches('+').parse().ok()) {
		graph.rule("size", subject, Op::Add, Formula::Num(size));
		return;
	}

	match (name, variant) {
		("Arcane Resistance", _) => graph.rule(
			"arcaneResistance",
			subject,
			Op::Set,
			Formula::add(
				Formula::Num(2),
				Formula::mul(Formula::Num(2), Formula::attr(feature_attr("Improved Arcane Resistance"))),
			),
		),

		("Brawler", Variant::Swade) => {
			graph.rule("toughness", subject, Op::Add, Formula::Num(1));
			graph.rule(
				"unarmedDamageStep",
				subject,
				Op::Set,
				Formula::add(Formula::Num(1), Formula::attr(feature_attr("Bruiser"))),
			);
		}
		("Brawler", Variant::Swd) => graph.rule(
			"unarmedDamageBonus",
			subject,
			Op::Set,
			Formula::add(
				Formula::Num(2),
				Formula::mul(Formula::Num(2), Formula::attr(feature_attr("Bruiser"))),
			),
		),

		("Brawny", Variant::Swade) => graph.rule("size", subject, Op::Add, Formula::Num(1)),
		("Brawny", Variant::Swd) => graph.rule("toughness", subject, Op::Add, Formula::Num(1)),

		("Fleet-Footed", _) => graph.rule("pace", subject, Op::Add, Formula::Num(2)),
		("Reduced Pace", _) => graph.rule("pace", subject, Op::Add, Formula::Num(-1)),

		("Keen Senses", Variant::Swade) => graph.rule("skillStep.Notice", subject, Op::Add, Formula::Num(1)),
		("Keen Senses", Variant::Swd) => graph.rule("skillModifier.Notice", subject, Op::Add, Formula::Num(2)),

		_ => {}
	}
}

/// Registers the extra rules for an edge, if it has any.
pub(super) fn edge_rules<G: RuleGraph + ?Sized>(graph: &mut G, variant: Variant, name: &str, subject: &str) {
	match (name, variant) {
		("Rich", _) => graph.rule("fundsMultiplier", subject, Op::Max, Formula::Num(3)),
		("Filthy Rich", _) => graph.rule("fundsMultiplier", subject, Op::Max, Formula::Num(5)),
		("Attractive" | "Very Attractive" | "Charismatic", Variant::Swd) => {
			graph.rule("charisma", subject, Op::Add, Formula::Num(2));
		}
		_ => {}
	}
}

/// Registers the extra rules for a hindrance, if it has any. Hindrances taken at either severity are selected with
/// their points (1 for minor, 2 for major), so effects that depend on severity scale with `source`.
pub(super) fn hindrance_rules<G: RuleGraph + ?Sized>(graph: &mut G, variant: Variant, name: &str, subject: &str) {
	match (name, variant) {
		("Slow", Variant::Swade) => graph.rule("pace", subject, Op::Add, Formula::Neg(Box::new(Formula::Source))),
		("Lame", Variant::Swd) => graph.rule("pace", subject, Op::Add, Formula::Num(-2)),

		("Small", Variant::Swade) => graph.rule("size", subject, Op::Add, Formula::Num(-1)),
		("Small", Variant::Swd) => graph.rule("toughness", subject, Op::Add, Formula::Num(-1)),

		("Obese", Variant::Swade) => graph.rule("size", subject, Op::Add, Formula::Num(1)),
		("Obese", Variant::Swd) => {
			graph.rule("toughness", subject, Op::Add, Formula::Num(1));
			graph.rule("pace", subject, Op::Add, Formula::Num(-1));
		}

		("Ugly", Variant::Swade) => graph.rule(
			"skillModifier.Persuasion",
			subject,
			Op::Add,
			Formula::Neg(Box::new(Formula::Source)),
		),
		("Ugly", Variant::Swd) => graph.rule("charisma", subject, Op::Add, Formula::Num(-2)),

		_ => {}
	}
}

/// Registers the extra rules for a race, if it has any.
pub(super) fn race_rules<G: RuleGraph + ?Sized>(graph: &mut G, name: &str, subject: &str) {
	// Humans start with a free edge
	if name == "Human" {
		graph.rule("edgePoints", subject, Op::Add, Formula::Num(1));
	}
}

/// Gets the selection attribute of a feature.
fn feature_attr(name: &str) -> String {
	selection_attr(ChoiceType::Feature, name)
}
