//! Registration of choices into a [`RuleGraph`]: each kind of choice is turned into the rules and requirements that
//! describe what selecting it does to a character.
//!
//! Attribute names follow the host's conventions. Selecting a choice sets `{category}.{name}` (e.g. `edges.Brawler`)
//! to how many times it was taken, or to its rank for super power modifiers. Attribute and skill dice are derived from
//! their steps (`attributeStep.vigor`, `skillStep.Notice`), where step 1 is a d4.

mod extras;

use std::collections::BTreeMap;

use crate::{
	attrs::Attrs,
	choice::{
		gear::Area, talent::Severity, Arcana, Armor, Choice, ChoiceType, Edge, Goody, Hindrance, Power, Race, Shield,
		Skill, Weapon,
	},
	cost::{build_power_cost_rules, CostSchedule},
	diagnostic::Warning,
	formula::Formula,
	graph::{Op, RuleGraph},
	requirement::{Clause, Condition, Requirement},
	ruleset::Variant,
};

/// The five core attributes
pub const ATTRIBUTES: [&str; 5] = ["agility", "smarts", "spirit", "strength", "vigor"];

/// Gets the attribute that holds whether a choice is selected.
#[must_use]
pub fn selection_attr(kind: ChoiceType, name: &str) -> String {
	format!("{}.{name}", kind.category())
}

/// Builds the formula that turns a step into a die size: `2 + 2 * source`.
#[must_use]
pub fn die_from_step() -> Formula {
	Formula::add(Formula::Num(2), Formula::mul(Formula::Num(2), Formula::Source))
}

/// Registers choices into a [`RuleGraph`] for one variant of the rules.
///
/// Super power modifiers are remembered as they're registered, so that super powers registered afterwards (during the
/// same load, or later by the host) can look up what each of their modifiers costs.
///
/// # Examples
/// ```
/// use savage_rules::{choice::ChoiceType, register::Registrar, MemoryGraph, Variant};
///
/// let mut graph = MemoryGraph::new();
/// let mut registrar = Registrar::new(Variant::Swade);
/// assert!(registrar.register_choice(&mut graph, ChoiceType::SuperPowerModifier, "Range", "Cost=1").is_empty());
/// assert!(registrar.register_choice(&mut graph, ChoiceType::SuperPower, "Stun", "Cost=2 Modifier=Range").is_empty());
///
/// let mut eval = graph.evaluate([("superPowers.Stun", 1), ("superPowerModifiers.Stun (Range)", 1)]);
/// assert_eq!(eval.value("superPowerPointsAllocated")?, Some(3));
/// # Ok::<(), savage_rules::formula::CalcError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registrar {
	/// Edition of the rules being registered
	variant: Variant,

	/// Cost schedules of every super power modifier registered so far
	modifiers: BTreeMap<String, CostSchedule>,
}

impl Registrar {
	/// Creates a registrar for a variant that hasn't registered anything yet.
	#[must_use]
	pub const fn new(variant: Variant) -> Self {
		Self {
			variant,
			modifiers: BTreeMap::new(),
		}
	}

	/// Gets the cost schedules of the super power modifiers registered so far.
	#[must_use]
	pub const fn modifiers(&self) -> &BTreeMap<String, CostSchedule> {
		&self.modifiers
	}

	/// Registers a choice from its raw attrs string. The string is parsed, read into the record for `kind`, stored in
	/// the graph, and then registered.
	///
	/// A string that can't be parsed at all skips the choice. Fields with bad values fall back to their defaults.
	/// Either way the problem is reported in the returned warnings.
	pub fn register_choice<G: RuleGraph + ?Sized>(
		&mut self,
		graph: &mut G,
		kind: ChoiceType,
		name: &str,
		raw: &str,
	) -> Vec<Warning> {
		let attrs = match raw.parse::<Attrs>() {
			Ok(attrs) => attrs,
			Err(err) => {
				return vec![Warning::MalformedAttrs {
					kind,
					name: name.to_owned(),
					source: err,
				}
				.logged()];
			}
		};

		let (choice, mut warnings) = Choice::read(kind, name, &attrs);
		graph.add_choice(kind.category(), name, raw);
		warnings.extend(self.register(graph, name, &choice));
		tracing::debug!(%kind, name, "registered choice");
		warnings
	}

	/// Registers a choice whose type is given by name, as the host does. An unknown type name skips the choice with a
	/// warning.
	pub fn register_named<G: RuleGraph + ?Sized>(
		&mut self,
		graph: &mut G,
		kind: &str,
		name: &str,
		raw: &str,
	) -> Vec<Warning> {
		match kind.parse::<ChoiceType>() {
			Ok(kind) => self.register_choice(graph, kind, name, raw),
			Err(err) => vec![Warning::UnknownChoiceType {
				kind: err.0,
				name: name.to_owned(),
			}
			.logged()],
		}
	}

	/// Registers the rules and requirements for an already-read choice.
	pub fn register<G: RuleGraph + ?Sized>(&mut self, graph: &mut G, name: &str, choice: &Choice) -> Vec<Warning> {
		let variant = self.variant;
		let subject = selection_attr(choice.kind(), name);
		match choice {
			Choice::Arcana(arcana) => arcana_rules(graph, &subject, arcana),
			Choice::Armor(armor) => armor_rules(graph, variant, &subject, armor),
			Choice::Edge(edge) => edge_rules(graph, variant, name, &subject, edge),
			Choice::Feature(..) => extras::feature_rules(graph, variant, name, &subject),
			Choice::Goody(goody) => goody_rules(graph, &subject, goody),
			Choice::Hindrance(hindrance) => hindrance_rules(graph, variant, name, &subject, hindrance),
			Choice::Language(..) => graph.rule("languageCount", &subject, Op::Add, Formula::Num(1)),
			Choice::Power(power) => power_rules(graph, &subject, power),
			Choice::Race(race) => race_rules(graph, name, &subject, race),
			Choice::Shield(shield) => shield_rules(graph, variant, &subject, shield),
			Choice::Skill(skill) => skill_rules(graph, variant, name, skill),
			Choice::Weapon(weapon) => weapon_rules(graph, variant, &subject, weapon),
			Choice::SuperPower(power) => {
				return build_power_cost_rules(graph, name, power.cost, &power.modifiers, &self.modifiers);
			}
			Choice::SuperPowerModifier(modifier) => {
				self.modifiers.insert(name.to_owned(), modifier.cost.clone());
			}
			Choice::Concept(..) | Choice::Deity(..) | Choice::Era(..) => {}
		}
		Vec::new()
	}
}

/// Registers the attribute and derived-trait rules every character sheet needs, independent of any catalog.
pub fn register_attributes<G: RuleGraph + ?Sized>(graph: &mut G, variant: Variant) {
	let mut names = Vec::from(ATTRIBUTES.map(ToOwned::to_owned));
	if variant == Variant::Swd {
		names.push("charisma".to_owned());
	}
	graph.define_choice("attributes", &names);

	for attribute in ATTRIBUTES {
		let step = format!("attributeStep.{attribute}");
		graph.rule(&step, "level", Op::Add, Formula::Num(1));
		graph.rule(&step, &format!("attributeAllocation.{attribute}"), Op::Add, Formula::Source);
		graph.rule(attribute, &step, Op::Set, die_from_step());
	}

	graph.rule("pace", "level", Op::Set, Formula::Num(6));
	graph.rule(
		"parry",
		"level",
		Op::Set,
		Formula::add(Formula::Num(2), Formula::div_down(Formula::attr("skills.Fighting"), Formula::Num(2))),
	);
	graph.rule(
		"toughness",
		"level",
		Op::Set,
		Formula::add(Formula::Num(2), Formula::div_down(Formula::attr("vigor"), Formula::Num(2))),
	);
	graph.rule("toughness", "armorToughness", Op::Add, Formula::Source);
	graph.rule("toughness", "size", Op::Add, Formula::Source);
	graph.rule("edgePoints", "advances", Op::Add, Formula::Source);
	graph.rule("funds", "level", Op::Set, Formula::Num(500));
	graph.rule("funds", "fundsMultiplier", Op::Multiply, Formula::Source);
	if variant == Variant::Swd {
		graph.rule("charisma", "level", Op::Set, Formula::Num(0));
	}

	tracing::debug!(?variant, attributes = names.len(), "registered attribute rules");
}

/// Forwards a choice's prerequisite clauses to the graph.
fn requirements<G: RuleGraph + ?Sized>(graph: &mut G, subject: &str, clauses: &[Clause], strict: bool) {
	for clause in clauses {
		graph.define_requirement(Requirement {
			subject: subject.to_owned(),
			clause: clause.clone(),
			strict,
		});
	}
}

/// Requires a minimum strength die to use a piece of gear without penalty. SWD gear has no minimum.
fn min_str<G: RuleGraph + ?Sized>(graph: &mut G, variant: Variant, subject: &str, min_str: i32) {
	if min_str > 0 && variant == Variant::Swade {
		requirements(
			graph,
			subject,
			&[Clause::Compare {
				attr: "strength".to_owned(),
				cond: Condition::Gte(min_str),
			}],
			false,
		);
	}
}

/// Counts a piece of gear's weight towards the character's load.
fn weight<G: RuleGraph + ?Sized>(graph: &mut G, subject: &str, weight: i32) {
	if weight != 0 {
		graph.rule("gearWeight", subject, Op::Add, Formula::mul(Formula::Source, Formula::Num(weight)));
	}
}

/// Arcane backgrounds grant power points and mark their skill as arcane.
fn arcana_rules<G: RuleGraph + ?Sized>(graph: &mut G, subject: &str, arcana: &Arcana) {
	graph.rule("powerPoints", subject, Op::Add, Formula::Num(10));
	if let Some(skill) = &arcana.skill {
		graph.rule(&format!("arcaneSkill.{skill}"), subject, Op::Set, Formula::Num(1));
	}
}

/// Armor of the same area doesn't stack; the best piece counts.
fn armor_rules<G: RuleGraph + ?Sized>(graph: &mut G, variant: Variant, subject: &str, armor: &Armor) {
	let target = match armor.area {
		Area::Body => "armorToughness".to_owned(),
		area => format!("armor{}", area.name()),
	};
	graph.rule(&target, subject, Op::Max, Formula::Num(armor.armor));
	weight(graph, subject, armor.weight);
	min_str(graph, variant, subject, armor.min_str);
}

/// Registers an edge.
fn edge_rules<G: RuleGraph + ?Sized>(graph: &mut G, variant: Variant, name: &str, subject: &str, edge: &Edge) {
	// Every edge grants the feature of the same name
	graph.rule(&selection_attr(ChoiceType::Feature, name), subject, Op::Add, Formula::Source);
	graph.rule("edgesTaken", subject, Op::Add, Formula::Source);
	requirements(graph, subject, &edge.require, true);
	requirements(graph, subject, &edge.imply, false);
	extras::edge_rules(graph, variant, name, subject);
}

/// Registers a goody.
fn goody_rules<G: RuleGraph + ?Sized>(graph: &mut G, subject: &str, goody: &Goody) {
	if let Some(attribute) = &goody.attribute {
		graph.rule(attribute, subject, goody.effect.op(), goody.value.clone());
	}
}

/// Registers a hindrance.
fn hindrance_rules<G: RuleGraph + ?Sized>(
	graph: &mut G,
	variant: Variant,
	name: &str,
	subject: &str,
	hindrance: &Hindrance,
) {
	// Hindrances that can be taken at either severity are selected with the points they're worth
	let points = match hindrance.severity {
		Severity::Either => Formula::Source,
		severity => Formula::Num(severity.points()),
	};
	graph.rule("hindrancePoints", subject, Op::Add, points);
	requirements(graph, subject, &hindrance.require, true);
	extras::hindrance_rules(graph, variant, name, subject);
}

/// Powers count towards those known, and may need advances before they can be learned.
fn power_rules<G: RuleGraph + ?Sized>(graph: &mut G, subject: &str, power: &Power) {
	graph.rule("powersKnown", subject, Op::Add, Formula::Num(1));
	if power.advances > 0 {
		requirements(
			graph,
			subject,
			&[Clause::Compare {
				attr: "advances".to_owned(),
				cond: Condition::Gte(power.advances),
			}],
			true,
		);
	}
}

/// Races grant their features and languages to every member.
fn race_rules<G: RuleGraph + ?Sized>(graph: &mut G, name: &str, subject: &str, race: &Race) {
	for feature in &race.features {
		graph.rule(&selection_attr(ChoiceType::Feature, feature), subject, Op::Add, Formula::Num(1));
	}
	for language in &race.languages {
		graph.rule(&selection_attr(ChoiceType::Language, language), subject, Op::Set, Formula::Num(1));
	}
	requirements(graph, subject, &race.require, true);
	extras::race_rules(graph, name, subject);
}

/// Registers a shield.
fn shield_rules<G: RuleGraph + ?Sized>(graph: &mut G, variant: Variant, subject: &str, shield: &Shield) {
	if shield.parry != 0 {
		graph.rule("parry", subject, Op::Add, Formula::Num(shield.parry));
	}
	if shield.cover != 0 {
		graph.rule("shieldCover", subject, Op::Max, Formula::Num(shield.cover));
	}
	weight(graph, subject, shield.weight);
	min_str(graph, variant, subject, shield.min_str);
}

/// Registers a skill's step and die.
fn skill_rules<G: RuleGraph + ?Sized>(graph: &mut G, variant: Variant, name: &str, skill: &Skill) {
	let step = format!("skillStep.{name}");
	graph.rule(&step, &format!("skillAllocation.{name}"), Op::Add, Formula::Source);
	// Only SWADE has core skills
	if skill.core && variant == Variant::Swade {
		graph.rule(&step, "level", Op::Add, Formula::Num(1));
	}
	graph.rule(&selection_attr(ChoiceType::Skill, name), &step, Op::Set, die_from_step());
}

/// Registers a weapon.
fn weapon_rules<G: RuleGraph + ?Sized>(graph: &mut G, variant: Variant, subject: &str, weapon: &Weapon) {
	weight(graph, subject, weapon.weight);
	min_str(graph, variant, subject, weapon.min_str);
}
