use crate::{
	choice::ChoiceType,
	diagnostic::Warning,
	graph::{Op, RuleGraph},
	register::{register_attributes, Registrar},
	requirement::{Clause, Condition, Requirement},
	MemoryGraph, Ruleset, Variant,
};

/// Loads a full ruleset into a fresh graph, asserting that nothing went wrong.
fn loaded(variant: Variant) -> MemoryGraph {
	let mut graph = MemoryGraph::new();
	let report = Ruleset::new(variant).load(&mut graph);
	assert!(report.warnings.is_empty(), "{:?}", report.warnings);
	graph
}

#[test]
fn unknown_choice_type() {
	let mut graph = MemoryGraph::new();
	let mut registrar = Registrar::new(Variant::Swade);
	let warnings = registrar.register_named(&mut graph, "Spell", "Fireball", "Damage=2d6");
	assert_eq!(
		warnings,
		[Warning::UnknownChoiceType {
			kind: "Spell".to_owned(),
			name: "Fireball".to_owned(),
		}]
	);
	assert!(graph.rules().is_empty());
	assert_eq!(graph.categories().count(), 0);
}

#[test]
fn named_types_ignore_case() {
	let mut graph = MemoryGraph::new();
	let mut registrar = Registrar::new(Variant::Swade);
	let warnings = registrar.register_named(&mut graph, "language", "Elven", "");
	assert!(warnings.is_empty());
	assert!(graph.choices("languages").is_some_and(|languages| languages.contains_key("Elven")));
}

#[test]
fn malformed_attrs_skip_the_choice() {
	let mut graph = MemoryGraph::new();
	let mut registrar = Registrar::new(Variant::Swade);
	let warnings = registrar.register_choice(&mut graph, ChoiceType::Armor, "Broken", "Armor=2 Weight");
	assert_eq!(warnings.len(), 1);
	assert!(matches!(
		&warnings[0],
		Warning::MalformedAttrs { kind: ChoiceType::Armor, name, .. } if name == "Broken"
	));
	assert!(graph.choices("armors").is_none());
	assert!(graph.rules().is_empty());
}

#[test]
fn bad_field_values_fall_back() {
	let mut graph = MemoryGraph::new();
	let mut registrar = Registrar::new(Variant::Swade);
	let warnings = registrar.register_choice(&mut graph, ChoiceType::Shield, "Odd", "Parry=lots Weight=4");
	assert_eq!(warnings.len(), 1);
	assert!(matches!(&warnings[0], Warning::InvalidField { key, .. } if key == "Parry"));

	// The shield is still stored and registered with what could be read
	assert!(graph.choices("shields").is_some_and(|shields| shields["Odd"] == "Parry=lots Weight=4"));
	assert_eq!(graph.rules_for("parry").count(), 0);
	assert_eq!(graph.rules_for("gearWeight").count(), 1);
}

#[test]
fn attributes_and_derived_traits() {
	let mut graph = MemoryGraph::new();
	register_attributes(&mut graph, Variant::Swade);
	assert_eq!(graph.defined("attributes"), ["agility", "smarts", "spirit", "strength", "vigor"]);

	let mut eval = graph.evaluate([
		("level", 1),
		("attributeAllocation.vigor", 3),
		("skills.Fighting", 8),
		("armorToughness", 2),
	]);
	assert_eq!(eval.value("agility").unwrap(), Some(4));
	assert_eq!(eval.value("vigor").unwrap(), Some(10));
	assert_eq!(eval.value("pace").unwrap(), Some(6));
	assert_eq!(eval.value("parry").unwrap(), Some(6));
	assert_eq!(eval.value("toughness").unwrap(), Some(9));
	assert_eq!(eval.value("funds").unwrap(), Some(500));
	assert_eq!(eval.value("charisma").unwrap(), None);
}

#[test]
fn swd_has_charisma() {
	let mut graph = MemoryGraph::new();
	register_attributes(&mut graph, Variant::Swd);
	assert!(graph.defined("attributes").iter().any(|name| name == "charisma"));
	assert_eq!(graph.evaluate([("level", 1)]).value("charisma").unwrap(), Some(0));
}

#[test]
fn weapon_min_str_from_damage() {
	let graph = loaded(Variant::Swade);
	let requirement = Requirement {
		subject: "weapons.Great Axe".to_owned(),
		clause: Clause::Compare {
			attr: "strength".to_owned(),
			cond: Condition::Gte(10),
		},
		strict: false,
	};
	assert!(graph.requirements().contains(&requirement));
}

#[test]
fn swd_gear_has_no_min_str() {
	let graph = loaded(Variant::Swd);
	assert!(!graph
		.requirements()
		.iter()
		.any(|requirement| ["weapons.", "armors.", "shields."]
			.iter()
			.any(|category| requirement.subject.starts_with(category))));

	let mut eval = graph.evaluate([
		("level", 1),
		("weapons.Long Sword", 1),
		("weapons.Great Sword", 1),
		("weapons.Battle Axe", 1),
		("weapons.Great Axe", 1),
		("weapons.Spear", 1),
	]);
	assert!(eval.unmet_requirements().unwrap().is_empty());
}

#[test]
fn armor_takes_the_best_of_an_area() {
	let mut graph = MemoryGraph::new();
	let mut registrar = Registrar::new(Variant::Swade);
	register_attributes(&mut graph, Variant::Swade);
	for (name, raw) in [
		("Leather", "Area=Body Armor=2 MinStr=6 Weight=15"),
		("Kevlar", "Area=Body Armor=4 Weight=5"),
		("Helm", "Area=Head Armor=3 Weight=4"),
	] {
		assert!(registrar.register_choice(&mut graph, ChoiceType::Armor, name, raw).is_empty());
	}

	let mut eval = graph.evaluate([("level", 1), ("armors.Leather", 1), ("armors.Kevlar", 1), ("armors.Helm", 1)]);
	assert_eq!(eval.value("armorToughness").unwrap(), Some(4));
	assert_eq!(eval.value("armorHead").unwrap(), Some(3));
	assert_eq!(eval.value("toughness").unwrap(), Some(8));
	assert_eq!(eval.value("gearWeight").unwrap(), Some(24));
}

#[test]
fn hindrance_points() {
	let graph = loaded(Variant::Swade);
	let mut eval = graph.evaluate([("level", 1), ("hindrances.Slow", 2), ("hindrances.All Thumbs", 1)]);
	assert_eq!(eval.value("hindrancePoints").unwrap(), Some(3));
	assert_eq!(eval.value("pace").unwrap(), Some(4));

	let mut eval = graph.evaluate([("level", 1), ("hindrances.Slow", 1)]);
	assert_eq!(eval.value("hindrancePoints").unwrap(), Some(1));
	assert_eq!(eval.value("pace").unwrap(), Some(5));
}

#[test]
fn feature_bonus_scales_with_related_feature() {
	let graph = loaded(Variant::Swade);

	let mut eval = graph.evaluate([("level", 1), ("edges.Arcane Resistance", 1)]);
	assert_eq!(eval.value("features.Arcane Resistance").unwrap(), Some(1));
	assert_eq!(eval.value("arcaneResistance").unwrap(), Some(2));

	let mut eval = graph.evaluate([
		("level", 1),
		("edges.Arcane Resistance", 1),
		("edges.Improved Arcane Resistance", 1),
	]);
	assert_eq!(eval.value("arcaneResistance").unwrap(), Some(4));
}

#[test]
fn race_features_and_languages() {
	let graph = loaded(Variant::Swade);
	let mut eval = graph.evaluate([("level", 1), ("races.Dwarf", 1)]);
	assert_eq!(eval.value("features.Tough").unwrap(), Some(1));
	assert_eq!(eval.value("vigor").unwrap(), Some(6));
	assert_eq!(eval.value("pace").unwrap(), Some(5));
	assert_eq!(eval.value("languages.Dwarven").unwrap(), Some(1));

	let mut eval = graph.evaluate([("level", 1), ("races.Human", 1), ("advances", 2)]);
	assert_eq!(eval.value("edgePoints").unwrap(), Some(3));
}

#[test]
fn core_skills_start_at_d4() {
	let graph = loaded(Variant::Swade);
	let mut eval = graph.evaluate([("level", 1), ("skillAllocation.Fighting", 2)]);
	assert_eq!(eval.value("skills.Notice").unwrap(), Some(4));
	assert_eq!(eval.value("skills.Fighting").unwrap(), Some(6));
	assert_eq!(eval.value("skills.Shooting").unwrap(), None);
	assert_eq!(eval.value("parry").unwrap(), Some(5));
}

#[test]
fn edge_requirements() {
	let graph = loaded(Variant::Swade);

	let mut eval = graph.evaluate([("level", 1), ("edges.Brawler", 1)]);
	let unmet = eval.unmet_requirements().unwrap();
	assert_eq!(unmet.len(), 2);
	assert!(unmet.iter().all(|requirement| requirement.subject == "edges.Brawler" && requirement.strict));

	let mut eval = graph.evaluate([
		("level", 1),
		("edges.Brawler", 1),
		("attributeAllocation.strength", 2),
		("attributeAllocation.vigor", 2),
	]);
	assert!(eval.unmet_requirements().unwrap().is_empty());
	assert_eq!(eval.value("toughness").unwrap(), Some(7));
	assert_eq!(eval.value("unarmedDamageStep").unwrap(), Some(1));
}

#[test]
fn swd_override_relaxes_requirements() {
	let graph = loaded(Variant::Swd);
	let mut eval = graph.evaluate([("level", 1), ("edges.Brawler", 1), ("attributeAllocation.strength", 2)]);
	assert!(eval.unmet_requirements().unwrap().is_empty());
	assert_eq!(eval.value("unarmedDamageBonus").unwrap(), Some(2));
	assert_eq!(eval.value("unarmedDamageStep").unwrap(), None);
}

#[test]
fn variant_specific_extras() {
	let swade = loaded(Variant::Swade);
	let mut eval = swade.evaluate([("level", 1), ("edges.Brawny", 1)]);
	assert_eq!(eval.value("size").unwrap(), Some(1));
	assert_eq!(eval.value("toughness").unwrap(), Some(5));

	let swd = loaded(Variant::Swd);
	let mut eval = swd.evaluate([("level", 1), ("edges.Brawny", 1)]);
	assert_eq!(eval.value("size").unwrap(), None);
	assert_eq!(eval.value("toughness").unwrap(), Some(5));
}

#[test]
fn goodies_apply_their_effect() {
	let mut graph = MemoryGraph::new();
	let mut registrar = Registrar::new(Variant::Swade);
	register_attributes(&mut graph, Variant::Swade);
	let warnings = registrar.register_choice(
		&mut graph,
		ChoiceType::Goody,
		"Pace",
		"Attribute=pace Effect=add Value=source",
	);
	assert!(warnings.is_empty());
	let warnings = registrar.register_choice(
		&mut graph,
		ChoiceType::Goody,
		"Min Parry",
		"Attribute=parry Effect=raise Value=5",
	);
	assert!(warnings.is_empty());

	let mut eval = graph.evaluate([("level", 1), ("goodies.Pace", 2), ("goodies.Min Parry", 1)]);
	assert_eq!(eval.value("pace").unwrap(), Some(8));
	assert_eq!(eval.value("parry").unwrap(), Some(5));
}

#[test]
fn powers_need_advances() {
	let mut graph = MemoryGraph::new();
	let mut registrar = Registrar::new(Variant::Swade);
	let warnings = registrar.register_choice(
		&mut graph,
		ChoiceType::Power,
		"Barrier",
		"Advances=4 PowerPoints=2 Range=Smarts",
	);
	assert!(warnings.is_empty());
	assert_eq!(graph.requirements().len(), 1);

	let mut eval = graph.evaluate([("powers.Barrier", 1), ("advances", 2)]);
	assert_eq!(eval.unmet_requirements().unwrap().len(), 1);
	assert_eq!(eval.value("powersKnown").unwrap(), Some(1));
}

#[test]
fn super_power_from_the_host() {
	let mut graph = MemoryGraph::new();
	let mut registrar = Ruleset::new(Variant::Swade).registrar();
	assert!(registrar
		.register_named(&mut graph, "Super Power Modifier", "Range", "Cost=1")
		.is_empty());

	let warnings = registrar.register_named(
		&mut graph,
		"Super Power",
		"Mind Blast",
		"Cost=2 Modifier=Range,\"Bogus Modifier\"",
	);
	assert_eq!(
		warnings,
		[Warning::UnknownModifier {
			power: "Mind Blast".to_owned(),
			modifier: "Bogus Modifier".to_owned(),
		}]
	);

	let mut eval = graph.evaluate([("superPowers.Mind Blast", 1), ("superPowerModifiers.Mind Blast (Range)", 1)]);
	assert_eq!(eval.value("superPowerPointsAllocated").unwrap(), Some(3));
}

#[test]
fn super_powers_use_the_registered_schedule() {
	let mut graph = MemoryGraph::new();
	let mut registrar = Registrar::new(Variant::Swade);
	assert!(registrar
		.register_choice(&mut graph, ChoiceType::SuperPowerModifier, "Damage", "Cost=2,3")
		.is_empty());
	assert_eq!(registrar.modifiers()["Damage"].cumulative(), [2, 5]);

	// A bad cost is reported when the modifier is registered, not again for each power using it
	let warnings = registrar.register_choice(&mut graph, ChoiceType::SuperPowerModifier, "Odd", "Cost=lots");
	assert!(!warnings.is_empty());
	assert!(warnings
		.iter()
		.all(|warning| matches!(warning, Warning::InvalidField { key, .. } if key == "Cost")));
	assert_eq!(registrar.modifiers()["Odd"].cumulative(), [0]);

	let warnings = registrar.register_choice(&mut graph, ChoiceType::SuperPower, "Blast", "Cost=1 Modifier=Damage,Odd");
	assert!(warnings.is_empty());

	let mut eval = graph.evaluate([
		("superPowers.Blast", 1),
		("superPowerModifiers.Blast (Damage)", 2),
		("superPowerModifiers.Blast (Odd)", 1),
	]);
	assert_eq!(eval.value("superPowerPointsAllocated").unwrap(), Some(6));
}

#[test]
fn repeated_modifiers_are_charged_once() {
	let mut graph = MemoryGraph::new();
	let mut registrar = Registrar::new(Variant::Swade);
	assert!(registrar
		.register_choice(&mut graph, ChoiceType::SuperPowerModifier, "Range", "Cost=1")
		.is_empty());

	let warnings = registrar.register_choice(&mut graph, ChoiceType::SuperPower, "Zap", "Cost=2 Modifier=Range,Range");
	assert_eq!(
		warnings,
		[Warning::DuplicateModifier {
			power: "Zap".to_owned(),
			modifier: "Range".to_owned(),
		}]
	);

	let mut eval = graph.evaluate([("superPowers.Zap", 1), ("superPowerModifiers.Zap (Range)", 1)]);
	assert_eq!(eval.value("superPowerPointsAllocated").unwrap(), Some(3));
}

#[test]
fn rules_record_their_operator() {
	let mut graph = MemoryGraph::new();
	let mut registrar = Registrar::new(Variant::Swade);
	assert!(registrar.register_choice(&mut graph, ChoiceType::Shield, "Buckler", "Parry=1 Cover=2").is_empty());
	let ops = graph.rules().iter().map(|rule| (rule.target.as_str(), rule.op)).collect::<Vec<_>>();
	assert_eq!(ops, [("parry", Op::Add), ("shieldCover", Op::Max)]);
	assert_eq!(graph.rules()[0].to_string(), "parry += 1 <- shields.Buckler");
}
