use crate::{
	choice::ChoiceType,
	cost::POINTS_ALLOCATED,
	merge::{changeset, merge},
	ruleset::UnknownVariant,
	Attrs, MemoryGraph, RuleGraph, Ruleset, Variant,
};

#[test]
fn swade_loads_cleanly() {
	let ruleset = Ruleset::new(Variant::Swade);
	let (tables, warnings) = ruleset.tables();
	assert!(warnings.is_empty());
	assert!(tables.companion(ChoiceType::SuperPower).is_none());

	let mut graph = MemoryGraph::new();
	let report = ruleset.load(&mut graph);
	assert!(report.warnings.is_empty(), "{:?}", report.warnings);
	assert_eq!(report.registered, tables.len());
	assert_eq!(graph.defined("edges").len(), 50);
	assert!(graph.choices("superPowers").is_none());
	assert!(graph.defined("superPowers").is_empty());
}

#[test]
fn swd_loads_cleanly() {
	let ruleset = Ruleset::new(Variant::Swd);
	let (tables, warnings) = ruleset.tables();
	assert!(warnings.is_empty(), "{warnings:?}");

	let mut graph = MemoryGraph::new();
	let report = ruleset.load(&mut graph);
	assert!(report.warnings.is_empty(), "{:?}", report.warnings);
	assert_eq!(report.registered, tables.len());

	let edges = graph.choices("edges").unwrap();
	assert_eq!(edges.len(), 48);
	assert!(!edges.contains_key("Fame"));
	assert!(edges.contains_key("Noble"));
	assert!(!graph.defined("skills").iter().any(|skill| skill == "Athletics"));
	assert!(graph.defined("skills").iter().any(|skill| skill == "Climbing"));
}

#[test]
fn swd_edges_derive_from_swade() {
	let (tables, _) = Ruleset::new(Variant::Swade).tables();
	let edges = tables.get(ChoiceType::Edge).unwrap();
	assert_eq!(edges.len(), 50);

	let derived = merge(
		edges,
		&changeset(&[("Fame", None), ("Brawler", Some("Require=\"strength >= 8\""))]),
		None,
	);
	assert_eq!(derived.len(), 49);
	assert!(!derived.contains_key("Fame"));

	let brawler: Attrs = derived["Brawler"].parse().unwrap();
	assert_eq!(brawler.get("Type"), Some("Combat"));
	assert_eq!(brawler.get_list("Require"), ["strength >= 8"]);
}

#[test]
fn swd_changes_are_appended() {
	let (tables, _) = Ruleset::new(Variant::Swd).tables();
	let armors = tables.get(ChoiceType::Armor).unwrap();
	assert_eq!(armors["Kevlar Vest"], "Era=Modern Area=Body Armor=2 MinStr=6 Weight=5 MinStr=0");

	let hindrances = tables.get(ChoiceType::Hindrance).unwrap();
	let small: Attrs = hindrances["Small"].parse().unwrap();
	assert_eq!(small.get("Severity"), Some("Major"));
	assert!(small.get_list("Require").is_empty());
}

#[test]
fn swd_charisma() {
	let mut graph = MemoryGraph::new();
	assert!(Ruleset::new(Variant::Swd).load(&mut graph).warnings.is_empty());

	let mut eval = graph.evaluate([("level", 1), ("edges.Attractive", 1)]);
	assert_eq!(eval.value("charisma").unwrap(), Some(2));

	let mut eval = graph.evaluate([("level", 1), ("edges.Attractive", 1), ("hindrances.Ugly", 1)]);
	assert_eq!(eval.value("charisma").unwrap(), Some(0));
}

#[test]
fn rich_multiplies_funds() {
	let mut graph = MemoryGraph::new();
	assert!(Ruleset::new(Variant::Swade).load(&mut graph).warnings.is_empty());

	let mut eval = graph.evaluate([("level", 1)]);
	assert_eq!(eval.value("funds").unwrap(), Some(500));

	let mut eval = graph.evaluate([("level", 1), ("edges.Rich", 1), ("edges.Filthy Rich", 1)]);
	assert_eq!(eval.value("funds").unwrap(), Some(2500));
}

#[test]
fn super_powers_replace_the_arcana() {
	let ruleset = Ruleset::new(Variant::Swd).with_super_powers(true);
	let mut graph = MemoryGraph::new();
	let report = ruleset.load(&mut graph);
	assert!(report.warnings.is_empty(), "{:?}", report.warnings);

	let arcanas = graph.choices("arcanas").unwrap();
	assert_eq!(arcanas["Super Powers"], "");
	assert_eq!(graph.defined("arcanas").iter().filter(|name| *name == "Super Powers").count(), 1);

	assert_eq!(graph.defined("superPowers").len(), 26);
	assert_eq!(graph.defined("superPowerModifiers").len(), 12);
}

#[test]
fn replaced_arcana_grants_power_points_once() {
	for variant in [Variant::Swade, Variant::Swd] {
		let ruleset = Ruleset::new(variant).with_super_powers(true);
		let (tables, _) = ruleset.tables();
		assert!(tables
			.get(ChoiceType::Arcana)
			.is_some_and(|arcanas| !arcanas.contains_key("Super Powers")));

		let mut graph = MemoryGraph::new();
		assert!(ruleset.load(&mut graph).warnings.is_empty());
		let mut eval = graph.evaluate([("arcanas.Super Powers", 1)]);
		assert_eq!(eval.value("powerPoints").unwrap(), Some(10), "{variant}");
	}

	// Without the Companion, SWD's own version is the one registered
	let mut graph = MemoryGraph::new();
	assert!(Ruleset::new(Variant::Swd).load(&mut graph).warnings.is_empty());
	let mut eval = graph.evaluate([("arcanas.Super Powers", 1)]);
	assert_eq!(eval.value("powerPoints").unwrap(), Some(10));
}

#[test]
fn super_powers_without_a_prior_arcana() {
	let ruleset = Ruleset::new(Variant::Swade).with_super_powers(true);
	let mut graph = MemoryGraph::new();
	assert!(ruleset.load(&mut graph).warnings.is_empty());
	assert!(graph.defined("arcanas").iter().any(|name| name == "Super Powers"));
}

#[test]
fn super_power_points() {
	let mut graph = MemoryGraph::new();
	assert!(Ruleset::new(Variant::Swade)
		.with_super_powers(true)
		.load(&mut graph)
		.warnings
		.is_empty());

	let mut eval = graph.evaluate([
		("superPowers.Attack, Ranged", 1),
		("superPowerModifiers.Attack, Ranged (Damage)", 2),
		("superPowerModifiers.Attack, Ranged (Armor Piercing)", 1),
		("superPowers.Flight", 2),
		("superPowerModifiers.Flight (Strong)", 2),
	]);
	assert_eq!(eval.value("superPowerPoints.Attack, Ranged").unwrap(), Some(7));
	assert_eq!(eval.value("superPowerPoints.Flight").unwrap(), Some(7));
	assert_eq!(eval.value(POINTS_ALLOCATED).unwrap(), Some(14));
}

#[test]
fn zero_cost_power_adds_nothing() {
	let mut graph = MemoryGraph::new();
	assert!(Ruleset::new(Variant::Swade)
		.with_super_powers(true)
		.load(&mut graph)
		.warnings
		.is_empty());

	let mut eval = graph.evaluate([
		("superPowers.Telepathy", 1),
		("superPowerModifiers.Telepathy (Requires Touch)", 1),
	]);
	assert_eq!(eval.value("superPowerPoints.Telepathy").unwrap(), Some(0));
	assert_eq!(eval.value(POINTS_ALLOCATED).unwrap(), None);
}

#[test]
fn host_registration_after_load() {
	let mut graph = MemoryGraph::new();
	let mut report = Ruleset::new(Variant::Swade).with_super_powers(true).load(&mut graph);
	assert!(report.warnings.is_empty());

	let warnings = report.registrar.register_choice(
		&mut graph,
		ChoiceType::Edge,
		"Homebrew",
		"Type=Weird Require=\"spirit >= 10\"",
	);
	assert!(warnings.is_empty());
	assert!(graph.choices("edges").is_some_and(|edges| edges.contains_key("Homebrew")));

	let mut eval = graph.evaluate([("level", 1), ("edges.Homebrew", 1)]);
	assert_eq!(eval.unmet_requirements().unwrap().len(), 1);
	assert_eq!(eval.value("edgesTaken").unwrap(), Some(1));

	// Modifiers from the load are still known to super powers the host adds later
	let warnings = report
		.registrar
		.register_choice(&mut graph, ChoiceType::SuperPower, "Zap", "Cost=2 Modifier=Range");
	assert!(warnings.is_empty());
	let mut eval = graph.evaluate([("superPowers.Zap", 1), ("superPowerModifiers.Zap (Range)", 1)]);
	assert_eq!(eval.value(POINTS_ALLOCATED).unwrap(), Some(3));
}

#[test]
fn variant_names() {
	assert_eq!("swd".parse(), Ok(Variant::Swd));
	assert_eq!(" SWADE ".parse(), Ok(Variant::Swade));
	assert_eq!("gurps".parse::<Variant>(), Err(UnknownVariant("gurps".to_owned())));
	assert_eq!(Variant::Swd.to_string(), "SWD");
	assert_eq!(Ruleset::default(), Ruleset::new(Variant::Swade));
}

#[test]
fn loading_twice_is_repeatable() {
	let ruleset = Ruleset::new(Variant::Swd).with_super_powers(true);
	let mut first = MemoryGraph::new();
	let mut second = MemoryGraph::new();
	assert_eq!(ruleset.load(&mut first), ruleset.load(&mut second));
	assert_eq!(first.rules(), second.rules());
	assert_eq!(first.requirements(), second.requirements());
}
