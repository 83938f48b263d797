//! Rulesets: which tables make up each variant of the game, and loading them into a rule graph.
//!
//! SWADE's tables are written out in full. SWD's are derived from them with [`merge()`] plus a table of SWD-only
//! entries, and the Super Powers Companion adds its own tables on top of either.

mod spc;
mod swade;
mod swd;

use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::{
	choice::ChoiceType,
	diagnostic::Warning,
	graph::RuleGraph,
	merge::{conflicts, merge, Table},
	register::{self, Registrar},
};

/// Edition of the rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Only two editions are supported")]
pub enum Variant {
	/// Savage Worlds Adventure Edition
	#[default]
	Swade,

	/// Savage Worlds Deluxe
	Swd,
}

impl Variant {
	/// Gets the short name of the variant.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Swade => "SWADE",
			Self::Swd => "SWD",
		}
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Variant {
	type Err = UnknownVariant;

	/// Reads a variant from its short name, ignoring case.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		[Self::Swade, Self::Swd]
			.into_iter()
			.find(|variant| variant.name().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownVariant(s.to_owned()))
	}
}

/// Error for a variant name that doesn't match any [`Variant`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ruleset: {0}")]
#[allow(clippy::exhaustive_structs, reason = "Only ever wraps the bad name")]
pub struct UnknownVariant(pub String);

/// Configuration of the rules a character is built with. This is the entry point the host loads a ruleset through.
///
/// # Examples
/// ```
/// use savage_rules::{MemoryGraph, RuleGraph, Ruleset, Variant};
///
/// let ruleset = Ruleset::new(Variant::Swd).with_super_powers(true);
/// let mut graph = MemoryGraph::new();
/// let report = ruleset.load(&mut graph);
///
/// assert!(report.warnings.is_empty());
/// assert!(graph.choices("edges").is_some_and(|edges| !edges.contains_key("Fame")));
/// assert!(graph.choices("superPowers").is_some_and(|powers| powers.contains_key("Telepathy")));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs, reason = "Plain configuration")]
pub struct Ruleset {
	/// Edition of the rules
	pub variant: Variant,

	/// Whether the Super Powers Companion is in use
	pub super_powers: bool,
}

impl Ruleset {
	/// Creates a ruleset for a variant without any extensions.
	#[must_use]
	pub const fn new(variant: Variant) -> Self {
		Self {
			variant,
			super_powers: false,
		}
	}

	/// Turns the Super Powers Companion on or off.
	#[must_use]
	pub const fn with_super_powers(mut self, super_powers: bool) -> Self {
		self.super_powers = super_powers;
		self
	}

	/// Builds every table of the ruleset. Entries of SWD-only tables that replace a derived entry are reported.
	///
	/// With the Super Powers Companion in use, its arcane background replaces any core version of the same name, so the
	/// core one is left out of the core tables entirely.
	#[must_use]
	pub fn tables(&self) -> (Tables, Vec<Warning>) {
		let mut warnings = Vec::new();
		let mut base = BTreeMap::new();

		for kind in ChoiceType::ALL {
			let swade = swade::table(kind);
			let mut table = match self.variant {
				Variant::Swade => swade,
				Variant::Swd => {
					let changes = swd::changes(kind);
					let extra = swd::extra(kind);
					warnings.extend(conflicts(&swade, &changes, &extra).into_iter().map(|name| {
						Warning::NameConflict {
							table: kind,
							name: name.to_owned(),
						}
						.logged()
					}));
					merge(&swade, &changes, Some(&extra))
				}
			};

			if self.super_powers && kind == ChoiceType::Arcana {
				table.remove(spc::ARCANA);
			}
			if !table.is_empty() {
				base.insert(kind, table);
			}
		}

		let companion = if self.super_powers {
			ChoiceType::ALL
				.into_iter()
				.map(|kind| (kind, spc::table(kind)))
				.filter(|(_, table)| !table.is_empty())
				.collect()
		} else {
			BTreeMap::new()
		};

		(Tables { base, companion }, warnings)
	}

	/// Populates a fresh rule graph with every table of the ruleset, in order: attributes, combat gear, arcane
	/// backgrounds and powers (then the Companion's modifiers and super powers), talents, and identity.
	///
	/// Nothing that goes wrong stops the load. Every problem is in the returned report, along with the [`Registrar`]
	/// the host should keep registering later choices through.
	pub fn load<G: RuleGraph + ?Sized>(&self, graph: &mut G) -> Report {
		let (tables, mut warnings) = self.tables();
		let mut registered = 0_usize;
		let mut registrar = self.registrar();

		register::register_attributes(graph, self.variant);

		let mut load = |graph: &mut G, kind: ChoiceType, table: Option<&Table>| {
			let Some(table) = table else {
				return;
			};
			for (name, raw) in table {
				warnings.extend(registrar.register_choice(graph, kind, name, raw));
			}
			registered = registered.saturating_add(table.len());

			let names = graph
				.choices(kind.category())
				.map(|catalog| catalog.keys().cloned().collect::<Vec<_>>())
				.unwrap_or_default();
			graph.define_choice(kind.category(), &names);
			tracing::debug!(%kind, count = table.len(), "loaded table");
		};

		for kind in [ChoiceType::Armor, ChoiceType::Shield, ChoiceType::Weapon] {
			load(graph, kind, tables.get(kind));
		}

		for kind in [ChoiceType::Arcana, ChoiceType::Power] {
			load(graph, kind, tables.get(kind));
		}
		if self.super_powers {
			for kind in [ChoiceType::Arcana, ChoiceType::SuperPowerModifier, ChoiceType::SuperPower] {
				load(graph, kind, tables.companion(kind));
			}
		}

		for kind in [
			ChoiceType::Edge,
			ChoiceType::Hindrance,
			ChoiceType::Skill,
			ChoiceType::Feature,
			ChoiceType::Goody,
		] {
			load(graph, kind, tables.get(kind));
		}

		for kind in [
			ChoiceType::Concept,
			ChoiceType::Deity,
			ChoiceType::Era,
			ChoiceType::Language,
			ChoiceType::Race,
		] {
			load(graph, kind, tables.get(kind));
		}

		tracing::info!(
			variant = %self.variant,
			super_powers = self.super_powers,
			registered,
			warnings = warnings.len(),
			"loaded ruleset"
		);
		Report {
			registered,
			warnings,
			registrar,
		}
	}

	/// Creates a registrar for choices the host adds without loading the whole ruleset.
	#[must_use]
	pub const fn registrar(&self) -> Registrar {
		Registrar::new(self.variant)
	}
}

/// Every table of a ruleset, built once and read-only afterwards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
	/// Tables of the core rules
	base: BTreeMap<ChoiceType, Table>,

	/// Tables of the Super Powers Companion (empty when it isn't in use)
	companion: BTreeMap<ChoiceType, Table>,
}

impl Tables {
	/// Gets the core rules' table for a choice type.
	#[must_use]
	pub fn get(&self, kind: ChoiceType) -> Option<&Table> {
		self.base.get(&kind)
	}

	/// Gets the Super Powers Companion's table for a choice type.
	#[must_use]
	pub fn companion(&self, kind: ChoiceType) -> Option<&Table> {
		self.companion.get(&kind)
	}

	/// Counts the entries across every table.
	#[must_use]
	pub fn len(&self) -> usize {
		self.base.values().chain(self.companion.values()).map(Table::len).sum()
	}

	/// Checks whether there are no entries at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Outcome of loading a ruleset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Report {
	/// Number of choices that were registered (or attempted)
	pub registered: usize,

	/// Every problem found while building and registering the tables
	pub warnings: Vec<Warning>,

	/// Registrar holding what the load registered, for choices the host adds afterwards
	pub registrar: Registrar,
}
