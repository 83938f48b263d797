//! Concepts, deities, eras, languages and races.

use super::{clause_strings, ChoiceType, Fields, Record};
use crate::{attrs::Attrs, requirement::Clause};

/// Character concept: a suggested starting build, e.g. `Attribute=agility Edge=Marksman Skill=Athletics,Shooting`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Concept {
	/// Attributes the concept favors
	pub attributes: Vec<String>,

	/// Edges the concept suggests
	pub edges: Vec<String>,

	/// Skills the concept favors
	pub skills: Vec<String>,
}

impl Record for Concept {
	const KIND: ChoiceType = ChoiceType::Concept;

	fn read(fields: &mut Fields<'_>) -> Self {
		Self {
			attributes: fields.list("Attribute"),
			edges: fields.list("Edge"),
			skills: fields.list("Skill"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with_list("Attribute", self.attributes.iter().cloned())
			.with_list("Edge", self.edges.iter().cloned())
			.with_list("Skill", self.skills.iter().cloned())
	}
}

/// Deity, e.g. `Alignment=Good Domain=Healing,Sun`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Deity {
	/// Moral alignment, if the setting uses one
	pub alignment: Option<String>,

	/// Domains the deity grants
	pub domains: Vec<String>,
}

impl Record for Deity {
	const KIND: ChoiceType = ChoiceType::Deity;

	fn read(fields: &mut Fields<'_>) -> Self {
		Self {
			alignment: fields.text("Alignment"),
			domains: fields.list("Domain"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with_opt("Alignment", self.alignment.clone())
			.with_list("Domain", self.domains.iter().cloned())
	}
}

/// Setting era, e.g. `Description="Swords and sorcery"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Era {
	/// Short description
	pub description: Option<String>,
}

impl Record for Era {
	const KIND: ChoiceType = ChoiceType::Era;

	fn read(fields: &mut Fields<'_>) -> Self {
		Self {
			description: fields.text("Description"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new().with_opt("Description", self.description.clone())
	}
}

/// Language. Languages have no fields; the name is everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "No fields")]
pub struct Language;

impl Record for Language {
	const KIND: ChoiceType = ChoiceType::Language;

	fn read(_fields: &mut Fields<'_>) -> Self {
		Self
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
	}
}

/// Race, e.g. `Features=Agile,"Low Light Vision",Spirited Languages=Elven`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Race {
	/// Racial features granted to every member
	pub features: Vec<String>,

	/// Languages every member speaks
	pub languages: Vec<String>,

	/// Prerequisites
	pub require: Vec<Clause>,
}

impl Record for Race {
	const KIND: ChoiceType = ChoiceType::Race;

	fn read(fields: &mut Fields<'_>) -> Self {
		Self {
			features: fields.list("Features"),
			languages: fields.list("Languages"),
			require: fields.clauses("Require"),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with_list("Features", self.features.iter().cloned())
			.with_list("Languages", self.languages.iter().cloned())
			.with_list("Require", clause_strings(&self.require))
	}
}
