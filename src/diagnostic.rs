//! Non-fatal problems found while building tables or registering choices.
//!
//! Loading never aborts on bad data. Each problem becomes a [`Warning`] that is logged when it's found and handed back
//! to the caller alongside whatever was successfully built, so callers (and tests) can inspect the exact set.

use crate::{choice::ChoiceType, parse};

/// Non-fatal problem found while building or registering a catalog
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Warning {
	/// A registration named a choice type that doesn't exist. The registration was skipped.
	#[error("unknown choice type \"{kind}\" for {name}")]
	UnknownChoiceType {
		/// Type name that was given
		kind: String,

		/// Name of the choice being registered
		name: String,
	},

	/// A super power named a modifier that isn't in the modifier table. The modifier's cost was left out.
	#[error("unknown modifier \"{modifier}\" on super power {power}")]
	UnknownModifier {
		/// Power the modifier was attached to
		power: String,

		/// Name of the missing modifier
		modifier: String,
	},

	/// A super power listed the same modifier more than once. Only the first was charged.
	#[error("modifier \"{modifier}\" listed more than once on super power {power}")]
	DuplicateModifier {
		/// Power the modifier was attached to
		power: String,

		/// Name of the repeated modifier
		modifier: String,
	},

	/// A choice's attrs string couldn't be parsed at all. The choice was skipped.
	#[error("malformed attrs for {kind} {name}: {source}")]
	MalformedAttrs {
		/// Type of the choice
		kind: ChoiceType,

		/// Name of the choice
		name: String,

		/// What went wrong
		#[source]
		source: parse::Error,
	},

	/// A single field had a value that couldn't be understood. The field's fallback was used instead.
	#[error("invalid {key} \"{value}\" for {kind} {name}, using {fallback}")]
	InvalidField {
		/// Type of the choice
		kind: ChoiceType,

		/// Name of the choice
		name: String,

		/// Field that held the bad value
		key: String,

		/// The bad value
		value: String,

		/// What was used in its place
		fallback: String,
	},

	/// A table of new entries reused a name that the base table already had. The new entry replaced the base one.
	#[error("{table} entry \"{name}\" is both derived and newly defined; keeping the new definition")]
	NameConflict {
		/// Table the conflict happened in
		table: ChoiceType,

		/// Conflicting name
		name: String,
	},
}

impl Warning {
	/// Logs the warning through [`tracing`] and hands it back, so it can be pushed onto a list in one expression.
	#[must_use]
	pub fn logged(self) -> Self {
		tracing::warn!(warning = %self, "catalog problem");
		self
	}
}
