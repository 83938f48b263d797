//! Deriving one ruleset's tables from another's by applying a changeset.

use std::collections::BTreeMap;

/// Choice table: attrs strings keyed by choice name
pub type Table = BTreeMap<String, String>;

/// Changes to a [`Table`]. `None` deletes the entry; `Some` appends more attrs to it.
pub type Changeset = BTreeMap<String, Option<String>>;

/// Builds a derived table from a base table, a changeset, and optionally a table of wholly new entries.
///
/// - Names not mentioned by `changes` are copied unchanged.
/// - Names mapped to `None` are left out.
/// - Names mapped to `Some(more)` get `more` appended after a space. Nothing is replaced: when the appended attrs
///   repeat a key, the later value is the one that counts.
/// - Names in `changes` that aren't in `base` do nothing.
/// - Every entry in `extra` is added as is, replacing any derived entry of the same name (see [`conflicts()`]).
///
/// # Examples
/// ```
/// use savage_rules::merge::{changeset, merge, table};
///
/// let base = table(&[("Fame", "Type=Social"), ("Brawler", "Type=Combat")]);
/// let changes = changeset(&[("Fame", None), ("Brawler", Some("Require=\"strength >= 8\""))]);
///
/// let derived = merge(&base, &changes, None);
/// assert!(!derived.contains_key("Fame"));
/// assert_eq!(derived["Brawler"], "Type=Combat Require=\"strength >= 8\"");
/// ```
#[must_use]
pub fn merge(base: &Table, changes: &Changeset, extra: Option<&Table>) -> Table {
	let mut derived = base
		.iter()
		.filter_map(|(name, attrs)| match changes.get(name) {
			None => Some((name.clone(), attrs.clone())),
			Some(None) => None,
			Some(Some(more)) => Some((name.clone(), format!("{attrs} {more}"))),
		})
		.collect::<Table>();

	if let Some(extra) = extra {
		derived.extend(extra.iter().map(|(name, attrs)| (name.clone(), attrs.clone())));
	}

	derived
}

/// Lists the names in `extra` that [`merge()`] would also derive from `base`, i.e. the entries that `extra` replaces.
#[must_use]
pub fn conflicts<'a>(base: &Table, changes: &Changeset, extra: &'a Table) -> Vec<&'a str> {
	extra
		.keys()
		.filter(|name| base.contains_key(*name) && !matches!(changes.get(*name), Some(None)))
		.map(String::as_str)
		.collect()
}

/// Builds a table from literal pairs.
#[must_use]
pub fn table(entries: &[(&str, &str)]) -> Table {
	entries
		.iter()
		.map(|(name, attrs)| ((*name).to_owned(), (*attrs).to_owned()))
		.collect()
}

/// Builds a changeset from literal pairs.
#[must_use]
pub fn changeset(entries: &[(&str, Option<&str>)]) -> Changeset {
	entries
		.iter()
		.map(|(name, more)| ((*name).to_owned(), more.map(ToOwned::to_owned)))
		.collect()
}
