use crate::{
	merge::{changeset, conflicts, merge, table, Changeset, Table},
	Attrs,
};

/// Small edge table to derive from.
fn edges() -> Table {
	table(&[
		("Alertness", "Type=Background"),
		("Brawler", "Type=Combat Require=\"strength >= 8\",\"vigor >= 8\""),
		("Fame", "Type=Social"),
	])
}

#[test]
fn empty_changeset_copies_base() {
	let base = edges();
	assert_eq!(merge(&base, &Changeset::new(), None), base);
	assert_eq!(merge(&Table::new(), &Changeset::new(), None), Table::new());
}

#[test]
fn deletion() {
	let derived = merge(&edges(), &changeset(&[("Fame", None)]), None);
	assert_eq!(derived.len(), 2);
	assert!(!derived.contains_key("Fame"));
	assert_eq!(derived["Alertness"], "Type=Background");
}

#[test]
fn additive_override_keeps_prior_fields() {
	let derived = merge(&edges(), &changeset(&[("Brawler", Some("Require=\"strength >= 8\""))]), None);
	let brawler = &derived["Brawler"];
	assert_eq!(
		brawler,
		"Type=Combat Require=\"strength >= 8\",\"vigor >= 8\" Require=\"strength >= 8\""
	);

	let attrs: Attrs = brawler.parse().unwrap();
	assert_eq!(attrs.get("Type"), Some("Combat"));
	assert_eq!(attrs.get_list("Require"), ["strength >= 8"]);
}

#[test]
fn changes_for_unknown_names_do_nothing() {
	let derived = merge(
		&edges(),
		&changeset(&[("Nonexistent", Some("Type=Weird")), ("Also Missing", None)]),
		None,
	);
	assert_eq!(derived, edges());
}

#[test]
fn extra_entries_are_added() {
	let extra = table(&[("Noble", "Type=Background")]);
	let derived = merge(&edges(), &changeset(&[("Fame", None)]), Some(&extra));
	assert_eq!(derived.len(), 3);
	assert_eq!(derived["Noble"], "Type=Background");
}

#[test]
fn extra_replaces_derived_entries() {
	let base = edges();
	let changes = changeset(&[("Brawler", Some("Require=")), ("Fame", None)]);
	let extra = table(&[("Brawler", "Type=Legendary"), ("Fame", "Type=Legendary"), ("Noble", "Type=Background")]);

	let derived = merge(&base, &changes, Some(&extra));
	assert_eq!(derived["Brawler"], "Type=Legendary");
	assert_eq!(derived["Fame"], "Type=Legendary");

	// Fame was deleted, so only Brawler is actually replaced
	assert_eq!(conflicts(&base, &changes, &extra), ["Brawler"]);
}

#[test]
fn merge_is_pure() {
	let base = edges();
	let changes = changeset(&[("Fame", None), ("Brawler", Some("Type=Weird"))]);
	let first = merge(&base, &changes, None);
	let second = merge(&base, &changes, None);
	assert_eq!(first, second);
	assert_eq!(base, edges());
}
