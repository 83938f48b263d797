//! The compact `Key=Value` encoding every choice in a table is written in, and the helpers for reading it.
//!
//! Attrs strings are only ever parsed at the boundary (table entries and host calls). Once parsed, code works with
//! [`Attrs`] or, more commonly, with the typed [records](crate::choice) built from them.

use std::{fmt, str::FromStr};

use crate::parse;

/// Single `Key=Value1,Value2` field of an attrs string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs, reason = "A field is only ever a key and its values")]
pub struct Field {
	/// Name of the field
	pub key: String,

	/// Values assigned to the field, in the order they were written
	pub values: Vec<String>,
}

impl Field {
	/// Creates a new field from a key and its values.
	#[must_use]
	pub fn new(key: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			key: key.into(),
			values: values.into_iter().map(Into::into).collect(),
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}=", self.key)?;
		for (idx, value) in self.values.iter().enumerate() {
			if idx > 0 {
				f.write_str(",")?;
			}
			if needs_quotes(value) {
				write!(f, "\"{value}\"")?;
			} else {
				f.write_str(value)?;
			}
		}
		Ok(())
	}
}

/// Parsed attrs string: an ordered list of [`Field`]s.
///
/// Keys may repeat. Overrides are applied by appending text to an existing attrs string, so lookups always resolve to
/// the *last* occurrence of a key.
///
/// # Examples
/// ```
/// use savage_rules::Attrs;
///
/// let attrs: Attrs = "Era=Medieval Area=Body Armor=1 Weight=15 Armor=2".parse()?;
/// assert_eq!(attrs.get("Area"), Some("Body"));
/// assert_eq!(attrs.get("Armor"), Some("2"));
/// assert_eq!(attrs.get("MinStr"), None);
/// # Ok::<(), savage_rules::parse::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Attrs {
	/// Fields in the order they appeared
	fields: Vec<Field>,
}

impl Attrs {
	/// Creates an empty set of attrs.
	#[must_use]
	pub const fn new() -> Self {
		Self { fields: Vec::new() }
	}

	/// Creates a set of attrs from already-split fields.
	#[must_use]
	pub const fn from_fields(fields: Vec<Field>) -> Self {
		Self { fields }
	}

	/// Gets the first value of the last field with the given key.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&str> {
		self.field(key)
			.and_then(|field| field.values.first())
			.map(String::as_str)
	}

	/// Gets all values of the last field with the given key. Missing keys produce an empty slice.
	///
	/// # Examples
	/// ```
	/// use savage_rules::Attrs;
	///
	/// let attrs: Attrs = r#"Type=Combat Require="agility >= 8","skills.Fighting >= 6""#.parse()?;
	/// assert_eq!(attrs.get_list("Require"), ["agility >= 8", "skills.Fighting >= 6"]);
	/// assert!(attrs.get_list("Imply").is_empty());
	/// # Ok::<(), savage_rules::parse::Error>(())
	/// ```
	#[must_use]
	pub fn get_list(&self, key: &str) -> &[String] {
		self.field(key).map_or(&[], |field| field.values.as_slice())
	}

	/// Checks whether any field has the given key.
	#[must_use]
	pub fn has(&self, key: &str) -> bool {
		self.field(key).is_some()
	}

	/// Gets the last field with the given key.
	#[must_use]
	pub fn field(&self, key: &str) -> Option<&Field> {
		self.fields.iter().rev().find(|field| field.key == key)
	}

	/// Iterates over every field, including shadowed duplicates.
	pub fn iter(&self) -> impl Iterator<Item = &Field> {
		self.fields.iter()
	}

	/// Number of fields, including shadowed duplicates.
	#[must_use]
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Checks whether there are no fields at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Appends a field.
	pub fn push(&mut self, field: Field) {
		self.fields.push(field);
	}

	/// Appends a single-valued field and returns self, for building attrs fluently.
	#[must_use]
	pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
		self.push(Field::new(key, [value.into()]));
		self
	}

	/// Appends a list field and returns self. Empty lists are skipped entirely.
	#[must_use]
	pub fn with_list<S: Into<String>>(mut self, key: &str, values: impl IntoIterator<Item = S>) -> Self {
		let field = Field::new(key, values);
		if !field.values.is_empty() {
			self.push(field);
		}
		self
	}

	/// Appends a single-valued field when the value is present.
	#[must_use]
	pub fn with_opt(self, key: &str, value: Option<impl Into<String>>) -> Self {
		match value {
			Some(value) => self.with(key, value),
			None => self,
		}
	}
}

impl fmt::Display for Attrs {
	/// Formats the attrs back into their string encoding. Values that contain whitespace, commas, or nothing at all are
	/// quoted so the output parses back into the same fields.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, field) in self.fields.iter().enumerate() {
			if idx > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{field}")?;
		}
		Ok(())
	}
}

impl FromStr for Attrs {
	type Err = parse::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse::run(parse::attrs(), s)
	}
}

/// Extracts a single field from an attrs string. Malformed strings and missing keys both produce `None`.
///
/// # Examples
/// ```
/// use savage_rules::get_attr_value;
///
/// let value = get_attr_value(r#"Advances=0 PowerPoints=1 Range=Smarts Description="Grants +2 to resist""#, "Range");
/// assert_eq!(value.as_deref(), Some("Smarts"));
/// ```
#[must_use]
pub fn get_attr_value(attrs: &str, key: &str) -> Option<String> {
	attrs.parse::<Attrs>().ok()?.get(key).map(ToOwned::to_owned)
}

/// Extracts a comma-split field list from an attrs string. Malformed strings and missing keys both produce an empty
/// list.
#[must_use]
pub fn get_attr_value_array(attrs: &str, key: &str) -> Vec<String> {
	attrs
		.parse::<Attrs>()
		.map(|attrs| attrs.get_list(key).to_vec())
		.unwrap_or_default()
}

/// Checks whether a value would be misread if written bare.
fn needs_quotes(value: &str) -> bool {
	value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == ',' || c == '"')
}
