//! Armor, shields and weapons.

use std::{fmt, str::FromStr};

use super::{ChoiceType, Fields, Record};
use crate::{attrs::Attrs, damage::Damage};

/// Body location covered by armor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Hit locations are fixed by the rules")]
#[allow(missing_docs, reason = "Self-explanatory")]
pub enum Area {
	#[default]
	Body,
	Head,
	Arms,
	Legs,
}

impl Area {
	/// Gets the name of the area as written in attrs.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Body => "Body",
			Self::Head => "Head",
			Self::Arms => "Arms",
			Self::Legs => "Legs",
		}
	}
}

impl fmt::Display for Area {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Area {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		[Self::Body, Self::Head, Self::Arms, Self::Legs]
			.into_iter()
			.find(|area| area.name().eq_ignore_ascii_case(s))
			.ok_or(())
	}
}

/// Armor, e.g. `Era=Medieval Area=Body Armor=3 MinStr=8 Weight=25`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Armor {
	/// Eras the armor is available in
	pub eras: Vec<String>,

	/// Location the armor covers
	pub area: Area,

	/// Armor bonus to toughness
	pub armor: i32,

	/// Minimum strength die (in sides) needed to wear it without penalty
	pub min_str: i32,

	/// Weight in pounds
	pub weight: i32,
}

impl Record for Armor {
	const KIND: ChoiceType = ChoiceType::Armor;

	fn read(fields: &mut Fields<'_>) -> Self {
		let area = match fields.text("Area") {
			None => Area::Body,
			Some(text) => text.parse().unwrap_or_else(|()| {
				fields.invalid("Area", &text, Area::Body.name());
				Area::Body
			}),
		};

		Self {
			eras: fields.list("Era"),
			area,
			armor: fields.int("Armor", 0),
			min_str: fields.int("MinStr", 0),
			weight: fields.int("Weight", 0),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with_list("Era", self.eras.iter().cloned())
			.with("Area", self.area.name())
			.with("Armor", self.armor.to_string())
			.with("MinStr", self.min_str.to_string())
			.with("Weight", self.weight.to_string())
	}
}

/// Shield, e.g. `Era=Medieval Parry=1 Cover=2 MinStr=6 Weight=8`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Shield {
	/// Eras the shield is available in
	pub eras: Vec<String>,

	/// Bonus to parry
	pub parry: i32,

	/// Cover penalty against ranged attacks
	pub cover: i32,

	/// Minimum strength die (in sides) needed to use it without penalty
	pub min_str: i32,

	/// Weight in pounds
	pub weight: i32,
}

impl Record for Shield {
	const KIND: ChoiceType = ChoiceType::Shield;

	fn read(fields: &mut Fields<'_>) -> Self {
		Self {
			eras: fields.list("Era"),
			parry: fields.int("Parry", 0),
			cover: fields.int("Cover", 0),
			min_str: fields.int("MinStr", 0),
			weight: fields.int("Weight", 0),
		}
	}

	fn to_attrs(&self) -> Attrs {
		Attrs::new()
			.with_list("Era", self.eras.iter().cloned())
			.with("Parry", self.parry.to_string())
			.with("Cover", self.cover.to_string())
			.with("MinStr", self.min_str.to_string())
			.with("Weight", self.weight.to_string())
	}
}

/// How a weapon is wielded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Closed set of weapon categories")]
pub enum Category {
	/// Natural attacks
	Unarmed,

	/// Melee weapon used in one hand
	#[default]
	OneHanded,

	/// Melee weapon needing both hands
	TwoHanded,

	/// Thrown or fired weapon
	Ranged,
}

impl Category {
	/// Gets the name of the category as written in attrs.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Unarmed => "Unarmed",
			Self::OneHanded => "One-Handed",
			Self::TwoHanded => "Two-Handed",
			Self::Ranged => "Ranged",
		}
	}
}

impl FromStr for Category {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		[Self::Unarmed, Self::OneHanded, Self::TwoHanded, Self::Ranged]
			.into_iter()
			.find(|category| category.name().eq_ignore_ascii_case(s))
			.ok_or(())
	}
}

/// Weapon, e.g. `Era=Medieval Damage=Str+d8 MinStr=8 Weight=3 Category=One-Handed`
///
/// # Examples
/// ```
/// use savage_rules::{choice::{gear::Category, Record, Weapon}, Attrs};
///
/// let attrs: Attrs = "Era=Medieval Damage=Str+d10 Weight=8 Category=Two-Handed AP=1".parse()?;
/// let (weapon, warnings) = Weapon::from_attrs("Great Axe", &attrs);
/// assert!(warnings.is_empty());
/// assert_eq!(weapon.category, Category::TwoHanded);
/// assert_eq!(weapon.min_str, 10);
/// assert_eq!(weapon.ap, 1);
/// # Ok::<(), savage_rules::parse::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain table data")]
pub struct Weapon {
	/// Eras the weapon is available in
	pub eras: Vec<String>,

	/// Damage dealt, if it could be understood
	pub damage: Option<Damage>,

	/// Minimum strength die (in sides). Defaults to the damage's step die when not given.
	pub min_str: i32,

	/// Weight in pounds
	pub weight: i32,

	/// How the weapon is wielded
	pub category: Category,

	/// Short range in inches (0 for melee weapons)
	pub range: i32,

	/// Armor piercing
	pub ap: i32,

	/// Rate of fire (0 for melee weapons)
	pub rof: i32,
}

impl Record for Weapon {
	const KIND: ChoiceType = ChoiceType::Weapon;

	fn read(fields: &mut Fields<'_>) -> Self {
		let damage = fields.parsed::<Damage>("Damage");
		let min_str = fields.int_or_else("MinStr", || damage.as_ref().map_or(0, Damage::implied_min_str));
		let range = fields.int("Range", 0);

		let category = match fields.text("Category") {
			Some(text) => text.parse().unwrap_or_else(|()| {
				let fallback = default_category(range);
				fields.invalid("Category", &text, fallback.name());
				fallback
			}),
			None => default_category(range),
		};
		let rof = fields.int("ROF", i32::from(category == Category::Ranged));

		Self {
			eras: fields.list("Era"),
			damage,
			min_str,
			weight: fields.int("Weight", 0),
			category,
			range,
			ap: fields.int("AP", 0),
			rof,
		}
	}

	fn to_attrs(&self) -> Attrs {
		let mut attrs = Attrs::new()
			.with_list("Era", self.eras.iter().cloned())
			.with_opt("Damage", self.damage.as_ref().map(ToString::to_string))
			.with("MinStr", self.min_str.to_string())
			.with("Weight", self.weight.to_string())
			.with("Category", self.category.name());
		if self.range != 0 {
			attrs = attrs.with("Range", self.range.to_string());
		}
		if self.ap != 0 {
			attrs = attrs.with("AP", self.ap.to_string());
		}
		attrs.with("ROF", self.rof.to_string())
	}
}

/// Category assumed for weapons that don't name one.
const fn default_category(range: i32) -> Category {
	if range > 0 {
		Category::Ranged
	} else {
		Category::OneHanded
	}
}
