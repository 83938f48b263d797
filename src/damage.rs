//! Weapon damage expressions such as `Str+d6`, `2d6+1`, or `Str+d4+d4`.
//!
//! Damage isn't rolled here. It is kept structured so that derived values (most importantly a weapon's minimum
//! strength) can be read off of it and so it can be forwarded to the host intact.

use std::{fmt, str::FromStr};

use crate::parse;

/// A number of dice with a specific number of sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs, reason = "Dice are only ever a count and a side count")]
pub struct Die {
	/// Number of dice
	pub count: u8,

	/// Number of sides for each die
	pub sides: u8,
}

impl Die {
	/// Creates a new set of dice with a given count and number of sides.
	#[must_use]
	pub const fn new(count: u8, sides: u8) -> Self {
		Self { count, sides }
	}
}

impl fmt::Display for Die {
	/// Single dice are written without their count (`d6`), like they are in the rulebooks.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.count == 1 {
			write!(f, "d{}", self.sides)
		} else {
			write!(f, "{}d{}", self.count, self.sides)
		}
	}
}

/// One signed term of a damage expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums, reason = "Damage terms are a closed set")]
pub enum Part {
	/// Dice added to the damage
	Dice(Die),

	/// Flat bonus or penalty
	Bonus(i32),
}

/// Parsed weapon damage
///
/// # Examples
/// ```
/// use savage_rules::damage::{Damage, Die};
///
/// let damage: Damage = "Str+d8".parse()?;
/// assert!(damage.strength);
/// assert_eq!(damage.step_die(), Some(Die::new(1, 8)));
/// assert_eq!(damage.implied_min_str(), 8);
///
/// let damage: Damage = "2d6+1".parse()?;
/// assert!(!damage.strength);
/// assert_eq!(damage.implied_min_str(), 0);
/// assert_eq!(damage.to_string(), "2d6+1");
/// # Ok::<(), savage_rules::parse::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs, reason = "Plain data")]
pub struct Damage {
	/// Whether the wielder's strength die is included (`Str+...`)
	pub strength: bool,

	/// Remaining terms, in the order they were written
	pub parts: Vec<Part>,
}

impl Damage {
	/// Gets the step die of a strength-based damage expression: the first single die added to the strength die.
	/// Damage that doesn't include strength has no step die.
	#[must_use]
	pub fn step_die(&self) -> Option<Die> {
		if !self.strength {
			return None;
		}

		self.parts.iter().find_map(|part| match part {
			Part::Dice(die) if die.count == 1 => Some(*die),
			_ => None,
		})
	}

	/// Minimum strength die (in sides) implied by the damage. Melee weapons need a strength die at least as large as
	/// their step die. Everything else implies no minimum.
	#[must_use]
	pub fn implied_min_str(&self) -> i32 {
		self.step_die().map_or(0, |die| i32::from(die.sides))
	}
}

impl fmt::Display for Damage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		if self.strength {
			f.write_str("Str")?;
			first = false;
		}

		for part in &self.parts {
			match part {
				Part::Dice(die) => {
					if !first {
						f.write_str("+")?;
					}
					write!(f, "{die}")?;
				}
				Part::Bonus(val) if *val < 0 => write!(f, "{val}")?,
				Part::Bonus(val) => {
					if !first {
						f.write_str("+")?;
					}
					write!(f, "{val}")?;
				}
			}
			first = false;
		}

		Ok(())
	}
}

impl FromStr for Damage {
	type Err = parse::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse::run(parse::damage(), s)
	}
}
