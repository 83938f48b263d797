//! Savage Worlds Adventure Edition tables.

use crate::{
	choice::ChoiceType,
	merge::{table as build, Table},
};

/// Gets the SWADE table for a choice type. Types the core rules don't have get an empty table.
pub(super) fn table(kind: ChoiceType) -> Table {
	match kind {
		ChoiceType::Arcana => arcanas(),
		ChoiceType::Armor => armors(),
		ChoiceType::Concept => concepts(),
		ChoiceType::Deity => deities(),
		ChoiceType::Edge => edges(),
		ChoiceType::Era => eras(),
		ChoiceType::Feature => features(),
		ChoiceType::Goody => goodies(),
		ChoiceType::Hindrance => hindrances(),
		ChoiceType::Language => languages(),
		ChoiceType::Power => powers(),
		ChoiceType::Race => races(),
		ChoiceType::Shield => shields(),
		ChoiceType::Skill => skills(),
		ChoiceType::Weapon => weapons(),
		ChoiceType::SuperPower | ChoiceType::SuperPowerModifier => Table::new(),
	}
}

/// Arcane backgrounds
fn arcanas() -> Table {
	build(&[
		("Gifted", "Skill=Focus"),
		("Magic", "Skill=Spellcasting"),
		("Miracles", "Skill=Faith"),
		("Psionics", "Skill=Psionics"),
		("Weird Science", "Skill=\"Weird Science\""),
	])
}

fn armors() -> Table {
	build(&[
		("Leather", "Era=Medieval Area=Body Armor=2 MinStr=6 Weight=15"),
		("Chain Hauberk", "Era=Medieval Area=Body Armor=3 MinStr=8 Weight=25"),
		("Plate Corselet", "Era=Medieval Area=Body Armor=4 MinStr=10 Weight=30"),
		("Plate Vambraces", "Era=Medieval Area=Arms Armor=4 MinStr=10 Weight=10"),
		("Plate Greaves", "Era=Medieval Area=Legs Armor=4 MinStr=10 Weight=10"),
		("Pot Helm", "Era=Medieval Area=Head Armor=3 MinStr=6 Weight=4"),
		("Flak Jacket", "Era=Modern Area=Body Armor=2 MinStr=6 Weight=10"),
		("Kevlar Vest", "Era=Modern Area=Body Armor=2 MinStr=6 Weight=5"),
		("Motorcycle Helmet", "Era=Modern Area=Head Armor=3 MinStr=4 Weight=5"),
		("Body Armor", "Era=Future Area=Body Armor=4 MinStr=4 Weight=4"),
		("Infantry Battle Suit", "Era=Future Area=Body Armor=6 MinStr=6 Weight=12"),
	])
}

fn concepts() -> Table {
	build(&[
		("Brawler", "Attribute=strength,vigor Edge=Brawler Skill=Athletics,Fighting"),
		("Explorer", "Attribute=agility,vigor Skill=Notice,Survival"),
		("Hacker", "Attribute=smarts Skill=Hacking,Electronics,Research"),
		("Mage", "Attribute=smarts Edge=\"Arcane Resistance\" Skill=Spellcasting,Occult"),
		("Soldier", "Attribute=agility,strength Edge=Marksman Skill=Fighting,Shooting"),
	])
}

fn deities() -> Table {
	build(&[
		("The Dawn Father", "Alignment=Good Domain=Healing,Sun"),
		("The Hooded One", "Alignment=Neutral Domain=Death,Knowledge"),
		("The Red Queen", "Alignment=Evil Domain=War,Fire"),
	])
}

fn edges() -> Table {
	build(&[
		("Alertness", "Type=Background"),
		("Ambidextrous", "Type=Background Require=\"agility >= 8\""),
		("Arcane Resistance", "Type=Background Require=\"spirit >= 8\""),
		(
			"Improved Arcane Resistance",
			"Type=Background Require=\"edges.Arcane Resistance >= 1\"",
		),
		("Aristocrat", "Type=Background"),
		("Attractive", "Type=Background Require=\"vigor >= 6\""),
		("Very Attractive", "Type=Background Require=\"edges.Attractive >= 1\""),
		("Berserk", "Type=Background"),
		("Brave", "Type=Background Require=\"spirit >= 6\""),
		("Brawny", "Type=Background Require=\"strength >= 6\",\"vigor >= 6\""),
		("Brute", "Type=Background Require=\"strength >= 6\",\"vigor >= 6\""),
		("Charismatic", "Type=Background Require=\"spirit >= 8\""),
		("Elan", "Type=Background Require=\"spirit >= 8\""),
		("Fame", "Type=Background"),
		("Famous", "Type=Background Require=\"advances >= 4\",\"edges.Fame >= 1\""),
		("Fast Healer", "Type=Background Require=\"vigor >= 8\""),
		("Fleet-Footed", "Type=Background Require=\"agility >= 6\""),
		("Linguist", "Type=Background Require=\"smarts >= 6\""),
		("Luck", "Type=Background"),
		("Great Luck", "Type=Background Require=\"edges.Luck >= 1\""),
		("Quick", "Type=Background Require=\"agility >= 8\""),
		("Rich", "Type=Background"),
		("Filthy Rich", "Type=Background Require=\"edges.Rich >= 1\""),
		("Block", "Type=Combat Require=\"advances >= 4\",\"skills.Fighting >= 8\""),
		("Improved Block", "Type=Combat Require=\"advances >= 8\",\"edges.Block >= 1\""),
		("Brawler", "Type=Combat Require=\"strength >= 8\",\"vigor >= 8\""),
		("Bruiser", "Type=Combat Require=\"advances >= 4\",\"edges.Brawler >= 1\""),
		("Calculating", "Type=Combat Require=\"smarts >= 8\""),
		("Combat Reflexes", "Type=Combat Require=\"advances >= 4\""),
		("Counterattack", "Type=Combat Require=\"advances >= 4\",\"skills.Fighting >= 8\""),
		("Dead Shot", "Type=Combat Require=\"skills.Shooting >= 8\""),
		("Dodge", "Type=Combat Require=\"advances >= 4\",\"agility >= 8\""),
		("Extraction", "Type=Combat Require=\"agility >= 8\""),
		("First Strike", "Type=Combat Require=\"agility >= 8\""),
		("Free Runner", "Type=Combat Require=\"agility >= 8\",\"skills.Athletics >= 6\""),
		("Frenzy", "Type=Combat Require=\"advances >= 4\",\"skills.Fighting >= 8\""),
		("Giant Killer", "Type=Combat Require=\"advances >= 8\""),
		("Hard To Kill", "Type=Combat Require=\"spirit >= 8\""),
		("Harder To Kill", "Type=Combat Require=\"advances >= 8\",\"edges.Hard To Kill >= 1\""),
		("Improvisational Fighter", "Type=Combat Require=\"advances >= 4\",\"smarts >= 6\""),
		("Iron Jaw", "Type=Combat Require=\"vigor >= 8\""),
		("Killer Instinct", "Type=Combat Require=\"advances >= 4\""),
		("Level Headed", "Type=Combat Require=\"advances >= 4\",\"smarts >= 8\""),
		(
			"Marksman",
			"Type=Combat Require=\"advances >= 4\",\"skills.Athletics >= 8 || skills.Shooting >= 8\"",
		),
		("Martial Artist", "Type=Combat Require=\"skills.Fighting >= 6\""),
		("Nerves Of Steel", "Type=Combat Require=\"vigor >= 8\""),
		("No Mercy", "Type=Combat Require=\"advances >= 4\""),
		("Rapid Fire", "Type=Combat Require=\"advances >= 4\",\"skills.Shooting >= 6\""),
		(
			"Rock And Roll!",
			"Type=Combat Require=\"advances >= 4\",\"skills.Shooting >= 8\" Imply=\"edges.Rapid Fire >= 1\"",
		),
		(
			"Sweep",
			"Type=Combat Require=\"strength >= 8\",\"skills.Fighting >= 8\" Imply=\"strength >= 10\"",
		),
	])
}

fn eras() -> Table {
	build(&[
		("Medieval", "Description=\"Swords, sorcery and stone castles\""),
		("Modern", "Description=\"Firearms, cars and computers\""),
		("Future", "Description=\"Lasers, starships and powered armor\""),
	])
}

fn features() -> Table {
	build(&[
		("Agile", "Section=attribute Note=\"Agility step +1\""),
		("All Thumbs", "Section=skill Note=\"-2 Repair\""),
		("Aquatic", "Section=ability Note=\"Cannot drown, Pace in water equals Pace\""),
		("Arcane Resistance", "Section=combat Note=\"+2 to resist and armor against magic\""),
		(
			"Improved Arcane Resistance",
			"Section=combat Note=\"Arcane Resistance increases to +4\"",
		),
		("Brawler", "Section=combat Note=\"+1 Toughness, unarmed damage Str+d4\""),
		("Bruiser", "Section=combat Note=\"Brawler damage increases a die type\""),
		("Brawny", "Section=combat Note=\"Size +1, load limit is 8x Strength\""),
		("Flight", "Section=ability Note=\"Pace 12 in the air\""),
		("Fleet-Footed", "Section=combat Note=\"+2 Pace, d8 running die\""),
		("Hardy", "Section=combat Note=\"A second Shaken result does not cause a wound\""),
		("Heritage", "Section=feature Note=\"Agile or a free edge\""),
		("Infravision", "Section=feature Note=\"Halves darkness penalties against warm targets\""),
		("Keen Senses", "Section=skill Note=\"Notice step +1\""),
		("Low Light Vision", "Section=feature Note=\"Ignores penalties for dim and dark lighting\""),
		("Natural Weapons", "Section=combat Note=\"Bite or claws for Str+d4\""),
		("Outsider", "Section=skill Note=\"-2 Persuasion with other races\""),
		("Reduced Pace", "Section=combat Note=\"-1 Pace, running die one step lower\""),
		("Size +1", "Section=combat Note=\"+1 Toughness\""),
		("Size -1", "Section=combat Note=\"-1 Toughness\""),
		("Smart", "Section=attribute Note=\"Smarts step +1\""),
		("Spirited", "Section=attribute Note=\"Spirit step +1\""),
		("Strong", "Section=attribute Note=\"Strength step +1\""),
		("Tough", "Section=attribute Note=\"Vigor step +1\""),
	])
}

fn goodies() -> Table {
	build(&[
		("Pace", "Attribute=pace Effect=add Value=source Section=combat Note=\"+N Pace\""),
		("Parry", "Attribute=parry Effect=add Value=source Section=combat Note=\"+N Parry\""),
		(
			"Power Points",
			"Attribute=powerPoints Effect=add Value=source Section=arcana Note=\"+N Power Points\"",
		),
		("Size", "Attribute=size Effect=add Value=source Section=combat Note=\"+N Size\""),
		(
			"Toughness",
			"Attribute=toughness Effect=add Value=source Section=combat Note=\"+N Toughness\"",
		),
	])
}

fn hindrances() -> Table {
	build(&[
		("All Thumbs", "Severity=Minor"),
		("Anemic", "Severity=Minor"),
		("Arrogant", "Severity=Major"),
		("Bad Eyes", "Severity=Minor/Major"),
		("Bad Luck", "Severity=Major"),
		("Big Mouth", "Severity=Minor"),
		("Blind", "Severity=Major"),
		("Bloodthirsty", "Severity=Major"),
		("Can't Swim", "Severity=Minor"),
		("Cautious", "Severity=Minor"),
		("Clueless", "Severity=Major"),
		("Clumsy", "Severity=Major"),
		("Code Of Honor", "Severity=Major"),
		("Curious", "Severity=Major"),
		("Death Wish", "Severity=Minor"),
		("Delusional", "Severity=Minor/Major"),
		("Doubting Thomas", "Severity=Minor"),
		("Driven", "Severity=Minor/Major"),
		("Elderly", "Severity=Major"),
		("Enemy", "Severity=Minor/Major"),
		("Greedy", "Severity=Minor/Major"),
		("Habit", "Severity=Minor/Major"),
		("Hard Of Hearing", "Severity=Minor/Major"),
		("Heroic", "Severity=Major"),
		("Hesitant", "Severity=Minor"),
		("Illiterate", "Severity=Minor"),
		("Impulsive", "Severity=Major"),
		("Jealous", "Severity=Minor/Major"),
		("Loyal", "Severity=Minor"),
		("Mean", "Severity=Minor"),
		("Mild Mannered", "Severity=Minor"),
		("Mute", "Severity=Major"),
		("Obese", "Severity=Minor Require=\"edges.Brawny == 0\""),
		("Obligation", "Severity=Minor/Major"),
		("One Arm", "Severity=Major"),
		("One Eye", "Severity=Major"),
		("Outsider", "Severity=Minor/Major"),
		("Overconfident", "Severity=Major"),
		("Pacifist", "Severity=Minor/Major"),
		("Phobia", "Severity=Minor/Major"),
		("Poverty", "Severity=Minor"),
		("Quirk", "Severity=Minor"),
		("Ruthless", "Severity=Minor/Major"),
		("Secret", "Severity=Minor/Major"),
		("Shamed", "Severity=Minor/Major"),
		("Slow", "Severity=Minor/Major"),
		("Small", "Severity=Minor Require=\"edges.Brawny == 0\""),
		("Stubborn", "Severity=Minor"),
		("Suspicious", "Severity=Minor/Major"),
		("Thin Skinned", "Severity=Minor/Major"),
		("Tongue-Tied", "Severity=Major"),
		("Ugly", "Severity=Minor/Major"),
		("Vengeful", "Severity=Minor/Major"),
		("Vow", "Severity=Minor/Major"),
		("Wanted", "Severity=Minor/Major"),
		("Yellow", "Severity=Major"),
		("Young", "Severity=Minor/Major"),
	])
}

fn languages() -> Table {
	build(&[
		("Common", ""),
		("Dwarven", ""),
		("Elven", ""),
		("Halfling", ""),
		("Saurian", ""),
	])
}

fn powers() -> Table {
	build(&[
		(
			"Arcane Protection",
			"Advances=0 PowerPoints=1 Range=Touch Description=\"-2 to arcane attacks against the target\"",
		),
		(
			"Banish",
			"Advances=4 PowerPoints=3 Range=Smarts Description=\"Sends a creature back to its native plane\"",
		),
		("Barrier", "Advances=4 PowerPoints=2 Range=Smarts Description=\"Creates a solid wall\""),
		("Blast", "Advances=4 PowerPoints=3 Range=Smarts Description=\"2d6 damage in a Medium Blast Template\""),
		("Blind", "Advances=0 PowerPoints=2 Range=Smarts Description=\"-2 to all actions for the target\""),
		("Bolt", "Advances=0 PowerPoints=1 Range=\"Smarts x2\" Description=\"2d6 damage\""),
		("Boost/Lower Trait", "Advances=0 PowerPoints=2 Range=Smarts Description=\"Raises or lowers a trait\""),
		("Burrow", "Advances=0 PowerPoints=1 Range=Smarts Description=\"Moves through earth\""),
		("Confusion", "Advances=0 PowerPoints=1 Range=Smarts Description=\"Target is Distracted and Vulnerable\""),
		("Darksight", "Advances=0 PowerPoints=1 Range=Smarts Description=\"Ignores illumination penalties\""),
		("Deflection", "Advances=0 PowerPoints=3 Range=Smarts Description=\"-2 to attacks against the target\""),
		("Dispel", "Advances=4 PowerPoints=1 Range=Smarts Description=\"Ends a power\""),
		("Divination", "Advances=8 PowerPoints=5 Range=Self Description=\"Asks questions of a higher power\""),
		("Entangle", "Advances=0 PowerPoints=2 Range=Smarts Description=\"Target is Entangled or Bound\""),
		("Fear", "Advances=0 PowerPoints=2 Range=Smarts Description=\"Causes a Fear check\""),
		("Fly", "Advances=4 PowerPoints=3 Range=Touch Description=\"Pace 12 flight\""),
		("Healing", "Advances=0 PowerPoints=3 Range=Touch Description=\"Removes a wound\""),
		("Invisibility", "Advances=4 PowerPoints=5 Range=Self Description=\"-4 to be detected or attacked\""),
		("Mind Reading", "Advances=4 PowerPoints=2 Range=Smarts Description=\"Reads surface thoughts\""),
		("Protection", "Advances=0 PowerPoints=1 Range=Smarts Description=\"+2 Armor\""),
		("Relief", "Advances=0 PowerPoints=1 Range=Touch Description=\"Removes Fatigue or Shaken\""),
		("Sloth/Speed", "Advances=4 PowerPoints=2 Range=Smarts Description=\"Halves or doubles Pace\""),
		("Smite", "Advances=0 PowerPoints=2 Range=Smarts Description=\"+2 damage with a weapon\""),
		("Stun", "Advances=0 PowerPoints=2 Range=Smarts Description=\"Target is Stunned\""),
		("Telekinesis", "Advances=4 PowerPoints=5 Range=Smarts Description=\"Moves objects with the mind\""),
		("Teleport", "Advances=4 PowerPoints=2 Range=Smarts Description=\"Moves instantly\""),
		("Zombie", "Advances=8 PowerPoints=3 Range=Smarts Description=\"Raises the dead\""),
	])
}

fn races() -> Table {
	build(&[
		("Android", "Features=Construct,Outsider Languages=Common"),
		("Aquarian", "Features=Aquatic,\"Low Light Vision\",Tough Languages=Common"),
		("Avion", "Features=Flight,\"Reduced Pace\" Languages=Common"),
		("Dwarf", "Features=\"Low Light Vision\",\"Reduced Pace\",Tough Languages=Common,Dwarven"),
		("Elf", "Features=Agile,\"All Thumbs\",\"Low Light Vision\" Languages=Common,Elven"),
		("Half-Elf", "Features=Heritage,\"Low Light Vision\",Outsider Languages=Common,Elven"),
		("Half-Folk", "Features=Luck,\"Size -1\",Spirited Languages=Common,Halfling"),
		("Human", "Languages=Common"),
		("Rakashan", "Features=Agile,\"Low Light Vision\",\"Natural Weapons\" Languages=Common"),
		("Saurian", "Features=\"Keen Senses\",\"Natural Weapons\",Outsider Languages=Common,Saurian"),
	])
}

fn shields() -> Table {
	build(&[
		("Small Shield", "Era=Medieval Parry=1 Cover=0 MinStr=4 Weight=4"),
		("Medium Shield", "Era=Medieval Parry=2 Cover=2 MinStr=6 Weight=8"),
		("Large Shield", "Era=Medieval Parry=3 Cover=4 MinStr=8 Weight=12"),
		("Ballistic Shield", "Era=Modern Parry=3 Cover=4 MinStr=8 Weight=9"),
		("Riot Shield", "Era=Modern Parry=3 Cover=2 MinStr=6 Weight=5"),
	])
}

fn skills() -> Table {
	build(&[
		("Academics", "Attribute=smarts"),
		("Athletics", "Attribute=agility Core=y"),
		("Battle", "Attribute=smarts"),
		("Boating", "Attribute=agility"),
		("Common Knowledge", "Attribute=smarts Core=y"),
		("Driving", "Attribute=agility Era=Modern,Future"),
		("Electronics", "Attribute=smarts Era=Modern,Future"),
		("Faith", "Attribute=spirit"),
		("Fighting", "Attribute=agility"),
		("Focus", "Attribute=spirit"),
		("Gambling", "Attribute=smarts"),
		("Hacking", "Attribute=smarts Era=Modern,Future"),
		("Healing", "Attribute=smarts"),
		("Intimidation", "Attribute=spirit"),
		("Notice", "Attribute=smarts Core=y"),
		("Occult", "Attribute=smarts"),
		("Performance", "Attribute=spirit"),
		("Persuasion", "Attribute=spirit Core=y"),
		("Piloting", "Attribute=agility Era=Modern,Future"),
		("Psionics", "Attribute=smarts"),
		("Repair", "Attribute=smarts"),
		("Research", "Attribute=smarts"),
		("Riding", "Attribute=agility"),
		("Science", "Attribute=smarts"),
		("Shooting", "Attribute=agility"),
		("Spellcasting", "Attribute=smarts"),
		("Stealth", "Attribute=agility Core=y"),
		("Survival", "Attribute=smarts"),
		("Taunt", "Attribute=smarts"),
		("Thievery", "Attribute=agility"),
		("Weird Science", "Attribute=smarts"),
	])
}

fn weapons() -> Table {
	build(&[
		("Unarmed", "Damage=Str Category=Unarmed"),
		("Dagger", "Era=Medieval Damage=Str+d4 MinStr=4 Weight=1 Category=One-Handed Range=3"),
		("Long Sword", "Era=Medieval Damage=Str+d8 Weight=3"),
		("Great Sword", "Era=Medieval Damage=Str+d10 Weight=6 Category=Two-Handed"),
		("Battle Axe", "Era=Medieval Damage=Str+d8 Weight=4"),
		("Great Axe", "Era=Medieval Damage=Str+d10 AP=2 Weight=7 Category=Two-Handed"),
		("Spear", "Era=Medieval Damage=Str+d6 Weight=3 Category=Two-Handed"),
		("Bow", "Era=Medieval Damage=2d6 MinStr=6 Weight=3 Range=12"),
		("Crossbow", "Era=Medieval Damage=2d6 AP=2 MinStr=6 Weight=5 Range=15"),
		("Colt 1911", "Era=Modern Damage=2d6+1 AP=1 MinStr=4 Weight=3 Range=12"),
		("M-16", "Era=Modern Damage=2d8 AP=2 MinStr=6 Weight=8 Range=24 ROF=3"),
		("Shotgun", "Era=Modern Damage=3d6 MinStr=6 Weight=8 Range=12"),
		("Laser Pistol", "Era=Future Damage=3d6 AP=2 MinStr=4 Weight=2 Range=15"),
		("Laser Rifle", "Era=Future Damage=3d6 AP=2 MinStr=6 Weight=8 Range=30 ROF=3"),
	])
}
