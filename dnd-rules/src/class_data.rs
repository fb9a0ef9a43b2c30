//! D&D 5e class proficiency data.
//!
//! Armor, weapon and saving throw proficiencies granted at level 1 for all
//! 12 PHB classes.

use crate::proficiency::{ClassProficiencies, WeaponProficiencies};
use crate::world::{Ability, ArmorType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// D&D character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

/// Class-specific proficiency data.
pub struct ClassData {
    /// Saving throw proficiencies granted by the class.
    pub saving_throws: [Ability; 2],
    /// Armor categories the class can wear.
    pub armor: &'static [ArmorType],
    pub simple_weapons: bool,
    pub martial_weapons: bool,
    /// Individual weapons granted outside the simple/martial groups.
    pub specific_weapons: &'static [&'static str],
}

const ALL_ARMOR: &[ArmorType] = &[
    ArmorType::Light,
    ArmorType::Medium,
    ArmorType::Heavy,
    ArmorType::Shield,
];
const MEDIUM_AND_SHIELD: &[ArmorType] = &[ArmorType::Light, ArmorType::Medium, ArmorType::Shield];
const LIGHT_ONLY: &[ArmorType] = &[ArmorType::Light];

const FINESSE_KIT: &[&str] = &["Longsword", "Rapier", "Shortsword", "Hand Crossbow"];
const ARCANE_KIT: &[&str] = &["Dagger", "Dart", "Sling", "Quarterstaff", "Light Crossbow"];

impl CharacterClass {
    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Barbarian => "Barbarian",
            CharacterClass::Bard => "Bard",
            CharacterClass::Cleric => "Cleric",
            CharacterClass::Druid => "Druid",
            CharacterClass::Fighter => "Fighter",
            CharacterClass::Monk => "Monk",
            CharacterClass::Paladin => "Paladin",
            CharacterClass::Ranger => "Ranger",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Sorcerer => "Sorcerer",
            CharacterClass::Warlock => "Warlock",
            CharacterClass::Wizard => "Wizard",
        }
    }

    /// Get proficiency data for the class.
    pub fn data(&self) -> ClassData {
        match self {
            CharacterClass::Barbarian => ClassData {
                saving_throws: [Ability::Strength, Ability::Constitution],
                armor: MEDIUM_AND_SHIELD,
                simple_weapons: true,
                martial_weapons: true,
                specific_weapons: &[],
            },
            CharacterClass::Bard => ClassData {
                saving_throws: [Ability::Dexterity, Ability::Charisma],
                armor: LIGHT_ONLY,
                simple_weapons: true,
                martial_weapons: false,
                specific_weapons: FINESSE_KIT,
            },
            CharacterClass::Cleric => ClassData {
                saving_throws: [Ability::Wisdom, Ability::Charisma],
                armor: MEDIUM_AND_SHIELD,
                simple_weapons: true,
                martial_weapons: false,
                specific_weapons: &[],
            },
            CharacterClass::Druid => ClassData {
                saving_throws: [Ability::Intelligence, Ability::Wisdom],
                armor: MEDIUM_AND_SHIELD,
                simple_weapons: false,
                martial_weapons: false,
                specific_weapons: &[
                    "Club",
                    "Dagger",
                    "Dart",
                    "Javelin",
                    "Mace",
                    "Quarterstaff",
                    "Scimitar",
                    "Sickle",
                    "Sling",
                    "Spear",
                ],
            },
            CharacterClass::Fighter => ClassData {
                saving_throws: [Ability::Strength, Ability::Constitution],
                armor: ALL_ARMOR,
                simple_weapons: true,
                martial_weapons: true,
                specific_weapons: &[],
            },
            CharacterClass::Monk => ClassData {
                saving_throws: [Ability::Strength, Ability::Dexterity],
                armor: &[],
                simple_weapons: true,
                martial_weapons: false,
                specific_weapons: &["Shortsword"],
            },
            CharacterClass::Paladin => ClassData {
                saving_throws: [Ability::Wisdom, Ability::Charisma],
                armor: ALL_ARMOR,
                simple_weapons: true,
                martial_weapons: true,
                specific_weapons: &[],
            },
            CharacterClass::Ranger => ClassData {
                saving_throws: [Ability::Strength, Ability::Dexterity],
                armor: MEDIUM_AND_SHIELD,
                simple_weapons: true,
                martial_weapons: true,
                specific_weapons: &[],
            },
            CharacterClass::Rogue => ClassData {
                saving_throws: [Ability::Dexterity, Ability::Intelligence],
                armor: LIGHT_ONLY,
                simple_weapons: true,
                martial_weapons: false,
                specific_weapons: FINESSE_KIT,
            },
            CharacterClass::Sorcerer => ClassData {
                saving_throws: [Ability::Constitution, Ability::Charisma],
                armor: &[],
                simple_weapons: false,
                martial_weapons: false,
                specific_weapons: ARCANE_KIT,
            },
            CharacterClass::Warlock => ClassData {
                saving_throws: [Ability::Wisdom, Ability::Charisma],
                armor: LIGHT_ONLY,
                simple_weapons: true,
                martial_weapons: false,
                specific_weapons: &[],
            },
            CharacterClass::Wizard => ClassData {
                saving_throws: [Ability::Intelligence, Ability::Wisdom],
                armor: &[],
                simple_weapons: false,
                martial_weapons: false,
                specific_weapons: ARCANE_KIT,
            },
        }
    }

    /// The proficiency record for this class.
    pub fn proficiencies(&self) -> ClassProficiencies {
        let data = self.data();
        ClassProficiencies {
            armor: data.armor.iter().copied().collect(),
            weapons: WeaponProficiencies {
                simple: data.simple_weapons,
                martial: data.martial_weapons,
                specific: data.specific_weapons.iter().map(|w| w.to_string()).collect(),
            },
            saving_throws: data.saving_throws.into_iter().collect(),
        }
    }

    /// Get all character classes.
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Barbarian,
            CharacterClass::Bard,
            CharacterClass::Cleric,
            CharacterClass::Druid,
            CharacterClass::Fighter,
            CharacterClass::Monk,
            CharacterClass::Paladin,
            CharacterClass::Ranger,
            CharacterClass::Rogue,
            CharacterClass::Sorcerer,
            CharacterClass::Warlock,
            CharacterClass::Wizard,
        ]
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown class: {s}"))
    }
}
