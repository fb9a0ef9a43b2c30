//! Standard D&D 5e equipment database.
//!
//! Contains the PHB weapons, armor and ammunition, plus the magical weapon
//! templates, all referenced by name.

use crate::proficiency::WeaponProficiencies;
use crate::world::{
    Ammunition, ArmorItem, ArmorType, ItemError, MagicalTemplate, Rarity, WeaponDamageType,
    WeaponItem, WeaponProperty, Wieldable,
};

/// Get a standard weapon by name.
pub fn get_weapon(name: &str) -> Option<WeaponItem> {
    let name_lower = name.to_lowercase();
    WEAPONS
        .iter()
        .find(|w| w.base.name.to_lowercase() == name_lower)
        .cloned()
}

/// Get a standard armor piece by name.
pub fn get_armor(name: &str) -> Option<ArmorItem> {
    let name_lower = name.to_lowercase();
    ARMORS
        .iter()
        .find(|a| a.base.name.to_lowercase() == name_lower)
        .cloned()
}

/// Get a magical weapon template by name.
pub fn get_magical_template(name: &str) -> Option<&'static MagicalTemplate> {
    let name_lower = name.to_lowercase();
    MAGICAL_TEMPLATES
        .iter()
        .find(|t| t.name.to_lowercase() == name_lower)
}

/// Try to find any standard weapon or armor by name.
pub fn find_item(name: &str) -> Option<StandardItem> {
    if let Some(weapon) = get_weapon(name) {
        return Some(StandardItem::Weapon(weapon));
    }
    if let Some(armor) = get_armor(name) {
        return Some(StandardItem::Armor(armor));
    }
    None
}

/// A standard item from the database.
#[derive(Debug, Clone)]
pub enum StandardItem {
    Weapon(WeaponItem),
    Armor(ArmorItem),
}

impl StandardItem {
    pub fn name(&self) -> &str {
        match self {
            StandardItem::Weapon(w) => &w.base.name,
            StandardItem::Armor(a) => &a.base.name,
        }
    }
}

/// Create a stack of a standard ammunition type.
pub fn create_ammunition(name: &str, quantity: u32) -> Result<Ammunition, ItemError> {
    AMMUNITION_TYPES
        .iter()
        .find(|a| a.name.eq_ignore_ascii_case(name))
        .map(|template| Ammunition {
            quantity,
            ..template.clone()
        })
        .ok_or_else(|| ItemError::UnknownAmmunition(name.to_string()))
}

/// Weapons split by whether a proficiency set covers them.
#[derive(Debug, Default)]
pub struct WeaponsByProficiency<'a, W> {
    pub proficient: Vec<&'a W>,
    pub non_proficient: Vec<&'a W>,
}

/// Partition weapons into proficient and non-proficient.
pub fn categorize_weapons<'a, W: Wieldable>(
    weapons: &'a [W],
    proficiencies: &WeaponProficiencies,
) -> WeaponsByProficiency<'a, W> {
    let (proficient, non_proficient) = weapons.iter().partition(|w| proficiencies.covers(*w));
    WeaponsByProficiency {
        proficient,
        non_proficient,
    }
}

// ============================================================================
// Weapons
// ============================================================================

lazy_static::lazy_static! {
    /// Standard D&D 5e weapons.
    pub static ref WEAPONS: Vec<WeaponItem> = vec![
        // Simple Melee Weapons
        WeaponItem::new("Club", "1d4", WeaponDamageType::Bludgeoning)
            .with_weight(2.0)
            .with_value(0.1)
            .with_properties([WeaponProperty::Light]),
        WeaponItem::new("Dagger", "1d4", WeaponDamageType::Piercing)
            .with_weight(1.0)
            .with_value(2.0)
            .with_properties([WeaponProperty::Finesse, WeaponProperty::Light, WeaponProperty::Thrown])
            .with_range(20, 60),
        WeaponItem::new("Greatclub", "1d8", WeaponDamageType::Bludgeoning)
            .with_weight(10.0)
            .with_value(0.2)
            .with_properties([WeaponProperty::TwoHanded]),
        WeaponItem::new("Handaxe", "1d6", WeaponDamageType::Slashing)
            .with_weight(2.0)
            .with_value(5.0)
            .with_properties([WeaponProperty::Light, WeaponProperty::Thrown])
            .with_range(20, 60),
        WeaponItem::new("Javelin", "1d6", WeaponDamageType::Piercing)
            .with_weight(2.0)
            .with_value(0.5)
            .with_properties([WeaponProperty::Thrown])
            .with_range(30, 120),
        WeaponItem::new("Light Hammer", "1d4", WeaponDamageType::Bludgeoning)
            .with_weight(2.0)
            .with_value(2.0)
            .with_properties([WeaponProperty::Light, WeaponProperty::Thrown])
            .with_range(20, 60),
        WeaponItem::new("Mace", "1d6", WeaponDamageType::Bludgeoning)
            .with_weight(4.0)
            .with_value(5.0),
        WeaponItem::new("Quarterstaff", "1d6", WeaponDamageType::Bludgeoning)
            .with_weight(4.0)
            .with_value(0.2)
            .with_versatile("1d8"),
        WeaponItem::new("Sickle", "1d4", WeaponDamageType::Slashing)
            .with_weight(2.0)
            .with_value(1.0)
            .with_properties([WeaponProperty::Light]),
        WeaponItem::new("Spear", "1d6", WeaponDamageType::Piercing)
            .with_weight(3.0)
            .with_value(1.0)
            .with_properties([WeaponProperty::Thrown])
            .with_versatile("1d8")
            .with_range(20, 60),

        // Simple Ranged Weapons
        WeaponItem::new("Light Crossbow", "1d8", WeaponDamageType::Piercing)
            .ranged()
            .with_weight(5.0)
            .with_value(25.0)
            .with_properties([WeaponProperty::Ammunition, WeaponProperty::Loading, WeaponProperty::TwoHanded])
            .with_range(80, 320),
        WeaponItem::new("Dart", "1d4", WeaponDamageType::Piercing)
            .ranged()
            .with_weight(0.25)
            .with_value(0.05)
            .with_properties([WeaponProperty::Finesse, WeaponProperty::Thrown])
            .with_range(20, 60)
            .stackable(1),
        WeaponItem::new("Shortbow", "1d6", WeaponDamageType::Piercing)
            .ranged()
            .with_weight(2.0)
            .with_value(25.0)
            .with_properties([WeaponProperty::Ammunition, WeaponProperty::TwoHanded])
            .with_range(80, 320),
        WeaponItem::new("Sling", "1d4", WeaponDamageType::Bludgeoning)
            .ranged()
            .with_value(0.1)
            .with_properties([WeaponProperty::Ammunition])
            .with_range(30, 120),

        // Martial Melee Weapons
        WeaponItem::new("Battleaxe", "1d8", WeaponDamageType::Slashing)
            .martial()
            .with_weight(4.0)
            .with_value(10.0)
            .with_versatile("1d10"),
        WeaponItem::new("Flail", "1d8", WeaponDamageType::Bludgeoning)
            .martial()
            .with_weight(2.0)
            .with_value(10.0),
        WeaponItem::new("Glaive", "1d10", WeaponDamageType::Slashing)
            .martial()
            .with_weight(6.0)
            .with_value(20.0)
            .with_properties([WeaponProperty::Heavy, WeaponProperty::Reach, WeaponProperty::TwoHanded]),
        WeaponItem::new("Greataxe", "1d12", WeaponDamageType::Slashing)
            .martial()
            .with_weight(7.0)
            .with_value(30.0)
            .with_properties([WeaponProperty::Heavy, WeaponProperty::TwoHanded]),
        WeaponItem::new("Greatsword", "2d6", WeaponDamageType::Slashing)
            .martial()
            .with_weight(6.0)
            .with_value(50.0)
            .with_properties([WeaponProperty::Heavy, WeaponProperty::TwoHanded]),
        WeaponItem::new("Halberd", "1d10", WeaponDamageType::Slashing)
            .martial()
            .with_weight(6.0)
            .with_value(20.0)
            .with_properties([WeaponProperty::Heavy, WeaponProperty::Reach, WeaponProperty::TwoHanded]),
        WeaponItem::new("Lance", "1d12", WeaponDamageType::Piercing)
            .martial()
            .with_weight(6.0)
            .with_value(10.0)
            .with_properties([WeaponProperty::Reach, WeaponProperty::Special]),
        WeaponItem::new("Longsword", "1d8", WeaponDamageType::Slashing)
            .martial()
            .with_weight(3.0)
            .with_value(15.0)
            .with_versatile("1d10"),
        WeaponItem::new("Maul", "2d6", WeaponDamageType::Bludgeoning)
            .martial()
            .with_weight(10.0)
            .with_value(10.0)
            .with_properties([WeaponProperty::Heavy, WeaponProperty::TwoHanded]),
        WeaponItem::new("Morningstar", "1d8", WeaponDamageType::Piercing)
            .martial()
            .with_weight(4.0)
            .with_value(15.0),
        WeaponItem::new("Pike", "1d10", WeaponDamageType::Piercing)
            .martial()
            .with_weight(18.0)
            .with_value(5.0)
            .with_properties([WeaponProperty::Heavy, WeaponProperty::Reach, WeaponProperty::TwoHanded]),
        WeaponItem::new("Rapier", "1d8", WeaponDamageType::Piercing)
            .martial()
            .with_weight(2.0)
            .with_value(25.0)
            .with_properties([WeaponProperty::Finesse]),
        WeaponItem::new("Scimitar", "1d6", WeaponDamageType::Slashing)
            .martial()
            .with_weight(3.0)
            .with_value(25.0)
            .with_properties([WeaponProperty::Finesse, WeaponProperty::Light]),
        WeaponItem::new("Shortsword", "1d6", WeaponDamageType::Piercing)
            .martial()
            .with_weight(2.0)
            .with_value(10.0)
            .with_properties([WeaponProperty::Finesse, WeaponProperty::Light]),
        WeaponItem::new("Trident", "1d6", WeaponDamageType::Piercing)
            .martial()
            .with_weight(4.0)
            .with_value(5.0)
            .with_properties([WeaponProperty::Thrown])
            .with_versatile("1d8")
            .with_range(20, 60),
        WeaponItem::new("War Pick", "1d8", WeaponDamageType::Piercing)
            .martial()
            .with_weight(2.0)
            .with_value(5.0),
        WeaponItem::new("Warhammer", "1d8", WeaponDamageType::Bludgeoning)
            .martial()
            .with_weight(2.0)
            .with_value(15.0)
            .with_versatile("1d10"),
        WeaponItem::new("Whip", "1d4", WeaponDamageType::Slashing)
            .martial()
            .with_weight(3.0)
            .with_value(2.0)
            .with_properties([WeaponProperty::Finesse, WeaponProperty::Reach]),

        // Martial Ranged Weapons
        WeaponItem::new("Blowgun", "1", WeaponDamageType::Piercing)
            .martial()
            .ranged()
            .with_weight(1.0)
            .with_value(10.0)
            .with_properties([WeaponProperty::Ammunition, WeaponProperty::Loading])
            .with_range(25, 100),
        WeaponItem::new("Hand Crossbow", "1d6", WeaponDamageType::Piercing)
            .martial()
            .ranged()
            .with_weight(3.0)
            .with_value(75.0)
            .with_properties([WeaponProperty::Ammunition, WeaponProperty::Light, WeaponProperty::Loading])
            .with_range(30, 120),
        WeaponItem::new("Heavy Crossbow", "1d10", WeaponDamageType::Piercing)
            .martial()
            .ranged()
            .with_weight(18.0)
            .with_value(50.0)
            .with_properties([WeaponProperty::Ammunition, WeaponProperty::Heavy, WeaponProperty::Loading, WeaponProperty::TwoHanded])
            .with_range(100, 400),
        WeaponItem::new("Longbow", "1d8", WeaponDamageType::Piercing)
            .martial()
            .ranged()
            .with_weight(2.0)
            .with_value(50.0)
            .with_properties([WeaponProperty::Ammunition, WeaponProperty::Heavy, WeaponProperty::TwoHanded])
            .with_range(150, 600),
    ];

    /// Standard D&D 5e armor.
    pub static ref ARMORS: Vec<ArmorItem> = vec![
        // Light Armor
        ArmorItem::new("Padded Armor", ArmorType::Light, 11)
            .with_weight(8.0)
            .with_value(5.0)
            .with_stealth_disadvantage(),
        ArmorItem::new("Leather Armor", ArmorType::Light, 11)
            .with_weight(10.0)
            .with_value(10.0),
        ArmorItem::new("Studded Leather", ArmorType::Light, 12)
            .with_weight(13.0)
            .with_value(45.0),

        // Medium Armor
        ArmorItem::new("Hide Armor", ArmorType::Medium, 12)
            .with_weight(12.0)
            .with_value(10.0)
            .with_max_dex_bonus(2),
        ArmorItem::new("Chain Shirt", ArmorType::Medium, 13)
            .with_weight(20.0)
            .with_value(50.0)
            .with_max_dex_bonus(2),
        ArmorItem::new("Scale Mail", ArmorType::Medium, 14)
            .with_weight(45.0)
            .with_value(50.0)
            .with_max_dex_bonus(2)
            .with_stealth_disadvantage(),
        ArmorItem::new("Breastplate", ArmorType::Medium, 14)
            .with_weight(20.0)
            .with_value(400.0)
            .with_max_dex_bonus(2),
        ArmorItem::new("Half Plate", ArmorType::Medium, 15)
            .with_weight(40.0)
            .with_value(750.0)
            .with_max_dex_bonus(2)
            .with_stealth_disadvantage(),

        // Heavy Armor
        ArmorItem::new("Ring Mail", ArmorType::Heavy, 14)
            .with_weight(40.0)
            .with_value(30.0)
            .with_max_dex_bonus(0)
            .with_stealth_disadvantage(),
        ArmorItem::new("Chain Mail", ArmorType::Heavy, 16)
            .with_weight(55.0)
            .with_value(75.0)
            .with_max_dex_bonus(0)
            .with_strength_requirement(13)
            .with_stealth_disadvantage(),
        ArmorItem::new("Splint Armor", ArmorType::Heavy, 17)
            .with_weight(60.0)
            .with_value(200.0)
            .with_max_dex_bonus(0)
            .with_strength_requirement(15)
            .with_stealth_disadvantage(),
        ArmorItem::new("Plate Armor", ArmorType::Heavy, 18)
            .with_weight(65.0)
            .with_value(1500.0)
            .with_max_dex_bonus(0)
            .with_strength_requirement(15)
            .with_stealth_disadvantage(),

        // Shield
        ArmorItem::new("Shield", ArmorType::Shield, 2)
            .with_weight(6.0)
            .with_value(10.0)
            .with_description("A wooden or metal shield. +2 AC when equipped."),
    ];

    /// Standard ammunition, one piece each.
    pub static ref AMMUNITION_TYPES: Vec<Ammunition> = vec![
        Ammunition {
            name: "Arrow".to_string(),
            quantity: 1,
            compatible_weapons: vec!["Longbow".to_string(), "Shortbow".to_string()],
            weight: 0.05,
            value_gp: 0.05,
        },
        Ammunition {
            name: "Crossbow Bolt".to_string(),
            quantity: 1,
            compatible_weapons: vec![
                "Light Crossbow".to_string(),
                "Heavy Crossbow".to_string(),
                "Hand Crossbow".to_string(),
            ],
            weight: 0.075,
            value_gp: 0.05,
        },
        Ammunition {
            name: "Blowgun Needle".to_string(),
            quantity: 1,
            compatible_weapons: vec!["Blowgun".to_string()],
            weight: 0.02,
            value_gp: 0.02,
        },
        Ammunition {
            name: "Sling Bullet".to_string(),
            quantity: 1,
            compatible_weapons: vec!["Sling".to_string()],
            weight: 0.075,
            value_gp: 0.002,
        },
    ];
}

/// Magic enhancements that can be applied to a base weapon.
pub static MAGICAL_TEMPLATES: &[MagicalTemplate] = &[
    MagicalTemplate {
        name: "+1 Weapon",
        attack_bonus: 1,
        damage_bonus: 1,
        rarity: Rarity::Uncommon,
        description: "A +1 magical weapon with enhanced attack and damage.",
    },
    MagicalTemplate {
        name: "+2 Weapon",
        attack_bonus: 2,
        damage_bonus: 2,
        rarity: Rarity::Rare,
        description: "A +2 magical weapon with enhanced attack and damage.",
    },
    MagicalTemplate {
        name: "+3 Weapon",
        attack_bonus: 3,
        damage_bonus: 3,
        rarity: Rarity::VeryRare,
        description: "A +3 magical weapon with enhanced attack and damage.",
    },
    MagicalTemplate {
        name: "Flame Tongue",
        attack_bonus: 0,
        damage_bonus: 0,
        rarity: Rarity::Rare,
        description: "As a bonus action, speak the command word to set the blade ablaze. While ablaze it sheds bright light in a 40-foot radius and deals an extra 2d6 fire damage on a hit.",
    },
    MagicalTemplate {
        name: "Frost Brand",
        attack_bonus: 0,
        damage_bonus: 0,
        rarity: Rarity::VeryRare,
        description: "Deals an extra 1d6 cold damage on a hit. While you hold it, you have resistance to fire damage.",
    },
    MagicalTemplate {
        name: "Vorpal",
        attack_bonus: 0,
        damage_bonus: 0,
        rarity: Rarity::Legendary,
        description: "On a natural 20 against a creature with at least one head, you cut off one of its heads.",
    },
    MagicalTemplate {
        name: "Vicious",
        attack_bonus: 0,
        damage_bonus: 0,
        rarity: Rarity::Rare,
        description: "On a natural 20 the target takes an extra 7 damage of the weapon's type.",
    },
];
