//! D&D 5e equipment reference types.
//!
//! Weapons, magical weapons, armor and ammunition as immutable reference
//! data, plus the slice of character state the rules engine reads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Errors building reference items from loosely-typed data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Unknown weapon property: {0}")]
    UnknownProperty(String),

    #[error("Invalid range in weapon property: {0}")]
    InvalidRange(String),

    #[error("Unknown ammunition type: {0}")]
    UnknownAmmunition(String),
}

// ============================================================================
// Ability Scores
// ============================================================================

/// The six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Look up an ability by full name or abbreviation, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|ability| {
            ability.name().eq_ignore_ascii_case(name)
                || ability.abbreviation().eq_ignore_ascii_case(name)
        })
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Ability modifier for a raw score.
pub fn ability_modifier(score: u8) -> i8 {
    // D&D 5e: score 8-9 = -1, 10-11 = 0, 12-13 = +1, etc.
    (score as i16 - 10).div_euclid(2) as i8
}

/// The part of a character the equipment rules need to see.
///
/// The engine only reads this; character state is owned elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterContext {
    pub class_name: String,
    pub level: u8,
    pub strength: u8,
    pub dexterity: u8,
}

impl CharacterContext {
    pub fn new(class_name: impl Into<String>, level: u8, strength: u8, dexterity: u8) -> Self {
        Self {
            class_name: class_name.into(),
            level,
            strength,
            dexterity,
        }
    }
}

// ============================================================================
// Items
// ============================================================================

/// Fields shared by every piece of equipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub quantity: u32,
    pub weight: f32,
    pub value_gp: f32,
    pub description: Option<String>,
    pub item_type: ItemType,
    pub magical: bool,
}

impl Item {
    fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            weight: 0.0,
            value_gp: 0.0,
            description: None,
            item_type,
            magical: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Weapon,
    Armor,
    Shield,
}

// ============================================================================
// Armor
// ============================================================================

/// Armor category. Light, Medium and Heavy share the single body slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArmorType {
    Light,
    Medium,
    Heavy,
    Shield,
}

impl ArmorType {
    pub fn name(&self) -> &'static str {
        match self {
            ArmorType::Light => "Light",
            ArmorType::Medium => "Medium",
            ArmorType::Heavy => "Heavy",
            ArmorType::Shield => "Shield",
        }
    }

    /// Look up a category by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        [ArmorType::Light, ArmorType::Medium, ArmorType::Heavy, ArmorType::Shield]
            .into_iter()
            .find(|armor_type| armor_type.name().eq_ignore_ascii_case(name))
    }

    /// Returns true for categories worn in the body armor slot.
    pub fn is_body_armor(&self) -> bool {
        !matches!(self, ArmorType::Shield)
    }
}

impl fmt::Display for ArmorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Armor with D&D 5e properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmorItem {
    pub base: Item,
    pub armor_type: ArmorType,
    pub base_ac: u8,
    /// Cap on the Dexterity bonus. `None` means uncapped.
    pub max_dex_bonus: Option<u8>,
    pub strength_requirement: Option<u8>,
    pub stealth_disadvantage: bool,
}

impl ArmorItem {
    pub fn new(name: impl Into<String>, armor_type: ArmorType, base_ac: u8) -> Self {
        let item_type = match armor_type {
            ArmorType::Shield => ItemType::Shield,
            _ => ItemType::Armor,
        };
        Self {
            base: Item::new(name, item_type),
            armor_type,
            base_ac,
            max_dex_bonus: None,
            strength_requirement: None,
            stealth_disadvantage: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.base.weight = weight;
        self
    }

    pub fn with_value(mut self, value_gp: f32) -> Self {
        self.base.value_gp = value_gp;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.base.description = Some(description.into());
        self
    }

    pub fn with_max_dex_bonus(mut self, cap: u8) -> Self {
        self.max_dex_bonus = Some(cap);
        self
    }

    pub fn with_strength_requirement(mut self, str_req: u8) -> Self {
        self.strength_requirement = Some(str_req);
        self
    }

    pub fn with_stealth_disadvantage(mut self) -> Self {
        self.stealth_disadvantage = true;
        self
    }

    pub fn magical(mut self) -> Self {
        self.base.magical = true;
        self
    }

    pub fn is_shield(&self) -> bool {
        self.armor_type == ArmorType::Shield
    }
}

/// Armor class from the currently equipped armor.
///
/// Unarmored is 10 + DEX. Body armor replaces the base; Light adds full DEX,
/// Medium adds DEX up to its cap (2 when unspecified), Heavy adds none.
/// A shield adds 2.
pub fn calculate_armor_class(equipped_armor: &[ArmorItem], dexterity: u8) -> u8 {
    let dex_mod = i16::from(ability_modifier(dexterity));

    let body = equipped_armor.iter().find(|a| a.armor_type.is_body_armor());
    let mut ac: i16 = match body {
        None => 10 + dex_mod,
        Some(armor) => {
            let dex_bonus = match armor.armor_type {
                ArmorType::Light => match armor.max_dex_bonus {
                    Some(cap) => dex_mod.min(i16::from(cap)),
                    None => dex_mod,
                },
                ArmorType::Medium => dex_mod.min(i16::from(armor.max_dex_bonus.unwrap_or(2))),
                ArmorType::Heavy | ArmorType::Shield => 0,
            };
            i16::from(armor.base_ac) + dex_bonus
        }
    };

    if equipped_armor.iter().any(|a| a.is_shield()) {
        ac += 2;
    }

    ac.clamp(0, i16::from(u8::MAX)) as u8
}

// ============================================================================
// Weapons
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    Simple,
    Martial,
}

impl WeaponCategory {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponCategory::Simple => "Simple",
            WeaponCategory::Martial => "Martial",
        }
    }
}

impl fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackCategory {
    Melee,
    Ranged,
}

/// Weapon damage type (separate from spell/effect damage types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponDamageType {
    Slashing,
    Piercing,
    Bludgeoning,
}

impl WeaponDamageType {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponDamageType::Slashing => "slashing",
            WeaponDamageType::Piercing => "piercing",
            WeaponDamageType::Bludgeoning => "bludgeoning",
        }
    }
}

/// Weapon properties per D&D 5e.
///
/// Tags carry no payload; range and versatile dice live on the weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponProperty {
    Finesse,
    Light,
    Heavy,
    TwoHanded,
    Versatile,
    Thrown,
    Ammunition,
    Loading,
    Reach,
    Special,
}

impl WeaponProperty {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponProperty::Finesse => "Finesse",
            WeaponProperty::Light => "Light",
            WeaponProperty::Heavy => "Heavy",
            WeaponProperty::TwoHanded => "Two-Handed",
            WeaponProperty::Versatile => "Versatile",
            WeaponProperty::Thrown => "Thrown",
            WeaponProperty::Ammunition => "Ammunition",
            WeaponProperty::Loading => "Loading",
            WeaponProperty::Reach => "Reach",
            WeaponProperty::Special => "Special",
        }
    }

    fn from_tag_name(tag: &str) -> Option<Self> {
        let key: String = tag
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "finesse" => Some(WeaponProperty::Finesse),
            "light" => Some(WeaponProperty::Light),
            "heavy" => Some(WeaponProperty::Heavy),
            "twohanded" => Some(WeaponProperty::TwoHanded),
            "versatile" => Some(WeaponProperty::Versatile),
            "thrown" => Some(WeaponProperty::Thrown),
            "ammunition" => Some(WeaponProperty::Ammunition),
            "loading" => Some(WeaponProperty::Loading),
            "reach" => Some(WeaponProperty::Reach),
            "special" => Some(WeaponProperty::Special),
            _ => None,
        }
    }
}

impl fmt::Display for WeaponProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Normal and long range in feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponRange {
    pub normal: u32,
    pub long: u32,
}

/// Weapons with D&D 5e properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponItem {
    pub base: Item,
    pub category: WeaponCategory,
    pub attack: AttackCategory,
    pub damage_dice: String,
    pub damage_type: WeaponDamageType,
    pub properties: BTreeSet<WeaponProperty>,
    pub range: Option<WeaponRange>,
    pub versatile_damage: Option<String>,
    pub stackable: bool,
}

impl WeaponItem {
    /// A simple melee weapon; use the builders to change category and range.
    pub fn new(
        name: impl Into<String>,
        damage_dice: impl Into<String>,
        damage_type: WeaponDamageType,
    ) -> Self {
        Self {
            base: Item::new(name, ItemType::Weapon),
            category: WeaponCategory::Simple,
            attack: AttackCategory::Melee,
            damage_dice: damage_dice.into(),
            damage_type,
            properties: BTreeSet::new(),
            range: None,
            versatile_damage: None,
            stackable: false,
        }
    }

    pub fn martial(mut self) -> Self {
        self.category = WeaponCategory::Martial;
        self
    }

    pub fn ranged(mut self) -> Self {
        self.attack = AttackCategory::Ranged;
        self
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.base.weight = weight;
        self
    }

    pub fn with_value(mut self, value_gp: f32) -> Self {
        self.base.value_gp = value_gp;
        self
    }

    pub fn with_properties(mut self, properties: impl IntoIterator<Item = WeaponProperty>) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn with_range(mut self, normal: u32, long: u32) -> Self {
        self.range = Some(WeaponRange { normal, long });
        self
    }

    pub fn with_versatile(mut self, dice: impl Into<String>) -> Self {
        self.properties.insert(WeaponProperty::Versatile);
        self.versatile_damage = Some(dice.into());
        self
    }

    /// Mark the weapon as stackable (darts, needles) with a starting quantity.
    pub fn stackable(mut self, quantity: u32) -> Self {
        self.stackable = true;
        self.base.quantity = quantity;
        self
    }

    pub fn magical(mut self) -> Self {
        self.base.magical = true;
        self
    }

    /// Apply property tags in their stored string form.
    ///
    /// Accepts the forms `"Light"`, `"Two-Handed"`, `"Versatile (1d8)"`,
    /// `"Ammunition (range 80/320)"` and `"Thrown (range 20/60)"`.
    pub fn with_property_tags<S: AsRef<str>>(mut self, tags: &[S]) -> Result<Self, ItemError> {
        for raw in tags {
            let raw = raw.as_ref().trim();
            let (tag, detail) = match raw.find('(') {
                Some(open) => {
                    let detail = raw[open + 1..].trim_end().trim_end_matches(')').trim();
                    (raw[..open].trim(), Some(detail))
                }
                None => (raw, None),
            };

            let property = WeaponProperty::from_tag_name(tag)
                .ok_or_else(|| ItemError::UnknownProperty(raw.to_string()))?;

            match (property, detail) {
                (WeaponProperty::Versatile, Some(dice)) if !dice.is_empty() => {
                    self.versatile_damage = Some(dice.to_string());
                }
                (WeaponProperty::Ammunition | WeaponProperty::Thrown, Some(detail)) => {
                    self.range = Some(parse_range(raw, detail)?);
                }
                _ => {}
            }
            self.properties.insert(property);
        }
        Ok(self)
    }

    pub fn has_property(&self, property: WeaponProperty) -> bool {
        self.properties.contains(&property)
    }

    pub fn is_finesse(&self) -> bool {
        self.has_property(WeaponProperty::Finesse)
    }

    pub fn versatile_damage(&self) -> Option<&str> {
        self.versatile_damage.as_deref()
    }
}

fn parse_range(raw: &str, detail: &str) -> Result<WeaponRange, ItemError> {
    let invalid = || ItemError::InvalidRange(raw.to_string());
    let bounds = detail
        .strip_prefix("range")
        .map(str::trim)
        .ok_or_else(invalid)?;
    let (normal, long) = bounds.split_once('/').ok_or_else(invalid)?;
    let normal = normal.trim().parse().map_err(|_| invalid())?;
    let long = long.trim().parse().map_err(|_| invalid())?;
    Ok(WeaponRange { normal, long })
}

/// What the rules engine needs to know about anything held in a hand.
pub trait Wieldable {
    /// Name used for proficiency lookups and in conflict messages.
    fn name(&self) -> &str;

    fn weapon_category(&self) -> WeaponCategory;

    fn properties(&self) -> &BTreeSet<WeaponProperty>;

    fn is_two_handed(&self) -> bool {
        self.properties().contains(&WeaponProperty::TwoHanded)
    }

    fn is_light(&self) -> bool {
        self.properties().contains(&WeaponProperty::Light)
    }

    /// Ammunition and thrown weapons: only one can be readied at a time.
    fn is_ranged_exclusive(&self) -> bool {
        let props = self.properties();
        props.contains(&WeaponProperty::Ammunition) || props.contains(&WeaponProperty::Thrown)
    }
}

impl Wieldable for WeaponItem {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn weapon_category(&self) -> WeaponCategory {
        self.category
    }

    fn properties(&self) -> &BTreeSet<WeaponProperty> {
        &self.properties
    }
}

// ============================================================================
// Magical Weapons
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
    Artifact,
}

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::VeryRare => "Very Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Artifact => "Artifact",
        }
    }
}

/// A magic enhancement that can be applied to any base weapon.
#[derive(Debug, Clone)]
pub struct MagicalTemplate {
    pub name: &'static str,
    pub attack_bonus: i8,
    pub damage_bonus: i8,
    pub rarity: Rarity,
    pub description: &'static str,
}

/// A weapon with magical bonuses.
///
/// Rules checks look only at the base weapon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagicalWeapon {
    pub weapon: WeaponItem,
    pub base_name: String,
    pub magical_name: String,
    pub attack_bonus: i8,
    pub damage_bonus: i8,
    pub rarity: Rarity,
    pub magical_properties: Option<String>,
}

impl MagicalWeapon {
    /// Enchant a base weapon. The display name defaults to "{template} {weapon}".
    pub fn from_template(
        base: &WeaponItem,
        template: &MagicalTemplate,
        custom_name: Option<&str>,
    ) -> Self {
        let base_name = base.base.name.clone();
        let magical_name = match custom_name {
            Some(name) => name.to_string(),
            None => format!("{} {}", template.name, base_name),
        };
        Self {
            weapon: base.clone().magical(),
            base_name,
            magical_name,
            attack_bonus: template.attack_bonus,
            damage_bonus: template.damage_bonus,
            rarity: template.rarity,
            magical_properties: Some(template.description.to_string()),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.magical_name
    }
}

impl Wieldable for MagicalWeapon {
    fn name(&self) -> &str {
        self.weapon.name()
    }

    fn weapon_category(&self) -> WeaponCategory {
        self.weapon.category
    }

    fn properties(&self) -> &BTreeSet<WeaponProperty> {
        &self.weapon.properties
    }
}

/// Either kind of weapon, for equipped lists that mix the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Weapon {
    Standard(WeaponItem),
    Magical(MagicalWeapon),
}

impl Wieldable for Weapon {
    fn name(&self) -> &str {
        match self {
            Weapon::Standard(w) => w.name(),
            Weapon::Magical(w) => w.name(),
        }
    }

    fn weapon_category(&self) -> WeaponCategory {
        match self {
            Weapon::Standard(w) => w.weapon_category(),
            Weapon::Magical(w) => w.weapon_category(),
        }
    }

    fn properties(&self) -> &BTreeSet<WeaponProperty> {
        match self {
            Weapon::Standard(w) => w.properties(),
            Weapon::Magical(w) => w.properties(),
        }
    }
}

impl From<WeaponItem> for Weapon {
    fn from(weapon: WeaponItem) -> Self {
        Weapon::Standard(weapon)
    }
}

impl From<MagicalWeapon> for Weapon {
    fn from(weapon: MagicalWeapon) -> Self {
        Weapon::Magical(weapon)
    }
}

// ============================================================================
// Ammunition
// ============================================================================

/// A stack of ammunition, kept apart from the weapons that fire it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ammunition {
    pub name: String,
    pub quantity: u32,
    pub compatible_weapons: Vec<String>,
    /// Weight of a single piece.
    pub weight: f32,
    /// Value of a single piece.
    pub value_gp: f32,
}

impl Ammunition {
    pub fn fits<W: Wieldable + ?Sized>(&self, weapon: &W) -> bool {
        self.compatible_weapons.iter().any(|w| w == weapon.name())
    }

    pub fn total_weight(&self) -> f32 {
        self.weight * self.quantity as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_modifier() {
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(15), 2);
        assert_eq!(ability_modifier(20), 5);
    }

    #[test]
    fn test_property_tags_parse() {
        let longbow = WeaponItem::new("Longbow", "1d8", WeaponDamageType::Piercing)
            .with_property_tags(&["Ammunition (range 150/600)", "Heavy", "Two-Handed"])
            .unwrap();
        assert!(longbow.is_two_handed());
        assert!(longbow.is_ranged_exclusive());
        assert_eq!(longbow.range, Some(WeaponRange { normal: 150, long: 600 }));

        let spear = WeaponItem::new("Spear", "1d6", WeaponDamageType::Piercing)
            .with_property_tags(&["Thrown (range 20/60)", "Versatile (1d8)"])
            .unwrap();
        assert_eq!(spear.versatile_damage(), Some("1d8"));
        assert!(spear.has_property(WeaponProperty::Versatile));
        assert!(!spear.is_two_handed());
    }

    #[test]
    fn test_property_tags_case_insensitive() {
        let maul = WeaponItem::new("Maul", "2d6", WeaponDamageType::Bludgeoning)
            .with_property_tags(&["two-handed", "HEAVY"])
            .unwrap();
        assert!(maul.is_two_handed());
        assert!(maul.has_property(WeaponProperty::Heavy));
    }

    #[test]
    fn test_property_tags_reject_unknown() {
        let err = WeaponItem::new("Stick", "1d4", WeaponDamageType::Bludgeoning)
            .with_property_tags(&["Pointy"])
            .unwrap_err();
        assert_eq!(err, ItemError::UnknownProperty("Pointy".to_string()));

        let err = WeaponItem::new("Sling", "1d4", WeaponDamageType::Bludgeoning)
            .with_property_tags(&["Ammunition (range thirty)"])
            .unwrap_err();
        assert!(matches!(err, ItemError::InvalidRange(_)));
    }

    #[test]
    fn test_magical_weapon_keeps_base_identity() {
        let longsword = WeaponItem::new("Longsword", "1d8", WeaponDamageType::Slashing)
            .martial()
            .with_versatile("1d10");
        let template = MagicalTemplate {
            name: "+1 Weapon",
            attack_bonus: 1,
            damage_bonus: 1,
            rarity: Rarity::Uncommon,
            description: "A +1 magical weapon.",
        };

        let magic = MagicalWeapon::from_template(&longsword, &template, None);
        assert_eq!(magic.name(), "Longsword");
        assert_eq!(magic.display_name(), "+1 Weapon Longsword");
        assert_eq!(magic.weapon_category(), WeaponCategory::Martial);
        assert!(magic.weapon.base.magical);

        let named = MagicalWeapon::from_template(&longsword, &template, Some("Dawnbreaker"));
        assert_eq!(named.display_name(), "Dawnbreaker");
    }

    #[test]
    fn test_item_kinds_and_name_lookup() {
        let shield = ArmorItem::new("Shield", ArmorType::Shield, 2);
        let chain = ArmorItem::new("Chain Mail", ArmorType::Heavy, 16);
        let club = WeaponItem::new("Club", "1d4", WeaponDamageType::Bludgeoning);
        assert_eq!(shield.base.item_type, ItemType::Shield);
        assert_eq!(chain.base.item_type, ItemType::Armor);
        assert_eq!(club.base.item_type, ItemType::Weapon);

        assert_eq!(ArmorType::from_name(" shield "), Some(ArmorType::Shield));
        assert_eq!(ArmorType::from_name("Shields"), None);
        assert_eq!(Ability::from_name("wis"), Some(Ability::Wisdom));
        assert_eq!(Ability::from_name("Charisma"), Some(Ability::Charisma));
        assert_eq!(Ability::from_name("Luck"), None);
    }

    #[test]
    fn test_armor_class_unarmored() {
        assert_eq!(calculate_armor_class(&[], 14), 12);
        assert_eq!(calculate_armor_class(&[], 8), 9);
    }

    #[test]
    fn test_armor_class_with_armor() {
        let leather = ArmorItem::new("Leather Armor", ArmorType::Light, 11);
        let breastplate =
            ArmorItem::new("Breastplate", ArmorType::Medium, 14).with_max_dex_bonus(2);
        let plate = ArmorItem::new("Plate Armor", ArmorType::Heavy, 18);
        let shield = ArmorItem::new("Shield", ArmorType::Shield, 2);

        assert_eq!(calculate_armor_class(&[leather], 18), 15);
        assert_eq!(calculate_armor_class(&[breastplate], 18), 16);
        assert_eq!(calculate_armor_class(&[plate.clone()], 18), 18);
        assert_eq!(calculate_armor_class(&[plate, shield.clone()], 8), 20);
        assert_eq!(calculate_armor_class(&[shield], 10), 12);
    }

    #[test]
    fn test_armor_class_extreme_scores() {
        assert_eq!(calculate_armor_class(&[], 255), 132);
        assert_eq!(calculate_armor_class(&[], 1), 5);

        let leather = ArmorItem::new("Leather Armor", ArmorType::Light, 11);
        assert_eq!(calculate_armor_class(&[leather], 255), 133);

        // Base AC above i8 range, saturating at u8::MAX
        let fortress = ArmorItem::new("Fortress Plate", ArmorType::Heavy, 200);
        let bulwark = ArmorItem::new("Bulwark", ArmorType::Heavy, 254);
        let shield = ArmorItem::new("Shield", ArmorType::Shield, 2);
        assert_eq!(calculate_armor_class(&[fortress], 10), 200);
        assert_eq!(calculate_armor_class(&[bulwark, shield], 10), 255);
    }

    #[test]
    fn test_ammunition_fits() {
        let arrows = Ammunition {
            name: "Arrow".to_string(),
            quantity: 20,
            compatible_weapons: vec!["Longbow".to_string(), "Shortbow".to_string()],
            weight: 0.05,
            value_gp: 0.05,
        };
        let longbow = WeaponItem::new("Longbow", "1d8", WeaponDamageType::Piercing);
        let sling = WeaponItem::new("Sling", "1d4", WeaponDamageType::Bludgeoning);
        assert!(arrows.fits(&longbow));
        assert!(!arrows.fits(&sling));
        assert!((arrows.total_weight() - 1.0).abs() < 1e-4);
    }
}
