//! D&D 5e equipment rules engine.
//!
//! This crate provides:
//! - Weapon, armor and ammunition reference types with a standard PHB catalog
//! - Class proficiency lookups behind an async provider, cached per engine
//! - Equip/add validation: hands, shields, armor slots, ranged weapons,
//!   Strength requirements and proficiency
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use dnd_rules::{items, CharacterContext, EquipmentRulesEngine, StaticProficiencyProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     let character = CharacterContext::new("Fighter", 3, 16, 12);
//!     let engine = EquipmentRulesEngine::new(character, Arc::new(StaticProficiencyProvider));
//!
//!     let greatsword = items::get_weapon("Greatsword").unwrap();
//!     let shield = items::get_armor("Shield").unwrap();
//!     let no_weapons: Vec<dnd_rules::WeaponItem> = Vec::new();
//!
//!     let result = engine
//!         .validate_weapon_equip(&greatsword, &no_weapons, &[shield], true)
//!         .await;
//!     assert!(!result.can_equip);
//! }
//! ```

pub mod class_data;
pub mod items;
pub mod proficiency;
pub mod rules;
pub mod testing;
pub mod world;

// Primary public API
pub use class_data::CharacterClass;
pub use proficiency::{
    ClassProficiencies, HttpProficiencyProvider, HttpProviderConfig, ProficiencyCache,
    ProficiencyError, ProficiencyProvider, StaticProficiencyProvider, WeaponProficiencies,
};
pub use rules::{
    ConflictKind, ConflictSummary, EquipmentConflict, EquipmentRulesEngine,
    EquipmentValidationResult, ProficiencyCheck, Severity,
};
pub use world::{
    Ammunition, ArmorItem, ArmorType, CharacterContext, ItemError, MagicalWeapon, Weapon,
    WeaponCategory, WeaponItem, WeaponProperty, Wieldable,
};
