//! Testing utilities for the equipment rules.
//!
//! This module provides tools for tests:
//! - `MockProficiencyProvider` for deterministic lookups without a service
//! - Fixture helpers for building engines and equipment lists

use crate::class_data::CharacterClass;
use crate::items::{get_armor, get_weapon};
use crate::proficiency::{ClassProficiencies, ProficiencyError, ProficiencyProvider};
use crate::rules::EquipmentRulesEngine;
use crate::world::{ArmorItem, CharacterContext, WeaponItem};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A proficiency provider with scripted answers.
///
/// Counts every call so tests can check caching behavior.
#[derive(Debug, Default)]
pub struct MockProficiencyProvider {
    classes: HashMap<String, ClassProficiencies>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockProficiencyProvider {
    /// A provider that knows no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that knows every PHB class.
    pub fn phb() -> Self {
        CharacterClass::all()
            .iter()
            .fold(Self::new(), |mock, class| {
                mock.with_class(class.name(), class.proficiencies())
            })
    }

    /// A provider whose every lookup fails with a network error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Add a scripted answer for a class.
    pub fn with_class(mut self, class_name: impl Into<String>, profs: ClassProficiencies) -> Self {
        self.classes.insert(class_name.into(), profs);
        self
    }

    /// Number of lookups made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProficiencyProvider for MockProficiencyProvider {
    async fn class_proficiencies(
        &self,
        class_name: &str,
    ) -> Result<ClassProficiencies, ProficiencyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(ProficiencyError::Network(message.clone()));
        }
        self.classes
            .get(class_name)
            .cloned()
            .ok_or_else(|| ProficiencyError::ClassNotFound(class_name.to_string()))
    }
}

/// Engine for a level 1 character of the given class backed by a PHB mock.
pub fn engine_for(class_name: &str, strength: u8) -> (EquipmentRulesEngine, Arc<MockProficiencyProvider>) {
    let provider = Arc::new(MockProficiencyProvider::phb());
    let character = CharacterContext::new(class_name, 1, strength, 10);
    let engine = EquipmentRulesEngine::new(character, provider.clone());
    (engine, provider)
}

/// Look up standard weapons by name, skipping unknown names.
pub fn weapons(names: &[&str]) -> Vec<WeaponItem> {
    names.iter().filter_map(|name| get_weapon(name)).collect()
}

/// Look up standard armor by name, skipping unknown names.
pub fn armor(names: &[&str]) -> Vec<ArmorItem> {
    names.iter().filter_map(|name| get_armor(name)).collect()
}
