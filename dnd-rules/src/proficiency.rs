//! Class proficiency lookups.
//!
//! The rules engine asks a [`ProficiencyProvider`] what a class may wear and
//! wield. Answers are static game data, so each engine keeps them in a
//! [`ProficiencyCache`] for its whole lifetime.

use crate::class_data::CharacterClass;
use crate::world::{Ability, ArmorType, WeaponCategory, Wieldable};
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors from a proficiency lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProficiencyError {
    #[error("Class proficiencies not found for {0}")]
    ClassNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Proficiency service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse proficiencies: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Weapon training granted by a class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponProficiencies {
    #[serde(deserialize_with = "null_as_default")]
    pub simple: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub martial: bool,
    /// Exact weapon names granted individually.
    #[serde(deserialize_with = "null_as_default")]
    pub specific: BTreeSet<String>,
}

impl WeaponProficiencies {
    /// Returns true if the weapon's category or its exact name is covered.
    pub fn covers<W: Wieldable + ?Sized>(&self, weapon: &W) -> bool {
        match weapon.weapon_category() {
            WeaponCategory::Simple if self.simple => return true,
            WeaponCategory::Martial if self.martial => return true,
            _ => {}
        }
        self.specific.contains(weapon.name())
    }
}

/// Everything a class is trained in.
///
/// Missing or `null` fields deserialize as empty and unknown category names
/// are dropped, so a partial response from the service means "not
/// proficient" for that field only rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassProficiencies {
    #[serde(deserialize_with = "armor_categories")]
    pub armor: BTreeSet<ArmorType>,
    #[serde(deserialize_with = "null_as_default")]
    pub weapons: WeaponProficiencies,
    #[serde(deserialize_with = "saving_throw_names")]
    pub saving_throws: BTreeSet<Ability>,
}

impl ClassProficiencies {
    pub fn can_wear(&self, armor_type: ArmorType) -> bool {
        self.armor.contains(&armor_type)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn known_names<'de, D, T>(
    deserializer: D,
    field: &'static str,
    lookup: fn(&str) -> Option<T>,
) -> Result<BTreeSet<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Ord,
{
    let names: Vec<Option<String>> = null_as_default(deserializer)?;
    Ok(names
        .into_iter()
        .flatten()
        .filter_map(|name| {
            let parsed = lookup(&name);
            if parsed.is_none() {
                debug!(field, name = %name, "Skipping unknown proficiency entry");
            }
            parsed
        })
        .collect())
}

fn armor_categories<'de, D>(deserializer: D) -> Result<BTreeSet<ArmorType>, D::Error>
where
    D: Deserializer<'de>,
{
    known_names(deserializer, "armor", ArmorType::from_name)
}

fn saving_throw_names<'de, D>(deserializer: D) -> Result<BTreeSet<Ability>, D::Error>
where
    D: Deserializer<'de>,
{
    known_names(deserializer, "savingThrows", Ability::from_name)
}

/// Source of class proficiency data.
///
/// Implementations must be idempotent per class: the engine caches the first
/// successful answer indefinitely.
#[async_trait]
pub trait ProficiencyProvider: Send + Sync {
    async fn class_proficiencies(
        &self,
        class_name: &str,
    ) -> Result<ClassProficiencies, ProficiencyError>;
}

/// Provider backed by the built-in PHB class table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProficiencyProvider;

#[async_trait]
impl ProficiencyProvider for StaticProficiencyProvider {
    async fn class_proficiencies(
        &self,
        class_name: &str,
    ) -> Result<ClassProficiencies, ProficiencyError> {
        class_name
            .parse::<CharacterClass>()
            .map(|class| class.proficiencies())
            .map_err(|_| ProficiencyError::ClassNotFound(class_name.to_string()))
    }
}

// ============================================================================
// HTTP Provider
// ============================================================================

/// Configuration for [`HttpProficiencyProvider`].
#[derive(Debug, Clone)]
pub struct HttpProviderConfig {
    /// Base URL of the character service, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `DND_PROFICIENCY_URL` and the optional `DND_PROFICIENCY_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ProficiencyError> {
        let base_url = std::env::var("DND_PROFICIENCY_URL")
            .map_err(|_| ProficiencyError::Config("DND_PROFICIENCY_URL not set".to_string()))?;
        let mut config = Self::new(base_url);

        if let Ok(secs) = std::env::var("DND_PROFICIENCY_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                ProficiencyError::Config(format!("DND_PROFICIENCY_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Full URL of the class proficiency endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/api/class-proficiencies", self.base_url)
    }
}

/// Provider that queries the character service's class proficiency endpoint.
#[derive(Clone)]
pub struct HttpProficiencyProvider {
    client: reqwest::Client,
    config: HttpProviderConfig,
}

impl HttpProficiencyProvider {
    pub fn new(config: HttpProviderConfig) -> Result<Self, ProficiencyError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProficiencyError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Use a preconfigured client. The config timeout is not applied to it.
    pub fn with_client(client: reqwest::Client, config: HttpProviderConfig) -> Self {
        Self { client, config }
    }

    pub fn from_env() -> Result<Self, ProficiencyError> {
        Self::new(HttpProviderConfig::from_env()?)
    }

    pub fn config(&self) -> &HttpProviderConfig {
        &self.config
    }
}

#[async_trait]
impl ProficiencyProvider for HttpProficiencyProvider {
    async fn class_proficiencies(
        &self,
        class_name: &str,
    ) -> Result<ClassProficiencies, ProficiencyError> {
        let response = self
            .client
            .get(self.config.endpoint())
            .query(&[("className", class_name), ("includeArmor", "true")])
            .send()
            .await
            .map_err(|e| ProficiencyError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ProficiencyError::ClassNotFound(class_name.to_string()));
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProficiencyError::Api { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProficiencyError::Network(e.to_string()))?;
        parse_proficiencies(&body)
    }
}

/// Decode a proficiency response body. Absent fields default to empty.
pub fn parse_proficiencies(body: &str) -> Result<ClassProficiencies, ProficiencyError> {
    serde_json::from_str(body).map_err(|e| ProficiencyError::Parse(e.to_string()))
}

// ============================================================================
// Cache
// ============================================================================

type CacheSlot = Arc<OnceCell<Arc<ClassProficiencies>>>;

/// Per-class proficiency cache with single-flight fills.
///
/// Concurrent lookups for the same class share one provider call. Failed
/// lookups leave the slot empty so the next caller retries. Cloning shares
/// the underlying cache.
#[derive(Debug, Clone, Default)]
pub struct ProficiencyCache {
    slots: Arc<Mutex<HashMap<String, CacheSlot>>>,
}

impl ProficiencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, class_name: &str) -> CacheSlot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.entry(class_name.to_string()).or_default().clone()
    }

    /// Cached proficiencies for a class, fetching them on first use.
    pub async fn get_or_fetch(
        &self,
        class_name: &str,
        provider: &dyn ProficiencyProvider,
    ) -> Result<Arc<ClassProficiencies>, ProficiencyError> {
        let slot = self.slot(class_name);
        if let Some(cached) = slot.get() {
            return Ok(Arc::clone(cached));
        }

        let profs = slot
            .get_or_try_init(|| async {
                debug!(class = class_name, "Fetching class proficiencies");
                provider.class_proficiencies(class_name).await.map(Arc::new)
            })
            .await?;
        Ok(Arc::clone(profs))
    }

    /// Cached proficiencies, without fetching.
    pub fn get(&self, class_name: &str) -> Option<Arc<ClassProficiencies>> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(class_name).and_then(|slot| slot.get().cloned())
    }

    /// Number of classes with a cached answer.
    pub fn len(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.values().filter(|slot| slot.initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::get_weapon;
    use crate::testing::MockProficiencyProvider;

    #[test]
    fn test_weapon_proficiency_rules() {
        let wizard = CharacterClass::Wizard.proficiencies().weapons;
        assert!(wizard.covers(&get_weapon("Dagger").unwrap()));
        assert!(!wizard.covers(&get_weapon("Longsword").unwrap()));
        // Wizards have no simple-weapon group proficiency
        assert!(!wizard.covers(&get_weapon("Mace").unwrap()));

        let rogue = CharacterClass::Rogue.proficiencies().weapons;
        assert!(rogue.covers(&get_weapon("Rapier").unwrap()));
        assert!(rogue.covers(&get_weapon("Club").unwrap()));
        assert!(!rogue.covers(&get_weapon("Greatsword").unwrap()));
    }

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "armor": ["Light", "Medium", "Shield"],
            "weapons": {"simple": true, "martial": false, "specific": ["Scimitar"]},
            "savingThrows": ["Intelligence", "Wisdom"]
        }"#;
        let profs = parse_proficiencies(body).unwrap();
        assert!(profs.can_wear(ArmorType::Shield));
        assert!(!profs.can_wear(ArmorType::Heavy));
        assert!(profs.weapons.specific.contains("Scimitar"));
        assert!(profs.saving_throws.contains(&Ability::Wisdom));
    }

    #[test]
    fn test_parse_partial_response_defaults() {
        let profs = parse_proficiencies(r#"{"weapons": {"simple": true}}"#).unwrap();
        assert!(profs.armor.is_empty());
        assert!(profs.weapons.simple);
        assert!(!profs.weapons.martial);
        assert!(profs.saving_throws.is_empty());

        assert!(matches!(
            parse_proficiencies("not json"),
            Err(ProficiencyError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_null_fields_default() {
        let body = r#"{"armor": null, "weapons": {"simple": null, "martial": true, "specific": null}, "savingThrows": null}"#;
        let profs = parse_proficiencies(body).unwrap();
        assert!(profs.armor.is_empty());
        assert!(!profs.weapons.simple);
        assert!(profs.weapons.martial);
        assert!(profs.weapons.specific.is_empty());
        assert!(profs.saving_throws.is_empty());

        let profs = parse_proficiencies(r#"{"weapons": null}"#).unwrap();
        assert_eq!(profs.weapons, WeaponProficiencies::default());
    }

    #[test]
    fn test_parse_skips_unknown_names() {
        let body = r#"{
            "armor": ["light", "Shields", "Heavy"],
            "weapons": {"simple": true, "martial": true},
            "savingThrows": ["STR", "Luck"]
        }"#;
        let profs = parse_proficiencies(body).unwrap();
        assert_eq!(
            profs.armor,
            BTreeSet::from([ArmorType::Light, ArmorType::Heavy])
        );
        assert!(profs.weapons.simple && profs.weapons.martial);
        assert_eq!(profs.saving_throws, BTreeSet::from([Ability::Strength]));
    }

    #[test]
    fn test_http_config() {
        let config = HttpProviderConfig::new("http://localhost:3000/")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.endpoint(), "http://localhost:3000/api/class-proficiencies");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_static_provider() {
        let provider = StaticProficiencyProvider;
        let fighter = provider.class_proficiencies("Fighter").await.unwrap();
        assert!(fighter.can_wear(ArmorType::Heavy));

        let err = provider.class_proficiencies("Artificer").await.unwrap_err();
        assert_eq!(err, ProficiencyError::ClassNotFound("Artificer".to_string()));
    }

    #[tokio::test]
    async fn test_cache_fetches_once() {
        let provider = MockProficiencyProvider::new()
            .with_class("Fighter", CharacterClass::Fighter.proficiencies());
        let cache = ProficiencyCache::new();

        let first = cache.get_or_fetch("Fighter", &provider).await.unwrap();
        let second = cache.get_or_fetch("Fighter", &provider).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(provider.call_count(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("Fighter").is_some());
    }

    #[tokio::test]
    async fn test_cache_concurrent_single_flight() {
        let provider = MockProficiencyProvider::new()
            .with_class("Ranger", CharacterClass::Ranger.proficiencies());
        let cache = ProficiencyCache::new();

        let lookups = (0..8).map(|_| cache.get_or_fetch("Ranger", &provider));
        let results = futures::future::join_all(lookups).await;

        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_cache_does_not_keep_failures() {
        let provider = MockProficiencyProvider::failing("connection refused");
        let cache = ProficiencyCache::new();

        assert!(cache.get_or_fetch("Bard", &provider).await.is_err());
        assert!(cache.get_or_fetch("Bard", &provider).await.is_err());

        assert_eq!(provider.call_count(), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_cache_clones_share_entries() {
        let provider = StaticProficiencyProvider;
        let cache = ProficiencyCache::new();
        let shared = cache.clone();

        cache.get_or_fetch("Cleric", &provider).await.unwrap();
        assert!(shared.get("Cleric").is_some());
    }
}
