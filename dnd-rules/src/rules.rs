//! D&D 5e equipment rules engine.
//!
//! Validates whether a character can add a weapon or armor piece to their
//! inventory or equip it alongside what they already hold:
//! 1. Proficiency is resolved through the class proficiency lookup
//! 2. Hand, shield and ranged-weapon limits are checked for weapons
//! 3. Strength requirements and armor slots are checked for armor
//! 4. Findings come back as data, split into blocking errors and warnings
//!
//! Inventory is never constrained: only equipping can be blocked.

use crate::proficiency::{ClassProficiencies, ProficiencyCache, ProficiencyError, ProficiencyProvider};
use crate::world::{ArmorItem, ArmorType, CharacterContext, Wieldable};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// The rule family a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Proficiency,
    Wielding,
    Slot,
    Requirement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single rules finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentConflict {
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicting_items: Vec<String>,
}

impl EquipmentConflict {
    pub fn error(kind: ConflictKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: message.into(),
            conflicting_items: Vec::new(),
        }
    }

    pub fn warning(kind: ConflictKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            message: message.into(),
            conflicting_items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<String>) -> Self {
        self.conflicting_items = items;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns true if the finding names this item.
    pub fn involves(&self, name: &str) -> bool {
        self.conflicting_items.iter().any(|item| item == name)
    }
}

/// Findings from one rule check, routed by severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub errors: Vec<EquipmentConflict>,
    pub warnings: Vec<EquipmentConflict>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, conflict: EquipmentConflict) {
        if conflict.is_error() {
            self.errors.push(conflict);
        } else {
            self.warnings.push(conflict);
        }
    }

    pub fn extend(&mut self, other: Findings) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Outcome of validating one candidate item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentValidationResult {
    /// True iff `conflicts` holds no errors.
    pub can_equip: bool,
    /// Always true: possession is never blocked.
    pub can_add: bool,
    pub conflicts: Vec<EquipmentConflict>,
    pub warnings: Vec<EquipmentConflict>,
}

impl From<Findings> for EquipmentValidationResult {
    fn from(findings: Findings) -> Self {
        Self {
            can_equip: !findings.errors.iter().any(EquipmentConflict::is_error),
            can_add: true,
            conflicts: findings.errors,
            warnings: findings.warnings,
        }
    }
}

impl EquipmentValidationResult {
    /// Every finding, errors first.
    pub fn all(&self) -> impl Iterator<Item = &EquipmentConflict> {
        self.conflicts.iter().chain(self.warnings.iter())
    }

    pub fn of_kind(&self, kind: ConflictKind) -> impl Iterator<Item = &EquipmentConflict> {
        self.all().filter(move |c| c.kind == kind)
    }
}

/// Diagnostic over an already-equipped loadout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictSummary {
    pub has_conflicts: bool,
    pub conflict_summary: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ConflictSummary {
    fn add(&mut self, summary: String, suggestion: String) {
        self.conflict_summary.push(summary);
        self.suggestions.push(suggestion);
        self.has_conflicts = true;
    }
}

/// Result of resolving proficiency for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProficiencyCheck {
    Proficient,
    NotProficient { reason: String },
    /// The lookup failed; treated as not proficient.
    Unavailable { reason: String },
}

impl ProficiencyCheck {
    pub fn is_proficient(&self) -> bool {
        matches!(self, ProficiencyCheck::Proficient)
    }
}

/// Equipment rules for one character.
///
/// Holds no state between calls apart from the proficiency cache.
pub struct EquipmentRulesEngine {
    character: CharacterContext,
    provider: Arc<dyn ProficiencyProvider>,
    cache: ProficiencyCache,
}

impl EquipmentRulesEngine {
    /// Create an engine with its own empty proficiency cache.
    pub fn new(character: CharacterContext, provider: Arc<dyn ProficiencyProvider>) -> Self {
        Self {
            character,
            provider,
            cache: ProficiencyCache::new(),
        }
    }

    /// Use a shared cache instead of a private one.
    pub fn with_cache(mut self, cache: ProficiencyCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn character(&self) -> &CharacterContext {
        &self.character
    }

    pub fn cache(&self) -> &ProficiencyCache {
        &self.cache
    }

    async fn class_proficiencies(&self) -> Result<Arc<ClassProficiencies>, ProficiencyError> {
        let class_name = &self.character.class_name;
        self.cache
            .get_or_fetch(class_name, self.provider.as_ref())
            .await
            .inspect_err(|e| {
                warn!(class = %class_name, error = %e, "Proficiency lookup failed, treating as not proficient");
            })
    }

    /// Resolve weapon proficiency. Never fails; lookup errors become `Unavailable`.
    pub async fn check_weapon_proficiency<W: Wieldable + ?Sized>(&self, weapon: &W) -> ProficiencyCheck {
        match self.class_proficiencies().await {
            Ok(profs) if profs.weapons.covers(weapon) => ProficiencyCheck::Proficient,
            Ok(_) => ProficiencyCheck::NotProficient {
                reason: format!(
                    "No proficiency with {} weapons or {}",
                    weapon.weapon_category(),
                    weapon.name()
                ),
            },
            Err(e) => ProficiencyCheck::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    /// Resolve armor proficiency. Never fails; lookup errors become `Unavailable`.
    pub async fn check_armor_proficiency(&self, armor: &ArmorItem) -> ProficiencyCheck {
        match self.class_proficiencies().await {
            Ok(profs) if profs.can_wear(armor.armor_type) => ProficiencyCheck::Proficient,
            Ok(_) => ProficiencyCheck::NotProficient {
                reason: format!("No proficiency with {}", armor_training(armor.armor_type)),
            },
            Err(e) => ProficiencyCheck::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    /// Validate adding (`is_equipping == false`) or equipping a weapon.
    ///
    /// Missing proficiency only ever warns. Hand and ranged-weapon limits
    /// are checked only when equipping.
    pub async fn validate_weapon_equip<W, E>(
        &self,
        candidate: &W,
        current_weapons: &[E],
        current_armor: &[ArmorItem],
        is_equipping: bool,
    ) -> EquipmentValidationResult
    where
        W: Wieldable + ?Sized,
        E: Wieldable,
    {
        let mut findings = Findings::new();
        let name = candidate.name();

        match self.check_weapon_proficiency(candidate).await {
            ProficiencyCheck::Proficient => {}
            ProficiencyCheck::NotProficient { .. } => findings.push(
                EquipmentConflict::warning(
                    ConflictKind::Proficiency,
                    format!("Not proficient with {name}. You won't get proficiency bonus to attacks."),
                )
                .with_items(vec![name.to_string()]),
            ),
            ProficiencyCheck::Unavailable { reason } => findings.push(
                EquipmentConflict::warning(
                    ConflictKind::Proficiency,
                    format!(
                        "Could not verify proficiency with {name} ({reason}). You won't get proficiency bonus to attacks."
                    ),
                )
                .with_items(vec![name.to_string()]),
            ),
        }

        if is_equipping {
            findings.extend(hand_conflicts(candidate, current_weapons, current_armor));
            findings.extend(ranged_conflicts(candidate, current_weapons));
        }

        let result = EquipmentValidationResult::from(findings);
        debug!(
            weapon = name,
            is_equipping,
            can_equip = result.can_equip,
            errors = result.conflicts.len(),
            warnings = result.warnings.len(),
            "Validated weapon"
        );
        result
    }

    /// Validate adding (`is_equipping == false`) or equipping armor.
    ///
    /// Missing proficiency blocks equipping but only warns for inventory.
    /// Strength and slot checks run only when equipping.
    pub async fn validate_armor_equip(
        &self,
        candidate: &ArmorItem,
        current_armor: &[ArmorItem],
        is_equipping: bool,
    ) -> EquipmentValidationResult {
        let mut findings = Findings::new();
        let name = candidate.name();
        let training = armor_training(candidate.armor_type);

        let proficiency = self.check_armor_proficiency(candidate).await;
        if !proficiency.is_proficient() {
            let lead = match &proficiency {
                ProficiencyCheck::Unavailable { reason } => {
                    format!("Could not verify proficiency with {training} ({reason}).")
                }
                _ => format!("Not proficient with {training}."),
            };
            let conflict = if is_equipping {
                EquipmentConflict::error(ConflictKind::Proficiency, format!("{lead} Cannot wear {name}."))
            } else {
                EquipmentConflict::warning(
                    ConflictKind::Proficiency,
                    format!("{lead} You can carry it but can't wear it effectively."),
                )
            };
            findings.push(conflict.with_items(vec![name.to_string()]));
        }

        if is_equipping {
            if let Some(required) = candidate.strength_requirement {
                let strength = self.character.strength;
                if strength < required {
                    findings.push(
                        EquipmentConflict::error(
                            ConflictKind::Requirement,
                            format!("Requires {required} Strength to wear {name} (you have {strength})."),
                        )
                        .with_items(vec![name.to_string()]),
                    );
                }
            }
            findings.extend(armor_slot_conflicts(candidate, current_armor));
        }

        let result = EquipmentValidationResult::from(findings);
        debug!(
            armor = name,
            is_equipping,
            can_equip = result.can_equip,
            errors = result.conflicts.len(),
            warnings = result.warnings.len(),
            "Validated armor"
        );
        result
    }

    /// Describe any wielding or slot conflicts in what is already equipped.
    ///
    /// Ignores proficiency and Strength; makes no provider call.
    pub fn equipment_conflict_summary<W: Wieldable>(
        &self,
        equipped_weapons: &[W],
        equipped_armor: &[ArmorItem],
    ) -> ConflictSummary {
        summarize_conflicts(equipped_weapons, equipped_armor)
    }
}

fn armor_training(armor_type: ArmorType) -> String {
    match armor_type {
        ArmorType::Shield => "shields".to_string(),
        other => format!("{other} armor"),
    }
}

fn names<W: Wieldable + ?Sized>(weapons: &[&W]) -> Vec<String> {
    weapons.iter().map(|w| w.name().to_string()).collect()
}

fn involving(candidate: &str, others: Vec<String>) -> Vec<String> {
    std::iter::once(candidate.to_string()).chain(others).collect()
}

// ============================================================================
// Rule Checks
// ============================================================================

/// Hand-count rules for equipping `candidate`.
///
/// Each blocking rule is checked on its own; several can fire for one
/// candidate. The Light dual-wield advisory is skipped once any blocking
/// rule, ranged exclusivity included, has fired.
pub fn hand_conflicts<W, E>(candidate: &W, current_weapons: &[E], current_armor: &[ArmorItem]) -> Findings
where
    W: Wieldable + ?Sized,
    E: Wieldable,
{
    let mut findings = Findings::new();
    let name = candidate.name();

    let shields: Vec<&ArmorItem> = current_armor.iter().filter(|a| a.is_shield()).collect();
    let new_is_two_handed = candidate.is_two_handed();
    let (two_handed, one_handed): (Vec<&E>, Vec<&E>) =
        current_weapons.iter().partition(|w| w.is_two_handed());

    if new_is_two_handed {
        if !shields.is_empty() {
            let shield_names = shields.iter().map(|s| s.name().to_string()).collect();
            findings.push(
                EquipmentConflict::error(
                    ConflictKind::Wielding,
                    format!("Cannot use {name} (two-handed) while wielding a shield. Must unequip shield first."),
                )
                .with_items(involving(name, shield_names)),
            );
        }

        if !current_weapons.is_empty() {
            let held: Vec<&E> = current_weapons.iter().collect();
            let held = names(&held);
            findings.push(
                EquipmentConflict::error(
                    ConflictKind::Wielding,
                    format!(
                        "{name} requires both hands. Unequip {} first.",
                        held.join(", ")
                    ),
                )
                .with_items(involving(name, held)),
            );
        }
    } else {
        if !two_handed.is_empty() {
            let blocking = names(&two_handed);
            findings.push(
                EquipmentConflict::error(
                    ConflictKind::Wielding,
                    format!(
                        "Cannot equip {name} while wielding {}, which occupies both hands.",
                        blocking.join(", ")
                    ),
                )
                .with_items(involving(name, blocking)),
            );
        }

        if one_handed.len() >= 2 {
            let held = names(&one_handed);
            findings.push(
                EquipmentConflict::error(
                    ConflictKind::Wielding,
                    format!(
                        "Both hands are full ({}). Unequip a weapon before equipping {name}.",
                        held.join(", ")
                    ),
                )
                .with_items(involving(name, held)),
            );
        }

        // Advisory only applies to an equip no hard rule has blocked.
        let blocked = !findings.errors.is_empty()
            || !ranged_conflicts(candidate, current_weapons).errors.is_empty();
        if one_handed.len() == 1 && !blocked {
            let other = one_handed[0];
            if !candidate.is_light() || !other.is_light() {
                findings.push(
                    EquipmentConflict::warning(
                        ConflictKind::Wielding,
                        "Dual wielding works best with Light weapons. For bonus action attacks, both weapons should have the Light property.",
                    )
                    .with_items(vec![name.to_string(), other.name().to_string()]),
                );
            }
        }
    }

    findings
}

/// Only one ammunition or thrown weapon may be readied at a time.
pub fn ranged_conflicts<W, E>(candidate: &W, current_weapons: &[E]) -> Findings
where
    W: Wieldable + ?Sized,
    E: Wieldable,
{
    let mut findings = Findings::new();
    if !candidate.is_ranged_exclusive() {
        return findings;
    }

    let name = candidate.name();
    let readied: Vec<&E> = current_weapons
        .iter()
        .filter(|w| w.is_ranged_exclusive() && w.name() != name)
        .collect();

    if !readied.is_empty() {
        let readied = names(&readied);
        findings.push(
            EquipmentConflict::error(
                ConflictKind::Wielding,
                format!(
                    "Only one ranged or thrown weapon can be readied at a time. Unequip {} before equipping {name}.",
                    readied.join(", ")
                ),
            )
            .with_items(involving(name, readied)),
        );
    }
    findings
}

/// One shield slot and one body armor slot.
pub fn armor_slot_conflicts(candidate: &ArmorItem, current_armor: &[ArmorItem]) -> Findings {
    let mut findings = Findings::new();
    let name = candidate.name();

    let occupying: Vec<String> = current_armor
        .iter()
        .filter(|a| a.armor_type.is_body_armor() == candidate.armor_type.is_body_armor())
        .map(|a| a.name().to_string())
        .collect();

    if occupying.is_empty() {
        return findings;
    }

    let message = if candidate.is_shield() {
        format!("Can only equip one shield. Unequip: {}.", occupying.join(", "))
    } else {
        format!("Can only wear one body armor. Unequip: {}.", occupying.join(", "))
    };
    findings.push(
        EquipmentConflict::error(ConflictKind::Slot, message).with_items(involving(name, occupying)),
    );
    findings
}

/// Conflicts already present in an equipped loadout.
pub fn summarize_conflicts<W: Wieldable>(equipped_weapons: &[W], equipped_armor: &[ArmorItem]) -> ConflictSummary {
    let mut summary = ConflictSummary::default();

    let (two_handed, one_handed): (Vec<&W>, Vec<&W>) =
        equipped_weapons.iter().partition(|w| w.is_two_handed());
    let (shields, body_armor): (Vec<&ArmorItem>, Vec<&ArmorItem>) =
        equipped_armor.iter().partition(|a| a.is_shield());

    if let Some(first) = two_handed.first() {
        if !shields.is_empty() {
            summary.add(
                format!("{} (two-handed) + shield: cannot use both at the same time", first.name()),
                format!(
                    "Unequip either {} or the shield; choose a two-handed weapon or a shield with a one-handed weapon",
                    first.name()
                ),
            );
        }
    }

    if two_handed.len() > 1 {
        let list = names(&two_handed).join(", ");
        summary.add(
            format!("Multiple two-handed weapons equipped: {list}"),
            "Keep only one two-handed weapon equipped".to_string(),
        );
    }

    if one_handed.len() > 2 {
        let list = names(&one_handed).join(", ");
        summary.add(
            format!("{} one-handed weapons equipped but only two hands: {list}", one_handed.len()),
            "Unequip weapons until no more than two one-handed weapons remain".to_string(),
        );
    }

    if !two_handed.is_empty() && !one_handed.is_empty() {
        let big = names(&two_handed).join(", ");
        let small = names(&one_handed).join(", ");
        summary.add(
            format!("{big} (two-handed) equipped alongside {small}"),
            format!("Unequip {small} or {big}"),
        );
    }

    if shields.len() > 1 {
        let list: Vec<&str> = shields.iter().map(|s| s.name()).collect();
        summary.add(
            format!("Multiple shields equipped: {}", list.join(", ")),
            "Keep only one shield equipped".to_string(),
        );
    }

    if body_armor.len() > 1 {
        let list: Vec<&str> = body_armor.iter().map(|a| a.name()).collect();
        summary.add(
            format!("Multiple body armors worn: {}", list.join(", ")),
            "Wear only one suit of body armor".to_string(),
        );
    }

    let mut ranged: Vec<&str> = equipped_weapons
        .iter()
        .filter(|w| w.is_ranged_exclusive())
        .map(|w| w.name())
        .collect();
    ranged.sort_unstable();
    ranged.dedup();
    if ranged.len() > 1 {
        summary.add(
            format!("Multiple ranged or thrown weapons readied: {}", ranged.join(", ")),
            "Keep only one ammunition or thrown weapon equipped".to_string(),
        );
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{armor, weapons};

    fn error_kinds(findings: &Findings) -> Vec<ConflictKind> {
        findings.errors.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn test_two_handed_blocked_by_shield() {
        let greatsword = weapons(&["Greatsword"]).remove(0);
        let findings = hand_conflicts(&greatsword, &weapons(&[]), &armor(&["Shield"]));

        assert_eq!(findings.errors.len(), 1);
        assert!(findings.errors[0].involves("Greatsword"));
        assert!(findings.errors[0].involves("Shield"));
    }

    #[test]
    fn test_two_handed_needs_empty_hands() {
        let maul = weapons(&["Maul"]).remove(0);
        let findings = hand_conflicts(&maul, &weapons(&["Dagger"]), &armor(&["Shield"]));

        // Shield rule and empty-hands rule both fire
        assert_eq!(error_kinds(&findings), vec![ConflictKind::Wielding; 2]);
        assert!(findings.errors[1].involves("Dagger"));
    }

    #[test]
    fn test_one_handed_blocked_by_two_handed() {
        let dagger = weapons(&["Dagger"]).remove(0);
        let findings = hand_conflicts(&dagger, &weapons(&["Greataxe"]), &[]);

        assert_eq!(findings.errors.len(), 1);
        assert!(findings.errors[0].involves("Greataxe"));
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn test_third_one_handed_weapon() {
        let club = weapons(&["Club"]).remove(0);
        let findings = hand_conflicts(&club, &weapons(&["Shortsword", "Scimitar"]), &[]);

        assert_eq!(findings.errors.len(), 1);
        assert!(findings.errors[0].message.contains("Both hands are full"));
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn test_dual_wield_advisory() {
        let shortsword = weapons(&["Shortsword"]).remove(0);
        let longsword = weapons(&["Longsword"]).remove(0);

        let light_pair = hand_conflicts(&shortsword, &weapons(&["Scimitar"]), &[]);
        assert!(light_pair.is_empty());

        // Symmetric: the candidate or the held weapon may be the heavy one
        let candidate_heavy = hand_conflicts(&longsword, &weapons(&["Scimitar"]), &[]);
        assert_eq!(candidate_heavy.warnings.len(), 1);
        assert!(candidate_heavy.errors.is_empty());

        let held_heavy = hand_conflicts(&shortsword, &weapons(&["Longsword"]), &[]);
        assert_eq!(held_heavy.warnings.len(), 1);
        assert!(held_heavy.warnings[0].involves("Longsword"));
    }

    #[test]
    fn test_dual_wield_advisory_suppressed_when_blocked() {
        let shortsword = weapons(&["Shortsword"]).remove(0);
        let findings = hand_conflicts(&shortsword, &weapons(&["Greatsword", "Longsword"]), &[]);

        assert_eq!(findings.errors.len(), 1);
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn test_dual_wield_advisory_suppressed_by_ranged_block() {
        // Javelin lacks Light, but the second thrown weapon already blocks the equip
        let javelin = weapons(&["Javelin"]).remove(0);
        let findings = hand_conflicts(&javelin, &weapons(&["Dagger"]), &[]);

        assert!(findings.is_empty());
    }

    #[test]
    fn test_versatile_is_not_two_handed() {
        let longsword = weapons(&["Longsword"]).remove(0);
        let findings = hand_conflicts(&longsword, &weapons(&[]), &armor(&["Shield"]));
        assert!(findings.is_empty());
    }

    #[test]
    fn test_ranged_exclusivity() {
        let handaxe = weapons(&["Handaxe"]).remove(0);
        let findings = ranged_conflicts(&handaxe, &weapons(&["Dagger", "Club"]));

        assert_eq!(findings.errors.len(), 1);
        assert_eq!(findings.errors[0].conflicting_items, vec!["Handaxe", "Dagger"]);

        // A second copy of the same weapon is not a conflict
        let dagger = weapons(&["Dagger"]).remove(0);
        assert!(ranged_conflicts(&dagger, &weapons(&["Dagger"])).is_empty());

        let club = weapons(&["Club"]).remove(0);
        assert!(ranged_conflicts(&club, &weapons(&["Dagger"])).is_empty());
    }

    #[test]
    fn test_armor_slots() {
        let current = armor(&["Chain Mail", "Shield"]);

        let plate = armor(&["Plate Armor"]).remove(0);
        let body = armor_slot_conflicts(&plate, &current);
        assert_eq!(body.errors.len(), 1);
        assert_eq!(body.errors[0].kind, ConflictKind::Slot);
        assert_eq!(body.errors[0].conflicting_items, vec!["Plate Armor", "Chain Mail"]);

        let shield = armor(&["Shield"]).remove(0);
        let second_shield = armor_slot_conflicts(&shield, &current);
        assert_eq!(second_shield.errors.len(), 1);
        assert!(second_shield.errors[0].message.contains("one shield"));

        assert!(armor_slot_conflicts(&shield, &armor(&["Chain Mail"])).is_empty());
        assert!(armor_slot_conflicts(&plate, &armor(&["Shield"])).is_empty());
    }

    #[test]
    fn test_summary_clean_dual_wield() {
        let summary = summarize_conflicts(&weapons(&["Shortsword", "Dagger"]), &[]);
        assert!(!summary.has_conflicts);
        assert!(summary.conflict_summary.is_empty());
        assert!(summary.suggestions.is_empty());
    }

    #[test]
    fn test_summary_two_handed_and_shield() {
        let summary = summarize_conflicts(&weapons(&["Greataxe"]), &armor(&["Shield"]));
        assert!(summary.has_conflicts);
        assert_eq!(summary.conflict_summary.len(), 1);
        assert!(summary.conflict_summary[0].contains("Greataxe"));
        assert!(summary.conflict_summary[0].contains("shield"));
        assert!(summary.suggestions[0].contains("Unequip"));
    }

    #[test]
    fn test_summary_overloaded_hands() {
        let summary = summarize_conflicts(
            &weapons(&["Greatsword", "Maul", "Club", "Sickle", "Mace"]),
            &armor(&["Leather Armor", "Hide Armor", "Shield"]),
        );
        // two-handed + shield, multiple two-handed, three one-handed,
        // two-handed alongside one-handed, two body armors
        assert_eq!(summary.conflict_summary.len(), 5);
        assert_eq!(summary.suggestions.len(), 5);
    }

    #[test]
    fn test_summary_multiple_ranged() {
        let summary = summarize_conflicts(&weapons(&["Dagger", "Handaxe"]), &[]);
        assert!(summary.has_conflicts);
        assert!(summary.conflict_summary[0].contains("Dagger, Handaxe"));
    }

    #[test]
    fn test_result_serializes_for_clients() {
        let mut findings = Findings::new();
        findings.push(
            EquipmentConflict::error(ConflictKind::Slot, "Can only equip one shield.")
                .with_items(vec!["Shield".to_string()]),
        );
        let result = EquipmentValidationResult::from(findings);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["canEquip"], false);
        assert_eq!(json["canAdd"], true);
        assert_eq!(json["conflicts"][0]["type"], "slot");
        assert_eq!(json["conflicts"][0]["severity"], "error");
        assert_eq!(json["conflicts"][0]["conflictingItems"][0], "Shield");
    }
}
