//! Characters: the player and every NPC.
//!
//! The player and NPCs share one type. Combat and the trackers only ever
//! reach a character by name, never by holding a reference across turns.

use std::collections::BTreeMap;

use super::item::{ARMOR_CLASS_BONUS, ATTACK_BONUS, Item, MAIN_HAND, name_matches};

/// Ability score used when a stat is missing from a character sheet.
pub const DEFAULT_ABILITY_SCORE: i32 = 10;

/// Integer ability scores keyed by name (`strength`, `dexterity`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityScores(BTreeMap<String, i32>);

impl AbilityScores {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, i32)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }

    /// Score for `stat`, or the default score when absent.
    pub fn get(&self, stat: &str) -> i32 {
        self.0
            .get(&stat.to_lowercase())
            .copied()
            .unwrap_or(DEFAULT_ABILITY_SCORE)
    }

    pub fn contains(&self, stat: &str) -> bool {
        self.0.contains_key(&stat.to_lowercase())
    }

    pub fn set(&mut self, stat: impl Into<String>, value: i32) {
        self.0.insert(stat.into().to_lowercase(), value);
    }

    /// Modifier for `stat`: ⌊(score − 10) / 2⌋.
    pub fn modifier(&self, stat: &str) -> i32 {
        ability_modifier(self.get(stat))
    }

    /// Adds `delta` to every recorded score.
    pub fn raise_all(&mut self, delta: i32) {
        for value in self.0.values_mut() {
            *value += delta;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// ⌊(score − 10) / 2⌋, flooring toward negative infinity.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Equipment slots; a slot may be present but empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Equipment(BTreeMap<String, Option<Item>>);

impl Equipment {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, slot: &str) -> Option<&Item> {
        self.0.get(slot).and_then(Option::as_ref)
    }

    pub fn main_hand(&self) -> Option<&Item> {
        self.get(MAIN_HAND)
    }

    /// Puts `item` into `slot`, returning whatever occupied it.
    pub fn equip(&mut self, slot: impl Into<String>, item: Item) -> Option<Item> {
        self.0.insert(slot.into(), Some(item)).flatten()
    }

    /// Empties `slot`, returning its item.
    pub fn unequip(&mut self, slot: &str) -> Option<Item> {
        self.0.get_mut(slot).and_then(Option::take)
    }

    /// First equipped item whose name matches `query`, with its slot.
    pub fn find(&self, query: &str) -> Option<(&str, &Item)> {
        self.0.iter().find_map(|(slot, item)| {
            item.as_ref()
                .filter(|item| item.matches(query))
                .map(|item| (slot.as_str(), item))
        })
    }

    /// Sum of armor class bonuses over every occupied slot.
    pub fn armor_class_bonus(&self) -> i32 {
        self.items().map(|item| item.bonus(ARMOR_CLASS_BONUS)).sum()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.0.values().filter_map(Option::as_ref)
    }
}

/// Complete character sheet.
///
/// # Invariants
///
/// - `hp` may drop below zero internally; any value ≤ 0 reads as defeated and
///   reports as 0.
/// - Healing never raises `hp` above `max_hp`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: AbilityScores,

    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Vec<Item>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Equipment,

    #[cfg_attr(feature = "serde", serde(default = "defaults::mood"))]
    pub mood: String,
    /// Narration-only memories; opaque to the rules core.
    #[cfg_attr(feature = "serde", serde(default))]
    pub memory: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub personality_tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub available_quest_ids: Vec<String>,

    #[cfg_attr(feature = "serde", serde(default = "defaults::hp"))]
    pub hp: i32,
    #[cfg_attr(feature = "serde", serde(default = "defaults::hp"))]
    pub max_hp: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_effects: Vec<String>,

    #[cfg_attr(feature = "serde", serde(default = "defaults::level"))]
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp: u32,
    #[cfg_attr(feature = "serde", serde(default = "defaults::xp_to_next_level"))]
    pub xp_to_next_level: u32,
    #[cfg_attr(feature = "serde", serde(default = "defaults::money"))]
    pub money: i32,

    #[cfg_attr(
        feature = "serde",
        serde(default = "defaults::armor_class", alias = "armor_class")
    )]
    pub base_armor_class: i32,
    #[cfg_attr(feature = "serde", serde(default, alias = "attack_bonus"))]
    pub base_attack_bonus: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_hostile: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub faction: Option<String>,
    /// Hourly schedule: `"HH:00"` → location id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub schedule: Option<BTreeMap<String, String>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_hidden: bool,
}

mod defaults {
    #![cfg_attr(not(feature = "serde"), allow(dead_code))]

    pub fn mood() -> String {
        "neutral".to_string()
    }

    pub fn hp() -> i32 {
        20
    }

    pub fn level() -> u32 {
        1
    }

    pub fn xp_to_next_level() -> u32 {
        crate::config::GameConfig::DEFAULT_XP_TO_NEXT_LEVEL
    }

    pub fn money() -> i32 {
        10
    }

    pub fn armor_class() -> i32 {
        10
    }
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            stats: AbilityScores::new(),
            inventory: Vec::new(),
            equipment: Equipment::new(),
            mood: defaults::mood(),
            memory: Vec::new(),
            personality_tags: Vec::new(),
            available_quest_ids: Vec::new(),
            hp: defaults::hp(),
            max_hp: defaults::hp(),
            status_effects: Vec::new(),
            level: defaults::level(),
            xp: 0,
            xp_to_next_level: defaults::xp_to_next_level(),
            money: defaults::money(),
            base_armor_class: defaults::armor_class(),
            base_attack_bonus: 0,
            is_hostile: false,
            faction: None,
            schedule: None,
            is_hidden: false,
        }
    }

    pub fn with_stat(mut self, stat: &str, value: i32) -> Self {
        self.stats.set(stat, value);
        self
    }

    /// Sets both current and maximum HP.
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self.max_hp = hp;
        self
    }

    pub fn with_armor_class(mut self, armor_class: i32) -> Self {
        self.base_armor_class = armor_class;
        self
    }

    pub fn with_attack_bonus(mut self, bonus: i32) -> Self {
        self.base_attack_bonus = bonus;
        self
    }

    pub fn with_equipped(mut self, item: Item) -> Self {
        let slot = item
            .equipment_slot
            .clone()
            .unwrap_or_else(|| MAIN_HAND.to_string());
        self.equipment.equip(slot, item);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.inventory.push(item);
        self
    }

    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    pub fn with_schedule<'a>(mut self, entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.schedule = Some(
            entries
                .into_iter()
                .map(|(hour, location)| (hour.to_string(), location.to_string()))
                .collect(),
        );
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.personality_tags.push(tag.into());
        self
    }

    pub fn hostile(mut self) -> Self {
        self.is_hostile = true;
        self
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// HP as shown to the player, floored at zero.
    pub fn reported_hp(&self) -> i32 {
        self.hp.max(0)
    }

    /// Restores up to `amount` HP without exceeding the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
    }

    pub fn total_armor_class(&self) -> i32 {
        self.base_armor_class + self.equipment.armor_class_bonus()
    }

    /// Base attack bonus plus the main-hand weapon's bonus.
    pub fn total_attack_bonus(&self) -> i32 {
        self.base_attack_bonus
            + self
                .equipment
                .main_hand()
                .map(|weapon| weapon.bonus(ATTACK_BONUS))
                .unwrap_or(0)
    }

    /// Damage expression of the main-hand weapon, if it declares one.
    pub fn weapon_dice(&self) -> Option<&str> {
        self.equipment
            .main_hand()
            .and_then(|weapon| weapon.damage_dice.as_deref())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.personality_tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn matches(&self, query: &str) -> bool {
        name_matches(&self.name, query)
    }

    /// Index of the first inventory item matching `query`.
    pub fn find_inventory_item(&self, query: &str) -> Option<usize> {
        self.inventory.iter().position(|item| item.matches(query))
    }

    /// Idempotent status insert; returns true if the effect was new.
    pub fn add_status(&mut self, effect: &str) -> bool {
        if self.has_status(effect) {
            return false;
        }
        self.status_effects.push(effect.to_string());
        true
    }

    /// Returns true if the effect was present.
    pub fn remove_status(&mut self, effect: &str) -> bool {
        let before = self.status_effects.len();
        self.status_effects.retain(|e| e != effect);
        before != self.status_effects.len()
    }

    pub fn has_status(&self, effect: &str) -> bool {
        self.status_effects.iter().any(|e| e == effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_floors_toward_negative_infinity() {
        assert_eq!(ability_modifier(16), 3);
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(7), -2);
    }

    #[test]
    fn missing_stat_reads_as_ten() {
        let stats = AbilityScores::from_pairs([("strength", 16)]);
        assert_eq!(stats.get("Strength"), 16);
        assert_eq!(stats.get("wisdom"), DEFAULT_ABILITY_SCORE);
        assert_eq!(stats.modifier("wisdom"), 0);
    }

    #[test]
    fn armor_class_sums_every_slot() {
        let knight = Character::new("Knight")
            .with_armor_class(12)
            .with_equipped(Item::armor("Chainmail", "body", 3))
            .with_equipped(Item::armor("Buckler", "off_hand", 1))
            .with_equipped(Item::weapon("Mace", "1d6", 2));

        assert_eq!(knight.total_armor_class(), 16);
        assert_eq!(knight.total_attack_bonus(), 2);
        assert_eq!(knight.weapon_dice(), Some("1d6"));
    }

    #[test]
    fn heal_is_capped_at_max() {
        let mut hero = Character::new("Hero").with_hp(20);
        hero.hp = 4;
        hero.heal(50);
        assert_eq!(hero.hp, 20);
    }

    #[test]
    fn status_changes_are_idempotent() {
        let mut hero = Character::new("Hero");
        assert!(hero.add_status("poisoned"));
        assert!(!hero.add_status("poisoned"));
        assert_eq!(hero.status_effects.len(), 1);
        assert!(hero.remove_status("poisoned"));
        assert!(!hero.remove_status("poisoned"));
        assert!(hero.status_effects.is_empty());
    }

    #[test]
    fn equip_returns_displaced_item() {
        let mut equipment = Equipment::new();
        assert!(equipment.equip("main_hand", Item::new("Dagger")).is_none());
        let displaced = equipment.equip("main_hand", Item::new("Sword"));
        assert_eq!(displaced.map(|i| i.name), Some("Dagger".to_string()));
        assert_eq!(equipment.unequip("main_hand").map(|i| i.name), Some("Sword".to_string()));
        assert!(equipment.unequip("main_hand").is_none());
    }
}
