//! Item definitions.
//!
//! Items are plain values: whoever holds one (an inventory, a location, an
//! equipment slot or a container) owns it exclusively, and transfers always
//! remove from the source before inserting into the destination.

use std::collections::BTreeMap;

/// Stat bonus key applied to armor class when the item is equipped.
pub const ARMOR_CLASS_BONUS: &str = "armor_class";

/// Stat bonus key applied to attack rolls when the item is in the main hand.
pub const ATTACK_BONUS: &str = "attack_bonus";

/// Equipment slot whose item drives attack bonus and damage dice.
pub const MAIN_HAND: &str = "main_hand";

/// Category whose items are consumed after a successful use.
pub const POTION_CATEGORY: &str = "potion";

/// A single item as authored by the content layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default = "default_category"))]
    pub category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: i32,

    /// Slot this item occupies when equipped (e.g. `main_hand`, `body`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment_slot: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_bonuses: BTreeMap<String, i32>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub use_effect: Option<UseEffect>,
    /// Damage expression in `NdM` form.
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_dice: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_type: Option<String>,
    /// Interactable id this item unlocks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unlocks_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub owner: Option<String>,
}

#[cfg(feature = "serde")]
fn default_category() -> String {
    "misc".to_string()
}

/// Effect triggered by a `use_item` intent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum UseEffect {
    Heal {
        #[cfg_attr(feature = "serde", serde(default))]
        amount: i32,
    },
    Unlock,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: "misc".to_string(),
            value: 0,
            equipment_slot: None,
            stat_bonuses: BTreeMap::new(),
            use_effect: None,
            damage_dice: None,
            damage_type: None,
            unlocks_id: None,
            owner: None,
        }
    }

    /// A main-hand weapon with the given damage dice and attack bonus.
    pub fn weapon(name: impl Into<String>, dice: impl Into<String>, attack_bonus: i32) -> Self {
        let mut item = Self::new(name)
            .with_category("weapon")
            .with_slot(MAIN_HAND);
        item.damage_dice = Some(dice.into());
        if attack_bonus != 0 {
            item.stat_bonuses
                .insert(ATTACK_BONUS.to_string(), attack_bonus);
        }
        item
    }

    /// Wearable armor granting an armor class bonus.
    pub fn armor(name: impl Into<String>, slot: impl Into<String>, armor_class: i32) -> Self {
        let mut item = Self::new(name).with_category("armor").with_slot(slot);
        item.stat_bonuses
            .insert(ARMOR_CLASS_BONUS.to_string(), armor_class);
        item
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.equipment_slot = Some(slot.into());
        self
    }

    pub fn with_use_effect(mut self, effect: UseEffect) -> Self {
        self.use_effect = Some(effect);
        self
    }

    pub fn with_unlocks(mut self, interactable_id: impl Into<String>) -> Self {
        self.unlocks_id = Some(interactable_id.into());
        self
    }

    /// Value of a stat bonus, zero when absent.
    pub fn bonus(&self, stat: &str) -> i32 {
        self.stat_bonuses.get(stat).copied().unwrap_or(0)
    }

    /// Case-insensitive substring match used by every name lookup.
    pub fn matches(&self, query: &str) -> bool {
        name_matches(&self.name, query)
    }

    pub fn is_consumable(&self) -> bool {
        self.category == POTION_CATEGORY
    }
}

/// Returns true when `query` occurs in `name`, ignoring case.
pub fn name_matches(name: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    !query.is_empty() && name.to_lowercase().contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_matching_is_case_insensitive_substring() {
        let item = Item::new("Rusty Iron Key");
        assert!(item.matches("iron key"));
        assert!(item.matches("RUSTY"));
        assert!(!item.matches("golden"));
        assert!(!item.matches("   "));
    }

    #[test]
    fn weapon_builder_sets_slot_and_bonus() {
        let sword = Item::weapon("Longsword", "1d8", 1);
        assert_eq!(sword.equipment_slot.as_deref(), Some(MAIN_HAND));
        assert_eq!(sword.bonus(ATTACK_BONUS), 1);
        assert_eq!(sword.bonus(ARMOR_CLASS_BONUS), 0);
        assert_eq!(sword.damage_dice.as_deref(), Some("1d8"));
    }
}
