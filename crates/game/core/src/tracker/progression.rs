//! Experience and levelling.

use crate::config::GameConfig;
use crate::notify::Notification;
use crate::state::Character;

/// Adds `amount` experience and applies every level it pays for.
///
/// Returns the experience notice followed by at most one level-up notice
/// naming the final level. A zero award does nothing.
pub fn award_xp(character: &mut Character, amount: u32, config: &GameConfig) -> Vec<Notification> {
    if amount == 0 {
        return Vec::new();
    }

    character.xp = character.xp.saturating_add(amount);
    tracing::info!(character = %character.name, amount, total = character.xp, "experience awarded");

    let mut notifications = vec![Notification::XpGained { amount }];
    notifications.extend(check_for_levelup(character, config));
    notifications
}

/// Levels up while experience covers the current threshold.
///
/// Each level consumes its threshold, grows the next one and applies the
/// level-up bonus; a single call may cross several levels.
pub fn check_for_levelup(character: &mut Character, config: &GameConfig) -> Option<Notification> {
    let mut levels_gained = 0;
    while character.xp_to_next_level > 0 && character.xp >= character.xp_to_next_level {
        character.xp -= character.xp_to_next_level;
        character.level += 1;
        character.xp_to_next_level = config.next_threshold(character.xp_to_next_level);
        apply_level_bonus(character, config);
        levels_gained += 1;
        tracing::info!(character = %character.name, level = character.level, "level up");
    }

    (levels_gained > 0).then(|| Notification::LevelUp {
        level: character.level,
        levels_gained,
    })
}

fn apply_level_bonus(character: &mut Character, config: &GameConfig) {
    character.max_hp += config.level_up_max_hp;
    character.hp = character.max_hp;
    character.stats.raise_all(config.level_up_stat_bonus);
}
