/// Game configuration constants and tunable parameters.
///
/// Every field has a default so partial TOML files stay valid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Experience needed for the first level-up of a fresh character.
    pub default_xp_to_next_level: u32,

    /// Threshold growth per level, in percent (150 = ×1.5, truncated).
    pub xp_growth_percent: u32,

    /// Max HP gained per level.
    pub level_up_max_hp: i32,

    /// Added to every ability score per level.
    pub level_up_stat_bonus: i32,

    /// Damage dice used when the main hand is empty or carries no dice.
    pub unarmed_damage: String,

    /// In-game clock value of a new game (08:00).
    pub starting_minutes: u32,

    /// Turns a fleeing bystander waits before it may flee again.
    pub flee_cooldown_turns: u64,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_XP_TO_NEXT_LEVEL: u32 = 100;
    pub const DEFAULT_XP_GROWTH_PERCENT: u32 = 150;
    pub const DEFAULT_LEVEL_UP_MAX_HP: i32 = 5;
    pub const DEFAULT_LEVEL_UP_STAT_BONUS: i32 = 1;
    pub const DEFAULT_UNARMED_DAMAGE: &'static str = "1d4";
    pub const DEFAULT_STARTING_MINUTES: u32 = 480;
    pub const DEFAULT_FLEE_COOLDOWN_TURNS: u64 = 10;

    pub const MINUTES_PER_HOUR: u32 = 60;
    pub const HOURS_PER_DAY: u32 = 24;

    pub fn new() -> Self {
        Self {
            default_xp_to_next_level: Self::DEFAULT_XP_TO_NEXT_LEVEL,
            xp_growth_percent: Self::DEFAULT_XP_GROWTH_PERCENT,
            level_up_max_hp: Self::DEFAULT_LEVEL_UP_MAX_HP,
            level_up_stat_bonus: Self::DEFAULT_LEVEL_UP_STAT_BONUS,
            unarmed_damage: Self::DEFAULT_UNARMED_DAMAGE.to_string(),
            starting_minutes: Self::DEFAULT_STARTING_MINUTES,
            flee_cooldown_turns: Self::DEFAULT_FLEE_COOLDOWN_TURNS,
        }
    }

    /// Next XP threshold after a level-up, truncating toward zero.
    pub fn next_threshold(&self, current: u32) -> u32 {
        let grown = u64::from(current) * u64::from(self.xp_growth_percent) / 100;
        // A threshold of zero would level forever.
        grown.clamp(1, u64::from(u32::MAX)) as u32
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
