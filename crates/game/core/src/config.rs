/// Progression constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionConfig {
    /// Multiplier applied to experience deposited through [`crate::Player::train`].
    /// Must be at least 1.
    pub training_bonus: u32,

    /// When set, [`crate::Player::train`] attempts one main level-up after a
    /// sub-stat level-up instead of leaving it to the caller.
    pub auto_main_level_up: bool,
}

impl ProgressionConfig {
    // ===== experience curve =====
    /// Levels per curve block.
    pub const LEVEL_BLOCK_SIZE: u32 = 100;
    /// Requirement at the first level of the first block.
    pub const FIRST_BLOCK_START_EXP: u64 = 10;
    /// Requirement at the last level of the first block, and the base for later blocks.
    pub const FIRST_BLOCK_END_EXP: u64 = 50_000;
    /// Endpoint growth factor between consecutive blocks.
    pub const BLOCK_GROWTH: u64 = 250;

    // ===== derived stat tiers =====
    pub const MID_TIER_LEVEL: u32 = 50;
    pub const HIGH_TIER_LEVEL: u32 = 100;
    /// Levels past `HIGH_TIER_LEVEL` needed to add another full high-tier factor.
    pub const HIGH_TIER_RAMP: u64 = 75;
    /// Main levels per unit of growth factor.
    pub const LEVELS_PER_INCREASE: u64 = 5;

    // ===== capacity =====
    /// Upper bound on sub-stats owned by a single category.
    pub const MAX_SUBSTATS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TRAINING_BONUS: u32 = 1;

    pub fn new() -> Self {
        Self {
            training_bonus: Self::DEFAULT_TRAINING_BONUS,
            auto_main_level_up: false,
        }
    }

    pub fn with_training_bonus(mut self, training_bonus: u32) -> Self {
        self.training_bonus = training_bonus;
        self
    }

    pub fn with_auto_main_level_up(mut self, enabled: bool) -> Self {
        self.auto_main_level_up = enabled;
        self
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self::new()
    }
}
