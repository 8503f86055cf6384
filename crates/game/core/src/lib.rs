//! Character progression rules for a text role-playing game.
//!
//! `progression-core` tracks a player's hierarchical stats: five categories,
//! each owning a fixed set of trainable sub-stats. Experience deposited into a
//! sub-stat turns into levels along a nonlinear curve, sub-stat level-ups
//! accumulate toward the category's main level, and display-facing derived
//! stats (damage, health, mana, ...) are recomputed from that level.
//!
//! All mutation flows through [`Trainable`] and [`Player::train`]; readers
//! such as a UI only need the accessors on [`StatCategory`] and [`SubStat`].
pub mod config;
pub mod error;
pub mod player;
pub mod stats;

pub use config::ProgressionConfig;
pub use error::{ProgressionError, ProgressionResult};
pub use player::{Player, PlayerStats, TrainingOutcome};
pub use stats::{
    DerivedKind, DerivedStat, StatCategory, StatKind, SubStat, SubStatKind, Tier, TierFactors,
    Trainable, experience_requirement, round_to_3_leading_digits,
};
