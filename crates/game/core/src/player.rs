//! Player - owner of one category per [`StatKind`].

use crate::config::ProgressionConfig;
use crate::error::{ProgressionError, ProgressionResult, non_negative};
use crate::stats::{DerivedKind, StatCategory, StatKind, SubStatKind, TierFactors, Trainable};

/// The five stat categories of a single player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    categories: [StatCategory; 5],
}

impl PlayerStats {
    pub fn new() -> Self {
        Self {
            categories: StatKind::ALL.map(StatCategory::new),
        }
    }

    pub fn category(&self, kind: StatKind) -> &StatCategory {
        &self.categories[kind.index()]
    }

    pub fn category_mut(&mut self, kind: StatKind) -> &mut StatCategory {
        &mut self.categories[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatCategory> {
        self.categories.iter()
    }

    fn resolve_substat(name: &str) -> ProgressionResult<SubStatKind> {
        SubStatKind::from_name(name).ok_or_else(|| ProgressionError::unknown(None, name))
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes each call to the category that owns the named attribute.
impl Trainable for PlayerStats {
    fn train(&mut self, substat_name: &str, experience: i64) -> ProgressionResult<bool> {
        let kind = Self::resolve_substat(substat_name)?;
        let experience = non_negative(experience, "experience")?;
        self.category_mut(kind.category()).train_kind(kind, experience)
    }

    /// Gives every category one level-up attempt; true if any advanced.
    fn try_level_up_main(&mut self) -> bool {
        self.categories
            .iter_mut()
            .fold(false, |any, category| category.try_level_up_main() | any)
    }

    fn compute_derived_stat(
        &mut self,
        field_name: &str,
        low_tier_factor: i64,
        mid_tier_factor: i64,
        high_tier_factor: i64,
    ) -> ProgressionResult<u64> {
        let kind: DerivedKind = field_name
            .trim()
            .parse()
            .map_err(|_| ProgressionError::unknown(None, field_name))?;
        self.category_mut(kind.category()).compute_derived_stat(
            field_name,
            low_tier_factor,
            mid_tier_factor,
            high_tier_factor,
        )
    }
}

/// Result of a single [`Player::train`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainingOutcome {
    pub category: StatKind,
    pub substat: SubStatKind,
    /// The sub-stat gained at least one level.
    pub substat_leveled: bool,
    /// The category's main level advanced (only with `auto_main_level_up`).
    pub main_leveled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    pub rebirths: u32,
    pub stats: PlayerStats,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rebirths: 0,
            stats: PlayerStats::new(),
        }
    }

    /// Trains a sub-stat with the config's training bonus applied.
    ///
    /// With `auto_main_level_up` set, a sub-stat level-up is followed by one
    /// main level-up attempt on the owning category.
    pub fn train(
        &mut self,
        config: &ProgressionConfig,
        substat_name: &str,
        experience: i64,
    ) -> ProgressionResult<TrainingOutcome> {
        let substat = PlayerStats::resolve_substat(substat_name)?;
        let experience = non_negative(experience, "experience")?;
        if config.training_bonus == 0 {
            return Err(ProgressionError::invalid("training bonus must be at least 1"));
        }
        let scaled = experience
            .checked_mul(u64::from(config.training_bonus))
            .ok_or_else(|| {
                ProgressionError::invalid(format!(
                    "experience overflow applying training bonus {} to {experience}",
                    config.training_bonus
                ))
            })?;

        let category = self.stats.category_mut(substat.category());
        let substat_leveled = category.train_kind(substat, scaled)?;
        let main_leveled =
            substat_leveled && config.auto_main_level_up && category.try_level_up_main();

        if main_leveled {
            tracing::info!(
                player = %self.name,
                category = %substat.category(),
                level = category.main_level(),
                "category leveled up"
            );
        }

        Ok(TrainingOutcome {
            category: substat.category(),
            substat,
            substat_leveled,
            main_leveled,
        })
    }

    /// Recomputes one derived field of the owning category with `factors`.
    pub fn refresh_derived_with(
        &mut self,
        kind: DerivedKind,
        factors: TierFactors,
    ) -> ProgressionResult<u64> {
        self.stats
            .category_mut(kind.category())
            .recompute_with(kind, factors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_owns_one_category_per_kind() {
        let player = Player::new("Jeremy");
        let kinds: Vec<_> = player.stats.iter().map(StatCategory::kind).collect();
        assert_eq!(kinds, StatKind::ALL);
        assert_eq!(player.rebirths, 0);
    }

    #[test]
    fn train_routes_to_owning_category() {
        let mut player = Player::new("Jeremy");
        let outcome = player
            .train(&ProgressionConfig::default(), "Grip Strength", 10)
            .unwrap();

        assert_eq!(outcome.category, StatKind::Strength);
        assert_eq!(outcome.substat, SubStatKind::GripStrength);
        assert!(outcome.substat_leveled);
        assert!(!outcome.main_leveled);

        let strength = player.stats.category(StatKind::Strength);
        assert_eq!(strength.total_substat_levels(), 1);
        assert_eq!(strength.substat("grip_strength").unwrap().level(), 2);
    }

    #[test]
    fn training_bonus_scales_experience() {
        let mut player = Player::new("Jeremy");
        let config = ProgressionConfig::default().with_training_bonus(3);
        player.train(&config, "logic", 4).unwrap();

        let logic = player
            .stats
            .category(StatKind::Intelligence)
            .substat("logic")
            .unwrap();
        // 12 experience: one level (10), 2 left over
        assert_eq!(logic.level(), 2);
        assert_eq!(logic.experience(), 2);
    }

    #[test]
    fn zero_training_bonus_is_rejected() {
        let mut player = Player::new("Jeremy");
        let config = ProgressionConfig::default().with_training_bonus(0);
        assert!(matches!(
            player.train(&config, "logic", 4),
            Err(ProgressionError::InvalidInput { .. })
        ));
        assert_eq!(player.stats, PlayerStats::new());
    }

    #[test]
    fn auto_main_level_up() {
        let mut player = Player::new("Jeremy");
        let config = ProgressionConfig::default().with_auto_main_level_up(true);

        let mut last = None;
        for name in ["mana_control", "spell_power", "magic_resistance"] {
            last = Some(player.train(&config, name, 10).unwrap());
        }
        assert!(last.unwrap().main_leveled);
        assert_eq!(player.stats.category(StatKind::Magic).main_level(), 2);
    }

    #[test]
    fn unknown_substat_has_no_category() {
        let mut player = Player::new("Jeremy");
        let err = player
            .train(&ProgressionConfig::default(), "Telekinesis", 10)
            .unwrap_err();
        assert_eq!(
            err,
            ProgressionError::UnknownAttribute {
                category: None,
                name: "Telekinesis".into(),
            }
        );
    }

    #[test]
    fn player_stats_route_derived_fields() {
        let mut stats = PlayerStats::new();
        assert_eq!(stats.compute_derived_stat("mana", 10, 25, 125), Ok(112));
        assert_eq!(
            stats.category(StatKind::Magic).derived_value("mana"),
            Ok(112)
        );
        assert!(stats.compute_derived_stat("charisma", 1, 1, 1).is_err());
    }

    #[test]
    fn player_stats_try_every_category() {
        let mut stats = PlayerStats::new();
        assert!(!stats.try_level_up_main());

        for name in ["knowledge", "logic", "strategy", "problem_solving"] {
            stats.train(name, 10).unwrap();
        }
        assert!(stats.try_level_up_main());
        assert_eq!(stats.category(StatKind::Intelligence).main_level(), 2);
        assert_eq!(stats.category(StatKind::Strength).main_level(), 1);
    }

    #[test]
    fn refresh_with_custom_factors() {
        let mut player = Player::new("Jeremy");
        let value = player
            .refresh_derived_with(DerivedKind::Damage, TierFactors::new(50, 15, 100))
            .unwrap();
        // floor(5 × 1.1) + 1/5 × 50 = 5 + 10
        assert_eq!(value, 15);
    }
}
