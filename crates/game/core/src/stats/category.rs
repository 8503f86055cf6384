//! Stat categories - aggregation of sub-stats into a main level.
//!
//! A category counts sub-stat level-ups toward its own requirement
//! (`main_level × substat_count`). Reaching it is not automatic: callers
//! invoke [`Trainable::try_level_up_main`] when they want the check, and each
//! call advances at most one level.

use arrayvec::ArrayVec;

use super::curve::Tier;
use super::derived::{DerivedStat, TierFactors};
use super::kind::{DerivedKind, StatKind, SubStatKind};
use super::substat::SubStat;
use crate::config::ProgressionConfig;
use crate::error::{ProgressionError, ProgressionResult, non_negative};

/// Operations shared by anything that can be trained.
pub trait Trainable {
    /// Deposits experience into the named sub-stat and resolves its level-ups.
    ///
    /// Returns true if the sub-stat gained at least one level.
    fn train(&mut self, substat_name: &str, experience: i64) -> ProgressionResult<bool>;

    /// Advances the main level once if enough sub-stat levels have accrued.
    fn try_level_up_main(&mut self) -> bool;

    /// Recomputes and stores the named derived field, returning its new value.
    fn compute_derived_stat(
        &mut self,
        field_name: &str,
        low_tier_factor: i64,
        mid_tier_factor: i64,
        high_tier_factor: i64,
    ) -> ProgressionResult<u64>;
}

/// Number of derived fields on the widest category (Durability).
const MAX_DERIVED: usize = 3;

/// One of the five top-level stats and the sub-stats it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatCategory {
    kind: StatKind,
    main_level: u32,
    total_substat_levels: u32,
    main_level_req: u32,
    substats: ArrayVec<SubStat, { ProgressionConfig::MAX_SUBSTATS }>,
    derived: ArrayVec<DerivedStat, MAX_DERIVED>,
}

impl StatCategory {
    /// Category at main level 1 with its default sub-stats and base derived values.
    pub fn new(kind: StatKind) -> Self {
        let substats: ArrayVec<_, { ProgressionConfig::MAX_SUBSTATS }> =
            kind.substats().iter().copied().map(SubStat::new).collect();
        let derived = kind.derived().iter().copied().map(DerivedStat::base).collect();
        let main_level_req = substats.len() as u32;

        Self {
            kind,
            main_level: 1,
            total_substat_levels: 0,
            main_level_req,
            substats,
            derived,
        }
    }

    pub fn kind(&self) -> StatKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.kind.as_ref()
    }

    pub fn main_level(&self) -> u32 {
        self.main_level
    }

    /// Sub-stat level-ups counted so far. Never reset by a main level-up.
    pub fn total_substat_levels(&self) -> u32 {
        self.total_substat_levels
    }

    pub fn main_level_req(&self) -> u32 {
        self.main_level_req
    }

    pub fn substat_count(&self) -> u32 {
        self.substats.len() as u32
    }

    pub fn tier(&self) -> Tier {
        Tier::for_level(self.main_level)
    }

    pub fn substats(&self) -> &[SubStat] {
        &self.substats
    }

    pub fn derived(&self) -> &[DerivedStat] {
        &self.derived
    }

    pub fn substat(&self, name: &str) -> ProgressionResult<&SubStat> {
        let index = self.substat_index(name)?;
        Ok(&self.substats[index])
    }

    /// Direct access for callers that drive `add_experience` and
    /// `resolve_level_ups` themselves. Level-ups made this way are not
    /// counted toward the main level.
    pub fn substat_mut(&mut self, name: &str) -> ProgressionResult<&mut SubStat> {
        let index = self.substat_index(name)?;
        Ok(&mut self.substats[index])
    }

    pub fn derived_value(&self, field_name: &str) -> ProgressionResult<u64> {
        let index = self.derived_index(field_name)?;
        Ok(self.derived[index].value)
    }

    /// Typed form of [`Trainable::train`].
    pub fn train_kind(&mut self, kind: SubStatKind, experience: u64) -> ProgressionResult<bool> {
        let index = self
            .substats
            .iter()
            .position(|substat| substat.kind() == kind)
            .ok_or_else(|| ProgressionError::unknown(Some(self.kind), kind.display_name()))?;
        self.train_at(index, experience)
    }

    fn train_at(&mut self, index: usize, experience: u64) -> ProgressionResult<bool> {
        let substat = &mut self.substats[index];
        substat.deposit(experience)?;
        let leveled_up = substat.resolve_level_ups();

        // One count per leveling call, however many levels it produced.
        if leveled_up {
            self.total_substat_levels = self.total_substat_levels.saturating_add(1);
            tracing::debug!(
                category = %self.kind,
                total = self.total_substat_levels,
                required = self.main_level_req,
                "sub-stat level counted"
            );
        }
        Ok(leveled_up)
    }

    /// Recomputes `kind` with its default factors.
    pub fn refresh_derived(&mut self, kind: DerivedKind) -> ProgressionResult<u64> {
        self.recompute_with(kind, kind.default_factors())
    }

    /// Typed form of [`Trainable::compute_derived_stat`].
    pub fn recompute_with(
        &mut self,
        kind: DerivedKind,
        factors: TierFactors,
    ) -> ProgressionResult<u64> {
        let index = self
            .derived
            .iter()
            .position(|field| field.kind == kind)
            .ok_or_else(|| ProgressionError::unknown(Some(self.kind), kind.as_ref()))?;
        Ok(self.recompute(index, factors))
    }

    /// Recomputes every derived field with its default factors.
    pub fn refresh_all_derived(&mut self) {
        for index in 0..self.derived.len() {
            let factors = self.derived[index].kind.default_factors();
            self.recompute(index, factors);
        }
    }

    fn recompute(&mut self, index: usize, factors: TierFactors) -> u64 {
        let level = self.main_level;
        let field = &mut self.derived[index];
        let previous = field.value;
        field.value = field.next_value(level, &factors);

        tracing::debug!(
            category = %self.kind,
            field = %field.kind,
            level,
            previous,
            value = field.value,
            "derived stat recomputed"
        );
        field.value
    }

    fn substat_index(&self, name: &str) -> ProgressionResult<usize> {
        SubStatKind::from_name(name)
            .and_then(|kind| self.substats.iter().position(|s| s.kind() == kind))
            .ok_or_else(|| ProgressionError::unknown(Some(self.kind), name))
    }

    fn derived_index(&self, field_name: &str) -> ProgressionResult<usize> {
        field_name
            .trim()
            .parse::<DerivedKind>()
            .ok()
            .and_then(|kind| self.derived.iter().position(|d| d.kind == kind))
            .ok_or_else(|| ProgressionError::unknown(Some(self.kind), field_name))
    }
}

impl Trainable for StatCategory {
    fn train(&mut self, substat_name: &str, experience: i64) -> ProgressionResult<bool> {
        let index = self.substat_index(substat_name)?;
        let experience = non_negative(experience, "experience")?;
        self.train_at(index, experience)
    }

    fn try_level_up_main(&mut self) -> bool {
        if self.total_substat_levels < self.main_level_req {
            return false;
        }
        let Some(next_level) = self.main_level.checked_add(1) else {
            return false;
        };

        self.main_level = next_level;
        self.main_level_req = next_level.saturating_mul(self.substat_count());
        tracing::debug!(
            category = %self.kind,
            level = self.main_level,
            next_required = self.main_level_req,
            "main level up"
        );
        true
    }

    fn compute_derived_stat(
        &mut self,
        field_name: &str,
        low_tier_factor: i64,
        mid_tier_factor: i64,
        high_tier_factor: i64,
    ) -> ProgressionResult<u64> {
        let index = self.derived_index(field_name)?;
        let factors = TierFactors::checked(low_tier_factor, mid_tier_factor, high_tier_factor)?;
        Ok(self.recompute(index, factors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_category_requirement_matches_substat_count() {
        for kind in StatKind::ALL {
            let category = StatCategory::new(kind);
            assert_eq!(category.main_level(), 1);
            assert_eq!(category.total_substat_levels(), 0);
            assert_eq!(category.main_level_req(), category.substat_count());
        }
        assert_eq!(StatCategory::new(StatKind::Magic).main_level_req(), 3);
    }

    #[test]
    fn train_counts_one_per_call() {
        let mut strength = StatCategory::new(StatKind::Strength);
        // Enough for several levels at once.
        assert!(strength.train("core_strength", 1_000).unwrap());
        assert!(strength.substat("Core Strength").unwrap().level() > 2);
        assert_eq!(strength.total_substat_levels(), 1);
    }

    #[test]
    fn train_without_level_up_does_not_count() {
        let mut speed = StatCategory::new(StatKind::Speed);
        assert!(!speed.train("agility", 9).unwrap());
        assert_eq!(speed.total_substat_levels(), 0);
        assert_eq!(speed.substat("agility").unwrap().experience(), 9);
    }

    #[test]
    fn unknown_substat_leaves_state_untouched() {
        let mut magic = StatCategory::new(StatKind::Magic);
        let before = magic.clone();

        let err = magic.train("Core Strength", 100).unwrap_err();
        assert_eq!(
            err,
            ProgressionError::UnknownAttribute {
                category: Some(StatKind::Magic),
                name: "Core Strength".into(),
            }
        );
        assert_eq!(magic, before);
    }

    #[test]
    fn negative_training_is_rejected() {
        let mut magic = StatCategory::new(StatKind::Magic);
        let before = magic.clone();
        assert!(matches!(
            magic.train("spell_power", -10),
            Err(ProgressionError::InvalidInput { .. })
        ));
        assert_eq!(magic, before);
    }

    #[test]
    fn main_level_up_needs_enough_substat_levels() {
        let mut magic = StatCategory::new(StatKind::Magic);
        assert!(!magic.try_level_up_main());

        for name in ["mana_control", "spell_power", "magic_resistance"] {
            magic.train(name, 10).unwrap();
        }
        assert_eq!(magic.total_substat_levels(), 3);

        assert!(magic.try_level_up_main());
        assert_eq!(magic.main_level(), 2);
        assert_eq!(magic.main_level_req(), 6);
        // The counter is cumulative, not consumed.
        assert_eq!(magic.total_substat_levels(), 3);
        assert!(!magic.try_level_up_main());
    }

    #[test]
    fn main_level_up_advances_one_level_per_call() {
        let mut durability = StatCategory::new(StatKind::Durability);
        let mut experience = 10;
        for _ in 0..12 {
            for name in ["lung_capacity", "stamina", "regeneration", "toughness"] {
                durability.train(name, experience).unwrap();
            }
            experience *= 2;
        }
        assert!(durability.total_substat_levels() >= 12);

        assert!(durability.try_level_up_main());
        assert_eq!(durability.main_level(), 2);
        assert!(durability.try_level_up_main());
        assert_eq!(durability.main_level(), 3);
    }

    #[test]
    fn counters_stop_at_their_ceiling() {
        let mut magic = StatCategory::new(StatKind::Magic);
        magic.main_level = u32::MAX / 3;
        magic.main_level_req = 0;
        magic.total_substat_levels = u32::MAX;

        assert!(magic.train("spell_power", 10).unwrap());
        assert_eq!(magic.total_substat_levels(), u32::MAX);

        assert!(magic.try_level_up_main());
        assert_eq!(magic.main_level_req(), u32::MAX);

        magic.main_level = u32::MAX;
        assert!(!magic.try_level_up_main());
        assert_eq!(magic.main_level(), u32::MAX);
    }

    #[test]
    fn durability_health_at_level_one() {
        let mut durability = StatCategory::new(StatKind::Durability);
        assert_eq!(
            durability.compute_derived_stat("health", 15, 50, 300),
            Ok(113)
        );
        assert_eq!(durability.derived_value("health"), Ok(113));
    }

    #[test]
    fn derived_field_must_belong_to_category() {
        let mut strength = StatCategory::new(StatKind::Strength);
        assert!(matches!(
            strength.compute_derived_stat("mana", 1, 1, 1),
            Err(ProgressionError::UnknownAttribute { .. })
        ));
        assert!(matches!(
            strength.compute_derived_stat("damage", -1, 1, 1),
            Err(ProgressionError::InvalidInput { .. })
        ));
        assert!(matches!(
            strength.compute_derived_stat("damage", 0, 0, 0),
            Err(ProgressionError::InvalidInput { .. })
        ));
        assert_eq!(strength.derived_value("damage"), Ok(5));
    }

    #[test]
    fn refresh_uses_default_factors() {
        let mut intelligence = StatCategory::new(StatKind::Intelligence);
        // floor(50 × 1.1) + 1/5 × 10 = 55 + 2
        assert_eq!(intelligence.refresh_derived(DerivedKind::Leadership), Ok(57));
        assert!(intelligence.refresh_derived(DerivedKind::Mana).is_err());

        let mut durability = StatCategory::new(StatKind::Durability);
        durability.refresh_all_derived();
        assert_eq!(durability.derived_value("health"), Ok(113));
        assert_eq!(durability.derived_value("stamina"), Ok(111));
        assert_eq!(durability.derived_value("regen"), Ok(6));
    }

    #[test]
    fn substat_mut_allows_fine_grained_control() {
        let mut speed = StatCategory::new(StatKind::Speed);
        let velocity = speed.substat_mut("Velocity").unwrap();
        velocity.add_experience(10).unwrap();
        assert!(velocity.resolve_level_ups());
        assert_eq!(speed.total_substat_levels(), 0);
    }

    #[test]
    fn train_kind_rejects_foreign_substat() {
        let mut speed = StatCategory::new(StatKind::Speed);
        assert!(speed.train_kind(SubStatKind::Logic, 10).is_err());
        assert_eq!(speed.train_kind(SubStatKind::Velocity, 10), Ok(true));
    }
}
