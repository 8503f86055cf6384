//! Derived (physical) stats.
//!
//! Damage, health, mana and friends are not trained directly. Each recompute
//! grows the stored value by 10% and adds a level-based increase whose rate
//! depends on the category's [`Tier`]:
//!
//! ```text
//! increase  = (main_level / 5) × factor(tier)
//! factor    = low | mid | high × (1 + (main_level - 100) / 75)
//! new_value = round_to_3_leading_digits(floor(old × 1.1) + increase)
//! ```
//!
//! The increase is rounded up to a whole number before rounding to three
//! leading digits, which already rounds up.

use super::curve::{Tier, round_to_3_leading_digits};
use super::kind::DerivedKind;
use crate::config::ProgressionConfig;
use crate::error::{ProgressionError, ProgressionResult};

/// Growth factors for the three tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierFactors {
    pub low: u64,
    pub mid: u64,
    pub high: u64,
}

impl TierFactors {
    pub const fn new(low: u64, mid: u64, high: u64) -> Self {
        Self { low, mid, high }
    }

    /// Builds factors from caller-supplied values; every factor must be positive.
    pub fn checked(low: i64, mid: i64, high: i64) -> ProgressionResult<Self> {
        let convert = |value: i64, tier: &str| match u64::try_from(value) {
            Ok(factor) if factor > 0 => Ok(factor),
            _ => Err(ProgressionError::invalid(format!(
                "{tier} tier factor must be positive, got {value}"
            ))),
        };
        Ok(Self::new(
            convert(low, "low")?,
            convert(mid, "mid")?,
            convert(high, "high")?,
        ))
    }

    /// Level-based increase for a category at `level`, rounded up.
    pub fn increase(&self, level: u32) -> u64 {
        let tier = Tier::for_level(level);
        let level = u128::from(level);
        let per = u128::from(ProgressionConfig::LEVELS_PER_INCREASE);

        let increase = match tier {
            Tier::Low => (level * u128::from(self.low)).div_ceil(per),
            Tier::Mid => (level * u128::from(self.mid)).div_ceil(per),
            Tier::High => {
                // high × (1 + (L - 100) / 75) = high × (L - 25) / 75
                let ramp = u128::from(ProgressionConfig::HIGH_TIER_RAMP);
                let shift = u128::from(ProgressionConfig::HIGH_TIER_LEVEL) - ramp;
                let numerator = (level * u128::from(self.high)).saturating_mul(level - shift);
                numerator.div_ceil(per * ramp)
            }
        };
        u64::try_from(increase).unwrap_or(u64::MAX)
    }
}

/// A derived field and its current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStat {
    pub kind: DerivedKind,
    pub value: u64,
}

impl DerivedStat {
    /// Field at its starting value.
    pub const fn base(kind: DerivedKind) -> Self {
        Self {
            kind,
            value: kind.base_value(),
        }
    }

    /// Value after one recompute at `level`, without storing it.
    pub fn next_value(&self, level: u32, factors: &TierFactors) -> u64 {
        let boosted = self.value.saturating_mul(11) / 10;
        round_to_3_leading_digits(boosted.saturating_add(factors.increase(level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_tier_health_at_level_one() {
        let health = DerivedStat::base(DerivedKind::Health);
        let factors = DerivedKind::Health.default_factors();
        assert_eq!(factors.increase(1), 3);
        // floor(100 × 1.1) + 3 = 113
        assert_eq!(health.next_value(1, &factors), 113);
    }

    #[test]
    fn mid_tier_uses_mid_factor() {
        let factors = TierFactors::new(15, 50, 300);
        // 60 / 5 × 50
        assert_eq!(factors.increase(60), 600);
    }

    #[test]
    fn high_tier_accelerates_past_level_100() {
        let factors = TierFactors::new(15, 50, 300);
        // 100 / 5 × 300 × 1
        assert_eq!(factors.increase(100), 6000);
        // 175 / 5 × 300 × 2
        assert_eq!(factors.increase(175), 21_000);
    }

    #[test]
    fn fractional_increase_rounds_up() {
        let regen = DerivedStat::base(DerivedKind::Regen);
        let factors = DerivedKind::Regen.default_factors();
        // 1 / 5 × 1 = 0.2 → 1; floor(5 × 1.1) = 5
        assert_eq!(regen.next_value(1, &factors), 6);
    }

    #[test]
    fn large_values_keep_three_digits() {
        let stat = DerivedStat {
            kind: DerivedKind::Mana,
            value: 11_111,
        };
        // floor(11 111 × 1.1) = 12 222, + 2 = 12 224 → 12 300
        assert_eq!(stat.next_value(1, &TierFactors::new(10, 25, 125)), 12_300);
    }

    #[test]
    fn non_positive_factors_are_rejected() {
        assert!(TierFactors::checked(1, -5, 10).is_err());
        assert!(matches!(
            TierFactors::checked(0, 5, 10),
            Err(ProgressionError::InvalidInput { .. })
        ));
        assert_eq!(
            TierFactors::checked(1, 5, 10),
            Ok(TierFactors::new(1, 5, 10))
        );
    }
}
