//! Shared progression formulas.
//!
//! Integer arithmetic only, so results are identical on every platform.

use crate::config::ProgressionConfig;

/// Experience needed to advance from `level` to `level + 1`.
///
/// Levels are grouped into blocks of 100. Inside a block the requirement is a
/// quadratic interpolation between the block's endpoints; the first block runs
/// 10 → 50 000 and every later block multiplies both endpoints by 250.
///
/// ```text
/// b = (L - 1) / 100
/// i = (L - 1) % 100
/// requirement = start(b) + i² · (end(b) - start(b)) / 99²
/// ```
///
/// Values past `u64::MAX` saturate. Level 0 is treated as level 1.
pub fn experience_requirement(level: u32) -> u64 {
    let level = level.max(1);
    let block = (level - 1) / ProgressionConfig::LEVEL_BLOCK_SIZE;
    let index = u128::from((level - 1) % ProgressionConfig::LEVEL_BLOCK_SIZE);
    let last = u128::from(ProgressionConfig::LEVEL_BLOCK_SIZE - 1);

    let (start, end) = block_endpoints(block);
    let span = end - start;
    let requirement = start.saturating_add(span.saturating_mul(index * index) / (last * last));

    u64::try_from(requirement).unwrap_or(u64::MAX)
}

fn block_endpoints(block: u32) -> (u128, u128) {
    let base = u128::from(ProgressionConfig::FIRST_BLOCK_END_EXP);
    if block == 0 {
        return (u128::from(ProgressionConfig::FIRST_BLOCK_START_EXP), base);
    }

    let scaled = |exponent: u32| {
        u128::from(ProgressionConfig::BLOCK_GROWTH)
            .checked_pow(exponent)
            .and_then(|growth| growth.checked_mul(base))
            .unwrap_or(u128::MAX)
    };
    (scaled(block - 1), scaled(block))
}

/// Growth tier selected by a category's main level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Main level below 50.
    Low,
    /// Main level 50 through 99.
    Mid,
    /// Main level 100 and above; growth keeps accelerating.
    High,
}

impl Tier {
    pub const fn for_level(level: u32) -> Self {
        if level < ProgressionConfig::MID_TIER_LEVEL {
            Self::Low
        } else if level < ProgressionConfig::HIGH_TIER_LEVEL {
            Self::Mid
        } else {
            Self::High
        }
    }
}

/// Keeps the three most significant digits of `n`, rounding the rest up.
///
/// `12345 → 12400`, `987 → 987`, `0 → 0`.
pub fn round_to_3_leading_digits(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let digits = n.ilog10() + 1;
    if digits <= 3 {
        return n;
    }
    let factor = 10u64.pow(digits - 3);
    n.div_ceil(factor).saturating_mul(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_block_endpoints() {
        assert_eq!(experience_requirement(1), 10);
        assert_eq!(experience_requirement(100), 50_000);
    }

    #[test]
    fn level_two_requirement() {
        // 10 + (1/99)² × 49 990 = 15.1
        assert_eq!(experience_requirement(2), 15);
    }

    #[test]
    fn later_blocks_scale_by_250() {
        assert_eq!(experience_requirement(101), 50_000);
        assert_eq!(experience_requirement(200), 12_500_000);
        assert_eq!(experience_requirement(201), 12_500_000);
        assert_eq!(experience_requirement(300), 3_125_000_000);
    }

    #[test]
    fn requirement_is_positive_and_non_decreasing() {
        let mut previous = 0;
        for level in 1..=500 {
            let requirement = experience_requirement(level);
            assert!(requirement > 0, "level {level}");
            assert!(requirement >= previous, "level {level}");
            previous = requirement;
        }
    }

    #[test]
    fn growth_steepens_after_each_block_boundary() {
        for boundary in [100u32, 200, 300] {
            let before = experience_requirement(boundary) - experience_requirement(boundary - 1);
            let after =
                experience_requirement(boundary + 2) - experience_requirement(boundary + 1);
            assert!(after > before, "boundary {boundary}: {before} vs {after}");
        }
    }

    #[test]
    fn huge_levels_saturate() {
        assert_eq!(experience_requirement(u32::MAX), u64::MAX);
        assert_eq!(experience_requirement(0), experience_requirement(1));
    }

    #[test]
    fn tiers() {
        assert_eq!(Tier::for_level(1), Tier::Low);
        assert_eq!(Tier::for_level(49), Tier::Low);
        assert_eq!(Tier::for_level(50), Tier::Mid);
        assert_eq!(Tier::for_level(99), Tier::Mid);
        assert_eq!(Tier::for_level(100), Tier::High);
    }

    #[test]
    fn rounding_keeps_three_leading_digits() {
        assert_eq!(round_to_3_leading_digits(12_345), 12_400);
        assert_eq!(round_to_3_leading_digits(987), 987);
        assert_eq!(round_to_3_leading_digits(0), 0);
        assert_eq!(round_to_3_leading_digits(7), 7);
        assert_eq!(round_to_3_leading_digits(1000), 1000);
        assert_eq!(round_to_3_leading_digits(1001), 1010);
        assert_eq!(round_to_3_leading_digits(99_999), 100_000);
    }
}
