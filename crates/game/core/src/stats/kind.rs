//! Static catalogue of categories, sub-stats, and derived fields.
//!
//! Each category declares its sub-stats and derived fields explicitly here,
//! so nothing has to be discovered at runtime.

use core::fmt;
use core::str::FromStr;

use strum::IntoEnumIterator;

use super::derived::TierFactors;

/// The five top-level stat categories.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StatKind {
    /// Physical power.
    Strength,
    /// Movement velocity and reaction time.
    Speed,
    /// Resistance to damage and physical stress.
    Durability,
    /// Mental capacity and problem solving.
    Intelligence,
    /// Control over supernatural forces.
    Magic,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        Self::Strength,
        Self::Speed,
        Self::Durability,
        Self::Intelligence,
        Self::Magic,
    ];

    /// Position of this category in [`StatKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit used when displaying a sub-stat's capability.
    pub const fn measurement(self) -> &'static str {
        match self {
            Self::Strength => "Lb",
            Self::Speed => "Kmph",
            Self::Durability => "Lbf",
            Self::Intelligence => "IQ",
            Self::Magic => "MU",
        }
    }

    /// Sub-stats owned by this category, in display order.
    pub const fn substats(self) -> &'static [SubStatKind] {
        use SubStatKind::*;
        match self {
            Self::Strength => &[
                CoreStrength,
                UpperBodyStrength,
                GripStrength,
                LowerBodyStrength,
            ],
            Self::Speed => &[ReactionTime, Velocity, Acceleration, Agility],
            Self::Durability => &[LungCapacity, Stamina, Regeneration, Toughness],
            Self::Intelligence => &[Knowledge, Logic, Strategy, ProblemSolving],
            Self::Magic => &[ManaControl, SpellPower, MagicResistance],
        }
    }

    /// Derived fields computed from this category's main level.
    pub const fn derived(self) -> &'static [DerivedKind] {
        use DerivedKind::*;
        match self {
            Self::Strength => &[Damage],
            Self::Speed => &[Accuracy, Evasiveness],
            Self::Durability => &[Health, Stamina, Regen],
            Self::Intelligence => &[Leadership],
            Self::Magic => &[Mana],
        }
    }
}

/// Trainable leaf attributes.
///
/// Parses from the snake_case key (`"core_strength"`) or, through
/// [`SubStatKind::from_name`], from the display name (`"Core Strength"`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SubStatKind {
    CoreStrength,
    UpperBodyStrength,
    GripStrength,
    LowerBodyStrength,

    ReactionTime,
    Velocity,
    Acceleration,
    Agility,

    LungCapacity,
    Stamina,
    Regeneration,
    Toughness,

    Knowledge,
    Logic,
    Strategy,
    ProblemSolving,

    ManaControl,
    SpellPower,
    MagicResistance,
}

impl SubStatKind {
    /// Looks a sub-stat up by key or display name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::from_str(name).ok().or_else(|| {
            Self::iter().find(|kind| kind.display_name().eq_ignore_ascii_case(name))
        })
    }

    pub const fn category(self) -> StatKind {
        use SubStatKind::*;
        match self {
            CoreStrength | UpperBodyStrength | GripStrength | LowerBodyStrength => {
                StatKind::Strength
            }
            ReactionTime | Velocity | Acceleration | Agility => StatKind::Speed,
            LungCapacity | Stamina | Regeneration | Toughness => StatKind::Durability,
            Knowledge | Logic | Strategy | ProblemSolving => StatKind::Intelligence,
            ManaControl | SpellPower | MagicResistance => StatKind::Magic,
        }
    }

    pub const fn display_name(self) -> &'static str {
        use SubStatKind::*;
        match self {
            CoreStrength => "Core Strength",
            UpperBodyStrength => "Upper Body Strength",
            GripStrength => "Grip Strength",
            LowerBodyStrength => "Lower Body Strength",
            ReactionTime => "Reaction Time",
            Velocity => "Velocity",
            Acceleration => "Acceleration",
            Agility => "Agility",
            LungCapacity => "Lung Capacity",
            Stamina => "Stamina",
            Regeneration => "Regeneration",
            Toughness => "Toughness",
            Knowledge => "Knowledge",
            Logic => "Logic",
            Strategy => "Strategy",
            ProblemSolving => "Problem Solving",
            ManaControl => "Mana Control",
            SpellPower => "Spell Power",
            MagicResistance => "Magic Resistance",
        }
    }

    /// Capability gained per sub-stat level.
    ///
    /// Leg and arm training move far more weight per level than the rest.
    pub const fn capability_multiplier(self) -> u32 {
        match self {
            Self::UpperBodyStrength => 5,
            Self::LowerBodyStrength => 7,
            _ => 1,
        }
    }
}

impl fmt::Display for SubStatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Display-facing attributes derived from a category's main level.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DerivedKind {
    /// Damage dealt per hit.
    Damage,
    Accuracy,
    Evasiveness,
    /// Health pool.
    Health,
    Stamina,
    /// Health regained per turn.
    Regen,
    /// Command over an empire's followers.
    Leadership,
    /// Mana capacity.
    Mana,
}

impl DerivedKind {
    pub const fn category(self) -> StatKind {
        match self {
            Self::Damage => StatKind::Strength,
            Self::Accuracy | Self::Evasiveness => StatKind::Speed,
            Self::Health | Self::Stamina | Self::Regen => StatKind::Durability,
            Self::Leadership => StatKind::Intelligence,
            Self::Mana => StatKind::Magic,
        }
    }

    /// Value a fresh character starts with.
    pub const fn base_value(self) -> u64 {
        match self {
            Self::Damage | Self::Regen => 5,
            Self::Leadership => 50,
            Self::Accuracy | Self::Evasiveness | Self::Health | Self::Stamina | Self::Mana => 100,
        }
    }

    /// Growth factors used by [`crate::StatCategory::refresh_derived`].
    pub const fn default_factors(self) -> TierFactors {
        match self {
            Self::Damage | Self::Accuracy | Self::Evasiveness => TierFactors::new(5, 15, 100),
            Self::Health => TierFactors::new(15, 50, 300),
            Self::Stamina => TierFactors::new(5, 10, 75),
            Self::Regen => TierFactors::new(1, 5, 50),
            Self::Leadership => TierFactors::new(10, 35, 175),
            Self::Mana => TierFactors::new(10, 25, 125),
        }
    }
}
