//! Sub-stats - the leaf progression unit.
//!
//! A sub-stat accumulates experience and converts it into levels along the
//! shared [`experience_requirement`] curve. Depositing and resolving are
//! separate steps; once [`SubStat::resolve_level_ups`] returns,
//! `experience < experience_to_next_level` holds again.

use super::curve::experience_requirement;
use super::kind::{StatKind, SubStatKind};
use crate::error::{ProgressionError, ProgressionResult, non_negative};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubStat {
    kind: SubStatKind,
    level: u32,
    experience: u64,
    experience_to_next_level: u64,
    training_zone: String,
    capability_multiplier: u32,
}

impl SubStat {
    /// Fresh sub-stat: level 1, no experience.
    pub fn new(kind: SubStatKind) -> Self {
        Self {
            kind,
            level: 1,
            experience: 0,
            experience_to_next_level: experience_requirement(1),
            training_zone: String::new(),
            capability_multiplier: kind.capability_multiplier(),
        }
    }

    /// Sub-stat already trained to `level`, with no banked experience.
    pub fn at_level(kind: SubStatKind, level: u32) -> ProgressionResult<Self> {
        if level == 0 {
            return Err(ProgressionError::invalid("sub-stat level must be at least 1"));
        }
        Ok(Self {
            level,
            experience_to_next_level: experience_requirement(level),
            ..Self::new(kind)
        })
    }

    pub fn kind(&self) -> SubStatKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    pub fn owning_category(&self) -> StatKind {
        self.kind.category()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn experience_to_next_level(&self) -> u64 {
        self.experience_to_next_level
    }

    pub fn training_zone(&self) -> &str {
        &self.training_zone
    }

    pub fn set_training_zone(&mut self, zone: impl Into<String>) {
        self.training_zone = zone.into();
    }

    pub fn capability_multiplier(&self) -> u32 {
        self.capability_multiplier
    }

    /// Raw capability: level × multiplier.
    pub fn capability(&self) -> u64 {
        u64::from(self.level) * u64::from(self.capability_multiplier)
    }

    /// Capability with its unit, e.g. `"35 Lb"`.
    pub fn capability_display(&self) -> String {
        format!(
            "{} {}",
            self.capability(),
            self.owning_category().measurement()
        )
    }

    /// Banks experience without leveling.
    ///
    /// Fails on a negative amount or if the total would overflow; nothing is
    /// changed in either case.
    pub fn add_experience(&mut self, amount: i64) -> ProgressionResult<()> {
        let amount = non_negative(amount, "experience")?;
        self.deposit(amount)
    }

    pub(crate) fn deposit(&mut self, amount: u64) -> ProgressionResult<()> {
        self.experience = self.experience.checked_add(amount).ok_or_else(|| {
            ProgressionError::invalid(format!(
                "experience overflow on {} ({} + {amount})",
                self.kind, self.experience
            ))
        })?;
        Ok(())
    }

    /// Converts banked experience into levels.
    ///
    /// Returns true if at least one level was gained. Calling it again with
    /// no new experience is a no-op.
    pub fn resolve_level_ups(&mut self) -> bool {
        let start_level = self.level;

        while self.experience >= self.experience_to_next_level {
            self.experience -= self.experience_to_next_level;
            self.level += 1;
            self.experience_to_next_level = self.compute_experience_requirement();
        }

        let gained = self.level - start_level;
        if gained > 0 {
            tracing::debug!(
                substat = %self.kind,
                from = start_level,
                to = self.level,
                experience = self.experience,
                next = self.experience_to_next_level,
                "sub-stat leveled up"
            );
        }
        gained > 0
    }

    /// Requirement to advance from the current level.
    pub fn compute_experience_requirement(&self) -> u64 {
        experience_requirement(self.level)
    }
}
