//! Scripted training plans.
//!
//! A plan is an ordered list of training sessions applied to one player:
//!
//! ```ron
//! (
//!     player: Some("Jeremy"),
//!     sessions: [
//!         (substat: "core_strength", experience: 120),
//!         (substat: "Spell Power", experience: 40, repeat: 5),
//!     ],
//! )
//! ```

use progression_core::{
    Player, ProgressionConfig, ProgressionError, ProgressionResult, SubStatKind, Trainable,
};

/// One deposit of experience, optionally repeated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingSession {
    /// Sub-stat key or display name.
    pub substat: String,
    pub experience: i64,
    #[cfg_attr(feature = "serde", serde(default = "default_repeat"))]
    pub repeat: u32,
}

#[cfg(feature = "serde")]
fn default_repeat() -> u32 {
    1
}

#[cfg(feature = "serde")]
fn default_level_up_main() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingPlan {
    #[cfg_attr(feature = "serde", serde(default))]
    pub player: Option<String>,
    pub sessions: Vec<TrainingSession>,
    /// Attempt a main level-up after every sub-stat level-up.
    #[cfg_attr(feature = "serde", serde(default = "default_level_up_main"))]
    pub level_up_main: bool,
}

/// Totals gathered while applying a plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanReport {
    pub deposits: u32,
    pub substat_level_ups: u32,
    pub main_level_ups: u32,
}

impl TrainingPlan {
    /// Rejects unknown sub-stat names and negative experience.
    pub fn validate(&self) -> ProgressionResult<()> {
        for session in &self.sessions {
            if SubStatKind::from_name(&session.substat).is_none() {
                return Err(ProgressionError::UnknownAttribute {
                    category: None,
                    name: session.substat.clone(),
                });
            }
            if session.experience < 0 {
                return Err(ProgressionError::InvalidInput {
                    reason: format!(
                        "session for {} has negative experience {}",
                        session.substat, session.experience
                    ),
                });
            }
        }
        Ok(())
    }

    /// Applies every session to `player` in order.
    ///
    /// Sessions run against a copy of the player that replaces it only once
    /// every session has succeeded, so on error `player` is left untouched.
    pub fn apply(
        &self,
        player: &mut Player,
        config: &ProgressionConfig,
    ) -> ProgressionResult<PlanReport> {
        self.validate()?;

        let mut staged = player.clone();
        let report = self.apply_sessions(&mut staged, config)?;
        *player = staged;

        tracing::info!(
            player = %player.name,
            deposits = report.deposits,
            substat_level_ups = report.substat_level_ups,
            main_level_ups = report.main_level_ups,
            "training plan applied"
        );
        Ok(report)
    }

    fn apply_sessions(
        &self,
        player: &mut Player,
        config: &ProgressionConfig,
    ) -> ProgressionResult<PlanReport> {
        let mut report = PlanReport::default();
        for session in &self.sessions {
            for _ in 0..session.repeat {
                let outcome = player.train(config, &session.substat, session.experience)?;
                report.deposits += 1;
                if !outcome.substat_leveled {
                    continue;
                }

                report.substat_level_ups += 1;
                let main_leveled = outcome.main_leveled
                    || (self.level_up_main
                        && player
                            .stats
                            .category_mut(outcome.category)
                            .try_level_up_main());
                if main_leveled {
                    report.main_level_ups += 1;
                }
            }
        }
        Ok(report)
    }
}
