//! Data-driven progression content and loaders.
//!
//! This crate reads the data files that drive a training session:
//! - Progression configuration (data-driven via TOML)
//! - Scripted training plans (data-driven via RON)
//!
//! All loaders use progression-core types directly with serde for
//! RON/TOML deserialization.

pub mod plan;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use plan::{PlanReport, TrainingPlan, TrainingSession};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, PlanLoader};
