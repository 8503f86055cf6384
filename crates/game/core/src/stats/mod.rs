//! Stat progression engine.
//!
//! # Architecture
//!
//! ```text
//! [ SubStat ]       experience → levels along the shared curve
//!      ↓ one count per leveling call
//! [ StatCategory ]  counted levels → main level (explicit trigger)
//!      ↓
//! [ DerivedStat ]   main level → damage, health, mana, ... (tiered growth)
//! ```
//!
//! ## Principles
//!
//! 1. **Static catalogue**: every category declares its sub-stats and derived
//!    fields in [`kind`]; nothing is discovered at runtime
//! 2. **Validate, then mutate**: a failed call leaves state untouched
//! 3. **Deterministic**: integer math only, no I/O or randomness

pub mod category;
pub mod curve;
pub mod derived;
pub mod kind;
pub mod substat;

// Re-export primary types
pub use category::{StatCategory, Trainable};
pub use curve::{Tier, experience_requirement, round_to_3_leading_digits};
pub use derived::{DerivedStat, TierFactors};
pub use kind::{DerivedKind, StatKind, SubStatKind};
pub use substat::SubStat;
