//! Training plan loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::plan::TrainingPlan;

/// Loader for training plans from RON files.
pub struct PlanLoader;

impl PlanLoader {
    /// Load and validate a training plan from a RON file.
    pub fn load(path: &Path) -> LoadResult<TrainingPlan> {
        let content = read_file(path)?;
        let plan = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            sessions = plan.sessions.len(),
            "training plan loaded"
        );
        Ok(plan)
    }

    /// Parse and validate a training plan from RON text.
    pub fn parse(content: &str) -> LoadResult<TrainingPlan> {
        let plan: TrainingPlan = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse training plan RON: {}", e))?;

        plan.validate()
            .map_err(|e| anyhow::anyhow!("Invalid training plan: {}", e))?;

        Ok(plan)
    }
}
