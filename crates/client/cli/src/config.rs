//! Trainer configuration from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for one trainer run.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Progression config TOML. Defaults apply when unset.
    pub config_path: Option<PathBuf>,
    /// Training plan RON.
    pub plan_path: Option<PathBuf>,
    /// Overrides the player name from the plan.
    pub player: Option<String>,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TRAINER_CONFIG` - Progression config TOML path
    /// - `TRAINER_PLAN` - Training plan RON path (the first CLI argument wins)
    /// - `TRAINER_PLAYER` - Player name
    /// - `TRAINER_LOG_DIR` - Log directory
    pub fn from_env() -> Self {
        Self {
            config_path: read_env("TRAINER_CONFIG"),
            plan_path: read_env("TRAINER_PLAN"),
            player: read_env("TRAINER_PLAYER"),
            log_dir: read_env("TRAINER_LOG_DIR"),
        }
    }

    pub fn with_plan_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.plan_path = path;
        }
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    value.parse().ok()
}
