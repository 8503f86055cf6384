//! Trainer entry point.
//!
//! Loads a progression config and a training plan, applies the plan to a fresh
//! player, and prints where every category ended up.
//!
//! ```bash
//! TRAINER_CONFIG=progression.toml cargo run -p progression-cli -- plan.ron
//! ```
mod config;
mod logging;
mod report;

use anyhow::{Context, Result};
use config::CliConfig;
use progression_content::{ConfigLoader, PlanLoader};
use progression_core::{Player, ProgressionConfig, StatKind};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let plan_arg = std::env::args_os().nth(1).map(Into::into);
    let config = CliConfig::from_env().with_plan_path(plan_arg);
    let _guard = logging::setup_logging(config.log_dir.clone())?;

    let progression = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => ProgressionConfig::default(),
    };
    tracing::info!(
        training_bonus = progression.training_bonus,
        auto_main_level_up = progression.auto_main_level_up,
        "Progression config ready"
    );

    let plan_path = config
        .plan_path
        .context("no training plan given (pass a path or set TRAINER_PLAN)")?;
    let plan = PlanLoader::load(&plan_path)?;

    let name = config
        .player
        .or_else(|| plan.player.clone())
        .unwrap_or_else(|| "Player".to_string());
    let mut player = Player::new(name);
    tracing::info!("Starting training session for {}", player.name);

    let report = plan
        .apply(&mut player, &progression)
        .with_context(|| format!("failed to apply {}", plan_path.display()))?;

    for kind in StatKind::ALL {
        player.stats.category_mut(kind).refresh_all_derived();
    }

    let stdout = std::io::stdout();
    report::write_summary(&mut stdout.lock(), &player, &report)?;
    Ok(())
}
