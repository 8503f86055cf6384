//! Plain-text session summary.
use std::io::{self, Write};

use progression_content::PlanReport;
use progression_core::{Player, StatCategory};

pub fn write_summary(
    out: &mut impl Write,
    player: &Player,
    report: &PlanReport,
) -> io::Result<()> {
    writeln!(out, "{} (rebirths: {})", player.name, player.rebirths)?;
    writeln!(
        out,
        "{} deposits, {} sub-stat level-ups, {} main level-ups",
        report.deposits, report.substat_level_ups, report.main_level_ups
    )?;
    for category in player.stats.iter() {
        write_category(out, category)?;
    }
    Ok(())
}

fn write_category(out: &mut impl Write, category: &StatCategory) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} - level {} ({}/{} sub-stat levels, {} tier)",
        category.name(),
        category.main_level(),
        category.total_substat_levels(),
        category.main_level_req(),
        category.tier()
    )?;
    for substat in category.substats() {
        writeln!(
            out,
            "  {:<20} lv {:>3}  exp {:>6}/{:<6}  {}",
            substat.name(),
            substat.level(),
            substat.experience(),
            substat.experience_to_next_level(),
            substat.capability_display()
        )?;
    }
    for field in category.derived() {
        writeln!(out, "  {:<20} {}", field.kind, field.value)?;
    }
    Ok(())
}
