use std::fmt::Write;

use crate::{
    args::OutputFormat,
    model::{encounter::EncounterSummary, error::Result, structures::difficulty_result::DifficultyResult}
};

pub fn render(summary: &EncounterSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => Ok(render_text(summary))
    }
}

/// One line per wave, then the encounter total. Percentages are rounded to whole numbers for display.
pub fn render_text(summary: &EncounterSummary) -> String {
    let mut out = String::new();

    for (i, wave) in summary.waves.iter().enumerate() {
        let _ = writeln!(out, "Wave {}: {}", i + 1, wave_line(wave));
    }

    let _ = write!(
        out,
        "Total: {} - {}% hp lost, {}% resources spent",
        summary.encounter_difficulty,
        summary.total_hp_lost.round(),
        summary.total_resources_spent
    );

    out
}

fn wave_line(wave: &DifficultyResult) -> String {
    format!(
        "{} - {}% hp lost, {}% resources spent (power decay x{})",
        wave.encounter_difficulty,
        wave.hp_lost.round(),
        wave.resources_spent,
        wave.multiplier.normalize()
    )
}
