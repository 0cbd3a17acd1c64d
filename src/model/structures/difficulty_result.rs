use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};

use super::encounter_difficulty::EncounterDifficulty;

/// Outcome of scoring a single wave.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyResult {
    /// Percentage of party hit points expected to be lost
    pub hp_lost: Decimal,
    /// Percentage of party resources expected to be spent
    pub resources_spent: u64,
    pub encounter_difficulty: EncounterDifficulty,
    /// Power decay multiplier applied to party Power, exactly 1 when not applied
    pub multiplier: Decimal
}

impl DifficultyResult {
    /// `hp_lost` as a float for display. Never used for further arithmetic.
    pub fn hp_lost_f64(&self) -> f64 {
        self.hp_lost.to_f64().unwrap_or_default()
    }

    pub fn is_unknown(&self) -> bool {
        self.encounter_difficulty == EncounterDifficulty::Unknown
    }
}
