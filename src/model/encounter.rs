use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::{
    constants::{MAX_LEVEL, MAX_PARTY_SIZE, MIN_PARTY_SIZE},
    difficulty::{resources_spent, EncounterCalculator},
    error::{EngineError, Result},
    structures::{
        difficulty_result::DifficultyResult, encounter_difficulty::EncounterDifficulty,
        encounter_input::EncounterInput, rating::Rating
    }
};

/// A party facing one or more waves of enemies, resolved one after another.
///
/// Allies and party members carry over between waves.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Encounter {
    pub party_levels: Vec<Rating>,
    #[serde(default)]
    pub ally_challenge_ratings: Vec<Rating>,
    pub waves: Vec<Vec<Rating>>,
    #[serde(default = "default_account_for_power_decay")]
    pub account_for_power_decay: bool
}

fn default_account_for_power_decay() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EncounterSummary {
    pub waves: Vec<DifficultyResult>,
    pub total_hp_lost: Decimal,
    pub total_resources_spent: u64,
    pub encounter_difficulty: EncounterDifficulty
}

impl Encounter {
    pub fn wave_input(&self, enemy_challenge_ratings: &[Rating]) -> EncounterInput {
        EncounterInput {
            enemy_challenge_ratings: enemy_challenge_ratings.to_vec(),
            ally_challenge_ratings: self.ally_challenge_ratings.clone(),
            party_levels: self.party_levels.clone(),
            account_for_power_decay: self.account_for_power_decay
        }
    }

    /// Scores every wave independently and sums the hp lost of the waves
    /// whose difficulty is defined. If any wave fails, no summary is produced.
    pub fn evaluate(&self, calculator: &EncounterCalculator) -> Result<EncounterSummary> {
        let waves = self
            .waves
            .par_iter()
            .map(|enemies| calculator.recalculate_difficulty(&self.wave_input(enemies)))
            .collect::<Result<Vec<DifficultyResult>>>()?;

        let defined = waves.iter().filter(|w| !w.is_unknown()).collect::<Vec<_>>();
        let total_hp_lost: Decimal = defined.iter().map(|w| w.hp_lost).sum();
        let encounter_difficulty = if defined.is_empty() {
            EncounterDifficulty::Unknown
        } else {
            EncounterDifficulty::classify(Some(total_hp_lost))
        };

        info!(
            "Scored {} waves: {}% hp lost ({})",
            waves.len(),
            total_hp_lost.round_dp(2),
            encounter_difficulty
        );

        Ok(EncounterSummary {
            total_resources_spent: resources_spent(total_hp_lost),
            total_hp_lost,
            encounter_difficulty,
            waves
        })
    }
}

/// A JSON input document: either a full multi-wave [`Encounter`] or a single
/// [`EncounterInput`], which is treated as an encounter with one wave.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EncounterDocument {
    Waves(Encounter),
    Single(EncounterInput)
}

impl EncounterDocument {
    pub fn from_json(json: &str) -> Result<EncounterDocument> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_encounter(self) -> Encounter {
        match self {
            EncounterDocument::Waves(encounter) => encounter,
            EncounterDocument::Single(input) => Encounter {
                party_levels: input.party_levels,
                ally_challenge_ratings: input.ally_challenge_ratings,
                waves: vec![input.enemy_challenge_ratings],
                account_for_power_decay: input.account_for_power_decay
            }
        }
    }
}

/// Party levels for `size` players who are all of `level`.
pub fn uniform_party(level: u32, size: u32) -> Result<Vec<Rating>> {
    if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&size) {
        return Err(EngineError::InvalidPartySize(size));
    }

    if level == 0 || level as u64 > MAX_LEVEL {
        return Err(EngineError::InvalidPartyLevel {
            level: level.to_string(),
            challenge_rating: "any".to_string()
        });
    }

    Ok(vec![Rating::from(level); size as usize])
}
