use serde::{Deserialize, Serialize};

use super::{creature_side::CreatureSide, rating::Rating};

/// Rosters for a single difficulty calculation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EncounterInput {
    #[serde(default)]
    pub enemy_challenge_ratings: Vec<Rating>,
    #[serde(default)]
    pub ally_challenge_ratings: Vec<Rating>,
    #[serde(default)]
    pub party_levels: Vec<Rating>,
    #[serde(default = "default_account_for_power_decay")]
    pub account_for_power_decay: bool
}

fn default_account_for_power_decay() -> bool {
    true
}

impl EncounterInput {
    pub fn roster(&self, side: CreatureSide) -> &[Rating] {
        match side {
            CreatureSide::Enemy => &self.enemy_challenge_ratings,
            CreatureSide::Ally => &self.ally_challenge_ratings,
            CreatureSide::Player => &self.party_levels
        }
    }
}
