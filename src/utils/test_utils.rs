use crate::model::structures::{encounter_input::EncounterInput, rating::Rating};

/// Whole-number ratings, e.g. `ratings(&[5, 3, 2])`.
pub fn ratings(values: &[u64]) -> Vec<Rating> {
    values.iter().map(|v| Rating::whole(*v)).collect()
}

pub fn generate_encounter_input(
    enemies: &[u64],
    allies: &[u64],
    party_levels: &[u64],
    account_for_power_decay: bool
) -> EncounterInput {
    EncounterInput {
        enemy_challenge_ratings: ratings(enemies),
        ally_challenge_ratings: ratings(allies),
        party_levels: ratings(party_levels),
        account_for_power_decay
    }
}
