use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::model::{
    constants::{PERCENT, RESOURCES_SPENT_RATIO},
    decay::DecayTable,
    error::{EngineError, Result},
    occurrences::count,
    power::total_power,
    structures::{
        creature_side::CreatureSide, difficulty_result::DifficultyResult,
        encounter_difficulty::EncounterDifficulty, encounter_input::EncounterInput, rating::Rating
    }
};

/// Scores encounters against a power decay table.
///
/// The calculator holds no state besides the table reference, so a single
/// instance can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct EncounterCalculator<'a> {
    decay_table: &'a DecayTable
}

impl EncounterCalculator<'static> {
    /// A calculator backed by the embedded power decay table.
    pub fn new() -> Result<EncounterCalculator<'static>> {
        Ok(EncounterCalculator {
            decay_table: DecayTable::embedded()?
        })
    }
}

impl<'a> EncounterCalculator<'a> {
    pub fn with_decay_table(decay_table: &'a DecayTable) -> EncounterCalculator<'a> {
        EncounterCalculator { decay_table }
    }

    pub fn decay_table(&self) -> &'a DecayTable {
        self.decay_table
    }

    /// # Encounter difficulty
    ///
    /// Steps:
    /// 1. Sum the Power of enemies and allies (by challenge rating) and of the party (by level).
    /// 2. Resolve the power decay multiplier for the strongest enemy against the
    ///     ceiling of the median party level. Skipped (multiplier 1) when decay is not
    ///     requested or there is no friendly Power to scale.
    /// 3. hp lost is `(enemy / friendly)^2 * 100`, where friendly Power is the scaled party
    ///     Power plus ally Power.
    /// 4. Classify hp lost into a difficulty band.
    ///
    /// All arithmetic is done in [`Decimal`]. When there are no enemies or no friendly
    /// Power the ratio is undefined: hp lost is reported as 0 and the difficulty as
    /// [`EncounterDifficulty::Unknown`].
    pub fn recalculate_difficulty(&self, input: &EncounterInput) -> Result<DifficultyResult> {
        let total_enemy_power = side_power(input, CreatureSide::Enemy)?;
        let total_ally_power = side_power(input, CreatureSide::Ally)?;
        let total_party_power = side_power(input, CreatureSide::Player)?;

        let max_enemy_challenge_rating = input
            .enemy_challenge_ratings
            .iter()
            .max()
            .copied()
            .unwrap_or(Rating::ZERO);

        let multiplier = self.decay_multiplier(input, total_party_power, total_ally_power, max_enemy_challenge_rating)?;

        let effective_party_power = multiplier * total_party_power;
        let total_friendly_power = effective_party_power + total_ally_power;

        debug!(
            "Enemy power: {}, ally power: {}, party power: {} (x{}), friendly power: {}",
            total_enemy_power, total_ally_power, total_party_power, multiplier, total_friendly_power
        );

        let difficulty = if input.enemy_challenge_ratings.is_empty() {
            None
        } else if total_friendly_power.is_zero() {
            warn!(
                "No friendly power to oppose {} enemy power, difficulty is undefined",
                total_enemy_power
            );
            None
        } else {
            Some(squared_ratio_percent(total_enemy_power, total_friendly_power)?)
        };

        let hp_lost = difficulty.unwrap_or(Decimal::ZERO);

        Ok(DifficultyResult {
            hp_lost,
            resources_spent: resources_spent(hp_lost),
            encounter_difficulty: EncounterDifficulty::classify(difficulty),
            multiplier
        })
    }

    fn decay_multiplier(
        &self,
        input: &EncounterInput,
        total_party_power: Decimal,
        total_ally_power: Decimal,
        max_enemy_challenge_rating: Rating
    ) -> Result<Decimal> {
        if !input.account_for_power_decay || (total_party_power + total_ally_power).is_zero() {
            return Ok(Decimal::ONE);
        }

        match median_party_level(&input.party_levels) {
            Some(level) => self.decay_table.resolve(level, max_enemy_challenge_rating),
            None => Ok(Decimal::ONE)
        }
    }
}

/// `(enemy / friendly)^2 * 100`. A heavily decayed party can push this past what a
/// [`Decimal`] holds, which is reported instead of wrapping or panicking.
fn squared_ratio_percent(enemy_power: Decimal, friendly_power: Decimal) -> Result<Decimal> {
    enemy_power
        .checked_div(friendly_power)
        .and_then(|ratio| ratio.checked_mul(ratio))
        .and_then(|squared| squared.checked_mul(PERCENT))
        .ok_or_else(|| EngineError::DifficultyOverflow {
            enemy_power: enemy_power.to_string(),
            friendly_power: friendly_power.to_string()
        })
}

fn side_power(input: &EncounterInput, side: CreatureSide) -> Result<Decimal> {
    let occurrences = count(input.roster(side));
    debug!("{} roster ({}): {} distinct ratings", side, side.rating_label(), occurrences.len());

    total_power(&occurrences, side.power_table())
}

/// Scores a single wave against the embedded power decay table.
pub fn recalculate_difficulty(
    enemy_challenge_ratings: &[Rating],
    ally_challenge_ratings: &[Rating],
    party_levels: &[Rating],
    account_for_power_decay: bool
) -> Result<DifficultyResult> {
    let input = EncounterInput {
        enemy_challenge_ratings: enemy_challenge_ratings.to_vec(),
        ally_challenge_ratings: ally_challenge_ratings.to_vec(),
        party_levels: party_levels.to_vec(),
        account_for_power_decay
    };

    EncounterCalculator::new()?.recalculate_difficulty(&input)
}

/// Ceiling of the median party level. With an even number of members the two
/// middle levels are averaged first, so levels 3 and 4 give 4.
pub fn median_party_level(party_levels: &[Rating]) -> Option<u32> {
    if party_levels.is_empty() {
        return None;
    }

    let mut levels = party_levels.iter().map(|l| l.to_decimal()).collect::<Vec<_>>();
    levels.sort();

    let middle = levels.len() / 2;
    let median = if levels.len() % 2 == 0 {
        (levels[middle - 1] + levels[middle]) / Decimal::TWO
    } else {
        levels[middle]
    };

    median.ceil().to_u32()
}

/// `0.67 * hp_lost`, rounded half away from zero.
pub fn resources_spent(hp_lost: Decimal) -> u64 {
    (RESOURCES_SPENT_RATIO * hp_lost)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(u64::MAX)
}
