use std::{collections::BTreeMap, fs, path::Path, str::FromStr};

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use tracing::debug;

use crate::model::{
    error::{EngineError, Result},
    structures::rating::Rating
};

const EMBEDDED_POWER_DECAY: &str = include_str!("../../data/power_decay.json");

lazy_static! {
    static ref POWER_DECAY_TABLE: Result<DecayTable> = DecayTable::from_json(EMBEDDED_POWER_DECAY);
}

/// # How this works
/// - A single creature whose Power dwarfs the Power of one party member does not
///     threaten the party in proportion to that Power. The friendly side is
///     therefore scaled down instead, by a multiplier in (0, 1].
/// - Rows are keyed by the canonical challenge rating string of the strongest
///     enemy ("0", "1/8", "1/4", "1/2", "1" .. "30").
/// - Columns are keyed by the representative party level (1 .. 20).
///
/// The artifact is JSON shaped as `{"<cr>": {"<level>": <multiplier>}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayTable {
    rows: BTreeMap<String, BTreeMap<u32, Decimal>>
}

impl DecayTable {
    /// The table shipped with the crate, parsed once per process.
    pub fn embedded() -> Result<&'static DecayTable> {
        POWER_DECAY_TABLE
            .as_ref()
            .map_err(|e| EngineError::DecayTable(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<DecayTable> {
        debug!("Loading power decay table from {}", path.display());
        let json = fs::read_to_string(path)?;

        DecayTable::from_json(&json)
    }

    /// Parses and validates a decay artifact.
    ///
    /// Multipliers are read from their JSON text so they stay exact decimals.
    pub fn from_json(json: &str) -> Result<DecayTable> {
        let raw: BTreeMap<String, BTreeMap<String, serde_json::Number>> = serde_json::from_str(json)?;
        let mut rows = BTreeMap::new();

        for (cr_key, columns) in raw {
            let canonical = cr_key
                .parse::<Rating>()
                .map_err(|_| EngineError::DecayTable(format!("row key {:?} is not a challenge rating", cr_key)))?
                .to_string();
            if canonical != cr_key {
                return Err(EngineError::DecayTable(format!(
                    "row key {:?} is not canonical, expected {:?}",
                    cr_key, canonical
                )));
            }

            let mut row = BTreeMap::new();
            for (level_key, number) in columns {
                let level = level_key.parse::<u32>().map_err(|_| {
                    EngineError::DecayTable(format!("column {:?} in row {:?} is not a party level", level_key, cr_key))
                })?;
                let multiplier = Decimal::from_str(&number.to_string()).map_err(|_| {
                    EngineError::DecayTable(format!("multiplier {} in row {:?} is not a decimal", number, cr_key))
                })?;

                if multiplier <= Decimal::ZERO || multiplier > Decimal::ONE {
                    return Err(EngineError::DecayTable(format!(
                        "multiplier {} for challenge rating {} at level {} is outside (0, 1]",
                        multiplier, cr_key, level
                    )));
                }

                row.insert(level, multiplier.normalize());
            }

            rows.insert(cr_key, row);
        }

        Ok(DecayTable { rows })
    }

    pub fn row(&self, challenge_rating: Rating) -> Option<&BTreeMap<u32, Decimal>> {
        self.rows.get(&challenge_rating.to_string())
    }

    pub fn challenge_ratings(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Looks up the multiplier for the strongest enemy against a party of the given level.
    pub fn resolve(&self, party_level: u32, highest_challenge_rating: Rating) -> Result<Decimal> {
        let key = highest_challenge_rating.to_string();
        let row = self
            .rows
            .get(&key)
            .ok_or_else(|| EngineError::InvalidChallengeRating(key.clone()))?;

        let multiplier = row
            .get(&party_level)
            .copied()
            .ok_or_else(|| EngineError::InvalidPartyLevel {
                level: party_level.to_string(),
                challenge_rating: key.clone()
            })?;

        debug!(
            "Resolved power decay multiplier {} for challenge rating {} at party level {}",
            multiplier, key, party_level
        );

        Ok(multiplier)
    }
}
