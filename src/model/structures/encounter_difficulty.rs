use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Difficulty label for an encounter, ordered from least to most severe.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, EnumString)]
pub enum EncounterDifficulty {
    Mild,
    Bruising,
    Bloody,
    Brutal,
    Oppressive,
    Overwhelming,
    Crushing,
    Devastating,
    Impossible,
    Unknown
}

/// Inclusive upper bound of hp lost for each band. Anything above the last bound is `Impossible`.
const BANDS: [(i64, EncounterDifficulty); 8] = [
    (20, EncounterDifficulty::Mild),
    (40, EncounterDifficulty::Bruising),
    (60, EncounterDifficulty::Bloody),
    (80, EncounterDifficulty::Brutal),
    (100, EncounterDifficulty::Oppressive),
    (130, EncounterDifficulty::Overwhelming),
    (170, EncounterDifficulty::Crushing),
    (250, EncounterDifficulty::Devastating)
];

impl EncounterDifficulty {
    /// Classifies a percentage of hp lost. `None` means the difficulty is undefined.
    pub fn classify(hp_lost: Option<Decimal>) -> EncounterDifficulty {
        let Some(hp_lost) = hp_lost else {
            return EncounterDifficulty::Unknown;
        };

        BANDS
            .iter()
            .find(|(max, _)| hp_lost <= Decimal::from(*max))
            .map(|(_, difficulty)| *difficulty)
            .unwrap_or(EncounterDifficulty::Impossible)
    }

    /// The inclusive upper bound of this band, if it has one.
    pub fn upper_bound(&self) -> Option<Decimal> {
        BANDS
            .iter()
            .find(|(_, difficulty)| difficulty == self)
            .map(|(max, _)| Decimal::from(*max))
    }
}
