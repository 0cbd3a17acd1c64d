use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::trace;

use crate::model::{
    error::{EngineError, Result},
    occurrences::OccurrenceMap,
    structures::rating::Rating
};

/// A fixed rating to Power lookup.
#[derive(Debug, Clone)]
pub struct PowerTable {
    name: &'static str,
    entries: BTreeMap<Rating, u32>
}

impl PowerTable {
    pub fn new(name: &'static str, entries: impl IntoIterator<Item = (Rating, u32)>) -> PowerTable {
        PowerTable {
            name,
            entries: entries.into_iter().collect()
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Power of a single unit with this rating. Unlisted ratings are an error, never zero.
    pub fn power(&self, rating: Rating) -> Result<u32> {
        self.entries
            .get(&rating)
            .copied()
            .ok_or_else(|| EngineError::MissingTableEntry {
                rating: rating.to_string(),
                table: self.name.to_string()
            })
    }
}

/// Sum of `count * power` over every rating in `occurrences`.
pub fn total_power(occurrences: &OccurrenceMap, table: &PowerTable) -> Result<Decimal> {
    let mut total = Decimal::ZERO;
    for (rating, count) in occurrences.iter() {
        let power = table.power(*rating)?;
        total += Decimal::from(*count) * Decimal::from(power);
    }

    trace!("Total power from {}: {}", table.name(), total);

    Ok(total)
}
