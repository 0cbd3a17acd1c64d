use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;

use crate::model::{
    error::{EngineError, Result},
    structures::rating::Rating
};

/// How many times each rating appears in a roster.
///
/// Every key present has a count of at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OccurrenceMap(BTreeMap<Rating, u64>);

impl OccurrenceMap {
    pub fn new() -> OccurrenceMap {
        OccurrenceMap(BTreeMap::new())
    }

    pub fn get(&self, rating: &Rating) -> Option<u64> {
        self.0.get(rating).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Rating, &u64)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Per-key sum of both maps.
    pub fn merge(&self, other: &OccurrenceMap) -> OccurrenceMap {
        let mut merged = self.0.clone();
        for (rating, count) in other.iter() {
            *merged.entry(*rating).or_default() += count;
        }

        OccurrenceMap(merged)
    }
}

impl FromIterator<(Rating, u64)> for OccurrenceMap {
    fn from_iter<T: IntoIterator<Item = (Rating, u64)>>(iter: T) -> Self {
        OccurrenceMap(iter.into_iter().filter(|(_, count)| *count > 0).collect())
    }
}

/// Counts each distinct rating in `ratings`.
pub fn count(ratings: &[Rating]) -> OccurrenceMap {
    ratings
        .iter()
        .copied()
        .counts()
        .into_iter()
        .map(|(rating, n)| (rating, n as u64))
        .collect()
}

/// Counts ratings supplied as untyped JSON.
///
/// Anything other than an array is rejected with [`EngineError::InvalidArgument`]
/// naming the JSON type and the value that was received.
pub fn count_value(value: &Value) -> Result<OccurrenceMap> {
    let Value::Array(items) = value else {
        return Err(EngineError::InvalidArgument {
            type_name: json_type_name(value).to_string(),
            value: printable(value)
        });
    };

    let ratings = items
        .iter()
        .map(|item| match item {
            Value::Number(n) => n.to_string().parse::<Rating>(),
            Value::String(s) => s.parse::<Rating>(),
            other => Err(EngineError::InvalidRating(printable(other)))
        })
        .collect::<Result<Vec<Rating>>>()?;

    Ok(count(&ratings))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object"
    }
}

fn printable(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string()
    }
}
