//! Encounter difficulty engine.
//!
//! Rosters of challenge ratings and party levels are turned into Power totals
//! through static lookup tables, friendly Power is optionally scaled by the power
//! decay table, and the squared enemy to friendly ratio is classified into a
//! difficulty band.

pub mod constants;
pub mod decay;
pub mod difficulty;
pub mod encounter;
pub mod error;
pub mod occurrences;
pub mod power;
pub mod structures;

pub use difficulty::{recalculate_difficulty, EncounterCalculator};
pub use error::{EngineError, Result};
