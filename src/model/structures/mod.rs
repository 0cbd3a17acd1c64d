pub mod creature_side;
pub mod difficulty_result;
pub mod encounter_difficulty;
pub mod encounter_input;
pub mod rating;
