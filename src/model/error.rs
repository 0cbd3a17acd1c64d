use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid argument: expected a sequence of ratings, but got {type_name}. {value}")]
    InvalidArgument { type_name: String, value: String },

    #[error("Invalid rating provided. {0} is not a non-negative rating")]
    InvalidRating(String),

    #[error("No entry for rating {rating} in {table}")]
    MissingTableEntry { rating: String, table: String },

    #[error("Invalid challenge rating provided. {0} is not valid for the power decay table")]
    InvalidChallengeRating(String),

    #[error("Invalid party level provided. {level} is not valid for challenge rating {challenge_rating}")]
    InvalidPartyLevel { level: String, challenge_rating: String },

    #[error("Invalid party size provided. {0} is not between 1 and 10")]
    InvalidPartySize(u32),

    #[error("Difficulty overflowed: {enemy_power} enemy power against {friendly_power} friendly power")]
    DifficultyOverflow { enemy_power: String, friendly_power: String },

    #[error("Malformed power decay table: {0}")]
    DecayTable(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error)
}
