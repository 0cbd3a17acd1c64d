use std::{fs, path::PathBuf, str::FromStr};

use clap::{Parser, ValueEnum};

use crate::model::{
    encounter::{uniform_party, Encounter, EncounterDocument},
    error::{EngineError, Result},
    structures::rating::Rating
};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Challenge Rated",
    author = "Challenge Rated",
    long_about = "Scores the difficulty of tabletop combat encounters from party levels and creature challenge ratings"
)]
pub struct Args {
    /// Challenge ratings of one wave of enemies, comma separated.
    /// Fractions may be written as 1/8 or 0.125.
    /// Repeat the flag once per wave: -e 5,3,2 -e 8
    #[arg(short = 'e', long = "enemies", value_name = "RATINGS")]
    pub waves: Vec<Wave>,

    /// Challenge ratings of allies fighting with the party, comma separated
    #[arg(short, long, value_name = "RATINGS", value_delimiter = ',')]
    pub allies: Vec<Rating>,

    /// Level of every party member, comma separated
    #[arg(
        short,
        long,
        value_name = "LEVELS",
        value_delimiter = ',',
        conflicts_with_all = ["party_size", "party_level"]
    )]
    pub party_levels: Vec<Rating>,

    /// Number of players in a party where everyone shares the same level
    #[arg(long, requires = "party_level")]
    pub party_size: Option<u32>,

    /// Level shared by every player, used together with --party-size
    #[arg(long, requires = "party_size")]
    pub party_level: Option<u32>,

    /// Skips scaling party Power down against a single overwhelming enemy
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_power_decay: bool,

    /// Reads the encounter from a JSON document instead of the roster flags
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with_all = ["waves", "allies", "party_levels", "party_size", "party_level"]
    )]
    pub input: Option<PathBuf>,

    /// Power decay table to use instead of the built-in one
    #[arg(long, env = "DECAY_TABLE", value_name = "FILE")]
    pub decay_table: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json
}

/// Enemy challenge ratings of a single wave.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wave(pub Vec<Rating>);

impl FromStr for Wave {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Wave> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Rating::from_str)
            .collect::<Result<Vec<Rating>>>()
            .map(Wave)
    }
}

impl Args {
    /// Builds the encounter described by the arguments.
    pub fn encounter(&self) -> Result<Encounter> {
        if let Some(path) = &self.input {
            let json = fs::read_to_string(path)?;
            let mut encounter = EncounterDocument::from_json(&json)?.into_encounter();
            if self.no_power_decay {
                encounter.account_for_power_decay = false;
            }

            return Ok(encounter);
        }

        let party_levels = match (self.party_level, self.party_size) {
            (Some(level), Some(size)) => uniform_party(level, size)?,
            _ => self.party_levels.clone()
        };

        let waves = if self.waves.is_empty() {
            vec![Vec::new()]
        } else {
            self.waves.iter().map(|wave| wave.0.clone()).collect()
        };

        Ok(Encounter {
            party_levels,
            ally_challenge_ratings: self.allies.clone(),
            waves,
            account_for_power_decay: !self.no_power_decay
        })
    }
}
