use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::{Display, EnumIter};

use crate::model::{
    constants::{CHALLENGE_RATING_POWER_TABLE, LEVEL_POWER_TABLE},
    power::PowerTable
};

/// Which roster a rating belongs to.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[repr(u8)]
pub enum CreatureSide {
    Enemy = 0,
    Ally = 1,
    Player = 2
}

impl CreatureSide {
    /// "Level" for party members, "CR" for creatures.
    pub fn rating_label(&self) -> &'static str {
        match self {
            CreatureSide::Player => "Level",
            CreatureSide::Enemy | CreatureSide::Ally => "CR"
        }
    }

    pub fn power_table(&self) -> &'static PowerTable {
        match self {
            CreatureSide::Player => &LEVEL_POWER_TABLE,
            CreatureSide::Enemy | CreatureSide::Ally => &CHALLENGE_RATING_POWER_TABLE
        }
    }
}

impl TryFrom<i32> for CreatureSide {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(CreatureSide::Enemy),
            1 => Ok(CreatureSide::Ally),
            2 => Ok(CreatureSide::Player),
            _ => Err(())
        }
    }
}
