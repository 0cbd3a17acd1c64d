use lazy_static::lazy_static;
use rust_decimal::Decimal;

use crate::model::{power::PowerTable, structures::rating::Rating};

// Legal rating ranges
pub const MAX_LEVEL: u64 = 20;
pub const MAX_CHALLENGE_RATING: u64 = 30;
pub const MIN_PARTY_SIZE: u32 = 1;
pub const MAX_PARTY_SIZE: u32 = 10;

// Share of hp lost that is reported as resources spent (0.67)
pub const RESOURCES_SPENT_RATIO: Decimal = Decimal::from_parts(67, 0, 0, false, 2);
pub const PERCENT: Decimal = Decimal::ONE_HUNDRED;

pub const LEVEL_TABLE_NAME: &str = "level power table";
pub const CHALLENGE_RATING_TABLE_NAME: &str = "challenge rating power table";

/// Power of a single party member, by character level.
const LEVEL_POWER: [(u64, u32); 20] = [
    (1, 45),
    (2, 68),
    (3, 95),
    (4, 120),
    (5, 165),
    (6, 180),
    (7, 205),
    (8, 220),
    (9, 245),
    (10, 265),
    (11, 310),
    (12, 340),
    (13, 355),
    (14, 370),
    (15, 410),
    (16, 420),
    (17, 515),
    (18, 595),
    (19, 655),
    (20, 705)
];

/// Power of a single creature, by challenge rating.
/// Fractional ratings are written as (numerator, denominator).
const CHALLENGE_RATING_POWER: [((u64, u64), u32); 34] = [
    ((0, 1), 1),
    ((1, 8), 5),
    ((1, 4), 10),
    ((1, 2), 16),
    ((1, 1), 20),
    ((2, 1), 26),
    ((3, 1), 37),
    ((4, 1), 48),
    ((5, 1), 60),
    ((6, 1), 65),
    ((7, 1), 70),
    ((8, 1), 85),
    ((9, 1), 85),
    ((10, 1), 95),
    ((11, 1), 105),
    ((12, 1), 115),
    ((13, 1), 120),
    ((14, 1), 125),
    ((15, 1), 130),
    ((16, 1), 140),
    ((17, 1), 150),
    ((18, 1), 160),
    ((19, 1), 165),
    ((20, 1), 180),
    ((21, 1), 200),
    ((22, 1), 225),
    ((23, 1), 250),
    ((24, 1), 275),
    ((25, 1), 300),
    ((26, 1), 325),
    ((27, 1), 350),
    ((28, 1), 375),
    ((29, 1), 400),
    ((30, 1), 425)
];

lazy_static! {
    pub static ref LEVEL_POWER_TABLE: PowerTable = PowerTable::new(
        LEVEL_TABLE_NAME,
        LEVEL_POWER.iter().map(|&(level, power)| (Rating::whole(level), power))
    );
    pub static ref CHALLENGE_RATING_POWER_TABLE: PowerTable = PowerTable::new(
        CHALLENGE_RATING_TABLE_NAME,
        CHALLENGE_RATING_POWER.iter().map(|&((numerator, denominator), power)| {
            // Denominators above are non-zero, so construction cannot fail
            let rating = Rating::new(numerator, denominator).unwrap_or(Rating::ZERO);
            (rating, power)
        })
    );
}
