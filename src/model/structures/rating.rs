use std::{cmp::Ordering, fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{
    constants::{MAX_CHALLENGE_RATING, MAX_LEVEL},
    error::{EngineError, Result}
};

/// A challenge rating or character level.
///
/// Ratings are kept as reduced fractions so that values such as `1/8` are exact
/// lookup keys. Ordering is numeric, and the [`Display`](fmt::Display) form is the
/// canonical key used by the power decay table: whole numbers as plain digits,
/// everything else as `numerator/denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rating {
    numerator: u64,
    denominator: u64
}

impl Rating {
    pub const ZERO: Rating = Rating::whole(0);

    pub fn new(numerator: u64, denominator: u64) -> Result<Rating> {
        if denominator == 0 {
            return Err(EngineError::InvalidRating(format!("{}/{}", numerator, denominator)));
        }

        let divisor = gcd(numerator, denominator);

        Ok(Rating {
            numerator: numerator / divisor,
            denominator: denominator / divisor
        })
    }

    pub const fn whole(value: u64) -> Rating {
        Rating {
            numerator: value,
            denominator: 1
        }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn is_whole(&self) -> bool {
        self.denominator == 1
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.numerator) / Decimal::from(self.denominator)
    }

    /// Every legal challenge rating, ascending: 0, 1/8, 1/4, 1/2, then 1 through 30.
    pub fn challenge_ratings() -> impl Iterator<Item = Rating> {
        [
            Rating::ZERO,
            Rating {
                numerator: 1,
                denominator: 8
            },
            Rating {
                numerator: 1,
                denominator: 4
            },
            Rating {
                numerator: 1,
                denominator: 2
            }
        ]
        .into_iter()
        .chain((1..=MAX_CHALLENGE_RATING).map(Rating::whole))
    }

    /// Every legal character level, ascending.
    pub fn levels() -> impl Iterator<Item = Rating> {
        (1..=MAX_LEVEL).map(Rating::whole)
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a.max(1)
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as u128 * other.denominator as u128;
        let rhs = other.numerator as u128 * self.denominator as u128;

        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::ZERO
    }
}

impl From<u32> for Rating {
    fn from(value: u32) -> Self {
        Rating::whole(value as u64)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rating {
    type Err = EngineError;

    /// Accepts `n/d`, whole numbers and finite decimals such as `0.125`.
    fn from_str(s: &str) -> Result<Rating> {
        let text = s.trim();
        let invalid = || EngineError::InvalidRating(text.to_string());

        if let Some((numerator, denominator)) = text.split_once('/') {
            let numerator = numerator.trim().parse::<u64>().map_err(|_| invalid())?;
            let denominator = denominator.trim().parse::<u64>().map_err(|_| invalid())?;

            return Rating::new(numerator, denominator).map_err(|_| invalid());
        }

        let value = Decimal::from_str(text).map_err(|_| invalid())?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(invalid());
        }

        // Decimal never carries more than 28 fractional digits, but 10^scale must fit a u64
        let scale = value.scale();
        if scale > 18 {
            return Err(invalid());
        }

        let numerator = u64::try_from(value.mantissa().unsigned_abs()).map_err(|_| invalid())?;
        Rating::new(numerator, 10u64.pow(scale))
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Rating, D::Error> {
        deserializer.deserialize_any(RatingVisitor)
    }
}

struct RatingVisitor;

impl de::Visitor<'_> for RatingVisitor {
    type Value = Rating;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative number or a fraction string such as \"1/8\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Rating, E> {
        Ok(Rating::whole(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Rating, E> {
        u64::try_from(v)
            .map(Rating::whole)
            .map_err(|_| E::custom(EngineError::InvalidRating(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Rating, E> {
        // The shortest round-trip representation of 0.125 is "0.125"
        v.to_string().parse().map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Rating, E> {
        v.parse().map_err(E::custom)
    }
}
