//! Category classification for competitors.
//!
//! Pure, total functions mapping competitor attributes to the labels
//! used as bracket partition keys. Inputs are validated by the roster
//! before they reach this module.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::roster::Sex;

/// Ordered grading vocabulary, lowest rank first.
const BELT_RANKS: [&str; 10] = [
    "White", "Grey", "Yellow", "Orange", "Green", "Blue", "Purple", "Brown", "Black", "Red",
];

/// Rank position for belt labels outside the grading vocabulary.
/// Unknown belts sort after every recognized belt.
pub const UNRANKED_BELT: u8 = 99;

/// Map a belt label to its rank position (1..=10).
///
/// Labels outside the vocabulary map to [`UNRANKED_BELT`]. The rank is
/// only ever used for ordering groups; group membership compares the
/// label itself.
pub fn belt_order(belt: &str) -> u8 {
    BELT_RANKS
        .iter()
        .position(|&rank| rank == belt)
        .map_or(UNRANKED_BELT, |idx| (idx + 1) as u8)
}

/// Age category. Bands are contiguous and exhaustive over positive
/// ages, inclusive on the upper bound.
///
/// The derived `Ord` follows the fixed band sequence used to order
/// groups within a belt.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum AgeCategory {
    Kids,
    Juvenile,
    Adult,
    Master1,
    Master2,
    Master3Plus,
}

impl AgeCategory {
    /// Classify an age in whole years into its band.
    pub fn for_age(age: u32) -> Self {
        match age {
            0..=15 => Self::Kids,
            16..=17 => Self::Juvenile,
            18..=29 => Self::Adult,
            30..=35 => Self::Master1,
            36..=40 => Self::Master2,
            _ => Self::Master3Plus,
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Kids => "Kids",
            Self::Juvenile => "Juvenile",
            Self::Adult => "Adult",
            Self::Master1 => "Master 1",
            Self::Master2 => "Master 2",
            Self::Master3Plus => "Master 3+",
        };
        write!(f, "{repr}")
    }
}

/// Weight class band.
///
/// The numeric thresholds differ by sex, but both ladders have the same
/// five bands with an unbounded top class. Group membership compares
/// the band, never the raw weight.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum WeightClass {
    RoosterFeather,
    FeatherLight,
    MiddleMediumHeavy,
    HeavySuperHeavy,
    UltraHeavy,
}

impl WeightClass {
    /// Inclusive upper bounds (kilograms) for the first four bands.
    fn thresholds(sex: Sex) -> [f64; 4] {
        match sex {
            Sex::Male => [65.0, 75.0, 85.0, 95.0],
            Sex::Female => [55.0, 65.0, 75.0, 85.0],
        }
    }

    /// Classify a weight into its band for the given sex.
    ///
    /// Weights above the last threshold fall into the unbounded top
    /// class.
    pub fn for_weight(weight: f64, sex: Sex) -> Self {
        let [rooster, feather, middle, heavy] = Self::thresholds(sex);
        if weight <= rooster {
            Self::RoosterFeather
        } else if weight <= feather {
            Self::FeatherLight
        } else if weight <= middle {
            Self::MiddleMediumHeavy
        } else if weight <= heavy {
            Self::HeavySuperHeavy
        } else {
            Self::UltraHeavy
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::RoosterFeather => "Rooster/Feather",
            Self::FeatherLight => "Feather/Light",
            Self::MiddleMediumHeavy => "Middle/Medium-Heavy",
            Self::HeavySuperHeavy => "Heavy/Super-Heavy",
            Self::UltraHeavy => "Ultra-Heavy",
        };
        write!(f, "{repr}")
    }
}
