//! Bracket draw data models.
//!
//! Everything here is recomputed on each draw and carries no identity
//! across runs; only roster records persist.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::categories::{AgeCategory, WeightClass};
use crate::roster::{Competitor, Sex};

/// The four-part key that defines opponent eligibility.
///
/// Two competitors are eligible opponents iff their keys are equal. The
/// belt is compared as a label; its grading rank is only used when
/// ordering groups.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct CategoryKey {
    pub sex: Sex,
    pub belt: String,
    pub age_category: AgeCategory,
    pub weight_class: WeightClass,
}

impl CategoryKey {
    /// Derive the key for a competitor.
    pub fn for_competitor(competitor: &Competitor) -> Self {
        Self {
            sex: competitor.sex,
            belt: competitor.belt.clone(),
            age_category: AgeCategory::for_age(competitor.age),
            weight_class: WeightClass::for_weight(competitor.weight, competitor.sex),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} - {} Belt - {} - {}",
            self.sex, self.belt, self.age_category, self.weight_class
        )
    }
}

/// A drawn match between two eligible opponents.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub competitor_a: String,
    pub competitor_b: String,
}

/// One slot in a bracket round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Slot {
    /// A drawn matchup between two competitors
    Matchup(Matchup),
    /// A competitor advancing without an opponent this round
    Bye { competitor: String },
    /// A slot whose participants are decided by earlier results
    Open,
    /// The single terminal slot reserved for the bracket winner
    Winner,
}

/// Round title, derived from the number of match slots in the round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundTitle {
    Final,
    Semifinal,
    Quarterfinal,
    /// Earlier rounds are titled by entrant count ("Round of 16", ...)
    RoundOf(u32),
}

impl RoundTitle {
    /// Title for a round with the given number of match slots.
    ///
    /// Titles are assigned from the final backwards, so they stay
    /// correct for any bracket size instead of walking a fixed list.
    pub fn for_slot_count(slots: usize) -> Self {
        match slots {
            0 | 1 => Self::Final,
            2 => Self::Semifinal,
            4 => Self::Quarterfinal,
            n => Self::RoundOf(2 * n as u32),
        }
    }
}

impl fmt::Display for RoundTitle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Final => write!(f, "Final"),
            Self::Semifinal => write!(f, "Semifinal"),
            Self::Quarterfinal => write!(f, "Quarterfinal"),
            Self::RoundOf(entrants) => write!(f, "Round of {entrants}"),
        }
    }
}

/// A titled, ordered sequence of match slots within a group's bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub title: RoundTitle,
    pub slots: Vec<Slot>,
}

/// All competitors sharing one category key, with their drawn pairings.
///
/// Invariant: `2 * matchups.len() + byes.len() == members.len()`, and
/// `singleton` is true iff the group has exactly one member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub key: CategoryKey,
    /// Member names in roster order
    pub members: Vec<String>,
    /// Drawn first-round matchups
    pub matchups: Vec<Matchup>,
    /// Competitors advancing on a first-round bye
    pub byes: Vec<String>,
    /// True when the group has one member and no bracket is drawn
    pub singleton: bool,
    /// Bracket rounds, first round to final; empty for singleton groups
    pub rounds: Vec<Round>,
}

/// Notice attached to a draw that produced no usable pairings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DrawNotice {
    /// Fewer than two competitors on the roster; no groups were drawn
    InsufficientCompetitors,
    /// Groups exist but every one is a singleton; no matchups drawn
    NoPairingsFormed,
}

impl fmt::Display for DrawNotice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::InsufficientCompetitors => {
                "At least two competitors are needed to draw brackets"
            }
            Self::NoPairingsFormed => {
                "No category (sex, belt, age, weight) holds two or more competitors"
            }
        };
        write!(f, "{repr}")
    }
}

/// A complete bracket draw over the roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    /// Present when the draw produced no usable pairings
    pub notice: Option<DrawNotice>,
    /// Groups in deterministic category order
    pub groups: Vec<Group>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_category_key_derivation() {
        let competitor = Competitor {
            id: 1,
            name: "Maria Souza".to_string(),
            sex: Sex::Female,
            age: 30,
            weight: 60.2,
            height: 160,
            belt: "White".to_string(),
            created_at: Utc::now(),
        };

        let key = CategoryKey::for_competitor(&competitor);
        assert_eq!(key.sex, Sex::Female);
        assert_eq!(key.belt, "White");
        assert_eq!(key.age_category, AgeCategory::Master1);
        assert_eq!(key.weight_class, WeightClass::FeatherLight);

        // Deriving twice from the same record yields the same key
        assert_eq!(key, CategoryKey::for_competitor(&competitor));
    }

    #[test]
    fn test_round_title_from_slot_count() {
        assert_eq!(RoundTitle::for_slot_count(1), RoundTitle::Final);
        assert_eq!(RoundTitle::for_slot_count(2), RoundTitle::Semifinal);
        assert_eq!(RoundTitle::for_slot_count(4), RoundTitle::Quarterfinal);
        assert_eq!(RoundTitle::for_slot_count(8), RoundTitle::RoundOf(16));
        assert_eq!(RoundTitle::for_slot_count(16), RoundTitle::RoundOf(32));
    }

    #[test]
    fn test_round_title_display() {
        assert_eq!(RoundTitle::Final.to_string(), "Final");
        assert_eq!(RoundTitle::Semifinal.to_string(), "Semifinal");
        assert_eq!(RoundTitle::Quarterfinal.to_string(), "Quarterfinal");
        assert_eq!(RoundTitle::RoundOf(16).to_string(), "Round of 16");
    }

    #[test]
    fn test_category_key_display_reads_like_a_sheet_header() {
        let key = CategoryKey {
            sex: Sex::Male,
            belt: "Blue".to_string(),
            age_category: AgeCategory::Adult,
            weight_class: WeightClass::FeatherLight,
        };
        assert_eq!(key.to_string(), "Male - Blue Belt - Adult - Feather/Light");
    }
}
