//! Competitor roster data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{RosterError, RosterResult};

/// Competitor ID type
pub type CompetitorId = i64;

/// Competitor sex, the first partition key when drawing brackets.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Male => "Male",
            Self::Female => "Female",
        };
        write!(f, "{repr}")
    }
}

/// A registered competitor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    /// Identifier assigned by the roster repository
    pub id: CompetitorId,
    /// Competitor name as it appears on the bracket sheet
    pub name: String,
    pub sex: Sex,
    /// Age in whole years
    pub age: u32,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters (recorded on the roster, unused by the draw)
    pub height: u32,
    /// Belt label from the grading vocabulary
    pub belt: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or updating a competitor record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCompetitor {
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    pub weight: f64,
    pub height: u32,
    pub belt: String,
}

impl NewCompetitor {
    /// Validate field constraints before the record reaches storage.
    ///
    /// The draw assumes these hold, so the roster enforces them at the
    /// write path rather than at classification time.
    pub fn validate(&self) -> RosterResult<()> {
        if self.name.trim().is_empty() {
            return Err(RosterError::Invalid("name must not be empty".into()));
        }
        if self.belt.trim().is_empty() {
            return Err(RosterError::Invalid("belt must not be empty".into()));
        }
        if self.age == 0 {
            return Err(RosterError::Invalid("age must be positive".into()));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(RosterError::Invalid(
                "weight must be a positive number".into(),
            ));
        }
        if self.height == 0 {
            return Err(RosterError::Invalid("height must be positive".into()));
        }
        Ok(())
    }

    /// Materialize a competitor record with a repository-assigned id.
    pub fn into_competitor(self, id: CompetitorId, created_at: DateTime<Utc>) -> Competitor {
        Competitor {
            id,
            name: self.name,
            sex: self.sex,
            age: self.age,
            weight: self.weight,
            height: self.height,
            belt: self.belt,
            created_at,
        }
    }
}
