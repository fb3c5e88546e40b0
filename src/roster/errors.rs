//! Roster error types.

use thiserror::Error;

use super::models::CompetitorId;

/// Roster errors
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Competitor not found: {0}")]
    NotFound(CompetitorId),

    #[error("Invalid competitor: {0}")]
    Invalid(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
