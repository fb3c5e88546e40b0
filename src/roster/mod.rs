//! Competitor roster: records, validation, and the storage contract.
//!
//! The roster owns competitor identity. Bracket generation consumes a
//! snapshot of these records and never writes back.

pub mod errors;
pub mod models;
pub mod repository;

pub use errors::{RosterError, RosterResult};
pub use models::{Competitor, CompetitorId, NewCompetitor, Sex};
pub use repository::{InMemoryRoster, RosterRepository};
