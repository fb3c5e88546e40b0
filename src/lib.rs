//! # BJJ Brackets
//!
//! A Brazilian jiu-jitsu roster and bracket draw library.
//!
//! The crate keeps a roster of competitors and partitions it into
//! balanced single-elimination bracket groups. Opponents are only ever
//! drawn from competitors identical on all four category keys: sex,
//! belt rank, age category, and weight class.
//!
//! ## Core Modules
//!
//! - [`roster`]: competitor records, validation, and the storage
//!   contract ([`roster::RosterRepository`]) with an in-memory
//!   implementation
//! - [`bracket`]: the draw pipeline: classification, grouping, random
//!   pairing with bye handling, and power-of-two round construction
//!
//! ## Example
//!
//! ```no_run
//! use bjj_brackets::bracket::DrawManager;
//! use bjj_brackets::roster::{InMemoryRoster, NewCompetitor, RosterRepository, Sex};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let roster = Arc::new(InMemoryRoster::new());
//!     roster
//!         .create(NewCompetitor {
//!             name: "Weder Silva".to_string(),
//!             sex: Sex::Male,
//!             age: 25,
//!             weight: 75.5,
//!             height: 175,
//!             belt: "Blue".to_string(),
//!         })
//!         .await?;
//!
//!     let manager = DrawManager::new(roster);
//!     let draw = manager.generate().await?;
//!     for group in &draw.groups {
//!         println!("{}: {} matchups", group.key, group.matchups.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Bracket draw pipeline: categories, grouping, pairing, rounds.
pub mod bracket;
pub use bracket::{Draw, DrawError, DrawManager, DrawNotice, DrawResult, generate_draw};

/// Competitor roster and storage contract.
pub mod roster;
pub use roster::{
    Competitor, CompetitorId, InMemoryRoster, NewCompetitor, RosterError, RosterRepository,
    RosterResult, Sex,
};
