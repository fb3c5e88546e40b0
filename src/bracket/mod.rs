//! Bracket draw: categorization, grouping, pairing, and round layout.
//!
//! The draw is a pure pipeline over a roster snapshot:
//! - [`categories`]: classify attributes into partition labels
//! - [`grouper`]: partition the roster by (sex, belt, age, weight)
//! - [`pairing`]: shuffle each group into matchups and byes
//! - [`rounds`]: lay the pairings out on a power-of-two bracket
//!
//! ## Example
//!
//! ```
//! use bjj_brackets::bracket::generate_draw;
//! use bjj_brackets::roster::{Competitor, Sex};
//! use chrono::Utc;
//!
//! let roster: Vec<Competitor> = [("Weder", 74.5), ("Carlos", 72.0)]
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, (name, weight))| Competitor {
//!         id: i as i64 + 1,
//!         name: name.to_string(),
//!         sex: Sex::Male,
//!         age: 25,
//!         weight,
//!         height: 175,
//!         belt: "Blue".to_string(),
//!         created_at: Utc::now(),
//!     })
//!     .collect();
//!
//! let draw = generate_draw(&roster);
//! assert!(draw.notice.is_none());
//! assert_eq!(draw.groups.len(), 1);
//! assert_eq!(draw.groups[0].rounds[0].title.to_string(), "Final");
//! ```

pub mod categories;
pub mod grouper;
pub mod manager;
pub mod models;
pub mod pairing;
pub mod rounds;

pub use categories::{AgeCategory, UNRANKED_BELT, WeightClass, belt_order};
pub use manager::{DrawError, DrawManager, DrawResult, generate_draw, generate_draw_with};
pub use models::{CategoryKey, Draw, DrawNotice, Group, Matchup, Round, RoundTitle, Slot};
pub use pairing::{Pairings, draw_pairings};
pub use rounds::{bracket_size, build_rounds};
