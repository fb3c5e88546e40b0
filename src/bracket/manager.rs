//! Draw manager: produces a complete bracket draw from the roster.

use std::sync::Arc;

use rand::Rng;
use thiserror::Error;

use super::models::{Draw, DrawNotice, Group};
use super::{grouper, pairing, rounds};
use crate::roster::{Competitor, RosterError, RosterRepository};

/// Draw errors
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Roster unavailable: {0}")]
    Roster(#[from] RosterError),
}

pub type DrawResult<T> = Result<T, DrawError>;

/// Generate a complete draw from a competitor snapshot.
///
/// Group order and bracket shape are deterministic for a given roster;
/// pairing order within each group is randomized on every call.
pub fn generate_draw(competitors: &[Competitor]) -> Draw {
    generate_draw_with(competitors, &mut rand::rng())
}

/// Same as [`generate_draw`] with a caller-supplied RNG.
pub fn generate_draw_with<R: Rng + ?Sized>(competitors: &[Competitor], rng: &mut R) -> Draw {
    if competitors.len() < 2 {
        return Draw {
            notice: Some(DrawNotice::InsufficientCompetitors),
            groups: Vec::new(),
        };
    }

    let mut groups = Vec::new();
    let mut pairable_groups = 0usize;

    for (key, members) in grouper::partition(competitors) {
        if members.len() >= 2 {
            pairable_groups += 1;
        }

        let pairings = pairing::draw_pairings(&members, rng);
        let rounds = if pairings.singleton {
            Vec::new()
        } else {
            rounds::build_rounds(&pairings.matchups, &pairings.byes)
        };

        groups.push(Group {
            key,
            members: members.into_iter().map(|c| c.name).collect(),
            matchups: pairings.matchups,
            byes: pairings.byes,
            singleton: pairings.singleton,
            rounds,
        });
    }

    // Groups exist but none holds an eligible pair; callers still get
    // the full singleton list so they can show per-group notices.
    let notice = if pairable_groups == 0 {
        Some(DrawNotice::NoPairingsFormed)
    } else {
        None
    };

    log::debug!(
        "Drew {} groups, {} with matchups",
        groups.len(),
        pairable_groups
    );

    Draw { notice, groups }
}

/// Draw manager backed by a roster repository.
#[derive(Clone)]
pub struct DrawManager {
    roster: Arc<dyn RosterRepository>,
}

impl DrawManager {
    /// Create a new draw manager
    pub fn new(roster: Arc<dyn RosterRepository>) -> Self {
        Self { roster }
    }

    /// Fetch a fresh roster snapshot and draw brackets from it.
    ///
    /// Each call takes its own snapshot, so concurrent draws never
    /// share mutable state. A roster failure surfaces here and no draw
    /// is attempted on partial data.
    pub async fn generate(&self) -> DrawResult<Draw> {
        let competitors = self.roster.list().await?;
        log::info!("Generating draw for {} competitors", competitors.len());
        Ok(generate_draw(&competitors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Sex;
    use chrono::Utc;

    fn competitor(name: &str, sex: Sex, age: u32, weight: f64, belt: &str) -> Competitor {
        Competitor {
            id: 0,
            name: name.to_string(),
            sex,
            age,
            weight,
            height: 170,
            belt: belt.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_roster_reports_insufficient_competitors() {
        let draw = generate_draw(&[]);
        assert_eq!(draw.notice, Some(DrawNotice::InsufficientCompetitors));
        assert!(draw.groups.is_empty());
    }

    #[test]
    fn test_single_competitor_reports_insufficient_competitors() {
        let roster = vec![competitor("Alone", Sex::Male, 25, 70.0, "Blue")];
        let draw = generate_draw(&roster);
        assert_eq!(draw.notice, Some(DrawNotice::InsufficientCompetitors));
        assert!(draw.groups.is_empty());
    }

    #[test]
    fn test_two_eligible_competitors_draw_a_final() {
        let roster = vec![
            competitor("A", Sex::Male, 25, 70.0, "Blue"),
            competitor("B", Sex::Male, 27, 72.0, "Blue"),
        ];
        let draw = generate_draw(&roster);

        assert!(draw.notice.is_none());
        assert_eq!(draw.groups.len(), 1);

        let group = &draw.groups[0];
        assert_eq!(group.matchups.len(), 1);
        assert!(group.byes.is_empty());
        assert!(!group.singleton);
        assert_eq!(group.rounds.len(), 1);
        assert_eq!(group.rounds[0].title.to_string(), "Final");
    }

    #[test]
    fn test_all_singleton_groups_report_no_pairings() {
        // Same belt and age, different sexes: two singleton groups
        let roster = vec![
            competitor("A", Sex::Male, 25, 70.0, "Blue"),
            competitor("B", Sex::Female, 25, 60.0, "Blue"),
        ];
        let draw = generate_draw(&roster);

        assert_eq!(draw.notice, Some(DrawNotice::NoPairingsFormed));
        assert_eq!(draw.groups.len(), 2);
        for group in &draw.groups {
            assert!(group.singleton);
            assert_eq!(group.byes.len(), 1);
            assert!(group.matchups.is_empty());
            assert!(group.rounds.is_empty());
        }
    }

    #[test]
    fn test_group_invariant_holds_across_a_mixed_roster() {
        let roster = vec![
            competitor("A", Sex::Male, 25, 70.0, "Blue"),
            competitor("B", Sex::Male, 26, 71.0, "Blue"),
            competitor("C", Sex::Male, 27, 69.0, "Blue"),
            competitor("D", Sex::Female, 30, 60.0, "White"),
            competitor("E", Sex::Female, 31, 61.0, "White"),
            competitor("F", Sex::Male, 12, 40.0, "Grey"),
        ];
        let draw = generate_draw(&roster);

        assert!(draw.notice.is_none());
        for group in &draw.groups {
            assert_eq!(
                group.matchups.len() * 2 + group.byes.len(),
                group.members.len()
            );
            assert_eq!(group.singleton, group.members.len() == 1);
            if group.singleton {
                assert!(group.rounds.is_empty());
            } else {
                assert!(!group.rounds.is_empty());
                assert_eq!(group.rounds.last().unwrap().slots.len(), 1);
            }
        }
    }

    #[test]
    fn test_five_same_category_competitors_get_an_eight_bracket() {
        let roster: Vec<Competitor> = (0..5)
            .map(|i| competitor(&format!("C{i}"), Sex::Male, 25, 70.0, "Blue"))
            .collect();
        let draw = generate_draw(&roster);

        assert_eq!(draw.groups.len(), 1);
        let group = &draw.groups[0];
        assert_eq!(group.matchups.len(), 2);
        assert_eq!(group.byes.len(), 1);

        let titles: Vec<String> = group.rounds.iter().map(|r| r.title.to_string()).collect();
        assert_eq!(titles, vec!["Quarterfinal", "Semifinal", "Final"]);
    }

    #[tokio::test]
    async fn test_manager_draws_from_repository_snapshot() {
        use crate::roster::{InMemoryRoster, NewCompetitor};

        let roster = InMemoryRoster::new();
        for (name, weight) in [("A", 70.0), ("B", 72.0)] {
            roster
                .create(NewCompetitor {
                    name: name.to_string(),
                    sex: Sex::Male,
                    age: 25,
                    weight,
                    height: 175,
                    belt: "Blue".to_string(),
                })
                .await
                .unwrap();
        }

        let manager = DrawManager::new(Arc::new(roster));
        let draw = manager.generate().await.unwrap();
        assert!(draw.notice.is_none());
        assert_eq!(draw.groups.len(), 1);
        assert_eq!(draw.groups[0].matchups.len(), 1);
    }
}
