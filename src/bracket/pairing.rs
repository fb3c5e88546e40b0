//! Random pairing of group members into first-round matchups.

use rand::Rng;
use rand::seq::SliceRandom;

use super::models::Matchup;
use crate::roster::Competitor;

/// The drawn pairings for one group.
#[derive(Clone, Debug, PartialEq)]
pub struct Pairings {
    pub matchups: Vec<Matchup>,
    pub byes: Vec<String>,
    pub singleton: bool,
}

/// Draw pairings for a group's members.
///
/// Members are put through a uniform in-place shuffle and walked two at
/// a time; each consecutive pair becomes a matchup and an odd member
/// out becomes a bye. A one-member group is flagged singleton with its
/// sole member on a bye. A single pass, intentionally re-randomized on
/// every call.
pub fn draw_pairings<R: Rng + ?Sized>(members: &[Competitor], rng: &mut R) -> Pairings {
    if members.len() == 1 {
        return Pairings {
            matchups: Vec::new(),
            byes: vec![members[0].name.clone()],
            singleton: true,
        };
    }

    let mut order: Vec<&Competitor> = members.iter().collect();
    order.shuffle(rng);

    let mut matchups = Vec::with_capacity(order.len() / 2);
    let mut byes = Vec::new();

    let mut pairs = order.chunks_exact(2);
    for pair in pairs.by_ref() {
        matchups.push(Matchup {
            competitor_a: pair[0].name.clone(),
            competitor_b: pair[1].name.clone(),
        });
    }
    if let [odd_one_out] = pairs.remainder() {
        byes.push(odd_one_out.name.clone());
    }

    Pairings {
        matchups,
        byes,
        singleton: false,
    }
}
