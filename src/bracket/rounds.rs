//! Round construction for a group's elimination bracket.

use super::models::{Matchup, Round, RoundTitle, Slot};

/// Smallest power-of-two bracket capacity for the participant count,
/// with a floor of 2.
pub fn bracket_size(total_participants: usize) -> usize {
    total_participants.next_power_of_two().max(2)
}

/// Build the round sequence for a group's drawn pairings, first round
/// to final.
///
/// The first round has `bracket_size / 2` slots filled in order: drawn
/// matchups, then byes, then open slots up to capacity. Subsequent
/// rounds halve the slot count down to a single terminal slot holding
/// the winner placeholder. Returns no rounds when fewer than two
/// participants are present; callers exclude singleton groups before
/// getting here.
pub fn build_rounds(matchups: &[Matchup], byes: &[String]) -> Vec<Round> {
    let total_participants = matchups.len() * 2 + byes.len();
    if total_participants < 2 {
        return Vec::new();
    }

    let mut slot_count = bracket_size(total_participants) / 2;

    let mut slots: Vec<Slot> = Vec::with_capacity(slot_count);
    slots.extend(matchups.iter().cloned().map(Slot::Matchup));
    slots.extend(byes.iter().cloned().map(|competitor| Slot::Bye { competitor }));
    // Pairing yields at most one bye, so the drawn slots always fit:
    // |matchups| + 1 <= next_pow2(2*|matchups| + 1) / 2.
    debug_assert!(slots.len() <= slot_count);
    while slots.len() < slot_count {
        slots.push(Slot::Open);
    }

    let mut rounds = vec![Round {
        title: RoundTitle::for_slot_count(slot_count),
        slots,
    }];

    while slot_count > 1 {
        slot_count = slot_count.div_ceil(2);
        let slots = if slot_count == 1 {
            vec![Slot::Winner]
        } else {
            vec![Slot::Open; slot_count]
        };
        rounds.push(Round {
            title: RoundTitle::for_slot_count(slot_count),
            slots,
        });
    }

    rounds
}
