//! Circle-method round robin, generic over the participant token.

use crate::models::{Match, Phase, Seed};

/// Direction the non-fixed positions move between rounds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Rotation {
    /// Position 2 moves to the end: used for team zones.
    #[default]
    Left,
    /// The last position moves to position 2: used for seed groups.
    Right,
}

/// One pairing produced by the round robin.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pairing<T> {
    pub round: u32,
    pub home: T,
    pub away: T,
}

/// Single (or double) round robin over `participants`, rotating left.
pub fn round_robin<T: Clone>(participants: &[Option<T>], double_round: bool) -> Vec<Pairing<T>> {
    round_robin_rotating(participants, double_round, Rotation::Left)
}

/// Single (or double) round robin over `participants`.
///
/// `None` entries are padding and never play. An odd field is padded with one bye so that
/// every round leaves one participant idle. The first position stays fixed and the rest rotate
/// one step per round in the given direction; position `i` meets position `n - 1 - i`. The
/// double round appends the same pairings with home/away swapped and rounds offset by the
/// single-round length.
///
/// Returns nothing when fewer than two real participants are given.
pub fn round_robin_rotating<T: Clone>(
    participants: &[Option<T>],
    double_round: bool,
    rotation: Rotation,
) -> Vec<Pairing<T>> {
    let mut slots: Vec<Option<T>> = participants.iter().filter(|p| p.is_some()).cloned().collect();
    if slots.len() < 2 {
        return Vec::new();
    }
    if slots.len() % 2 != 0 {
        slots.push(None);
    }

    let n = slots.len();
    let rounds = (n - 1) as u32;
    let mut pairings = Vec::with_capacity(n / 2 * (n - 1));

    for round in 1..=rounds {
        for i in 0..n / 2 {
            if let (Some(home), Some(away)) = (&slots[i], &slots[n - 1 - i]) {
                pairings.push(Pairing {
                    round,
                    home: home.clone(),
                    away: away.clone(),
                });
            }
        }
        match rotation {
            Rotation::Left => slots[1..].rotate_left(1),
            Rotation::Right => slots[1..].rotate_right(1),
        }
    }

    if double_round {
        let mirrored: Vec<_> = pairings
            .iter()
            .map(|p| Pairing {
                round: p.round + rounds,
                home: p.away.clone(),
                away: p.home.clone(),
            })
            .collect();
        pairings.extend(mirrored);
    }

    pairings
}

/// Round robin turned into matches tagged with `zone` and `phase`.
pub fn round_robin_matches(
    participants: &[Seed],
    double_round: bool,
    zone: &str,
    phase: Phase,
    rotation: Rotation,
) -> Vec<Match> {
    let slots: Vec<Option<Seed>> = participants.iter().cloned().map(Some).collect();
    round_robin_rotating(&slots, double_round, rotation)
        .into_iter()
        .map(|p| Match::new(zone, phase, p.round, p.home, p.away))
        .collect()
}
