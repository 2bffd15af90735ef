//! Day anchoring: tag matches with the day they must (or may earliest) be played on.

use crate::logic::calendar::playable_day_indices;
use crate::models::{DayConfig, FormatProfile, Match, Phase};
use log::{debug, warn};

/// Strategy that tags matches with day hints before scheduling.
pub trait DayAssignment {
    /// Reorder and tag `matches`. `playable` holds the indices of non-off days, ascending.
    fn assign(&self, matches: Vec<Match>, playable: &[u32]) -> Vec<Match>;
}

/// Zone phase over the first two days; knockout round `r` pinned to playable day `r + 2`,
/// places 1-8 on day 5 (or the last playable day).
#[derive(Clone, Copy, Debug, Default)]
pub struct PinnedRounds;

/// Zone phase over the first two days; everything else floored at the third playable day.
#[derive(Clone, Copy, Debug, Default)]
pub struct KnockoutFloor;

/// Day assignment used by a format profile.
pub fn strategy_for(profile: FormatProfile) -> &'static dyn DayAssignment {
    match profile {
        FormatProfile::Evita8x3 => &PinnedRounds,
        FormatProfile::Evita8x3Flex => &KnockoutFloor,
    }
}

/// Tag matches for the days in `days` following `profile`.
pub fn assign_days(matches: Vec<Match>, days: &[DayConfig], profile: FormatProfile) -> Vec<Match> {
    let playable = playable_day_indices(days);
    if playable.is_empty() {
        warn!("No playable days; matches left without day hints");
        return matches;
    }
    strategy_for(profile).assign(matches, &playable)
}

/// Playable day at `pos`, or the last playable day when there are fewer.
fn day_at(playable: &[u32], pos: usize) -> Option<u32> {
    let day = playable.get(pos).or_else(|| playable.last()).copied();
    if playable.len() <= pos {
        debug!("Only {} playable days, day {} folded onto {:?}", playable.len(), pos + 1, day);
    }
    day
}

/// Order zone-phase matches round by round, alternating zone halves.
///
/// In odd rounds zones at even positions go first, in even rounds zones at odd positions
/// go first. Matches of the same zone and round keep their generated order.
pub fn interleave_zone_matches(zone_matches: Vec<Match>) -> Vec<Match> {
    let mut zones: Vec<String> = Vec::new();
    for m in &zone_matches {
        if !zones.contains(&m.zone) {
            zones.push(m.zone.clone());
        }
    }
    let max_round = zone_matches.iter().map(|m| m.round).max().unwrap_or(0);

    let evens: Vec<&String> = zones.iter().step_by(2).collect();
    let odds: Vec<&String> = zones.iter().skip(1).step_by(2).collect();

    let mut remaining = zone_matches;
    let mut ordered = Vec::with_capacity(remaining.len());
    for round in 1..=max_round {
        let zone_order = if round % 2 == 1 {
            evens.iter().chain(odds.iter())
        } else {
            odds.iter().chain(evens.iter())
        };
        for zone in zone_order {
            let (take, keep): (Vec<Match>, Vec<Match>) = remaining
                .into_iter()
                .partition(|m| m.round == round && &m.zone == *zone);
            ordered.extend(take);
            remaining = keep;
        }
    }
    ordered.extend(remaining);
    ordered
}

/// Split off the zone phase, interleave it and pin each half to one of the first two days.
/// Returns `(zone_matches, others)`.
fn pin_zone_phase(matches: Vec<Match>, playable: &[u32]) -> (Vec<Match>, Vec<Match>) {
    let (zone_matches, others): (Vec<Match>, Vec<Match>) =
        matches.into_iter().partition(|m| m.phase == Phase::Zones);

    let mut zone_matches = interleave_zone_matches(zone_matches);
    let first_day_count = zone_matches.len().div_ceil(2);
    let first = day_at(playable, 0);
    let second = day_at(playable, 1);
    for (i, m) in zone_matches.iter_mut().enumerate() {
        m.preferred_day_index = if i < first_day_count { first } else { second };
    }
    (zone_matches, others)
}

impl DayAssignment for PinnedRounds {
    fn assign(&self, matches: Vec<Match>, playable: &[u32]) -> Vec<Match> {
        let (mut ordered, mut others) = pin_zone_phase(matches, playable);
        let final_day = day_at(playable, 4);
        for m in &mut others {
            m.preferred_day_index = if m.phase == Phase::Placement1To8 {
                final_day
            } else {
                // round 1 -> third day, round 2 -> fourth, round 3 -> fifth
                day_at(playable, (m.round as usize + 1).min(4))
            };
        }
        ordered.extend(others);
        ordered
    }
}

impl DayAssignment for KnockoutFloor {
    fn assign(&self, matches: Vec<Match>, playable: &[u32]) -> Vec<Match> {
        let (mut ordered, mut others) = pin_zone_phase(matches, playable);
        let floor = day_at(playable, 2);
        for m in &mut others {
            m.min_day_index = floor;
        }
        ordered.extend(others);
        ordered
    }
}
