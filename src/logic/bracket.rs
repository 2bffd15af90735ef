//! Bracket generation for the 8x3 format: zones, second-stage groups and placement brackets.

use crate::logic::round_robin::{round_robin_matches, Rotation};
use crate::logic::seed_tables::{Entry, FormatTable, LowerSeeding};
use crate::logic::zones::{validate_zones, Zone};
use crate::models::{FixtureError, Match, Phase, Pool, Seed, Team};
use log::{debug, info};

/// Options for bracket generation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BracketOptions {
    /// 3-team zones play home and away. 2-team zones always do.
    pub double_round: bool,
}

/// Generate every match of the tournament from the team list.
///
/// Validates the zone layout first; on error nothing is generated. Matches come out in
/// stage order: zones, groups A1/A2, places 1-8, bracket 9-16, bracket 17-24. Bracket
/// matches carry structural codes (`P9_n`, `P17_n`) that later rounds reference.
pub fn generate_bracket(teams: &[Team], options: BracketOptions) -> Result<Vec<Match>, FixtureError> {
    let (zones, table) = validate_zones(teams)?;

    let mut matches = Vec::new();
    matches.extend(zone_phase(&zones, options.double_round));
    matches.extend(second_stage(table));
    matches.extend(placement_1_to_8());
    matches.extend(placement_9_to_16(table));
    matches.extend(placement_17_to_24(table));

    let byes = matches.iter().filter(|m| m.is_bye).count();
    info!(
        "Generated {} matches ({} byes) for {} teams in {} zones",
        matches.len(),
        byes,
        teams.len(),
        zones.len()
    );
    Ok(matches)
}

/// Round robin inside every zone.
fn zone_phase(zones: &[Zone], double_round: bool) -> Vec<Match> {
    zones
        .iter()
        .flat_map(|zone| {
            let seeds: Vec<Seed> = zone.team_ids.iter().map(|id| Seed::team(id.as_str())).collect();
            let double = zone.team_ids.len() == 2 || double_round;
            debug!("Zone {}: {} teams, double round: {}", zone.label, seeds.len(), double);
            round_robin_matches(&seeds, double, &zone.label, Phase::Zones, Rotation::Left)
        })
        .collect()
}

/// Groups A1 and A2: single round robin among zone winners, rotating right.
fn second_stage(table: &FormatTable) -> Vec<Match> {
    [(Pool::A1, &table.pool_a1), (Pool::A2, &table.pool_a2)]
        .into_iter()
        .flat_map(|(pool, entries)| {
            let seeds: Vec<Seed> = entries.iter().map(|e| e.to_seed()).collect();
            round_robin_matches(
                &seeds,
                false,
                pool.label(),
                Phase::SecondStage(pool),
                Rotation::Right,
            )
        })
        .collect()
}

/// Same place of A1 against A2 decides places 1-8.
fn placement_1_to_8() -> Vec<Match> {
    let phase = Phase::Placement1To8;
    (1..=4)
        .map(|place| {
            let home = Seed::GroupPlace {
                place,
                group: Pool::A1.label().to_string(),
            };
            let away = Seed::GroupPlace {
                place,
                group: Pool::A2.label().to_string(),
            };
            Match::new(phase.zone_label().unwrap_or_default(), phase, 1, home, away)
        })
        .collect()
}

fn code(prefix: &str, n: usize) -> String {
    format!("{prefix}_{n}")
}

/// Rounds 2 and 3 of a four-pairing placement bracket whose first round is `c1..c4`.
///
/// Round 2: winners of (1,2) and (3,4) in the winners path, losers in the losers path.
/// Round 3: winners path decides the first and third place of the band, losers path the
/// fifth and seventh.
fn later_rounds(prefix: &str, phase: Phase, bye_losers_path: bool) -> Vec<Match> {
    let c = |n| code(prefix, n);
    let w = |n| Seed::winner_of(c(n));
    let l = |n| Seed::loser_of(c(n));
    vec![
        Match::bracket(&c(5), phase, 2, w(1), w(2)),
        Match::bracket(&c(6), phase, 2, w(3), w(4)),
        Match::bracket(&c(7), phase, 2, l(1), l(2)).into_bye(bye_losers_path),
        Match::bracket(&c(8), phase, 2, l(3), l(4)).into_bye(bye_losers_path),
        Match::bracket(&c(9), phase, 3, w(5), w(6)),
        Match::bracket(&c(10), phase, 3, l(5), l(6)),
        Match::bracket(&c(11), phase, 3, w(7), w(8)).into_bye(bye_losers_path),
        Match::bracket(&c(12), phase, 3, l(7), l(8)).into_bye(bye_losers_path),
    ]
}

fn first_round(prefix: &str, phase: Phase, round: u32, pairings: &[(Entry, Entry)]) -> Vec<Match> {
    pairings
        .iter()
        .enumerate()
        .map(|(i, (home, away))| {
            Match::bracket(&code(prefix, i + 1), phase, round, home.to_seed(), away.to_seed())
                .into_bye(home.is_bye() || away.is_bye())
        })
        .collect()
}

/// Places 9-16, seeded mostly from zone runners-up.
fn placement_9_to_16(table: &FormatTable) -> Vec<Match> {
    let phase = Phase::Placement9To16;
    let mut matches = first_round("P9", phase, 1, &table.upper_first_round);
    matches.extend(later_rounds("P9", phase, false));
    matches
}

/// Places 17-24, seeded from zone third places. Layout depends on the team count.
fn placement_17_to_24(table: &FormatTable) -> Vec<Match> {
    let phase = Phase::Placement17To24;
    match &table.lower {
        LowerSeeding::SemisOnly(semis) => {
            let mut matches = first_round("P17", phase, 2, semis);
            matches.push(Match::bracket(
                "P17_3",
                phase,
                3,
                Seed::winner_of("P17_1"),
                Seed::winner_of("P17_2"),
            ));
            matches.push(Match::bracket(
                "P17_4",
                phase,
                3,
                Seed::loser_of("P17_1"),
                Seed::loser_of("P17_2"),
            ));
            matches
        }
        LowerSeeding::Full {
            first_round: pairings,
            bye_losers_path,
        } => {
            let mut matches = first_round("P17", phase, 1, pairings);
            matches.extend(later_rounds("P17", phase, *bye_losers_path));
            matches
        }
    }
}
