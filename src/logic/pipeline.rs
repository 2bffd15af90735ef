//! End-to-end fixture: generate, anchor days, schedule, renumber.

use crate::logic::bracket::{generate_bracket, BracketOptions};
use crate::logic::calendar::playable_day_indices;
use crate::logic::day_assignment::assign_days;
use crate::logic::renumber::renumber_matches;
use crate::logic::scheduler::{schedule_matches, ScheduleOptions, ScheduleReport};
use crate::models::{
    to_records, DayConfig, Field, FixtureError, FormatProfile, Match, MatchRecord,
    TournamentSnapshot, MINUTES_PER_DAY,
};
use log::{info, warn};
use serde::Serialize;

/// Playable days the format is designed for.
pub const RECOMMENDED_PLAYABLE_DAYS: usize = 5;

/// Result of the full pipeline.
#[derive(Clone, Debug)]
pub struct Fixture {
    /// Matches in chronological order with display codes.
    pub matches: Vec<Match>,
    pub report: ScheduleReport,
    /// Non-fatal problems for the caller to surface.
    pub warnings: Vec<String>,
}

/// Wire shape of a [`Fixture`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureResponse {
    pub matches: Vec<MatchRecord>,
    pub report: ScheduleReport,
    pub warnings: Vec<String>,
}

impl From<&Fixture> for FixtureResponse {
    fn from(f: &Fixture) -> Self {
        Self {
            matches: to_records(&f.matches),
            report: f.report.clone(),
            warnings: f.warnings.clone(),
        }
    }
}

/// Tag matches with day hints for `profile`, then schedule them.
pub fn assign_days_and_schedule(
    matches: Vec<Match>,
    days: &[DayConfig],
    fields: &[Field],
    profile: FormatProfile,
    options: ScheduleOptions,
) -> Result<(Vec<Match>, ScheduleReport), FixtureError> {
    let mut matches = assign_days(matches, days, profile);
    let report = schedule_matches(&mut matches, days, fields, options)?;
    Ok((matches, report))
}

/// Run the whole pipeline on a snapshot. Input errors stop it before any scheduling;
/// scheduling shortfalls only add warnings.
pub fn build_fixture(snapshot: &TournamentSnapshot) -> Result<Fixture, FixtureError> {
    let profile = snapshot.format_profile()?;
    if !(1..MINUTES_PER_DAY).contains(&snapshot.match_duration_minutes) {
        return Err(FixtureError::InvalidDuration);
    }

    let matches = generate_bracket(
        &snapshot.teams,
        BracketOptions {
            double_round: snapshot.double_round,
        },
    )?;

    let mut warnings = Vec::new();
    let playable = playable_day_indices(&snapshot.day_configs).len();
    if playable < RECOMMENDED_PLAYABLE_DAYS {
        let msg = format!(
            "{} playable days configured; this format is planned for {}. The fixture may be incomplete.",
            playable, RECOMMENDED_PLAYABLE_DAYS
        );
        warn!("{}", msg);
        warnings.push(msg);
    }

    let options = ScheduleOptions {
        match_duration_minutes: snapshot.match_duration_minutes,
        rest_min_minutes: snapshot.rest_min_minutes,
    };
    let (mut matches, report) = assign_days_and_schedule(
        matches,
        &snapshot.day_configs,
        &snapshot.fields,
        profile,
        options,
    )?;
    if !report.is_complete() {
        warnings.push(format!(
            "{} matches could not be scheduled; add days or fields",
            report.unscheduled.len()
        ));
    }

    renumber_matches(&mut matches);
    info!(
        "Fixture '{}' ready: {} matches, {} scheduled",
        snapshot.name,
        matches.len(),
        report.scheduled
    );
    Ok(Fixture {
        matches,
        report,
        warnings,
    })
}
