//! Data structures for the fixture planner: teams, matches, days, fields, tournament snapshot.

mod calendar;
mod game;
mod team;
mod tournament;

pub use calendar::{ClockTime, DayConfig, DayType, Field, FieldId, MINUTES_PER_DAY};
pub use game::{
    from_records, to_records, Match, MatchCode, MatchId, MatchRecord, Outcome, Phase, Pool, Seed,
    BYE,
};
pub use team::{normalize_zone, Team, TeamId};
pub(crate) use team::generate_team_id;
pub use tournament::{FixtureError, FormatProfile, TournamentSnapshot};
