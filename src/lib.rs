//! Fixture planner for the 8x3 Evita format: library with models and pipeline stages.

pub mod logic;
pub mod models;

pub use logic::{
    assign_days, assign_days_and_schedule, build_day_configs, build_day_configs_from_strings,
    build_fixture, build_slots, format_table, generate_bracket, group_zones,
    interleave_zone_matches, natural_cmp, parse_date, playable_day_indices, read_teams_csv,
    renumber_matches, round_robin, round_robin_matches, round_robin_rotating, schedule_matches,
    strategy_for, validate_references, validate_zones, BracketOptions, DayAssignment, DayWindow, Fixture, FixtureResponse,
    KnockoutFloor, Pairing, PinnedRounds, Rotation, ScheduleOptions, ScheduleReport, Slot,
};
pub use models::{
    from_records, to_records, ClockTime, DayConfig, DayType, Field, FieldId, FixtureError,
    FormatProfile, Match, MatchCode, MatchId, MatchRecord, Outcome, Phase, Pool, Seed, Team,
    TeamId, TournamentSnapshot,
};
