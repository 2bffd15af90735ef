//! Fixture pipeline stages: round robin, bracket, day anchoring, scheduling, renumbering.

mod bracket;
mod calendar;
mod day_assignment;
mod pipeline;
mod renumber;
mod roster;
mod round_robin;
mod scheduler;
mod seed_tables;
mod zones;

pub use bracket::{generate_bracket, BracketOptions};
pub use calendar::{
    build_day_configs, build_day_configs_from_strings, date_at_offset, day_offset, parse_date,
    playable_day_indices, DayWindow, FINAL_DAY_INDEX,
};
pub use day_assignment::{
    assign_days, interleave_zone_matches, strategy_for, DayAssignment, KnockoutFloor, PinnedRounds,
};
pub use pipeline::{
    assign_days_and_schedule, build_fixture, Fixture, FixtureResponse, RECOMMENDED_PLAYABLE_DAYS,
};
pub use renumber::{renumber_matches, validate_references};
pub use roster::read_teams_csv;
pub use round_robin::{round_robin, round_robin_matches, round_robin_rotating, Pairing, Rotation};
pub use scheduler::{build_slots, schedule_matches, ScheduleOptions, ScheduleReport, Slot};
pub use seed_tables::{
    format_table, supported_team_counts, Entry, FormatTable, LowerSeeding, ZoneShape,
};
pub use zones::{group_zones, natural_cmp, validate_zones, Zone};
