//! Tournament snapshot, format profiles and FixtureError.

use crate::models::calendar::{DayConfig, Field};
use crate::models::team::Team;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur while building a fixture.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FixtureError {
    /// The format supports 20 to 24 teams only.
    UnsupportedTeamCount(usize),
    /// Unknown format profile name.
    UnsupportedFormat(String),
    /// A team has an empty zone label.
    TeamWithoutZone(String),
    /// Number of distinct zones does not match the team count.
    WrongZoneCount { teams: usize, expected: usize, found: usize },
    /// A zone has a size other than 2 or 3.
    InvalidZoneSize { zone: String, size: usize },
    /// Not a `YYYY-MM-DD` date.
    InvalidDate(String),
    /// Not an `HH:MM` clock time.
    InvalidClock(String),
    /// End date before start date.
    InvalidDateRange { start: String, end: String },
    /// Match duration must be positive and shorter than a day.
    InvalidDuration,
    /// A match record could not be converted back into a match.
    MalformedMatch(String),
    /// A roster CSV could not be read.
    Roster(String),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::UnsupportedTeamCount(n) => {
                write!(f, "This format needs between 20 and 24 teams (got {})", n)
            }
            FixtureError::UnsupportedFormat(name) => write!(f, "Unsupported format '{}'", name),
            FixtureError::TeamWithoutZone(name) => write!(f, "Team '{}' has no zone", name),
            FixtureError::WrongZoneCount { teams, expected, found } => write!(
                f,
                "For {} teams there must be {} zones (found {})",
                teams, expected, found
            ),
            FixtureError::InvalidZoneSize { zone, size } => write!(
                f,
                "Zone {} has {} teams; only 2 or 3 are allowed",
                zone, size
            ),
            FixtureError::InvalidDate(s) => write!(f, "Invalid date '{}' (expected YYYY-MM-DD)", s),
            FixtureError::InvalidClock(s) => write!(f, "Invalid time '{}' (expected HH:MM)", s),
            FixtureError::InvalidDateRange { start, end } => {
                write!(f, "End date {} is before start date {}", end, start)
            }
            FixtureError::InvalidDuration => {
                write!(f, "Match duration must be between 1 and 1439 minutes")
            }
            FixtureError::MalformedMatch(msg) => write!(f, "Malformed match: {}", msg),
            FixtureError::Roster(msg) => write!(f, "Invalid team roster: {}", msg),
        }
    }
}

impl std::error::Error for FixtureError {}

/// Tournament format profile. Both profiles generate the same bracket and differ in
/// how knockout matches are anchored to days.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FormatProfile {
    /// Every knockout round pinned to its own day; places 1-8 on the last day.
    #[default]
    Evita8x3,
    /// Knockout matches only floored at the third playable day.
    Evita8x3Flex,
}

impl FormatProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatProfile::Evita8x3 => "especial-8x3",
            FormatProfile::Evita8x3Flex => "especial-8x3-flex",
        }
    }
}

impl fmt::Display for FormatProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatProfile {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "especial-8x3" => Ok(FormatProfile::Evita8x3),
            "especial-8x3-flex" => Ok(FormatProfile::Evita8x3Flex),
            other => Err(FixtureError::UnsupportedFormat(other.to_string())),
        }
    }
}

fn default_format() -> String {
    FormatProfile::default().as_str().to_string()
}

fn default_match_duration() -> u32 {
    60
}

fn default_rest_minutes() -> u32 {
    90
}

/// Everything the pipeline needs, copied in from the caller's tournament record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSnapshot {
    #[serde(default)]
    pub name: String,
    /// Format profile name; parsed by the pipeline so unknown names are reported as input errors.
    #[serde(default = "default_format")]
    pub format: String,
    pub teams: Vec<Team>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub day_configs: Vec<DayConfig>,
    #[serde(default = "default_match_duration")]
    pub match_duration_minutes: u32,
    #[serde(default = "default_rest_minutes")]
    pub rest_min_minutes: u32,
    /// 3-team zones play home and away as well.
    #[serde(default)]
    pub double_round: bool,
}

impl TournamentSnapshot {
    /// Snapshot with default parameters and no fields or days.
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            name: String::new(),
            format: default_format(),
            teams,
            fields: Vec::new(),
            day_configs: Vec::new(),
            match_duration_minutes: default_match_duration(),
            rest_min_minutes: default_rest_minutes(),
            double_round: false,
        }
    }

    pub fn format_profile(&self) -> Result<FormatProfile, FixtureError> {
        self.format.parse()
    }
}
