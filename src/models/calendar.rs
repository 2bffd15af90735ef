//! Calendar data structures: clock times, day configurations and fields.

use crate::models::tournament::FixtureError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minute-of-day clock value, rendered as `HH:MM`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from minutes since midnight. Values past 23:59 are rejected.
    pub fn from_minutes(minutes: u32) -> Result<Self, FixtureError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(FixtureError::InvalidClock(minutes.to_string()));
        }
        Ok(Self(minutes as u16))
    }

    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, FixtureError> {
        if hour > 23 || minute > 59 {
            return Err(FixtureError::InvalidClock(format!("{hour}:{minute}")));
        }
        Ok(Self(hour as u16 * 60 + minute as u16))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = FixtureError;

    /// Parse `H:MM` or `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FixtureError::InvalidClock(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if m.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for ClockTime {
    type Error = FixtureError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// How much of a calendar day is playable.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    #[default]
    Full,
    /// Playable within its (usually shortened) time window.
    Half,
    /// No matches on this day.
    Off,
}

/// One calendar day of the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayConfig {
    /// 1-based position of the day within the tournament range.
    pub index: u32,
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub day_type: DayType,
    pub time_min: ClockTime,
    pub time_max: ClockTime,
}

impl DayConfig {
    pub fn is_playable(&self) -> bool {
        self.day_type != DayType::Off
    }
}

/// Identifier for a field (court/pitch).
pub type FieldId = String;

/// A playing field.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: FieldId,
    #[serde(default)]
    pub name: String,
    /// Per-day availability, by position in the day list. Missing entries mean enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_enabled: Option<Vec<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_matches_per_day: Option<u32>,
}

impl Field {
    pub fn new(id: impl Into<FieldId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            days_enabled: None,
            max_matches_per_day: None,
        }
    }

    /// Field used when the tournament defines none.
    pub fn fallback() -> Self {
        Self::new("c1", "Cancha 1")
    }

    /// Whether the field can host matches on the day with this 1-based index.
    pub fn is_enabled_on(&self, day_index: u32) -> bool {
        let Some(flags) = &self.days_enabled else {
            return true;
        };
        let pos = day_index.saturating_sub(1) as usize;
        flags.get(pos).copied().unwrap_or(true)
    }
}
