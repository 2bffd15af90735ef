//! Date and day utilities: parsing, day offsets and the per-day playable windows.

use crate::models::{ClockTime, DayConfig, DayType, FixtureError};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Day whose window is capped by [`DayWindow::final_day_close`].
pub const FINAL_DAY_INDEX: u32 = 5;

/// Default playable window applied to newly created days.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayWindow {
    pub time_min: ClockTime,
    pub time_max: ClockTime,
    /// Early close for day 5, when the range reaches it.
    pub final_day_close: Option<ClockTime>,
}

impl Default for DayWindow {
    fn default() -> Self {
        Self {
            time_min: ClockTime::from_hm(9, 0).unwrap_or_default(),
            time_max: ClockTime::from_hm(22, 0).unwrap_or_default(),
            final_day_close: ClockTime::from_hm(18, 0).ok(),
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, FixtureError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| FixtureError::InvalidDate(s.to_string()))
}

/// Whole days from `start` to `date` (negative when `date` is earlier).
pub fn day_offset(start: NaiveDate, date: NaiveDate) -> i64 {
    (date - start).num_days()
}

/// Date `offset` days after `start`.
pub fn date_at_offset(start: NaiveDate, offset: i64) -> NaiveDate {
    start + Duration::days(offset)
}

/// Build the day list for `start..=end`.
///
/// Days already present in `previous` (matched by date) keep their type and time window;
/// new days get `window`, with day 5 closing at `window.final_day_close`.
pub fn build_day_configs(
    start: NaiveDate,
    end: NaiveDate,
    window: &DayWindow,
    previous: &[DayConfig],
) -> Result<Vec<DayConfig>, FixtureError> {
    if end < start {
        return Err(FixtureError::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let days = day_offset(start, end) + 1;
    let configs = (0..days)
        .map(|offset| {
            let date = date_at_offset(start, offset);
            let index = offset as u32 + 1;
            match previous.iter().find(|d| d.date == date) {
                Some(old) => DayConfig {
                    index,
                    date,
                    ..old.clone()
                },
                None => {
                    let time_max = match window.final_day_close {
                        Some(close) if index == FINAL_DAY_INDEX => close.min(window.time_max),
                        _ => window.time_max,
                    };
                    DayConfig {
                        index,
                        date,
                        day_type: DayType::Full,
                        time_min: window.time_min,
                        time_max,
                    }
                }
            }
        })
        .collect();
    Ok(configs)
}

/// Parse both ends of a range given as strings and build the day list.
pub fn build_day_configs_from_strings(
    start: &str,
    end: &str,
    window: &DayWindow,
    previous: &[DayConfig],
) -> Result<Vec<DayConfig>, FixtureError> {
    build_day_configs(parse_date(start)?, parse_date(end)?, window, previous)
}

/// Indices of days that are not `off`, in calendar order.
pub fn playable_day_indices(days: &[DayConfig]) -> Vec<u32> {
    days.iter().filter(|d| d.is_playable()).map(|d| d.index).collect()
}
