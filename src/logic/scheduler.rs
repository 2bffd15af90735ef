//! Slot-driven greedy scheduler: day x field x time slots, first compatible match wins.

use crate::models::{
    ClockTime, DayConfig, Field, FieldId, FixtureError, Match, MatchId, TeamId, MINUTES_PER_DAY,
};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashMap;

/// Scheduling parameters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScheduleOptions {
    pub match_duration_minutes: u32,
    /// Minimum minutes between the end of a team's match and the start of its next one.
    pub rest_min_minutes: u32,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            match_duration_minutes: 60,
            rest_min_minutes: 90,
        }
    }
}

/// A playable (day, field, start time) position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Slot {
    pub day_index: u32,
    pub date: NaiveDate,
    pub start: ClockTime,
    pub field_id: FieldId,
}

impl Slot {
    /// Minutes on a global timeline, for chronological ordering across days.
    pub fn absolute(&self) -> u64 {
        self.day_index as u64 * MINUTES_PER_DAY as u64 + self.start.minutes() as u64
    }
}

/// Outcome of a scheduling run.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    pub slots_total: usize,
    pub scheduled: usize,
    /// Matches left without a slot.
    pub unscheduled: Vec<MatchId>,
    /// Matches placed only after dropping the rest requirement.
    pub relaxed_rest: Vec<MatchId>,
}

impl ScheduleReport {
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }
}

/// Every slot of every non-off day, sorted chronologically (ties keep field order).
///
/// Start times step by `duration` from the day's `time_min`; a slot exists only when the match
/// also ends by `time_max`. Fields disabled on a day contribute nothing to it. Durations of a
/// whole day or more are rejected.
pub fn build_slots(days: &[DayConfig], fields: &[Field], duration: u32) -> Result<Vec<Slot>, FixtureError> {
    if duration == 0 || duration >= MINUTES_PER_DAY {
        return Err(FixtureError::InvalidDuration);
    }
    let mut slots = Vec::new();
    for day in days.iter().filter(|d| d.is_playable()) {
        let end = day.time_max.minutes();
        let mut t = day.time_min.minutes();
        while t + duration <= end {
            let start = ClockTime::from_minutes(t)?;
            for field in fields.iter().filter(|f| f.is_enabled_on(day.index)) {
                slots.push(Slot {
                    day_index: day.index,
                    date: day.date,
                    start,
                    field_id: field.id.clone(),
                });
            }
            t += duration;
        }
    }
    slots.sort_by_key(Slot::absolute);
    Ok(slots)
}

fn day_allows(m: &Match, day_index: u32) -> bool {
    if m.is_bye {
        return false;
    }
    if m.min_day_index.is_some_and(|min| day_index < min) {
        return false;
    }
    if m.preferred_day_index.is_some_and(|pref| day_index != pref) {
        return false;
    }
    true
}

fn rested(m: &Match, start: u64, rest: u64, last_end: &HashMap<TeamId, u64>) -> bool {
    m.team_ids()
        .all(|id| last_end.get(id).map_or(true, |&end| start >= end + rest))
}

/// Assign a date, time and field to every non-bye match that fits.
///
/// Slots are visited in chronological order. For each slot the unscheduled matches are scanned
/// in their current order and the first one allowed on that day whose teams are rested takes
/// it. Only when no match passes that check is the slot offered again with no rest required.
/// A `preferred_day_index` is binding: such a match never lands on another day.
///
/// Matches that find no slot keep `date`/`time`/`field_id` empty; that is reported, not an error.
pub fn schedule_matches(
    matches: &mut [Match],
    days: &[DayConfig],
    fields: &[Field],
    options: ScheduleOptions,
) -> Result<ScheduleReport, FixtureError> {
    let fallback;
    let fields = if fields.is_empty() {
        debug!("No fields configured, using a single default field");
        fallback = [Field::fallback()];
        &fallback[..]
    } else {
        fields
    };

    let duration = options.match_duration_minutes;
    let slots = build_slots(days, fields, duration)?;
    let rest = options.rest_min_minutes as u64;

    for m in matches.iter_mut() {
        m.clear_schedule();
    }
    let mut pending: Vec<usize> = (0..matches.len()).filter(|&i| !matches[i].is_bye).collect();
    let caps: HashMap<&str, u32> = fields
        .iter()
        .filter_map(|f| f.max_matches_per_day.map(|cap| (f.id.as_str(), cap)))
        .collect();

    let mut last_end: HashMap<TeamId, u64> = HashMap::new();
    let mut per_field_day: HashMap<(FieldId, u32), u32> = HashMap::new();
    let mut report = ScheduleReport {
        slots_total: slots.len(),
        ..ScheduleReport::default()
    };

    for slot in &slots {
        if pending.is_empty() {
            break;
        }
        let used = per_field_day
            .get(&(slot.field_id.clone(), slot.day_index))
            .copied()
            .unwrap_or(0);
        if caps.get(slot.field_id.as_str()).is_some_and(|&cap| used >= cap) {
            continue;
        }

        let start = slot.absolute();
        let strict = pending.iter().position(|&i| {
            let m = &matches[i];
            day_allows(m, slot.day_index) && rested(m, start, rest, &last_end)
        });
        let (pos, relaxed) = match strict {
            Some(pos) => (pos, false),
            None => match pending.iter().position(|&i| {
                let m = &matches[i];
                day_allows(m, slot.day_index) && rested(m, start, 0, &last_end)
            }) {
                Some(pos) => (pos, true),
                None => continue,
            },
        };

        let idx = pending.remove(pos);
        let m = &mut matches[idx];
        m.date = Some(slot.date);
        m.time = Some(slot.start);
        m.field_id = Some(slot.field_id.clone());
        let end = start + duration as u64;
        for id in m.team_ids() {
            last_end.insert(id.clone(), end);
        }
        if relaxed {
            debug!(
                "Rest relaxed for {} vs {} on day {} at {} ({})",
                m.home, m.away, slot.day_index, slot.start, slot.field_id
            );
            report.relaxed_rest.push(m.id);
        }
        *per_field_day.entry((slot.field_id.clone(), slot.day_index)).or_insert(0) += 1;
        report.scheduled += 1;
    }

    report.unscheduled = pending.iter().map(|&i| matches[i].id).collect();
    if !report.unscheduled.is_empty() {
        warn!(
            "{} matches could not be scheduled ({} slots available)",
            report.unscheduled.len(),
            report.slots_total
        );
    }
    if !report.relaxed_rest.is_empty() {
        warn!("{} matches scheduled without the full rest time", report.relaxed_rest.len());
    }
    info!(
        "Scheduled {} matches over {} slots",
        report.scheduled, report.slots_total
    );
    Ok(report)
}
