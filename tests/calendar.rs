//! Integration tests for day lists, clock values and field availability.

mod common;

use chrono::NaiveDate;
use common::{clock, start_date};
use evita_fixture::{
    build_day_configs, build_day_configs_from_strings, parse_date, playable_day_indices, ClockTime,
    DayConfig, DayType, DayWindow, Field, FixtureError,
};

fn date(s: &str) -> NaiveDate {
    parse_date(s).unwrap()
}

#[test]
fn clock_parses_and_renders() {
    assert_eq!(clock("9:05").minutes(), 545);
    assert_eq!(clock("09:05").to_string(), "09:05");
    assert_eq!(ClockTime::from_minutes(1439).unwrap().to_string(), "23:59");
    assert!(ClockTime::from_minutes(1440).is_err());
    for bad in ["24:00", "12:5", "noon", "12-30", ""] {
        assert!(bad.parse::<ClockTime>().is_err(), "{bad}");
    }
    assert!(clock("08:59") < clock("09:00"));
}

#[test]
fn clock_serializes_as_text() {
    let json = serde_json::to_string(&clock("18:30")).unwrap();
    assert_eq!(json, "\"18:30\"");
    let back: ClockTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, clock("18:30"));
    assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
}

#[test]
fn range_builds_one_day_per_date() {
    let days = build_day_configs(start_date(), date("2025-03-05"), &DayWindow::default(), &[]).unwrap();
    assert_eq!(days.len(), 5);
    let indices: Vec<u32> = days.iter().map(|d| d.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    assert_eq!(days[4].date, date("2025-03-05"));
    assert!(days.iter().all(|d| d.day_type == DayType::Full));
}

#[test]
fn default_window_closes_day_five_early() {
    let days = build_day_configs(start_date(), date("2025-03-06"), &DayWindow::default(), &[]).unwrap();
    assert_eq!(days[0].time_min, clock("09:00"));
    assert_eq!(days[0].time_max, clock("22:00"));
    assert_eq!(days[4].time_max, clock("18:00"));
    assert_eq!(days[5].time_max, clock("22:00"));
}

#[test]
fn early_close_never_extends_the_window() {
    let window = DayWindow {
        time_min: clock("10:00"),
        time_max: clock("16:00"),
        final_day_close: Some(clock("18:00")),
    };
    let days = build_day_configs(start_date(), date("2025-03-05"), &window, &[]).unwrap();
    assert_eq!(days[4].time_max, clock("16:00"));
}

#[test]
fn single_day_range() {
    let days = build_day_configs(start_date(), start_date(), &DayWindow::default(), &[]).unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].index, 1);
}

#[test]
fn existing_days_keep_their_settings() {
    let previous = vec![DayConfig {
        index: 1,
        date: date("2025-03-03"),
        day_type: DayType::Half,
        time_min: clock("14:00"),
        time_max: clock("20:00"),
    }];
    // range now starts two days earlier, so 2025-03-03 becomes day 3
    let days = build_day_configs(start_date(), date("2025-03-04"), &DayWindow::default(), &previous).unwrap();
    assert_eq!(days.len(), 4);
    assert_eq!(days[2].index, 3);
    assert_eq!(days[2].day_type, DayType::Half);
    assert_eq!(days[2].time_min, clock("14:00"));
    assert_eq!(days[2].time_max, clock("20:00"));
    assert_eq!(days[0].day_type, DayType::Full);
}

#[test]
fn end_before_start_is_rejected() {
    let err = build_day_configs(date("2025-03-05"), start_date(), &DayWindow::default(), &[]).unwrap_err();
    assert!(matches!(err, FixtureError::InvalidDateRange { .. }));
}

#[test]
fn string_dates_are_validated() {
    let days = build_day_configs_from_strings("2025-03-01", " 2025-03-02 ", &DayWindow::default(), &[]).unwrap();
    assert_eq!(days.len(), 2);
    let err = build_day_configs_from_strings("2025-02-30", "2025-03-02", &DayWindow::default(), &[]).unwrap_err();
    assert_eq!(err, FixtureError::InvalidDate("2025-02-30".to_string()));
    assert!(parse_date("01/03/2025").is_err());
}

#[test]
fn off_days_are_not_playable() {
    let mut days = build_day_configs(start_date(), date("2025-03-04"), &DayWindow::default(), &[]).unwrap();
    days[1].day_type = DayType::Off;
    days[2].day_type = DayType::Half;
    assert_eq!(playable_day_indices(&days), vec![1, 3, 4]);
}

#[test]
fn day_config_wire_shape() {
    let json = r#"{"index":2,"date":"2025-03-02","type":"half","timeMin":"09:00","timeMax":"13:00"}"#;
    let day: DayConfig = serde_json::from_str(json).unwrap();
    assert_eq!(day.day_type, DayType::Half);
    assert_eq!(day.time_max, clock("13:00"));
    let back = serde_json::to_value(&day).unwrap();
    assert_eq!(back["type"], "half");
    assert_eq!(back["timeMin"], "09:00");
}

#[test]
fn field_availability_by_day_position() {
    let mut field = Field::new("c2", "Cancha 2");
    assert!(field.is_enabled_on(1) && field.is_enabled_on(9));
    field.days_enabled = Some(vec![true, false]);
    assert!(field.is_enabled_on(1));
    assert!(!field.is_enabled_on(2));
    assert!(field.is_enabled_on(3));
    assert_eq!(Field::fallback().id, "c1");
}
