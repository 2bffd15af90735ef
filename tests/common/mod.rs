//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use evita_fixture::{build_day_configs, ClockTime, DayConfig, DayWindow, Field, Team};

/// Zone sizes for each supported team count.
pub fn zone_sizes(total: usize) -> Vec<usize> {
    match total {
        20 => vec![3, 3, 3, 3, 3, 3, 2],
        21 => vec![3; 7],
        22 => vec![3, 3, 3, 3, 3, 3, 2, 2],
        23 => vec![3, 3, 3, 3, 3, 3, 3, 2],
        24 => vec![3; 8],
        other => panic!("no layout for {other} teams"),
    }
}

/// Teams "zNtM" placed in "Zona N".
pub fn teams_with_zones(sizes: &[usize]) -> Vec<Team> {
    sizes
        .iter()
        .enumerate()
        .flat_map(|(z, &n)| {
            (1..=n).map(move |t| {
                Team::new(
                    format!("z{}t{}", z + 1, t),
                    format!("Team {}-{}", z + 1, t),
                    format!("Zona {}", z + 1),
                )
            })
        })
        .collect()
}

pub fn teams(total: usize) -> Vec<Team> {
    teams_with_zones(&zone_sizes(total))
}

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

pub fn clock(s: &str) -> ClockTime {
    s.parse().unwrap()
}

/// `n` full days 09:00-22:00 with no early close on day 5.
pub fn full_days(n: u32) -> Vec<DayConfig> {
    let window = DayWindow {
        time_min: clock("09:00"),
        time_max: clock("22:00"),
        final_day_close: None,
    };
    let start = start_date();
    let end = start + chrono::Duration::days(n as i64 - 1);
    build_day_configs(start, end, &window, &[]).unwrap()
}

pub fn fields(n: usize) -> Vec<Field> {
    (1..=n).map(|i| Field::new(format!("c{i}"), format!("Cancha {i}"))).collect()
}
