//! Zone grouping and validation of the zone layout against the team count.

use crate::logic::seed_tables::{format_table, FormatTable};
use crate::models::{FixtureError, Team, TeamId};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Teams of one zone, in entry order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Zone {
    /// Label as first entered (trimmed).
    pub label: String,
    pub team_ids: Vec<TeamId>,
}

/// Natural ordering: digit runs compare by value, everything else case-insensitively,
/// so "Zona 2" sorts before "Zona 10".
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();
    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let mut da = String::new();
                while let Some(c) = a.next_if(|c| c.is_ascii_digit()) {
                    da.push(c);
                }
                let mut db = String::new();
                while let Some(c) = b.next_if(|c| c.is_ascii_digit()) {
                    db.push(c);
                }
                let ta = da.trim_start_matches('0');
                let tb = db.trim_start_matches('0');
                let ord = ta.len().cmp(&tb.len()).then_with(|| ta.cmp(tb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.to_lowercase().cmp(y.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                a.next();
                b.next();
            }
        }
    }
}

/// Group teams by normalized zone label, zones in natural order of their labels.
/// Teams without a zone are skipped.
pub fn group_zones(teams: &[Team]) -> Vec<Zone> {
    let mut zones: Vec<Zone> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();
    for team in teams {
        let key = team.zone_key();
        if key.is_empty() {
            continue;
        }
        let idx = *by_key.entry(key).or_insert_with(|| {
            zones.push(Zone {
                label: team.zone.trim().to_string(),
                team_ids: Vec::new(),
            });
            zones.len() - 1
        });
        zones[idx].team_ids.push(team.id.clone());
    }
    zones.sort_by(|a, b| natural_cmp(&a.label, &b.label));
    zones
}

/// Check the zone layout for this team count and return the zones with their seeding row.
///
/// 1. Team count must be one of the supported counts (20-24).
/// 2. Every team must have a zone.
/// 3. Zone count must match and every zone must hold 2 or 3 teams. With all teams placed,
///    that fixes the mix of 3-team and 2-team zones recorded in the table.
pub fn validate_zones(teams: &[Team]) -> Result<(Vec<Zone>, &'static FormatTable), FixtureError> {
    let total = teams.len();
    let table = format_table(total).ok_or(FixtureError::UnsupportedTeamCount(total))?;

    if let Some(team) = teams.iter().find(|t| t.zone_key().is_empty()) {
        return Err(FixtureError::TeamWithoutZone(team.short_name.clone()));
    }

    let zones = group_zones(teams);
    if zones.len() != table.shape.zones {
        return Err(FixtureError::WrongZoneCount {
            teams: total,
            expected: table.shape.zones,
            found: zones.len(),
        });
    }

    if let Some(zone) = zones.iter().find(|z| !(2..=3).contains(&z.team_ids.len())) {
        return Err(FixtureError::InvalidZoneSize {
            zone: zone.label.clone(),
            size: zone.team_ids.len(),
        });
    }

    Ok((zones, table))
}
