//! Team roster import from CSV (`id,short_name,zone`; `id` may be blank or missing).

use crate::models::{generate_team_id, FixtureError, Team};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(default)]
    id: Option<String>,
    short_name: String,
    #[serde(default)]
    zone: String,
}

/// Read teams from CSV with a header row. Blank ids get generated ones.
pub fn read_teams_csv<R: Read>(reader: R) -> Result<Vec<Team>, FixtureError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut teams = Vec::new();
    for (line, row) in rdr.deserialize::<RosterRow>().enumerate() {
        let row = row.map_err(|e| FixtureError::Roster(e.to_string()))?;
        if row.short_name.is_empty() {
            return Err(FixtureError::Roster(format!("row {} has no short name", line + 1)));
        }
        let id = row
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(generate_team_id);
        teams.push(Team::new(id, row.short_name, row.zone));
    }
    Ok(teams)
}
