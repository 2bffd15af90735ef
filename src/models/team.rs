//! Team data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a team, supplied by the caller (or generated on import).
pub type TeamId = String;

/// A team entered in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub short_name: String,
    /// Free-text zone label ("Zona 1", "a", ...). Grouping ignores case and extra whitespace.
    #[serde(default)]
    pub zone: String,
}

impl Team {
    /// Create a team with a caller-chosen id.
    pub fn new(id: impl Into<TeamId>, short_name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            short_name: short_name.into(),
            zone: zone.into(),
        }
    }

    /// Create a team with a freshly generated id.
    pub fn with_generated_id(short_name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self::new(generate_team_id(), short_name, zone)
    }

    /// Zone key used for grouping: trimmed, inner whitespace collapsed, uppercased.
    /// Empty when the team has no zone.
    pub fn zone_key(&self) -> String {
        normalize_zone(&self.zone)
    }
}

/// Normalize a zone label for grouping.
pub fn normalize_zone(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

pub(crate) fn generate_team_id() -> TeamId {
    format!("tm_{}", Uuid::new_v4().simple())
}
