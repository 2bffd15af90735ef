//! Match, seed placeholders, match codes and phases.

use crate::models::calendar::{ClockTime, FieldId};
use crate::models::team::TeamId;
use crate::models::tournament::FixtureError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Text used for an empty bracket slot and for references to bye matches.
pub const BYE: &str = "BYE";

/// Code of a match: structural during generation, sequential after renumbering.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum MatchCode {
    /// Generation-time code such as `P9_3`.
    Structural(String),
    /// Sequential display number assigned in chronological order.
    Display(u32),
    /// Marker given to bye matches instead of a number.
    Bye,
}

impl MatchCode {
    pub fn structural(code: impl Into<String>) -> Self {
        MatchCode::Structural(code.into())
    }
}

impl fmt::Display for MatchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchCode::Structural(code) => f.write_str(code),
            MatchCode::Display(n) => write!(f, "{n}"),
            MatchCode::Bye => f.write_str(BYE),
        }
    }
}

impl From<&str> for MatchCode {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s == BYE {
            MatchCode::Bye
        } else if let Ok(n) = s.parse::<u32>() {
            MatchCode::Display(n)
        } else {
            MatchCode::Structural(s.to_string())
        }
    }
}

impl From<String> for MatchCode {
    fn from(s: String) -> Self {
        MatchCode::from(s.as_str())
    }
}

impl From<MatchCode> for String {
    fn from(code: MatchCode) -> Self {
        code.to_string()
    }
}

/// Which side of a referenced match advances: winner (`GP`) or loser (`PP`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "GP")]
    Winner,
    #[serde(rename = "PP")]
    Loser,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Winner => "GP",
            Outcome::Loser => "PP",
        }
    }
}

impl FromStr for Outcome {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GP" => Ok(Outcome::Winner),
            "PP" => Ok(Outcome::Loser),
            other => Err(FixtureError::MalformedMatch(format!("unknown outcome '{other}'"))),
        }
    }
}

/// One side of a match: a known team, or a placeholder resolved later by results.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Seed {
    Team { id: TeamId },
    /// `rank`-th best among all teams that finished `place` in their zone (`2°3°`).
    RankedPlace { rank: u8, place: u8 },
    /// Team that finished `place` in a second-stage group (`1° Zona A1`).
    GroupPlace { place: u8, group: String },
    /// Winner or loser of another match (`GP P9_1`).
    Outcome { result: Outcome, code: MatchCode },
    Bye,
}

impl Seed {
    pub fn team(id: impl Into<TeamId>) -> Self {
        Seed::Team { id: id.into() }
    }

    pub fn ranked(rank: u8, place: u8) -> Self {
        Seed::RankedPlace { rank, place }
    }

    pub fn winner_of(code: impl Into<String>) -> Self {
        Seed::Outcome {
            result: Outcome::Winner,
            code: MatchCode::structural(code),
        }
    }

    pub fn loser_of(code: impl Into<String>) -> Self {
        Seed::Outcome {
            result: Outcome::Loser,
            code: MatchCode::structural(code),
        }
    }

    pub fn team_id(&self) -> Option<&TeamId> {
        match self {
            Seed::Team { id } => Some(id),
            _ => None,
        }
    }

    /// Referenced match code and outcome, if this side comes from another match.
    pub fn reference(&self) -> Option<(&MatchCode, Outcome)> {
        match self {
            Seed::Outcome { result, code } => Some((code, *result)),
            _ => None,
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Team { id } => f.write_str(id),
            Seed::RankedPlace { rank, place } => write!(f, "{rank}°{place}°"),
            Seed::GroupPlace { place, group } => write!(f, "{place}° {group}"),
            Seed::Outcome { result, code } => write!(f, "{} {}", result.as_str(), code),
            Seed::Bye => f.write_str(BYE),
        }
    }
}

impl FromStr for Seed {
    type Err = FixtureError;

    /// Parse a placeholder in display form. Team ids never go through here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || FixtureError::MalformedMatch(format!("unrecognized seed '{s}'"));
        if s == BYE {
            return Ok(Seed::Bye);
        }
        if let Some((prefix, code)) = s.split_once(' ') {
            if let Ok(result) = prefix.parse::<Outcome>() {
                return Ok(Seed::Outcome {
                    result,
                    code: MatchCode::from(code),
                });
            }
        }
        let (first, rest) = s.split_once('°').ok_or_else(malformed)?;
        let first: u8 = first.trim().parse().map_err(|_| malformed())?;
        if let Some(place) = rest.strip_suffix('°') {
            let place: u8 = place.parse().map_err(|_| malformed())?;
            return Ok(Seed::RankedPlace { rank: first, place });
        }
        let group = rest.trim();
        if group.is_empty() {
            return Err(malformed());
        }
        Ok(Seed::GroupPlace {
            place: first,
            group: group.to_string(),
        })
    }
}

/// Second-stage group of zone winners.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Pool {
    A1,
    A2,
}

impl Pool {
    pub fn label(self) -> &'static str {
        match self {
            Pool::A1 => "Zona A1",
            Pool::A2 => "Zona A2",
        }
    }
}

/// Tournament stage a match belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Round robin inside each zone.
    Zones,
    /// Round robin inside a group of zone winners.
    SecondStage(Pool),
    /// Cross matches between the two second-stage groups (places 1-8).
    Placement1To8,
    Placement9To16,
    Placement17To24,
}

impl Phase {
    /// Display label for the phase.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Zones => "Fase 1 · Zonas",
            Phase::SecondStage(Pool::A1) => "Fase 2 · Zona A1",
            Phase::SecondStage(Pool::A2) => "Fase 2 · Zona A2",
            Phase::Placement1To8 => "Puestos 1-8",
            Phase::Placement9To16 => "Puestos 9-16",
            Phase::Placement17To24 => "Puestos 17-24",
        }
    }

    /// Zone label used on matches of this phase. Zone-phase matches carry their own zone.
    pub fn zone_label(self) -> Option<&'static str> {
        match self {
            Phase::Zones => None,
            Phase::SecondStage(pool) => Some(pool.label()),
            other => Some(other.label()),
        }
    }

    const ALL: [Phase; 6] = [
        Phase::Zones,
        Phase::SecondStage(Pool::A1),
        Phase::SecondStage(Pool::A2),
        Phase::Placement1To8,
        Phase::Placement9To16,
        Phase::Placement17To24,
    ];
}

impl FromStr for Phase {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|p| p.label() == s.trim())
            .ok_or_else(|| FixtureError::MalformedMatch(format!("unknown phase '{s}'")))
    }
}

/// A single match of the fixture.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// Structural code while generating (only bracket matches have one), display code after renumbering.
    pub code: Option<MatchCode>,
    pub zone: String,
    pub phase: Phase,
    /// 1-based round within the zone or bracket branch.
    pub round: u32,
    pub home: Seed,
    pub away: Seed,
    pub date: Option<NaiveDate>,
    pub time: Option<ClockTime>,
    pub field_id: Option<FieldId>,
    /// Day index the match must be played on.
    pub preferred_day_index: Option<u32>,
    /// Earliest day index the match may be played on.
    pub min_day_index: Option<u32>,
    /// Automatic advancement; never scheduled.
    pub is_bye: bool,
}

impl Match {
    pub fn new(zone: impl Into<String>, phase: Phase, round: u32, home: Seed, away: Seed) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: None,
            zone: zone.into(),
            phase,
            round,
            home,
            away,
            date: None,
            time: None,
            field_id: None,
            preferred_day_index: None,
            min_day_index: None,
            is_bye: false,
        }
    }

    /// Bracket match: zone label taken from the phase, with a structural code.
    pub fn bracket(code: &str, phase: Phase, round: u32, home: Seed, away: Seed) -> Self {
        let zone = phase.zone_label().unwrap_or_default();
        let mut m = Self::new(zone, phase, round, home, away);
        m.code = Some(MatchCode::structural(code));
        m
    }

    pub fn into_bye(mut self, is_bye: bool) -> Self {
        self.is_bye = is_bye;
        self
    }

    /// Resolved team ids on either side.
    pub fn team_ids(&self) -> impl Iterator<Item = &TeamId> {
        self.home.team_id().into_iter().chain(self.away.team_id())
    }

    pub fn is_scheduled(&self) -> bool {
        self.date.is_some() && self.time.is_some() && self.field_id.is_some()
    }

    pub fn clear_schedule(&mut self) {
        self.date = None;
        self.time = None;
        self.field_id = None;
    }

    /// Match codes this match depends on.
    pub fn references(&self) -> impl Iterator<Item = (&MatchCode, Outcome)> {
        self.home.reference().into_iter().chain(self.away.reference())
    }
}

/// Wire shape of a match, as consumed by rendering/export and storage.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(default)]
    pub id: Option<MatchId>,
    #[serde(default)]
    pub code: Option<String>,
    pub zone: String,
    pub phase: String,
    pub round: u32,
    #[serde(default)]
    pub home_team_id: Option<TeamId>,
    #[serde(default)]
    pub away_team_id: Option<TeamId>,
    #[serde(default)]
    pub home_seed: Option<String>,
    #[serde(default)]
    pub away_seed: Option<String>,
    #[serde(default)]
    pub from_home_match_code: Option<String>,
    #[serde(default)]
    pub from_home_result: Option<Outcome>,
    #[serde(default)]
    pub from_away_match_code: Option<String>,
    #[serde(default)]
    pub from_away_result: Option<Outcome>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<ClockTime>,
    #[serde(default)]
    pub field_id: Option<FieldId>,
    #[serde(default)]
    pub preferred_day_index: Option<u32>,
    #[serde(default)]
    pub min_day_index: Option<u32>,
    #[serde(default)]
    pub is_bye_match: bool,
}

fn split_side(seed: &Seed) -> (Option<TeamId>, Option<String>, Option<String>, Option<Outcome>) {
    match seed {
        Seed::Team { id } => (Some(id.clone()), None, None, None),
        Seed::Outcome { result, code } => {
            (None, Some(seed.to_string()), Some(code.to_string()), Some(*result))
        }
        other => (None, Some(other.to_string()), None, None),
    }
}

fn join_side(team_id: Option<TeamId>, seed: Option<String>, side: &str) -> Result<Seed, FixtureError> {
    match (team_id, seed) {
        (Some(id), _) if !id.is_empty() => Ok(Seed::Team { id }),
        (_, Some(text)) => text.parse(),
        _ => Err(FixtureError::MalformedMatch(format!("{side} side has neither team nor seed"))),
    }
}

impl From<&Match> for MatchRecord {
    fn from(m: &Match) -> Self {
        let (home_team_id, home_seed, from_home_match_code, from_home_result) = split_side(&m.home);
        let (away_team_id, away_seed, from_away_match_code, from_away_result) = split_side(&m.away);
        Self {
            id: Some(m.id),
            code: m.code.as_ref().map(ToString::to_string),
            zone: m.zone.clone(),
            phase: m.phase.label().to_string(),
            round: m.round,
            home_team_id,
            away_team_id,
            home_seed,
            away_seed,
            from_home_match_code,
            from_home_result,
            from_away_match_code,
            from_away_result,
            date: m.date,
            time: m.time,
            field_id: m.field_id.clone(),
            preferred_day_index: m.preferred_day_index,
            min_day_index: m.min_day_index,
            is_bye_match: m.is_bye,
        }
    }
}

impl TryFrom<MatchRecord> for Match {
    type Error = FixtureError;

    fn try_from(r: MatchRecord) -> Result<Self, Self::Error> {
        let phase: Phase = r.phase.parse()?;
        let home = join_side(r.home_team_id, r.home_seed, "home")?;
        let away = join_side(r.away_team_id, r.away_seed, "away")?;
        Ok(Self {
            id: r.id.unwrap_or_else(Uuid::new_v4),
            code: r.code.filter(|c| !c.trim().is_empty()).map(MatchCode::from),
            zone: r.zone,
            phase,
            round: r.round,
            home,
            away,
            date: r.date,
            time: r.time,
            field_id: r.field_id,
            preferred_day_index: r.preferred_day_index,
            min_day_index: r.min_day_index,
            is_bye: r.is_bye_match,
        })
    }
}

/// Convert matches to their wire records.
pub fn to_records(matches: &[Match]) -> Vec<MatchRecord> {
    matches.iter().map(MatchRecord::from).collect()
}

/// Parse wire records back into matches.
pub fn from_records(records: Vec<MatchRecord>) -> Result<Vec<Match>, FixtureError> {
    records.into_iter().map(Match::try_from).collect()
}
