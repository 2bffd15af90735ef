//! Seeding tables for the 8x3 format, one row per supported team count.
//!
//! Pairings do not follow a formula across team counts, so every count carries its own
//! row. Supporting another count means adding a row.

use crate::models::Seed;

/// Entry of a seeding table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Entry {
    /// `rank`-th best among the teams that finished `place` in their zone.
    Ranked { rank: u8, place: u8 },
    Bye,
}

impl Entry {
    pub fn to_seed(self) -> Seed {
        match self {
            Entry::Ranked { rank, place } => Seed::ranked(rank, place),
            Entry::Bye => Seed::Bye,
        }
    }

    pub fn is_bye(self) -> bool {
        self == Entry::Bye
    }
}

const fn r(rank: u8, place: u8) -> Entry {
    Entry::Ranked { rank, place }
}

const BYE: Entry = Entry::Bye;

/// Expected zone layout for a team count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ZoneShape {
    pub zones: usize,
    pub threes: usize,
    pub twos: usize,
}

/// Seeding of the 17-24 bracket.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LowerSeeding {
    /// Only four teams: the bracket starts at round 2 (two semis, then the two finals).
    SemisOnly([(Entry, Entry); 2]),
    /// Full three-round bracket. A first-round pairing with a `Bye` side is a bye match.
    /// With `bye_losers_path` the whole losers path (round 2 and 3) is made of byes.
    Full {
        first_round: [(Entry, Entry); 4],
        bye_losers_path: bool,
    },
}

/// Seeding row for one team count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormatTable {
    pub teams: usize,
    pub shape: ZoneShape,
    pub pool_a1: [Entry; 4],
    pub pool_a2: [Entry; 4],
    /// First round of the 9-16 bracket.
    pub upper_first_round: [(Entry, Entry); 4],
    pub lower: LowerSeeding,
}

const POOL_A1_FULL: [Entry; 4] = [r(1, 1), r(4, 1), r(5, 1), r(8, 1)];
/// Seven zones: no 8th zone winner, the best runner-up takes the slot.
const POOL_A1_SEVEN_ZONES: [Entry; 4] = [r(1, 1), r(4, 1), r(5, 1), r(1, 2)];
const POOL_A2: [Entry; 4] = [r(2, 1), r(3, 1), r(6, 1), r(7, 1)];

const UPPER_SEVEN_ZONES: [(Entry, Entry); 4] = [
    (r(2, 2), r(2, 3)),
    (r(5, 2), r(6, 2)),
    (r(4, 2), r(7, 2)),
    (r(1, 3), r(3, 2)),
];
const UPPER_EIGHT_ZONES: [(Entry, Entry); 4] = [
    (r(1, 2), r(8, 2)),
    (r(4, 2), r(5, 2)),
    (r(3, 2), r(6, 2)),
    (r(2, 2), r(7, 2)),
];

static FORMAT_TABLES: [FormatTable; 5] = [
    FormatTable {
        teams: 20,
        shape: ZoneShape { zones: 7, threes: 6, twos: 1 },
        pool_a1: POOL_A1_SEVEN_ZONES,
        pool_a2: POOL_A2,
        upper_first_round: UPPER_SEVEN_ZONES,
        lower: LowerSeeding::SemisOnly([(r(3, 3), r(6, 3)), (r(4, 3), r(5, 3))]),
    },
    FormatTable {
        teams: 21,
        shape: ZoneShape { zones: 7, threes: 7, twos: 0 },
        pool_a1: POOL_A1_SEVEN_ZONES,
        pool_a2: POOL_A2,
        upper_first_round: UPPER_SEVEN_ZONES,
        lower: LowerSeeding::Full {
            first_round: [
                (r(3, 3), BYE),
                (r(6, 3), r(7, 3)),
                (r(4, 3), BYE),
                (BYE, r(5, 3)),
            ],
            bye_losers_path: true,
        },
    },
    FormatTable {
        teams: 22,
        shape: ZoneShape { zones: 8, threes: 6, twos: 2 },
        pool_a1: POOL_A1_FULL,
        pool_a2: POOL_A2,
        upper_first_round: UPPER_EIGHT_ZONES,
        lower: LowerSeeding::Full {
            first_round: [
                (r(1, 3), BYE),
                (r(4, 3), r(5, 3)),
                (r(3, 3), r(6, 3)),
                (r(2, 3), BYE),
            ],
            bye_losers_path: false,
        },
    },
    FormatTable {
        teams: 23,
        shape: ZoneShape { zones: 8, threes: 7, twos: 1 },
        pool_a1: POOL_A1_FULL,
        pool_a2: POOL_A2,
        upper_first_round: UPPER_EIGHT_ZONES,
        lower: LowerSeeding::Full {
            first_round: [
                (r(1, 3), BYE),
                (r(7, 3), r(4, 3)),
                (r(3, 3), r(5, 3)),
                (r(2, 3), r(6, 3)),
            ],
            bye_losers_path: false,
        },
    },
    FormatTable {
        teams: 24,
        shape: ZoneShape { zones: 8, threes: 8, twos: 0 },
        pool_a1: POOL_A1_FULL,
        pool_a2: POOL_A2,
        upper_first_round: UPPER_EIGHT_ZONES,
        lower: LowerSeeding::Full {
            first_round: [
                (r(1, 3), r(8, 3)),
                (r(4, 3), r(5, 3)),
                (r(3, 3), r(6, 3)),
                (r(2, 3), r(7, 3)),
            ],
            bye_losers_path: false,
        },
    },
];

/// Seeding row for `teams`, if that count is supported.
pub fn format_table(teams: usize) -> Option<&'static FormatTable> {
    FORMAT_TABLES.iter().find(|t| t.teams == teams)
}

/// All supported team counts, ascending.
pub fn supported_team_counts() -> impl Iterator<Item = usize> {
    FORMAT_TABLES.iter().map(|t| t.teams)
}
