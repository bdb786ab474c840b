mod marking;

pub use marking::{CustomFieldDef, FairwayMarks, GreenMarks, MarkingConfig, StatType};

use std::collections::HashMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Upstream extraction writes this for any optional field it could not read.
pub const NOT_RECORDED: &str = "N/A";
/// Sentinel putt count for "not readable on the card".
pub const PUTTS_NOT_RECORDED: i32 = -1;
/// Assumed par when the card's par row is missing or illegible.
pub const DEFAULT_PAR: i32 = 4;

/// One hole of one player's card, exactly as extracted. Immutable once
/// produced upstream; malformed values are resolved at read time instead of
/// being repaired in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleRecord {
    pub hole_number: u8,
    pub par: Option<i32>,
    pub score: Option<i32>,
    pub putts: i32,
    pub fairway: String,
    pub greens: String,
    #[serde(default)]
    pub custom: HashMap<String, String>,
}

impl HoleRecord {
    pub fn resolved_par(&self) -> i32 {
        match self.par {
            Some(par) if par > 0 => par,
            _ => DEFAULT_PAR,
        }
    }

    /// Score if it should enter sums, i.e. strictly positive.
    pub fn counted_score(&self) -> Option<i32> {
        self.score.filter(|score| *score > 0)
    }

    /// Putts if recorded; -1 and 0 both mean "not recorded".
    pub fn counted_putts(&self) -> Option<i32> {
        (self.putts > 0).then_some(self.putts)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub total_score: i32,
    pub holes: Vec<HoleRecord>,
}

/// How the statistics player was designated when the round was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectedPlayer {
    Name(String),
    Index(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    pub id: String,
    /// None when the card date was missing or unparseable.
    pub timestamp: Option<DateTime<Local>>,
    pub course_name: String,
    pub players: Vec<PlayerRecord>,
    pub selected_player: Option<SelectedPlayer>,
}

impl RoundRecord {
    /// The player whose results feed statistics. A missing or stale
    /// designation falls back to the first listed player.
    pub fn stats_player(&self) -> Option<&PlayerRecord> {
        let designated = match &self.selected_player {
            Some(SelectedPlayer::Name(name)) => self
                .players
                .iter()
                .find(|player| player.name.eq_ignore_ascii_case(name)),
            Some(SelectedPlayer::Index(index)) => self.players.get(*index),
            None => None,
        };
        designated.or_else(|| self.players.first())
    }
}
