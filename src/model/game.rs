use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One side of a game as the schedule feed reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameParticipant {
    pub id: u32,
    pub abbrev: String,
    // Absent until the puck drops.
    #[serde(default)]
    pub score: u32,
}

impl GameParticipant {
    pub fn new(id: u32, abbrev: impl Into<String>, score: u32) -> Self {
        Self { id, abbrev: abbrev.into(), score }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDescriptor {
    #[serde(default)]
    pub number: u32,
    #[serde(rename = "periodType", default)]
    pub period_type: String,
}

/// Game state tag. Anything the feed sends that we don't recognise is kept
/// verbatim in `Unknown` so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameState {
    Scheduled,
    Pregame,
    Live,
    Critical,
    Final,
    Unknown(String),
}

impl GameState {
    pub fn as_str(&self) -> &str {
        match self {
            GameState::Scheduled => "FUT",
            GameState::Pregame => "PRE",
            GameState::Live => "LIVE",
            GameState::Critical => "CRIT",
            GameState::Final => "FINAL",
            GameState::Unknown(raw) => raw,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::Pregame | GameState::Live | GameState::Critical)
    }
}

impl From<String> for GameState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "FUT" => GameState::Scheduled,
            "PRE" => GameState::Pregame,
            "LIVE" => GameState::Live,
            "CRIT" => GameState::Critical,
            "FINAL" | "OFF" => GameState::Final,
            _ => GameState::Unknown(raw),
        }
    }
}

impl From<&str> for GameState {
    fn from(raw: &str) -> Self {
        GameState::from(raw.to_string())
    }
}

impl From<GameState> for String {
    fn from(state: GameState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    #[serde(rename = "awayTeam")]
    pub away_team: GameParticipant,
    #[serde(rename = "homeTeam")]
    pub home_team: GameParticipant,
    #[serde(rename = "startTimeUTC")]
    pub start_time: DateTime<Utc>,
    #[serde(rename = "gameState")]
    pub state: GameState,
    #[serde(rename = "periodDescriptor", default)]
    pub period: PeriodDescriptor,
}

impl Game {
    pub fn involves(&self, abbrev: &str) -> bool {
        self.away_team.abbrev == abbrev || self.home_team.abbrev == abbrev
    }
}
