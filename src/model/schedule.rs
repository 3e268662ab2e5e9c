use serde::{Deserialize, Serialize};

use crate::model::game::Game;

/// A week of games starting at the requested date: `{ "gameWeek": [ ... ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleWindow {
    #[serde(rename = "gameWeek", default)]
    pub game_days: Vec<GameDay>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameDay {
    #[serde(default)]
    pub date: String,
    #[serde(rename = "dayAbbrev", default)]
    pub day_abbrev: String,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl ScheduleWindow {
    /// Every game in day-then-listing order.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.game_days.iter().flat_map(|day| day.games.iter())
    }
}
