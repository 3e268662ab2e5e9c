use chrono::{DateTime, TimeZone};
use tracing::{debug, info, instrument};

use crate::model::game::Game;
use crate::model::schedule::ScheduleWindow;

pub const TODAY_LABEL: &str = "Today";

/// `chrono` format for the abbreviated weekday ("Mon", "Tue", ...).
const WEEKDAY_FORMAT: &str = "%a";

/// A game located for a team, plus the relative day it falls on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextGame<'a> {
    pub game: &'a Game,
    pub day_label: String,
}

impl<'a> NextGame<'a> {
    pub fn new(game: &'a Game, day_label: impl Into<String>) -> Self {
        Self { game, day_label: day_label.into() }
    }
}

impl ScheduleWindow {
    /// First game involving `abbrev`, in the order the feed listed days and games.
    /// Source order is trusted; nothing is re-sorted.
    pub fn first_game_for(&self, abbrev: &str) -> Option<&Game> {
        self.games().find(|game| game.involves(abbrev))
    }
}

/// Find the team's next game and label it relative to `now`.
///
/// `now` fixes both "today" and the zone the game's start is viewed in.
#[instrument(level = "debug", skip(window, now), fields(days = window.game_days.len()))]
pub fn find_next_game<'a, Tz: TimeZone>(window: &'a ScheduleWindow, abbrev: &str, now: &DateTime<Tz>) -> Option<NextGame<'a>>
where
    Tz::Offset: std::fmt::Display,
{
    let Some(game) = window.first_game_for(abbrev) else {
        info!(abbrev, "No game found in schedule window");
        return None;
    };
    let day_label = day_label(game, now);
    debug!(game_id = game.id, day_label = %day_label, "Found next game");
    Some(NextGame::new(game, day_label))
}

/// "Today" when the game starts on `now`'s calendar date, otherwise the short weekday, both in `now`'s zone.
pub fn day_label<Tz: TimeZone>(game: &Game, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local_start = game.start_time.with_timezone(&now.timezone());
    if local_start.date_naive() == now.date_naive() {
        TODAY_LABEL.to_string()
    } else {
        local_start.format(WEEKDAY_FORMAT).to_string()
    }
}
