use chrono::TimeZone;
use serde::Serialize;

use crate::error::{PumpjackError, Result};
use crate::model::game::{Game, GameState};
use crate::schedule::NextGame;

pub const NO_GAMES_MESSAGE: &str = "No games scheduled.";

/// `chrono` format for the 24-hour local start time.
const TIME_FORMAT: &str = "%H:%M";

const FINAL_LABEL: &str = "FINAL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable line. Scheduled games carry only the first four fields;
/// in-progress and final games add state, scores and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JsonOutput {
    pub away_abbrev: String,
    pub home_abbrev: String,
    pub start_time_local: String,
    pub day_of_week: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

/// Single-line JSON for a team with nothing on the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NoGamesOutput {
    pub message: String,
}

/// The "nothing scheduled" outcome, in the requested format.
pub fn render_no_games(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(NO_GAMES_MESSAGE.to_string()),
        OutputFormat::Json => serde_json::to_string(&NoGamesOutput { message: NO_GAMES_MESSAGE.to_string() })
            .map_err(PumpjackError::Encode),
    }
}

pub fn render<Tz: TimeZone>(next: &NextGame<'_>, tz: &Tz, format: OutputFormat) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    match format {
        OutputFormat::Text => render_text(next, tz),
        OutputFormat::Json => render_json(next, tz),
    }
}

/// Human-readable status line for the game's current state.
pub fn render_text<Tz: TimeZone>(next: &NextGame<'_>, tz: &Tz) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    let game = next.game;
    let (away, home) = (&game.away_team, &game.home_team);
    match &game.state {
        GameState::Scheduled => Ok(format!(
            "{} @ {} | {} @ {}",
            next.day_label,
            local_start_time(game, tz),
            away.abbrev,
            home.abbrev
        )),
        state if state.is_in_progress() => Ok(format!(
            "{} {} - {} - {} {}",
            away.abbrev,
            away.score,
            period_label(game.period.number),
            home.score,
            home.abbrev
        )),
        GameState::Final => Ok(format!(
            "{} {} - {} - {} {}",
            away.abbrev, away.score, FINAL_LABEL, home.score, home.abbrev
        )),
        other => Err(unknown_state(other)),
    }
}

pub fn render_json<Tz: TimeZone>(next: &NextGame<'_>, tz: &Tz) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    let output = json_output(next, tz)?;
    serde_json::to_string(&output).map_err(PumpjackError::Encode)
}

pub fn json_output<Tz: TimeZone>(next: &NextGame<'_>, tz: &Tz) -> Result<JsonOutput>
where
    Tz::Offset: std::fmt::Display,
{
    let game = next.game;
    let mut output = JsonOutput {
        away_abbrev: game.away_team.abbrev.clone(),
        home_abbrev: game.home_team.abbrev.clone(),
        start_time_local: local_start_time(game, tz),
        day_of_week: next.day_label.clone(),
        game_state: None,
        away_score: None,
        home_score: None,
        period: None,
    };

    let period = match &game.state {
        GameState::Scheduled => return Ok(output),
        state if state.is_in_progress() => period_label(game.period.number),
        GameState::Final => FINAL_LABEL.to_string(),
        other => return Err(unknown_state(other)),
    };
    output.game_state = Some(game.state.to_string());
    output.away_score = Some(game.away_team.score);
    output.home_score = Some(game.home_team.score);
    output.period = Some(period);
    Ok(output)
}

/// 1st/2nd/3rd; any other number, including a pregame 0, is "OT".
pub fn period_label(number: u32) -> String {
    match number {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => "OT".to_string(),
    }
}

fn local_start_time<Tz: TimeZone>(game: &Game, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    game.start_time.with_timezone(tz).format(TIME_FORMAT).to_string()
}

fn unknown_state(state: &GameState) -> PumpjackError {
    PumpjackError::UnknownGameState { state: state.to_string() }
}
