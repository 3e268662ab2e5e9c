use chrono::{DateTime, Local, TimeZone, Utc};
use clap::Parser;
use tracing::{info, instrument};

use crate::catalog::{self, Identifier};
use crate::config::Config;
use crate::error::{PumpjackError, Result};
use crate::model::schedule::ScheduleWindow;
use crate::model::team::TeamRecord;
use crate::nhl::NhlApi;
use crate::schedule;
use crate::status::{self, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "pumpjack")]
#[command(about = "Show the next NHL game for a team")]
pub struct Cli {
    /// Print a single-line JSON object instead of text
    #[arg(long)]
    pub json: bool,

    /// Team id, abbreviation (EDM) or part of the team name (oilers)
    #[arg(value_name = "TEAM")]
    pub team: Vec<String>,
}

impl Cli {
    /// The single team argument, classified. Anything other than exactly one is an error.
    pub fn identifier(&self) -> Result<Identifier> {
        match self.team.as_slice() {
            [raw] => Ok(Identifier::parse(raw)),
            other => Err(PumpjackError::InvalidArgumentCount { count: other.len() }),
        }
    }

    pub fn format(&self) -> OutputFormat {
        if self.json { OutputFormat::Json } else { OutputFormat::Text }
    }
}

/// Resolve, fetch and render. Returns the line to print.
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    let identifier = cli.identifier()?;
    let api = NhlApi::new(config);
    match config.timezone {
        Some(tz) => run_in(&api, &identifier, &Utc::now().with_timezone(&tz), cli.format()),
        None => run_in(&api, &identifier, &Local::now(), cli.format()),
    }
}

#[instrument(level = "info", skip(api, now))]
fn run_in<Tz: TimeZone>(api: &NhlApi, identifier: &Identifier, now: &DateTime<Tz>, format: OutputFormat) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    let teams = api.fetch_teams()?;
    let team = catalog::find_participant(identifier, &teams)?;
    info!(id = team.id, abbrev = %team.abbrev, "Resolved team");
    let window = api.fetch_schedule(now.date_naive())?;
    next_game_line(&team.abbrev, &window, now, format)
}

/// Everything after the fetches: search the window and render what was found.
pub fn next_game_line<Tz: TimeZone>(abbrev: &str, window: &ScheduleWindow, now: &DateTime<Tz>, format: OutputFormat) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    match schedule::find_next_game(window, abbrev, now) {
        Some(next) => status::render(&next, &now.timezone(), format),
        None => status::render_no_games(format),
    }
}

/// Convenience for callers that already hold both payloads.
pub fn status_line<Tz: TimeZone>(
    identifier: &Identifier,
    teams: &[TeamRecord],
    window: &ScheduleWindow,
    now: &DateTime<Tz>,
    format: OutputFormat,
) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    let team = catalog::find_participant(identifier, teams)?;
    next_game_line(&team.abbrev, window, now, format)
}

/// Where a finished run's text goes and how the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Stdout(String),
    Stderr(String),
}

impl Report {
    pub fn from_outcome(outcome: Result<String>) -> Self {
        match outcome {
            Ok(line) => Report::Stdout(line),
            Err(e) => Report::Stderr(format!("ERROR: {}", e)),
        }
    }

    /// 0 for any printed result, including "no games"; 1 for every failure.
    pub fn exit_status(&self) -> u8 {
        match self {
            Report::Stdout(_) => 0,
            Report::Stderr(_) => 1,
        }
    }
}
