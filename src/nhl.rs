use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{error, info, info_span, instrument};

use crate::config::{Config, DATE_FORMAT};
use crate::error::{PumpjackError, Result};
use crate::model::schedule::ScheduleWindow;
use crate::model::team::{TeamDocument, TeamRecord};

/// Blocking client for the two public NHL endpoints this tool reads.
#[derive(Clone)]
pub struct NhlApi {
    agent: ureq::Agent,
    team_url: String,
    schedule_url: String,
}

impl NhlApi {
    pub fn new(config: &Config) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(config.http_timeout))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(agent_config),
            team_url: config.team_url.clone(),
            schedule_url: config.schedule_url.clone(),
        }
    }

    /// Fetch the full team catalog, in the order the API lists it.
    pub fn fetch_teams(&self) -> Result<Vec<TeamRecord>> {
        let body = self.get(&self.team_url)?;
        let teams = teams_from_json(&body)?;
        info!(count = teams.len(), "Fetched team catalog");
        Ok(teams)
    }

    /// Fetch the week of games starting at `date`.
    pub fn fetch_schedule(&self, date: NaiveDate) -> Result<ScheduleWindow> {
        let url = schedule_url_for(&self.schedule_url, date);
        let body = self.get(&url)?;
        let window = schedule_from_json(&body)?;
        info!(days = window.game_days.len(), games = window.games().count(), "Fetched schedule window");
        Ok(window)
    }

    fn get(&self, url: &str) -> Result<String> {
        let _span = info_span!("nhl_fetch", url = %url).entered();
        let http_error = |source: ureq::Error| {
            error!(error = %source, url = %url, "Request failed");
            PumpjackError::Http { url: url.to_string(), source }
        };
        let response = self.agent.get(url).call().map_err(http_error)?;
        response.into_body().read_to_string().map_err(http_error)
    }
}

pub fn schedule_url_for(base: &str, date: NaiveDate) -> String {
    format!("{}{}", base, date.format(DATE_FORMAT))
}

/// Decode a team catalog body (no network).
pub fn teams_from_json(body: &str) -> Result<Vec<TeamRecord>> {
    decode::<TeamDocument>(body, "team catalog").map(|doc| doc.data)
}

/// Decode a schedule body (no network).
pub fn schedule_from_json(body: &str) -> Result<ScheduleWindow> {
    decode(body, "schedule window")
}

#[instrument(level = "debug", skip(body), fields(bytes = body.len()))]
fn decode<T: DeserializeOwned>(body: &str, what: &'static str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| {
        error!(error = %source, what, "Failed to decode response");
        PumpjackError::Decode { what, source }
    })
}
