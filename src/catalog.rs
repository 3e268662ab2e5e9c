use tracing::{debug, instrument};

use crate::error::{PumpjackError, Result};
use crate::model::game::GameParticipant;
use crate::model::team::TeamRecord;

/// What the user typed to pick a team, classified once at the argument boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// `raw` is the argument as typed, kept for diagnostics.
    Numeric { id: u32, raw: String },
    Text(String),
}

impl Identifier {
    /// All-digit input is a team id; anything else is matched as text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = trimmed.parse::<u32>() {
                return Identifier::Numeric { id, raw: raw.to_string() };
            }
        }
        Identifier::Text(raw.to_string())
    }

    pub fn numeric(id: u32) -> Self {
        Identifier::Numeric { id, raw: id.to_string() }
    }

    pub fn raw(&self) -> &str {
        match self {
            Identifier::Numeric { raw, .. } => raw,
            Identifier::Text(text) => text,
        }
    }
}

/// Walk the catalog in order and return the first team that matches.
///
/// Text is trimmed and upper-cased, then compared per team: exact abbreviation
/// first (only when the lengths agree), then substring of the full name. A name
/// hit on an earlier team beats an abbreviation hit on a later one.
#[instrument(level = "debug", skip(teams), fields(teams = teams.len()))]
pub fn find_team<'a>(identifier: &Identifier, teams: &'a [TeamRecord]) -> Result<&'a TeamRecord> {
    let found = match identifier {
        Identifier::Numeric { id, .. } => teams.iter().find(|team| team.id == *id),
        Identifier::Text(text) => {
            let needle = text.trim().to_uppercase();
            if needle.is_empty() {
                None
            } else {
                teams.iter().find(|team| matches_text(&needle, team))
            }
        }
    };

    match found {
        Some(team) => {
            debug!(id = team.id, abbrev = %team.abbrev, name = %team.full_name, "Resolved team");
            Ok(team)
        }
        None => Err(PumpjackError::NotFound { identifier: identifier.raw().to_string() }),
    }
}

/// Same as [`find_team`], projected down to the shape the schedule feed uses.
pub fn find_participant(identifier: &Identifier, teams: &[TeamRecord]) -> Result<GameParticipant> {
    find_team(identifier, teams).map(|team| GameParticipant::new(team.id, team.abbrev.clone(), 0))
}

fn matches_text(needle: &str, team: &TeamRecord) -> bool {
    let abbrev = team.abbrev.to_uppercase();
    if needle.len() == abbrev.len() && needle == abbrev {
        return true;
    }
    team.full_name.to_uppercase().contains(needle)
}
