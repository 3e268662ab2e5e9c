use std::time::Duration;

use chrono_tz::Tz;

use crate::error::{PumpjackError, Result};

pub const TEAM_URL: &str = "https://api.nhle.com/stats/rest/en/team";

/// The current date (`YYYY-MM-DD`) is appended to this.
pub const SCHEDULE_URL: &str = "https://api-web.nhle.com/v1/schedule/";

pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// `chrono` format for the date suffix of the schedule endpoint.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct Config {
    pub team_url: String,
    pub schedule_url: String,
    /// Zone used for "today", day labels and rendered start times (PUMPJACK_TIMEZONE).
    /// `None` means the system local zone.
    pub timezone: Option<Tz>,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            team_url: TEAM_URL.to_string(),
            schedule_url: SCHEDULE_URL.to_string(),
            timezone: None,
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so overrides can be exercised without touching the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let timezone = match non_blank("PUMPJACK_TIMEZONE") {
            Some(name) => Some(
                name.parse::<Tz>()
                    .map_err(|_| PumpjackError::Config(format!("PUMPJACK_TIMEZONE is not a known timezone: {name}")))?,
            ),
            None => None,
        };

        let http_timeout = match non_blank("PUMPJACK_HTTP_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(secs.parse::<u64>().map_err(|_| {
                PumpjackError::Config(format!("PUMPJACK_HTTP_TIMEOUT_SECS must be a whole number of seconds: {secs}"))
            })?),
            None => defaults.http_timeout,
        };

        Ok(Self {
            team_url: non_blank("PUMPJACK_TEAM_URL").unwrap_or(defaults.team_url),
            schedule_url: non_blank("PUMPJACK_SCHEDULE_URL").unwrap_or(defaults.schedule_url),
            timezone,
            http_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.team_url, TEAM_URL);
        assert_eq!(config.schedule_url, SCHEDULE_URL);
        assert!(config.timezone.is_none());
        assert_eq!(config.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            ("PUMPJACK_TIMEZONE", "America/Edmonton"),
            ("PUMPJACK_HTTP_TIMEOUT_SECS", "3"),
            ("PUMPJACK_SCHEDULE_URL", "http://localhost:8080/schedule/"),
        ]))
        .unwrap();
        assert_eq!(config.timezone, Some(chrono_tz::America::Edmonton));
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.schedule_url, "http://localhost:8080/schedule/");
        assert_eq!(config.team_url, TEAM_URL);
    }

    #[test]
    fn bad_timezone_is_rejected() {
        let err = Config::from_lookup(lookup(&[("PUMPJACK_TIMEZONE", "Mars/Olympus")])).unwrap_err();
        assert!(matches!(err, PumpjackError::Config(_)));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = Config::from_lookup(lookup(&[("PUMPJACK_HTTP_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, PumpjackError::Config(_)));
    }
}
