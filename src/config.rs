// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Strava credentials are injected here and never live in source.

use chrono::{Duration, NaiveDate};
use std::env;

const DEFAULT_TOKEN_URL: &str = "https://www.strava.com/oauth/token";
const DEFAULT_ACTIVITIES_URL: &str = "https://www.strava.com/api/v3/athlete/activities";

/// 53 full weeks, enough to fill a year-wide grid.
pub const DEFAULT_WINDOW_DAYS: u32 = 53 * 7;
/// Rolling windows start 52 weeks before today.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 364;
/// Upper bound for window length and lookback (about a century).
pub const MAX_WINDOW_DAYS: u32 = 36_600;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Static Strava credential triple
    pub credentials: StravaCredentials,
    /// OAuth token endpoint
    pub token_endpoint: String,
    /// Athlete activities list endpoint
    pub activities_endpoint: String,
    /// Date range rendered by the grid
    pub window: GridWindow,
    /// What to do with earlier pages when a later page fails
    pub page_failure: PageFailurePolicy,
    /// Server port
    pub port: u16,
}

/// Long-lived Strava credentials exchanged for access tokens.
#[derive(Clone)]
pub struct StravaCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for StravaCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StravaCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Where the grid starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStart {
    /// A fixed calendar date; month labels are rendered.
    Fixed(NaiveDate),
    /// A number of days before today.
    Rolling { lookback_days: u32 },
}

/// Date window rendered by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWindow {
    pub start: WindowStart,
    pub length_days: u32,
}

impl GridWindow {
    pub fn fixed(start: NaiveDate, length_days: u32) -> Self {
        Self {
            start: WindowStart::Fixed(start),
            length_days,
        }
    }

    pub fn rolling(lookback_days: u32, length_days: u32) -> Self {
        Self {
            start: WindowStart::Rolling { lookback_days },
            length_days,
        }
    }

    /// Window start before alignment to Sunday.
    pub fn nominal_start(&self, today: NaiveDate) -> NaiveDate {
        match self.start {
            WindowStart::Fixed(start) => start,
            WindowStart::Rolling { lookback_days } => today
                .checked_sub_signed(Duration::days(i64::from(lookback_days)))
                .unwrap_or(NaiveDate::MIN),
        }
    }

    /// Month labels only make sense for a fixed calendar range.
    pub fn shows_month_labels(&self) -> bool {
        matches!(self.start, WindowStart::Fixed(_))
    }
}

impl Default for GridWindow {
    fn default() -> Self {
        Self::rolling(DEFAULT_LOOKBACK_DAYS, DEFAULT_WINDOW_DAYS)
    }
}

/// Handling of pages already fetched when a later page request fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageFailurePolicy {
    /// Keep the pages fetched so far.
    #[default]
    KeepPartial,
    /// Drop everything and render an empty grid.
    DiscardAll,
}

impl std::str::FromStr for PageFailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" | "keep_partial" => Ok(Self::KeepPartial),
            "discard" | "discard_all" => Ok(Self::DiscardAll),
            _ => Err(ConfigError::Invalid("GRID_PAGE_FAILURE", s.to_string())),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let credentials = StravaCredentials {
            client_id: required("STRAVA_CLIENT_ID")?,
            client_secret: required("STRAVA_CLIENT_SECRET")?,
            refresh_token: required("STRAVA_REFRESH_TOKEN")?,
        };

        let length_days =
            parse_optional(&lookup, "GRID_WINDOW_DAYS")?.unwrap_or(DEFAULT_WINDOW_DAYS);
        if length_days == 0 || length_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::Invalid(
                "GRID_WINDOW_DAYS",
                length_days.to_string(),
            ));
        }

        let window = match lookup("GRID_WINDOW_START") {
            Some(raw) => {
                let start = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| ConfigError::Invalid("GRID_WINDOW_START", raw.clone()))?;
                GridWindow::fixed(start, length_days)
            }
            None => {
                let lookback = parse_optional(&lookup, "GRID_LOOKBACK_DAYS")?
                    .unwrap_or(DEFAULT_LOOKBACK_DAYS);
                if lookback > MAX_WINDOW_DAYS {
                    return Err(ConfigError::Invalid(
                        "GRID_LOOKBACK_DAYS",
                        lookback.to_string(),
                    ));
                }
                GridWindow::rolling(lookback, length_days)
            }
        };

        let page_failure = lookup("GRID_PAGE_FAILURE")
            .map(|raw| raw.parse::<PageFailurePolicy>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            credentials,
            token_endpoint: lookup("STRAVA_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            activities_endpoint: lookup("STRAVA_ACTIVITIES_URL")
                .unwrap_or_else(|| DEFAULT_ACTIVITIES_URL.to_string()),
            window,
            page_failure,
            port: parse_optional(&lookup, "PORT")?.unwrap_or(8080),
        })
    }

    /// Deterministic config for tests. Endpoints point nowhere useful.
    pub fn test_default() -> Self {
        Self {
            credentials: StravaCredentials {
                client_id: "test_client_id".to_string(),
                client_secret: "test_secret".to_string(),
                refresh_token: "test_refresh_token".to_string(),
            },
            token_endpoint: "http://127.0.0.1:9/oauth/token".to_string(),
            activities_endpoint: "http://127.0.0.1:9/api/v3/athlete/activities".to_string(),
            window: GridWindow::default(),
            page_failure: PageFailurePolicy::KeepPartial,
            port: 8080,
        }
    }
}

fn parse_optional<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(key, raw.clone()))
        })
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = [
            ("STRAVA_CLIENT_ID", "test_id"),
            ("STRAVA_CLIENT_SECRET", "test_secret"),
            ("STRAVA_REFRESH_TOKEN", "test_refresh"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        for (k, v) in pairs {
            map.insert(k.to_string(), v.to_string());
        }
        map
    }

    fn load(map: &HashMap<String, String>) -> Result<Config, ConfigError> {
        Config::from_vars(|key| map.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = load(&vars(&[])).expect("Config should load");

        assert_eq!(config.credentials.client_id, "test_id");
        assert_eq!(config.credentials.refresh_token, "test_refresh");
        assert_eq!(config.token_endpoint, DEFAULT_TOKEN_URL);
        assert_eq!(config.activities_endpoint, DEFAULT_ACTIVITIES_URL);
        assert_eq!(config.window, GridWindow::rolling(364, 371));
        assert_eq!(config.page_failure, PageFailurePolicy::KeepPartial);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_missing_refresh_token() {
        let mut map = vars(&[]);
        map.remove("STRAVA_REFRESH_TOKEN");

        let err = load(&map).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("STRAVA_REFRESH_TOKEN")));
    }

    #[test]
    fn test_fixed_window_and_discard_policy() {
        let config = load(&vars(&[
            ("GRID_WINDOW_START", "2025-04-01"),
            ("GRID_PAGE_FAILURE", "discard"),
        ]))
        .unwrap();

        let start = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert_eq!(config.window, GridWindow::fixed(start, 371));
        assert!(config.window.shows_month_labels());
        assert_eq!(config.page_failure, PageFailurePolicy::DiscardAll);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            load(&vars(&[("GRID_WINDOW_START", "April 1st")])),
            Err(ConfigError::Invalid("GRID_WINDOW_START", _))
        ));
        assert!(matches!(
            load(&vars(&[("GRID_WINDOW_DAYS", "lots")])),
            Err(ConfigError::Invalid("GRID_WINDOW_DAYS", _))
        ));
        assert!(matches!(
            load(&vars(&[("GRID_PAGE_FAILURE", "maybe")])),
            Err(ConfigError::Invalid("GRID_PAGE_FAILURE", _))
        ));
    }

    #[test]
    fn test_oversized_windows_rejected() {
        assert!(matches!(
            load(&vars(&[("GRID_LOOKBACK_DAYS", "4000000000")])),
            Err(ConfigError::Invalid("GRID_LOOKBACK_DAYS", _))
        ));
        assert!(matches!(
            load(&vars(&[("GRID_WINDOW_DAYS", "36601")])),
            Err(ConfigError::Invalid("GRID_WINDOW_DAYS", _))
        ));
        assert!(matches!(
            load(&vars(&[("GRID_WINDOW_DAYS", "0")])),
            Err(ConfigError::Invalid("GRID_WINDOW_DAYS", _))
        ));

        let config = load(&vars(&[
            ("GRID_LOOKBACK_DAYS", "36600"),
            ("GRID_WINDOW_DAYS", "36600"),
        ]))
        .unwrap();
        assert_eq!(config.window, GridWindow::rolling(36_600, 36_600));
    }

    #[test]
    fn test_nominal_start_saturates() {
        let window = GridWindow::rolling(u32::MAX, 7);
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(window.nominal_start(today), NaiveDate::MIN);
    }

    #[test]
    fn test_rolling_nominal_start() {
        let window = GridWindow::default();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            window.nominal_start(today),
            NaiveDate::from_ymd_opt(2025, 10, 17).unwrap()
        );
        assert!(!window.shows_month_labels());
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let config = load(&vars(&[])).unwrap();
        let debug = format!("{:?}", config.credentials);
        assert!(debug.contains("test_id"));
        assert!(!debug.contains("test_secret"));
        assert!(!debug.contains("test_refresh"));
    }
}
