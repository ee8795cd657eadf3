// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::models::{PrivacySetting, Units, UserPreferences};
use std::env;
use std::path::PathBuf;

/// Default Strava API base URL.
pub const STRAVA_API_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Default location of recorded Strava responses.
pub const DEFAULT_FIXTURES_PATH: &str = "tests/fixtures/strava_responses";

/// Which `ActivityClient` implementation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientMode {
    /// Serve activities from fixture files.
    Mock,
    /// Call the Strava API.
    Live,
}

impl std::str::FromStr for ClientMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(ClientMode::Mock),
            "live" | "strava" => Ok(ClientMode::Live),
            _ => Err(()),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_mode: ClientMode,
    /// Bearer token for the Strava API (live mode only)
    pub strava_access_token: String,
    pub strava_base_url: String,
    /// Directory scanned for `activity_<id>_<label>.json` fixtures (mock mode)
    pub fixtures_path: PathBuf,
    /// Shared secret Strava echoes when verifying the webhook subscription
    pub webhook_verify_token: String,
    /// Preferences applied to every conversation
    pub preferences: UserPreferences,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Config for tests: mock client, no network.
    pub fn test_default() -> Self {
        Self {
            client_mode: ClientMode::Mock,
            strava_access_token: String::new(),
            strava_base_url: STRAVA_API_BASE_URL.to_string(),
            fixtures_path: PathBuf::from(DEFAULT_FIXTURES_PATH),
            webhook_verify_token: "test-verify-token".to_string(),
            preferences: UserPreferences::default(),
            port: 8080,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let client_mode = match env::var("STRAVA_CLIENT_MODE") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "STRAVA_CLIENT_MODE",
                value,
            })?,
            Err(_) => ClientMode::Mock,
        };

        let strava_access_token = match client_mode {
            ClientMode::Live => env::var("STRAVA_ACCESS_TOKEN")
                .map(|v| v.trim().to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing("STRAVA_ACCESS_TOKEN"))?,
            ClientMode::Mock => env::var("STRAVA_ACCESS_TOKEN").unwrap_or_default(),
        };

        let defaults = UserPreferences::default();
        let preferences = UserPreferences {
            default_privacy: parse_var::<PrivacySetting>("DEFAULT_PRIVACY")?
                .unwrap_or(defaults.default_privacy),
            preferred_units: parse_var::<Units>("PREFERRED_UNITS")?
                .unwrap_or(defaults.preferred_units),
            auto_naming: parse_var::<bool>("AUTO_NAMING")?.unwrap_or(defaults.auto_naming),
            ..defaults
        };

        Ok(Self {
            client_mode,
            strava_access_token,
            strava_base_url: env::var("STRAVA_API_BASE_URL")
                .unwrap_or_else(|_| STRAVA_API_BASE_URL.to_string()),
            fixtures_path: env::var("FIXTURES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_FIXTURES_PATH)),
            webhook_verify_token: env::var("STRAVA_WEBHOOK_VERIFY_TOKEN").unwrap_or_default(),
            preferences,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }
}

/// Parse an optional variable; unset means `None`, unparsable is an error.
fn parse_var<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}
