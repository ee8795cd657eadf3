// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Detailed Strava activity (API v3 `DetailedActivity`).

use super::de;
use super::detail::{Athlete, Gear, Kudoser, Lap, Map, SplitMetric};
use super::photo::Photos;
use super::validation::ValidationError;
use crate::time_utils::iso8601;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Who can see an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub enum Visibility {
    Everyone,
    FollowersOnly,
    OnlyMe,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Everyone => "everyone",
            Visibility::FollowersOnly => "followers_only",
            Visibility::OnlyMe => "only_me",
        }
    }
}

/// Privacy choices offered to users; each maps onto a Strava `Visibility`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub enum PrivacySetting {
    Public,
    Private,
    FollowersOnly,
}

impl PrivacySetting {
    pub const ALL: [PrivacySetting; 3] = [
        PrivacySetting::Public,
        PrivacySetting::Private,
        PrivacySetting::FollowersOnly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PrivacySetting::Public => "public",
            PrivacySetting::Private => "private",
            PrivacySetting::FollowersOnly => "followers_only",
        }
    }

    pub fn visibility(self) -> Visibility {
        match self {
            PrivacySetting::Public => Visibility::Everyone,
            PrivacySetting::Private => Visibility::OnlyMe,
            PrivacySetting::FollowersOnly => Visibility::FollowersOnly,
        }
    }
}

impl FromStr for PrivacySetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PrivacySetting::ALL
            .into_iter()
            .find(|setting| setting.as_str() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = PrivacySetting::ALL.iter().map(|p| p.as_str()).collect();
                format!(
                    "Invalid privacy setting '{}'. Must be one of: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

/// Complete Strava activity representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    // --- Identification ---
    pub id: u64,
    pub resource_state: u32,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub upload_id: Option<u64>,
    pub athlete: Athlete,

    // --- Basic info ---
    pub name: String,
    /// Meters
    pub distance: f64,
    /// Seconds
    pub moving_time: u64,
    pub elapsed_time: u64,
    pub total_elevation_gain: f64,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub sport_type: String,

    // --- Timing ---
    #[serde(with = "iso8601")]
    pub start_date: DateTime<Utc>,
    /// Wall-clock start rendered with a `Z` suffix; not checked against
    /// `start_date` and `utc_offset`.
    #[serde(with = "iso8601")]
    pub start_date_local: DateTime<Utc>,
    pub timezone: String,
    /// Seconds
    #[serde(deserialize_with = "de::integral")]
    pub utc_offset: i64,

    // --- Location ---
    #[serde(default, deserialize_with = "de::latlng")]
    pub start_latlng: Option<[f64; 2]>,
    #[serde(default, deserialize_with = "de::latlng")]
    pub end_latlng: Option<[f64; 2]>,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub location_country: Option<String>,

    // --- Social/engagement ---
    pub achievement_count: u32,
    pub kudos_count: u32,
    pub comment_count: u32,
    pub athlete_count: u32,
    pub photo_count: u32,

    pub map: Map,

    // --- Activity settings ---
    pub trainer: bool,
    pub commute: bool,
    pub manual: bool,
    pub private: bool,
    pub flagged: bool,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub gear_id: Option<String>,
    #[serde(default)]
    pub from_accepted_tag: Option<bool>,

    // --- Performance metrics ---
    /// m/s
    pub average_speed: f64,
    pub max_speed: f64,
    #[serde(default)]
    pub average_cadence: Option<f64>,
    #[serde(default, deserialize_with = "de::option_integral")]
    pub average_temp: Option<i64>,
    #[serde(default)]
    pub has_heartrate: bool,
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    #[serde(default, deserialize_with = "de::option_integral")]
    pub max_heartrate: Option<i64>,
    #[serde(default)]
    pub elev_high: Option<f64>,
    #[serde(default)]
    pub elev_low: Option<f64>,

    // --- Achievements ---
    pub pr_count: u32,
    pub total_photo_count: u32,
    pub has_kudoed: bool,
    #[serde(default)]
    pub workout_type: Option<i64>,
    #[serde(default, deserialize_with = "de::option_integral")]
    pub suffer_score: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub calories: Option<f64>,

    // --- Device and metadata ---
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default)]
    pub embed_token: Option<String>,
    #[serde(default)]
    pub segment_leaderboard_opt_out: bool,
    #[serde(default)]
    pub leaderboard_opt_out: bool,

    // --- Detailed breakdowns ---
    #[serde(default)]
    pub splits_metric: Vec<SplitMetric>,
    #[serde(default)]
    pub laps: Vec<Lap>,
    #[serde(default)]
    pub gear: Option<Gear>,
    #[serde(default)]
    pub partner_brand_tag: Option<String>,
    #[serde(default)]
    pub photos: Option<Photos>,
    #[serde(default)]
    pub highlighted_kudosers: Vec<Kudoser>,
    #[serde(default)]
    pub hide_from_home: bool,
    /// Passed through untouched; the API is asked not to include all efforts.
    #[serde(default)]
    pub segment_efforts: Vec<serde_json::Value>,
}

impl Activity {
    /// Decode an untyped JSON payload, failing on the first schema violation.
    pub fn from_json_value(payload: serde_json::Value) -> Result<Self, ValidationError> {
        serde_path_to_error::deserialize(payload).map_err(ValidationError::from_path_error)
    }

    /// Decode a raw response body.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let mut deserializer = serde_json::Deserializer::from_slice(body);
        let activity: Activity = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(ValidationError::from_path_error)?;
        deserializer
            .end()
            .map_err(|e| ValidationError::new(".", e.to_string()))?;
        Ok(activity)
    }

    pub fn from_json_str(body: &str) -> Result<Self, ValidationError> {
        Self::from_json_slice(body.as_bytes())
    }

    /// Pretty-printed wire JSON, as handed to the agent tools.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Effective visibility, falling back to the legacy `private` flag.
    pub fn effective_visibility(&self) -> Visibility {
        match (self.visibility, self.private) {
            (Some(visibility), _) => visibility,
            (None, true) => Visibility::OnlyMe,
            (None, false) => Visibility::Everyone,
        }
    }
}
