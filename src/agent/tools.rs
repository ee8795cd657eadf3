// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tools the agent can call.
//!
//! Each tool has a typed form used by the HTTP routes and invocation
//! workflows. The model-facing forms return a JSON string, with
//! `{"error": ...}` in place of a result on failure.

use crate::clients::{ActivityClient, ActivityUpdate};
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivitySummary, PrivacySetting, UserPreferences, Visibility};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Render a tool result for the model.
pub fn to_tool_output<T: Serialize>(result: Result<T>, failure: &str) -> String {
    let rendered = result.and_then(|value| {
        serde_json::to_string_pretty(&value).map_err(|e| AppError::Internal(e.into()))
    });
    match rendered {
        Ok(json) => json,
        Err(e) => serde_json::json!({ "error": format!("{}: {}", failure, e) }).to_string(),
    }
}

/// Fetch an activity and render it as wire JSON.
pub async fn get_activity_details(client: &dyn ActivityClient, activity_id: &str) -> String {
    let result = client.fetch(activity_id).await.map_err(AppError::from);
    to_tool_output(result, "Failed to fetch activity details")
}

/// Default number of activities listed by `get_recent_activities`.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Strava's page size cap for activity lists.
pub const MAX_RECENT_LIMIT: usize = 200;

/// Recently recorded activities, in the shape returned to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivities {
    pub activities: Vec<ActivitySummary>,
}

/// Up to `limit` recent activities, newest first; `limit` is clamped to
/// `1..=MAX_RECENT_LIMIT`.
pub async fn recent_activities(
    client: &dyn ActivityClient,
    limit: usize,
) -> Result<RecentActivities> {
    let limit = limit.clamp(1, MAX_RECENT_LIMIT);
    let activities = client.recent_activities(limit).await?;
    Ok(RecentActivities { activities })
}

pub async fn get_recent_activities(client: &dyn ActivityClient, limit: usize) -> String {
    to_tool_output(
        recent_activities(client, limit).await,
        "Failed to fetch recent activities",
    )
}

/// The user's preferences and notification settings.
pub fn get_user_preferences(preferences: &UserPreferences) -> String {
    to_tool_output(Ok(preferences), "Failed to fetch user preferences")
}

/// The bits of an activity that name suggestions are built from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameHints {
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub sport_type: Option<String>,
    /// Meters
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub location_city: Option<String>,
}

impl From<&Activity> for NameHints {
    fn from(activity: &Activity) -> Self {
        Self {
            activity_type: Some(activity.activity_type.clone()),
            sport_type: Some(activity.sport_type.clone()),
            distance: activity.distance,
            location_city: activity.location_city.clone(),
        }
    }
}

impl NameHints {
    fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }

    fn kind(&self) -> &str {
        self.sport_type
            .as_deref()
            .or(self.activity_type.as_deref())
            .filter(|kind| !kind.is_empty())
            .unwrap_or("Activity")
    }

    /// Three title suggestions, deterministic for the same hints.
    pub fn suggestions(&self) -> Vec<String> {
        let km = format!("{:.1}K", self.distance_km());
        let location = self.location_city.as_deref().filter(|l| !l.is_empty());
        let kind = self.kind();

        match kind.to_ascii_lowercase().as_str() {
            "run" | "trailrun" | "virtualrun" => vec![
                location
                    .map(|l| format!("Morning Miles in {}", l))
                    .unwrap_or_else(|| "Dawn Dash Adventure".to_string()),
                format!("{} Rhythm & Flow", km),
                "Pavement Poetry Session".to_string(),
            ],
            "ride" | "cycling" | "virtualride" | "gravelride" | "mountainbikeride"
            | "ebikeride" => vec![
                location
                    .map(|l| format!("Spinning Through {}", l))
                    .unwrap_or_else(|| "Wind & Wheels Journey".to_string()),
                format!("{} Pedal Power", km),
                "Two-Wheel Therapy".to_string(),
            ],
            _ => vec![
                format!("Epic {} Adventure", kind),
                format!("{} Challenge Conquered", km),
                "Personal Victory Lap".to_string(),
            ],
        }
    }
}

/// Suggested titles, in the shape returned to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct CreativeNames {
    pub creative_names: Vec<String>,
}

pub fn creative_names(activity: &Activity) -> CreativeNames {
    CreativeNames {
        creative_names: NameHints::from(activity).suggestions(),
    }
}

/// Suggest titles from activity details JSON (as produced by
/// `get_activity_details`).
pub fn generate_creative_names(activity_details: &str) -> String {
    let result = serde_json::from_str::<NameHints>(activity_details)
        .map(|hints| CreativeNames {
            creative_names: hints.suggestions(),
        })
        .map_err(|e| AppError::BadRequest(format!("activity details are not valid JSON: {}", e)));
    to_tool_output(result, "Failed to generate creative names")
}

/// Result of renaming an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct NameUpdateResult {
    pub success: bool,
    pub activity_id: String,
    pub old_name: String,
    pub new_name: String,
    pub message: String,
}

pub async fn update_activity_name(
    client: &dyn ActivityClient,
    activity_id: &str,
    new_name: &str,
) -> Result<NameUpdateResult> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(AppError::BadRequest("Activity name cannot be empty".to_string()));
    }

    let current = client.fetch(activity_id).await?;
    let updated = client
        .update(activity_id, &ActivityUpdate::rename(new_name))
        .await?;

    tracing::info!(activity_id, old_name = %current.name, new_name = %updated.name, "Activity renamed");

    Ok(NameUpdateResult {
        success: true,
        activity_id: activity_id.to_string(),
        message: format!("Activity renamed to '{}'", updated.name),
        old_name: current.name,
        new_name: updated.name,
    })
}

/// Result of changing an activity's privacy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct PrivacyUpdateResult {
    pub success: bool,
    pub activity_id: String,
    pub privacy_setting: PrivacySetting,
    pub visibility: Visibility,
    pub message: String,
}

pub async fn update_activity_privacy(
    client: &dyn ActivityClient,
    activity_id: &str,
    privacy_setting: &str,
) -> Result<PrivacyUpdateResult> {
    let setting: PrivacySetting = privacy_setting.parse().map_err(AppError::BadRequest)?;
    let updated = client
        .update(activity_id, &ActivityUpdate::visibility(setting.visibility()))
        .await?;

    tracing::info!(activity_id, privacy = setting.as_str(), "Activity privacy updated");

    Ok(PrivacyUpdateResult {
        success: true,
        activity_id: activity_id.to_string(),
        privacy_setting: setting,
        visibility: updated.effective_visibility(),
        message: format!("Activity privacy updated to '{}'", setting.as_str()),
    })
}
