// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User preferences the agent consults before acting.

use super::activity::PrivacySetting;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Distance units for messages shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            other => Err(format!(
                "Invalid units '{}'. Must be one of: metric, imperial",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct NotificationSettings {
    pub activity_suggestions: bool,
    pub privacy_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            activity_suggestions: true,
            privacy_reminders: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct UserPreferences {
    pub default_privacy: PrivacySetting,
    /// Suggest names when a new activity is uploaded.
    pub auto_naming: bool,
    pub preferred_units: Units,
    pub notification_settings: NotificationSettings,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_privacy: PrivacySetting::Public,
            auto_naming: true,
            preferred_units: Units::Metric,
            notification_settings: NotificationSettings::default(),
        }
    }
}
