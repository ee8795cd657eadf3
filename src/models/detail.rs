// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nested records of a detailed Strava activity.

use super::de;
use crate::time_utils::iso8601;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Athlete summary (meta representation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: u64,
    pub resource_state: u32,
}

/// A lap's back-reference to its activity has the same shape as `Athlete`.
pub type ActivityRef = Athlete;

/// Activity map data with polylines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    pub id: String,
    pub resource_state: u32,
    /// Absent when privacy zones hide the route.
    #[serde(default)]
    pub polyline: Option<String>,
    #[serde(default)]
    pub summary_polyline: Option<String>,
}

impl Map {
    /// Get the detailed polyline, falling back to summary if not available.
    pub fn best_polyline(&self) -> Option<&str> {
        self.polyline
            .as_deref()
            .or(self.summary_polyline.as_deref())
    }
}

/// Shoes or bike used for the activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gear {
    pub id: String,
    pub primary: bool,
    pub name: String,
    pub resource_state: u32,
    /// Meters
    #[serde(deserialize_with = "de::integral")]
    pub distance: i64,
}

/// Athlete highlighted among those who gave kudos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kudoser {
    pub destination_url: String,
    pub display_name: String,
    pub avatar_url: String,
    pub show_name: bool,
}

/// Per-kilometer split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitMetric {
    /// Meters
    pub distance: f64,
    /// Seconds
    pub elapsed_time: u64,
    pub elevation_difference: f64,
    pub moving_time: u64,
    /// 1-based split index
    pub split: u32,
    /// m/s
    pub average_speed: f64,
    pub pace_zone: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    pub id: u64,
    pub resource_state: u32,
    pub name: String,
    pub activity: ActivityRef,
    pub athlete: Athlete,
    pub elapsed_time: u64,
    pub moving_time: u64,
    #[serde(with = "iso8601")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub start_date_local: DateTime<Utc>,
    pub distance: f64,
    pub start_index: u64,
    pub end_index: u64,
    pub total_elevation_gain: f64,
    pub average_speed: f64,
    pub max_speed: f64,
    #[serde(default)]
    pub average_cadence: Option<f64>,
    pub lap_index: u32,
    pub split: u32,
}
