// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summary activity representation, as listed by `GET /athlete/activities`.
//!
//! Listed activities are less detailed than `GET /activities/{id}` (no laps,
//! splits or photos), so only the fields the agent shows are decoded.

use super::activity::Activity;
use super::validation::ValidationError;
use crate::time_utils::iso8601;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(default)]
    pub sport_type: Option<String>,
    /// Meters
    pub distance: f64,
    #[serde(with = "iso8601")]
    pub start_date: DateTime<Utc>,
}

impl From<&Activity> for ActivitySummary {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name.clone(),
            activity_type: activity.activity_type.clone(),
            sport_type: Some(activity.sport_type.clone()),
            distance: activity.distance,
            start_date: activity.start_date,
        }
    }
}

impl ActivitySummary {
    /// Decode a list response body, naming the offending element on failure.
    pub fn list_from_json_slice(body: &[u8]) -> Result<Vec<Self>, ValidationError> {
        let mut deserializer = serde_json::Deserializer::from_slice(body);
        let summaries: Vec<ActivitySummary> = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(ValidationError::from_path_error)?;
        deserializer
            .end()
            .map_err(|e| ValidationError::new(".", e.to_string()))?;
        Ok(summaries)
    }

    /// Newest first; ties broken by id so the order is stable.
    pub fn sort_newest_first(summaries: &mut [ActivitySummary]) {
        summaries.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_parses_summary_fields_only() {
        let body = br#"[
            {"id": 2, "name": "Evening Ride", "type": "Ride", "sport_type": "Ride",
             "distance": 20000.5, "start_date": "2024-01-15T17:00:00Z",
             "map": {"id": "a2", "summary_polyline": "xyz", "resource_state": 2}},
            {"id": 1, "name": "Morning Run", "type": "Run",
             "distance": 5000.0, "start_date": "2024-01-15T07:30:00Z"}
        ]"#;
        let summaries = ActivitySummary::list_from_json_slice(body).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].activity_type, "Ride");
        assert_eq!(summaries[1].sport_type, None);
    }

    #[test]
    fn test_list_error_names_element() {
        let body = br#"[{"id": 1, "name": "A", "type": "Run", "distance": 1.0,
                          "start_date": "2024-01-15T07:30:00Z"},
                         {"id": 2, "name": "B", "type": "Run", "distance": 1.0}]"#;
        let err = ActivitySummary::list_from_json_slice(body).unwrap_err();
        assert_eq!(err.field_path(), "[1].start_date");
    }

    #[test]
    fn test_sort_newest_first() {
        let body = br#"[
            {"id": 1, "name": "Old", "type": "Run", "distance": 1.0, "start_date": "2024-01-10T07:30:00Z"},
            {"id": 3, "name": "New", "type": "Run", "distance": 1.0, "start_date": "2024-01-12T07:30:00Z"},
            {"id": 2, "name": "Same day", "type": "Run", "distance": 1.0, "start_date": "2024-01-12T07:30:00Z"}
        ]"#;
        let mut summaries = ActivitySummary::list_from_json_slice(body).unwrap();
        ActivitySummary::sort_newest_first(&mut summaries);
        let ids: Vec<u64> = summaries.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
