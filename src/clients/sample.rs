// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Deterministic sample activity served for ids without a fixture.

use serde_json::{json, Value};

/// Athlete that owns every sample activity.
pub const SAMPLE_ATHLETE_ID: u64 = 134815;

/// Build a fully populated activity payload for `activity_id`.
///
/// Every value is fixed except the identifiers derived from the id:
/// `id`, `external_id`, `name`, `map.id`, the lap's activity reference and
/// the primary photo's `unique_id`.
pub fn sample_activity_payload(activity_id: u64) -> Value {
    let mut payload = json!({
        "id": activity_id,
        "resource_state": 3,
        "external_id": format!("mock_activity_{}", activity_id),
        "upload_id": 98765432123456789u64,
        "athlete": {
            "id": SAMPLE_ATHLETE_ID,
            "resource_state": 1
        },
        "name": format!("Mock Activity {}", activity_id),
        "distance": 5240.2,
        "moving_time": 1847,
        "elapsed_time": 1932,
        "total_elevation_gain": 85.4,
        "type": "Run",
        "sport_type": "Run",
        "start_date": "2024-01-15T07:30:00Z",
        "start_date_local": "2024-01-14T23:30:00Z",
        "timezone": "(GMT-08:00) America/Los_Angeles",
        "utc_offset": -28800,
        "start_latlng": [37.7749, -122.4194],
        "end_latlng": [37.7749, -122.4194],
        "location_city": "San Francisco",
        "location_state": "California",
        "location_country": "United States"
    });
    extend(
        &mut payload,
        json!({
            "achievement_count": 2,
            "kudos_count": 12,
            "comment_count": 3,
            "athlete_count": 1,
            "photo_count": 2,
            "map": {
                "id": format!("a{}", activity_id),
                "polyline": "ki{eFvqfiVqAWQIGEEKAYJgBVqDJ{BHa@jAkNJw@Pw@V{APs@^aABQAOEQGKoJ_FuJkFqAo@{A}@sH{DiAs@Q]?WVy@`@oBt@_CB]KYMMkB{AQEI@WT{BlE{@zAQPI@ICsCqA_BcAeCmAaFmCqIoEcLeG}KcG}A}@cDaBiDsByAkAuBqBi@y@_@o@o@kB}BgIoA_EUkAMcACa@BeBBq@LaAJe@b@uA`@_AdBcD",
                "resource_state": 3,
                "summary_polyline": "ki{eFvqfiVsBmA`Feh@qg@iX`B}JeCcCqGjIq~@kf@cM{KeHeX"
            },
            "trainer": false,
            "commute": false,
            "manual": false,
            "private": false,
            "visibility": "everyone",
            "flagged": false,
            "gear_id": "g12345678987654321",
            "from_accepted_tag": false
        }),
    );
    extend(
        &mut payload,
        json!({
            "average_speed": 2.84,
            "max_speed": 4.2,
            "average_cadence": 180.0,
            "average_temp": 18,
            "has_heartrate": true,
            "average_heartrate": 165.3,
            "max_heartrate": 184,
            "elev_high": 125.6,
            "elev_low": 40.2,
            "pr_count": 1,
            "total_photo_count": 2,
            "has_kudoed": false,
            "workout_type": null,
            "suffer_score": 85,
            "description": "Mock activity for testing purposes",
            "calories": 347.2,
            "device_name": "Garmin Forerunner 945",
            "embed_token": "mock_embed_token",
            "segment_leaderboard_opt_out": false,
            "leaderboard_opt_out": false
        }),
    );
    extend(
        &mut payload,
        json!({
            "splits_metric": [
                {
                    "distance": 1000.0,
                    "elapsed_time": 352,
                    "elevation_difference": 5.2,
                    "moving_time": 352,
                    "split": 1,
                    "average_speed": 2.84,
                    "pace_zone": 0
                }
            ],
            "laps": [
                {
                    "id": 4479306946u64,
                    "resource_state": 2,
                    "name": "Lap 1",
                    "activity": {
                        "id": activity_id,
                        "resource_state": 1
                    },
                    "athlete": {
                        "id": SAMPLE_ATHLETE_ID,
                        "resource_state": 1
                    },
                    "elapsed_time": 1847,
                    "moving_time": 1847,
                    "start_date": "2024-01-15T07:30:00Z",
                    "start_date_local": "2024-01-14T23:30:00Z",
                    "distance": 5240.2,
                    "start_index": 0,
                    "end_index": 1847,
                    "total_elevation_gain": 85.4,
                    "average_speed": 2.84,
                    "max_speed": 4.2,
                    "average_cadence": 180.0,
                    "lap_index": 1,
                    "split": 1
                }
            ],
            "gear": {
                "id": "g12345678987654321",
                "primary": true,
                "name": "Nike Air Zoom Pegasus",
                "resource_state": 2,
                "distance": 485320
            },
            "partner_brand_tag": null,
            "photos": {
                "primary": {
                    "id": null,
                    "unique_id": format!("mock-photo-{}", activity_id),
                    "urls": {
                        "100": "https://example.com/photo-100.jpg",
                        "600": "https://example.com/photo-600.jpg"
                    },
                    "source": 1
                },
                "use_primary_photo": true,
                "count": 2
            },
            "highlighted_kudosers": [
                {
                    "destination_url": "strava://athletes/mock123",
                    "display_name": "Mock User",
                    "avatar_url": "https://example.com/avatar.jpg",
                    "show_name": true
                }
            ],
            "hide_from_home": false,
            "segment_efforts": []
        }),
    );

    payload
}

/// Merge the entries of `section` into `payload`.
fn extend(payload: &mut Value, section: Value) {
    if let (Value::Object(target), Value::Object(entries)) = (payload, section) {
        target.extend(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, PhotoSize};

    #[test]
    fn test_sample_payload_is_a_valid_activity() {
        let activity = Activity::from_json_value(sample_activity_payload(999)).unwrap();
        assert_eq!(activity.id, 999);
        assert_eq!(activity.external_id.as_deref(), Some("mock_activity_999"));
        assert_eq!(activity.map.id, "a999");
        assert_eq!(activity.laps[0].activity.id, 999);
        assert_eq!(activity.athlete.id, SAMPLE_ATHLETE_ID);

        let photo = activity.photos.unwrap().primary.unwrap();
        assert_eq!(photo.unique_id, "mock-photo-999");
        assert_eq!(
            photo.urls.get(PhotoSize::Px600),
            "https://example.com/photo-600.jpg"
        );
    }

    #[test]
    fn test_sample_payload_is_deterministic() {
        assert_eq!(sample_activity_payload(7), sample_activity_payload(7));
        assert_ne!(sample_activity_payload(7), sample_activity_payload(8));
    }
}
