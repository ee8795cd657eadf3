// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP routes: health, agent invocations and the activity API.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use metamatic::clients::ActivityClient;
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_ping() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "Healthy");
}

#[tokio::test]
async fn test_get_activity_returns_wire_json() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/activities/{}", common::LUNCH_RIDE_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["name"], "Lunch Ride");
    assert_eq!(body["type"], "Ride");
    assert!(body["photos"]["primary"]["urls"]["600"].is_string());
}

#[tokio::test]
async fn test_get_activity_invalid_id() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/activities/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_rename_activity() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/activities/{}/name", common::LUNCH_RIDE_ID),
            &json!({ "name": "  Foothills Loop " }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["old_name"], "Lunch Ride");
    assert_eq!(body["new_name"], "Foothills Loop");

    let activity = state.client.fetch(common::LUNCH_RIDE_ID).await.unwrap();
    assert_eq!(activity.name, "Foothills Loop");
}

#[tokio::test]
async fn test_rename_rejects_blank_name() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "PUT",
            "/api/activities/1/name",
            &json!({ "name": "   " }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_privacy_update() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "PUT",
            "/api/activities/42/privacy",
            &json!({ "privacy_setting": "Private" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["privacy_setting"], "private");
    assert_eq!(body["visibility"], "only_me");
    assert_eq!(body["message"], "Activity privacy updated to 'private'");
}

#[tokio::test]
async fn test_privacy_update_rejects_unknown_setting() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "PUT",
            "/api/activities/42/privacy",
            &json!({ "privacy_setting": "friends" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("public, private, followers_only"));
}

#[tokio::test]
async fn test_new_activity_flow_suggests_names() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/invocations",
            &json!({
                "task": "start_new_activity_flow",
                "activityId": 9876543210u64,
                "sessionId": "session-1"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["activity_id"], common::LUNCH_RIDE_ID);
    assert_eq!(
        body["creative_names"],
        json!(["Wind & Wheels Journey", "28.4K Pedal Power", "Two-Wheel Therapy"])
    );

    let pending = state.sessions.get("session-1").unwrap();
    assert_eq!(pending.activity_id, common::LUNCH_RIDE_ID);
    assert_eq!(pending.names.len(), 3);
}

#[tokio::test]
async fn test_reply_with_number_renames_activity() {
    let (app, state) = common::create_test_app();

    let start = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/invocations",
            &json!({
                "task": "start_new_activity_flow",
                "activityId": common::LUNCH_RIDE_ID,
                "sessionId": "session-2"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(start.status(), StatusCode::OK);

    let reply = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/invocations",
            &json!({ "prompt": "2", "sessionId": "session-2" }),
        ))
        .await
        .unwrap();
    assert_eq!(reply.status(), StatusCode::OK);
    let body = common::body_json(reply).await;
    assert_eq!(body["activity_id"], common::LUNCH_RIDE_ID);
    assert_eq!(body["message"], "Activity renamed to '28.4K Pedal Power'");

    let privacy = app
        .oneshot(common::json_request(
            "POST",
            "/invocations",
            &json!({ "prompt": "Actually make it followers only", "sessionId": "session-2" }),
        ))
        .await
        .unwrap();
    let body = common::body_json(privacy).await;
    assert_eq!(body["message"], "Activity privacy updated to 'followers_only'");

    let activity = state.client.fetch(common::LUNCH_RIDE_ID).await.unwrap();
    assert_eq!(activity.name, "28.4K Pedal Power");
    assert_eq!(
        activity.visibility,
        Some(metamatic::models::Visibility::FollowersOnly)
    );
}

#[tokio::test]
async fn test_reply_out_of_range_choice() {
    let (app, state) = common::create_test_app();
    state.sessions.remember(
        "session-3",
        metamatic::agent::PendingSuggestions {
            activity_id: "5".to_string(),
            names: vec!["A".into(), "B".into(), "C".into()],
        },
    );

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/invocations",
            &json!({ "prompt": "7", "sessionId": "session-3" }),
        ))
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Please pick a number between 1 and 3.");
}

#[tokio::test]
async fn test_reply_without_session_activity() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/invocations",
            &json!({ "prompt": "1", "sessionId": "unknown-session" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body.get("activity_id").is_none());
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("I couldn't find an activity"));
}

#[tokio::test]
async fn test_invocation_missing_parameters() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/invocations",
            &json!({ "task": "start_new_activity_flow", "activityId": "1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(
        body["details"],
        "Missing required parameters: activityId and sessionId"
    );
}

#[tokio::test]
async fn test_invocation_invalid_payload_structure() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/invocations",
            &json!({ "hello": "world" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invocation_empty_prompt() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/invocations",
            &json!({ "prompt": "  ", "sessionId": "s" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_model_tools_pipeline() {
    use metamatic::agent::tools::{generate_creative_names, get_activity_details, CreativeNames};

    let (_, state) = common::create_test_app();

    let details = get_activity_details(state.client.as_ref(), common::LUNCH_RIDE_ID).await;
    let names: CreativeNames = serde_json::from_str(&generate_creative_names(&details)).unwrap();
    assert_eq!(names.creative_names[1], "28.4K Pedal Power");

    let failure = get_activity_details(state.client.as_ref(), "latest").await;
    let failure: serde_json::Value = serde_json::from_str(&failure).unwrap();
    assert!(failure["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch activity details"));
}

#[tokio::test]
async fn test_list_recent_activities() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/activities?limit=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let activities = body["activities"].as_array().unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0]["id"], 9876543210u64);
    assert_eq!(activities[0]["type"], "Ride");
}

#[tokio::test]
async fn test_get_preferences() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/preferences")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["default_privacy"], "public");
    assert_eq!(body["auto_naming"], true);
    assert_eq!(body["notification_settings"]["privacy_reminders"], false);
}
