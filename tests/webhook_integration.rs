// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava webhook verification and event handling.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use metamatic::agent::{PendingSuggestions, SessionStore};
use metamatic::config::Config;
use metamatic::routes::webhook::athlete_session_id;
use serde_json::json;
use std::time::Duration;
use tower::ServiceExt;

mod common;

const OWNER_ID: u64 = 134815;

fn verify_uri(mode: &str, token: &str) -> String {
    format!(
        "/webhooks/strava?hub.mode={}&hub.challenge=15f7d1a91c1f40f8a748fd134752feb3&hub.verify_token={}",
        mode, token
    )
}

fn create_event(object_id: u64) -> serde_json::Value {
    json!({
        "aspect_type": "create",
        "event_time": 1705303800,
        "object_id": object_id,
        "object_type": "activity",
        "owner_id": OWNER_ID,
        "subscription_id": 120475,
        "updates": {}
    })
}

/// Wait for the background flow to record suggestions for `session_id`.
async fn wait_for_session(sessions: &SessionStore, session_id: &str) -> Option<PendingSuggestions> {
    for _ in 0..200 {
        if let Some(pending) = sessions.get(session_id) {
            return Some(pending);
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    None
}

#[tokio::test]
async fn test_verify_echoes_challenge() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri(verify_uri("subscribe", "test-verify-token"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["hub.challenge"], "15f7d1a91c1f40f8a748fd134752feb3");
}

#[tokio::test]
async fn test_verify_rejects_wrong_token() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri(verify_uri("subscribe", "guess"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_verify_refused_without_configured_token() {
    let (app, _) = common::create_test_app_with_config(Config {
        fixtures_path: common::FIXTURES_DIR.into(),
        webhook_verify_token: String::new(),
        ..Config::test_default()
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri(verify_uri("subscribe", ""))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_verify_requires_challenge() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/webhooks/strava?hub.mode=subscribe&hub.verify_token=test-verify-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_activity_create_starts_naming_flow() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/webhooks/strava",
            &create_event(9876543210),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "webhook received");

    let pending = wait_for_session(&state.sessions, &athlete_session_id(OWNER_ID))
        .await
        .expect("new activity flow did not run");
    assert_eq!(pending.activity_id, common::LUNCH_RIDE_ID);
    assert_eq!(
        pending.names,
        vec!["Wind & Wheels Journey", "28.4K Pedal Power", "Two-Wheel Therapy"]
    );
}

#[tokio::test]
async fn test_activity_create_ignored_without_auto_naming() {
    let mut config = Config {
        fixtures_path: common::FIXTURES_DIR.into(),
        ..Config::test_default()
    };
    config.preferences.auto_naming = false;
    let (app, state) = common::create_test_app_with_config(config);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/webhooks/strava",
            &create_event(9876543210),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn test_other_events_are_acknowledged_only() {
    let (app, state) = common::create_test_app();

    let mut event = create_event(9876543210);
    event["aspect_type"] = json!("update");
    event["updates"] = json!({ "title": "Renamed elsewhere" });

    let response = app
        .clone()
        .oneshot(common::json_request("POST", "/webhooks/strava", &event))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Malformed events are acknowledged too, so Strava does not retry them.
    let response = app
        .oneshot(common::json_request(
            "POST",
            "/webhooks/strava",
            &json!({ "object_type": "activity" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(state.sessions.is_empty());
}
