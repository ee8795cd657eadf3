// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Webhook routes for Strava events.

use crate::agent::invocation::start_new_activity_flow;
use crate::AppState;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Webhook routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/webhooks/strava", get(verify).post(handle_event))
}

/// Session used for conversations started by an upload from `owner_id`.
pub fn athlete_session_id(owner_id: u64) -> String {
    format!("athlete-{}", owner_id)
}

/// Strava webhook verification query params.
#[derive(Deserialize)]
struct VerifyParams {
    #[serde(rename = "hub.mode")]
    mode: String,
    #[serde(rename = "hub.challenge")]
    challenge: String,
    #[serde(rename = "hub.verify_token")]
    verify_token: String,
}

/// Verification response.
#[derive(Serialize, Default)]
struct VerifyResponse {
    #[serde(rename = "hub.challenge")]
    challenge: String,
}

/// Verify webhook subscription (GET).
async fn verify(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VerifyParams>,
) -> impl IntoResponse {
    let expected = state.config.webhook_verify_token.as_str();
    if expected.is_empty() {
        tracing::warn!("Webhook verification refused: no verify token configured");
        return (StatusCode::FORBIDDEN, Json(VerifyResponse::default()));
    }

    if params.mode == "subscribe" && params.verify_token == expected {
        tracing::info!("Webhook subscription verified");
        (
            StatusCode::OK,
            Json(VerifyResponse {
                challenge: params.challenge,
            }),
        )
    } else {
        tracing::warn!(mode = %params.mode, "Webhook verification failed: invalid token");
        (StatusCode::FORBIDDEN, Json(VerifyResponse::default()))
    }
}

/// Strava webhook event payload.
#[derive(Deserialize, Debug)]
struct WebhookEvent {
    object_type: String, // "activity" or "athlete"
    object_id: u64,
    aspect_type: String, // "create", "update", "delete"
    owner_id: u64,
}

#[derive(Serialize)]
struct WebhookAck {
    message: &'static str,
}

/// Handle incoming webhook events (POST).
///
/// Always answers 200 so Strava does not retry; new activities start the
/// naming conversation in the background.
async fn handle_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> impl IntoResponse {
    let ack = (
        StatusCode::OK,
        Json(WebhookAck {
            message: "webhook received",
        }),
    );

    let event: WebhookEvent = match serde_json::from_value(payload) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse webhook event");
            return ack;
        }
    };

    tracing::info!(
        object_type = %event.object_type,
        object_id = event.object_id,
        aspect_type = %event.aspect_type,
        owner_id = event.owner_id,
        "Webhook event received"
    );

    match (event.object_type.as_str(), event.aspect_type.as_str()) {
        ("activity", "create") if state.config.preferences.auto_naming => {
            let activity_id = event.object_id.to_string();
            let session_id = athlete_session_id(event.owner_id);
            let client = state.client.clone();
            let sessions = state.sessions.clone();

            tokio::spawn(async move {
                if let Err(e) =
                    start_new_activity_flow(client.as_ref(), &sessions, &activity_id, &session_id)
                        .await
                {
                    tracing::error!(
                        activity_id = %activity_id,
                        error = %e,
                        "New activity flow failed"
                    );
                }
            });
        }
        ("activity", "create") => {
            tracing::debug!(activity_id = event.object_id, "Auto naming disabled, ignoring");
        }
        _ => {
            tracing::debug!(
                object_type = %event.object_type,
                aspect_type = %event.aspect_type,
                "Ignoring webhook event"
            );
        }
    }

    ack
}
