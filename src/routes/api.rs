// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity API routes.

use crate::agent::tools::{
    recent_activities, update_activity_name, update_activity_privacy, NameUpdateResult,
    PrivacyUpdateResult, RecentActivities, DEFAULT_RECENT_LIMIT,
};
use crate::error::Result;
use crate::models::{Activity, UserPreferences};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_recent_activities))
        .route("/api/activities/{id}", get(get_activity))
        .route("/api/activities/{id}/name", put(put_activity_name))
        .route("/api/activities/{id}/privacy", put(put_activity_privacy))
        .route("/api/preferences", get(get_preferences))
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

/// List the athlete's recent activities, newest first.
async fn list_recent_activities(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<RecentActivities>> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let recent = recent_activities(state.client.as_ref(), limit).await?;
    Ok(Json(recent))
}

async fn get_preferences(State(state): State<Arc<AppState>>) -> Json<UserPreferences> {
    Json(state.config.preferences.clone())
}

/// Get a detailed activity, in Strava's wire format.
async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<String>,
) -> Result<Json<Activity>> {
    let activity = state.client.fetch(&activity_id).await?;
    Ok(Json(activity))
}

#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub name: String,
}

async fn put_activity_name(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<String>,
    Json(request): Json<RenameRequest>,
) -> Result<Json<NameUpdateResult>> {
    let result = update_activity_name(state.client.as_ref(), &activity_id, &request.name).await?;
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct PrivacyRequest {
    pub privacy_setting: String,
}

async fn put_activity_privacy(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<String>,
    Json(request): Json<PrivacyRequest>,
) -> Result<Json<PrivacyUpdateResult>> {
    let result =
        update_activity_privacy(state.client.as_ref(), &activity_id, &request.privacy_setting)
            .await?;
    Ok(Json(result))
}
