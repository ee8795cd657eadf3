// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Agent invocation endpoint.

use crate::agent::{handle_invocation, InvocationPayload, InvocationResponse};
use crate::error::Result;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/invocations", post(invoke))
}

async fn invoke(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<InvocationPayload>,
) -> Result<Json<InvocationResponse>> {
    let response = handle_invocation(state.client.as_ref(), &state.sessions, payload).await?;
    Ok(Json(response))
}
