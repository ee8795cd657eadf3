// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{Request, Response};
use metamatic::agent::SessionStore;
use metamatic::clients::FixtureActivityClient;
use metamatic::config::Config;
use metamatic::routes::create_router;
use metamatic::AppState;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// Directory of recorded Strava responses checked into the repo.
#[allow(dead_code)]
pub const FIXTURES_DIR: &str = "tests/fixtures/strava_responses";

/// Id of the recorded ride in `FIXTURES_DIR`.
#[allow(dead_code)]
pub const LUNCH_RIDE_ID: &str = "9876543210";

/// Load a recorded response as untyped JSON.
#[allow(dead_code)]
pub fn load_fixture(file_name: &str) -> Value {
    let path = Path::new(FIXTURES_DIR).join(file_name);
    let contents = std::fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&contents).expect("Fixture is not valid JSON")
}

/// Write `payload` as a fixture file named `file_name` under `dir`.
#[allow(dead_code)]
pub fn write_fixture(dir: &Path, file_name: &str, payload: &Value) {
    std::fs::write(dir.join(file_name), payload.to_string()).expect("Failed to write fixture");
}

/// Create a test app backed by the checked-in fixtures.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_config(Config {
        fixtures_path: FIXTURES_DIR.into(),
        ..Config::test_default()
    })
}

/// Create a test app from `config`, serving fixtures from its `fixtures_path`.
#[allow(dead_code)]
pub fn create_test_app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let client = Arc::new(FixtureActivityClient::load(&config.fixtures_path));

    let state = Arc::new(AppState {
        config,
        client,
        sessions: SessionStore::new(),
    });

    (create_router(state.clone()), state)
}

/// Serve `router` on an ephemeral local port; returns `http://host:port`.
#[allow(dead_code)]
pub async fn spawn_stub_server(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{}", addr)
}

/// Build a JSON request.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
