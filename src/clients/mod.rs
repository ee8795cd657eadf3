// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity clients: the live Strava API and a fixture-backed double.

pub mod fixture;
pub mod sample;
pub mod strava;

pub use fixture::{FixtureActivityClient, FixtureLoadWarning};
pub use strava::StravaClient;

use crate::config::{ClientMode, Config, ConfigError};
use crate::error::FetchError;
use crate::models::{Activity, ActivitySummary, Visibility};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Fields of an activity a user may change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl ActivityUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn visibility(visibility: Visibility) -> Self {
        Self {
            visibility: Some(visibility),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.visibility.is_none()
    }
}

/// Read and update Strava activities by id.
#[async_trait]
pub trait ActivityClient: Send + Sync {
    /// Retrieve detailed information about an activity.
    async fn fetch(&self, activity_id: &str) -> Result<Activity, FetchError>;

    /// Apply `update` and return the activity as it now stands.
    async fn update(
        &self,
        activity_id: &str,
        update: &ActivityUpdate,
    ) -> Result<Activity, FetchError>;

    /// Up to `limit` of the athlete's activities, newest first.
    async fn recent_activities(&self, limit: usize) -> Result<Vec<ActivitySummary>, FetchError>;
}

/// Build the client selected by `config.client_mode`.
pub fn create_client(config: &Config) -> Result<Arc<dyn ActivityClient>, ConfigError> {
    match config.client_mode {
        ClientMode::Mock => {
            let client = FixtureActivityClient::load(&config.fixtures_path);
            tracing::info!(
                path = %config.fixtures_path.display(),
                fixtures = client.fixture_ids().len(),
                warnings = client.load_warnings().len(),
                "Using fixture activity client"
            );
            Ok(Arc::new(client))
        }
        ClientMode::Live => {
            if config.strava_access_token.is_empty() {
                return Err(ConfigError::Missing("STRAVA_ACCESS_TOKEN"));
            }
            tracing::info!(base_url = %config.strava_base_url, "Using Strava API client");
            Ok(Arc::new(StravaClient::with_base_url(
                config.strava_access_token.clone(),
                config.strava_base_url.clone(),
            )))
        }
    }
}
