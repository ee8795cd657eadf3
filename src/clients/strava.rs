// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for fetching and updating activities.
//!
//! One request per call, no retries: non-2xx answers surface as transport
//! errors carrying the status, bodies that do not match the activity schema
//! surface as parse errors.

use super::{ActivityClient, ActivityUpdate};
use crate::config::STRAVA_API_BASE_URL;
use crate::error::{FetchError, TransportError};
use crate::models::{Activity, ActivitySummary};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl StravaClient {
    /// Create a client for the public Strava API.
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(access_token, STRAVA_API_BASE_URL.to_string())
    }

    /// Create a client against another base URL (proxies, stub servers).
    pub fn with_base_url(access_token: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn activity_url(&self, activity_id: &str) -> String {
        format!("{}/activities/{}", self.base_url, activity_id)
    }

    /// Check response status and decode the body as an activity.
    async fn read_activity(
        &self,
        activity_id: &str,
        response: reqwest::Response,
    ) -> Result<Activity, FetchError> {
        let body = read_body(response)
            .await
            .map_err(|e| FetchError::transport(activity_id, e))?;

        Activity::from_json_slice(&body).map_err(|e| {
            tracing::warn!(activity_id, error = %e, "Strava activity failed validation");
            FetchError::parse(activity_id, e)
        })
    }
}

/// Body of a 2xx response; any other status becomes `TransportError::Status`.
async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, TransportError> {
    let status = response.status();
    if !status.is_success() {
        let url = response.url().path().to_string();
        let message = response.text().await.unwrap_or_default();

        if status.as_u16() == 429 {
            tracing::warn!(url = %url, "Strava rate limit hit (429)");
        } else {
            tracing::warn!(url = %url, status = %status, "Strava request failed");
        }

        return Err(TransportError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.bytes().await?.to_vec())
}

#[async_trait]
impl ActivityClient for StravaClient {
    async fn fetch(&self, activity_id: &str) -> Result<Activity, FetchError> {
        tracing::debug!(activity_id, "Fetching activity from Strava");

        let response = self
            .http
            .get(self.activity_url(activity_id))
            .bearer_auth(&self.access_token)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .query(&[("include_all_efforts", "false")])
            .send()
            .await
            .map_err(|e| FetchError::transport(activity_id, e))?;

        self.read_activity(activity_id, response).await
    }

    async fn update(
        &self,
        activity_id: &str,
        update: &ActivityUpdate,
    ) -> Result<Activity, FetchError> {
        tracing::info!(
            activity_id,
            rename = update.name.is_some(),
            visibility = ?update.visibility,
            "Updating activity on Strava"
        );

        let response = self
            .http
            .put(self.activity_url(activity_id))
            .bearer_auth(&self.access_token)
            .json(update)
            .send()
            .await
            .map_err(|e| FetchError::transport(activity_id, e))?;

        self.read_activity(activity_id, response).await
    }

    async fn recent_activities(&self, limit: usize) -> Result<Vec<ActivitySummary>, FetchError> {
        tracing::debug!(limit, "Listing recent activities from Strava");

        let response = self
            .http
            .get(format!("{}/athlete/activities", self.base_url))
            .bearer_auth(&self.access_token)
            .query(&[("per_page", limit.to_string()), ("page", "1".to_string())])
            .send()
            .await
            .map_err(|e| FetchError::ListTransport(e.into()))?;

        let body = read_body(response)
            .await
            .map_err(FetchError::ListTransport)?;

        let mut summaries = ActivitySummary::list_from_json_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "Strava activity list failed validation");
            FetchError::ListParse(e)
        })?;
        summaries.truncate(limit);
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = StravaClient::with_base_url("t".into(), "http://localhost:9/api/v3/".into());
        assert_eq!(client.base_url(), "http://localhost:9/api/v3");
        assert_eq!(
            client.activity_url("123"),
            "http://localhost:9/api/v3/activities/123"
        );
    }

    #[test]
    fn test_default_base_url() {
        let client = StravaClient::new("t".into());
        assert_eq!(client.base_url(), "https://www.strava.com/api/v3");
    }
}
