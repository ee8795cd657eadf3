// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixture-backed activity client for tests and local development.
//!
//! Fixtures are recorded Strava responses named `activity_<id>_<label>.json`.
//! They are loaded once, in sorted filename order, so a duplicated id always
//! resolves to the same (last) file. Ids without a fixture get a generated
//! sample activity instead of an error.

use super::sample::sample_activity_payload;
use super::{ActivityClient, ActivityUpdate};
use crate::error::FetchError;
use crate::models::{Activity, ActivitySummary, Visibility};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A fixture file that was skipped or shadowed during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureLoadWarning {
    pub path: PathBuf,
    pub reason: String,
}

/// Activity client serving recorded payloads from disk.
pub struct FixtureActivityClient {
    responses: DashMap<String, Value>,
    warnings: Vec<FixtureLoadWarning>,
}

impl FixtureActivityClient {
    /// Client with no fixtures; every numeric id yields the sample activity.
    pub fn empty() -> Self {
        Self {
            responses: DashMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Load every `activity_*.json` file under `path`.
    ///
    /// Never fails: unreadable files, invalid JSON and a missing directory
    /// are recorded as warnings and skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let mut client = Self::empty();

        let entries = match fs::read_dir(path.as_ref()) {
            Ok(entries) => entries,
            Err(e) => {
                client.warn(path.as_ref(), format!("cannot read fixture directory: {}", e));
                return client;
            }
        };

        let mut files: Vec<(String, PathBuf)> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .filter_map(|path| fixture_activity_id(&path).map(|id| (id, path)))
            .collect();
        files.sort_by(|(_, a), (_, b)| a.file_name().cmp(&b.file_name()));

        for (activity_id, file) in files {
            let payload = match fs::read_to_string(&file) {
                Ok(contents) => serde_json::from_str::<Value>(&contents)
                    .map_err(|e| format!("invalid JSON: {}", e)),
                Err(e) => Err(format!("unreadable: {}", e)),
            };

            match payload {
                Ok(payload) => {
                    if client.responses.insert(activity_id.clone(), payload).is_some() {
                        client.warn(
                            &file,
                            format!("duplicate activity id {}, replaces earlier fixture", activity_id),
                        );
                    }
                }
                Err(reason) => client.warn(&file, reason),
            }
        }

        tracing::debug!(
            path = %path.as_ref().display(),
            count = client.responses.len(),
            "Fixtures loaded"
        );
        client
    }

    fn warn(&mut self, path: &Path, reason: String) {
        tracing::warn!(path = %path.display(), reason = %reason, "Failed to load fixture");
        self.warnings.push(FixtureLoadWarning {
            path: path.to_path_buf(),
            reason,
        });
    }

    /// Files skipped or shadowed while loading.
    pub fn load_warnings(&self) -> &[FixtureLoadWarning] {
        &self.warnings
    }

    /// Ids with a loaded or registered payload, sorted.
    pub fn fixture_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.responses.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Set the payload served for `activity_id`, replacing any fixture.
    pub fn register(&self, activity_id: impl Into<String>, payload: Value) {
        self.responses.insert(activity_id.into(), payload);
    }

    /// Stored payload for `activity_id`, or the sample activity for it.
    fn payload_for(&self, activity_id: &str) -> Result<Value, FetchError> {
        if let Some(payload) = self.responses.get(activity_id) {
            return Ok(payload.value().clone());
        }

        tracing::debug!(activity_id, "No fixture for activity, serving sample");
        sample_payload(activity_id)
    }

    /// Apply `update` to the stored payload while holding its map entry, so
    /// concurrent updates to one id never overwrite each other.
    fn update_in_place(
        &self,
        activity_id: &str,
        update: &ActivityUpdate,
    ) -> Result<Activity, FetchError> {
        let mut entry = match self.responses.entry(activity_id.to_string()) {
            Entry::Occupied(entry) => entry.into_ref(),
            Entry::Vacant(entry) => entry.insert(sample_payload(activity_id)?),
        };

        let mut payload = entry.value().clone();
        apply_update(&mut payload, update);

        // Only commit payloads that still validate.
        let activity = Activity::from_json_value(payload.clone())
            .map_err(|e| FetchError::parse(activity_id, e))?;
        *entry.value_mut() = payload;
        Ok(activity)
    }
}

/// Sample payload for a numeric id that has no fixture.
fn sample_payload(activity_id: &str) -> Result<Value, FetchError> {
    let numeric_id: u64 = activity_id
        .trim()
        .parse()
        .map_err(|_| FetchError::InvalidId(activity_id.to_string()))?;
    Ok(sample_activity_payload(numeric_id))
}

/// Activity id encoded in a fixture filename (`activity_<id>_<label>.json`).
fn fixture_activity_id(path: &Path) -> Option<String> {
    if path.extension()? != "json" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let mut parts = stem.split('_');
    if parts.next()? != "activity" {
        return None;
    }
    parts
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

fn apply_update(payload: &mut Value, update: &ActivityUpdate) {
    let Some(fields) = payload.as_object_mut() else {
        return;
    };
    if let Some(name) = &update.name {
        fields.insert("name".to_string(), Value::String(name.clone()));
    }
    if let Some(visibility) = update.visibility {
        fields.insert(
            "visibility".to_string(),
            Value::String(visibility.as_str().to_string()),
        );
        fields.insert(
            "private".to_string(),
            Value::Bool(visibility == Visibility::OnlyMe),
        );
    }
}

#[async_trait]
impl ActivityClient for FixtureActivityClient {
    async fn fetch(&self, activity_id: &str) -> Result<Activity, FetchError> {
        let payload = self.payload_for(activity_id)?;
        Activity::from_json_value(payload).map_err(|e| FetchError::parse(activity_id, e))
    }

    async fn update(
        &self,
        activity_id: &str,
        update: &ActivityUpdate,
    ) -> Result<Activity, FetchError> {
        let activity = self.update_in_place(activity_id, update)?;
        tracing::info!(activity_id, "Fixture activity updated");
        Ok(activity)
    }

    /// Stored payloads only; sample activities are not listed.
    async fn recent_activities(&self, limit: usize) -> Result<Vec<ActivitySummary>, FetchError> {
        let mut summaries: Vec<ActivitySummary> = self
            .responses
            .iter()
            .filter_map(|entry| {
                serde_json::from_value(entry.value().clone())
                    .map_err(|e| {
                        tracing::warn!(activity_id = %entry.key(), error = %e, "Fixture not listable");
                    })
                    .ok()
            })
            .collect();

        ActivitySummary::sort_newest_first(&mut summaries);
        summaries.truncate(limit);
        Ok(summaries)
    }
}
