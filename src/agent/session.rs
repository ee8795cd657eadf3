// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-conversation memory of the activity being discussed.

use dashmap::DashMap;
use std::sync::Arc;

/// Name suggestions offered for an activity, awaiting the user's choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSuggestions {
    pub activity_id: String,
    pub names: Vec<String>,
}

/// Shared session map, keyed by session id. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, PendingSuggestions>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the suggestions offered in `session_id`, replacing older ones.
    pub fn remember(&self, session_id: &str, pending: PendingSuggestions) {
        self.sessions.insert(session_id.to_string(), pending);
    }

    pub fn get(&self, session_id: &str) -> Option<PendingSuggestions> {
        self.sessions.get(session_id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
