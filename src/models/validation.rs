// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Validation failures raised while decoding Strava payloads.

use std::fmt;

/// A payload did not match the activity schema.
///
/// `path` locates the container that failed (`.` for the top level,
/// `laps[0].athlete` for nested records) and `message` says what was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    path: String,
    message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        Self::new(path, err.into_inner().to_string())
    }

    /// Path of the container in which decoding failed.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Path of the offending field itself.
    ///
    /// For a missing field this is the container path joined with the
    /// field name (`laps[0].athlete.id`); otherwise it is the path of the
    /// value that failed to decode.
    pub fn field_path(&self) -> String {
        match self.missing_field() {
            Some(field) if self.path == "." => field.to_string(),
            Some(field) => format!("{}.{}", self.path, field),
            None => self.path.clone(),
        }
    }

    /// Name of the required field that was absent, if that was the failure.
    pub fn missing_field(&self) -> Option<&str> {
        let rest = self.message.strip_prefix("missing field `")?;
        rest.split('`').next()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid field `{}`: {}", self.field_path(), self.message)
    }
}

impl std::error::Error for ValidationError {}
