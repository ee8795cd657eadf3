// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types: client fetch failures and HTTP-facing application errors.

use crate::models::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Failure talking to the Strava API.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Strava answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// The single error kind returned by `ActivityClient` operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch activity {activity_id} from Strava API: {source}")]
    Transport {
        activity_id: String,
        #[source]
        source: TransportError,
    },

    #[error("Failed to parse activity {activity_id} data: {source}")]
    Parse {
        activity_id: String,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid activity id: {0:?}")]
    InvalidId(String),

    #[error("Failed to list recent activities from Strava API: {0}")]
    ListTransport(#[source] TransportError),

    #[error("Failed to parse recent activities: {0}")]
    ListParse(#[source] ValidationError),
}

impl FetchError {
    pub fn transport(activity_id: &str, source: impl Into<TransportError>) -> Self {
        FetchError::Transport {
            activity_id: activity_id.to_string(),
            source: source.into(),
        }
    }

    pub fn parse(activity_id: &str, source: ValidationError) -> Self {
        FetchError::Parse {
            activity_id: activity_id.to_string(),
            source,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. } | FetchError::ListTransport(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Parse { .. } | FetchError::ListParse(_))
    }

    fn transport_source(&self) -> Option<&TransportError> {
        match self {
            FetchError::Transport { source, .. } | FetchError::ListTransport(source) => Some(source),
            _ => None,
        }
    }

    /// HTTP status Strava answered with, if the failure was a bad status.
    pub fn status(&self) -> Option<u16> {
        match self.transport_source()? {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// The schema violation behind a parse failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            FetchError::Parse { source, .. } | FetchError::ListParse(source) => Some(source),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// Token rejected or expired.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Fetch(FetchError::InvalidId(_)) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Fetch(e) if e.status() == Some(404) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Fetch(e) if e.is_rate_limited() => {
                (StatusCode::TOO_MANY_REQUESTS, "strava_rate_limited")
            }
            AppError::Fetch(FetchError::Parse { .. } | FetchError::ListParse(_)) => {
                (StatusCode::BAD_GATEWAY, "invalid_activity")
            }
            AppError::Fetch(_) => (StatusCode::BAD_GATEWAY, "strava_error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_code();

        let details = match &self {
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                None
            }
            AppError::Fetch(err) => {
                tracing::warn!(error = %err, status = ?err.status(), "Activity client error");
                Some(err.to_string())
            }
            AppError::BadRequest(msg) => Some(msg.clone()),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> FetchError {
        FetchError::transport(
            "42",
            TransportError::Status {
                status,
                message: "nope".to_string(),
            },
        )
    }

    #[test]
    fn test_status_is_exposed() {
        let err = status_error(404);
        assert!(err.is_transport());
        assert!(!err.is_parse());
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("activity 42"));
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[test]
    fn test_rate_limit_and_auth_helpers() {
        assert!(status_error(429).is_rate_limited());
        assert!(status_error(401).is_unauthorized());
        assert!(!status_error(500).is_unauthorized());
    }

    #[test]
    fn test_parse_error_has_no_status() {
        let err = FetchError::parse("42", ValidationError::new(".", "missing field `id`"));
        assert!(err.is_parse());
        assert_eq!(err.status(), None);
        assert_eq!(err.validation().map(|v| v.field_path()), Some("id".to_string()));
    }

    #[test]
    fn test_http_status_mapping() {
        let cases = [
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Fetch(status_error(404)), StatusCode::NOT_FOUND),
            (AppError::Fetch(status_error(429)), StatusCode::TOO_MANY_REQUESTS),
            (AppError::Fetch(status_error(500)), StatusCode::BAD_GATEWAY),
            (
                AppError::Fetch(FetchError::InvalidId("abc".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Fetch(FetchError::parse("1", ValidationError::new(".", "bad"))),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
