// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
///
/// Sub-second digits are only emitted when the timestamp has them, so a
/// Strava timestamp survives a decode/encode cycle unchanged.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC3339 with any offset (normalized to UTC) or a naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` date-time, which is taken to be UTC.
pub fn parse_iso8601(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(date) => Ok(date.with_timezone(&Utc)),
        Err(rfc3339_err) => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| rfc3339_err),
    }
}

/// Serde adapter for `DateTime<Utc>` fields using the formats above.
pub mod iso8601 {
    use super::{format_utc_rfc3339, parse_iso8601};
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_utc_rfc3339(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_iso8601(&raw).map_err(|e| {
            de::Error::custom(format!("invalid ISO-8601 timestamp `{}`: {}", raw, e))
        })
    }
}
