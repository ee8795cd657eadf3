// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity data model.

pub mod activity;
pub mod de;
pub mod detail;
pub mod photo;
pub mod preferences;
pub mod summary;
pub mod validation;

pub use activity::{Activity, PrivacySetting, Visibility};
pub use detail::{ActivityRef, Athlete, Gear, Kudoser, Lap, Map, SplitMetric};
pub use photo::{Photo, PhotoSize, PhotoUrls, Photos};
pub use preferences::{NotificationSettings, UserPreferences, Units};
pub use summary::ActivitySummary;
pub use validation::ValidationError;
