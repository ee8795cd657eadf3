// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! MetaMatic: rename Strava activities and adjust their privacy.
//!
//! This crate provides the Strava activity model, the activity clients
//! (live API and fixture-backed), and the agent tools and HTTP endpoints
//! built on top of them.

pub mod agent;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod time_utils;

use agent::SessionStore;
use clients::ActivityClient;
use config::Config;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub client: Arc<dyn ActivityClient>,
    pub sessions: SessionStore,
}
