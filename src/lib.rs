// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Stride-Grid: a contribution-style heatmap of Strava activity
//!
//! This crate fetches an athlete's activities from Strava, counts them per
//! day and renders a year-wide grid for a personal site.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod view;

use config::Config;
use services::ActivityGridBuilder;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub grid_builder: ActivityGridBuilder,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let grid_builder = ActivityGridBuilder::new(&config);
        Self {
            config,
            grid_builder,
        }
    }
}
