// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity grid building.
//!
//! Handles one render pass:
//! 1. Work out the window for today
//! 2. Fetch activities from Strava (token refresh included)
//! 3. Bucket by day and render into the container

use crate::config::{Config, GridWindow};
use crate::models::GridContainer;
use crate::services::{ActivityFetcher, GridRenderer};
use crate::time_utils::{local_today, midnight_utc};
use chrono::{Local, NaiveDate};

/// Fetches activities and renders them as a contribution grid.
#[derive(Clone)]
pub struct ActivityGridBuilder {
    fetcher: ActivityFetcher,
    window: GridWindow,
}

impl ActivityGridBuilder {
    pub fn new(config: &Config) -> Self {
        Self::with_fetcher(ActivityFetcher::from_config(config), config.window)
    }

    pub fn with_fetcher(fetcher: ActivityFetcher, window: GridWindow) -> Self {
        Self { fetcher, window }
    }

    /// Run one render pass for the current local date.
    pub async fn build(&self, container: &mut GridContainer) {
        self.build_for_day(container, local_today()).await
    }

    /// Run one render pass as if today were `today`.
    ///
    /// Never fails: fetch problems leave the grid empty or partially filled.
    pub async fn build_for_day(&self, container: &mut GridContainer, today: NaiveDate) {
        let window_start = self.window.nominal_start(today);
        let after = midnight_utc(window_start, &Local);

        tracing::info!(
            window_start = %window_start,
            window_days = self.window.length_days,
            "Building activity grid"
        );

        let activities = self.fetcher.fetch_activities(after).await;

        GridRenderer::new(today)
            .with_month_labels(self.window.shows_month_labels())
            .render(
                container,
                &activities,
                window_start,
                self.window.length_days,
            );

        tracing::info!(
            activities = activities.len(),
            cells = container.cells.len(),
            "Activity grid built"
        );
    }
}
