// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod grid;
pub mod strava;

pub use activity::ActivityGridBuilder;
pub use grid::{align_to_sunday, GridRenderer};
pub use strava::{ActivityFetcher, StravaClient, TokenRefresher};
