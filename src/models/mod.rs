// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod bucket;
pub mod grid;

pub use activity::ActivityRecord;
pub use bucket::DayBucket;
pub use grid::{GridCell, GridContainer, IntensityLevel, MonthLabel};
