// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity record as returned by the athlete activities list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One activity from the list endpoint. Only the local start is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Local start date/time (ISO 8601, e.g. "2025-04-02T10:00:00Z")
    pub start_date_local: String,
}

impl ActivityRecord {
    pub fn new(start_date_local: impl Into<String>) -> Self {
        Self {
            start_date_local: start_date_local.into(),
        }
    }

    /// Calendar day of the local start time.
    ///
    /// Strava marks local times with a `Z` suffix even though they are not
    /// UTC, so the text before `T` is taken as-is rather than converted.
    pub fn local_day(&self) -> Option<NaiveDate> {
        let day = self
            .start_date_local
            .split('T')
            .next()
            .unwrap_or_default();
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}
