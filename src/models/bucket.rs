// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Per-day activity counts.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::ActivityRecord;

/// Activity count per calendar day, built fresh for each render.
///
/// Keys are real dates, so every key formats as `YYYY-MM-DD` and appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayBucket {
    counts: BTreeMap<NaiveDate, u32>,
}

impl DayBucket {
    /// Count activities by the date portion of their local start time.
    ///
    /// Records without a parseable date are skipped.
    pub fn from_activities(activities: &[ActivityRecord]) -> Self {
        let mut bucket = Self::default();
        for activity in activities {
            match activity.local_day() {
                Some(day) => bucket.add(day),
                None => tracing::warn!(
                    start_date_local = %activity.start_date_local,
                    "Skipping activity with unparseable start date"
                ),
            }
        }
        bucket
    }

    pub fn add(&mut self, day: NaiveDate) {
        let count = self.counts.entry(day).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Number of activities on `day` (zero if none).
    pub fn count(&self, day: NaiveDate) -> u32 {
        self.counts.get(&day).copied().unwrap_or(0)
    }

    /// Number of distinct days with at least one activity.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(YYYY-MM-DD, count)` pairs in date order.
    pub fn iter_keys(&self) -> impl Iterator<Item = (String, u32)> + '_ {
        self.counts
            .iter()
            .map(|(day, count)| (day.format("%Y-%m-%d").to_string(), *count))
    }
}
