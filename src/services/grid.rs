// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Contribution-grid rendering.
//!
//! Turns a list of activities into one cell per day, in week columns that
//! start on Sunday, plus optional month labels along the top.

use crate::models::{ActivityRecord, DayBucket, GridCell, GridContainer, MonthLabel};
use chrono::{Datelike, Duration, NaiveDate};

/// Horizontal distance between week columns (10px cell + 3px gap).
pub const COLUMN_PITCH_PX: u32 = 13;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Move `date` back to the Sunday that starts its week.
pub fn align_to_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Renders activity grids relative to a fixed "today".
#[derive(Debug, Clone)]
pub struct GridRenderer {
    today: NaiveDate,
    month_labels: bool,
}

impl GridRenderer {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            month_labels: false,
        }
    }

    /// Emit month labels (used for fixed calendar ranges).
    pub fn with_month_labels(mut self, enabled: bool) -> Self {
        self.month_labels = enabled;
        self
    }

    /// Clear `container` and fill it with `window_length` days starting at
    /// the Sunday on or before `window_start`.
    pub fn render(
        &self,
        container: &mut GridContainer,
        activities: &[ActivityRecord],
        window_start: NaiveDate,
        window_length: u32,
    ) {
        container.clear();

        let start = align_to_sunday(window_start);
        let bucket = DayBucket::from_activities(activities);
        let mut labels = Vec::new();
        let mut last_month = None;

        container.cells.reserve(window_length as usize);
        for offset in 0..window_length {
            let date = start + Duration::days(i64::from(offset));

            if self.month_labels && date.weekday().num_days_from_sunday() == 0 {
                let month = (date.year(), date.month());
                if last_month != Some(month) {
                    last_month = Some(month);
                    let column = offset / 7;
                    labels.push(MonthLabel {
                        text: MONTH_NAMES[date.month0() as usize].to_string(),
                        column,
                        offset_px: column * COLUMN_PITCH_PX,
                    });
                }
            }

            container
                .cells
                .push(GridCell::new(date, bucket.count(date), self.today));
        }

        if self.month_labels {
            container.month_labels = Some(labels);
        }
        container.debug = fetch_summary(activities);

        tracing::debug!(
            start = %start,
            cells = container.cells.len(),
            active_days = bucket.len(),
            "Rendered activity grid"
        );
    }
}

/// One-line summary of what was fetched.
pub fn fetch_summary(activities: &[ActivityRecord]) -> String {
    match (activities.first(), activities.last()) {
        (Some(first), Some(last)) => format!(
            "Fetched {} activities (first: {}, last: {})",
            activities.len(),
            first.start_date_local,
            last.start_date_local
        ),
        _ => "Fetched 0 activities".to_string(),
    }
}
