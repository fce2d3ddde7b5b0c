// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Grid cells, month labels and the container they are rendered into.

use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Heatmap intensity of one day.
///
/// `Low` is part of the scale (and styled) but no count maps to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum IntensityLevel {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl IntensityLevel {
    /// Map an activity count to a level: 0 → 0, 1 → 2, 2 → 3, 3+ → 4.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::None,
            1 => Self::Medium,
            2 => Self::High,
            _ => Self::Max,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Max => 4,
        }
    }
}

impl From<IntensityLevel> for u8 {
    fn from(level: IntensityLevel) -> Self {
        level.as_u8()
    }
}

/// One day of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GridCell {
    pub date: NaiveDate,
    pub count: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub level: IntensityLevel,
    pub tooltip: String,
    pub is_today: bool,
}

impl GridCell {
    pub fn new(date: NaiveDate, count: u32, today: NaiveDate) -> Self {
        let key = date.format("%Y-%m-%d");
        let tooltip = if count > 0 {
            format!("{} activities on {}", count, key)
        } else {
            format!("No activity on {}", key)
        };

        Self {
            date,
            count,
            level: IntensityLevel::from_count(count),
            tooltip,
            is_today: date == today,
        }
    }
}

/// Month name placed above the first Sunday column of a new month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MonthLabel {
    /// Short month name ("Jan", "Feb", ...)
    pub text: String,
    /// Week column index
    pub column: u32,
    /// Horizontal offset in pixels
    pub offset_px: u32,
}

/// Render target for one grid pass.
///
/// Each render clears the container first, so the last render wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GridContainer {
    pub cells: Vec<GridCell>,
    /// Present only when month labels are enabled.
    pub month_labels: Option<Vec<MonthLabel>>,
    /// Fetched-record summary for debugging
    pub debug: String,
}

impl GridContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.month_labels = None;
        self.debug.clear();
    }
}
