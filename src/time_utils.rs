// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for local dates and timestamps.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Today's date in the server's local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Start of `date` in time zone `tz`, as a UTC instant.
///
/// If local midnight does not exist (a DST gap), midnight UTC is used.
pub fn midnight_utc<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}
