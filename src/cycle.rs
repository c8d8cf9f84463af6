//! Fixed-cycle day arithmetic over calendar dates.

use chrono::{Datelike, NaiveDate};

use crate::config::CycleConfig;

/// Where a calendar date falls in the reading cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPosition {
    /// Days since the most recent cycle start (0 on the start day).
    pub day_index: i64,
    /// Line number assigned to the day.
    pub line_number: i64,
    /// Group number assigned to the day.
    pub group_number: i64,
    /// Whether the day index lies inside the cycle length.
    pub in_range: bool,
}

/// Most recent cycle start on or before the given date.
///
/// The start is the configured month/day in the date's own year, or in
/// the previous year when the date falls before it. `None` only when the
/// configured month/day does not exist in the relevant year (a Feb 29
/// start, which validation rejects).
pub fn cycle_start(date: NaiveDate, config: &CycleConfig) -> Option<NaiveDate> {
    let this_year = NaiveDate::from_ymd_opt(date.year(), config.start_month, config.start_day)?;
    if date < this_year {
        NaiveDate::from_ymd_opt(date.year() - 1, config.start_month, config.start_day)
    } else {
        Some(this_year)
    }
}

/// Whole days from the cycle start to the date. Never negative.
pub fn day_index(date: NaiveDate, config: &CycleConfig) -> Option<i64> {
    let start = cycle_start(date, config)?;
    Some(date.signed_duration_since(start).num_days())
}

/// Whether a day index lies inside the cycle.
pub fn in_range(day_index: i64, config: &CycleConfig) -> bool {
    (0..config.cycle_length).contains(&day_index)
}

/// Line number for a day index.
pub fn line_number(day_index: i64, config: &CycleConfig) -> i64 {
    config.line_offset + day_index
}

/// Group number for a day index. Validated configurations guarantee a
/// positive group size.
pub fn group_number(day_index: i64, config: &CycleConfig) -> i64 {
    config.group_offset + day_index.div_euclid(config.group_size)
}

/// Full cycle position of a date, including out-of-range dates.
pub fn position(date: NaiveDate, config: &CycleConfig) -> Option<DayPosition> {
    let idx = day_index(date, config)?;
    Some(DayPosition {
        day_index: idx,
        line_number: line_number(idx, config),
        group_number: group_number(idx, config),
        in_range: in_range(idx, config),
    })
}
