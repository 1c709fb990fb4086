// Aggregate view over a set of entries: what reports and the "today" panel show.

use crate::modules::time_entries::core::durations::{
    compute_paused_duration, compute_worked_duration, split_hours_minutes,
};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoursMinutes {
    pub hours: i64,
    pub minutes: i64,
}

impl HoursMinutes {
    pub fn from_millis(ms: i64) -> Self {
        let (hours, minutes) = split_hours_minutes(ms);
        Self { hours, minutes }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkSummary {
    pub entry_count: usize,
    pub worked_ms: i64,
    pub paused_ms: i64,
    pub worked: HoursMinutes,
    pub paused: HoursMinutes,
}

impl WorkSummary {
    pub fn from_entries(entries: &[TimeEntry]) -> Self {
        let worked_ms = compute_worked_duration(entries);
        let paused_ms = compute_paused_duration(entries);
        Self {
            entry_count: entries.len(),
            worked_ms,
            paused_ms,
            worked: HoursMinutes::from_millis(worked_ms),
            paused: HoursMinutes::from_millis(paused_ms),
        }
    }
}
