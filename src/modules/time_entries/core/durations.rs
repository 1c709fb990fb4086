// Duration reconstruction over an employee's entries.
//
// Purpose
// - Rebuild worked and paused time by pairing adjacent entries in time order.
//
// Rules
// - Worked: (IN | RESUME | RETURN) followed by (PAUSE | OUT).
// - Paused: PAUSE followed by (RESUME | RETURN).
// - Only strictly positive deltas count.
// - Input order does not matter; a stable sort by timestamp normalizes it, so
//   callers should pass entries in id order to keep ties deterministic.
// - Best effort: the sequence is not validated. Unmatched entries, such as a
//   trailing IN or PAUSE, contribute nothing.
//
// Boundaries
// - Pure. No input or output.

use crate::modules::time_entries::core::entry_type::EntryType;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::primitives::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE};
use chrono::{Local, NaiveDate, TimeZone};

pub fn compute_worked_duration(entries: &[TimeEntry]) -> i64 {
    sum_adjacent(entries, |t| t.starts_work(), |t| t.stops_work())
}

pub fn compute_paused_duration(entries: &[TimeEntry]) -> i64 {
    sum_adjacent(entries, |t| t == EntryType::Pause, |t| t.is_resume())
}

fn sum_adjacent(
    entries: &[TimeEntry],
    opens: impl Fn(EntryType) -> bool,
    closes: impl Fn(EntryType) -> bool,
) -> i64 {
    let mut sorted: Vec<&TimeEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    sorted
        .windows(2)
        .filter(|pair| opens(pair[0].entry_type) && closes(pair[1].entry_type))
        .map(|pair| pair[1].timestamp - pair[0].timestamp)
        .filter(|delta| *delta > 0)
        .sum()
}

/// Entries stamped on `day` (00:00:00.000 to 23:59:59.999 wall clock in the
/// server's local zone), sorted ascending.
pub fn filter_to_day(entries: &[TimeEntry], day: NaiveDate) -> Vec<TimeEntry> {
    filter_to_day_in(entries, day, &Local)
}

pub fn filter_to_day_in<Tz: TimeZone>(
    entries: &[TimeEntry],
    day: NaiveDate,
    tz: &Tz,
) -> Vec<TimeEntry> {
    let mut selected: Vec<TimeEntry> = entries
        .iter()
        .filter(|e| {
            tz.timestamp_millis_opt(e.timestamp)
                .single()
                .is_some_and(|t| t.date_naive() == day)
        })
        .cloned()
        .collect();
    selected.sort_by_key(|e| e.timestamp);
    selected
}

/// Whole hours and the remaining whole minutes. Negative input counts as zero.
pub fn split_hours_minutes(ms: i64) -> (i64, i64) {
    let ms = ms.max(0);
    (
        ms / MILLIS_PER_HOUR,
        (ms % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
    )
}

pub fn format_hours_minutes(ms: i64) -> String {
    let (hours, minutes) = split_hours_minutes(ms);
    format!("{hours}h {minutes}m")
}
