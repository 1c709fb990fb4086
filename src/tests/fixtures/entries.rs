// Shared test fixtures for time entries.
// Compiled into the crate only during tests (see the cfg(test) block in src/lib.rs).

use crate::modules::time_entries::core::entry_type::EntryType;
use crate::modules::time_entries::core::time_entry::{NewTimeEntry, TimeEntry};
use crate::shared::core::primitives::{EmployeeId, EpochMillis};
use chrono::{NaiveDate, NaiveTime};

pub const FIXTURE_EMPLOYEE_ID: EmployeeId = 1;

pub fn fixture_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// "HH:MM" on the fixture day, read as UTC.
pub fn at(hh_mm: &str) -> EpochMillis {
    let time = NaiveTime::parse_from_str(hh_mm, "%H:%M").unwrap();
    fixture_day().and_time(time).and_utc().timestamp_millis()
}

/// Entries for the fixture employee with ids assigned in slice order.
pub fn make_entries(events: &[(EntryType, &str)]) -> Vec<TimeEntry> {
    events
        .iter()
        .enumerate()
        .map(|(i, (entry_type, hh_mm))| {
            TimeEntryBuilder::new()
                .id(i as i64 + 1)
                .entry_type(*entry_type)
                .timestamp(at(hh_mm))
                .build()
        })
        .collect()
}

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: TimeEntry {
                id: 1,
                employee_id: FIXTURE_EMPLOYEE_ID,
                entry_type: EntryType::In,
                timestamp: at("08:00"),
            },
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn employee_id(mut self, v: EmployeeId) -> Self {
        self.inner.employee_id = v;
        self
    }

    pub fn entry_type(mut self, v: EntryType) -> Self {
        self.inner.entry_type = v;
        self
    }

    pub fn timestamp(mut self, v: EpochMillis) -> Self {
        self.inner.timestamp = v;
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }

    pub fn build_new(self) -> NewTimeEntry {
        NewTimeEntry {
            employee_id: self.inner.employee_id,
            entry_type: self.inner.entry_type,
            timestamp: self.inner.timestamp,
        }
    }
}

#[cfg(test)]
mod time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_assign_ids_in_slice_order() {
        let entries = make_entries(&[(EntryType::In, "08:00"), (EntryType::Out, "12:00")]);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[1].id, 2);
        assert_eq!(entries[1].timestamp - entries[0].timestamp, 4 * 3_600_000);
    }
}
