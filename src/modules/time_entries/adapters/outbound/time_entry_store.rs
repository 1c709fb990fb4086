// TimeEntryStore is the port the core needs from persistent storage.
//
// Contract
// - Append only. Entries are never updated or deleted.
// - `id` is assigned by the store, strictly increasing in insertion order.
// - `last_entry` is the highest-id entry of the employee, not the latest timestamp.
// - `append` carries the id of the last entry the caller validated against; the
//   store refuses the write with `Conflict` if another entry landed in between.
// - `list` returns entries ordered by (timestamp, id) ascending; bounds are inclusive.
//
// Errors
// - Storage faults are reported as `Unavailable` and never retried here, since a
//   blind retry could append twice.

use crate::modules::time_entries::core::time_entry::{NewTimeEntry, TimeEntry};
use crate::shared::core::primitives::{EmployeeId, EpochMillis, TimeEntryId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(
        "last entry changed for employee {employee_id}: expected {expected:?}, actual {actual:?}"
    )]
    Conflict {
        employee_id: EmployeeId,
        expected: Option<TimeEntryId>,
        actual: Option<TimeEntryId>,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryRange {
    pub start: Option<EpochMillis>,
    pub end: Option<EpochMillis>,
}

impl EntryRange {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(start: EpochMillis, end: EpochMillis) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn contains(&self, timestamp: EpochMillis) -> bool {
        self.start.is_none_or(|start| timestamp >= start)
            && self.end.is_none_or(|end| timestamp <= end)
    }
}

#[async_trait]
pub trait TimeEntryStore: Send + Sync {
    async fn last_entry(&self, employee_id: EmployeeId) -> Result<Option<TimeEntry>, StoreError>;

    async fn append(
        &self,
        entry: NewTimeEntry,
        expected_last_id: Option<TimeEntryId>,
    ) -> Result<TimeEntry, StoreError>;

    async fn list(
        &self,
        employee_id: EmployeeId,
        range: EntryRange,
    ) -> Result<Vec<TimeEntry>, StoreError>;
}
