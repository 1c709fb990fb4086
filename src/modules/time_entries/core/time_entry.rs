// TimeEntry: one accepted clock event. Immutable once stored.
//
// Notes
// - `id` is assigned by the store in insertion order and is the authoritative
//   tiebreak when two entries share a timestamp.
// - `timestamp` is epoch milliseconds assigned by the server, never by a client.

use crate::modules::time_entries::core::entry_type::EntryType;
use crate::shared::core::primitives::{EmployeeId, EpochMillis, TimeEntryId};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeEntry {
    pub id: TimeEntryId,
    pub employee_id: EmployeeId,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub timestamp: EpochMillis,
}

/// An accepted transition that has not been given an id yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTimeEntry {
    pub employee_id: EmployeeId,
    pub entry_type: EntryType,
    pub timestamp: EpochMillis,
}

impl NewTimeEntry {
    pub fn with_id(self, id: TimeEntryId) -> TimeEntry {
        TimeEntry {
            id,
            employee_id: self.employee_id,
            entry_type: self.entry_type,
            timestamp: self.timestamp,
        }
    }
}
