// Shared scalar types.
//
// Timestamps
// - All instants are i64 epoch milliseconds (UTC). Never mix with seconds.

pub type EmployeeId = i64;
pub type TimeEntryId = i64;
pub type EpochMillis = i64;

pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
