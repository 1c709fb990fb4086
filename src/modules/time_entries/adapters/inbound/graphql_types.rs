use async_graphql::{ErrorExtensions, SimpleObject};

use crate::modules::time_entries::adapters::outbound::time_entry_store::StoreError;
use crate::modules::time_entries::core::summary::{HoursMinutes, WorkSummary};
use crate::modules::time_entries::core::time_entry::TimeEntry;

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: i64,
    pub employee_id: i64,
    #[graphql(name = "type")]
    pub entry_type: String,
    pub timestamp: i64,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(v: TimeEntry) -> Self {
        Self {
            id: v.id,
            employee_id: v.employee_id,
            entry_type: v.entry_type.to_string(),
            timestamp: v.timestamp,
        }
    }
}

#[derive(SimpleObject, Clone, Copy)]
pub struct GqlHoursMinutes {
    pub hours: i64,
    pub minutes: i64,
}

impl From<HoursMinutes> for GqlHoursMinutes {
    fn from(v: HoursMinutes) -> Self {
        Self {
            hours: v.hours,
            minutes: v.minutes,
        }
    }
}

#[derive(SimpleObject, Clone, Copy)]
pub struct GqlWorkSummary {
    pub entry_count: i64,
    pub worked_ms: i64,
    pub paused_ms: i64,
    pub worked: GqlHoursMinutes,
    pub paused: GqlHoursMinutes,
}

impl From<WorkSummary> for GqlWorkSummary {
    fn from(v: WorkSummary) -> Self {
        Self {
            entry_count: v.entry_count as i64,
            worked_ms: v.worked_ms,
            paused_ms: v.paused_ms,
            worked: v.worked.into(),
            paused: v.paused.into(),
        }
    }
}

/// GraphQL error carrying a machine-readable `code` extension.
pub fn gql_error(code: &'static str, message: impl ToString) -> async_graphql::Error {
    async_graphql::Error::new(message.to_string()).extend_with(|_, e| e.set("code", code))
}

pub fn gql_store_error(err: &StoreError) -> async_graphql::Error {
    let code = match err {
        StoreError::Conflict { .. } => "CONFLICT",
        StoreError::Unavailable(_) => "UNAVAILABLE",
    };
    gql_error(code, err)
}
