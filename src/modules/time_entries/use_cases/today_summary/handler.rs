// Today panel for the signed-in employee.
//
// Responsibilities
// - Select the entries stamped on the current local day.
// - Summarize worked and paused time for them.
// - Report the state implied by the employee's last entry overall, together
//   with the labels that would be accepted next.
//
// Notes
// - The state comes from the last entry even when it was stamped on an earlier
//   day, so a forgotten OUT still shows as working.
// - Entries and state come from one read whenever the window holds an entry,
//   so a concurrent append cannot split them.

use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    EntryRange, StoreError, TimeEntryStore,
};
use crate::modules::time_entries::core::durations::filter_to_day_in;
use crate::modules::time_entries::core::entry_type::EntryType;
use crate::modules::time_entries::core::state::ClockState;
use crate::modules::time_entries::core::summary::WorkSummary;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::clock::Clock;
use crate::shared::core::primitives::{EmployeeId, EpochMillis, MILLIS_PER_HOUR};
use chrono::{Local, NaiveDate, TimeZone};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

// A calendar day in any zone lies within this distance of any instant on it.
const DAY_WINDOW_MS: i64 = 36 * MILLIS_PER_HOUR;

#[derive(Debug, Error)]
pub enum TodaySummaryError {
    #[error("clock instant {0} has no calendar day")]
    ClockOutOfRange(EpochMillis),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodaySummary {
    pub day: NaiveDate,
    pub entries: Vec<TimeEntry>,
    pub summary: WorkSummary,
    pub state: ClockState,
    pub allowed_next: Vec<EntryType>,
}

pub struct TodaySummaryHandler<TStore>
where
    TStore: TimeEntryStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> TodaySummaryHandler<TStore>
where
    TStore: TimeEntryStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(&self, employee_id: EmployeeId) -> Result<TodaySummary, TodaySummaryError> {
        self.handle_in(employee_id, &Local).await
    }

    pub async fn handle_in<Tz>(
        &self,
        employee_id: EmployeeId,
        tz: &Tz,
    ) -> Result<TodaySummary, TodaySummaryError>
    where
        Tz: TimeZone + Sync,
    {
        let now = self.clock.now_millis();
        let day = tz
            .timestamp_millis_opt(now)
            .single()
            .map(|t| t.date_naive())
            .ok_or(TodaySummaryError::ClockOutOfRange(now))
            .inspect_err(|e| error!(employee_id, error = %e, "cannot place the clock on a day"))?;

        let window = EntryRange {
            start: Some(now - DAY_WINDOW_MS),
            end: None,
        };
        let candidates = self
            .store
            .list(employee_id, window)
            .await
            .inspect_err(|e| error!(employee_id, error = %e, "failed to list today's entries"))?;
        // The window is open ended, so its newest entry is the employee's last.
        let last_type = match candidates.last() {
            Some(newest) => Some(newest.entry_type),
            None => self
                .store
                .last_entry(employee_id)
                .await
                .inspect_err(|e| error!(employee_id, error = %e, "failed to read last entry"))?
                .map(|e| e.entry_type),
        };

        let entries = filter_to_day_in(&candidates, day, tz);
        let state = ClockState::from_last(last_type);
        Ok(TodaySummary {
            day,
            summary: WorkSummary::from_entries(&entries),
            entries,
            state,
            allowed_next: state.allowed_next(),
        })
    }
}
