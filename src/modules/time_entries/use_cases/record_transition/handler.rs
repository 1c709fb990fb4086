// Record-transition command handler orchestrates the write flow.
//
// Responsibilities
// - Parse the requested label into the closed vocabulary.
// - Inside the employee's lock scope: read the last entry, decide, append.
// - Stamp the entry with the server clock, never earlier than the last entry.
// - Report rule violations and storage faults as distinct error kinds.

use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    StoreError, TimeEntryStore,
};
use crate::modules::time_entries::core::entry_type::{EntryType, ParseEntryTypeError};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::record_transition::command::RecordTransition;
use crate::modules::time_entries::use_cases::record_transition::decide::decide_record;
use crate::modules::time_entries::use_cases::record_transition::decision::{
    DecideError, Decision,
};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::employee_locks::EmployeeLocks;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum RecordTransitionError {
    #[error(transparent)]
    InvalidType(#[from] ParseEntryTypeError),

    #[error(transparent)]
    InvalidTransition(#[from] DecideError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub struct RecordTransitionHandler<TStore>
where
    TStore: TimeEntryStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
    locks: EmployeeLocks,
}

impl<TStore> RecordTransitionHandler<TStore>
where
    TStore: TimeEntryStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            locks: EmployeeLocks::new(),
        }
    }

    #[tracing::instrument(
        name = "record_transition",
        skip_all,
        fields(employee_id = command.employee_id, requested = %command.requested_type)
    )]
    pub async fn handle(&self, command: RecordTransition) -> Result<TimeEntry, RecordTransitionError> {
        let requested: EntryType = command
            .requested_type
            .parse()
            .inspect_err(|e| warn!(error = %e, "rejected unknown entry type"))?;

        let _scope = self.locks.acquire(command.employee_id).await;

        let last = self
            .store
            .last_entry(command.employee_id)
            .await
            .inspect_err(|e| error!(error = %e, "failed to read last entry"))?;

        let recorded_at = match &last {
            Some(previous) => self.clock.now_millis().max(previous.timestamp),
            None => self.clock.now_millis(),
        };

        match decide_record(
            last.as_ref().map(|e| e.entry_type),
            command.employee_id,
            requested,
            recorded_at,
        ) {
            Decision::Accepted { entry } => {
                let stored = self
                    .store
                    .append(entry, last.map(|e| e.id))
                    .await
                    .inspect_err(|e| error!(error = %e, "failed to append entry"))?;
                info!(entry_id = stored.id, entry_type = %stored.entry_type, "transition recorded");
                Ok(stored)
            }
            Decision::Rejected { reason } => {
                warn!(%reason, "transition rejected");
                Err(reason.into())
            }
        }
    }
}
