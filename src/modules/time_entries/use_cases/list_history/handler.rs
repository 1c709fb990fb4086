// Read side: an employee's own entries over an optional range, oldest first.

use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    EntryRange, StoreError, TimeEntryStore,
};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::primitives::EmployeeId;
use std::sync::Arc;
use tracing::error;

pub struct ListHistoryHandler<TStore>
where
    TStore: TimeEntryStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListHistoryHandler<TStore>
where
    TStore: TimeEntryStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        employee_id: EmployeeId,
        range: EntryRange,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.store
            .list(employee_id, range)
            .await
            .inspect_err(|e| error!(employee_id, error = %e, "failed to list history"))
    }
}
