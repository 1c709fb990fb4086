// In memory implementation of the TimeEntryStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep one append-only stream of entries per employee.
// - Assign ids from a single global sequence.
// - Enforce the expected-last-id check on append.

use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    EntryRange, StoreError, TimeEntryStore,
};
use crate::modules::time_entries::core::time_entry::{NewTimeEntry, TimeEntry};
use crate::shared::core::primitives::{EmployeeId, TimeEntryId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
struct Streams {
    last_id: TimeEntryId,
    by_employee: HashMap<EmployeeId, Vec<TimeEntry>>,
}

#[derive(Default)]
pub struct InMemoryTimeEntryStore {
    inner: RwLock<Streams>,
    is_offline: bool,
    delay_append_ms: AtomicU64,
}

impl InMemoryTimeEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleep before taking the write lock in `append`, to widen race windows in tests.
    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Time entry store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimeEntryStore for InMemoryTimeEntryStore {
    async fn last_entry(&self, employee_id: EmployeeId) -> Result<Option<TimeEntry>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .by_employee
            .get(&employee_id)
            .and_then(|stream| stream.last())
            .cloned())
    }

    async fn append(
        &self,
        entry: NewTimeEntry,
        expected_last_id: Option<TimeEntryId>,
    ) -> Result<TimeEntry, StoreError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.inner.write().await;
        let next_id = guard.last_id + 1;
        let stream = guard.by_employee.entry(entry.employee_id).or_default();
        let actual = stream.last().map(|e| e.id);
        if actual != expected_last_id {
            return Err(StoreError::Conflict {
                employee_id: entry.employee_id,
                expected: expected_last_id,
                actual,
            });
        }
        let stored = entry.with_id(next_id);
        stream.push(stored.clone());
        guard.last_id = next_id;
        Ok(stored)
    }

    async fn list(
        &self,
        employee_id: EmployeeId,
        range: EntryRange,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let mut items: Vec<TimeEntry> = guard
            .by_employee
            .get(&employee_id)
            .map(|stream| {
                stream
                    .iter()
                    .filter(|e| range.contains(e.timestamp))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        items.sort_by_key(|e| (e.timestamp, e.id));
        Ok(items)
    }
}
