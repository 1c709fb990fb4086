// Admin reporting over any employee's entries.
//
// Responsibilities
// - Summarize worked and paused time over a range.
// - Hand the raw entries of a range to the CSV export.
//
// Boundaries
// - Role checks happen at the inbound edge; this handler trusts its caller.

use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    EntryRange, StoreError, TimeEntryStore,
};
use crate::modules::time_entries::core::durations::format_hours_minutes;
use crate::modules::time_entries::core::summary::WorkSummary;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::primitives::EmployeeId;
use std::sync::Arc;
use tracing::{error, info};

pub struct WorkReportHandler<TStore>
where
    TStore: TimeEntryStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> WorkReportHandler<TStore>
where
    TStore: TimeEntryStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn entries(
        &self,
        employee_id: EmployeeId,
        range: EntryRange,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.store
            .list(employee_id, range)
            .await
            .inspect_err(|e| error!(employee_id, error = %e, "failed to load report entries"))
    }

    pub async fn summary(
        &self,
        employee_id: EmployeeId,
        range: EntryRange,
    ) -> Result<WorkSummary, StoreError> {
        let entries = self.entries(employee_id, range).await?;
        let summary = WorkSummary::from_entries(&entries);
        info!(
            employee_id,
            entry_count = summary.entry_count,
            worked = %format_hours_minutes(summary.worked_ms),
            paused = %format_hours_minutes(summary.paused_ms),
            "work report computed"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod work_report_handler_tests {
    use super::*;
    use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
    use crate::modules::time_entries::core::entry_type::EntryType;
    use crate::modules::time_entries::core::summary::HoursMinutes;
    use crate::tests::fixtures::entries::{at, TimeEntryBuilder};
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (Arc<InMemoryTimeEntryStore>, WorkReportHandler<InMemoryTimeEntryStore>);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(InMemoryTimeEntryStore::new());
        let handler = WorkReportHandler::new(store.clone());
        (store, handler)
    }

    async fn seed_day_with_pause(store: &InMemoryTimeEntryStore, employee_id: EmployeeId) {
        let mut last = None;
        for (entry_type, hh_mm) in [
            (EntryType::In, "08:00"),
            (EntryType::Pause, "10:00"),
            (EntryType::Return, "10:15"),
            (EntryType::Out, "12:00"),
        ] {
            let entry = TimeEntryBuilder::new()
                .employee_id(employee_id)
                .entry_type(entry_type)
                .timestamp(at(hh_mm))
                .build_new();
            last = Some(store.append(entry, last).await.unwrap().id);
        }
    }

    #[rstest]
    #[tokio::test]
    async fn summary_adds_up_worked_and_paused_time(before_each: BeforeEachReturn) {
        let (store, handler) = before_each;
        seed_day_with_pause(&store, 7).await;
        seed_day_with_pause(&store, 8).await;

        let summary = handler.summary(7, EntryRange::all()).await.unwrap();
        assert_eq!(summary.entry_count, 4);
        assert_eq!(summary.worked_ms, 13_500_000);
        assert_eq!(summary.paused_ms, 900_000);
        assert_eq!(summary.worked, HoursMinutes { hours: 3, minutes: 45 });
    }

    #[rstest]
    #[tokio::test]
    async fn summary_only_counts_pairs_inside_the_range(before_each: BeforeEachReturn) {
        let (store, handler) = before_each;
        seed_day_with_pause(&store, 7).await;

        let summary = handler
            .summary(7, EntryRange::between(at("10:15"), at("12:00")))
            .await
            .unwrap();
        assert_eq!(summary.entry_count, 2);
        assert_eq!(summary.worked, HoursMinutes { hours: 1, minutes: 45 });
        assert_eq!(summary.paused_ms, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn entries_returns_the_raw_rows_in_order(before_each: BeforeEachReturn) {
        let (store, handler) = before_each;
        seed_day_with_pause(&store, 7).await;

        let entries = handler.entries(7, EntryRange::all()).await.unwrap();
        assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(entries[2].entry_type, EntryType::Return);
    }

    #[rstest]
    #[tokio::test]
    async fn summary_fails_if_the_store_is_offline() {
        let mut store = InMemoryTimeEntryStore::new();
        store.toggle_offline();
        let handler = WorkReportHandler::new(Arc::new(store));
        assert!(matches!(
            handler.summary(7, EntryRange::all()).await,
            Err(StoreError::Unavailable(_))
        ));
    }
}
