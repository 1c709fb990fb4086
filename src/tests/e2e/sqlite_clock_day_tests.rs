use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    EntryRange, StoreError, TimeEntryStore,
};
use crate::modules::time_entries::adapters::outbound::time_entry_store_sqlite::SqliteTimeEntryStore;
use crate::modules::time_entries::core::durations::{compute_paused_duration, compute_worked_duration};
use crate::modules::time_entries::core::entry_type::EntryType;
use crate::modules::time_entries::use_cases::record_transition::command::RecordTransition;
use crate::modules::time_entries::use_cases::record_transition::handler::{
    RecordTransitionError, RecordTransitionHandler,
};
use crate::shared::core::clock::ManualClock;
use crate::tests::fixtures::entries::{TimeEntryBuilder, at};
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread")]
async fn records_a_day_against_sqlite() {
    let store = Arc::new(SqliteTimeEntryStore::open_in_memory().unwrap());
    let clock = Arc::new(ManualClock::new(at("08:00")));
    let handler = RecordTransitionHandler::new(store.clone(), clock.clone());

    for (label, hh_mm) in [("IN", "08:00"), ("PAUSE", "10:00"), ("RETURN", "10:15"), ("OUT", "12:00")] {
        clock.set(at(hh_mm));
        handler
            .handle(RecordTransition::new(1, label))
            .await
            .unwrap_or_else(|e| panic!("{label} failed: {e}"));
    }

    let result = handler.handle(RecordTransition::new(1, "RESUME")).await;
    assert!(matches!(result, Err(RecordTransitionError::InvalidTransition(_))));

    let entries = store.list(1, EntryRange::all()).await.unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[2].entry_type, EntryType::Return);
    assert_eq!(compute_worked_duration(&entries), 13_500_000);
    assert_eq!(compute_paused_duration(&entries), 900_000);
}

#[tokio::test(flavor = "multi_thread")]
async fn two_handlers_sharing_a_database_cannot_both_clock_in() {
    let store = Arc::new(SqliteTimeEntryStore::open_in_memory().unwrap());
    let clock = Arc::new(ManualClock::new(at("08:00")));
    // Separate handlers do not share a lock registry, so the store has the final word.
    let first = RecordTransitionHandler::new(store.clone(), clock.clone());
    let second = RecordTransitionHandler::new(store.clone(), clock);

    let last_seen = store.last_entry(1).await.unwrap().map(|e| e.id);
    first.handle(RecordTransition::new(1, "IN")).await.unwrap();

    let stale = store
        .append(
            TimeEntryBuilder::new().entry_type(EntryType::In).build_new(),
            last_seen,
        )
        .await;
    assert!(matches!(stale, Err(StoreError::Conflict { .. })));

    let again = second.handle(RecordTransition::new(1, "IN")).await;
    assert!(matches!(again, Err(RecordTransitionError::InvalidTransition(_))));
}
