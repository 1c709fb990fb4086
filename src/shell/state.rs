use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::use_cases::list_history::handler::ListHistoryHandler;
use crate::modules::time_entries::use_cases::record_transition::handler::RecordTransitionHandler;
use crate::modules::time_entries::use_cases::today_summary::handler::TodaySummaryHandler;
use crate::modules::time_entries::use_cases::work_report::handler::WorkReportHandler;
use crate::shared::core::clock::Clock;
use crate::shared::core::identity::IdentityResolver;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub record_transition: Arc<RecordTransitionHandler<dyn TimeEntryStore>>,
    pub list_history: Arc<ListHistoryHandler<dyn TimeEntryStore>>,
    pub today_summary: Arc<TodaySummaryHandler<dyn TimeEntryStore>>,
    pub work_report: Arc<WorkReportHandler<dyn TimeEntryStore>>,
    pub identities: Arc<dyn IdentityResolver>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn TimeEntryStore>,
        clock: Arc<dyn Clock>,
        identities: Arc<dyn IdentityResolver>,
    ) -> Self {
        Self {
            record_transition: Arc::new(RecordTransitionHandler::new(store.clone(), clock.clone())),
            list_history: Arc::new(ListHistoryHandler::new(store.clone())),
            today_summary: Arc::new(TodaySummaryHandler::new(store.clone(), clock)),
            work_report: Arc::new(WorkReportHandler::new(store)),
            identities,
        }
    }
}
