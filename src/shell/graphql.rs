use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::time_entries::use_cases::list_history::inbound::graphql::HistoryQuery;
use crate::modules::time_entries::use_cases::record_transition::inbound::graphql::RecordTransitionMutation;
use crate::modules::time_entries::use_cases::today_summary::inbound::graphql::TodayQuery;
use crate::modules::time_entries::use_cases::work_report::inbound::graphql::WorkReportQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(HistoryQuery, TodayQuery, WorkReportQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(RecordTransitionMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
