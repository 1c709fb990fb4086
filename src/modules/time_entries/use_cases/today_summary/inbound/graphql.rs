use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_entries::adapters::inbound::graphql_types::{
    GqlTimeEntry, GqlWorkSummary, gql_error, gql_store_error,
};
use crate::modules::time_entries::use_cases::today_summary::handler::{
    TodaySummary, TodaySummaryError,
};
use crate::shell::identity::require_identity;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTodaySummary {
    pub day: String,
    pub entries: Vec<GqlTimeEntry>,
    pub summary: GqlWorkSummary,
    pub state: String,
    pub allowed_next: Vec<String>,
}

impl From<TodaySummary> for GqlTodaySummary {
    fn from(v: TodaySummary) -> Self {
        Self {
            day: v.day.to_string(),
            entries: v.entries.into_iter().map(Into::into).collect(),
            summary: v.summary.into(),
            state: v.state.to_string(),
            allowed_next: v.allowed_next.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Default)]
pub struct TodayQuery;

#[Object]
impl TodayQuery {
    async fn today(&self, context: &Context<'_>) -> GqlResult<GqlTodaySummary> {
        let identity = require_identity(context)?;
        let state = context.data_unchecked::<AppState>();
        let today = state
            .today_summary
            .handle(identity.user_id)
            .await
            .map_err(|e| match e {
                TodaySummaryError::Storage(e) => gql_store_error(&e),
                e @ TodaySummaryError::ClockOutOfRange(_) => gql_error("INTERNAL", e),
            })?;
        Ok(today.into())
    }
}
