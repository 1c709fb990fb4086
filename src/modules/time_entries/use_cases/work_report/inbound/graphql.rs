use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql_types::{
    GqlTimeEntry, GqlWorkSummary, gql_error, gql_store_error,
};
use crate::modules::time_entries::adapters::inbound::range_query::RangeQuery;
use crate::shell::identity::require_admin;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct WorkReportQuery;

#[Object]
impl WorkReportQuery {
    /// Worked and paused time of any employee over a range. Admin only.
    async fn work_report(
        &self,
        context: &Context<'_>,
        user_id: i64,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> GqlResult<GqlWorkSummary> {
        require_admin(context)?;
        let state = context.data_unchecked::<AppState>();
        let range = RangeQuery::new(start_date, end_date)
            .to_range()
            .map_err(|e| gql_error("BAD_REQUEST", e))?;

        let summary = state
            .work_report
            .summary(user_id, range)
            .await
            .map_err(|e| gql_store_error(&e))?;
        Ok(summary.into())
    }

    /// Raw entries of any employee over a range. Admin only.
    async fn report_entries(
        &self,
        context: &Context<'_>,
        user_id: i64,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        require_admin(context)?;
        let state = context.data_unchecked::<AppState>();
        let range = RangeQuery::new(start_date, end_date)
            .to_range()
            .map_err(|e| gql_error("BAD_REQUEST", e))?;

        let entries = state
            .work_report
            .entries(user_id, range)
            .await
            .map_err(|e| gql_store_error(&e))?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
