use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql_types::{
    GqlTimeEntry, gql_error, gql_store_error,
};
use crate::modules::time_entries::adapters::inbound::range_query::RangeQuery;
use crate::shell::identity::require_identity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct HistoryQuery;

#[Object]
impl HistoryQuery {
    /// The caller's entries, oldest first. Bounds accept epoch milliseconds,
    /// RFC 3339 instants or YYYY-MM-DD dates and are inclusive.
    async fn history(
        &self,
        context: &Context<'_>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let identity = require_identity(context)?;
        let state = context.data_unchecked::<AppState>();
        let range = RangeQuery::new(start_date, end_date)
            .to_range()
            .map_err(|e| gql_error("BAD_REQUEST", e))?;

        let entries = state
            .list_history
            .handle(identity.user_id, range)
            .await
            .map_err(|e| gql_store_error(&e))?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
