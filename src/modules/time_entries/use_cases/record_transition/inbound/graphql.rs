use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql_types::{
    GqlTimeEntry, gql_error, gql_store_error,
};
use crate::modules::time_entries::use_cases::record_transition::command::RecordTransition;
use crate::modules::time_entries::use_cases::record_transition::handler::RecordTransitionError;
use crate::shell::identity::require_identity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecordTransitionMutation;

#[Object]
impl RecordTransitionMutation {
    async fn record_transition(
        &self,
        context: &Context<'_>,
        #[graphql(name = "type")] entry_type: String,
    ) -> GqlResult<GqlTimeEntry> {
        let identity = require_identity(context)?;
        let state = context.data_unchecked::<AppState>();

        let command = RecordTransition::new(identity.user_id, entry_type);

        match state.record_transition.handle(command).await {
            Ok(entry) => Ok(entry.into()),
            Err(e @ RecordTransitionError::InvalidType(_)) => Err(gql_error("INVALID_TYPE", e)),
            Err(e @ RecordTransitionError::InvalidTransition(_)) => {
                Err(gql_error("INVALID_TRANSITION", e))
            }
            Err(RecordTransitionError::Storage(e)) => Err(gql_store_error(&e)),
        }
    }
}
