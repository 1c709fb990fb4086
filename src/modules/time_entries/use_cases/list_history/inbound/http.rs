use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::time_entries::adapters::inbound::range_query::RangeQuery;
use crate::modules::time_entries::adapters::inbound::responses::{
    error_response, store_error_response,
};
use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    Query(params): Query<RangeQuery>,
) -> impl IntoResponse {
    let range = match params.to_range() {
        Ok(range) => range,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state.list_history.handle(identity.user_id, range).await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => store_error_response(&e),
    }
}
