use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::time_entries::adapters::inbound::responses::{
    error_response, store_error_response,
};
use crate::modules::time_entries::use_cases::today_summary::handler::TodaySummaryError;
use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, identity: Identity) -> impl IntoResponse {
    match state.today_summary.handle(identity.user_id).await {
        Ok(today) => Json(today).into_response(),
        Err(TodaySummaryError::Storage(e)) => store_error_response(&e),
        Err(e @ TodaySummaryError::ClockOutOfRange(_)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}
