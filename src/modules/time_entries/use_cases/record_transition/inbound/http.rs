use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::responses::{
    error_response, store_error_response,
};
use crate::modules::time_entries::use_cases::record_transition::command::RecordTransition;
use crate::modules::time_entries::use_cases::record_transition::handler::RecordTransitionError;
use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecordTransitionBody {
    #[serde(rename = "type")]
    pub entry_type: String,
}

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<RecordTransitionBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
    };

    let command = RecordTransition::new(identity.user_id, body.entry_type);

    match state.record_transition.handle(command).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e @ RecordTransitionError::InvalidType(_)) => error_response(StatusCode::BAD_REQUEST, e),
        Err(e @ RecordTransitionError::InvalidTransition(_)) => error_response(StatusCode::CONFLICT, e),
        Err(RecordTransitionError::Storage(e)) => store_error_response(&e),
    }
}
