use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::modules::time_entries::adapters::outbound::time_entry_store::StoreError;

pub fn error_response(status: StatusCode, message: impl ToString) -> Response {
    (status, Json(json!({ "error": message.to_string() }))).into_response()
}

/// A stale append is a conflict with a concurrent writer; anything else means
/// storage could not be reached.
pub fn store_error_response(err: &StoreError) -> Response {
    let status = match err {
        StoreError::Conflict { .. } => StatusCode::CONFLICT,
        StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    error_response(status, err)
}
