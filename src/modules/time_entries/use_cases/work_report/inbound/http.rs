use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::time_entries::adapters::inbound::range_query::RangeQuery;
use crate::modules::time_entries::adapters::inbound::responses::{
    error_response, store_error_response,
};
use crate::modules::time_entries::use_cases::work_report::csv_export::render_csv;
use crate::shared::core::primitives::EmployeeId;
use crate::shell::identity::AdminIdentity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct WorkReportParams {
    pub user_id: EmployeeId,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl WorkReportParams {
    fn range_query(&self) -> RangeQuery {
        RangeQuery::new(self.start_date.clone(), self.end_date.clone())
    }
}

pub async fn summary(
    State(state): State<AppState>,
    _admin: AdminIdentity,
    Query(params): Query<WorkReportParams>,
) -> impl IntoResponse {
    let range = match params.range_query().to_range() {
        Ok(range) => range,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state.work_report.summary(params.user_id, range).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => store_error_response(&e),
    }
}

pub async fn csv(
    State(state): State<AppState>,
    AdminIdentity(admin): AdminIdentity,
    Query(params): Query<WorkReportParams>,
) -> impl IntoResponse {
    let range = match params.range_query().to_range() {
        Ok(range) => range,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    let entries = match state.work_report.entries(params.user_id, range).await {
        Ok(entries) => entries,
        Err(e) => return store_error_response(&e),
    };

    match render_csv(&entries) {
        Ok(body) => {
            info!(
                admin_id = admin.user_id,
                employee_id = params.user_id,
                rows = entries.len(),
                "csv report exported"
            );
            (
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                    (header::CONTENT_DISPOSITION, "attachment; filename=\"report.csv\""),
                ],
                body,
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to render csv report");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to render report")
        }
    }
}
