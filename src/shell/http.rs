use async_graphql::Pos;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    extract::State,
    http::HeaderMap,
    response::Html,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::modules::time_entries::use_cases::list_history::inbound::http as history_http;
use crate::modules::time_entries::use_cases::record_transition::inbound::http as record_http;
use crate::modules::time_entries::use_cases::today_summary::inbound::http as today_http;
use crate::modules::time_entries::use_cases::work_report::inbound::http as report_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::identity::resolve_identity;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/health", get(health))
        .route("/time/clock-in", post(record_http::handle))
        .route("/time/history", get(history_http::handle))
        .route("/time/today", get(today_http::handle))
        .route("/reports/summary", get(report_http::summary))
        .route("/reports/csv", get(report_http::csv))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    match resolve_identity(&state, &headers).await {
        Ok(Some(identity)) => request = request.data(identity),
        Ok(None) => {}
        Err(e) => {
            let error = e.into_gql().into_server_error(Pos::default());
            return async_graphql::Response::from_errors(vec![error]).into();
        }
    }
    schema.execute(request).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
