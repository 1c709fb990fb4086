use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::app::{ADMIN_TOKEN, USER_TOKEN, bearer, make_test_state};
use crate::tests::fixtures::entries::at;

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn clock(app: &Router, label: &str) -> Response {
    app.clone()
        .oneshot(
            Request::post("/time/clock-in")
                .header("authorization", bearer(USER_TOKEN))
                .header("content-type", "application/json")
                .body(Body::from(json!({ "type": label }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get_as(app: &Router, token: &str, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::get(uri)
                .header("authorization", bearer(token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn records_a_day_and_reports_worked_and_paused_time() {
    let (state, _, manual_clock) = make_test_state();
    let app = router(state);

    for (label, hh_mm) in [("IN", "08:00"), ("PAUSE", "10:00"), ("RESUME", "10:15"), ("OUT", "12:00")] {
        manual_clock.set(at(hh_mm));
        let response = clock(&app, label).await;
        assert_eq!(response.status(), StatusCode::CREATED, "{label} at {hh_mm}");
    }

    // Out of order for a clocked-out employee.
    let rejected = clock(&app, "PAUSE").await;
    assert_eq!(rejected.status(), StatusCode::CONFLICT);

    let history = json_body(get_as(&app, USER_TOKEN, "/time/history").await).await;
    let types: Vec<&str> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["IN", "PAUSE", "RESUME", "OUT"]);

    let today = json_body(get_as(&app, USER_TOKEN, "/time/today").await).await;
    assert_eq!(today["state"], "CLOCKED_OUT");
    assert_eq!(today["allowed_next"], json!(["IN"]));

    let summary = json_body(
        get_as(
            &app,
            ADMIN_TOKEN,
            "/reports/summary?user_id=1&start_date=2025-03-10&end_date=2025-03-10",
        )
        .await,
    )
    .await;
    assert_eq!(summary["worked_ms"], 13_500_000);
    assert_eq!(summary["worked"], json!({ "hours": 3, "minutes": 45 }));
    assert_eq!(summary["paused"], json!({ "hours": 0, "minutes": 15 }));

    let csv = get_as(&app, ADMIN_TOKEN, "/reports/csv?user_id=1").await;
    assert_eq!(csv.status(), StatusCode::OK);
    let bytes = csv.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(String::from_utf8(bytes.to_vec()).unwrap().lines().count(), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn admits_exactly_one_of_many_concurrent_clock_ins() {
    let (state, store, _) = make_test_state();
    store.set_delay_append_ms(5);
    let app = router(state);

    let attempts: Vec<_> = (0..8)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { clock(&app, "IN").await.status() })
        })
        .collect();

    let mut created = 0;
    let mut conflicts = 0;
    for attempt in attempts {
        match attempt.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("unexpected status {other}"),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
}
