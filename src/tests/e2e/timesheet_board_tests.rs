use crate::modules::roles::adapters::outbound::roles_in_memory::InMemoryRoles;
use crate::modules::timesheets::adapters::outbound::timesheets_in_memory::{
    InMemoryProjectCatalog, InMemoryTimesheets,
};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::entries::{TimeEntryBuilder, project};
use crate::tests::fixtures::state::app_state;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn seeded_state() -> AppState {
    let timesheets = InMemoryTimesheets::new();
    let entries = [
        (1, 1, "alice", "2024-05-06T09:00:00Z", 1.5),
        (2, 1, "bob", "2024-05-06T13:00:00Z", 2.0),
        (3, 2, "alice", "2024-05-07T09:00:00Z", 0.75),
        (4, 3, "bob", "2024-05-06T09:00:00Z", 4.0),
        (5, 3, "alice", "2024-05-14T09:00:00Z", 1.0),
    ];
    for (id, project_id, creator, starts, hours) in entries {
        timesheets
            .insert(
                TimeEntryBuilder::new()
                    .id(id)
                    .project(project_id)
                    .creator(creator)
                    .starts(starts)
                    .hours(hours)
                    .build(),
            )
            .await;
    }
    let catalog = InMemoryProjectCatalog::new(vec![
        project(1, "Alpha"),
        project(2, "Beta"),
        project(3, "Gamma"),
    ]);
    let state = app_state(timesheets, catalog, InMemoryRoles::new());
    state
        .timesheet
        .set_anchor(NaiveDate::from_ymd_opt(2024, 5, 9).unwrap())
        .await;
    state
}

async fn call(state: &AppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn shows_each_viewer_their_own_week() {
    let state = seeded_state().await;
    let (status, _) = call(&state, empty_request("POST", "/timesheet/refresh")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, everyone) = call(&state, empty_request("GET", "/timesheet")).await;
    assert_eq!(everyone["viewer"], serde_json::Value::Null);
    assert_eq!(everyone["grand_total"], "08:15:00");

    call(
        &state,
        json_request("PUT", "/session", r#"{"user_name":"alice","role_id":2}"#),
    )
    .await;
    let (_, alice) = call(&state, empty_request("GET", "/timesheet")).await;
    assert_eq!(alice["viewer"], "alice");
    assert_eq!(alice["rows"][0]["cells"][0], "01:30:00");
    assert_eq!(alice["rows"][1]["cells"][1], "00:45:00");
    assert_eq!(alice["rows"][2]["total"], "00:00:00");
    assert_eq!(alice["grand_total"], "02:15:00");

    call(
        &state,
        json_request(
            "PUT",
            "/session",
            r#"{"user_name":"carol","role":{"name":"Admin"}}"#,
        ),
    )
    .await;
    let (_, carol) = call(&state, empty_request("GET", "/timesheet")).await;
    assert_eq!(carol["grand_total"], "08:15:00");
}

#[tokio::test]
async fn scopes_column_and_grand_totals_to_the_visible_page() {
    let state = seeded_state().await;
    call(&state, empty_request("POST", "/timesheet/refresh")).await;

    let (_, wide) = call(&state, empty_request("GET", "/timesheet")).await;
    let (status, narrow) = call(
        &state,
        json_request("PUT", "/timesheet/page-size", r#"{"page_size":2}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(wide["column_totals"][0], "07:30:00");
    assert_eq!(narrow["column_totals"][0], "03:30:00");
    assert_eq!(narrow["grand_total"], "04:15:00");
    assert_eq!(narrow["pagination"]["total_pages"], 2);

    let (_, second_page) =
        call(&state, json_request("PUT", "/timesheet/page", r#"{"page":2}"#)).await;
    assert_eq!(second_page["rows"][0]["project_name"], "Gamma");
    assert_eq!(second_page["grand_total"], "04:00:00");
}

#[tokio::test]
async fn walks_between_weeks() {
    let state = seeded_state().await;
    call(&state, empty_request("POST", "/timesheet/refresh")).await;

    let (_, next) = call(&state, empty_request("POST", "/timesheet/week/next")).await;
    assert_eq!(next["week"][0]["date"], "2024-05-13");
    assert_eq!(next["week"][1]["label"], "Tue, May 14");
    assert_eq!(next["rows"][2]["cells"][1], "01:00:00");
    assert_eq!(next["grand_total"], "01:00:00");

    let (_, back) = call(&state, empty_request("POST", "/timesheet/week/previous")).await;
    assert_eq!(back["week"][0]["date"], "2024-05-06");

    let (status, current) = call(&state, empty_request("POST", "/timesheet/week/current")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current["week"].as_array().unwrap().len(), 7);
}
