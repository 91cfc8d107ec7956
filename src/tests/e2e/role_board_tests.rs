use crate::modules::roles::adapters::outbound::roles_in_memory::InMemoryRoles;
use crate::modules::timesheets::adapters::outbound::timesheets_in_memory::{
    InMemoryProjectCatalog, InMemoryTimesheets,
};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::roles::roles;
use crate::tests::fixtures::state::app_state;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn state_with(api: InMemoryRoles) -> AppState {
    app_state(
        InMemoryTimesheets::new(),
        InMemoryProjectCatalog::new(Vec::new()),
        api,
    )
}

async fn call(state: &AppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn manages_roles_from_creation_to_deletion() {
    let state = state_with(InMemoryRoles::with_roles(roles(4)));

    let (status, created) = call(
        &state,
        Request::post("/roles")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Auditor"}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (_, deactivated) = call(&state, request("POST", &format!("/roles/{id}/deactivate"))).await;
    assert_eq!(deactivated["is_enabled"], false);
    let view = state.roles.view().await;
    assert!(!view.rows.iter().find(|r| r.id == id).unwrap().is_enabled);

    let (status, _) = call(&state, request("DELETE", &format!("/roles/{id}"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(state.roles.view().await.total, 5);

    let delete = request("DELETE", &format!("/roles/{id}?confirm=true"));
    let (status, after) = call(&state, delete).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["total"], 4);
    let rows = after["rows"].as_array().unwrap();
    assert!(rows.iter().all(|r| r["id"] != id));
}

#[tokio::test]
async fn steps_back_when_the_last_page_empties() {
    let state = state_with(InMemoryRoles::with_roles(roles(21)));

    let (_, last_page) = call(&state, request("GET", "/roles?page=3&limit=10")).await;
    assert_eq!(last_page["page"], 3);
    assert_eq!(last_page["rows"].as_array().unwrap().len(), 1);

    let (_, after) = call(&state, request("DELETE", "/roles/21?confirm=true")).await;
    assert_eq!(after["page"], 2);
    assert_eq!(after["total_pages"], 2);
    assert_eq!(after["rows"][0]["id"], 11);
}

#[tokio::test]
async fn never_steps_below_the_first_page() {
    let state = state_with(InMemoryRoles::with_roles(roles(1)));
    call(&state, request("GET", "/roles")).await;

    let (_, after) = call(&state, request("DELETE", "/roles/1?confirm=true")).await;

    assert_eq!(after["page"], 1);
    assert_eq!(after["total"], 0);
    assert_eq!(
        after["markers"],
        serde_json::json!([{ "kind": "page", "page": 1 }])
    );
}

#[tokio::test]
async fn keeps_the_failure_message_on_the_board() {
    let api = InMemoryRoles::with_roles(roles(2));
    api.fail_writes(true);
    let state = state_with(api);

    let (status, body) = call(&state, request("POST", "/roles/1/activate")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body["error"],
        "Failed to update role status. Please try again."
    );
    assert_eq!(
        state.roles.view().await.error.as_deref(),
        Some("Failed to update role status. Please try again.")
    );
}
