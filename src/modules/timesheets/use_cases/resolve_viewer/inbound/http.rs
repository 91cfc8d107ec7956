use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::timesheets::use_cases::resolve_viewer::handler::resolve_viewer;
use crate::shared::infrastructure::session_store::SESSION_USER_KEY;
use crate::shell::state::AppState;

async fn apply_viewer(state: &AppState) -> axum::response::Response {
    let viewer = resolve_viewer(state.session.as_ref(), state.context_user.as_ref()).await;
    state.timesheet.set_viewer(viewer.clone()).await;
    Json(viewer).into_response()
}

/// Stores the snapshot as given. A snapshot that is not a valid user is kept
/// and resolves to no viewer.
pub async fn put_session(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> impl IntoResponse {
    let Json(snapshot) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    if let Err(error) = state.session.set(SESSION_USER_KEY, snapshot.to_string()).await {
        tracing::error!(error = %error, "failed to store session user");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    apply_viewer(&state).await
}

pub async fn delete_session(State(state): State<AppState>) -> impl IntoResponse {
    if let Err(error) = state.session.remove(SESSION_USER_KEY).await {
        tracing::error!(error = %error, "failed to clear session user");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    apply_viewer(&state).await
}
