use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::timesheets::use_cases::view_timesheet::handler::TimesheetError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SetPageBody {
    pub page: u32,
}

#[derive(Deserialize)]
pub struct SetPageSizeBody {
    pub page_size: u32,
}

fn error_response(error: TimesheetError) -> axum::response::Response {
    let status = match error {
        TimesheetError::LoadFailed(_) => StatusCode::BAD_GATEWAY,
        TimesheetError::InvalidPageSize | TimesheetError::WeekOutOfRange => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

pub async fn grid(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.timesheet.grid().await)
}

pub async fn refresh(State(state): State<AppState>) -> impl IntoResponse {
    match state.timesheet.refresh().await {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn previous_week(State(state): State<AppState>) -> impl IntoResponse {
    match state.timesheet.previous_week().await {
        Ok(_) => Json(state.timesheet.grid().await).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn next_week(State(state): State<AppState>) -> impl IntoResponse {
    match state.timesheet.next_week().await {
        Ok(_) => Json(state.timesheet.grid().await).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn current_week(State(state): State<AppState>) -> impl IntoResponse {
    state.timesheet.current_week().await;
    Json(state.timesheet.grid().await)
}

pub async fn set_page(
    State(state): State<AppState>,
    body: Result<Json<SetPageBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    state.timesheet.set_page(body.page).await;
    Json(state.timesheet.grid().await).into_response()
}

pub async fn set_page_size(
    State(state): State<AppState>,
    body: Result<Json<SetPageSizeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.timesheet.set_page_size(body.page_size).await {
        Ok(()) => Json(state.timesheet.grid().await).into_response(),
        Err(error) => error_response(error),
    }
}
