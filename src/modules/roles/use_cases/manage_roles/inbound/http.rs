use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::roles::core::role::RoleId;
use crate::modules::roles::use_cases::manage_roles::handler::RolesError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListRolesParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
pub struct CreateRoleBody {
    pub name: String,
}

#[derive(Deserialize)]
pub struct DeleteRoleParams {
    #[serde(default)]
    pub confirm: bool,
}

fn error_response(error: RolesError) -> Response {
    let status = match error {
        RolesError::NameRequired | RolesError::InvalidLimit => StatusCode::UNPROCESSABLE_ENTITY,
        RolesError::ConfirmationRequired => StatusCode::CONFLICT,
        RolesError::FetchFailed
        | RolesError::CreateFailed
        | RolesError::UpdateFailed
        | RolesError::DeleteFailed => StatusCode::BAD_GATEWAY,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListRolesParams>,
) -> impl IntoResponse {
    match state.roles.show(params.page.unwrap_or(1), params.limit).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateRoleBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.roles.create(&body.name).await {
        Ok(role) => (StatusCode::CREATED, Json(role)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn set_enabled(state: AppState, id: RoleId, enabled: bool) -> Response {
    match state.roles.set_enabled(id, enabled).await {
        Ok(role) => Json(role).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn activate(State(state): State<AppState>, Path(id): Path<RoleId>) -> impl IntoResponse {
    set_enabled(state, id, true).await
}

pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<RoleId>,
) -> impl IntoResponse {
    set_enabled(state, id, false).await
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<RoleId>,
    Query(params): Query<DeleteRoleParams>,
) -> impl IntoResponse {
    match state.roles.delete(id, params.confirm).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error_response(error),
    }
}
