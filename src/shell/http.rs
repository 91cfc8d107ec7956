use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::roles::use_cases::manage_roles::inbound::http as roles_http;
use crate::modules::timesheets::use_cases::resolve_viewer::inbound::http as session_http;
use crate::modules::timesheets::use_cases::view_timesheet::inbound::http as timesheet_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/timesheet", get(timesheet_http::grid))
        .route("/timesheet/refresh", post(timesheet_http::refresh))
        .route("/timesheet/week/previous", post(timesheet_http::previous_week))
        .route("/timesheet/week/next", post(timesheet_http::next_week))
        .route("/timesheet/week/current", post(timesheet_http::current_week))
        .route("/timesheet/page", put(timesheet_http::set_page))
        .route("/timesheet/page-size", put(timesheet_http::set_page_size))
        .route("/roles", get(roles_http::list).post(roles_http::create))
        .route("/roles/{id}", delete(roles_http::delete))
        .route("/roles/{id}/activate", post(roles_http::activate))
        .route("/roles/{id}/deactivate", post(roles_http::deactivate))
        .route(
            "/session",
            put(session_http::put_session).delete(session_http::delete_session),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
