use axum::{Extension, routing::get};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use timesheet_admin::modules::roles::adapters::outbound::roles_http::HttpRolesApi;
use timesheet_admin::modules::roles::use_cases::manage_roles::handler::RoleBoard;
use timesheet_admin::modules::timesheets::adapters::outbound::timesheets_http::{
    HttpProjectCatalog, HttpTimesheetsApi,
};
use timesheet_admin::modules::timesheets::use_cases::resolve_viewer::handler::resolve_viewer;
use timesheet_admin::modules::timesheets::use_cases::view_timesheet::handler::TimesheetBoard;
use timesheet_admin::shared::infrastructure::backend_client::BackendClient;
use timesheet_admin::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use timesheet_admin::shell::config::AppConfig;
use timesheet_admin::shell::graphql::{graphiql, graphql, schema};
use timesheet_admin::shell::http::router;
use timesheet_admin::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let client = BackendClient::new(&config.backend_base_url, config.backend_token.clone());

    let timesheet = Arc::new(TimesheetBoard::new(
        Arc::new(HttpTimesheetsApi::new(client.clone())),
        Arc::new(HttpProjectCatalog::new(client.clone())),
        config.timesheet_settings(),
    ));
    let roles = Arc::new(RoleBoard::new(
        Arc::new(HttpRolesApi::new(client)),
        config.roles_page_size,
    ));
    let session = Arc::new(InMemorySessionStore::new());

    let viewer = resolve_viewer(session.as_ref(), config.context_user.as_ref()).await;
    timesheet.set_viewer(viewer).await;

    if let Err(error) = timesheet.refresh().await {
        tracing::warn!(error = %error, "initial timesheet load failed");
    }
    if let Err(error) = roles.fetch(1).await {
        tracing::warn!(error = %error, "initial roles load failed");
    }

    let state = AppState {
        timesheet,
        roles,
        session,
        context_user: config.context_user.clone(),
    };

    let app = router(state.clone())
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state)));

    tracing::info!(
        backend = %config.backend_base_url,
        timezone = %config.timezone,
        "GraphQL endpoint: http://{}/gql",
        config.bind_addr
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
